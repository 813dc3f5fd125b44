//! CLI command implementations.

pub mod init;
pub mod evolve;
pub mod grow;
pub mod show;
pub mod random;
