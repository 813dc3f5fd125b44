//! Morpho Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use morpho_core::prelude::*;
//! ```

pub use crate::alphabet::{Alphabet, Promoters, StemSymbols};
pub use crate::config::GrowthConfig;
pub use crate::expression::{express, Expression};
pub use crate::morphogenesis::Morphogenesis;
pub use crate::translator::{Hierarchy, TargetTable, Translator};
pub use crate::types::{Morphogen, Position, Stem, StemAnchor, TargetSequence};

// Re-export error types
pub use crate::error::{ConfigError, HistoryError, MorphoError, Result};
