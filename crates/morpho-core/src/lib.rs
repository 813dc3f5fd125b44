//! # Morpho Core
//!
//! Alphabet, expression and translation: the part of morphogenesis that
//! reads a genome.
//!
//! - **Alphabet** - code morphogens, stem symbols and promoters
//! - **Expression** - decode the genome regions a target sequence opens
//! - **Translator** - map morphogen hierarchies to the target sequences of new cells
//!
//! ## Quick Start
//!
//! ```rust
//! use morpho_core::prelude::*;
//!
//! let m = Morphogenesis::default();
//! let target = TargetSequence::new('<', '<');
//! let expression = m.express("ww<<nnnn^ss nn", &target);
//! assert_eq!(expression.count('n'), 4);
//! assert_eq!(expression.stem_total(Stem::Top), 6);
//! ```

pub mod alphabet;
pub mod config;
pub mod error;
pub mod expression;
pub mod morphogenesis;
pub mod prelude;
pub mod translator;
pub mod types;
