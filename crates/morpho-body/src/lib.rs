//! # Morpho Body
//!
//! Grows a genome into a tree of rectangular cells and lays the tree out
//! in the plane.
//!
//! ```rust
//! use morpho_body::prelude::*;
//!
//! let m = Morphogenesis::default();
//! let mut body = Body::grow("  nsew  nsew  nsew", &m);
//! assert_eq!(body.root().unwrap().generation, 0);
//!
//! // Animate one tick
//! body.update();
//! ```

pub mod body;
pub mod cell;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::body::{Body, BodyStats, Bounds};
    pub use crate::cell::{Cell, CellId, Geometry, StemSlot, Stress, Traits};
    pub use morpho_core::prelude::*;
}
