//! # Morpho
//!
//! Artificial embryology: symbolic genomes grow into bodies of rectangular
//! cells, and a genetic algorithm searches for genomes whose bodies score well.
//!
//! ## Quick Start
//!
//! ```rust
//! use morpho::prelude::*;
//!
//! // Grow a body from a genome
//! let m = Morphogenesis::default();
//! let body = Body::grow("  nsew  nsew  nsew", &m);
//! println!("{} cells over {} generations", body.len(), body.max_generation());
//!
//! // Score it
//! let fitness = SurfaceFitness::new(m);
//! let score = fitness.score_body(&body);
//! assert!(score.is_finite());
//! ```
//!
//! ## Architecture
//!
//! - [`morpho_core`] - Alphabet, expression, target-sequence translation
//! - [`morpho_body`] - Cell tree growth, layout and animation
//! - [`morpho_evolve`] - Genetic algorithm, fitness, population history
//!
//! ## Key Concepts
//!
//! | Concept | What It Is |
//! |---------|------------|
//! | Morphogen | A symbol whose count in an expressed region drives growth |
//! | Target sequence | Two symbols that open the genome regions a cell expresses |
//! | Stem | Left, top or right attachment point of a child cell |
//! | Hierarchy | Morphogens ordered by strength, mapped to a child's target |
//! | Gemmation | Creating a child cell at a stem that crossed the threshold |

// Re-export all subcrates
pub use morpho_body as body;
pub use morpho_core as core;
pub use morpho_evolve as evolve;

/// Prelude module for convenient imports.
///
/// ```rust
/// use morpho::prelude::*;
/// ```
pub mod prelude {
    pub use morpho_body::prelude::*;
    pub use morpho_evolve::prelude::*;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
