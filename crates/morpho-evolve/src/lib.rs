//! # Morpho Evolve
//!
//! A generational genetic algorithm over genome strings.
//!
//! Genomes are scored by a [`FitnessFunction`](fitness::FitnessFunction),
//! chosen as parents in proportion to their normalized fitness, recombined
//! block-wise on the break symbol and point-mutated.
//!
//! ```rust
//! use morpho_evolve::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//!
//! let config = EvolutionConfig {
//!     population_size: 10,
//!     break_symbol: 'a',
//!     ..EvolutionConfig::default()
//! };
//! let fitness = |g: &str| g.matches("bb").count() as f64;
//! let mut ev = Evolution::new(config, vec!['a', 'b'], fitness, ChaCha20Rng::seed_from_u64(1)).unwrap();
//!
//! let best = ev.iterate();
//! assert_eq!(ev.generation(), 1);
//! assert_eq!(ev.population().len(), 10);
//! assert!(best.fitness >= 0.0);
//! ```

pub mod config;
pub mod engine;
pub mod fitness;
pub mod history;
pub mod metrics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::EvolutionConfig;
    pub use crate::engine::{mutation_count, random_genome, random_population, Champion, Evolution};
    pub use crate::fitness::{FitnessFunction, SurfaceFitness};
    pub use crate::history::{read_history, write_generation, GenerationRecord};
    pub use crate::metrics::EvolutionSnapshot;
}
