//! Print a random genome.

use anyhow::Result;
use morpho::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::config::Config;

pub fn run(length: usize, seed: Option<u64>) -> Result<()> {
    let config = Config::load()?;
    config.alphabet.validate()?;

    let mut rng = match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    let genome = random_genome(&mut rng, &config.alphabet.symbols(), length);
    println!("{genome}");
    Ok(())
}
