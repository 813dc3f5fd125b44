//! Parameters of the genetic algorithm.

use morpho_core::error::{MorphoError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Number of genomes per generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Length of the random genomes of the first generation.
    #[serde(default = "default_initial_code_length")]
    pub initial_code_length: usize,
    /// Symbol separating the blocks exchanged by recombination.
    #[serde(default = "default_break_symbol")]
    pub break_symbol: char,
    /// Expected fraction of symbols mutated per offspring.
    #[serde(default = "default_mutation_rate")]
    pub mutation_rate: f64,
    /// Parents drawn for every offspring.
    #[serde(default = "default_parents_per_child")]
    pub parents_per_child: usize,
    /// Fraction of the fittest genomes carried over unchanged.
    #[serde(default = "default_elders_ratio")]
    pub elders_ratio: f64,
    /// Fitness multiplier applied to the longest genome of a generation.
    #[serde(default = "default_length_decay")]
    pub length_decay: f64,
}

fn default_population_size() -> usize { 100 }
fn default_initial_code_length() -> usize { 2 }
fn default_break_symbol() -> char { ' ' }
fn default_mutation_rate() -> f64 { 0.01 }
fn default_parents_per_child() -> usize { 2 }
fn default_elders_ratio() -> f64 { 0.0 }
fn default_length_decay() -> f64 { 0.8 }

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: default_population_size(),
            initial_code_length: default_initial_code_length(),
            break_symbol: default_break_symbol(),
            mutation_rate: default_mutation_rate(),
            parents_per_child: default_parents_per_child(),
            elders_ratio: default_elders_ratio(),
            length_decay: default_length_decay(),
        }
    }
}

impl EvolutionConfig {
    /// Check the parameters against the symbols genomes are written in.
    pub fn validate(&self, symbols: &[char]) -> Result<()> {
        if symbols.is_empty() {
            return Err(MorphoError::invalid_config(
                "symbols",
                "[]",
                "genomes need at least one symbol",
            ));
        }
        if self.population_size == 0 {
            return Err(MorphoError::invalid_config(
                "population_size",
                "0",
                "must be positive",
            ));
        }
        if !symbols.contains(&self.break_symbol) {
            return Err(MorphoError::invalid_config(
                "break_symbol",
                format!("{:?}", self.break_symbol),
                "must be one of the genome symbols, or genomes never split into blocks",
            ));
        }
        if self.parents_per_child == 0 {
            return Err(MorphoError::invalid_config(
                "parents_per_child",
                "0",
                "must be positive",
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(MorphoError::out_of_range("mutation_rate", 0.0, 1.0, self.mutation_rate));
        }
        if !(0.0..=1.0).contains(&self.elders_ratio) {
            return Err(MorphoError::out_of_range("elders_ratio", 0.0, 1.0, self.elders_ratio));
        }
        if !(self.length_decay > 0.0 && self.length_decay <= 1.0) {
            return Err(MorphoError::out_of_range("length_decay", 0.0, 1.0, self.length_decay));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AB: [char; 2] = ['a', 'b'];

    fn config() -> EvolutionConfig {
        EvolutionConfig {
            break_symbol: 'a',
            ..EvolutionConfig::default()
        }
    }

    #[test]
    fn defaults_are_valid_for_the_default_alphabet() {
        let symbols = morpho_core::alphabet::Alphabet::default().symbols();
        EvolutionConfig::default().validate(&symbols).unwrap();
    }

    #[test]
    fn rejects_empty_alphabet() {
        assert!(config().validate(&[]).is_err());
    }

    #[test]
    fn rejects_empty_population() {
        let c = EvolutionConfig {
            population_size: 0,
            ..config()
        };
        assert!(c.validate(&AB).is_err());
    }

    #[test]
    fn rejects_foreign_break_symbol() {
        let c = EvolutionConfig {
            break_symbol: 'z',
            ..config()
        };
        assert!(c.validate(&AB).is_err());
    }

    #[test]
    fn rejects_out_of_range_rates() {
        let c = EvolutionConfig {
            mutation_rate: 1.5,
            ..config()
        };
        assert!(c.validate(&AB).is_err());
        let c = EvolutionConfig {
            length_decay: 0.0,
            ..config()
        };
        assert!(c.validate(&AB).is_err());
    }
}
