//! Per-generation metrics for evolution runs.
//!
//! Tracks fitness, genome length and population diversity across
//! generations.

use serde::Serialize;
use std::collections::HashSet;

/// Metrics for one scored generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvolutionSnapshot {
    pub generation: u64,
    pub population: usize,
    /// Mean normalized fitness.
    pub mean_fitness: f64,
    /// Best normalized fitness.
    pub max_fitness: f64,
    /// Mean score as returned by the fitness function.
    pub mean_raw_fitness: f64,
    /// Best score as returned by the fitness function.
    pub max_raw_fitness: f64,
    /// Mean genome length in symbols.
    pub mean_length: f64,
    /// Fraction of distinct genomes.
    pub diversity: f64,
}

impl EvolutionSnapshot {
    pub fn compute(generation: u64, population: &[String], fitness: &[f64], raw_fitness: &[f64]) -> Self {
        Self {
            generation,
            population: population.len(),
            mean_fitness: mean(fitness),
            max_fitness: max(fitness),
            mean_raw_fitness: mean(raw_fitness),
            max_raw_fitness: max(raw_fitness),
            mean_length: mean(&population.iter().map(|g| g.chars().count() as f64).collect::<Vec<_>>()),
            diversity: diversity(population),
        }
    }
}

/// Fraction of distinct genomes; 0 for an empty population.
pub fn diversity(population: &[String]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&str> = population.iter().map(String::as_str).collect();
    distinct.len() as f64 / population.len() as f64
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(None, |m: Option<f64>, v| Some(m.map_or(v, |m| m.max(v)))).unwrap_or(0.0)
}
