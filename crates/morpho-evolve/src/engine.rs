//! Generational genetic algorithm over genome strings.
//!
//! Each iteration:
//! 1. Every genome is scored by the fitness function
//! 2. Scores are min-max normalized and discounted for genome length
//! 3. A new population is bred: fitness-weighted parents contribute blocks
//!    of their genomes, and the offspring receives point mutations
//! 4. The generation counter advances

use crate::config::EvolutionConfig;
use crate::fitness::FitnessFunction;
use crate::metrics::EvolutionSnapshot;
use morpho_core::error::{MorphoError, Result};
use rand::seq::index;
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// The fittest genome of a generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Champion {
    pub fitness: f64,
    pub genome: String,
}

/// Random genomes of `code_length` symbols.
pub fn random_population<R: Rng + ?Sized>(
    rng: &mut R,
    symbols: &[char],
    code_length: usize,
    size: usize,
) -> Vec<String> {
    (0..size).map(|_| random_genome(rng, symbols, code_length)).collect()
}

/// A random genome of `length` symbols.
pub fn random_genome<R: Rng + ?Sized>(rng: &mut R, symbols: &[char], length: usize) -> String {
    if symbols.is_empty() {
        return String::new();
    }
    (0..length)
        .map(|_| symbols[rng.gen_range(0..symbols.len())])
        .collect()
}

/// Number of point mutations for a genome: the expected count, at least one.
pub fn mutation_count(length: usize, mutation_rate: f64) -> usize {
    ((length as f64 * mutation_rate).floor() as usize).max(1)
}

/// Population state and the operators that breed it.
pub struct Evolution<F, R = ChaCha20Rng> {
    config: EvolutionConfig,
    symbols: Vec<char>,
    fitness_fn: F,
    population: Vec<String>,
    /// Normalized, length-discounted scores, index-aligned with `population`.
    fitness: Vec<f64>,
    /// Scores as returned by the fitness function.
    raw_fitness: Vec<f64>,
    generation: u64,
    rng: R,
}

impl<F: FitnessFunction, R: Rng> Evolution<F, R> {
    /// Start from a random population as described by `config`.
    pub fn new(config: EvolutionConfig, symbols: Vec<char>, fitness_fn: F, mut rng: R) -> Result<Self> {
        config.validate(&symbols)?;
        let population = random_population(
            &mut rng,
            &symbols,
            config.initial_code_length,
            config.population_size,
        );
        Self::with_population(config, symbols, fitness_fn, population, rng)
    }

    /// Start from a given population; its size overrides `config.population_size`.
    pub fn with_population(
        mut config: EvolutionConfig,
        symbols: Vec<char>,
        fitness_fn: F,
        population: Vec<String>,
        rng: R,
    ) -> Result<Self> {
        if population.is_empty() {
            return Err(MorphoError::invalid_config(
                "population",
                "[]",
                "at least one genome is required",
            ));
        }
        config.population_size = population.len();
        config.validate(&symbols)?;

        let size = population.len();
        Ok(Self {
            config,
            symbols,
            fitness_fn,
            population,
            fitness: vec![0.0; size],
            raw_fitness: vec![0.0; size],
            generation: 0,
            rng,
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn population(&self) -> &[String] {
        &self.population
    }

    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    pub fn raw_fitness(&self) -> &[f64] {
        &self.raw_fitness
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fitness_fn(&self) -> &F {
        &self.fitness_fn
    }

    /// Score the population.
    ///
    /// fitness = (raw − min) / (max − min) × length_decay^(length / max length)
    ///
    /// A flat landscape (max = min) uses a scale of 1, which leaves every
    /// genome at 0.
    pub fn test_pop(&mut self) -> &[f64] {
        let mut raw: Vec<f64> = self
            .population
            .iter()
            .map(|g| self.fitness_fn.evaluate(g))
            .collect();

        if raw.iter().any(|f| !f.is_finite()) {
            let floor = raw
                .iter()
                .copied()
                .filter(|f| f.is_finite())
                .fold(None, |m: Option<f64>, f| Some(m.map_or(f, |m| m.min(f))))
                .unwrap_or(0.0);
            warn!(
                generation = self.generation,
                floor, "fitness function returned non-finite scores"
            );
            for f in raw.iter_mut().filter(|f| !f.is_finite()) {
                *f = floor;
            }
        }

        let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
        let scale = if max != min { 1.0 / (max - min) } else { 1.0 };

        let lengths: Vec<usize> = self.population.iter().map(|g| g.chars().count()).collect();
        let max_length = lengths.iter().copied().max().unwrap_or(0);
        let per_symbol = if max_length > 0 { 1.0 / max_length as f64 } else { 0.0 };

        self.fitness = raw
            .iter()
            .zip(&lengths)
            .map(|(f, l)| (f - min) * scale * self.config.length_decay.powf(*l as f64 * per_symbol))
            .collect();
        self.raw_fitness = raw;
        &self.fitness
    }

    fn pick_fit_parent_index(&mut self) -> usize {
        let total: f64 = self.fitness.iter().sum();
        if total > 0.0 && total.is_finite() {
            let mut r = self.rng.gen::<f64>() * total;
            for (i, f) in self.fitness.iter().enumerate() {
                r -= f;
                if r <= 0.0 {
                    return i;
                }
            }
        }
        self.rng.gen_range(0..self.population.len())
    }

    /// Roulette-wheel selection.
    ///
    /// Draws `r` in `[0, total)` and walks the population subtracting
    /// fitness until `r` is no longer positive. A population without fitness,
    /// or a walk that runs out through rounding, falls back to a uniform pick.
    pub fn pick_fit_parent(&mut self) -> String {
        let i = self.pick_fit_parent_index();
        self.population[i].clone()
    }

    /// Breed one offspring from `parents` fitness-weighted draws.
    ///
    /// Each parent is split on the break symbol and contributes a random
    /// selection of `blocks / parents` of its blocks (at least one).
    pub fn recombine_from_parents(&mut self, parents: usize) -> String {
        let parents = parents.max(1);
        let break_symbol = self.config.break_symbol;
        let mut son: Vec<String> = Vec::new();

        for _ in 0..parents {
            let parent = self.pick_fit_parent();
            let blocks: Vec<&str> = parent.split(break_symbol).collect();
            let amount = (blocks.len() / parents).max(1);
            for i in index::sample(&mut self.rng, blocks.len(), amount).into_iter() {
                son.push(blocks[i].to_string());
            }
        }

        son.join(break_symbol.to_string().as_str())
    }

    /// Replace `mutation_count` randomly drawn symbols with random symbols.
    ///
    /// Positions are drawn independently and may repeat. An empty genome has
    /// nothing to mutate and is returned as is.
    pub fn add_random_errors(&mut self, genome: &str, mutation_rate: f64) -> String {
        let mut symbols: Vec<char> = genome.chars().collect();
        if symbols.is_empty() {
            return String::new();
        }
        for _ in 0..mutation_count(symbols.len(), mutation_rate) {
            let at = self.rng.gen_range(0..symbols.len());
            symbols[at] = self.symbols[self.rng.gen_range(0..self.symbols.len())];
        }
        symbols.into_iter().collect()
    }

    /// Indices of the population, fittest first; ties go to the
    /// lexicographically largest genome.
    fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.population.len()).collect();
        order.sort_by(|&a, &b| {
            self.fitness[b]
                .partial_cmp(&self.fitness[a])
                .unwrap_or(Ordering::Equal)
                .then_with(|| self.population[b].cmp(&self.population[a]))
        });
        order
    }

    /// Replace the population with a bred one of the same size.
    ///
    /// The `elders_ratio` fittest genomes survive unchanged; the rest are
    /// offspring. Returns the fittest genome of the generation just scored.
    pub fn move_to_next_generation(&mut self) -> Champion {
        let size = self.population.len();
        let elders_cnt = ((size as f64 * self.config.elders_ratio).floor() as usize).min(size);
        let youths_cnt = size - elders_cnt;

        let ranking = self.ranking();
        let best = ranking[0];
        let champion = Champion {
            fitness: self.fitness[best],
            genome: self.population[best].clone(),
        };

        let mut next: Vec<String> = ranking[..elders_cnt]
            .iter()
            .map(|&i| self.population[i].clone())
            .collect();
        for _ in 0..youths_cnt {
            let child = self.recombine_from_parents(self.config.parents_per_child);
            next.push(self.add_random_errors(&child, self.config.mutation_rate));
        }

        debug!(
            generation = self.generation,
            elders = elders_cnt,
            youths = youths_cnt,
            best_fitness = champion.fitness,
            best_length = champion.genome.len(),
            "bred next generation"
        );

        self.population = next;
        self.fitness = vec![0.0; size];
        self.raw_fitness = vec![0.0; size];
        self.generation += 1;
        champion
    }

    /// Score the population and breed the next one.
    pub fn iterate(&mut self) -> Champion {
        self.test_pop();
        self.move_to_next_generation()
    }

    /// Summary of the population as last scored.
    pub fn snapshot(&self) -> EvolutionSnapshot {
        EvolutionSnapshot::compute(self.generation, &self.population, &self.fitness, &self.raw_fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn count_bb(genome: &str) -> f64 {
        genome.matches("bb").count() as f64
    }

    fn ab_config(size: usize) -> EvolutionConfig {
        EvolutionConfig {
            population_size: size,
            break_symbol: 'a',
            ..EvolutionConfig::default()
        }
    }

    fn engine(population: Vec<&str>) -> Evolution<fn(&str) -> f64> {
        Evolution::with_population(
            ab_config(population.len()),
            vec!['a', 'b'],
            count_bb as fn(&str) -> f64,
            population.into_iter().map(String::from).collect(),
            ChaCha20Rng::seed_from_u64(42),
        )
        .unwrap()
    }

    #[test]
    fn normalization_spans_zero_to_one() {
        let mut ev = engine(vec!["a", "bb", "bbbb"]);
        let fitness = ev.test_pop().to_vec();
        assert_eq!(fitness[0], 0.0);
        // middle genome: raw 1 of range 0..2, length 2 of max 4
        assert!((fitness[1] - 0.5 * 0.8f64.powf(0.5)).abs() < 1e-12);
        assert!((fitness[2] - 0.8).abs() < 1e-12);
        assert_eq!(ev.raw_fitness(), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn flat_fitness_does_not_divide_by_zero() {
        let mut ev = engine(vec!["ab", "ba", "aa"]);
        let fitness = ev.test_pop().to_vec();
        assert_eq!(fitness.len(), 3);
        assert!(fitness.iter().all(|f| *f == 0.0));
        // Uniform fallback still yields a parent.
        let parent = ev.pick_fit_parent();
        assert!(ev.population().contains(&parent));
    }

    #[test]
    fn empty_genomes_do_not_divide_by_zero() {
        let mut ev = engine(vec!["", ""]);
        assert!(ev.test_pop().iter().all(|f| f.is_finite()));
        let child = ev.recombine_from_parents(2);
        // One empty block from each parent, joined by the break symbol.
        assert_eq!(child, "a");
    }

    #[test]
    fn roulette_only_picks_fit_genomes() {
        let mut ev = engine(vec!["a", "bbbb", "a"]);
        ev.test_pop();
        for _ in 0..50 {
            assert_eq!(ev.pick_fit_parent(), "bbbb");
        }
    }

    #[test]
    fn zero_draw_stops_at_first_bucket() {
        use rand::rngs::mock::StepRng;
        let mut ev = Evolution::with_population(
            ab_config(3),
            vec!['a', 'b'],
            count_bb as fn(&str) -> f64,
            vec!["a".into(), "bb".into(), "bb".into()],
            StepRng::new(0, 0),
        )
        .unwrap();
        ev.test_pop();
        assert_eq!(ev.fitness()[0], 0.0);
        // A draw of 0 is already non-positive at the first genome.
        assert_eq!(ev.pick_fit_parent(), "a");
    }

    #[test]
    fn tied_champion_is_lexicographically_largest() {
        let mut ev = engine(vec!["ab", "ba", "aa"]);
        ev.test_pop();
        assert!(ev.fitness().iter().all(|f| *f == 0.0));
        let best = ev.move_to_next_generation();
        assert_eq!(best.genome, "ba");

        // Fitness still comes before symbol order.
        let mut ev = engine(vec!["b", "abb"]);
        ev.test_pop();
        assert_eq!(ev.move_to_next_generation().genome, "abb");
    }

    #[test]
    fn recombination_of_single_block_parents() {
        let mut ev = engine(vec!["bbb", "bb"]);
        ev.test_pop();
        let child = ev.recombine_from_parents(2);
        assert!(!child.is_empty());
        let blocks: Vec<&str> = child.split('a').collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|b| *b == "bbb" || *b == "bb"));
    }

    #[test]
    fn recombination_samples_half_the_blocks_per_parent() {
        let mut ev = engine(vec!["bab", "bab"]);
        // parents "b a b": 2 blocks each, one sampled from each
        let child = ev.recombine_from_parents(2);
        assert_eq!(child, "bab");
        let mut ev = engine(vec!["babababbb"]);
        // 4 blocks, 2 from each of two draws of the same parent
        let child = ev.recombine_from_parents(2);
        assert_eq!(child.split('a').count(), 4);
    }

    #[test]
    fn short_genomes_get_one_mutation() {
        assert_eq!(mutation_count(5, 0.01), 1);
        assert_eq!(mutation_count(0, 0.01), 1);
        assert_eq!(mutation_count(1000, 0.01), 10);

        let mut ev = Evolution::with_population(
            EvolutionConfig {
                break_symbol: 'b',
                ..EvolutionConfig::default()
            },
            vec!['b'],
            count_bb as fn(&str) -> f64,
            vec!["aaaaa".to_string()],
            ChaCha20Rng::seed_from_u64(1),
        )
        .unwrap();
        let mutated = ev.add_random_errors("aaaaa", 0.01);
        assert_eq!(mutated.len(), 5);
        assert_eq!(mutated.matches('b').count(), 1);
    }

    #[test]
    fn empty_genome_is_not_mutated() {
        let mut ev = engine(vec!["ab"]);
        assert_eq!(ev.add_random_errors("", 0.5), "");
    }

    #[test]
    fn next_generation_keeps_size_and_returns_best() {
        let mut ev = engine(vec!["a", "bbabb", "bb", "ab"]);
        ev.test_pop();
        let best = ev.move_to_next_generation();
        assert_eq!(best.genome, "bbabb");
        assert_eq!(ev.population().len(), 4);
        assert_eq!(ev.fitness().len(), 4);
        assert_eq!(ev.generation(), 1);
    }

    #[test]
    fn elders_survive_unchanged() {
        let mut ev = Evolution::with_population(
            EvolutionConfig {
                elders_ratio: 0.5,
                ..ab_config(4)
            },
            vec!['a', 'b'],
            count_bb as fn(&str) -> f64,
            vec!["a".into(), "bbbbbb".into(), "bbb".into(), "ab".into()],
            ChaCha20Rng::seed_from_u64(9),
        )
        .unwrap();
        ev.test_pop();
        ev.move_to_next_generation();
        assert_eq!(&ev.population()[..2], &["bbbbbb".to_string(), "bbb".to_string()]);
    }

    #[test]
    fn same_seed_same_history() {
        let run = || {
            let mut ev = Evolution::new(
                ab_config(12),
                vec!['a', 'b'],
                count_bb as fn(&str) -> f64,
                ChaCha20Rng::seed_from_u64(77),
            )
            .unwrap();
            for _ in 0..10 {
                ev.iterate();
            }
            ev.population().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn rejects_empty_population() {
        let result = Evolution::with_population(
            ab_config(1),
            vec!['a', 'b'],
            count_bb as fn(&str) -> f64,
            vec![],
            ChaCha20Rng::seed_from_u64(0),
        );
        assert!(result.is_err());
    }
}
