//! Grow a genome stored in an evolution history.

use anyhow::{anyhow, Context, Result};
use colored::Colorize;
use morpho::prelude::*;
use std::fs::File;
use std::io::BufReader;

use crate::commands::grow::{grow_and_animate, print_body};
use crate::config::Config;

pub fn run(history: &str, generation: Option<u64>, index: usize, ticks: u64, json: bool) -> Result<()> {
    let file = File::open(history).with_context(|| format!("Failed to open history: {history}"))?;
    let records = read_history(BufReader::new(file))
        .with_context(|| format!("Failed to read history: {history}"))?;
    let genome = select_genome(&records, generation, index)?;

    let config = Config::load()?;
    let morphogenesis = config.morphogenesis()?;

    if !json {
        println!(
            "{} Genome {} of generation {} ({} symbols)",
            "→".blue(),
            index.to_string().cyan(),
            generation.map_or_else(|| "last".to_string(), |g| g.to_string()).cyan(),
            genome.chars().count()
        );
    }
    let body = grow_and_animate(genome, &morphogenesis, ticks);
    print_body(&body, json)
}

/// The `index`-th genome of `generation`, or of the last generation.
fn select_genome(records: &[GenerationRecord], generation: Option<u64>, index: usize) -> Result<&str> {
    let record = match generation {
        Some(g) => records
            .iter()
            .rev()
            .find(|r| r.generation == g)
            .ok_or_else(|| anyhow!("Generation {g} not found in history"))?,
        None => records.last().ok_or_else(|| anyhow!("History is empty"))?,
    };
    record
        .genomes
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| {
            anyhow!(
                "Generation {} has {} genomes, no index {index}",
                record.generation,
                record.genomes.len()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<GenerationRecord> {
        vec![
            GenerationRecord {
                generation: 1,
                genomes: vec!["ab".into(), " n ".into()],
            },
            GenerationRecord {
                generation: 2,
                genomes: vec!["ww".into()],
            },
        ]
    }

    #[test]
    fn selects_by_generation_and_index() {
        assert_eq!(select_genome(&records(), Some(1), 1).unwrap(), " n ");
        assert_eq!(select_genome(&records(), None, 0).unwrap(), "ww");
    }

    #[test]
    fn missing_entries_are_errors() {
        assert!(select_genome(&records(), Some(3), 0).is_err());
        assert!(select_genome(&records(), Some(2), 1).is_err());
        assert!(select_genome(&[], None, 0).is_err());
    }
}
