//! Evolve genomes for spread, many-celled bodies.

use anyhow::{Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use morpho::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;

pub fn run(
    generations: Option<u64>,
    seed: Option<u64>,
    output: Option<String>,
    verbose: bool,
) -> Result<()> {
    let config = Config::load()?;
    let morphogenesis = config.morphogenesis()?;
    let generations = generations.unwrap_or(config.run.generations);
    let output = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_history_path(&config.run.history_prefix));

    let rng = match seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    let mut ev = Evolution::new(
        config.evolution.clone(),
        morphogenesis.alphabet().symbols(),
        SurfaceFitness::new(morphogenesis.clone()),
        rng,
    )
    .context("Invalid [evolution] configuration")?;

    let file = File::create(&output)
        .with_context(|| format!("Failed to create history: {}", output.display()))?;
    let mut out = BufWriter::new(file);

    println!(
        "{} Evolving {} genomes for {} generations...",
        "→".blue(),
        ev.population().len().to_string().cyan(),
        generations.to_string().cyan()
    );

    let pb = ProgressBar::new(generations);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} generations {msg}")?
            .progress_chars("#>-"),
    );

    let mut last: Option<Champion> = None;
    for _ in 0..generations {
        let champion = ev.iterate();
        let body = Body::grow(champion.genome.as_str(), &morphogenesis);

        info!(
            generation = ev.generation(),
            genome_length = champion.genome.chars().count(),
            cells = body.len(),
            "generation done"
        );
        if verbose {
            pb.println(format!(
                "generation:{:3}  genome length:{}  cells:{}",
                ev.generation(),
                champion.genome.chars().count(),
                body.len()
            ));
        }
        pb.set_message(format!("{} cells", body.len()));

        write_generation(&mut out, ev.generation(), ev.population())
            .with_context(|| format!("Failed to write history: {}", output.display()))?;

        last = Some(champion);
        pb.inc(1);
    }
    pb.finish_with_message("done");

    println!();
    println!("{} Evolution complete!", "✓".green().bold());
    println!("  History: {}", output.display().to_string().cyan());
    if let Some(champion) = last {
        let body = Body::grow(champion.genome.as_str(), &morphogenesis);
        println!(
            "  Best of generation {}: {} symbols, {} cells",
            (ev.generation() - 1).to_string().yellow(),
            champion.genome.chars().count().to_string().yellow(),
            body.len().to_string().green()
        );
    }

    Ok(())
}

/// `<prefix><unix seconds>` in the current directory.
fn default_history_path(prefix: &str) -> PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{prefix}{secs}"))
}
