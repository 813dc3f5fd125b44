//! Grow a genome into a body and print it.

use anyhow::Result;
use colored::Colorize;
use morpho::prelude::*;

use crate::config::Config;

pub fn run(genome: &str, ticks: u64, json: bool) -> Result<()> {
    let config = Config::load()?;
    let morphogenesis = config.morphogenesis()?;
    let body = grow_and_animate(genome, &morphogenesis, ticks);
    print_body(&body, json)
}

pub fn grow_and_animate(genome: &str, morphogenesis: &Morphogenesis, ticks: u64) -> Body {
    let mut body = Body::grow(genome, morphogenesis);
    for _ in 0..ticks {
        body.update();
    }
    body
}

/// Print a body as JSON, or as a summary followed by one line per cell.
pub fn print_body(body: &Body, json: bool) -> Result<()> {
    if json {
        println!("{}", body.to_json()?);
        return Ok(());
    }

    let stats = body.stats();
    println!("{}", "Body".bold());
    println!("  Genome length: {}", stats.genome_length.to_string().cyan());
    println!("  Cells:         {}", stats.cells.to_string().cyan());
    println!("  Generations:   {}", stats.generations.to_string().cyan());
    println!("  Leaves:        {}", stats.leaves.to_string().cyan());
    println!("  Total area:    {:.3}", stats.total_area);
    println!(
        "  Bounds:        {:.3} x {:.3}",
        stats.bounds.width(),
        stats.bounds.height()
    );
    println!();

    println!(
        "  {:>4} {:>4} {:>6} {:>6} {:>9} {:>9} {:>7} {:>7} {:>7}",
        "id", "gen", "parent", "target", "x", "y", "angle", "width", "height"
    );
    for line in cell_lines(body) {
        println!("  {line}");
    }
    Ok(())
}

fn cell_lines(body: &Body) -> Vec<String> {
    body.cells()
        .iter()
        .map(|cell| {
            let g = &cell.geometry;
            format!(
                "{:>4} {:>4} {:>6} {:>6} {:>9.3} {:>9.3} {:>7.2} {:>7.3} {:>7.3}",
                cell.id.0,
                cell.generation,
                cell.parent.map(|p| p.0.to_string()).unwrap_or_else(|| "-".into()),
                format!("{:?}", cell.target.as_str()),
                g.center.x,
                g.center.y,
                g.angle,
                g.width,
                g.height,
            )
        })
        .collect()
}
