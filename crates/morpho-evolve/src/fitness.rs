//! Fitness functions scoring genomes for selection.
//!
//! The engine only needs a total function from genome to score. The
//! [`SurfaceFitness`] shipped here grows the body and rewards many cells
//! of similar size spread over a wide area.

use morpho_body::body::Body;
use morpho_core::morphogenesis::Morphogenesis;

/// Scores a genome. Higher is fitter; the value should be finite.
pub trait FitnessFunction {
    fn evaluate(&self, genome: &str) -> f64;
}

impl<F> FitnessFunction for F
where
    F: Fn(&str) -> f64,
{
    fn evaluate(&self, genome: &str) -> f64 {
        self(genome)
    }
}

/// Cell surface over body extension the surface fitness aims for.
const IDEAL_SURFACE_RATIO: f64 = 0.25;
/// Cells worth one point of fitness.
const CELLS_PER_POINT: f64 = 30.0;
/// Genome symbols costing one point of fitness.
const SYMBOLS_PER_PENALTY: f64 = 1000.0;

/// Selects for spread bodies of many, similarly sized cells.
///
/// score = (cells/30 − length/1000) / (ratio − 0.25)² / (1 + size variance)
///
/// where `ratio` is the total cell surface over the area spanned by the cell
/// centers. Bodies whose centers span no area score −1.
#[derive(Debug, Clone, Default)]
pub struct SurfaceFitness {
    morphogenesis: Morphogenesis,
}

impl SurfaceFitness {
    pub fn new(morphogenesis: Morphogenesis) -> Self {
        Self { morphogenesis }
    }

    pub fn morphogenesis(&self) -> &Morphogenesis {
        &self.morphogenesis
    }

    /// Score an already grown body.
    pub fn score_body(&self, body: &Body) -> f64 {
        let extension = body.bounds().extension();
        if extension == 0.0 {
            return -1.0;
        }

        let sizes: Vec<f64> = body.cells().iter().map(|c| c.geometry.area()).collect();
        let n = sizes.len() as f64;
        let surface: f64 = sizes.iter().sum();
        let surface_sq: f64 = sizes.iter().map(|s| s * s).sum();
        let variance = 1.0 + surface_sq - surface * surface / n;

        let ratio = surface / extension;
        let deviation = (ratio - IDEAL_SURFACE_RATIO).powi(2).max(f64::EPSILON);

        let length = body.genome().chars().count() as f64;
        (body.len() as f64 / CELLS_PER_POINT - length / SYMBOLS_PER_PENALTY) / deviation / variance
    }
}

impl FitnessFunction for SurfaceFitness {
    fn evaluate(&self, genome: &str) -> f64 {
        let body = Body::grow(genome, &self.morphogenesis);
        self.score_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_fitness_functions() {
        let f = |g: &str| g.matches("bb").count() as f64;
        assert_eq!(f.evaluate("bbabb"), 2.0);
    }

    #[test]
    fn lone_cell_scores_minus_one() {
        let fitness = SurfaceFitness::default();
        assert_eq!(fitness.evaluate(""), -1.0);
    }

    #[test]
    fn straight_column_spans_no_area() {
        // Root and one child stacked on the y axis: zero width.
        let fitness = SurfaceFitness::default();
        assert_eq!(fitness.evaluate("  nsew  nsew  nsew"), -1.0);
    }

    #[test]
    fn surface_score_is_finite() {
        let fitness = SurfaceFitness::default();
        let genome = "  nsew<nnnnnnnn>eeeeeeee  nsew  nsew rl";
        assert!(fitness.evaluate(genome).is_finite());
    }
}
