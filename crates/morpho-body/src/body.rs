//! Body: a clump of cells sharing the same genome.
//!
//! Growth:
//! 1. The root expresses the target sequence occurring most often in the genome
//! 2. Generation by generation, every pending stem gems a child cell
//! 3. Growth stops when a generation adds no cells or the cell limit is hit
//! 4. Stems still pending are cleared, and the body is laid out
//!
//! Cells live in an arena owned by the body; parents and children refer to
//! each other by [`CellId`].

use crate::cell::{Cell, CellId, StemSlot};
use morpho_core::morphogenesis::Morphogenesis;
use morpho_core::types::{Position, Stem};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    genome: String,
    cells: Vec<Cell>,
    cells_limit: usize,
    /// Code morphogens that drive the animation of every cell.
    stress_drivers: Vec<char>,
}

/// Axis-aligned box around the cell centers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Position,
    pub max: Position,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Area spanned by the cell centers.
    pub fn extension(&self) -> f64 {
        self.width() * self.height()
    }

    pub fn center(&self) -> Position {
        Position::new((self.min.x + self.max.x) / 2.0, (self.min.y + self.max.y) / 2.0)
    }
}

/// Statistics about a body.
#[derive(Debug, Clone, Serialize)]
pub struct BodyStats {
    pub cells: usize,
    pub generations: u32,
    pub leaves: usize,
    pub genome_length: usize,
    pub total_area: f64,
    pub bounds: Bounds,
}

impl Body {
    /// Grow and lay out the body encoded by `genome`.
    pub fn grow(genome: impl Into<String>, morphogenesis: &Morphogenesis) -> Self {
        let genome = genome.into();
        let cells_limit = morphogenesis.growth().cells_limit;
        let mut body = Body {
            cells: Vec::with_capacity(cells_limit.min(64)),
            cells_limit,
            stress_drivers: morphogenesis.alphabet().code_morphogens.clone(),
            genome,
        };

        let seed = morphogenesis.strongest_target(&body.genome);
        let root = Cell::new(CellId(0), seed, None, &body.genome, morphogenesis);
        body.cells.push(root);

        let mut layer = vec![CellId(0)];
        while !layer.is_empty() && !body.is_full() {
            let mut next = Vec::new();
            for id in layer {
                next.extend(body.gem(id, morphogenesis));
            }
            layer = next;
        }

        body.clear_pending();
        body.layout();

        debug!(
            cells = body.cells.len(),
            generations = body.max_generation(),
            genome_length = body.genome.len(),
            "body grown"
        );
        body
    }

    fn is_full(&self) -> bool {
        self.cells.len() >= self.cells_limit
    }

    /// Create a child at every pending stem of `id`, while room remains.
    fn gem(&mut self, id: CellId, morphogenesis: &Morphogenesis) -> Vec<CellId> {
        let mut born = Vec::new();
        for stem in Stem::ALL {
            if self.is_full() {
                break;
            }
            let target = match &self.cells[id.0].stems[stem.index()] {
                StemSlot::Pending(target) => target.clone(),
                _ => continue,
            };
            let child_id = CellId(self.cells.len());
            let child = Cell::new(child_id, target, Some(&self.cells[id.0]), &self.genome, morphogenesis);
            self.cells.push(child);
            self.cells[id.0].stems[stem.index()] = StemSlot::Grown(child_id);
            born.push(child_id);
        }
        born
    }

    /// A pending sequence that never grew is not a child.
    fn clear_pending(&mut self) {
        for cell in &mut self.cells {
            for slot in &mut cell.stems {
                if matches!(slot, StemSlot::Pending(_)) {
                    *slot = StemSlot::Empty;
                }
            }
        }
    }

    /// Recompute every cell's geometry, starting from the root at the origin.
    pub fn layout(&mut self) {
        if !self.cells.is_empty() {
            self.place(CellId(0), Position::default(), 0.0);
        }
    }

    /// Cells attach by their bottom side; the center sits half a height
    /// out along the cell's heading.
    fn place(&mut self, id: CellId, attach: Position, stem_angle: f64) {
        let cell = &mut self.cells[id.0];
        let g = &mut cell.geometry;
        g.width = cell.traits.relax_width * cell.stress.ratio;
        g.height = cell.traits.relax_height / cell.stress.ratio;
        g.angle = normalize_angle(stem_angle + cell.traits.relax_angle + cell.stress.angle);
        g.center = attach.offset(g.angle, g.height / 2.0);

        let geometry = *g;
        let anchors: Vec<(CellId, Position, f64)> = cell
            .children()
            .map(|(stem, child)| {
                let a = stem.anchor();
                let angle = geometry.angle + a.angle_offset;
                let reach = a.width_coefficient * geometry.width + a.height_coefficient * geometry.height;
                (child, geometry.center.offset(angle, reach), angle)
            })
            .collect();

        for (child, anchor, angle) in anchors {
            self.place(child, anchor, angle);
        }
    }

    /// Advance every cell's animation by one tick, then lay out again.
    pub fn update(&mut self) {
        for cell in &mut self.cells {
            cell.animate(&self.stress_drivers);
        }
        self.layout();
    }

    pub fn genome(&self) -> &str {
        &self.genome
    }

    pub fn cells_limit(&self) -> usize {
        self.cells_limit
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in creation order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    pub fn root(&self) -> Option<&Cell> {
        self.cells.first()
    }

    pub fn parent(&self, id: CellId) -> Option<&Cell> {
        self.cell(id)?.parent.and_then(|p| self.cell(p))
    }

    pub fn children(&self, id: CellId) -> Vec<&Cell> {
        self.cell(id)
            .map(|c| c.children().filter_map(|(_, child)| self.cell(child)).collect())
            .unwrap_or_default()
    }

    pub fn max_generation(&self) -> u32 {
        self.cells.iter().map(|c| c.generation).max().unwrap_or(0)
    }

    pub fn bounds(&self) -> Bounds {
        let mut centers = self.cells.iter().map(|c| c.geometry.center);
        let Some(first) = centers.next() else {
            return Bounds {
                min: Position::default(),
                max: Position::default(),
            };
        };
        centers.fold(Bounds { min: first, max: first }, |b, p| Bounds {
            min: Position::new(b.min.x.min(p.x), b.min.y.min(p.y)),
            max: Position::new(b.max.x.max(p.x), b.max.y.max(p.y)),
        })
    }

    pub fn stats(&self) -> BodyStats {
        BodyStats {
            cells: self.cells.len(),
            generations: self.max_generation(),
            leaves: self.cells.iter().filter(|c| c.is_leaf()).count(),
            genome_length: self.genome.chars().count(),
            total_area: self.cells.iter().map(|c| c.geometry.area()).sum(),
            bounds: self.bounds(),
        }
    }

    /// Export the body (genome, cells, geometry) as JSON.
    pub fn to_json(&self) -> morpho_core::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Wrap degrees into [0, 360).
fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}
