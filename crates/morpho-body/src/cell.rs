//! Cell: the basic building block of a body.
//!
//! A cell is created when its parent's stem activates a target sequence.
//! At birth it expresses the genome regions opened by that sequence, turns
//! the counts into relaxed traits, and marks the stems whose morphogens
//! exceed the gem threshold as pending growth.

use morpho_core::expression::Expression;
use morpho_core::morphogenesis::Morphogenesis;
use morpho_core::types::{Position, Stem, TargetSequence};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Index of a cell inside its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub usize);

/// What a stem holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StemSlot {
    /// No growth here.
    Empty,
    /// The stem will gem a child expressing this sequence.
    Pending(TargetSequence),
    /// A child cell grew here.
    Grown(CellId),
}

impl StemSlot {
    pub fn child(&self) -> Option<CellId> {
        match self {
            StemSlot::Grown(id) => Some(*id),
            _ => None,
        }
    }
}

/// Shape a cell takes when unstressed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Traits {
    /// Turn relative to the parent stem, in degrees.
    pub relax_angle: f64,
    pub relax_width: f64,
    pub relax_height: f64,
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stress {
    pub angle: f64,
    /// Multiplies width, divides height.
    pub ratio: f64,
    pub angle_time: f64,
    pub ratio_time: f64,
}

impl Default for Stress {
    fn default() -> Self {
        Self {
            angle: 0.0,
            ratio: 1.0,
            angle_time: 0.0,
            ratio_time: 0.0,
        }
    }
}

/// Placement computed by the last layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub center: Position,
    /// Heading in degrees, clockwise from +y, in [0, 360).
    pub angle: f64,
    pub width: f64,
    pub height: f64,
}

impl Geometry {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Degrees the stress phase advances per tick at full expression.
const STRESS_PHASE_STEP: f64 = 10.0;
/// Swing of the stress angle at full expression, in degrees.
const STRESS_ANGLE_AMPLITUDE: f64 = 10.0;
/// Base of the oscillating width/height ratio.
const STRESS_RATIO_BASE: f64 = 1.3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    /// 0 for the root, parent's generation + 1 otherwise.
    pub generation: u32,
    pub parent: Option<CellId>,
    /// The target sequence this cell expressed.
    pub target: TargetSequence,
    pub expression: Expression,
    /// Expression counts scaled so the strongest symbol is 1.0.
    pub normalized: BTreeMap<char, f64>,
    /// Indexed by [`Stem::index`].
    pub stems: [StemSlot; 3],
    pub traits: Traits,
    pub stress: Stress,
    pub geometry: Geometry,
}

impl Cell {
    /// Express `target` and decide which stems will gem.
    pub(crate) fn new(
        id: CellId,
        target: TargetSequence,
        parent: Option<&Cell>,
        genome: &str,
        morphogenesis: &Morphogenesis,
    ) -> Self {
        let generation = parent.map_or(0, |p| p.generation + 1);
        let expression = morphogenesis.express(genome, &target);
        let traits = express_traits(&expression, morphogenesis);

        let translator = morphogenesis.translator();
        let stems = Stem::ALL.map(|stem| {
            match translator.translate_stem(&expression, stem, generation) {
                Some(seq) => StemSlot::Pending(seq),
                None => StemSlot::Empty,
            }
        });

        let normalized = expression.normalized();
        Self {
            id,
            generation,
            parent: parent.map(|p| p.id),
            target,
            expression,
            normalized,
            stems,
            traits,
            stress: Stress::default(),
            geometry: Geometry::default(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn slot(&self, stem: Stem) -> &StemSlot {
        &self.stems[stem.index()]
    }

    /// Grown children with the stem they hang from, in stem order.
    pub fn children(&self) -> impl Iterator<Item = (Stem, CellId)> + '_ {
        Stem::ALL
            .into_iter()
            .filter_map(|stem| self.slot(stem).child().map(|id| (stem, id)))
    }

    pub fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }

    /// Advance the stress oscillators by one tick.
    ///
    /// `drivers` are the morphogens steering the animation: the first sets
    /// the angle swing, the second its speed, the third the speed of the
    /// width/height pulse. The root never moves.
    pub fn animate(&mut self, drivers: &[char]) {
        if self.is_root() {
            return;
        }
        let level = |i: usize| {
            drivers
                .get(i)
                .and_then(|c| self.normalized.get(c))
                .copied()
                .unwrap_or(0.0)
        };
        let (swing, angle_speed, ratio_speed) = (level(0), level(1), level(2));

        let s = &mut self.stress;
        s.angle_time = (s.angle_time + STRESS_PHASE_STEP * angle_speed) % 360.0;
        s.angle = s.angle_time.to_radians().sin() * STRESS_ANGLE_AMPLITUDE * swing;

        s.ratio_time = (s.ratio_time + STRESS_PHASE_STEP * ratio_speed) % 360.0;
        s.ratio = STRESS_RATIO_BASE.powf(s.ratio_time.to_radians().sin());
    }
}

fn express_traits(expression: &Expression, morphogenesis: &Morphogenesis) -> Traits {
    let p = &morphogenesis.alphabet().promoters;
    let g = morphogenesis.growth();
    let turns = expression.count(p.right) as f64 - expression.count(p.left) as f64;
    Traits {
        relax_angle: turns * g.turn_factor,
        relax_width: g.width_factor.powi(expression.count(p.widen) as i32),
        relax_height: g.height_factor.powi(expression.count(p.rise) as i32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(a: char, b: char) -> TargetSequence {
        TargetSequence::new(a, b)
    }

    #[test]
    fn traits_follow_promoters() {
        let m = Morphogenesis::default();
        let cell = Cell::new(CellId(0), ts('<', '<'), None, "<<rrrl--| ", &m);
        assert_eq!(cell.traits.relax_angle, 10.0);
        assert!((cell.traits.relax_width - 1.21).abs() < 1e-12);
        assert!((cell.traits.relax_height - 1.1).abs() < 1e-12);
    }

    #[test]
    fn strong_stems_become_pending() {
        let m = Morphogenesis::default();
        // 8 morphogens on the left stem, 2 on top.
        let cell = Cell::new(CellId(0), ts('^', '^'), None, "^^nn<nnnnssss ", &m);
        assert!(matches!(cell.slot(Stem::Left), StemSlot::Pending(_)));
        assert_eq!(cell.slot(Stem::Top), &StemSlot::Empty);
        assert_eq!(cell.slot(Stem::Right), &StemSlot::Empty);
        assert_eq!(cell.children().count(), 0);
    }

    #[test]
    fn root_does_not_animate() {
        let m = Morphogenesis::default();
        let mut cell = Cell::new(CellId(0), ts('^', '^'), None, "^^nnssee ", &m);
        cell.animate(&['n', 's', 'e']);
        assert_eq!(cell.stress, Stress::default());
    }

    #[test]
    fn child_stress_oscillates() {
        let m = Morphogenesis::default();
        let parent = Cell::new(CellId(0), ts('^', '^'), None, "^^nnssee ", &m);
        let mut child = Cell::new(CellId(1), ts('^', '^'), Some(&parent), "^^nnssee ", &m);
        assert_eq!(child.generation, 1);
        assert_eq!(child.parent, Some(CellId(0)));

        child.animate(&['n', 's', 'e']);
        // n, s and e are all at full strength: phases advance 10 degrees.
        assert!((child.stress.angle_time - 10.0).abs() < 1e-12);
        let expected = 10f64.to_radians().sin() * 10.0;
        assert!((child.stress.angle - expected).abs() < 1e-12);
        assert!(child.stress.ratio > 1.0);
    }
}
