//! Shared types used across the expression engine, bodies and evolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in the body's plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move `distance` along a heading in degrees, clockwise from +y.
    pub fn offset(&self, angle_deg: f64, distance: f64) -> Position {
        let rad = angle_deg.to_radians();
        Position::new(self.x + rad.sin() * distance, self.y + rad.cos() * distance)
    }
}

/// One of the three attachment points of a cell where a child may gem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stem {
    Left,
    Top,
    Right,
}

/// Where on a cell a stem sits, relative to the cell's center and heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StemAnchor {
    /// Fraction of the cell's width between center and anchor.
    pub width_coefficient: f64,
    /// Fraction of the cell's height between center and anchor.
    pub height_coefficient: f64,
    /// Heading of the stem relative to the cell, in degrees.
    pub angle_offset: f64,
}

impl Stem {
    /// Stems in gemmation order.
    pub const ALL: [Stem; 3] = [Stem::Left, Stem::Top, Stem::Right];

    pub fn anchor(self) -> StemAnchor {
        let (width_coefficient, height_coefficient, angle_offset) = match self {
            Stem::Left => (0.5, 0.0, -90.0),
            Stem::Top => (0.0, 0.5, 0.0),
            Stem::Right => (0.5, 0.0, 90.0),
        };
        StemAnchor {
            width_coefficient,
            height_coefficient,
            angle_offset,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Stem::Left => 0,
            Stem::Top => 1,
            Stem::Right => 2,
        }
    }
}

/// A named signal whose relative strength selects the next target sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Morphogen {
    /// Expressed from the genome.
    Code(char),
    /// Derived from the cell's generation.
    Generation,
}

impl Morphogen {
    pub const GENERATION_NAME: &'static str = "gen";

    pub fn name(&self) -> String {
        match self {
            Morphogen::Code(c) => c.to_string(),
            Morphogen::Generation => Self::GENERATION_NAME.to_string(),
        }
    }
}

impl fmt::Display for Morphogen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A symbol pair marking where a genome region's expression begins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetSequence(String);

impl TargetSequence {
    pub fn new(first: char, second: char) -> Self {
        Self([first, second].iter().collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
