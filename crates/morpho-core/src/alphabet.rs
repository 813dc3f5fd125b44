//! The symbol alphabet a genome is written in.
//!
//! Symbols fall into three groups:
//!
//! - **code morphogens** - counted per stem, their hierarchy picks target sequences
//! - **stem symbols** - redirect subsequent morphogens to the left, top or right stem
//! - **promoters** - stop transcription, turn the cell, widen it or make it taller

use crate::error::{MorphoError, Result};
use crate::types::{Morphogen, Stem};
use serde::{Deserialize, Serialize};

/// Symbols selecting which stem receives subsequent morphogens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemSymbols {
    #[serde(default = "default_stem_left")]
    pub left: char,
    #[serde(default = "default_stem_top")]
    pub top: char,
    #[serde(default = "default_stem_right")]
    pub right: char,
}

/// Symbols that modulate transcription and cell traits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promoters {
    #[serde(default = "default_stop")]
    pub stop: char,
    #[serde(default = "default_turn_left")]
    pub left: char,
    #[serde(default = "default_turn_right")]
    pub right: char,
    #[serde(default = "default_widen")]
    pub widen: char,
    #[serde(default = "default_rise")]
    pub rise: char,
}

/// The full alphabet of a genome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    #[serde(default = "default_code_morphogens")]
    pub code_morphogens: Vec<char>,
    #[serde(default)]
    pub stems: StemSymbols,
    #[serde(default)]
    pub promoters: Promoters,
}

fn default_stem_left() -> char { '<' }
fn default_stem_top() -> char { '^' }
fn default_stem_right() -> char { '>' }
fn default_stop() -> char { ' ' }
fn default_turn_left() -> char { 'l' }
fn default_turn_right() -> char { 'r' }
fn default_widen() -> char { '-' }
fn default_rise() -> char { '|' }
fn default_code_morphogens() -> Vec<char> { vec!['n', 's', 'e', 'w'] }

impl Default for StemSymbols {
    fn default() -> Self {
        Self {
            left: default_stem_left(),
            top: default_stem_top(),
            right: default_stem_right(),
        }
    }
}

impl Default for Promoters {
    fn default() -> Self {
        Self {
            stop: default_stop(),
            left: default_turn_left(),
            right: default_turn_right(),
            widen: default_widen(),
            rise: default_rise(),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            code_morphogens: default_code_morphogens(),
            stems: StemSymbols::default(),
            promoters: Promoters::default(),
        }
    }
}

impl StemSymbols {
    pub fn symbol(&self, stem: Stem) -> char {
        match stem {
            Stem::Left => self.left,
            Stem::Top => self.top,
            Stem::Right => self.right,
        }
    }

    pub fn stem_for(&self, symbol: char) -> Option<Stem> {
        Stem::ALL.into_iter().find(|s| self.symbol(*s) == symbol)
    }
}

impl Alphabet {
    /// Check that every symbol has exactly one role.
    pub fn validate(&self) -> Result<()> {
        if self.code_morphogens.is_empty() {
            return Err(MorphoError::invalid_config(
                "code_morphogens",
                "[]",
                "at least one code morphogen is required",
            ));
        }

        let mut seen: Vec<(char, String)> = Vec::new();
        for (symbol, role) in self.roles() {
            if let Some((_, first)) = seen.iter().find(|(c, _)| *c == symbol) {
                return Err(MorphoError::symbol_conflict(symbol, first.clone(), role));
            }
            seen.push((symbol, role));
        }
        Ok(())
    }

    fn roles(&self) -> Vec<(char, String)> {
        let mut roles: Vec<(char, String)> = self
            .code_morphogens
            .iter()
            .map(|c| (*c, format!("code morphogen {c:?}")))
            .collect();
        for stem in Stem::ALL {
            roles.push((self.stems.symbol(stem), format!("{stem:?} stem")));
        }
        let p = &self.promoters;
        roles.push((p.stop, "stop promoter".to_string()));
        roles.push((p.left, "turn-left promoter".to_string()));
        roles.push((p.right, "turn-right promoter".to_string()));
        roles.push((p.widen, "widen promoter".to_string()));
        roles.push((p.rise, "rise promoter".to_string()));
        roles
    }

    /// Every valid symbol, sorted and deduplicated.
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self.roles().into_iter().map(|(c, _)| c).collect();
        symbols.sort_unstable();
        symbols.dedup();
        symbols
    }

    /// Code morphogens followed by the generation morphogen.
    pub fn morphogens(&self) -> Vec<Morphogen> {
        self.code_morphogens
            .iter()
            .map(|c| Morphogen::Code(*c))
            .chain(std::iter::once(Morphogen::Generation))
            .collect()
    }

    pub fn is_code_morphogen(&self, symbol: char) -> bool {
        self.code_morphogens.contains(&symbol)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.roles().iter().any(|(c, _)| *c == symbol)
    }
}
