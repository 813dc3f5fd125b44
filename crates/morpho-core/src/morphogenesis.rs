//! Validated bundle of everything needed to grow a body from a genome.

use crate::alphabet::Alphabet;
use crate::config::GrowthConfig;
use crate::error::Result;
use crate::expression::{express, Expression};
use crate::translator::Translator;
use crate::types::TargetSequence;

/// Alphabet, growth constants and the translation table, checked once.
#[derive(Debug, Clone)]
pub struct Morphogenesis {
    alphabet: Alphabet,
    growth: GrowthConfig,
    translator: Translator,
}

impl Morphogenesis {
    pub fn new(alphabet: Alphabet, growth: GrowthConfig) -> Result<Self> {
        alphabet.validate()?;
        growth.validate()?;
        let translator = Translator::new(&alphabet, &growth);
        Ok(Self {
            alphabet,
            growth,
            translator,
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn growth(&self) -> &GrowthConfig {
        &self.growth
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn express(&self, genome: &str, target: &TargetSequence) -> Expression {
        express(genome, target, &self.alphabet)
    }

    /// The target sequence occurring most often in `genome`.
    ///
    /// Ties go to the smallest sequence, so a genome matching nothing
    /// seeds from the first sequence of the table.
    pub fn strongest_target(&self, genome: &str) -> TargetSequence {
        let mut best: Option<(usize, &TargetSequence)> = None;
        for seq in self.translator.table().sequences() {
            let count = genome.matches(seq.as_str()).count();
            if best.map_or(true, |(c, _)| count > c) {
                best = Some((count, seq));
            }
        }
        best.map(|(_, seq)| seq.clone()).unwrap_or_else(|| {
            let stop = self.alphabet.promoters.stop;
            TargetSequence::new(stop, stop)
        })
    }
}

impl Default for Morphogenesis {
    fn default() -> Self {
        let alphabet = Alphabet::default();
        let growth = GrowthConfig::default();
        let translator = Translator::new(&alphabet, &growth);
        Self {
            alphabet,
            growth,
            translator,
        }
    }
}
