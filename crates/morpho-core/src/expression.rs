//! Morphogen expression: decoding genome regions into symbol counts.
//!
//! A cell is governed by a target sequence. Every occurrence of that
//! sequence in the genome opens a fragment which is transcribed symbol by
//! symbol until a stop promoter. Code morphogens are credited to whichever
//! stem was last selected in the fragment (the top stem initially).

use crate::alphabet::Alphabet;
use crate::types::{Stem, TargetSequence};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Symbol counts of one cell's expressed genome regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    symbol_counts: BTreeMap<char, u32>,
    /// Morphogen counts per stem, indexed by [`Stem::index`].
    stem_counts: [BTreeMap<char, u32>; 3],
}

impl Expression {
    /// All-zero expression over the alphabet.
    pub fn zeroed(alphabet: &Alphabet) -> Self {
        let symbol_counts = alphabet.symbols().into_iter().map(|c| (c, 0)).collect();
        let morphogens: BTreeMap<char, u32> =
            alphabet.code_morphogens.iter().map(|c| (*c, 0)).collect();
        Self {
            symbol_counts,
            stem_counts: [morphogens.clone(), morphogens.clone(), morphogens],
        }
    }

    /// Occurrences of `symbol` across every expressed fragment.
    pub fn count(&self, symbol: char) -> u32 {
        self.symbol_counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn symbol_counts(&self) -> &BTreeMap<char, u32> {
        &self.symbol_counts
    }

    /// Code morphogen counts attributed to `stem`.
    pub fn stem_counts(&self, stem: Stem) -> &BTreeMap<char, u32> {
        &self.stem_counts[stem.index()]
    }

    /// Sum of the code morphogen counts attributed to `stem`.
    pub fn stem_total(&self, stem: Stem) -> u32 {
        self.stem_counts(stem).values().sum()
    }

    /// True when nothing was expressed.
    pub fn is_silent(&self) -> bool {
        self.symbol_counts.values().all(|c| *c == 0)
    }

    /// Counts divided by the largest count, so the strongest symbol is 1.0.
    pub fn normalized(&self) -> BTreeMap<char, f64> {
        let max = self.symbol_counts.values().copied().max().unwrap_or(0);
        self.symbol_counts
            .iter()
            .map(|(c, n)| {
                let v = if max > 0 { *n as f64 / max as f64 } else { 0.0 };
                (*c, v)
            })
            .collect()
    }
}

/// Express every occurrence of `target` in `genome`.
///
/// The genome before the first occurrence is never expressed. Symbols
/// outside the alphabet are skipped.
pub fn express(genome: &str, target: &TargetSequence, alphabet: &Alphabet) -> Expression {
    let mut expression = Expression::zeroed(alphabet);
    let stop = alphabet.promoters.stop;

    for fragment in genome.split(target.as_str()).skip(1) {
        let mut active = Stem::Top;
        for symbol in fragment.chars() {
            let Some(count) = expression.symbol_counts.get_mut(&symbol) else {
                continue;
            };
            *count += 1;

            if let Some(stem) = alphabet.stems.stem_for(symbol) {
                active = stem;
            } else if let Some(m) = expression.stem_counts[active.index()].get_mut(&symbol) {
                *m += 1;
            }

            if symbol == stop {
                break;
            }
        }
    }

    expression
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> TargetSequence {
        let mut chars = s.chars();
        TargetSequence::new(chars.next().unwrap(), chars.next().unwrap())
    }

    #[test]
    fn unmatched_target_expresses_nothing() {
        let a = Alphabet::default();
        let e = express("nnnnsssweee", &ts("<<"), &a);
        assert!(e.is_silent());
        assert_eq!(e.stem_total(Stem::Top), 0);
    }

    #[test]
    fn prefix_before_first_target_is_ignored() {
        let a = Alphabet::default();
        let e = express("nnnn--nss", &ts("--"), &a);
        assert_eq!(e.count('n'), 1);
        assert_eq!(e.count('s'), 2);
        assert_eq!(e.count('-'), 0);
    }

    #[test]
    fn stop_ends_fragment() {
        let a = Alphabet::default();
        let e = express("ll nnnnnnnn^ nnnnn", &ts("ll"), &a);
        // The fragment starts with the stop promoter itself.
        assert_eq!(e.count(' '), 1);
        assert_eq!(e.count('n'), 0);

        let e = express("llnnnnnnnn^ nnnnn", &ts("ll"), &a);
        assert_eq!(e.count('n'), 8);
        assert_eq!(e.count('^'), 1);
        assert_eq!(e.count(' '), 1);
        assert_eq!(e.stem_counts(Stem::Top)[&'n'], 8);
    }

    #[test]
    fn stems_redirect_morphogens_and_reset_per_fragment() {
        let a = Alphabet::default();
        let e = express("rrn<ss>e rrw", &ts("rr"), &a);
        assert_eq!(e.stem_counts(Stem::Top)[&'n'], 1);
        assert_eq!(e.stem_counts(Stem::Left)[&'s'], 2);
        assert_eq!(e.stem_counts(Stem::Right)[&'e'], 1);
        // Second fragment starts on the top stem again.
        assert_eq!(e.stem_counts(Stem::Top)[&'w'], 1);
        assert_eq!(e.count('<'), 1);
        assert_eq!(e.count('>'), 1);
    }

    #[test]
    fn fragments_accumulate() {
        let a = Alphabet::default();
        let e = express("^^nn ^^nnn ^^n", &ts("^^"), &a);
        assert_eq!(e.count('n'), 6);
        assert_eq!(e.count(' '), 2);
    }

    #[test]
    fn foreign_symbols_are_skipped() {
        let a = Alphabet::default();
        let e = express("llxnxnz", &ts("ll"), &a);
        assert_eq!(e.count('n'), 2);
        assert_eq!(e.count('x'), 0);
    }

    #[test]
    fn expression_is_deterministic() {
        let a = Alphabet::default();
        let genome = "ns<we>|-l r^nnsen <ww ns|||-- ns";
        let first = express(genome, &ts("ns"), &a);
        for _ in 0..5 {
            assert_eq!(express(genome, &ts("ns"), &a), first);
        }
    }

    #[test]
    fn normalized_peaks_at_one() {
        let a = Alphabet::default();
        let e = express("llnnnns ", &ts("ll"), &a);
        let n = e.normalized();
        assert_eq!(n[&'n'], 1.0);
        assert_eq!(n[&'s'], 0.25);
        assert_eq!(n[&'w'], 0.0);
    }
}
