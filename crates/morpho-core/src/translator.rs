//! Target-sequence translation.
//!
//! The relative strengths of the morphogens at a stem form a hierarchy
//! (weakest first). Every possible hierarchy is assigned a target sequence,
//! and a stem whose morphogens are strong enough activates the sequence of
//! its hierarchy for a new child cell.
//!
//! The assignment pairs permutations of the morphogen list, in lexicographic
//! order of list positions, with symbol pairs of the sorted alphabet, in
//! lexicographic order, cycling over the pairs. It depends on nothing but the
//! alphabet, so it is identical across runs and platforms.

use crate::alphabet::Alphabet;
use crate::config::GrowthConfig;
use crate::expression::Expression;
use crate::types::{Morphogen, Stem, TargetSequence};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// An ordering of morphogens by ascending strength.
pub type Hierarchy = Vec<Morphogen>;

/// Total mapping from morphogen hierarchies to target sequences.
#[derive(Debug, Clone)]
pub struct TargetTable {
    entries: BTreeMap<Hierarchy, TargetSequence>,
    /// Distinct sequences in the table, sorted.
    sequences: Vec<TargetSequence>,
}

impl TargetTable {
    pub fn new(alphabet: &Alphabet) -> Self {
        let morphogens = alphabet.morphogens();
        let symbols = alphabet.symbols();
        let pairs: Vec<TargetSequence> = symbols
            .iter()
            .flat_map(|a| symbols.iter().map(move |b| TargetSequence::new(*a, *b)))
            .collect();

        let mut entries = BTreeMap::new();
        let mut order: Vec<usize> = (0..morphogens.len()).collect();
        let mut i = 0;
        loop {
            let hierarchy: Hierarchy = order.iter().map(|&k| morphogens[k]).collect();
            entries.insert(hierarchy, pairs[i % pairs.len()].clone());
            i += 1;
            if !next_permutation(&mut order) {
                break;
            }
        }

        let sequences: BTreeSet<TargetSequence> = entries.values().cloned().collect();
        Self {
            entries,
            sequences: sequences.into_iter().collect(),
        }
    }

    pub fn lookup(&self, hierarchy: &[Morphogen]) -> Option<&TargetSequence> {
        self.entries.get(hierarchy)
    }

    /// Distinct target sequences, sorted.
    pub fn sequences(&self) -> &[TargetSequence] {
        &self.sequences
    }

    /// Number of hierarchies (permutations) in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Hierarchy, &TargetSequence)> {
        self.entries.iter()
    }
}

/// Rearrange `v` into the next permutation in lexicographic order.
/// Returns false once `v` is the last permutation.
fn next_permutation(v: &mut [usize]) -> bool {
    if v.len() < 2 {
        return false;
    }
    let mut i = v.len() - 1;
    while i > 0 && v[i - 1] >= v[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = v.len() - 1;
    while v[j] <= v[i - 1] {
        j -= 1;
    }
    v.swap(i - 1, j);
    v[i..].reverse();
    true
}

/// Decides whether a stem gems and which target sequence its child expresses.
#[derive(Debug, Clone)]
pub struct Translator {
    table: TargetTable,
    gem_threshold: f64,
    threshold_growth: f64,
    generation_scale: f64,
}

impl Translator {
    pub fn new(alphabet: &Alphabet, growth: &GrowthConfig) -> Self {
        Self {
            table: TargetTable::new(alphabet),
            gem_threshold: growth.gem_threshold,
            threshold_growth: growth.threshold_growth,
            generation_scale: growth.generation_scale,
        }
    }

    pub fn table(&self) -> &TargetTable {
        &self.table
    }

    /// Morphogen total a stem must exceed to gem at `generation`.
    pub fn threshold(&self, generation: u32) -> f64 {
        self.gem_threshold * self.threshold_growth.powi(generation as i32)
    }

    /// Order morphogens by ascending strength, ties broken by name.
    pub fn hierarchy(&self, counts: &BTreeMap<char, u32>, generation: u32) -> Hierarchy {
        let mut strengths: Vec<(Morphogen, f64)> = counts
            .iter()
            .map(|(c, n)| (Morphogen::Code(*c), *n as f64))
            .collect();
        strengths.push((Morphogen::Generation, generation as f64 * self.generation_scale));

        strengths.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.name().cmp(&b.0.name()))
        });
        strengths.into_iter().map(|(m, _)| m).collect()
    }

    /// Target sequence for a stem's child, or `None` if the stem stays dormant.
    pub fn translate(&self, counts: &BTreeMap<char, u32>, generation: u32) -> Option<TargetSequence> {
        let total: u32 = counts.values().sum();
        if (total as f64) <= self.threshold(generation) {
            return None;
        }
        let hierarchy = self.hierarchy(counts, generation);
        self.table.lookup(&hierarchy).cloned()
    }

    /// Translate one stem of an expressed cell.
    pub fn translate_stem(
        &self,
        expression: &Expression,
        stem: Stem,
        generation: u32,
    ) -> Option<TargetSequence> {
        self.translate(expression.stem_counts(stem), generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Morphogen::{Code, Generation};

    #[test]
    fn permutations_are_lexicographic() {
        let mut v = vec![0, 1, 2];
        let mut seen = vec![v.clone()];
        while next_permutation(&mut v) {
            seen.push(v.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn table_covers_all_120_hierarchies() {
        let table = TargetTable::new(&Alphabet::default());
        assert_eq!(table.len(), 120);
        // 144 symbol pairs, so no pair repeats.
        assert_eq!(table.sequences().len(), 120);
    }

    #[test]
    fn first_and_last_hierarchies() {
        let table = TargetTable::new(&Alphabet::default());
        let first = vec![Code('n'), Code('s'), Code('e'), Code('w'), Generation];
        assert_eq!(table.lookup(&first).unwrap().as_str(), "  ");
        let second = vec![Code('n'), Code('s'), Code('e'), Generation, Code('w')];
        assert_eq!(table.lookup(&second).unwrap().as_str(), " -");
        // 120th permutation pairs with the 120th symbol pair: 119 = 9*12 + 11.
        let last = vec![Generation, Code('w'), Code('e'), Code('s'), Code('n')];
        assert_eq!(table.lookup(&last).unwrap().as_str(), "s|");
    }

    #[test]
    fn small_alphabet_cycles_pairs() {
        let alphabet = Alphabet {
            code_morphogens: vec!['a', 'b', 'c', 'd', 'f', 'g'],
            ..Alphabet::default()
        };
        let table = TargetTable::new(&alphabet);
        // 7! hierarchies over 14^2 pairs
        assert_eq!(table.len(), 5040);
        assert_eq!(table.sequences().len(), 196);
    }

    #[test]
    fn table_is_stable_across_builds() {
        let a = TargetTable::new(&Alphabet::default());
        let b = TargetTable::new(&Alphabet::default());
        let a: Vec<_> = a.iter().collect();
        let b: Vec<_> = b.iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn threshold_rises_with_generation() {
        let t = Translator::new(&Alphabet::default(), &GrowthConfig::default());
        assert_eq!(t.threshold(0), 7.0);
        let mut last = t.threshold(0);
        for g in 1..50 {
            let next = t.threshold(g);
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn weak_stems_stay_dormant() {
        let t = Translator::new(&Alphabet::default(), &GrowthConfig::default());
        let counts: BTreeMap<char, u32> = [('n', 3), ('s', 2), ('e', 1), ('w', 1)].into();
        // total 7 does not exceed 7
        assert_eq!(t.translate(&counts, 0), None);
    }

    #[test]
    fn ties_break_alphabetically() {
        let t = Translator::new(&Alphabet::default(), &GrowthConfig::default());
        let counts: BTreeMap<char, u32> = [('n', 2), ('s', 2), ('e', 2), ('w', 2)].into();
        // generation 4 → gen strength 2.0, tied with everything
        let h = t.hierarchy(&counts, 4);
        assert_eq!(h, vec![Code('e'), Generation, Code('n'), Code('s'), Code('w')]);
    }

    #[test]
    fn strong_stem_translates_hierarchy() {
        let t = Translator::new(&Alphabet::default(), &GrowthConfig::default());
        let counts: BTreeMap<char, u32> = [('n', 5), ('s', 1), ('e', 3), ('w', 0)].into();
        let h = t.hierarchy(&counts, 0);
        assert_eq!(h, vec![Generation, Code('w'), Code('s'), Code('e'), Code('n')]);
        let target = t.translate(&counts, 0).unwrap();
        assert_eq!(Some(&target), t.table().lookup(&h));
    }
}
