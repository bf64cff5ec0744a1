//! Decomposition deduplication.
//!
//! The same segmentation can be reached along different search branches
//! (or through distinct rules that happen to carry identical category,
//! meaning and allomorph sets). Results are canonicalized and exact
//! duplicates dropped, keeping first-seen order.

use crate::morpheme::Decomposition;
use ahash::AHashSet;
use std::fmt::Write;

/// Canonical identity of a decomposition: the ordered sequence of
/// (surface, category, meaning, allomorph set) quadruples across its
/// morphemes.
pub fn canonical_key(decomposition: &Decomposition) -> String {
    let mut key = String::new();
    for morpheme in decomposition.morphemes() {
        let _ = write!(
            key,
            "{}|{}|{}|",
            morpheme.surface, morpheme.rule.category, morpheme.rule.meaning
        );
        for allomorph in &morpheme.rule.allomorphs {
            let _ = write!(key, "{},", allomorph);
        }
        key.push(';');
    }
    key
}

/// Drop structurally identical decompositions, retaining the first
/// occurrence of each canonical key in its original relative position.
pub fn dedupe(decompositions: Vec<Decomposition>) -> Vec<Decomposition> {
    let mut seen: AHashSet<String> = AHashSet::with_capacity(decompositions.len());
    let mut unique = Vec::with_capacity(decompositions.len());
    for decomposition in decompositions {
        if seen.insert(canonical_key(&decomposition)) {
            unique.push(decomposition);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morpheme::Morpheme;
    use crate::rule::{Category, Rule};

    fn casa() -> Decomposition {
        Decomposition::new(vec![
            Morpheme::root("cas"),
            Morpheme::new("a", Rule::new(Category::Ending, "def.fem.sg", &["a"])),
        ])
    }

    #[test]
    fn duplicates_are_dropped_first_seen_wins() {
        let whole = Decomposition::new(vec![Morpheme::root("casa")]);
        let out = dedupe(vec![casa(), whole.clone(), casa()]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], casa());
        assert_eq!(out[1], whole);
    }

    #[test]
    fn meaning_distinguishes_otherwise_equal_morphemes() {
        let a = Decomposition::new(vec![
            Morpheme::root("cas"),
            Morpheme::new("a", Rule::new(Category::Ending, "def.fem.sg", &["a"])),
        ]);
        let b = Decomposition::new(vec![
            Morpheme::root("cas"),
            Morpheme::new("a", Rule::new(Category::Ending, "voc.sg", &["a"])),
        ]);
        assert_ne!(canonical_key(&a), canonical_key(&b));
        assert_eq!(dedupe(vec![a, b]).len(), 2);
    }

    #[test]
    fn allomorph_set_is_part_of_the_key() {
        let narrow = Decomposition::new(vec![
            Morpheme::root("lucr"),
            Morpheme::new("ând", Rule::new(Category::Suffix, "gerund", &["ând"])),
        ]);
        let wide = Decomposition::new(vec![
            Morpheme::root("lucr"),
            Morpheme::new("ând", Rule::new(Category::Suffix, "gerund", &["ând", "ind"])),
        ]);
        assert_ne!(canonical_key(&narrow), canonical_key(&wide));
    }
}
