//! libromanian crate root
//!
//! Romanian morphology on top of `libromanian-core`: the Romanian affix
//! dataset (a `RuleProvider`), a TOML rule-file loader, and the
//! syllable-boundary segmenter used for hyphenation.
//!
//! Public API exported here:
//! - `RomanianRules` and `RuleFileError` from `rules`
//! - `syllable_breaks` / `hyphenate` from `syllable`
//! - `analyzer` for an engine over the shared built-in dataset

pub mod rules;
pub mod syllable;

pub use rules::{RomanianRules, RuleFileError};
pub use syllable::{hyphenate, syllable_breaks};

// Convenience re-exports for common types used by callers.
pub use libromanian_core::{
    Category, Config, DecomposeError, Decomposition, Engine, Morpheme, PartOfSpeech, Rule,
    RuleProvider, RuleSet,
};

/// Build an engine over the shared built-in dataset.
///
/// The underlying tables are a process-wide static, so engines from
/// this constructor share them without copying.
pub fn analyzer() -> Engine<&'static RomanianRules> {
    Engine::new(RomanianRules::shared())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzer_decomposes_with_builtin_rules() {
        let engine = analyzer();
        let results = engine.decompose("casa", PartOfSpeech::Noun).unwrap();
        assert!(!results.is_empty());
    }
}
