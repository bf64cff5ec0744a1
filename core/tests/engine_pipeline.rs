// core/tests/engine_pipeline.rs
//
// Integration tests for the decomposition pipeline against a small mock
// rule dataset.
//
// Tests cover:
// - the noun and verb stage orders and assembly
// - exactness (every decomposition reassembles the word)
// - the whole-word fallback
// - deduplication of structurally identical results
// - POS and degenerate-input rejection
// - the hypothesis ceiling

use libromanian_core::{
    dedup, Category, Config, DecomposeError, Decomposition, Engine, PartOfSpeech, Rule,
    RuleProvider, RuleSet,
};

struct MockRules {
    prefixes: RuleSet,
    noun_endings: RuleSet,
    plural_suffixes: RuleSet,
    noun_suffixes: RuleSet,
    verb_suffixes: RuleSet,
}

impl MockRules {
    fn demo() -> Self {
        let mut prefixes = RuleSet::new(false);
        prefixes.insert("ne", Rule::new(Category::Prefix, "negation", &["ne"]));

        let mut noun_endings = RuleSet::new(true);
        noun_endings.insert("a", Rule::new(Category::Ending, "def.fem.sg", &["a"]));

        let mut plural_suffixes = RuleSet::new(true);
        plural_suffixes.insert("i", Rule::new(Category::Suffix, "plural", &["i"]));

        let mut noun_suffixes = RuleSet::new(false);
        noun_suffixes.insert("tor", Rule::new(Category::Suffix, "agent", &["tor", "toare"]));

        let mut verb_suffixes = RuleSet::new(false);
        verb_suffixes.insert("and", Rule::new(Category::Suffix, "gerund", &["ând", "ind"]));

        Self {
            prefixes,
            noun_endings,
            plural_suffixes,
            noun_suffixes,
            verb_suffixes,
        }
    }
}

impl RuleProvider for MockRules {
    fn prefixes(&self) -> &RuleSet {
        &self.prefixes
    }

    fn noun_endings(&self) -> &RuleSet {
        &self.noun_endings
    }

    fn plural_suffixes(&self) -> &RuleSet {
        &self.plural_suffixes
    }

    fn noun_suffixes(&self) -> &RuleSet {
        &self.noun_suffixes
    }

    fn verb_suffixes(&self) -> &RuleSet {
        &self.verb_suffixes
    }
}

fn engine() -> Engine<MockRules> {
    Engine::new(MockRules::demo())
}

/// True if some decomposition's (surface, category, meaning) triples
/// equal `expected` exactly.
fn has_triples(results: &[Decomposition], expected: &[(&str, &str, &str)]) -> bool {
    results.iter().any(|d| {
        let triples = d.triples();
        triples.len() == expected.len()
            && triples
                .iter()
                .zip(expected)
                .all(|((s, c, m), (es, ec, em))| s == es && c.as_str() == *ec && m == em)
    })
}

fn assert_exactness(results: &[Decomposition], word: &str) {
    for d in results {
        assert_eq!(d.surface(), word.to_lowercase(), "gap or overlap in {:?}", d);
    }
}

#[test]
fn verb_with_prefix_and_suffix() {
    let results = engine().decompose("nelucrând", PartOfSpeech::Verb).unwrap();
    assert_exactness(&results, "nelucrând");
    assert!(has_triples(
        &results,
        &[
            ("ne", "prefix", "negation"),
            ("lucr", "root", "root"),
            ("ând", "suffix", "gerund"),
        ],
    ));
}

#[test]
fn noun_with_suffix_only() {
    let results = engine().decompose("lucrător", PartOfSpeech::Noun).unwrap();
    assert_exactness(&results, "lucrător");
    assert!(has_triples(
        &results,
        &[("lucră", "root", "root"), ("tor", "suffix", "agent")],
    ));
}

#[test]
fn noun_with_ending_only() {
    let results = engine().decompose("casa", PartOfSpeech::Noun).unwrap();
    assert_exactness(&results, "casa");
    assert!(has_triples(
        &results,
        &[("cas", "root", "root"), ("a", "ending", "def.fem.sg")],
    ));
    // The optional ending stage also leaves the untouched branch.
    assert!(has_triples(&results, &[("casa", "root", "root")]));
}

#[test]
fn noun_stacks_suffix_plural_and_ending() {
    // tor + i + a stripped right-to-left; reassembled left-to-right.
    let results = engine().decompose("lucrătoria", PartOfSpeech::Noun).unwrap();
    assert_exactness(&results, "lucrătoria");
    assert!(has_triples(
        &results,
        &[
            ("lucră", "root", "root"),
            ("tor", "suffix", "agent"),
            ("i", "suffix", "plural"),
            ("a", "ending", "def.fem.sg"),
        ],
    ));
}

#[test]
fn whole_word_fallback_when_nothing_matches() {
    let results = engine().decompose("merg", PartOfSpeech::Verb).unwrap();
    assert_eq!(results.len(), 1);
    assert!(has_triples(&results, &[("merg", "root", "root")]));
}

#[test]
fn whole_word_fallback_when_every_residual_is_empty() {
    // The only verb-suffix match consumes the entire word, so every
    // combination is pruned and the bare-root fallback kicks in.
    let results = engine().decompose("ând", PartOfSpeech::Verb).unwrap();
    assert_eq!(results.len(), 1);
    assert!(has_triples(&results, &[("ând", "root", "root")]));
}

#[test]
fn input_is_lowercased_before_matching() {
    let upper = engine().decompose("NeLucrÂnd", PartOfSpeech::Verb).unwrap();
    let lower = engine().decompose("nelucrând", PartOfSpeech::Verb).unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn unsupported_pos_is_rejected_without_partial_results() {
    let err = engine()
        .decompose("lucrător", PartOfSpeech::Adjective)
        .unwrap_err();
    assert_eq!(
        err,
        DecomposeError::UnsupportedPartOfSpeech("adjective".to_string())
    );
}

#[test]
fn empty_input_is_rejected() {
    assert_eq!(
        engine().decompose("", PartOfSpeech::Noun).unwrap_err(),
        DecomposeError::DegenerateInput
    );
    assert_eq!(
        engine().decompose("   ", PartOfSpeech::Verb).unwrap_err(),
        DecomposeError::DegenerateInput
    );
}

#[test]
fn structurally_identical_results_are_deduplicated() {
    // Two ending rules that are indistinguishable by canonical key
    // (same category, meaning and allomorph set under different names)
    // must not yield duplicate decompositions.
    let mut rules = MockRules::demo();
    let mut endings = RuleSet::new(true);
    endings.insert("a", Rule::new(Category::Ending, "def.fem.sg", &["a"]));
    endings.insert("a-alias", Rule::new(Category::Ending, "def.fem.sg", &["a"]));
    rules.noun_endings = endings;

    let results = Engine::new(rules).decompose("casa", PartOfSpeech::Noun).unwrap();
    let keys: Vec<String> = results.iter().map(dedup::canonical_key).collect();
    let mut unique = keys.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(keys.len(), unique.len(), "duplicate canonical keys survived");
    assert_eq!(results.len(), 2);
}

#[test]
fn results_are_deterministically_ordered() {
    let first = engine().decompose("lucrătoria", PartOfSpeech::Noun).unwrap();
    let second = engine().decompose("lucrătoria", PartOfSpeech::Noun).unwrap();
    assert_eq!(first, second);
    for pair in first.windows(2) {
        assert!(pair[0].len() <= pair[1].len(), "not sorted by morpheme count");
    }
}

#[test]
fn hypothesis_limit_fails_bounded() {
    let mut rules = MockRules::demo();
    let mut prefixes = RuleSet::new(false);
    prefixes.insert("a", Rule::new(Category::Prefix, "pathological", &["a"]));
    rules.prefixes = prefixes;

    let engine = Engine::with_config(rules, Config { max_hypotheses: 16 });
    let err = engine
        .decompose("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", PartOfSpeech::Noun)
        .unwrap_err();
    assert_eq!(err, DecomposeError::HypothesisLimit { limit: 16 });
}

#[test]
fn root_is_never_empty() {
    for word in ["nelucrând", "lucrător", "casa", "ând", "nea"] {
        for pos in [PartOfSpeech::Noun, PartOfSpeech::Verb] {
            let results = engine().decompose(word, pos).unwrap();
            assert!(!results.is_empty());
            for d in &results {
                let root = d.root().expect("decomposition without a root");
                assert!(!root.surface.is_empty());
            }
        }
    }
}
