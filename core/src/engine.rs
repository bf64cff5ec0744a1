// core/src/engine.rs
//
// Decomposition pipeline: drives the affix matchers in a POS-specific
// stage order and assembles full-word decompositions from the
// cross-product of stage hypotheses.

use crate::dedup;
use crate::error::DecomposeError;
use crate::matcher;
use crate::morpheme::{Decomposition, Morpheme};
use crate::rule::RuleProvider;
use crate::trace::{NoopTrace, Stage, TraceEvent, TraceSink};
use crate::Config;
use std::fmt;
use std::str::FromStr;

/// Part of speech selecting which suffix/ending stages apply.
///
/// Only `Noun` and `Verb` have pipeline variants; the dataset carries no
/// affix tables for the other categories, so they are rejected with
/// `UnsupportedPartOfSpeech` before any matching starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartOfSpeech {
    type Err = DecomposeError;

    /// Accepts the one-letter codes of the interactive tools (`n`, `v`)
    /// as well as full category names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "n" | "noun" => Ok(PartOfSpeech::Noun),
            "v" | "verb" => Ok(PartOfSpeech::Verb),
            "adj" | "adjective" => Ok(PartOfSpeech::Adjective),
            "adv" | "adverb" => Ok(PartOfSpeech::Adverb),
            other => Err(DecomposeError::UnsupportedPartOfSpeech(other.to_string())),
        }
    }
}

/// Decomposition engine generic over the rule-dataset provider.
///
/// The provider's tables are read-only, so one engine may serve
/// concurrent `decompose` calls without locking; every call's
/// intermediate hypothesis sets are local to that call.
pub struct Engine<P> {
    rules: P,
    config: Config,
    trace: Box<dyn TraceSink>,
}

impl<P: RuleProvider> Engine<P> {
    /// Create an engine with the default configuration.
    pub fn new(rules: P) -> Self {
        Self::with_config(rules, Config::default())
    }

    pub fn with_config(rules: P, config: Config) -> Self {
        Self {
            rules,
            config,
            trace: Box::new(NoopTrace),
        }
    }

    /// Replace the trace sink. Sinks observe the search; they cannot
    /// affect returned results.
    pub fn with_trace(mut self, trace: Box<dyn TraceSink>) -> Self {
        self.trace = trace;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn rules(&self) -> &P {
        &self.rules
    }

    /// Enumerate every decomposition of `word` consistent with the rule
    /// dataset and the given part of speech.
    ///
    /// The word is lower-cased first; every returned decomposition
    /// reassembles it exactly, and the list is never empty (a word with
    /// no recognized affixes decomposes into a single root morpheme).
    /// Results are deduplicated and sorted by ascending morpheme count,
    /// then by canonical key.
    pub fn decompose(
        &self,
        word: &str,
        pos: PartOfSpeech,
    ) -> Result<Vec<Decomposition>, DecomposeError> {
        match pos {
            PartOfSpeech::Noun | PartOfSpeech::Verb => {}
            other => {
                return Err(DecomposeError::UnsupportedPartOfSpeech(other.to_string()));
            }
        }

        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(DecomposeError::DegenerateInput);
        }

        let limit = self.config.max_hypotheses;
        let trace = self.trace.as_ref();
        let prefix_matches = matcher::find_prefixes(&word, self.rules.prefixes(), limit, trace)?;

        let mut decompositions = Vec::new();
        for (prefix_seq, stem) in &prefix_matches {
            if pos == PartOfSpeech::Noun {
                self.decompose_noun(prefix_seq, stem, limit, &mut decompositions)?;
            } else {
                self.decompose_verb(prefix_seq, stem, limit, &mut decompositions)?;
            }
        }

        // A word where every combination consumed the whole string still
        // yields one result: the word itself as a bare root.
        if decompositions.is_empty() {
            decompositions.push(Decomposition::new(vec![Morpheme::root(word.as_str())]));
        }

        let mut unique = dedup::dedupe(decompositions);
        unique.sort_by_cached_key(|d| (d.len(), dedup::canonical_key(d)));
        Ok(unique)
    }

    /// Noun stages: endings, then plural markers, then noun suffixes,
    /// each stripping from the right of the previous remainder. The
    /// layers therefore reappear left-to-right as root, noun-suffixes,
    /// plurals, endings.
    fn decompose_noun(
        &self,
        prefixes: &[Morpheme],
        stem: &str,
        limit: usize,
        out: &mut Vec<Decomposition>,
    ) -> Result<(), DecomposeError> {
        let trace = self.trace.as_ref();
        let ending_matches =
            matcher::find_suffixes(stem, self.rules.noun_endings(), Stage::Ending, limit, trace)?;
        for (endings, after_endings) in &ending_matches {
            let plural_matches = matcher::find_suffixes(
                after_endings,
                self.rules.plural_suffixes(),
                Stage::Plural,
                limit,
                trace,
            )?;
            for (plurals, after_plurals) in &plural_matches {
                let suffix_matches = matcher::find_suffixes(
                    after_plurals,
                    self.rules.noun_suffixes(),
                    Stage::NounSuffix,
                    limit,
                    trace,
                )?;
                for (suffixes, residual) in &suffix_matches {
                    if residual.is_empty() {
                        trace.event(&TraceEvent::BranchPruned {
                            stage: Stage::NounSuffix,
                            input: after_plurals,
                        });
                        continue;
                    }
                    let mut morphemes = Vec::with_capacity(
                        prefixes.len() + 1 + suffixes.len() + plurals.len() + endings.len(),
                    );
                    morphemes.extend_from_slice(prefixes);
                    morphemes.push(Morpheme::root(*residual));
                    morphemes.extend_from_slice(suffixes);
                    morphemes.extend_from_slice(plurals);
                    morphemes.extend_from_slice(endings);
                    out.push(Decomposition::new(morphemes));
                    if out.len() > limit {
                        return Err(DecomposeError::HypothesisLimit { limit });
                    }
                }
            }
        }
        Ok(())
    }

    /// Verb stages: just the verb-suffix table after the prefixes.
    fn decompose_verb(
        &self,
        prefixes: &[Morpheme],
        stem: &str,
        limit: usize,
        out: &mut Vec<Decomposition>,
    ) -> Result<(), DecomposeError> {
        let trace = self.trace.as_ref();
        let suffix_matches = matcher::find_suffixes(
            stem,
            self.rules.verb_suffixes(),
            Stage::VerbSuffix,
            limit,
            trace,
        )?;
        for (suffixes, residual) in &suffix_matches {
            if residual.is_empty() {
                trace.event(&TraceEvent::BranchPruned {
                    stage: Stage::VerbSuffix,
                    input: stem,
                });
                continue;
            }
            let mut morphemes = Vec::with_capacity(prefixes.len() + 1 + suffixes.len());
            morphemes.extend_from_slice(prefixes);
            morphemes.push(Morpheme::root(*residual));
            morphemes.extend_from_slice(suffixes);
            out.push(Decomposition::new(morphemes));
            if out.len() > limit {
                return Err(DecomposeError::HypothesisLimit { limit });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_of_speech_from_str() {
        assert_eq!("n".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Noun);
        assert_eq!("Verb".parse::<PartOfSpeech>().unwrap(), PartOfSpeech::Verb);
        assert_eq!(
            "adj".parse::<PartOfSpeech>().unwrap(),
            PartOfSpeech::Adjective
        );
    }

    #[test]
    fn unknown_pos_code_is_rejected_at_parse_time() {
        let err = "x".parse::<PartOfSpeech>().unwrap_err();
        assert_eq!(err, DecomposeError::UnsupportedPartOfSpeech("x".to_string()));
    }
}
