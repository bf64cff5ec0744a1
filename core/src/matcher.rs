//! Affix matchers: recursive enumeration of every way to peel prefixes
//! or suffixes from a word.
//!
//! Both matchers return hypothesis lists of `(morphemes, remainder)`
//! where the morphemes are in left-to-right surface order and the
//! remainder borrows from the input word. Every consumed allomorph has
//! length >= 1, so each recursive step strictly shortens the remainder
//! and the search terminates.
//!
//! The empty hypothesis (nothing stripped, full word as remainder) is
//! governed by the rule table's `optional` flag: always offered for
//! optional categories, offered only when nothing matched otherwise.

use crate::error::DecomposeError;
use crate::morpheme::Morpheme;
use crate::rule::RuleSet;
use crate::trace::{Stage, TraceEvent, TraceSink};

/// One stage hypothesis: stripped morphemes (surface order) and what is
/// left of the word.
pub type StageMatch<'a> = (Vec<Morpheme>, &'a str);

/// Enumerate every way to strip zero or more leading prefixes.
pub fn find_prefixes<'a>(
    word: &'a str,
    rules: &RuleSet,
    limit: usize,
    trace: &dyn TraceSink,
) -> Result<Vec<StageMatch<'a>>, DecomposeError> {
    trace.event(&TraceEvent::StageEntered {
        stage: Stage::Prefix,
        input: word,
    });
    let mut matches = prefix_rec(word, rules, limit, trace)?;
    if rules.is_optional() || matches.is_empty() {
        matches.push((Vec::new(), word));
    }
    Ok(matches)
}

fn prefix_rec<'a>(
    word: &'a str,
    rules: &RuleSet,
    limit: usize,
    trace: &dyn TraceSink,
) -> Result<Vec<StageMatch<'a>>, DecomposeError> {
    let mut matches: Vec<StageMatch<'a>> = Vec::new();
    for (name, rule) in rules.iter() {
        for allomorph in &rule.allomorphs {
            // A zero-length allomorph would never shorten the remainder.
            if allomorph.is_empty() {
                continue;
            }
            let Some(rest) = word.strip_prefix(allomorph.as_str()) else {
                continue;
            };
            trace.event(&TraceEvent::CandidateMatched {
                stage: Stage::Prefix,
                name,
                surface: allomorph.as_str(),
                remainder: rest,
            });
            let head = Morpheme::new(allomorph.clone(), rule.clone());
            // Stop after this prefix.
            matches.push((vec![head.clone()], rest));
            // Keep stripping from the shortened remainder.
            if !rest.is_empty() {
                for (tail, tail_rest) in prefix_rec(rest, rules, limit, trace)? {
                    let mut seq = Vec::with_capacity(1 + tail.len());
                    seq.push(head.clone());
                    seq.extend(tail);
                    matches.push((seq, tail_rest));
                }
            }
            if matches.len() > limit {
                return Err(DecomposeError::HypothesisLimit { limit });
            }
        }
    }
    Ok(matches)
}

/// Enumerate every way to strip zero or more trailing affixes drawn from
/// one rule table.
pub fn find_suffixes<'a>(
    word: &'a str,
    rules: &RuleSet,
    stage: Stage,
    limit: usize,
    trace: &dyn TraceSink,
) -> Result<Vec<StageMatch<'a>>, DecomposeError> {
    trace.event(&TraceEvent::StageEntered {
        stage,
        input: word,
    });
    let mut matches = suffix_rec(word, rules, stage, limit, trace)?;
    if rules.is_optional() || matches.is_empty() {
        matches.push((Vec::new(), word));
    }
    Ok(matches)
}

fn suffix_rec<'a>(
    word: &'a str,
    rules: &RuleSet,
    stage: Stage,
    limit: usize,
    trace: &dyn TraceSink,
) -> Result<Vec<StageMatch<'a>>, DecomposeError> {
    let mut matches: Vec<StageMatch<'a>> = Vec::new();
    for (name, rule) in rules.iter() {
        for allomorph in &rule.allomorphs {
            if allomorph.is_empty() {
                continue;
            }
            let Some(rest) = word.strip_suffix(allomorph.as_str()) else {
                continue;
            };
            trace.event(&TraceEvent::CandidateMatched {
                stage,
                name,
                surface: allomorph.as_str(),
                remainder: rest,
            });
            let outer = Morpheme::new(allomorph.clone(), rule.clone());
            // Stop after this suffix.
            matches.push((vec![outer.clone()], rest));
            // Keep stripping from the shortened remainder. A continuation
            // is stripped left of `outer`, so it precedes it in surface
            // order.
            if !rest.is_empty() {
                for (tail, tail_rest) in suffix_rec(rest, rules, stage, limit, trace)? {
                    let mut seq = Vec::with_capacity(tail.len() + 1);
                    seq.extend(tail);
                    seq.push(outer.clone());
                    matches.push((seq, tail_rest));
                }
            }
            if matches.len() > limit {
                return Err(DecomposeError::HypothesisLimit { limit });
            }
        }
    }
    Ok(matches)
}
