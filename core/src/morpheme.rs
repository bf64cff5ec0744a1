//! Morpheme instances and full-word decompositions.
//!
//! This module provides:
//! - `Morpheme`: one matched allomorph paired with the rule it realizes
//! - `Decomposition`: an ordered morpheme sequence whose concatenated
//!   surface forms reproduce the analyzed word exactly

use crate::rule::{Category, Rule};
use serde::{Deserialize, Serialize};

/// A single matched morpheme: one allomorph surface form and the rule it
/// realizes. Created only during matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface: String,
    pub rule: Rule,
}

impl Morpheme {
    pub fn new<S: Into<String>>(surface: S, rule: Rule) -> Self {
        Morpheme {
            surface: surface.into(),
            rule,
        }
    }

    /// Root morpheme over a residual string. The rule is
    /// self-referential: the residual is the sole allomorph of its own
    /// root rule.
    pub fn root<S: Into<String>>(surface: S) -> Self {
        let surface = surface.into();
        let rule = Rule::new(Category::Root, "root", &[surface.as_str()]);
        Morpheme { surface, rule }
    }

    pub fn category(&self) -> Category {
        self.rule.category
    }

    pub fn meaning(&self) -> &str {
        &self.rule.meaning
    }
}

/// One candidate segmentation of a word.
///
/// Invariants for every decomposition the engine returns: concatenating
/// the surface forms in order reproduces the lower-cased input word
/// exactly, and the root morpheme's surface form is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    morphemes: Vec<Morpheme>,
}

impl Decomposition {
    pub fn new(morphemes: Vec<Morpheme>) -> Self {
        Decomposition { morphemes }
    }

    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    /// Concatenated surface forms, in listed order.
    pub fn surface(&self) -> String {
        self.morphemes.iter().map(|m| m.surface.as_str()).collect()
    }

    /// The root morpheme, if present.
    pub fn root(&self) -> Option<&Morpheme> {
        self.morphemes
            .iter()
            .find(|m| m.category() == Category::Root)
    }

    /// (surface, category, meaning) triples for presentation layers.
    pub fn triples(&self) -> Vec<(&str, Category, &str)> {
        self.morphemes
            .iter()
            .map(|m| (m.surface.as_str(), m.category(), m.meaning()))
            .collect()
    }
}
