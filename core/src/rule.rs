//! Rule model: affix categories, rules, and per-category rule tables.
//!
//! A `Rule` describes one canonical affix: its category, a free-text
//! gloss, and the set of allomorph spellings that all realize it.
//! `RuleSet` is one category's name -> rule table together with the
//! empty-hypothesis policy for that category. `RuleProvider` is the seam
//! through which a language crate supplies its dataset to the engine.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Affix category of a morpheme rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Prefix,
    Root,
    Suffix,
    Ending,
}

impl Category {
    /// Stable lowercase name, used in canonical keys and display output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Prefix => "prefix",
            Category::Root => "root",
            Category::Suffix => "suffix",
            Category::Ending => "ending",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One morpheme rule.
///
/// Immutable once constructed. Allomorphs are kept in a `BTreeSet` so
/// iteration order, and with it matching and canonical dedup keys, is
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub category: Category,
    pub meaning: String,
    pub allomorphs: BTreeSet<String>,
}

impl Rule {
    pub fn new<M: Into<String>>(category: Category, meaning: M, allomorphs: &[&str]) -> Self {
        Self {
            category,
            meaning: meaning.into(),
            allomorphs: allomorphs.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// One affix category's table: canonical name -> rule, plus the policy
/// flag for the "no affix stripped" hypothesis.
///
/// `optional = true` means the empty hypothesis is always offered
/// alongside any matches (endings, plural markers); `optional = false`
/// means it is offered only when nothing matched at all (prefixes, core
/// suffix classes). Attaching the flag to the table keeps the policy in
/// the dataset instead of at each call site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: BTreeMap<String, Rule>,
    optional: bool,
}

impl RuleSet {
    pub fn new(optional: bool) -> Self {
        Self {
            rules: BTreeMap::new(),
            optional,
        }
    }

    pub fn insert<N: Into<String>>(&mut self, name: N, rule: Rule) {
        self.rules.insert(name.into(), rule);
    }

    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    /// Iterate rules in canonical-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.rules.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether the empty hypothesis is always offered for this category.
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

/// Rule-dataset provider consumed by the decomposition engine.
///
/// A language crate implements this over its own tables. The engine
/// never mutates the data and shares it across calls without copying.
pub trait RuleProvider {
    fn prefixes(&self) -> &RuleSet;
    fn noun_endings(&self) -> &RuleSet;
    fn plural_suffixes(&self) -> &RuleSet;
    fn noun_suffixes(&self) -> &RuleSet;
    fn verb_suffixes(&self) -> &RuleSet;
}

impl<T: RuleProvider + ?Sized> RuleProvider for &T {
    fn prefixes(&self) -> &RuleSet {
        (**self).prefixes()
    }

    fn noun_endings(&self) -> &RuleSet {
        (**self).noun_endings()
    }

    fn plural_suffixes(&self) -> &RuleSet {
        (**self).plural_suffixes()
    }

    fn noun_suffixes(&self) -> &RuleSet {
        (**self).noun_suffixes()
    }

    fn verb_suffixes(&self) -> &RuleSet {
        (**self).verb_suffixes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ruleset_iterates_in_name_order() {
        let mut set = RuleSet::new(false);
        set.insert("ne", Rule::new(Category::Prefix, "negation", &["ne"]));
        set.insert("des", Rule::new(Category::Prefix, "reversal", &["des", "dez"]));
        set.insert("re", Rule::new(Category::Prefix, "repetition", &["re"]));

        let names: Vec<&str> = set.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["des", "ne", "re"]);
    }

    #[test]
    fn rule_allomorphs_are_a_set() {
        let rule = Rule::new(Category::Suffix, "gerund", &["ând", "ind", "ând"]);
        assert_eq!(rule.allomorphs.len(), 2);
        assert!(rule.allomorphs.contains("ind"));
    }

    #[test]
    fn category_display() {
        assert_eq!(Category::Prefix.to_string(), "prefix");
        assert_eq!(Category::Ending.to_string(), "ending");
    }
}
