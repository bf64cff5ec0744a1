//! Romanian affix dataset and rule-file loading.
//!
//! The built-in tables cover the productive prefixes, noun suffixes,
//! plural markers, definite/case endings and verb suffixes the analyzer
//! recognizes. An external TOML rule file can replace them wholesale;
//! the loader owns all dataset validation (the core trusts its
//! provider).

use libromanian_core::{Category, Rule, RuleProvider, RuleSet};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// (canonical name, gloss, allomorphs)
type RuleRow = (&'static str, &'static str, &'static [&'static str]);

const PREFIXES: &[RuleRow] = &[
    ("anti", "against", &["anti"]),
    ("con", "together", &["con", "com", "co"]),
    ("des", "reversal", &["des", "dez"]),
    ("in", "in/into", &["în", "îm"]),
    ("ne", "negation", &["ne"]),
    ("pre", "anteriority", &["pre"]),
    ("ras", "intensifier", &["răs", "răz"]),
    ("re", "repetition", &["re"]),
    ("stra", "through/ancestral", &["stră"]),
    ("sub", "under", &["sub"]),
    ("supra", "above", &["supra"]),
];

const NOUN_SUFFIXES: &[RuleRow] = &[
    ("ar", "occupation", &["ar"]),
    ("as", "diminutive", &["aș"]),
    ("eala", "result", &["eală"]),
    ("el", "diminutive", &["el"]),
    ("ime", "collective", &["ime"]),
    ("isor", "diminutive", &["ișor", "ișoară"]),
    ("ist", "adherent", &["ist", "istă"]),
    ("ita", "diminutive", &["iță"]),
    ("re", "action nominal", &["re", "are", "ere", "ire"]),
    ("tie", "abstract", &["ție", "ăție"]),
    (
        "tor",
        "agent",
        &["tor", "toare", "ător", "ătoare", "itor", "itoare"],
    ),
    ("ut", "diminutive", &["uț"]),
];

const PLURAL_SUFFIXES: &[RuleRow] = &[
    ("e", "plural", &["e"]),
    ("i", "plural", &["i"]),
    ("uri", "plural", &["uri"]),
];

const NOUN_ENDINGS: &[RuleRow] = &[
    ("a", "def.fem.sg", &["a"]),
    ("ei", "gen/dat.fem.sg", &["ei"]),
    ("le", "def.pl", &["le"]),
    ("lor", "gen/dat.pl", &["lor"]),
    ("lui", "gen/dat.masc.sg", &["lui"]),
    ("ul", "def.masc.sg", &["ul", "l", "u"]),
];

const VERB_SUFFIXES: &[RuleRow] = &[
    ("and", "gerund", &["ând", "ind"]),
    ("at", "participle", &["at", "it", "ut", "t"]),
    ("eaza", "present.3sg", &["ează"]),
    ("esc", "present.1sg", &["esc", "ăsc"]),
    ("este", "present.3sg", &["ește", "ăște"]),
    ("ez", "present.1sg", &["ez"]),
];

fn build(rows: &[RuleRow], category: Category, optional: bool) -> RuleSet {
    let mut set = RuleSet::new(optional);
    for (name, meaning, allomorphs) in rows {
        set.insert(*name, Rule::new(category, *meaning, allomorphs));
    }
    set
}

/// The Romanian affix dataset.
///
/// Endings and plural markers are optional categories (the "not
/// present" hypothesis is always explored alongside matches); prefixes
/// and the core suffix tables assume absence only when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanianRules {
    prefixes: RuleSet,
    noun_endings: RuleSet,
    plural_suffixes: RuleSet,
    noun_suffixes: RuleSet,
    verb_suffixes: RuleSet,
}

static BUILTIN: Lazy<RomanianRules> = Lazy::new(RomanianRules::new);

impl RomanianRules {
    /// Build the built-in dataset.
    pub fn new() -> Self {
        Self {
            prefixes: build(PREFIXES, Category::Prefix, false),
            noun_endings: build(NOUN_ENDINGS, Category::Ending, true),
            plural_suffixes: build(PLURAL_SUFFIXES, Category::Suffix, true),
            noun_suffixes: build(NOUN_SUFFIXES, Category::Suffix, false),
            verb_suffixes: build(VERB_SUFFIXES, Category::Suffix, false),
        }
    }

    /// Process-wide shared instance of the built-in dataset.
    pub fn shared() -> &'static Self {
        &BUILTIN
    }

    /// Load a dataset from a TOML rule file.
    pub fn load_toml<P: AsRef<Path>>(path: P) -> Result<Self, RuleFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a dataset from the TOML rule-file format.
    pub fn from_toml_str(content: &str) -> Result<Self, RuleFileError> {
        let file: RuleFile = toml::from_str(content)?;
        Ok(Self {
            prefixes: table_to_set(file.prefixes, Category::Prefix)?,
            noun_endings: table_to_set(file.noun_endings, Category::Ending)?,
            plural_suffixes: table_to_set(file.plural_suffixes, Category::Suffix)?,
            noun_suffixes: table_to_set(file.noun_suffixes, Category::Suffix)?,
            verb_suffixes: table_to_set(file.verb_suffixes, Category::Suffix)?,
        })
    }

    /// Serialize the dataset back to the rule-file format.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let file = RuleFile {
            prefixes: spec_from(&self.prefixes),
            noun_endings: spec_from(&self.noun_endings),
            plural_suffixes: spec_from(&self.plural_suffixes),
            noun_suffixes: spec_from(&self.noun_suffixes),
            verb_suffixes: spec_from(&self.verb_suffixes),
        };
        toml::to_string_pretty(&file)
    }
}

impl Default for RomanianRules {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleProvider for RomanianRules {
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

/// Errors from loading an external rule file.
#[derive(Debug, Error)]
pub enum RuleFileError {
    #[error("failed to read rule file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rule file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("rule '{rule}' has an empty allomorph set")]
    EmptyAllomorphSet { rule: String },

    #[error("rule '{rule}' contains an empty allomorph")]
    EmptyAllomorph { rule: String },
}

#[derive(Debug, Serialize, Deserialize)]
struct RuleFile {
    prefixes: TableSpec,
    noun_endings: TableSpec,
    plural_suffixes: TableSpec,
    noun_suffixes: TableSpec,
    verb_suffixes: TableSpec,
}

#[derive(Debug, Serialize, Deserialize)]
struct TableSpec {
    #[serde(default)]
    optional: bool,
    rules: BTreeMap<String, RuleSpec>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RuleSpec {
    meaning: String,
    allomorphs: Vec<String>,
}

fn table_to_set(table: TableSpec, category: Category) -> Result<RuleSet, RuleFileError> {
    let mut set = RuleSet::new(table.optional);
    for (name, rule) in table.rules {
        if rule.allomorphs.is_empty() {
            return Err(RuleFileError::EmptyAllomorphSet { rule: name });
        }
        let mut allomorphs = Vec::with_capacity(rule.allomorphs.len());
        for raw in &rule.allomorphs {
            let allomorph = normalize(raw);
            if allomorph.is_empty() {
                return Err(RuleFileError::EmptyAllomorph { rule: name.clone() });
            }
            allomorphs.push(allomorph);
        }
        let refs: Vec<&str> = allomorphs.iter().map(String::as_str).collect();
        set.insert(name, Rule::new(category, rule.meaning, &refs));
    }
    Ok(set)
}

fn spec_from(set: &RuleSet) -> TableSpec {
    TableSpec {
        optional: set.is_optional(),
        rules: set
            .iter()
            .map(|(name, rule)| {
                (
                    name.to_string(),
                    RuleSpec {
                        meaning: rule.meaning.clone(),
                        allomorphs: rule.allomorphs.iter().cloned().collect(),
                    },
                )
            })
            .collect(),
    }
}

/// NFC-normalize, trim and lower-case a rule string so composed and
/// decomposed diacritic spellings compare equal against lower-cased
/// input words.
fn normalize(s: &str) -> String {
    s.nfc().collect::<String>().trim().to_lowercase()
}
