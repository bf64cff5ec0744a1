//! libromanian-core
//!
//! Core rule model, affix matchers, decomposition pipeline and
//! deduplication shared by language-specific crates.
//!
//! The engine is rule-driven, not statistical: a language crate supplies
//! a read-only [`RuleProvider`] dataset and the pipeline enumerates
//! every segmentation of a word consistent with a declared part of
//! speech. All hypotheses are returned; ranking or single-best selection
//! is a caller concern.
//!
//! Public API:
//! - `Category`, `Rule`, `RuleSet`, `RuleProvider` - the rule model
//! - `Morpheme`, `Decomposition` - matched segmentations
//! - `Engine`, `PartOfSpeech` - the decomposition pipeline
//! - `DecomposeError` - error taxonomy
//! - `TraceSink`, `TraceEvent` - optional structured trace hook
//! - `Config` - engine limits and TOML helpers

use serde::{Deserialize, Serialize};

pub mod rule;
pub use rule::{Category, Rule, RuleProvider, RuleSet};

pub mod morpheme;
pub use morpheme::{Decomposition, Morpheme};

pub mod matcher;
pub use matcher::StageMatch;

pub mod engine;
pub use engine::{Engine, PartOfSpeech};

pub mod dedup;

pub mod trace;
pub use trace::{NoopTrace, Stage, TraceEvent, TraceSink, TracingSink};

pub mod error;
pub use error::DecomposeError;

/// Engine limits.
///
/// The hypothesis search is exponential in the number of stacked affix
/// matches along a peeling chain, so the engine enforces a ceiling and
/// fails with [`DecomposeError::HypothesisLimit`] instead of letting a
/// pathological rule table blow up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Maximum hypotheses per matcher stage and per result list.
    pub max_hypotheses: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Far above anything a realistic affix table produces.
            max_hypotheses: 10_000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
