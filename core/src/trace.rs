//! Structured trace hook for observing the hypothesis search.
//!
//! The engine emits a `TraceEvent` when a matcher stage starts, when a
//! candidate allomorph matches, and when a combination is pruned. Sinks
//! observe the search; they cannot affect returned results. The default
//! sink discards everything; `TracingSink` forwards events to the
//! `tracing` ecosystem.

use std::fmt;

/// Pipeline stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Prefix,
    Ending,
    Plural,
    NounSuffix,
    VerbSuffix,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Prefix => "prefix",
            Stage::Ending => "ending",
            Stage::Plural => "plural",
            Stage::NounSuffix => "noun-suffix",
            Stage::VerbSuffix => "verb-suffix",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One observation from the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent<'a> {
    /// A matcher stage began on `input`.
    StageEntered { stage: Stage, input: &'a str },
    /// An allomorph of rule `name` matched, leaving `remainder`.
    CandidateMatched {
        stage: Stage,
        name: &'a str,
        surface: &'a str,
        remainder: &'a str,
    },
    /// A combination was dropped because its residual root was empty.
    BranchPruned { stage: Stage, input: &'a str },
}

/// Observer for trace events.
pub trait TraceSink: Send + Sync {
    fn event(&self, event: &TraceEvent<'_>);
}

/// Default sink: ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTrace;

impl TraceSink for NoopTrace {
    fn event(&self, _event: &TraceEvent<'_>) {}
}

/// Sink that forwards events to `tracing` at TRACE level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn event(&self, event: &TraceEvent<'_>) {
        match event {
            TraceEvent::StageEntered { stage, input } => {
                tracing::trace!(stage = %stage, input, "stage entered");
            }
            TraceEvent::CandidateMatched {
                stage,
                name,
                surface,
                remainder,
            } => {
                tracing::trace!(stage = %stage, rule = name, surface, remainder, "candidate matched");
            }
            TraceEvent::BranchPruned { stage, input } => {
                tracing::trace!(stage = %stage, input, "branch pruned");
            }
        }
    }
}
