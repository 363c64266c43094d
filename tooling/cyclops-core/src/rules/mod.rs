// tooling/cyclops-core/src/rules/mod.rs
//
// Offense model shared by the rules, and the mutable per-rule state that a
// remediation may raise.

pub mod ascii_identifiers;
pub mod cyclomatic;

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::syntax::Location;

// ── Rule identity ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleName {
    #[serde(rename = "Metrics/CyclomaticComplexity")]
    CyclomaticComplexity,
    #[serde(rename = "Style/AsciiIdentifiers")]
    AsciiIdentifiers,
}

impl RuleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::CyclomaticComplexity => "Metrics/CyclomaticComplexity",
            RuleName::AsciiIdentifiers => "Style/AsciiIdentifiers",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Convention,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Convention => "C",
            Severity::Warning => "W",
            Severity::Error => "E",
        };
        f.write_str(label)
    }
}

// ── Offenses ──────────────────────────────────────────────────────────────────

/// Action a host may take to make an offense go away on the next run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Remediation {
    /// Raise the rule's configured maximum to the observed value.
    RaiseMax { max: u32 },
}

/// A single reported rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Offense {
    pub rule: RuleName,
    pub severity: Severity,
    pub location: Location,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<Remediation>,
}

// ── Rule state ────────────────────────────────────────────────────────────────

/// Configured maximum of a threshold rule, alive for a whole analysis run.
///
/// `apply` is the only place the maximum changes. Hosts that share one state
/// between threads must serialize calls to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleState {
    max: u32,
}

impl RuleState {
    pub fn new(max: u32) -> Self {
        Self { max }
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Applies a remediation. The maximum only ever grows, so applying the
    /// remediations of several offenses in any order ends at the largest.
    /// Returns whether the maximum changed.
    pub fn apply(&mut self, remediation: &Remediation) -> bool {
        match *remediation {
            Remediation::RaiseMax { max } if max > self.max => {
                debug!(from = self.max, to = max, "raising configured maximum");
                self.max = max;
                true
            }
            Remediation::RaiseMax { .. } => false,
        }
    }
}
