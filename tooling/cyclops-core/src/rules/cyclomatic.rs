// tooling/cyclops-core/src/rules/cyclomatic.rs
//
// Metrics/CyclomaticComplexity: reports methods whose complexity exceeds the
// configured maximum. An if (or if let, or a match guard) adds one, an else
// does not. && and || are shorthand for nested ifs and add one each. Loops
// have an exit condition and add one, as does every non-default match arm.

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;

use crate::complexity::method_complexity;
use crate::config::CyclomaticConfig;
use crate::error::{AnalysisError, Result};
use crate::rules::{Offense, Remediation, RuleName, RuleState, Severity};
use crate::syntax::{MethodUnit, SyntaxNode};

pub fn message(method_name: &str, complexity: i64, max: u32) -> String {
    format!(
        "Cyclomatic complexity for {} is too high. [{}/{}]",
        method_name, complexity, max
    )
}

/// Compares a method's complexity with `state`'s maximum. On violation the
/// offense carries a remediation raising the maximum to the observed value.
pub fn evaluate_method<N: SyntaxNode>(state: &RuleState, unit: &MethodUnit<N>) -> Option<Offense> {
    let complexity = method_complexity(unit);
    let max = state.max();
    if complexity <= i64::from(max) {
        return None;
    }

    debug!(method = %unit.name, complexity, max, "cyclomatic complexity too high");
    Some(Offense {
        rule: RuleName::CyclomaticComplexity,
        severity: Severity::Convention,
        location: unit.location,
        message: message(&unit.name, complexity, max),
        remediation: Some(Remediation::RaiseMax {
            max: u32::try_from(complexity).unwrap_or(u32::MAX),
        }),
    })
}

/// The rule as configured for one analysis run.
#[derive(Debug, Clone)]
pub struct CyclomaticComplexity {
    state: RuleState,
    allowed_methods: HashSet<String>,
    allowed_patterns: Vec<Regex>,
}

impl CyclomaticComplexity {
    pub fn new(max: u32) -> Self {
        Self {
            state: RuleState::new(max),
            allowed_methods: HashSet::new(),
            allowed_patterns: Vec::new(),
        }
    }

    pub fn from_config(config: &CyclomaticConfig) -> Result<Self> {
        let allowed_patterns = config
            .allowed_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| AnalysisError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            state: RuleState::new(config.max),
            allowed_methods: config.allowed_methods.iter().cloned().collect(),
            allowed_patterns,
        })
    }

    pub fn state(&self) -> &RuleState {
        &self.state
    }

    pub fn apply(&mut self, remediation: &Remediation) -> bool {
        self.state.apply(remediation)
    }

    pub fn is_allowed(&self, method_name: &str) -> bool {
        self.allowed_methods.contains(method_name)
            || self.allowed_patterns.iter().any(|re| re.is_match(method_name))
    }

    pub fn check<N: SyntaxNode>(&self, unit: &MethodUnit<N>) -> Option<Offense> {
        if self.is_allowed(&unit.name) {
            return None;
        }
        evaluate_method(&self.state, unit)
    }
}
