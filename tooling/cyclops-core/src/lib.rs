pub mod complexity;
pub mod config;
pub mod error;
pub mod frontend;
pub mod report;
pub mod rules;
pub mod syntax;
pub mod token;


use tracing::debug;

pub use complexity::{method_complexity, ComplexityScorer, ImplicitReturnAdjuster, MethodMetrics};
pub use config::{CyclopsConfig, CONFIG_FILE_NAME};
pub use error::{AnalysisError, Result};
pub use report::FileReport;
pub use rules::cyclomatic::CyclomaticComplexity;
pub use rules::{Offense, Remediation, RuleName, RuleState, Severity};
pub use syntax::{Location, MethodUnit, Node, NodeKind, SyntaxNode};
pub use token::{Token, TokenKind};

// ── Analyzer ──────────────────────────────────────────────────────────────────

/// Runs the enabled rules over Rust sources. Holds the complexity rule's
/// state for the whole run, so remediations applied between files take
/// effect for the files that follow.
pub struct Analyzer {
    config: CyclopsConfig,
    cyclomatic: CyclomaticComplexity,
}

impl Analyzer {
    pub fn new(config: CyclopsConfig) -> Result<Self> {
        let cyclomatic = CyclomaticComplexity::from_config(&config.cyclomatic_complexity)?;
        Ok(Self { config, cyclomatic })
    }

    pub fn config(&self) -> &CyclopsConfig {
        &self.config
    }

    /// Current maximum of the complexity rule.
    pub fn max(&self) -> u32 {
        self.cyclomatic.state().max()
    }

    /// The configuration with the complexity maximum as currently raised.
    pub fn effective_config(&self) -> CyclopsConfig {
        let mut config = self.config.clone();
        config.cyclomatic_complexity.max = self.max();
        config
    }

    pub fn apply(&mut self, remediation: &Remediation) -> bool {
        self.cyclomatic.apply(remediation)
    }

    pub fn analyze_source(&self, path: &str, source: &str) -> Result<FileReport> {
        let mut methods = Vec::new();
        let mut offenses = Vec::new();

        if self.config.cyclomatic_complexity.enabled {
            for unit in frontend::parse_methods(source)? {
                methods.push(MethodMetrics::measure(&unit));
                offenses.extend(self.cyclomatic.check(&unit));
            }
        }

        if self.config.ascii_identifiers.enabled {
            let tokens = frontend::tokenize(source)?;
            offenses.extend(rules::ascii_identifiers::evaluate_tokens(&tokens)?);
        }

        offenses.sort_by_key(|o| o.location);
        debug!(path, methods = methods.len(), offenses = offenses.len(), "analyzed source");

        Ok(FileReport {
            path: path.to_string(),
            methods,
            offenses,
        })
    }
}
