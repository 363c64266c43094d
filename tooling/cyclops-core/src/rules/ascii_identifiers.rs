// tooling/cyclops-core/src/rules/ascii_identifiers.rs
//
// Style/AsciiIdentifiers: flags identifiers containing non-ASCII characters.

use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::rules::{Offense, RuleName, Severity};
use crate::token::Token;

pub const MSG: &str = "Use only ascii symbols in identifiers.";

/// One offense per identifier token whose text is not pure ASCII, in stream
/// order.
pub fn evaluate_tokens(tokens: &[Token]) -> Result<Vec<Offense>> {
    let mut offenses = Vec::new();

    for token in tokens.iter().filter(|t| t.is_identifier()) {
        if token.text.is_empty() {
            return Err(AnalysisError::MalformedToken {
                location: token.location,
            });
        }
        if !token.text.is_ascii() {
            debug!(identifier = %token.text, location = %token.location, "non-ascii identifier");
            offenses.push(Offense {
                rule: RuleName::AsciiIdentifiers,
                severity: Severity::Convention,
                location: token.location,
                message: MSG.to_string(),
                remediation: None,
            });
        }
    }

    Ok(offenses)
}
