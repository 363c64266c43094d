use thiserror::Error;

use crate::syntax::Location;

/// Errors surfaced by the analysis core.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to parse source: {0}")]
    Parse(#[from] syn::Error),

    #[error("failed to tokenize source: {0}")]
    Lex(String),

    /// The lexer broke its contract: an identifier token carried no text.
    #[error("malformed identifier token at {location}: empty text")]
    MalformedToken { location: Location },

    #[error("invalid allowed pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
