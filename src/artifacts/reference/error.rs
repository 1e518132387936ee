use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unsupported repository reference '{reference}': expected scheme://host/path or host:path")]
    MissingHostSeparator { reference: String },

    #[error("unsupported repository reference '{reference}': invalid host '{host}'")]
    UnsupportedReference { reference: String, host: String },

    /// The built-in URL pattern failed to compile; never caused by a reference
    #[error("invalid reference pattern: {0}")]
    Pattern(#[from] regex::Error),
}
