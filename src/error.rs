use thiserror::Error;

/// URL normalization error types
///
/// Raised before any tree mutation, so a rejected URL never changes a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid authority: {0}")]
    InvalidAuthority(String),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Unterminated IPv6 literal: {0}")]
    UnterminatedIpv6(String),
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
