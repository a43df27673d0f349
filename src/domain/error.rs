//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the outcome-tree model.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("node already exists: {0}")]
    DuplicateNode(String),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("node already has a parent: {child} (existing parent: {parent})")]
    MultipleParents { child: String, parent: String },

    #[error("leaf has no sum value: {0}")]
    MissingSumValue(String),

    #[error("graph is not a rooted tree: {0}")]
    NotATree(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
