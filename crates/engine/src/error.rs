//! The module contains the errors the engine can return.
//!
//! The errors are:
//!
//! - [`InvalidExpense`] returned when an expense is malformed (non-positive
//!   amount, empty split, custom shares not adding up).
//! - [`UnknownPerson`] returned when an expense references someone outside
//!   the roster.
//! - [`InternalInconsistency`] returned when a settlement plan does not
//!   reconcile with the balances it was built from.
//!
//!  [`InvalidExpense`]: EngineError::InvalidExpense
//!  [`UnknownPerson`]: EngineError::UnknownPerson
//!  [`InternalInconsistency`]: EngineError::InternalInconsistency
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),
    #[error("\"{0}\" is not in the roster!")]
    UnknownPerson(String),
    #[error("Internal inconsistency: {0}")]
    InternalInconsistency(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid person: {0}")]
    InvalidPerson(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" still takes part in other expenses")]
    PersonReferenced(String),
}

impl EngineError {
    /// Returns `true` for errors caused by bad input, as opposed to a bug in
    /// the engine itself.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::InternalInconsistency(_))
    }
}
