//! Domain error model.

use thiserror::Error;

use crate::id::GoodId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a synchronous, local failure raised before any state is
/// mutated. Callers decide whether to abort or report; nothing here retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument was rejected at the call that introduced it (negative
    /// quantity, blank identifier, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Not enough stock (or reserved quantity) to satisfy a take.
    #[error("insufficient stock for {good}: requested {requested}, available {available}")]
    InsufficientStock {
        good: GoodId,
        requested: i64,
        available: i64,
    },

    /// The good is not held by the collection at all.
    #[error("good {0} not found")]
    NotFound(GoodId),

    /// Two containers for different goods were merged.
    #[error("good id {expected} doesn't match incoming id {actual}")]
    IdentityMismatch { expected: GoodId, actual: GoodId },

    /// The operation is not allowed in the current state (e.g. ordering an
    /// empty cart).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A domain invariant was violated (e.g. quantity overflow).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn not_found(good: GoodId) -> Self {
        Self::NotFound(good)
    }

    pub fn insufficient_stock(good: GoodId, requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            good,
            requested,
            available,
        }
    }

    /// Rejects a negative quantity, naming the offending argument.
    pub fn ensure_non_negative(amount: i64, name: &str) -> DomainResult<()> {
        if amount < 0 {
            return Err(Self::validation(format!(
                "{name} must not be negative (got {amount})"
            )));
        }
        Ok(())
    }
}
