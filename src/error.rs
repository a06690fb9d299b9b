use thiserror::Error;

/// Errors surfaced by planner operations. All are local to a single
/// operation; none require retry or rollback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// Incomplete or malformed submission; the user must correct input.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A work-policy warning. Not a hard failure: the caller must
    /// re-prompt the user for explicit override confirmation.
    #[error("Policy violation: {0}")]
    PolicyViolation(String),

    /// Actor lacks the role or team relationship for the attempted
    /// transition.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl PlanError {
    pub fn validation(message: impl Into<String>) -> Self {
        PlanError::Validation(message.into())
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        PlanError::PermissionDenied(message.into())
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        PlanError::NotFound(what.into())
    }
}
