use crate::types::EntityId;

/// Failure taxonomy shared by every workflow operation.
///
/// Each variant is a normal return value, never a panic. The API layer
/// maps variants onto HTTP statuses; callers decide retry policy
/// (re-fetch for `Conflict`, fail fast for everything else).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Malformed or missing input field. Safe to retry after correcting
    /// the field; never mutates state.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The actor's role rank is insufficient for the operation.
    #[error("Forbidden: {0}")]
    PermissionDenied(String),

    /// The actor has no resolvable role record. Distinct from
    /// [`CoreError::PermissionDenied`]: the identity is mis-provisioned,
    /// not merely under-privileged.
    #[error("Policy error: {0}")]
    Policy(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// A conditional write matched zero rows: the entity's state already
    /// changed, or it never existed. The two are indistinguishable to the
    /// caller by design.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The requested state change violates workflow rules.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
