//! Work log review rules: the one-shot approval lifecycle.
//!
//! A work log is created `pending` and mutable; approve or reject
//! finalizes it exactly once. The finalization itself is a conditional
//! write in the repository layer (`status = 'pending'` predicate); this
//! module owns the parts that must be decided before any state is
//! touched — most importantly that a rejection carries a note.

use crate::error::CoreError;
use crate::status::ApprovalStatus;
use crate::validate;

/// Validate the reviewer-supplied note for a finalization decision.
///
/// Approve accepts an optional note; reject demands a non-blank one.
/// Returns the note to record on the approval row. Fails with
/// `Validation` before the conditional write runs, so a bad request
/// never consumes the log's single transition.
pub fn validate_review_note(
    decision: ApprovalStatus,
    note: Option<&str>,
) -> Result<Option<String>, CoreError> {
    match decision {
        ApprovalStatus::Approved => Ok(note.map(str::to_string)),
        ApprovalStatus::Rejected => validate::require_str(note, "note").map(Some),
    }
}
