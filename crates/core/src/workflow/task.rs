//! Task workflow: two orthogonal state machines on one entity.
//!
//! The execution axis (`TaskStatus`) tracks day-to-day progress and is
//! unrestricted: any actor who can see the task may move it. The
//! governance axis (`TaskApprovalStatus`) is role-gated:
//!
//! | actor   | create                         | update                  | approve |
//! |---------|--------------------------------|-------------------------|---------|
//! | member  | draft (default) or pending     | draft <-> pending       | no      |
//! | manager | approved, whatever the request | any                     | yes     |
//! | admin   | approved, whatever the request | any                     | yes     |
//!
//! Members can only assign tasks to themselves; manager+ may assign any
//! company member. Approve is a force-transition with no precondition on
//! the prior approval status, and deliberately carries no concurrency
//! guard: concurrent approvals are last-writer-wins and land in the same
//! state.

use crate::error::CoreError;
use crate::roles::Role;
use crate::status::TaskApprovalStatus;
use crate::types::EntityId;

/// Resolved creation decision: the approval status and assignee a new
/// task must be written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTaskDecision {
    pub approval_status: TaskApprovalStatus,
    pub assigned_to: Option<EntityId>,
}

/// Resolve the governance fields for a new task.
///
/// For a member actor the assignee is forced to the actor (members
/// cannot create tasks on others' behalf) and the requested approval
/// status is restricted to draft/pending, defaulting to draft when
/// absent. For manager+ the task is auto-approved regardless of the
/// requested value, and any assignee is accepted.
pub fn resolve_create(
    role: Role,
    actor: EntityId,
    requested_status: Option<TaskApprovalStatus>,
    requested_assignee: Option<EntityId>,
) -> Result<NewTaskDecision, CoreError> {
    if role == Role::Member {
        let approval_status = requested_status.unwrap_or(TaskApprovalStatus::Draft);
        if approval_status == TaskApprovalStatus::Approved {
            return Err(CoreError::InvalidTransition(
                "members can only create draft or pending tasks".into(),
            ));
        }
        return Ok(NewTaskDecision {
            approval_status,
            assigned_to: Some(actor),
        });
    }

    Ok(NewTaskDecision {
        approval_status: TaskApprovalStatus::Approved,
        assigned_to: requested_assignee,
    })
}

/// Check the role-gated parts of a task update.
///
/// `reassigns` is whether the request touches `assigned_to` at all;
/// `requested_status` is the approval status the request asks for, if
/// any. Execution-status and scalar field changes need no check here.
pub fn check_update(
    role: Role,
    reassigns: bool,
    requested_status: Option<TaskApprovalStatus>,
) -> Result<(), CoreError> {
    if role == Role::Member {
        if reassigns {
            return Err(CoreError::InvalidTransition(
                "members cannot reassign tasks".into(),
            ));
        }
        if requested_status == Some(TaskApprovalStatus::Approved) {
            return Err(CoreError::InvalidTransition(
                "members can only move tasks to draft or pending".into(),
            ));
        }
    }
    Ok(())
}

/// Check that `actor` may submit the task for approval.
///
/// Submit is the assignee's convenience transition; anyone else goes
/// through the regular update path.
pub fn check_submit(actor: EntityId, assigned_to: Option<EntityId>) -> Result<(), CoreError> {
    if assigned_to == Some(actor) {
        Ok(())
    } else {
        Err(CoreError::PermissionDenied(
            "only the task assignee may submit it for approval".into(),
        ))
    }
}
