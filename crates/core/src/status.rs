//! Status value sets for every entity axis.
//!
//! Values must match the CHECK constraints in the migrations. Each enum
//! serializes to its snake_case wire string; `ALL` arrays feed the enum
//! validators so error messages can list the accepted values.

use serde::{Deserialize, Serialize};

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planned,
    Active,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: &'static [&'static str] = &["planned", "active", "completed", "cancelled"];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Planned => "planned",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planned" => Some(ProjectStatus::Planned),
            "active" => Some(ProjectStatus::Active),
            "completed" => Some(ProjectStatus::Completed),
            "cancelled" => Some(ProjectStatus::Cancelled),
            _ => None,
        }
    }
}

/// Task execution status: free-form day-to-day progress, any assignee or
/// manager may change it. Orthogonal to [`TaskApprovalStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Blocked,
    Done,
}

impl TaskStatus {
    pub const ALL: &'static [&'static str] = &["todo", "in_progress", "blocked", "done"];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Blocked => "blocked",
            TaskStatus::Done => "done",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "todo" => Some(TaskStatus::Todo),
            "in_progress" => Some(TaskStatus::InProgress),
            "blocked" => Some(TaskStatus::Blocked),
            "done" => Some(TaskStatus::Done),
            _ => None,
        }
    }
}

/// Task governance status: role-gated, see `workflow::task` for the
/// allowed transitions per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskApprovalStatus {
    Draft,
    Pending,
    Approved,
}

impl TaskApprovalStatus {
    pub const ALL: &'static [&'static str] = &["draft", "pending", "approved"];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskApprovalStatus::Draft => "draft",
            TaskApprovalStatus::Pending => "pending",
            TaskApprovalStatus::Approved => "approved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(TaskApprovalStatus::Draft),
            "pending" => Some(TaskApprovalStatus::Pending),
            "approved" => Some(TaskApprovalStatus::Approved),
            _ => None,
        }
    }
}

/// Work log status. Monotone: pending may become approved or rejected,
/// and neither ever reverts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkLogStatus {
    Pending,
    Approved,
    Rejected,
}

impl WorkLogStatus {
    pub const ALL: &'static [&'static str] = &["pending", "approved", "rejected"];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkLogStatus::Pending => "pending",
            WorkLogStatus::Approved => "approved",
            WorkLogStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(WorkLogStatus::Pending),
            "approved" => Some(WorkLogStatus::Approved),
            "rejected" => Some(WorkLogStatus::Rejected),
            _ => None,
        }
    }
}

/// Decision recorded on an immutable approval row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub const ALL: &'static [&'static str] = &["approved", "rejected"];

    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    /// The work-log status a finalized log lands in for this decision.
    pub fn work_log_status(self) -> WorkLogStatus {
        match self {
            ApprovalStatus::Approved => WorkLogStatus::Approved,
            ApprovalStatus::Rejected => WorkLogStatus::Rejected,
        }
    }
}
