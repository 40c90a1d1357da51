use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sitelog_core::report::LoggedEffort;
use sitelog_core::types::{EntityId, Timestamp};

/// A row from the `work_logs` table. `project_id` is denormalized from
/// the parent task and always resolved server-side, never taken from the
/// request. Mutable only while `status = 'pending'`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkLog {
    pub id: EntityId,
    pub task_id: EntityId,
    pub project_id: EntityId,
    pub user_id: EntityId,
    pub log_date: NaiveDate,
    pub qty_done: Option<f64>,
    pub hours: Option<f64>,
    pub note: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
}

impl LoggedEffort for WorkLog {
    fn hours(&self) -> Option<f64> {
        self.hours
    }

    fn qty_done(&self) -> Option<f64> {
        self.qty_done
    }

    fn status(&self) -> &str {
        &self.status
    }
}

/// Request body for creating a work log under a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWorkLogRequest {
    pub log_date: Option<String>,
    pub qty_done: Option<f64>,
    pub hours: Option<f64>,
    pub note: Option<String>,
}

/// Request body for patching a pending work log.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateWorkLogRequest {
    pub qty_done: Option<f64>,
    pub hours: Option<f64>,
    pub note: Option<String>,
}

/// Request body for the approve and reject endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    pub note: Option<String>,
}

/// Validated insert values for a new work log.
#[derive(Debug, Clone)]
pub struct NewWorkLog {
    pub task_id: EntityId,
    pub project_id: EntityId,
    pub user_id: EntityId,
    pub log_date: NaiveDate,
    pub qty_done: Option<f64>,
    pub hours: Option<f64>,
    pub note: Option<String>,
}

/// Validated partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct WorkLogUpdate {
    pub qty_done: Option<f64>,
    pub hours: Option<f64>,
    pub note: Option<String>,
}

impl WorkLogUpdate {
    pub fn is_empty(&self) -> bool {
        self.qty_done.is_none() && self.hours.is_none() && self.note.is_none()
    }
}
