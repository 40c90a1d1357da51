use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use sitelog_core::types::{EntityId, Timestamp};

/// A row from the `tasks` table. `status` is the execution axis,
/// `approval_status` the governance axis; the two evolve independently.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: EntityId,
    pub project_id: EntityId,
    pub title: String,
    pub unit: String,
    pub planned_qty: Option<f64>,
    pub planned_hours: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub approval_status: String,
    pub assigned_to: Option<EntityId>,
    pub created_at: Timestamp,
}

/// Request body for creating a task under a project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub title: Option<String>,
    pub unit: Option<String>,
    pub planned_qty: Option<f64>,
    pub planned_hours: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub approval_status: Option<String>,
    pub assigned_to: Option<EntityId>,
}

/// Request body for patching a task.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub unit: Option<String>,
    pub planned_qty: Option<f64>,
    pub planned_hours: Option<f64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub approval_status: Option<String>,
    pub assigned_to: Option<EntityId>,
}

/// Validated insert values for a new task.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub project_id: EntityId,
    pub title: String,
    pub unit: String,
    pub planned_qty: Option<f64>,
    pub planned_hours: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: String,
    pub approval_status: String,
    pub assigned_to: Option<EntityId>,
}

/// Validated partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub unit: Option<String>,
    pub planned_qty: Option<f64>,
    pub planned_hours: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub approval_status: Option<String>,
    pub assigned_to: Option<EntityId>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.unit.is_none()
            && self.planned_qty.is_none()
            && self.planned_hours.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.status.is_none()
            && self.approval_status.is_none()
            && self.assigned_to.is_none()
    }
}
