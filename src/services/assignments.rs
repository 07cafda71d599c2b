//! Assignment (checkout) service

use chrono::{Duration, NaiveDate};

use crate::config::AppIds;
use crate::engine::{availability, views};
use crate::error::{AppError, AppResult};
use crate::models::assignment::CreateAssignment;
use crate::models::reference::record_url;
use crate::models::{Assignment, AssignmentFields, ToolCondition, ToolFields};
use crate::store::RecordStoreClient;

#[derive(Clone)]
pub struct AssignmentsService {
    store: RecordStoreClient,
    apps: AppIds,
}

impl AssignmentsService {
    pub fn new(store: RecordStoreClient, apps: AppIds) -> Self {
        Self { store, apps }
    }

    /// List assignments. With `active_only`, closed ones are dropped and
    /// the rest are ordered overdue-first, then by planned return.
    pub async fn list(&self, active_only: bool, today: NaiveDate) -> AppResult<Vec<Assignment>> {
        let assignments = self
            .store
            .list::<AssignmentFields>(&self.apps.assignments)
            .await?;
        if !active_only {
            return Ok(assignments);
        }
        Ok(views::active_assignments(&assignments, today)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn get(&self, record_id: &str) -> AppResult<Assignment> {
        self.store.get(&self.apps.assignments, record_id).await
    }

    /// Check out a tool to an employee.
    ///
    /// Policy: the tool must exist, must not already have an open
    /// assignment (no double-booking) and must not be flagged defective.
    pub async fn create(&self, request: &CreateAssignment, today: NaiveDate) -> AppResult<()> {
        if request.tool_id.is_empty() || request.employee_id.is_empty() {
            return Err(AppError::Validation(
                "tool_id and employee_id are required".to_string(),
            ));
        }

        let tool = self
            .store
            .get::<ToolFields>(&self.apps.tools, &request.tool_id)
            .await?;
        if tool.fields.condition == Some(ToolCondition::Defective) {
            return Err(AppError::BusinessRule(format!(
                "Tool {} is defective and cannot be assigned",
                tool.display_name()
            )));
        }

        let assignments = self
            .store
            .list::<AssignmentFields>(&self.apps.assignments)
            .await?;
        if availability::open_tool_ids(&assignments).contains(request.tool_id.as_str()) {
            return Err(AppError::Conflict(format!(
                "Tool {} already has an open assignment",
                tool.display_name()
            )));
        }

        let base = self.store.base_url();
        let fields = AssignmentFields {
            tool: Some(record_url(base, &self.apps.tools, &request.tool_id)),
            employee: Some(record_url(base, &self.apps.employees, &request.employee_id)),
            project: request
                .project_id
                .as_deref()
                .map(|id| record_url(base, &self.apps.projects, id)),
            assigned_on: Some(
                request
                    .assigned_on
                    .clone()
                    .unwrap_or_else(|| today.format("%Y-%m-%d").to_string()),
            ),
            planned_return: Some(request.planned_return.clone().unwrap_or_else(|| {
                (today + Duration::days(7)).format("%Y-%m-%d").to_string()
            })),
            returned_on: None,
            notes: request.notes.clone(),
        };

        self.store.create(&self.apps.assignments, &fields).await
    }

    /// Close an assignment by setting the actual return date. Closing is a
    /// one-shot transition; an already-closed assignment is a conflict.
    pub async fn return_assignment(&self, record_id: &str, today: NaiveDate) -> AppResult<()> {
        let assignment = self.get(record_id).await?;
        if !assignment.is_open() {
            return Err(AppError::Conflict(format!(
                "Assignment {} is already returned",
                record_id
            )));
        }

        let patch = AssignmentFields {
            returned_on: Some(today.format("%Y-%m-%d").to_string()),
            ..AssignmentFields::default()
        };
        self.store
            .update(&self.apps.assignments, record_id, &patch)
            .await
    }

    pub async fn update(&self, record_id: &str, fields: &AssignmentFields) -> AppResult<()> {
        self.store
            .update(&self.apps.assignments, record_id, fields)
            .await
    }

    pub async fn delete(&self, record_id: &str) -> AppResult<()> {
        self.store.delete(&self.apps.assignments, record_id).await
    }
}
