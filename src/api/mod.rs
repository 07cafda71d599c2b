//! API handlers for ToolKeeper REST endpoints

pub mod assignments;
pub mod dashboard;
pub mod employees;
pub mod health;
pub mod maintenance;
pub mod openapi;
pub mod projects;
pub mod tools;

use serde::Serialize;
use utoipa::ToSchema;

/// Response for mutations that do not return a record body. The store
/// owns record contents; callers re-fetch after a mutation.
#[derive(Serialize, ToSchema)]
pub struct MutationResponse {
    pub status: String,
}

impl MutationResponse {
    pub fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
        }
    }
}
