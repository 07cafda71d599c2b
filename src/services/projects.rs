//! Project management service

use crate::config::AppIds;
use crate::error::AppResult;
use crate::models::{Project, ProjectFields};
use crate::store::RecordStoreClient;

#[derive(Clone)]
pub struct ProjectsService {
    store: RecordStoreClient,
    apps: AppIds,
}

impl ProjectsService {
    pub fn new(store: RecordStoreClient, apps: AppIds) -> Self {
        Self { store, apps }
    }

    pub async fn list(&self) -> AppResult<Vec<Project>> {
        self.store.list(&self.apps.projects).await
    }

    pub async fn get(&self, record_id: &str) -> AppResult<Project> {
        self.store.get(&self.apps.projects, record_id).await
    }

    pub async fn create(&self, fields: &ProjectFields) -> AppResult<()> {
        self.store.create(&self.apps.projects, fields).await
    }

    pub async fn update(&self, record_id: &str, fields: &ProjectFields) -> AppResult<()> {
        self.store
            .update(&self.apps.projects, record_id, fields)
            .await
    }

    pub async fn delete(&self, record_id: &str) -> AppResult<()> {
        self.store.delete(&self.apps.projects, record_id).await
    }
}
