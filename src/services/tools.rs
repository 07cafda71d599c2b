//! Tool management service

use crate::config::AppIds;
use crate::engine::views::{self, ToolFilter};
use crate::error::AppResult;
use crate::models::{Tool, ToolFields};
use crate::store::RecordStoreClient;

#[derive(Clone)]
pub struct ToolsService {
    store: RecordStoreClient,
    apps: AppIds,
}

impl ToolsService {
    pub fn new(store: RecordStoreClient, apps: AppIds) -> Self {
        Self { store, apps }
    }

    /// List tools, filtered and sorted (condition severity worst-first,
    /// then name)
    pub async fn list(&self, filter: &ToolFilter) -> AppResult<Vec<Tool>> {
        let tools = self.store.list::<ToolFields>(&self.apps.tools).await?;
        Ok(views::tool_list(&tools, filter)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn get(&self, record_id: &str) -> AppResult<Tool> {
        self.store.get(&self.apps.tools, record_id).await
    }

    pub async fn create(&self, fields: &ToolFields) -> AppResult<()> {
        self.store.create(&self.apps.tools, fields).await
    }

    pub async fn update(&self, record_id: &str, fields: &ToolFields) -> AppResult<()> {
        self.store.update(&self.apps.tools, record_id, fields).await
    }

    pub async fn delete(&self, record_id: &str) -> AppResult<()> {
        self.store.delete(&self.apps.tools, record_id).await
    }
}
