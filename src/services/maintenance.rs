//! Maintenance log service

use chrono::NaiveDate;

use crate::config::AppIds;
use crate::engine::views;
use crate::error::AppResult;
use crate::models::{MaintenanceEntry, MaintenanceFields};
use crate::store::RecordStoreClient;

#[derive(Clone)]
pub struct MaintenanceService {
    store: RecordStoreClient,
    apps: AppIds,
}

impl MaintenanceService {
    pub fn new(store: RecordStoreClient, apps: AppIds) -> Self {
        Self { store, apps }
    }

    pub async fn list(&self) -> AppResult<Vec<MaintenanceEntry>> {
        self.store.list(&self.apps.maintenance).await
    }

    /// Entries with a next-due date, overdue first then soonest first
    pub async fn upcoming(&self, today: NaiveDate, limit: usize) -> AppResult<Vec<MaintenanceEntry>> {
        let entries = self
            .store
            .list::<MaintenanceFields>(&self.apps.maintenance)
            .await?;
        Ok(views::upcoming_maintenance(&entries, today, limit)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn get(&self, record_id: &str) -> AppResult<MaintenanceEntry> {
        self.store.get(&self.apps.maintenance, record_id).await
    }

    pub async fn create(&self, fields: &MaintenanceFields) -> AppResult<()> {
        self.store.create(&self.apps.maintenance, fields).await
    }

    pub async fn update(&self, record_id: &str, fields: &MaintenanceFields) -> AppResult<()> {
        self.store
            .update(&self.apps.maintenance, record_id, fields)
            .await
    }

    pub async fn delete(&self, record_id: &str) -> AppResult<()> {
        self.store.delete(&self.apps.maintenance, record_id).await
    }
}
