//! Employee management service

use crate::config::AppIds;
use crate::error::AppResult;
use crate::models::{Employee, EmployeeFields};
use crate::store::RecordStoreClient;

#[derive(Clone)]
pub struct EmployeesService {
    store: RecordStoreClient,
    apps: AppIds,
}

impl EmployeesService {
    pub fn new(store: RecordStoreClient, apps: AppIds) -> Self {
        Self { store, apps }
    }

    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        self.store.list(&self.apps.employees).await
    }

    pub async fn get(&self, record_id: &str) -> AppResult<Employee> {
        self.store.get(&self.apps.employees, record_id).await
    }

    pub async fn create(&self, fields: &EmployeeFields) -> AppResult<()> {
        self.store.create(&self.apps.employees, fields).await
    }

    pub async fn update(&self, record_id: &str, fields: &EmployeeFields) -> AppResult<()> {
        self.store
            .update(&self.apps.employees, record_id, fields)
            .await
    }

    pub async fn delete(&self, record_id: &str) -> AppResult<()> {
        self.store.delete(&self.apps.employees, record_id).await
    }
}
