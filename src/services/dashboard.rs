//! Dashboard service: full reload plus derived-state computation

use chrono::{NaiveDate, Utc};

use crate::config::AppIds;
use crate::engine::{self, DashboardSummary, Snapshot};
use crate::error::AppResult;
use crate::store::RecordStoreClient;

#[derive(Clone)]
pub struct DashboardService {
    store: RecordStoreClient,
    apps: AppIds,
}

impl DashboardService {
    pub fn new(store: RecordStoreClient, apps: AppIds) -> Self {
        Self { store, apps }
    }

    /// Probe record store reachability, for the readiness endpoint.
    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping(&self.apps.tools).await
    }

    /// Load all five collections concurrently. All-or-nothing: if any
    /// fetch fails the whole reload fails and no partial state escapes.
    pub async fn snapshot(&self) -> AppResult<Snapshot> {
        let (tools, employees, projects, assignments, maintenance) = tokio::try_join!(
            self.store.list(&self.apps.tools),
            self.store.list(&self.apps.employees),
            self.store.list(&self.apps.projects),
            self.store.list(&self.apps.assignments),
            self.store.list(&self.apps.maintenance),
        )?;

        Ok(Snapshot {
            tools,
            employees,
            projects,
            assignments,
            maintenance,
        })
    }

    /// Reload and summarize as of today.
    pub async fn summary(&self) -> AppResult<DashboardSummary> {
        self.summary_for(Utc::now().date_naive()).await
    }

    /// Reload and summarize for an explicit reference day.
    pub async fn summary_for(&self, today: NaiveDate) -> AppResult<DashboardSummary> {
        let snapshot = self.snapshot().await?;
        tracing::debug!(
            tools = snapshot.tools.len(),
            assignments = snapshot.assignments.len(),
            maintenance = snapshot.maintenance.len(),
            "snapshot loaded"
        );
        Ok(engine::summarize(&snapshot, today))
    }
}
