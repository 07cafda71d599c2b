//! ToolKeeper Tool Management System
//!
//! A Rust server for a small trade business' tool management dashboard:
//! tools, employees, projects, checkout assignments and maintenance records
//! live in a remote hosted record store; this service proxies CRUD access
//! and computes the derived dashboard state (availability, overdue returns,
//! upcoming maintenance, condition and category distributions).

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
