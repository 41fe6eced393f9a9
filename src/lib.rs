pub mod config;
pub mod dashboard;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

pub use config::Config;

use services::InsightService;

#[derive(Clone)]
pub struct AppState {
    pub insight_service: InsightService,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            insight_service: InsightService::new(config),
        }
    }
}
