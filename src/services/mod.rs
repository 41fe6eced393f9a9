pub mod generator;
mod insights;
pub mod templates;

pub use insights::InsightService;
