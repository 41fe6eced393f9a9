//! Client-side dashboard: the form state and the HTTP port it talks through.

mod client;
mod state;

pub use client::{ClientError, HttpInsightsClient, InsightsApi};
pub use state::{
    Dashboard, FETCH_FAILED, FieldErrors, LOCATION_REQUIRED, NAME_REQUIRED, Outcome,
    PendingRequest, REGENERATE_FAILED,
};
