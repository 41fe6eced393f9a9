mod health;
mod insights;

pub use health::health_check;
pub use insights::{business_data, regenerate_headline};
