use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// The rating/review/headline triple shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessReport {
    pub rating: f64,
    pub reviews: u32,
    pub headline: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct BusinessDataInput {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HeadlineQuery {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineResponse {
    pub headline: String,
}

/// A validated business name and location, both trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessSubject {
    pub name: String,
    pub location: String,
}

impl BusinessSubject {
    pub fn parse(name: Option<&str>, location: Option<&str>) -> AppResult<Self> {
        let name = name.map(str::trim).unwrap_or_default();
        let location = location.map(str::trim).unwrap_or_default();

        if name.is_empty() || location.is_empty() {
            return Err(AppError::missing_fields());
        }

        Ok(Self {
            name: name.to_string(),
            location: location.to_string(),
        })
    }
}

impl TryFrom<BusinessDataInput> for BusinessSubject {
    type Error = AppError;

    fn try_from(input: BusinessDataInput) -> AppResult<Self> {
        Self::parse(input.name.as_deref(), input.location.as_deref())
    }
}

impl TryFrom<HeadlineQuery> for BusinessSubject {
    type Error = AppError;

    fn try_from(query: HeadlineQuery) -> AppResult<Self> {
        Self::parse(query.name.as_deref(), query.location.as_deref())
    }
}
