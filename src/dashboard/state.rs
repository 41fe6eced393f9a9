use crate::models::BusinessReport;

use super::{ClientError, InsightsApi};

pub const NAME_REQUIRED: &str = "Business name is required";
pub const LOCATION_REQUIRED: &str = "Location is required";
pub const FETCH_FAILED: &str = "Failed to fetch business data. Please try again.";
pub const REGENERATE_FAILED: &str = "Failed to regenerate headline. Please try again.";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub location: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }
}

/// Inputs captured when an action starts; the call is made with these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub name: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was sent: the same action is in flight or there is no report yet.
    Skipped,
    /// Field validation failed; nothing was sent.
    Invalid,
    Updated,
    Failed,
}

/// Transient state behind the analysis form.
#[derive(Debug, Default)]
pub struct Dashboard {
    business_name: String,
    location: String,
    errors: FieldErrors,
    report: Option<BusinessReport>,
    is_loading: bool,
    is_regenerating: bool,
    notice: Option<&'static str>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_business_name(&mut self, name: impl Into<String>) {
        self.business_name = name.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn report(&self) -> Option<&BusinessReport> {
        self.report.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_regenerating(&self) -> bool {
        self.is_regenerating
    }

    /// The generic failure message left by the last failed call, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    pub fn validate(&mut self) -> bool {
        self.errors = FieldErrors {
            name: self.business_name.trim().is_empty().then_some(NAME_REQUIRED),
            location: self.location.trim().is_empty().then_some(LOCATION_REQUIRED),
        };

        self.errors.is_empty()
    }

    fn pending(&self) -> PendingRequest {
        PendingRequest {
            name: self.business_name.clone(),
            location: self.location.clone(),
        }
    }

    pub fn begin_submit(&mut self) -> Result<PendingRequest, Outcome> {
        self.notice = None;

        if !self.validate() {
            return Err(Outcome::Invalid);
        }
        if self.is_loading {
            return Err(Outcome::Skipped);
        }

        self.is_loading = true;

        Ok(self.pending())
    }

    /// Results that land after `reset` are dropped.
    pub fn finish_submit(&mut self, result: Result<BusinessReport, ClientError>) -> Outcome {
        if !self.is_loading {
            return Outcome::Skipped;
        }
        self.is_loading = false;

        match result {
            Ok(report) => {
                self.report = Some(report);
                Outcome::Updated
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch business data");
                self.notice = Some(FETCH_FAILED);
                Outcome::Failed
            }
        }
    }

    pub async fn submit(&mut self, api: &dyn InsightsApi) -> Outcome {
        let request = match self.begin_submit() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let result = api.fetch_report(&request.name, &request.location).await;

        self.finish_submit(result)
    }

    pub fn begin_regenerate(&mut self) -> Result<PendingRequest, Outcome> {
        if self.report.is_none() || self.is_regenerating {
            return Err(Outcome::Skipped);
        }

        self.is_regenerating = true;
        self.notice = None;

        Ok(self.pending())
    }

    /// Swaps in the new headline; rating and reviews stay as they were.
    pub fn finish_regenerate(&mut self, result: Result<String, ClientError>) -> Outcome {
        if !self.is_regenerating {
            return Outcome::Skipped;
        }
        self.is_regenerating = false;

        match result {
            Ok(headline) => match self.report.as_mut() {
                Some(report) => {
                    report.headline = headline;
                    Outcome::Updated
                }
                None => Outcome::Skipped,
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to regenerate headline");
                self.notice = Some(REGENERATE_FAILED);
                Outcome::Failed
            }
        }
    }

    pub async fn regenerate_headline(&mut self, api: &dyn InsightsApi) -> Outcome {
        let request = match self.begin_regenerate() {
            Ok(request) => request,
            Err(outcome) => return outcome,
        };

        let result = api
            .regenerate_headline(&request.name, &request.location)
            .await;

        self.finish_regenerate(result)
    }

    pub fn reset(&mut self) {
        self.business_name.clear();
        self.location.clear();
        self.report = None;
        self.errors = FieldErrors::default();
        self.notice = None;
        self.is_loading = false;
        self.is_regenerating = false;
    }
}
