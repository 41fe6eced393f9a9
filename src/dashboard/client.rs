use async_trait::async_trait;
use thiserror::Error;

use crate::models::{BusinessDataInput, BusinessReport, HeadlineResponse};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response status: {0}")]
    Status(u16),
}

#[async_trait]
pub trait InsightsApi: Send + Sync {
    async fn fetch_report(&self, name: &str, location: &str)
    -> Result<BusinessReport, ClientError>;

    async fn regenerate_headline(&self, name: &str, location: &str)
    -> Result<String, ClientError>;
}

#[derive(Clone)]
pub struct HttpInsightsClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInsightsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Status(status.as_u16()))
    }
}

#[async_trait]
impl InsightsApi for HttpInsightsClient {
    async fn fetch_report(
        &self,
        name: &str,
        location: &str,
    ) -> Result<BusinessReport, ClientError> {
        let body = BusinessDataInput {
            name: Some(name.to_string()),
            location: Some(location.to_string()),
        };

        let response = self
            .client
            .post(self.url("/api/business-data"))
            .json(&body)
            .send()
            .await?;

        Ok(ensure_success(response)?.json().await?)
    }

    async fn regenerate_headline(
        &self,
        name: &str,
        location: &str,
    ) -> Result<String, ClientError> {
        let response = self
            .client
            .get(self.url("/api/regenerate-headline"))
            .query(&[("name", name), ("location", location)])
            .send()
            .await?;

        let HeadlineResponse { headline } = ensure_success(response)?.json().await?;

        Ok(headline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_dropped() {
        let client = HttpInsightsClient::new("http://localhost:8080/");

        assert_eq!(
            client.url("/api/business-data"),
            "http://localhost:8080/api/business-data"
        );
    }

    #[test]
    fn test_status_error_message() {
        assert_eq!(
            ClientError::Status(400).to_string(),
            "Unexpected response status: 400"
        );
    }
}
