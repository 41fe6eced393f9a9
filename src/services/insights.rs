use std::time::Duration;

use fastrand::Rng;
use opentelemetry::KeyValue;
use tracing::instrument;

use crate::{
    config::Config,
    error::AppResult,
    models::{BusinessDataInput, BusinessReport, BusinessSubject, HeadlineQuery},
    services::generator,
    telemetry::{HEADLINES_REGENERATED, REPORTS_GENERATED, VALIDATION_FAILURES},
};

#[derive(Clone)]
pub struct InsightService {
    report_delay: Duration,
    headline_delay: Duration,
}

impl InsightService {
    pub fn new(config: &Config) -> Self {
        Self {
            report_delay: config.report_delay,
            headline_delay: config.headline_delay,
        }
    }

    #[instrument(name = "insights.analyze", skip(self, input))]
    pub async fn analyze(&self, input: BusinessDataInput) -> AppResult<BusinessReport> {
        let subject = validate(input, "business-data")?;

        tokio::time::sleep(self.report_delay).await;

        let report = generator::generate_report(&mut Rng::new(), &subject)?;

        REPORTS_GENERATED.add(1, &[]);

        tracing::info!(
            name = %subject.name,
            location = %subject.location,
            rating = report.rating,
            reviews = report.reviews,
            "Business report generated"
        );

        Ok(report)
    }

    #[instrument(name = "insights.regenerate_headline", skip(self, query))]
    pub async fn regenerate_headline(&self, query: HeadlineQuery) -> AppResult<String> {
        let subject = validate(query, "regenerate-headline")?;

        tokio::time::sleep(self.headline_delay).await;

        let headline = generator::regenerate_headline(&mut Rng::new(), &subject)?;

        HEADLINES_REGENERATED.add(1, &[]);

        tracing::info!(
            name = %subject.name,
            location = %subject.location,
            "Headline regenerated"
        );

        Ok(headline)
    }
}

fn validate<T>(input: T, endpoint: &'static str) -> AppResult<BusinessSubject>
where
    BusinessSubject: TryFrom<T, Error = crate::error::AppError>,
{
    BusinessSubject::try_from(input).inspect_err(|_| {
        VALIDATION_FAILURES.add(1, &[KeyValue::new("endpoint", endpoint)]);
    })
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use tokio_test::{assert_err, assert_ok};

    use super::*;
    use crate::error::AppError;
    use crate::services::generator::{RATING_MAX, RATING_MIN, REVIEWS};

    fn service(report_delay: Duration, headline_delay: Duration) -> InsightService {
        InsightService::new(&Config {
            report_delay,
            headline_delay,
            ..Config::default()
        })
    }

    fn input(name: &str, location: &str) -> BusinessDataInput {
        BusinessDataInput {
            name: Some(name.to_string()),
            location: Some(location.to_string()),
        }
    }

    #[tokio::test]
    async fn test_analyze_returns_report_in_range() {
        let service = service(Duration::ZERO, Duration::ZERO);

        let report = assert_ok!(service.analyze(input(" Cake & Co ", "Mumbai")).await);

        assert!((RATING_MIN..=RATING_MAX).contains(&report.rating));
        assert!(REVIEWS.contains(&report.reviews));
        assert!(report.headline.contains("Cake & Co"));
        assert!(report.headline.contains("Mumbai"));
        assert!(!report.headline.contains(" Cake & Co "));
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_name() {
        let service = service(Duration::ZERO, Duration::ZERO);

        let err = assert_err!(service.analyze(input("   ", "Mumbai")).await);
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_validation_happens_before_delay() {
        let service = service(Duration::from_secs(5), Duration::from_secs(5));
        let started = Instant::now();

        assert_err!(service.analyze(BusinessDataInput::default()).await);
        assert_err!(service.regenerate_headline(HeadlineQuery::default()).await);

        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn test_analyze_waits_for_configured_delay() {
        let service = service(Duration::from_millis(50), Duration::ZERO);
        let started = Instant::now();

        assert_ok!(service.analyze(input("Cake & Co", "Mumbai")).await);

        assert!(started.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_regenerate_headline_mentions_subject() {
        let service = service(Duration::ZERO, Duration::ZERO);
        let query = HeadlineQuery {
            name: Some("Cake & Co".to_string()),
            location: Some("Mumbai".to_string()),
        };

        let headline = assert_ok!(service.regenerate_headline(query).await);

        assert!(headline.contains("Cake & Co"));
        assert!(headline.contains("Mumbai"));
    }

    #[tokio::test]
    async fn test_regenerate_headline_rejects_missing_location() {
        let service = service(Duration::ZERO, Duration::ZERO);
        let query = HeadlineQuery {
            name: Some("Cake & Co".to_string()),
            location: None,
        };

        assert_err!(service.regenerate_headline(query).await);
    }
}
