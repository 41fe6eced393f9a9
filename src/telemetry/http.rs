use std::time::Duration;

use axum::http::{HeaderName, Request, Response};
use opentelemetry::KeyValue;
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::Span;

use super::{HTTP_REQUEST_DURATION, HTTP_REQUESTS_TOTAL};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Low-cardinality name for the route a request hit.
pub fn endpoint_label(path: &str) -> &'static str {
    match path.trim_end_matches('/') {
        "/api/business-data" => "business_data",
        "/api/regenerate-headline" => "regenerate_headline",
        "/api/health" => "health",
        _ => "unmatched",
    }
}

#[derive(Clone)]
pub struct HttpMakeSpan;

impl<B> MakeSpan<B> for HttpMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let method = request.method().as_str();
        let path = request.uri().path();
        let endpoint = endpoint_label(path);

        let request_id = request
            .headers()
            .get(&X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        // Query strings carry the business name and location; keep them out of the span.
        tracing::info_span!(
            "HTTP request",
            otel.name = %format!("{method} {endpoint}"),
            http.method = %method,
            http.route = %path,
            http.request_id = %request_id,
            growthpro.endpoint = endpoint,
            http.response.status_code = tracing::field::Empty,
            otel.status_code = tracing::field::Empty,
        )
    }
}

#[derive(Clone)]
pub struct HttpOnResponse;

impl<B> OnResponse<B> for HttpOnResponse {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status().as_u16();

        span.record("http.response.status_code", status as i64);

        if status >= 500 {
            span.record("otel.status_code", "ERROR");
        } else {
            span.record("otel.status_code", "OK");
        }

        let latency_ms = latency.as_secs_f64() * 1000.0;
        let attributes = [
            KeyValue::new("http.status_code", status.to_string()),
            KeyValue::new("http.status_class", format!("{}xx", status / 100)),
        ];

        HTTP_REQUESTS_TOTAL.add(1, &attributes);
        HTTP_REQUEST_DURATION.record(latency_ms, &attributes);

        tracing::info!(
            http.response.status_code = status,
            latency_ms = latency_ms,
            "finished processing request"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_label_known_routes() {
        assert_eq!(endpoint_label("/api/business-data"), "business_data");
        assert_eq!(endpoint_label("/api/regenerate-headline"), "regenerate_headline");
        assert_eq!(endpoint_label("/api/health/"), "health");
    }

    #[test]
    fn test_endpoint_label_collapses_unknown_paths() {
        assert_eq!(endpoint_label("/api/business-data/123"), "unmatched");
        assert_eq!(endpoint_label("/"), "unmatched");
    }
}
