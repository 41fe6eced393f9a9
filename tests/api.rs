use std::net::SocketAddr;
use std::time::Duration;

use growthpro_api::dashboard::{Dashboard, HttpInsightsClient, InsightsApi, Outcome};
use growthpro_api::{AppState, Config, routes};
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let config = Config {
        report_delay: Duration::ZERO,
        headline_delay: Duration::ZERO,
        ..Config::default()
    };
    let app = routes::create_app(AppState::new(&config), &config);

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr should be available");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_client_fetches_report() {
    let client = HttpInsightsClient::new(&spawn_server().await);

    let report = client
        .fetch_report("Cake & Co", "Mumbai")
        .await
        .expect("report should be returned");

    assert!((3.8..=4.9).contains(&report.rating));
    assert!((50..=499).contains(&report.reviews));
    assert!(report.headline.contains("Cake & Co"));
    assert!(report.headline.contains("Mumbai"));
}

#[tokio::test]
async fn test_client_encodes_headline_query() {
    let client = HttpInsightsClient::new(&spawn_server().await);

    let headline = client
        .regenerate_headline("Cake & Co", "São Paulo")
        .await
        .expect("headline should be returned");

    assert!(headline.contains("Cake & Co"));
    assert!(headline.contains("São Paulo"));
}

#[tokio::test]
async fn test_missing_fields_return_400() {
    let base_url = spawn_server().await;
    let http = reqwest::Client::new();

    let response = http
        .post(format!("{base_url}/api/business-data"))
        .json(&serde_json::json!({ "location": "Mumbai" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());

    let response = http
        .get(format!("{base_url}/api/regenerate-headline?name=Cake"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_dashboard_end_to_end() {
    let client = HttpInsightsClient::new(&spawn_server().await);
    let mut dashboard = Dashboard::new();
    dashboard.set_business_name("Cake & Co");
    dashboard.set_location("Mumbai");

    assert_eq!(dashboard.submit(&client).await, Outcome::Updated);
    let before = dashboard.report().cloned().expect("report should be shown");

    for _ in 0..5 {
        assert_eq!(dashboard.regenerate_headline(&client).await, Outcome::Updated);

        let after = dashboard.report().expect("report should still be shown");
        assert_eq!(after.rating, before.rating);
        assert_eq!(after.reviews, before.reviews);
        assert!(after.headline.contains("Cake & Co"));
    }

    dashboard.reset();
    assert!(dashboard.report().is_none());
}

#[tokio::test]
async fn test_dashboard_surfaces_unreachable_server() {
    let client = HttpInsightsClient::new("http://127.0.0.1:9");
    let mut dashboard = Dashboard::new();
    dashboard.set_business_name("Cake & Co");
    dashboard.set_location("Mumbai");

    assert_eq!(dashboard.submit(&client).await, Outcome::Failed);
    assert!(dashboard.notice().is_some());
    assert!(dashboard.report().is_none());
}
