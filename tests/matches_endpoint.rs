use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use match_statistics::api::handlers::AppState;
use match_statistics::api::routes::create_router;
use match_statistics::api::ProviderClient;
use match_statistics::config::ProviderSettings;
use match_statistics::services::statistics::StatisticsService;

fn app_for(server: &MockServer) -> Router {
    let settings = ProviderSettings {
        base_url: server.uri(),
        timeout_secs: 5,
        ..ProviderSettings::default()
    };
    let client = ProviderClient::new(&settings).unwrap();
    let service = StatisticsService::with_client(client, 5);
    create_router(Arc::new(AppState { service }))
}

fn envelope(data: Value) -> Value {
    json!({ "doc": [{ "data": data }] })
}

/// `(DD/MM/YY, hh:mm, home, away, home score, away score)`
fn fixtures(records: &[(&str, &str, &str, &str, i32, i32)]) -> Value {
    let matches: Map<String, Value> = records
        .iter()
        .enumerate()
        .map(|(i, (date, time, home, away, home_score, away_score))| {
            let record = json!({
                "time": { "date": date, "time": time },
                "teams": { "home": { "name": home }, "away": { "name": away } },
                "result": { "home": home_score, "away": away_score },
                "comment": format!("{home} vs {away}")
            });
            (format!("{}", 500 + i), record)
        })
        .collect();
    envelope(json!({ "matches": matches }))
}

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

async fn mount_catalog(server: &MockServer) {
    mount_json(
        server,
        "/config_tournaments/1/17",
        envelope(json!({
            "tournaments": [{ "_id": 10, "name": "National League" }],
            "uniquetournaments": { "20": { "_id": 20, "name": "National Cup" } }
        })),
    )
    .await;
}

async fn get_matches(app: Router) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .uri("/matches")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_matches_returns_grouped_statistics() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_json(
        &server,
        "/fixtures_tournament/10/2021",
        fixtures(&[
            ("01/01/21", "18:00", "Lions", "Tigers", 1, 0),
            ("01/06/21", "18:00", "Bears", "Wolves", 2, 2),
            ("01/03/21", "18:00", "Eagles", "Hawks", 0, 3),
        ]),
    )
    .await;
    mount_json(
        &server,
        "/fixtures_tournament/20/2021",
        fixtures(&[
            ("01/05/21", "20:45", "Lions", "Bears", 4, 1),
            ("01/02/21", "20:45", "Tigers", "Wolves", 0, 0),
            ("01/04/21", "20:45", "Eagles", "Lions", 1, 2),
            ("01/12/20", "20:45", "Hawks", "Bears", 3, 3),
        ]),
    )
    .await;

    let (status, body) = get_matches(app_for(&server)).await;
    assert_eq!(status, StatusCode::OK);

    let body: Value = serde_json::from_slice(&body).unwrap();
    let statistics = body["statistics"].as_array().unwrap();
    assert_eq!(statistics.len(), 2);

    assert_eq!(statistics[0]["tournament"], json!({ "id": 10, "name": "National League" }));
    assert_eq!(statistics[1]["tournament"], json!({ "id": 20, "name": "National Cup" }));

    let dates = |entry: &Value| -> Vec<String> {
        entry["matches"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["dateTime"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(
        dates(&statistics[0]),
        vec!["2021-06-01T18:00:00Z", "2021-03-01T18:00:00Z"]
    );
    assert_eq!(
        dates(&statistics[1]),
        vec!["2021-05-01T20:45:00Z", "2021-04-01T20:45:00Z", "2021-02-01T20:45:00Z"]
    );

    let first = &statistics[0]["matches"][0];
    assert_eq!(first["tournamentId"], 10);
    assert_eq!(first["teams"], json!({ "home": "Bears", "away": "Wolves" }));
    assert_eq!(first["score"], json!({ "home": 2, "away": 2 }));
    assert_eq!(first["events"], "Bears vs Wolves");
}

#[tokio::test]
async fn test_matches_allows_any_origin() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_json(&server, "/fixtures_tournament/10/2021", fixtures(&[])).await;
    mount_json(&server, "/fixtures_tournament/20/2021", fixtures(&[])).await;

    let request = Request::builder()
        .uri("/matches")
        .header(header::ORIGIN, "http://example.com")
        .body(Body::empty())
        .unwrap();
    let response = app_for(&server).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "statistics": [] }));
}

#[tokio::test]
async fn test_catalog_failure_is_error_without_statistics() {
    let server = MockServer::start().await;
    mount_status(&server, "/config_tournaments/1/17", 500).await;

    let (status, body) = get_matches(app_for(&server)).await;

    assert!(status.is_server_error());
    let text = String::from_utf8(body).unwrap();
    assert!(!text.contains("statistics"));
}

#[tokio::test]
async fn test_single_fixture_failure_fails_request() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_json(
        &server,
        "/fixtures_tournament/10/2021",
        fixtures(&[("01/01/21", "18:00", "Lions", "Tigers", 1, 0)]),
    )
    .await;
    mount_status(&server, "/fixtures_tournament/20/2021", 502).await;

    let (status, body) = get_matches(app_for(&server)).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let text = String::from_utf8(body).unwrap();
    assert!(!text.contains("Lions"));
}

#[tokio::test]
async fn test_malformed_fixture_fails_request() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    mount_json(
        &server,
        "/fixtures_tournament/10/2021",
        fixtures(&[("01/01/21", "18:00", "Lions", "Tigers", 1, 0)]),
    )
    .await;
    mount_json(
        &server,
        "/fixtures_tournament/20/2021",
        envelope(json!({ "matches": { "1": { "teams": { "home": { "name": "Lions" } } } } })),
    )
    .await;

    let (status, _) = get_matches(app_for(&server)).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let server = MockServer::start().await;
    let request = Request::builder().uri("/tournaments").body(Body::empty()).unwrap();

    let response = app_for(&server).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
