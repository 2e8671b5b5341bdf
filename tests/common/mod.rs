use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use indexmap::IndexMap;
use tower::ServiceExt;

use activities_api::models::Activity;
use activities_api::store::ActivityDirectory;
use activities_api::web;

/// Build the full application router around the given directory.
///
/// This goes through the same `web::app` that `main` uses, so the tests
/// exercise the identical routing and middleware stack as production.
pub fn build_test_app(directory: ActivityDirectory) -> Router {
    web::app(directory)
}

/// App with the production seed catalog.
pub fn seeded_app() -> Router {
    build_test_app(ActivityDirectory::seeded())
}

/// Directory holding a single activity, for targeted capacity scenarios.
pub fn directory_with(name: &str, max_participants: usize, participants: &[&str]) -> ActivityDirectory {
    let activity = Activity {
        description: "Test activity".to_string(),
        schedule: "Mondays, 3:30 PM - 5:00 PM".to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    };
    ActivityDirectory::new(IndexMap::from([(name.to_string(), activity)]))
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
