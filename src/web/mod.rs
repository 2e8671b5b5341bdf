pub mod error;
pub mod routes;

use axum::response::Redirect;
use axum::routing::{get, get_service, post};
use axum::Router;
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::store::ActivityDirectory;

/// Build the whole application router. `main` and the integration tests go
/// through this one function so they serve the identical surface.
pub fn app(directory: ActivityDirectory) -> Router {
    Router::new()
        // The browser entry point lives in the static bundle.
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(routes::activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        .layer(CatchPanicLayer::new())
        .with_state(directory)
}
