use std::env;
use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing::{info, warn};

use activities_api::store::ActivityDirectory;
use activities_api::web;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    // The catalog lives for the whole process; handlers get it via State.
    let directory = ActivityDirectory::seeded();
    let app = web::app(directory);

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("invalid HOST/PORT");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            warn!("Could not bind {}: {}. Trying {}:{}", addr, e, host, port + 1);
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("invalid fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("could not bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().expect("no local address");
    info!("Activities API listening on http://{}", bound_addr);

    axum::serve(listener, app).await.expect("server error");
}
