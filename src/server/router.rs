use std::net::SocketAddr;

use axum::http::Uri;
use axum::response::Redirect;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::error::StartupError;
use crate::server::handler::serve_info;
use crate::InfoEngine;

/// Fixed location of the report, under the platform's reserved prefix.
pub const SERVE_PATH: &str = "/_ah/aeinfo/";

pub fn router(engine: InfoEngine) -> Router {
    Router::new()
        .route("/_ah/aeinfo", get(add_trailing_slash))
        .route(SERVE_PATH, get(serve_info))
        .route("/_ah/aeinfo/{*rest}", get(serve_info))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

/// `/_ah/aeinfo` → `/_ah/aeinfo/`, query kept.
async fn add_trailing_slash(uri: Uri) -> Redirect {
    match uri.query() {
        Some(query) => Redirect::permanent(&format!("{}?{}", SERVE_PATH, query)),
        None => Redirect::permanent(SERVE_PATH),
    }
}

pub async fn start_info_server(engine: InfoEngine, addr: &str) -> Result<(), StartupError> {
    let listener = TcpListener::bind(addr).await.map_err(|source| StartupError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    serve(listener, engine).await
}

/// Serves on an already bound listener. Remote addresses reach the handler via `ConnectInfo`.
pub async fn serve(listener: TcpListener, engine: InfoEngine) -> Result<(), StartupError> {
    let local = listener.local_addr().map_err(StartupError::Serve)?;
    tracing::info!("Report available at http://{}{}", local, SERVE_PATH);

    let app = router(engine).into_make_service_with_connect_info::<SocketAddr>();
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
