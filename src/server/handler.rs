use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use tracing::warn;

use crate::platform::RequestContext;
use crate::report::gather;
use crate::server::access::{self, Access};
use crate::InfoEngine;

// ========================================
// REPORT HANDLER
// ========================================

pub async fn serve_info(State(engine): State<InfoEngine>, request: Request) -> Response {
    let (parts, _body) = request.into_parts();
    let remote_addr = parts
        .extensions
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let ctx = RequestContext::new(parts.uri, remote_addr, parts.headers);

    let caller = match access::check(&engine, &ctx).await {
        Ok(Access::Proceed(caller)) => caller,
        Ok(Access::Redirect(login)) => return Redirect::temporary(&login).into_response(),
        Ok(Access::Forbidden) => return (StatusCode::FORBIDDEN, "Forbidden").into_response(),
        Err(e) => {
            warn!(error = %e, "Unable to build login URL");
            return e.into_response();
        }
    };

    // Errors return here; nothing is encoded after a failed gather.
    match gather(&engine, &ctx, caller.as_ref()).await {
        Ok(snapshot) => write_json(&snapshot),
        Err(e) => {
            warn!(error = %e, "Report aggregation failed");
            e.into_response()
        }
    }
}

// ========================================
// RESPONSE WRITER
// ========================================

/// Encodes fully before touching the response, so status and headers are set once.
pub fn write_json<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            warn!(error = %e, "Report encoding failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}
