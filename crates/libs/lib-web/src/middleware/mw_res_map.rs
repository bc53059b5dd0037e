//! # Response Mapping Middleware
//!
//! Logs server errors with the request ID and path they belong to, so a 500 in
//! the access log can be matched with the handler error that produced it.

use crate::middleware::mw_req_stamp::RequestStamp;
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use tracing::error;

pub async fn map_res(req: Request, next: Next) -> Response {
    let request_id = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| s.id.clone())
        .unwrap_or_else(|| "unknown".to_string());
    let path = req.uri().path().to_string();

    let res = next.run(req).await;

    if res.status().is_server_error() {
        error!(request_id = %request_id, path = %path, "[RESPONSE] Server error: {}", res.status());
    }

    res
}
