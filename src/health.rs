//! Liveness handlers.
//!
//! | Path | Body |
//! |---|---|
//! | `/` | `{"message": "Welcome to NASA Explorer API!"}` |
//! | `/healthz` | `ok` |
//!
//! Neither touches the upstream: if the process can answer HTTP, it is alive.

use serde_json::{Value, json};

use crate::{Json, Request, Response};

pub const WELCOME_MESSAGE: &str = "Welcome to NASA Explorer API!";

/// Static welcome payload served at `/`.
pub async fn welcome(_req: Request) -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// Plain-text liveness check.
pub async fn liveness(_req: Request) -> Response {
    Response::text("ok")
}
