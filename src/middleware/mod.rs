//! Middleware layer.
//!
//! Cross-cutting behaviour applied by the [`Router`](crate::Router) around
//! every handler. Only CORS exists today; per-request tracing lives in the
//! server's dispatch loop.

mod cors;

pub use cors::Cors;
