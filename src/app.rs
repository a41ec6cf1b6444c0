//! Wires the handlers, the liveness endpoints and CORS into one [`Router`].

use std::future::Future;
use std::sync::Arc;

use crate::config::Config;
use crate::error::Error;
use crate::health;
use crate::middleware::Cors;
use crate::nasa::{NasaClient, handlers};
use crate::request::Request;
use crate::response::Response;
use crate::router::Router;

/// Builds the full application for `config`.
///
/// Fails only if the outbound HTTP client cannot be constructed.
pub fn build(config: &Config) -> Result<Router, Error> {
    let client = Arc::new(NasaClient::new(config)?);

    Ok(Router::new()
        .get("/",               health::welcome)
        .get("/healthz",        health::liveness)
        .get("/apod/",          with_client(&client, handlers::apod))
        .get("/mars/photos",    with_client(&client, handlers::mars_photos))
        .get("/earth/epic",     with_client(&client, handlers::epic))
        .get("/asteroids/feed", with_client(&client, handlers::neo_feed))
        .cors(Cors::permissive()))
}

/// Adapts a `(client, request)` handler to the router's `Fn(Request)` shape.
fn with_client<F, Fut>(
    client: &Arc<NasaClient>,
    handler: F,
) -> impl Fn(Request) -> Fut + Send + Sync + 'static
where
    F: Fn(Arc<NasaClient>, Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    let client = Arc::clone(client);
    move |req| handler(Arc::clone(&client), req)
}
