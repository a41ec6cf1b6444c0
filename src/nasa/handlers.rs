//! One handler per upstream resource.
//!
//! Each reads its query, makes one client call and passes the envelope
//! through unchanged.

use std::sync::Arc;

use serde_json::json;

use super::client::NasaClient;
use super::envelope::Envelope;
use super::query::{ApodQuery, EpicQuery, MarsQuery, NeoQuery};
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// `GET /apod/?date=YYYY-MM-DD`
pub async fn apod(client: Arc<NasaClient>, req: Request) -> Response {
    let q = ApodQuery::from_request(&req);
    Envelope::from(client.apod(&q).await).passthrough().into_response()
}

/// `GET /mars/photos?sol=1000&camera=FHAZ`
pub async fn mars_photos(client: Arc<NasaClient>, req: Request) -> Response {
    let q = match MarsQuery::from_request(&req) {
        Ok(q) => q,
        Err(msg) => {
            let body = json!({ "error": msg }).to_string().into_bytes();
            return Response::builder().status(Status::UnprocessableContent).json(body);
        }
    };
    Envelope::from(client.mars_photos(&q).await).passthrough().into_response()
}

/// `GET /earth/epic?date=YYYY-MM-DD`
pub async fn epic(client: Arc<NasaClient>, req: Request) -> Response {
    let q = EpicQuery::from_request(&req);
    Envelope::from(client.epic(&q).await).passthrough().into_response()
}

/// `GET /asteroids/feed?start_date=…&end_date=…`
pub async fn neo_feed(client: Arc<NasaClient>, req: Request) -> Response {
    let q = NeoQuery::from_request(&req);
    Envelope::from(client.neo_feed(&q).await).passthrough().into_response()
}
