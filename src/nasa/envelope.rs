use serde::Serialize;
use serde_json::Value;

use super::error::UpstreamError;
use crate::response::{IntoResponse, Json, Response};

pub const NO_PHOTOS_MESSAGE: &str =
    "No photos found for this sol/camera. Try other sol values or remove camera param.";

/// What a rover-photo call produced before it becomes an [`Envelope`].
#[derive(Debug, PartialEq)]
pub enum MarsPhotos {
    /// At most [`MAX_PHOTOS`](super::MAX_PHOTOS), in upstream order.
    Photos(Vec<Value>),
    Empty,
}

/// The one result every resource call produces.
///
/// Serialized untagged: `Data` is the upstream body verbatim, `Photos` a JSON
/// array, `Advisory` `{"message": …}`, `Error` `{"error": …}`. Callers detect
/// failure by the `error` key, not the status code, which is always 200.
#[derive(Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Data(Value),
    Photos(Vec<Value>),
    Advisory { message: String },
    Error { error: String },
}

impl Envelope {
    /// Returns the envelope untouched. Every handler routes its result
    /// through here; reshaping a resource means replacing this call.
    pub fn passthrough(self) -> Self {
        self
    }
}

impl From<UpstreamError> for Envelope {
    fn from(e: UpstreamError) -> Self {
        Self::Error { error: e.to_string() }
    }
}

impl From<Result<Value, UpstreamError>> for Envelope {
    fn from(res: Result<Value, UpstreamError>) -> Self {
        match res {
            Ok(body) => Self::Data(body),
            Err(e) => e.into(),
        }
    }
}

impl From<Result<MarsPhotos, UpstreamError>> for Envelope {
    fn from(res: Result<MarsPhotos, UpstreamError>) -> Self {
        match res {
            Ok(MarsPhotos::Photos(photos)) => Self::Photos(photos),
            Ok(MarsPhotos::Empty) => Self::Advisory { message: NO_PHOTOS_MESSAGE.to_owned() },
            Err(e) => e.into(),
        }
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
