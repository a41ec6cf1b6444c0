//! Client for `api.nasa.gov`.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::envelope::MarsPhotos;
use super::error::UpstreamError;
use super::query::{ApodQuery, EpicQuery, MarsQuery, NeoQuery};
use crate::config::Config;
use crate::error::Error;

/// Fixed for every outbound call; not configurable.
pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

/// Photos returned per rover query; the rest of the upstream page is dropped.
pub const MAX_PHOTOS: usize = 12;

pub const APOD_PATH: &str = "/planetary/apod";
pub const MARS_PHOTOS_PATH: &str = "/mars-photos/api/v1/rovers/curiosity/photos";
pub const EPIC_PATH: &str = "/EPIC/api/natural";
pub const NEO_FEED_PATH: &str = "/neo/rest/v1/feed";

/// Single point of contact with the NASA API. Owns the base URL and the key.
///
/// One GET per call, no retries. Cheap to share behind an `Arc`.
#[derive(Clone)]
pub struct NasaClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NasaClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http = Client::builder().timeout(UPSTREAM_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            api_key: config.api_key.clone(),
        })
    }

    /// Astronomy Picture of the Day.
    pub async fn apod(&self, q: &ApodQuery) -> Result<Value, UpstreamError> {
        let mut params = vec![("api_key", self.api_key.clone())];
        push_filter(&mut params, "date", q.date.as_deref());
        self.get_json(APOD_PATH, &params).await
    }

    /// Curiosity photos for one sol, optionally one camera. Truncated to
    /// [`MAX_PHOTOS`] in upstream order.
    pub async fn mars_photos(&self, q: &MarsQuery) -> Result<MarsPhotos, UpstreamError> {
        let mut params = vec![("sol", q.sol.to_string()), ("api_key", self.api_key.clone())];
        push_filter(&mut params, "camera", q.camera.as_deref());
        let body = self.get_json(MARS_PHOTOS_PATH, &params).await?;
        select_photos(body)
    }

    /// EPIC natural-colour imagery. The date, when given, is a path segment.
    pub async fn epic(&self, q: &EpicQuery) -> Result<Value, UpstreamError> {
        let path = epic_path(q.date.as_deref())?;
        let params = vec![("api_key", self.api_key.clone())];
        self.get_json(&path, &params).await
    }

    /// Near-Earth-object feed for a date range.
    pub async fn neo_feed(&self, q: &NeoQuery) -> Result<Value, UpstreamError> {
        let mut params = vec![("api_key", self.api_key.clone())];
        push_filter(&mut params, "start_date", q.start_date.as_deref());
        push_filter(&mut params, "end_date", q.end_date.as_deref());
        self.get_json(NEO_FEED_PATH, &params).await
    }

    async fn get_json(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value, UpstreamError> {
        let res = self.fetch(path, params).await;
        if let Err(e) = &res {
            warn!(path, kind = e.kind(), "upstream call failed: {e}");
        }
        res
    }

    async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Value, UpstreamError> {
        debug!(path, "calling upstream");

        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(params)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, path))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status { status, path: path.to_owned() });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamError::from_reqwest(e, path))
    }
}

/// Absent and empty filters are never sent.
fn push_filter(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(v) = value.filter(|v| !v.is_empty()) {
        params.push((key, v.to_owned()));
    }
}

/// The date is pushed as a single path segment: a space becomes `%20`, a
/// `/` becomes `%2F`.
fn epic_path(date: Option<&str>) -> Result<String, UpstreamError> {
    let Some(d) = date.filter(|d| !d.is_empty()) else {
        return Ok(EPIC_PATH.to_owned());
    };
    let mut url = Url::parse(&format!("http://upstream{EPIC_PATH}/date"))
        .map_err(|e| UpstreamError::Network(format!("invalid upstream path: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| UpstreamError::Network("upstream url cannot take path segments".into()))?
        .push(d);
    Ok(url.path().to_owned())
}

/// A missing, null or empty `photos` list is "no photos"; anything that is
/// not a list is a malformed body.
fn select_photos(body: Value) -> Result<MarsPhotos, UpstreamError> {
    let Value::Object(mut map) = body else {
        return Err(UpstreamError::Decode("expected a JSON object".into()));
    };
    match map.remove("photos") {
        None | Some(Value::Null) => Ok(MarsPhotos::Empty),
        Some(Value::Array(photos)) if photos.is_empty() => Ok(MarsPhotos::Empty),
        Some(Value::Array(mut photos)) => {
            photos.truncate(MAX_PHOTOS);
            Ok(MarsPhotos::Photos(photos))
        }
        Some(_) => Err(UpstreamError::Decode("`photos` is not a list".into())),
    }
}
