//! Incoming HTTP request type.

use std::collections::HashMap;

/// An incoming HTTP request, detached from the hyper connection.
///
/// Every route this service exposes is a read-only `GET`, so the body is never
/// read. Headers whose values are not valid UTF-8 are dropped.
pub struct Request {
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        query: Vec<(String, String)>,
        headers: Vec<(String, String)>,
        params: HashMap<String, String>,
    ) -> Self {
        Self { query, headers, params }
    }

    pub(crate) fn from_parts(parts: &http::request::Parts, params: HashMap<String, String>) -> Self {
        let query = parts.uri.query().map(parse_query).unwrap_or_default();
        let headers = parts.headers.iter()
            .filter_map(|(k, v)| Some((k.as_str().to_owned(), v.to_str().ok()?.to_owned())))
            .collect();
        Self::new(query, headers, params)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/users/{id}`, `req.param("id")` on `/users/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Returns the percent-decoded value of a query parameter. For a repeated
    /// key the last value wins.
    ///
    /// `?date=` yields `Some("")`; callers that treat empty as absent should
    /// use [`Request::query_non_empty`].
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query.iter()
            .rfind(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Like [`Request::query`], but an empty value counts as absent.
    pub fn query_non_empty(&self, key: &str) -> Option<&str> {
        self.query(key).filter(|v| !v.is_empty())
    }
}

fn parse_query(raw: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}
