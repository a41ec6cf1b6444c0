//! Per-resource query parameters, read from the inbound request.
//!
//! Nothing here validates values: dates, cameras and sol ranges are the
//! upstream's business. The only local check is that `sol` is an integer.

use crate::request::Request;

/// Rover photos default to this sol when the caller gives none.
pub const DEFAULT_SOL: i64 = 1000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApodQuery {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MarsQuery {
    pub sol: i64,
    pub camera: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpicQuery {
    /// `YYYY-MM-DD`
    pub date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeoQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Default for MarsQuery {
    fn default() -> Self {
        Self { sol: DEFAULT_SOL, camera: None }
    }
}

fn owned(req: &Request, key: &str) -> Option<String> {
    req.query_non_empty(key).map(str::to_owned)
}

impl ApodQuery {
    pub fn from_request(req: &Request) -> Self {
        Self { date: owned(req, "date") }
    }
}

impl EpicQuery {
    pub fn from_request(req: &Request) -> Self {
        Self { date: owned(req, "date") }
    }
}

impl NeoQuery {
    pub fn from_request(req: &Request) -> Self {
        Self { start_date: owned(req, "start_date"), end_date: owned(req, "end_date") }
    }
}

impl MarsQuery {
    /// Fails when `sol` is present and not an integer; `?sol=` included.
    pub fn from_request(req: &Request) -> Result<Self, String> {
        let sol = match req.query("sol") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| format!("sol must be an integer, got `{raw}`"))?,
            None => DEFAULT_SOL,
        };
        Ok(Self { sol, camera: owned(req, "camera") })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn req(pairs: &[(&str, &str)]) -> Request {
        let query = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        Request::new(query, Vec::new(), HashMap::new())
    }

    #[test]
    fn sol_defaults_to_1000() {
        assert_eq!(MarsQuery::from_request(&req(&[])).unwrap(), MarsQuery::default());
    }

    #[test]
    fn empty_sol_is_rejected() {
        let err = MarsQuery::from_request(&req(&[("sol", "")])).unwrap_err();
        assert!(err.contains("sol must be an integer"));
    }

    #[test]
    fn sol_and_camera_are_forwarded_unvalidated() {
        let q = MarsQuery::from_request(&req(&[("sol", "-3"), ("camera", "NOT_A_CAMERA")])).unwrap();
        assert_eq!(q.sol, -3);
        assert_eq!(q.camera.as_deref(), Some("NOT_A_CAMERA"));
    }

    #[test]
    fn non_integer_sol_is_rejected() {
        let err = MarsQuery::from_request(&req(&[("sol", "ten")])).unwrap_err();
        assert!(err.contains("ten"));
    }

    #[test]
    fn date_filters_are_optional() {
        assert_eq!(ApodQuery::from_request(&req(&[])), ApodQuery::default());
        assert_eq!(EpicQuery::from_request(&req(&[("date", "")])), EpicQuery::default());
        let neo = NeoQuery::from_request(&req(&[("start_date", "2024-01-01")]));
        assert_eq!(neo.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(neo.end_date, None);
    }
}
