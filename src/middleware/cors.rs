//! Cross-origin resource sharing.
//!
//! [`Cors::permissive`] is the development policy the browser front end needs:
//! any origin, any method, any header, credentials allowed. Browsers reject a
//! literal `*` origin on credentialed requests, so when credentials are
//! allowed the request's `Origin` is echoed back instead.
//!
//! Do not ship the permissive policy to production.

use http::HeaderMap;

use crate::method::Method;
use crate::response::Response;

const ALL_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";

/// A CORS policy. See the module docs.
#[derive(Clone, Debug)]
pub struct Cors {
    allow_credentials: bool,
    max_age_secs: u32,
}

impl Cors {
    /// Any origin, any method, any header, credentials allowed.
    pub fn permissive() -> Self {
        Self { allow_credentials: true, max_age_secs: 600 }
    }

    /// `OPTIONS` carrying `access-control-request-method`.
    pub(crate) fn is_preflight(&self, method: Method, headers: &HeaderMap) -> bool {
        method == Method::Options
            && headers.contains_key(http::header::ORIGIN)
            && headers.contains_key(http::header::ACCESS_CONTROL_REQUEST_METHOD)
    }

    /// Answers a preflight request without touching the router.
    pub(crate) fn preflight(&self, headers: &HeaderMap) -> Response {
        let mut res = Response::text("OK");
        self.apply(headers, &mut res);
        res.set_header("access-control-allow-methods", ALL_METHODS);
        res.set_header("access-control-max-age", self.max_age_secs.to_string());
        if let Some(requested) = header_str(headers, http::header::ACCESS_CONTROL_REQUEST_HEADERS) {
            res.set_header("access-control-allow-headers", requested);
        }
        res
    }

    /// Adds the simple-response headers. Requests without `Origin` are left alone.
    pub(crate) fn apply(&self, headers: &HeaderMap, res: &mut Response) {
        let Some(origin) = header_str(headers, http::header::ORIGIN) else {
            return;
        };
        if self.allow_credentials {
            res.set_header("access-control-allow-origin", origin);
            res.set_header("access-control-allow-credentials", "true");
            res.set_header("vary", "origin");
        } else {
            res.set_header("access-control-allow-origin", "*");
        }
    }
}

fn header_str(headers: &HeaderMap, name: http::header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (k, v) in pairs {
            map.insert(*k, HeaderValue::from_static(*v));
        }
        map
    }

    #[test]
    fn echoes_origin_with_credentials() {
        let req = headers(&[("origin", "http://localhost:5173")]);
        let mut res = Response::text("x");
        Cors::permissive().apply(&req, &mut res);
        assert_eq!(res.header("access-control-allow-origin"), Some("http://localhost:5173"));
        assert_eq!(res.header("access-control-allow-credentials"), Some("true"));
        assert_eq!(res.header("vary"), Some("origin"));
    }

    #[test]
    fn no_origin_no_headers() {
        let mut res = Response::text("x");
        Cors::permissive().apply(&HeaderMap::new(), &mut res);
        assert_eq!(res.header("access-control-allow-origin"), None);
    }

    #[test]
    fn wildcard_without_credentials() {
        let cors = Cors { allow_credentials: false, max_age_secs: 600 };
        let mut res = Response::text("x");
        cors.apply(&headers(&[("origin", "http://a.test")]), &mut res);
        assert_eq!(res.header("access-control-allow-origin"), Some("*"));
        assert_eq!(res.header("access-control-allow-credentials"), None);
    }

    #[test]
    fn preflight_allows_everything_requested() {
        let req = headers(&[
            ("origin", "http://localhost:5173"),
            ("access-control-request-method", "GET"),
            ("access-control-request-headers", "x-requested-with, content-type"),
        ]);
        let cors = Cors::permissive();
        assert!(cors.is_preflight(Method::Options, &req));
        assert!(!cors.is_preflight(Method::Get, &req));

        let res = cors.preflight(&req);
        assert_eq!(res.status_code(), 200);
        assert_eq!(res.header("access-control-allow-methods"), Some(ALL_METHODS));
        assert_eq!(
            res.header("access-control-allow-headers"),
            Some("x-requested-with, content-type")
        );
        assert_eq!(res.header("access-control-max-age"), Some("600"));
    }

    #[test]
    fn bare_options_is_not_preflight() {
        let req = headers(&[("origin", "http://localhost:5173")]);
        assert!(!Cors::permissive().is_preflight(Method::Options, &req));
    }
}
