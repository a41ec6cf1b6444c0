//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. A path that misses only
//! by a trailing slash is served by the route it almost matched.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::middleware::Cors;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

/// The application router.
///
/// Build it once at startup and pass it to [`Server::serve`](crate::Server::serve).
/// Each registration returns `self` so calls chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    cors: Option<Cors>,
}

pub(crate) enum Lookup {
    Found(BoxedHandler, HashMap<String, String>),
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), cors: None }
    }

    /// Register a `GET` handler.
    ///
    /// ```rust,no_run
    /// # use nasa_explorer::{Request, Response, Router};
    /// # async fn epic(_: Request) -> Response { Response::text("") }
    /// Router::new().get("/earth/epic", epic);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` conflicts with an already-registered route.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.add(Method::Get, path, handler)
    }

    /// Apply `cors` to every response and let it answer preflight requests.
    pub fn cors(mut self, cors: Cors) -> Self {
        self.cors = Some(cors);
        self
    }

    fn add(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    pub(crate) fn lookup(&self, method: Method, path: &str) -> Lookup {
        match self.lookup_exact(method, path) {
            Lookup::NotFound => match alternate_slash(path) {
                Some(alt) => self.lookup_exact(method, &alt),
                None => Lookup::NotFound,
            },
            found => found,
        }
    }

    fn lookup_exact(&self, method: Method, path: &str) -> Lookup {
        if let Some(matched) = self.routes.get(&method).and_then(|tree| tree.at(path).ok()) {
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), v.to_owned()))
                .collect();
            return Lookup::Found(Arc::clone(matched.value), params);
        }

        let mut allowed: Vec<Method> = self.routes.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();
        if allowed.is_empty() {
            return Lookup::NotFound;
        }
        allowed.sort_by_key(|m| m.as_str());
        Lookup::MethodNotAllowed(allowed)
    }

    /// Routes one request and produces one response, CORS applied.
    pub(crate) async fn respond(&self, parts: &http::request::Parts) -> Response {
        let Ok(method) = Method::try_from(&parts.method) else {
            return self.finish(parts, Response::status(Status::MethodNotAllowed));
        };

        if let Some(cors) = &self.cors {
            if cors.is_preflight(method, &parts.headers) {
                return cors.preflight(&parts.headers);
            }
        }

        let res = match self.lookup(method, parts.uri.path()) {
            Lookup::Found(handler, params) => {
                handler.call(Request::from_parts(parts, params)).await
            }
            Lookup::MethodNotAllowed(allowed) => {
                let allow = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
                Response::builder()
                    .status(Status::MethodNotAllowed)
                    .header("allow", &allow)
                    .no_body()
            }
            Lookup::NotFound => Response::status(Status::NotFound),
        };
        self.finish(parts, res)
    }

    fn finish(&self, parts: &http::request::Parts, mut res: Response) -> Response {
        if let Some(cors) = &self.cors {
            cors.apply(&parts.headers, &mut res);
        }
        res
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

/// `/apod` ⇄ `/apod/`. The root path has no alternate.
fn alternate_slash(path: &str) -> Option<String> {
    if path == "/" || path.is_empty() {
        None
    } else if let Some(stripped) = path.strip_suffix('/') {
        Some(stripped.to_owned())
    } else {
        Some(format!("{path}/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn ok(_req: Request) -> Response { Response::text("ok") }
    async fn bare_status(_req: Request) -> Status { Status::NotFound }
    async fn echo_param(req: Request) -> Response {
        Response::text(req.param("date").unwrap_or("none").to_owned())
    }

    fn parts(method: http::Method, uri: &str) -> http::request::Parts {
        let (parts, ()) = http::Request::builder()
            .method(method)
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[test]
    fn trailing_slash_is_tolerated_both_ways() {
        let router = Router::new().get("/apod/", ok).get("/mars/photos", ok);
        assert!(matches!(router.lookup(Method::Get, "/apod/"), Lookup::Found(..)));
        assert!(matches!(router.lookup(Method::Get, "/apod"), Lookup::Found(..)));
        assert!(matches!(router.lookup(Method::Get, "/mars/photos/"), Lookup::Found(..)));
        assert!(matches!(router.lookup(Method::Get, "/mars"), Lookup::NotFound));
    }

    #[test]
    fn wrong_method_reports_allowed_methods() {
        let router = Router::new().get("/", ok);
        match router.lookup(Method::Post, "/") {
            Lookup::MethodNotAllowed(allowed) => assert_eq!(allowed, vec![Method::Get]),
            _ => panic!("expected 405"),
        }
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = Router::new().get("/a", ok).get("/a", ok);
    }

    #[tokio::test]
    async fn respond_passes_path_params() {
        let router = Router::new().get("/date/{date}", echo_param);
        let res = router.respond(&parts(http::Method::GET, "/date/2024-01-05")).await;
        assert_eq!(res.body(), b"2024-01-05");
    }

    #[tokio::test]
    async fn handlers_may_return_a_bare_status() {
        let router = Router::new().get("/gone", bare_status);
        let res = router.respond(&parts(http::Method::GET, "/gone")).await;
        assert_eq!(res.status_code(), 404);
        assert!(res.body().is_empty());
    }

    #[tokio::test]
    async fn respond_answers_404_and_405() {
        let router = Router::new().get("/", ok);
        let res = router.respond(&parts(http::Method::GET, "/nowhere")).await;
        assert_eq!(res.status_code(), 404);

        let res = router.respond(&parts(http::Method::DELETE, "/")).await;
        assert_eq!(res.status_code(), 405);
        assert_eq!(res.header("allow"), Some("GET"));
    }
}
