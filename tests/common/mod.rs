#![allow(dead_code)]

use std::net::SocketAddr;

use nasa_explorer::{Config, Server, app};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use wiremock::MockServer;

pub const TEST_KEY: &str = "test-key";

/// The app on an ephemeral port, talking to a wiremock upstream.
pub struct TestApp {
    pub addr: SocketAddr,
    pub upstream: MockServer,
    pub http: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
    server: JoinHandle<Result<(), nasa_explorer::Error>>,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let upstream = MockServer::start().await;
        let mut config = Config::with_base_url(&upstream.uri());
        config.api_key = TEST_KEY.to_owned();
        Self::spawn_with(config, upstream).await
    }

    pub async fn spawn_with(config: Config, upstream: MockServer) -> Self {
        let router = app::build(&config).expect("build app");
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
        let server = Server::from_listener(listener).expect("listener address");
        let addr = server.local_addr();

        let (tx, rx) = oneshot::channel::<()>();
        let server = tokio::spawn(server.serve_with_shutdown(router, async move {
            rx.await.ok();
        }));

        Self { addr, upstream, http: reqwest::Client::new(), shutdown: Some(tx), server }
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("http://{}{}", self.addr, path_and_query)
    }

    pub async fn get(&self, path_and_query: &str) -> reqwest::Response {
        self.http.get(self.url(path_and_query)).send().await.expect("request reaches app")
    }

    pub async fn get_json(&self, path_and_query: &str) -> Value {
        let res = self.get(path_and_query).await;
        assert_eq!(res.status(), 200, "GET {path_and_query}");
        res.json().await.expect("json body")
    }

    /// Query pairs of every request the upstream saw, in arrival order.
    pub async fn upstream_queries(&self) -> Vec<Vec<(String, String)>> {
        self.upstream
            .received_requests()
            .await
            .expect("request recording enabled")
            .iter()
            .map(|r| r.url.query_pairs().into_owned().collect())
            .collect()
    }

    pub async fn upstream_paths(&self) -> Vec<String> {
        self.upstream
            .received_requests()
            .await
            .expect("request recording enabled")
            .iter()
            .map(|r| r.url.path().to_owned())
            .collect()
    }

    /// Signals shutdown and waits for the server to drain.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        (&mut self.server).await.expect("server task").expect("server result");
    }
}

pub fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

pub fn photos(n: usize) -> Vec<Value> {
    (0..n).map(|id| serde_json::json!({ "id": id, "img_src": format!("https://mars.nasa.gov/{id}.jpg") })).collect()
}
