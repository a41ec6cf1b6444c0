//! # nasa-explorer
//!
//! A thin HTTP backend between a browser front end and NASA's open APIs.
//! It injects the API key, forwards one GET per inbound request, and trims
//! rover photo pages to twelve entries. Nothing is cached, retried or stored.
//!
//! ## Endpoints
//!
//! | Path | Query | Upstream |
//! |---|---|---|
//! | `/` | | welcome payload |
//! | `/apod/` | `date` | Astronomy Picture of the Day |
//! | `/mars/photos` | `sol` (default 1000), `camera` | Curiosity photos, ≤ 12 |
//! | `/earth/epic` | `date` | EPIC natural-colour imagery |
//! | `/asteroids/feed` | `start_date`, `end_date` | near-Earth-object feed |
//!
//! Upstream failures never change the status code: the body becomes
//! `{"error": "<message>"}` with `200 OK`.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use nasa_explorer::{Config, Server, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), nasa_explorer::Error> {
//!     let config = Config::from_env()?;
//!     let router = app::build(&config)?;
//!     Server::bind(config.bind_addr).serve(router).await
//! }
//! ```

mod error;
mod handler;
mod method;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod app;
pub mod config;
pub mod health;
pub mod middleware;
pub mod nasa;

pub use config::Config;
pub use error::Error;
pub use handler::Handler;
pub use method::Method;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
pub use status::Status;
