//! The NASA open-API proxy: outbound client, result envelope, handlers.
//!
//! | Inbound | Upstream |
//! |---|---|
//! | `/apod/` | `/planetary/apod` |
//! | `/mars/photos` | `/mars-photos/api/v1/rovers/curiosity/photos` |
//! | `/earth/epic` | `/EPIC/api/natural[/date/<date>]` |
//! | `/asteroids/feed` | `/neo/rest/v1/feed` |

mod client;
mod envelope;
mod error;
pub mod handlers;
mod query;

pub use client::{
    APOD_PATH, EPIC_PATH, MARS_PHOTOS_PATH, MAX_PHOTOS, NEO_FEED_PATH, NasaClient,
    UPSTREAM_TIMEOUT,
};
pub use envelope::{Envelope, MarsPhotos, NO_PHOTOS_MESSAGE};
pub use error::UpstreamError;
pub use query::{ApodQuery, DEFAULT_SOL, EpicQuery, MarsQuery, NeoQuery};
