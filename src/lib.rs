//! Lexicographically sortable, friendly IDs from timestamps.
//!
//! A lexicoid is a short identifier derived from a timestamp, counted in
//! whole seconds since the Unix epoch and written in a lowercase base32
//! alphabet whose symbols sort in the same order as their values. Within
//! one magnitude (same byte length) lexicoids sort like the timestamps they
//! came from, and the alphabet leaves out look-alikes such as `0`/`o` and
//! `1`/`l`.
//!
//! They suit single-source streams that produce at most one item per
//! second, like post slugs. They are not unique ids and do not survive
//! multiple clocks.

pub mod base32;
pub mod config;
pub mod error;
pub mod generate;
pub mod server;
pub mod timestamp;

use std::sync::Arc;

use config::Config;

pub use error::Error;
pub use generate::{
    Clock, FixedClock, SystemClock, from, lexicoid, now, now_seconds_with, now_with,
};
pub use timestamp::{Timestamp, ToInstant};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub clock: Arc<dyn Clock + Send + Sync>,
}
