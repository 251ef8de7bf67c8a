#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use chrono::DateTime;
use lexicoid::config::Config;
use lexicoid::{AppState, FixedClock, server};

/// Wall clock every test app is pinned to.
pub const FIXED_NOW: i64 = 1_678_943_067;

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn lenient() -> Self {
        Self::with_config(Config {
            strict: false,
            ..Config::default()
        })
    }

    fn with_config(config: Config) -> Self {
        let now = DateTime::from_timestamp(FIXED_NOW, 0).expect("valid fixed timestamp");
        let state = AppState {
            config,
            clock: Arc::new(FixedClock(now)),
        };

        Self {
            router: server::router(state),
        }
    }
}
