#![doc(test(attr(deny(warnings))))]

//! fintrack tracks income and expense entries for a single session and
//! derives the dashboard views (balance, monthly totals, yearly series).
//! The library re-exports the workspace crates and hosts the CLI front end.

pub mod cli;
pub mod errors;
pub mod utils;

pub use fintrack_config;
pub use fintrack_core;
pub use fintrack_domain;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("fintrack tracing initialized.");
    });
}
