//! fintrack-core
//!
//! Business logic for the finance tracker: the transaction store, the
//! aggregation engine, form validation and the dashboard service.
//! Depends on fintrack-domain. No CLI, no terminal I/O, no storage.

pub mod aggregation;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod stamp;
pub mod store;
pub mod submission;
pub mod time;

pub use aggregation::*;
pub use dashboard::*;
pub use error::{CoreError, CoreResult};
pub use format::*;
pub use stamp::*;
pub use store::*;
pub use submission::*;
pub use time::*;

#[cfg(test)]
mod tests;
