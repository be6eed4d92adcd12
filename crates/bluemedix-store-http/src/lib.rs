//! HTTP backend for the BlueMedix remote store.
//!
//! Implements [`bluemedix_core::store::RemoteStore`] for both entity types
//! over [`reqwest`] against a single fixed REST origin (the public demo API
//! by default).

mod store;
mod wire;

pub mod error;

pub use error::{Error, Result};
pub use store::{DEFAULT_BASE_URL, HttpStore};
