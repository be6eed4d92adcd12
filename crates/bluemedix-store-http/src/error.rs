//! Error type for `bluemedix-store-http`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Network-level failure (unreachable host, timeout, malformed body).
  #[error("transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// The server answered with a non-2xx status.
  #[error("{method} {path} → {status}")]
  Status {
    method: &'static str,
    path:   String,
    status: reqwest::StatusCode,
  },

  /// The draft could not be encoded to its wire form (e.g. a price string
  /// that is not a decimal number).
  #[error("core error: {0}")]
  Core(#[from] bluemedix_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
