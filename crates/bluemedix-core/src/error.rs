//! Error types for `bluemedix-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required form field was left empty.
  #[error("{0} is required")]
  MissingField(&'static str),

  /// A product price string could not be parsed as a decimal number.
  #[error("invalid price: {0:?}")]
  InvalidPrice(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
