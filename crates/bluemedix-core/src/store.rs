//! The `RemoteStore` trait — the boundary to the backing REST service.
//!
//! The trait is implemented by transport backends (e.g.
//! `bluemedix-store-http`). The controller depends on this abstraction, not
//! on any concrete transport, which also makes it testable against an
//! in-memory double.

use std::future::Future;

use crate::entity::Entity;

/// CRUD access to the remote collection for one entity type.
///
/// One round trip per call; no retries, batching, or pagination. All methods
/// return `Send` futures so the trait can be used from multi-threaded async
/// runtimes.
pub trait RemoteStore<E: Entity>: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch the whole collection (`GET /{E}s`).
  fn list(&self) -> impl Future<Output = Result<Vec<E>, Self::Error>> + Send + '_;

  /// Fetch a single record (`GET /{E}s/{id}`).
  fn get(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<E, Self::Error>> + Send + '_;

  /// Create a record (`POST /{E}s`). The response carries the
  /// server-assigned id and may omit any other field.
  fn create(
    &self,
    draft: E::Draft,
  ) -> impl Future<Output = Result<E, Self::Error>> + Send + '_;

  /// Replace a record (`PUT /{E}s/{id}`).
  fn update(
    &self,
    id: u64,
    draft: E::Draft,
  ) -> impl Future<Output = Result<E, Self::Error>> + Send + '_;

  /// Delete a record (`DELETE /{E}s/{id}`).
  fn delete(
    &self,
    id: u64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;
}
