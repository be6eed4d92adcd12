//! The list/search/mutation state machine behind every entity screen.
//!
//! One [`ListController`] instance owns one screen's in-memory collection
//! and orchestrates CRUD against a [`RemoteStore`]. Writes apply local
//! mutations after the server confirms, so the screen reflects changes
//! without a refetch; a failed call never touches the collection.
//!
//! All state is owned exclusively by the controller and every operation
//! takes `&mut self`, so two mutations can never interleave. Dropping the
//! controller drops any in-flight future with it; a response can never land
//! on a gone screen.

use std::sync::Arc;

use rand::{SeedableRng as _, rngs::SmallRng};
use tracing::{debug, warn};

use crate::{entity::Entity, store::RemoteStore};

// ─── Notifications ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Success,
  Error,
}

/// A transient message for the notification area. The presentation layer
/// takes it, shows it, and lets it expire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
  pub message:  String,
  pub severity: Severity,
}

impl Notification {
  fn success(message: String) -> Self {
    Self { message, severity: Severity::Success }
  }

  fn error(message: String) -> Self {
    Self { message, severity: Severity::Error }
  }
}

// ─── Controller ──────────────────────────────────────────────────────────────

/// Owns one entity type's collection, loading/error flags, and search term.
///
/// The presentation layer renders from `{collection, is_loading, load_error,
/// search_term}` and routes user intents through `{load, create, update,
/// remove, set_search_term}`. It is expected to call [`load`](Self::load)
/// once when the screen is first shown.
pub struct ListController<E: Entity, S: RemoteStore<E>> {
  store:       Arc<S>,
  rng:         SmallRng,
  collection:  Vec<E>,
  is_loading:  bool,
  load_error:  Option<String>,
  search_term: String,
  notice:      Option<Notification>,
}

impl<E: Entity, S: RemoteStore<E>> ListController<E, S> {
  pub fn new(store: Arc<S>) -> Self {
    Self::with_rng(store, SmallRng::from_os_rng())
  }

  /// Construct with a caller-supplied RNG so tests can seed the enrichment
  /// draws.
  pub fn with_rng(store: Arc<S>, rng: SmallRng) -> Self {
    Self {
      store,
      rng,
      collection: Vec::new(),
      is_loading: true,
      load_error: None,
      search_term: String::new(),
      notice: None,
    }
  }

  // ── Renderable state ──────────────────────────────────────────────────────

  pub fn collection(&self) -> &[E] { &self.collection }

  pub fn is_loading(&self) -> bool { self.is_loading }

  pub fn load_error(&self) -> Option<&str> { self.load_error.as_deref() }

  pub fn search_term(&self) -> &str { &self.search_term }

  /// Take the pending notification, if any. Subsequent calls return `None`
  /// until the next operation completes.
  pub fn take_notice(&mut self) -> Option<Notification> { self.notice.take() }

  /// The collection filtered by the current search term — a subsequence in
  /// original order. Derived state: recomputed on every call, never stored.
  pub fn filtered(&self) -> Vec<&E> {
    crate::entity::filter(&self.collection, &self.search_term)
  }

  pub fn set_search_term(&mut self, term: impl Into<String>) {
    self.search_term = term.into();
  }

  // ── Operations ────────────────────────────────────────────────────────────

  /// Fetch the whole collection, enrich every record, and replace the
  /// in-memory state wholesale. On failure the collection is left unchanged
  /// and `load_error` carries the fixed fetch-failure message. `is_loading`
  /// ends `false` regardless of outcome.
  pub async fn load(&mut self) {
    self.is_loading = true;
    match self.store.list().await {
      Ok(mut items) => {
        for item in &mut items {
          item.enrich(&mut self.rng);
        }
        debug!(count = items.len(), entity = E::SINGULAR, "loaded collection");
        self.collection = items;
        self.load_error = None;
      }
      Err(e) => {
        warn!(entity = E::SINGULAR, error = %e, "list fetch failed");
        self.load_error =
          Some(format!("Failed to fetch {}. Please try again later.", E::PLURAL));
      }
    }
    self.is_loading = false;
  }

  /// Fetch a single record for a detail view. Enrichment is re-rolled
  /// independently of the list, so the detail view's status/role/stock will
  /// generally disagree with the list's.
  ///
  /// Returns `None` on failure, leaving an error notification behind.
  pub async fn fetch_detail(&mut self, id: u64) -> Option<E> {
    match self.store.get(id).await {
      Ok(mut item) => {
        item.enrich(&mut self.rng);
        Some(item)
      }
      Err(e) => {
        warn!(entity = E::SINGULAR, id, error = %e, "detail fetch failed");
        self.notice = Some(Notification::error(format!(
          "Failed to fetch {} details. Please try again later.",
          E::SINGULAR
        )));
        None
      }
    }
  }

  /// Create a record. On success the server response (which may be as thin
  /// as the assigned id) is merged with the submitted draft, given the
  /// creation-default enrichment, and appended. No optimistic append before
  /// server confirmation.
  ///
  /// Returns `true` on success so the caller can close the form; on failure
  /// the form (and collection) stay as they were.
  pub async fn create(&mut self, draft: &E::Draft) -> bool {
    match self.store.create(draft.clone()).await {
      Ok(mut created) => {
        created.apply(draft);
        created.enrich_created();
        debug!(entity = E::SINGULAR, id = created.id(), "created");
        self.collection.push(created);
        self.notice =
          Some(Notification::success(format!("{} added successfully!", E::LABEL)));
        true
      }
      Err(e) => {
        warn!(entity = E::SINGULAR, error = %e, "create failed");
        self.notice = Some(Notification::error(format!(
          "Failed to add {}. Please try again.",
          E::SINGULAR
        )));
        false
      }
    }
  }

  /// Update the record with `id`. On success the draft is shallow-merged
  /// over the matching entity in place — no refetch, so the displayed
  /// post-update state is the client's own draft. Enrichment fields are
  /// untouched.
  pub async fn update(&mut self, id: u64, draft: &E::Draft) -> bool {
    match self.store.update(id, draft.clone()).await {
      Ok(_) => {
        if let Some(existing) =
          self.collection.iter_mut().find(|e| e.id() == id)
        {
          existing.apply(draft);
        }
        debug!(entity = E::SINGULAR, id, "updated");
        self.notice = Some(Notification::success(format!(
          "{} updated successfully!",
          E::LABEL
        )));
        true
      }
      Err(e) => {
        warn!(entity = E::SINGULAR, id, error = %e, "update failed");
        self.notice = Some(Notification::error(format!(
          "Failed to update {}. Please try again.",
          E::SINGULAR
        )));
        false
      }
    }
  }

  /// Delete the record with `id`, removing it locally once the server
  /// confirms.
  pub async fn remove(&mut self, id: u64) -> bool {
    match self.store.delete(id).await {
      Ok(()) => {
        self.collection.retain(|e| e.id() != id);
        debug!(entity = E::SINGULAR, id, "deleted");
        self.notice = Some(Notification::success(format!(
          "{} deleted successfully!",
          E::LABEL
        )));
        true
      }
      Err(e) => {
        warn!(entity = E::SINGULAR, id, error = %e, "delete failed");
        self.notice = Some(Notification::error(format!(
          "Failed to delete {}. Please try again.",
          E::SINGULAR
        )));
        false
      }
    }
  }
}
