//! The `Entity` abstraction shared by the Users and Products screens.
//!
//! The original console duplicated one controller per record type; here the
//! per-type differences (endpoint, searchable fields, enrichment, merge
//! rules) are expressed once through this trait and the controller is
//! written a single time against it.

use rand::RngCore;

use crate::Result;

// ─── Entity ──────────────────────────────────────────────────────────────────

/// A uniquely identified record managed by a
/// [`ListController`](crate::controller::ListController).
///
/// Identity (`id`) is server-assigned, immutable, and the sole key for list
/// membership, update-target matching, and delete-target matching.
pub trait Entity: Clone + Send + Sync + 'static {
  /// The form-draft type submitted by create/edit screens.
  type Draft: Draft;

  /// Lowercase singular noun, e.g. `"user"`. Used in messages and paths.
  const SINGULAR: &'static str;

  /// Lowercase plural noun, e.g. `"users"`. The REST collection path is
  /// `/{PLURAL}`.
  const PLURAL: &'static str;

  /// Capitalised singular noun for notifications, e.g. `"User"`.
  const LABEL: &'static str;

  fn id(&self) -> u64;

  /// Assign the display-only fields the backend does not provide, drawing
  /// from `rng`. Re-rolled on every fetch, so values are not stable across
  /// reloads.
  fn enrich(&mut self, rng: &mut dyn RngCore);

  /// The fixed enrichment applied to a freshly created record instead of a
  /// random draw.
  fn enrich_created(&mut self);

  /// Shallow-merge the submitted draft over this record. Enrichment fields
  /// are left untouched.
  fn apply(&mut self, draft: &Self::Draft);

  /// Whether this record matches a search needle. `needle` is already
  /// lowercased and non-empty.
  fn matches(&self, needle: &str) -> bool;
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// A populated create/edit form.
pub trait Draft: Clone + Send + Sync + 'static {
  /// Check that every required field is non-empty.
  fn validate(&self) -> Result<()>;
}

// ─── Filtering ───────────────────────────────────────────────────────────────

/// Case-insensitive substring search over `items`.
///
/// Returns a subsequence of `items` preserving relative order. The empty
/// term matches everything. Never mutates the underlying collection — it is
/// recomputed from scratch on every call.
pub fn filter<'a, E: Entity>(items: &'a [E], term: &str) -> Vec<&'a E> {
  if term.is_empty() {
    return items.iter().collect();
  }
  let needle = term.to_lowercase();
  items.iter().filter(|e| e.matches(&needle)).collect()
}

/// Case-insensitive `needle in haystack` check. `needle` must already be
/// lowercased.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(needle)
}
