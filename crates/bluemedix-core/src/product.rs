//! Pharmaceutical products.

use rand::{Rng as _, RngCore};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
  Error, Result,
  entity::{Draft, Entity, contains_ci},
};

// ─── Enrichment field ────────────────────────────────────────────────────────

/// Stock level. Not provided by the backend; assigned client-side by a
/// uniform draw over the three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Stock {
  #[default]
  #[strum(to_string = "In Stock")]
  InStock,
  #[strum(to_string = "Low Stock")]
  LowStock,
  #[strum(to_string = "Out of Stock")]
  OutOfStock,
}

// ─── Rating ──────────────────────────────────────────────────────────────────

/// Backend-provided aggregate rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
  pub rate:  f64,
  pub count: u64,
}

// ─── Product ─────────────────────────────────────────────────────────────────

/// A catalogue product. `stock` is a client-only display field and is never
/// serialized back to the backend.
///
/// Every wire field is defaulted: the demo backend's create response may
/// carry nothing but the assigned id, and the caller merges the submitted
/// draft over the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
  pub id:          u64,
  pub title:       String,
  /// Numeric on the wire; edited as a string and coerced before send.
  pub price:       f64,
  pub description: String,
  pub category:    String,
  pub image:       String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub rating:      Option<Rating>,
  #[serde(skip)]
  pub stock:       Stock,
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// Submitted create/edit form for a product. `price` stays a string until
/// the HTTP boundary coerces it.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
  pub title:       String,
  pub price:       String,
  pub description: String,
  pub category:    String,
  pub image:       String,
}

impl ProductDraft {
  /// Coerce the edited price string to the numeric wire form.
  pub fn price_value(&self) -> Result<f64> {
    self
      .price
      .trim()
      .parse()
      .map_err(|_| Error::InvalidPrice(self.price.clone()))
  }
}

impl Draft for ProductDraft {
  fn validate(&self) -> Result<()> {
    if self.title.trim().is_empty() {
      return Err(Error::MissingField("title"));
    }
    if self.price.trim().is_empty() {
      return Err(Error::MissingField("price"));
    }
    if self.description.trim().is_empty() {
      return Err(Error::MissingField("description"));
    }
    if self.category.trim().is_empty() {
      return Err(Error::MissingField("category"));
    }
    if self.image.trim().is_empty() {
      return Err(Error::MissingField("image"));
    }
    self.price_value().map(|_| ())
  }
}

// ─── Entity impl ─────────────────────────────────────────────────────────────

impl Entity for Product {
  type Draft = ProductDraft;

  const LABEL: &'static str = "Product";
  const PLURAL: &'static str = "products";
  const SINGULAR: &'static str = "product";

  fn id(&self) -> u64 { self.id }

  fn enrich(&mut self, rng: &mut dyn RngCore) {
    self.stock = match rng.random_range(0..3u8) {
      0 => Stock::InStock,
      1 => Stock::LowStock,
      _ => Stock::OutOfStock,
    };
  }

  fn enrich_created(&mut self) { self.stock = Stock::InStock; }

  fn apply(&mut self, draft: &ProductDraft) {
    self.title = draft.title.clone();
    // A draft that reached the store already parsed cleanly.
    if let Ok(price) = draft.price_value() {
      self.price = price;
    }
    self.description = draft.description.clone();
    self.category = draft.category.clone();
    self.image = draft.image.clone();
  }

  fn matches(&self, needle: &str) -> bool {
    contains_ci(&self.title, needle) || contains_ci(&self.category, needle)
  }
}
