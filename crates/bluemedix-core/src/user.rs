//! Staff user accounts.
//!
//! The backend stores a structured first/last name; every screen displays
//! the concatenated form and re-splits it on save, so the split is lossy
//! for multi-part first names (the first whitespace-separated token becomes
//! the first name, everything after it joins into the last name).

use rand::{Rng as _, RngCore};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
  Error, Result,
  entity::{Draft, Entity, contains_ci},
};

// ─── Enrichment fields ───────────────────────────────────────────────────────

/// Account status. Not provided by the backend; assigned client-side at
/// fetch time (70% `Active`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Status {
  #[default]
  Active,
  Inactive,
}

/// Staff role. Not provided by the backend; assigned client-side by a
/// uniform draw over the four variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Role {
  Admin,
  #[default]
  Customer,
  Sales,
  #[strum(to_string = "Inventory Manager")]
  InventoryManager,
}

// ─── Name ────────────────────────────────────────────────────────────────────

/// Structured name as stored by the backend (wire shape: nested
/// `firstname`/`lastname` pair).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserName {
  #[serde(default)]
  pub firstname: String,
  #[serde(default)]
  pub lastname:  String,
}

impl UserName {
  /// Concatenated display form, e.g. `"Alice Liddell"`.
  pub fn display(&self) -> String {
    format!("{} {}", self.firstname, self.lastname)
      .trim()
      .to_owned()
  }

  /// Re-split a display name: first token becomes the first name, the rest
  /// joins into the last name.
  pub fn from_display(name: &str) -> Self {
    let mut parts = name.split_whitespace();
    let firstname = parts.next().unwrap_or_default().to_owned();
    let lastname = parts.collect::<Vec<_>>().join(" ");
    Self { firstname, lastname }
  }
}

// ─── User ────────────────────────────────────────────────────────────────────

/// A staff account. `status` and `role` are client-only display fields and
/// are never serialized back to the backend.
///
/// Every wire field is defaulted: the demo backend's create response may
/// carry nothing but the assigned id, and the caller merges the submitted
/// draft over the result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
  pub id:       u64,
  pub name:     UserName,
  pub email:    String,
  pub username: String,
  /// Write-only: accepted on create/update, never redisplayed.
  pub password: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone:    Option<String>,
  #[serde(skip)]
  pub status:   Status,
  #[serde(skip)]
  pub role:     Role,
}

impl User {
  /// Concatenated display name.
  pub fn display_name(&self) -> String { self.name.display() }
}

// ─── Draft ───────────────────────────────────────────────────────────────────

/// Submitted create/edit form for a user. `name` is the single display
/// string; it is split into the wire pair at the HTTP boundary.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
  pub name:     String,
  pub email:    String,
  pub username: String,
  pub password: String,
  /// `None` leaves the existing phone untouched on edit.
  pub phone:    Option<String>,
}

impl Draft for UserDraft {
  fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::MissingField("name"));
    }
    if self.email.trim().is_empty() {
      return Err(Error::MissingField("email"));
    }
    if self.username.trim().is_empty() {
      return Err(Error::MissingField("username"));
    }
    if self.password.trim().is_empty() {
      return Err(Error::MissingField("password"));
    }
    Ok(())
  }
}

// ─── Entity impl ─────────────────────────────────────────────────────────────

impl Entity for User {
  type Draft = UserDraft;

  const LABEL: &'static str = "User";
  const PLURAL: &'static str = "users";
  const SINGULAR: &'static str = "user";

  fn id(&self) -> u64 { self.id }

  fn enrich(&mut self, rng: &mut dyn RngCore) {
    self.status = if rng.random_bool(0.7) {
      Status::Active
    } else {
      Status::Inactive
    };
    // Uniform over the four roles, in the order the console lists them.
    self.role = match rng.random_range(0..4u8) {
      0 => Role::Admin,
      1 => Role::Customer,
      2 => Role::Sales,
      _ => Role::InventoryManager,
    };
  }

  fn enrich_created(&mut self) { self.status = Status::Active; }

  fn apply(&mut self, draft: &UserDraft) {
    self.name = UserName::from_display(&draft.name);
    self.email = draft.email.clone();
    self.username = draft.username.clone();
    self.password = draft.password.clone();
    if let Some(phone) = &draft.phone {
      self.phone = Some(phone.clone());
    }
  }

  fn matches(&self, needle: &str) -> bool {
    contains_ci(&self.display_name(), needle)
      || contains_ci(&self.email, needle)
      || contains_ci(&self.role.to_string(), needle)
  }
}
