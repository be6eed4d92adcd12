//! Controller, filter, enrichment, and color-hash tests against an
//! in-memory store double with failure injection.

use std::sync::{
  Arc, Mutex,
  atomic::{AtomicBool, AtomicU64, Ordering},
};

use rand::{SeedableRng as _, rngs::SmallRng};
use thiserror::Error;

use crate::{
  color::{color_for, initials},
  controller::{ListController, Severity},
  entity::{Draft as _, Entity, filter},
  product::{Product, ProductDraft, Stock},
  store::RemoteStore,
  user::{Role, Status, User, UserDraft, UserName},
};

// ─── Store double ────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
#[error("simulated transport failure")]
struct Unreachable;

/// Test-only hook for assigning server ids to default-constructed records.
trait TestEntity: Entity + Default {
  fn set_id(&mut self, id: u64);
}

impl TestEntity for User {
  fn set_id(&mut self, id: u64) { self.id = id; }
}

impl TestEntity for Product {
  fn set_id(&mut self, id: u64) { self.id = id; }
}

/// In-memory stand-in for the REST backend. Mimics the demo API's habit of
/// answering a create with little more than the assigned id.
struct FakeStore<E> {
  items:   Mutex<Vec<E>>,
  fail:    AtomicBool,
  next_id: AtomicU64,
}

impl<E: TestEntity> FakeStore<E> {
  fn with_items(items: Vec<E>) -> Arc<Self> {
    let next = items.iter().map(Entity::id).max().unwrap_or(0) + 1;
    Arc::new(Self {
      items:   Mutex::new(items),
      fail:    AtomicBool::new(false),
      next_id: AtomicU64::new(next),
    })
  }

  fn set_fail(&self, fail: bool) { self.fail.store(fail, Ordering::SeqCst); }

  fn check(&self) -> Result<(), Unreachable> {
    if self.fail.load(Ordering::SeqCst) {
      Err(Unreachable)
    } else {
      Ok(())
    }
  }
}

impl<E: TestEntity> RemoteStore<E> for FakeStore<E> {
  type Error = Unreachable;

  async fn list(&self) -> Result<Vec<E>, Unreachable> {
    self.check()?;
    Ok(self.items.lock().unwrap().clone())
  }

  async fn get(&self, id: u64) -> Result<E, Unreachable> {
    self.check()?;
    self
      .items
      .lock()
      .unwrap()
      .iter()
      .find(|e| e.id() == id)
      .cloned()
      .ok_or(Unreachable)
  }

  async fn create(&self, _draft: E::Draft) -> Result<E, Unreachable> {
    self.check()?;
    let mut created = E::default();
    created.set_id(self.next_id.fetch_add(1, Ordering::SeqCst));
    Ok(created)
  }

  async fn update(&self, _id: u64, _draft: E::Draft) -> Result<E, Unreachable> {
    self.check()?;
    Ok(E::default())
  }

  async fn delete(&self, _id: u64) -> Result<(), Unreachable> { self.check() }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

fn raw_user(id: u64, first: &str, last: &str, email: &str) -> User {
  User {
    id,
    name: UserName {
      firstname: first.into(),
      lastname:  last.into(),
    },
    email: email.into(),
    username: first.to_lowercase(),
    ..User::default()
  }
}

fn five_users() -> Vec<User> {
  vec![
    raw_user(1, "Gunjankumar", "Choudhari", "gunjan@bluemedix.com"),
    raw_user(2, "Harsh", "bhoi", "Harsh@gmail.com"),
    raw_user(3, "Om", "Rane", "om@bluemedix.com"),
    raw_user(4, "omkar", "belote", "omkar@bluemedix.com"),
    raw_user(5, "vishwajeet", "patil", "vis@gmail.com"),
  ]
}

fn raw_product(id: u64, title: &str, category: &str, price: f64) -> Product {
  Product {
    id,
    title: title.into(),
    price,
    description: format!("{title} description"),
    category: category.into(),
    image: format!("/products/{id}.jpg"),
    ..Product::default()
  }
}

fn user_controller(
  items: Vec<User>,
) -> (Arc<FakeStore<User>>, ListController<User, FakeStore<User>>) {
  let store = FakeStore::with_items(items);
  let ctrl =
    ListController::with_rng(store.clone(), SmallRng::seed_from_u64(42));
  (store, ctrl)
}

fn user_draft(name: &str, email: &str) -> UserDraft {
  UserDraft {
    name:     name.into(),
    email:    email.into(),
    username: "newuser".into(),
    password: "hunter2".into(),
    phone:    None,
  }
}

// ─── Color hash ──────────────────────────────────────────────────────────────

#[test]
fn color_reference_vectors() {
  assert_eq!(color_for("A"), "#410000");
  assert_eq!(color_for("Ab"), "#410800");
}

#[test]
fn color_empty_input_falls_back() {
  assert_eq!(color_for(""), "#1976d2");
}

#[test]
fn color_is_pure_and_well_formed() {
  for name in ["Gunjankumar Choudhari", "Om Rane", "vishwajeet patil", "日本"] {
    let first = color_for(name);
    assert_eq!(first, color_for(name));
    assert_eq!(first.len(), 7);
    assert!(first.starts_with('#'));
    assert!(first[1..].chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
  }
}

#[test]
fn initials_take_first_char_of_each_word() {
  assert_eq!(initials("Gunjankumar Choudhari"), "GC");
  assert_eq!(initials("omkar belote"), "ob");
  assert_eq!(initials(""), "");
}

// ─── Name split ──────────────────────────────────────────────────────────────

#[test]
fn name_split_first_token_then_rest() {
  let name = UserName::from_display("Anna Maria Jopek");
  assert_eq!(name.firstname, "Anna");
  assert_eq!(name.lastname, "Maria Jopek");
}

#[test]
fn name_split_single_token_has_empty_lastname() {
  let name = UserName::from_display("Gunjankumar");
  assert_eq!(name.firstname, "Gunjankumar");
  assert_eq!(name.lastname, "");
  assert_eq!(name.display(), "Gunjankumar");
}

// ─── Filtering ───────────────────────────────────────────────────────────────

#[test]
fn filter_empty_term_is_identity() {
  let users = five_users();
  let kept = filter(&users, "");
  assert_eq!(kept.len(), users.len());
  assert!(kept.iter().zip(&users).all(|(a, b)| a.id == b.id));
}

#[test]
fn filter_is_case_insensitive_over_name_and_email() {
  let users = five_users();

  let by_name = filter(&users, "HARSH");
  assert_eq!(by_name.len(), 1);
  assert_eq!(by_name[0].id, 2);

  let by_email = filter(&users, "bluemedix.com");
  let ids: Vec<u64> = by_email.iter().map(|u| u.id).collect();
  assert_eq!(ids, vec![1, 3, 4]);
}

#[test]
fn filter_matches_role_label() {
  let mut users = five_users();
  users[2].role = Role::InventoryManager;
  let kept = filter(&users, "inventory man");
  assert_eq!(kept.len(), 1);
  assert_eq!(kept[0].id, 3);
}

#[test]
fn filter_preserves_relative_order() {
  let users = five_users();
  // "om" hits "Om Rane" (name), "omkar belote" (name), and the two
  // bluemedix emails containing "om".
  let kept = filter(&users, "om");
  let ids: Vec<u64> = kept.iter().map(|u| u.id).collect();
  let mut sorted = ids.clone();
  sorted.sort_unstable();
  assert_eq!(ids, sorted);
}

#[test]
fn product_filter_covers_title_and_category_only() {
  let products = vec![
    raw_product(1, "Amoxicillin", "Antibiotics", 120.0),
    raw_product(2, "Ibuprofen", "Pain Relief", 85.0),
    raw_product(3, "Digital Thermometer", "Medical Devices", 450.0),
  ];

  let by_category = filter(&products, "pain");
  assert_eq!(by_category.len(), 1);
  assert_eq!(by_category[0].id, 2);

  // Descriptions all contain "description"; the filter must not look there.
  assert!(filter(&products, "description").is_empty());
}

// ─── Loading & enrichment ────────────────────────────────────────────────────

#[tokio::test]
async fn load_populates_and_enriches() {
  let (_store, mut ctrl) = user_controller(five_users());
  assert!(ctrl.is_loading());

  ctrl.load().await;

  assert!(!ctrl.is_loading());
  assert!(ctrl.load_error().is_none());
  assert_eq!(ctrl.collection().len(), 5);
  for user in ctrl.collection() {
    assert!(matches!(user.status, Status::Active | Status::Inactive));
    assert!(matches!(
      user.role,
      Role::Admin | Role::Customer | Role::Sales | Role::InventoryManager
    ));
  }
}

#[tokio::test]
async fn enrichment_is_seed_deterministic_and_rerolled_per_load() {
  let many: Vec<User> = (1..=200)
    .map(|i| raw_user(i, "User", &i.to_string(), "u@example.com"))
    .collect();

  let (_s1, mut a) = user_controller(many.clone());
  let (_s2, mut b) = user_controller(many);
  a.load().await;
  b.load().await;

  // Same seed, same draws.
  let statuses_a: Vec<Status> = a.collection().iter().map(|u| u.status).collect();
  let statuses_b: Vec<Status> = b.collection().iter().map(|u| u.status).collect();
  assert_eq!(statuses_a, statuses_b);

  // With 200 draws every status and role shows up.
  assert!(a.collection().iter().any(|u| u.status == Status::Active));
  assert!(a.collection().iter().any(|u| u.status == Status::Inactive));
  for role in [Role::Admin, Role::Customer, Role::Sales, Role::InventoryManager] {
    assert!(a.collection().iter().any(|u| u.role == role));
  }

  // A second load re-rolls; the RNG has advanced, so at least one of the
  // 200 statuses flips.
  a.load().await;
  let rerolled: Vec<Status> = a.collection().iter().map(|u| u.status).collect();
  assert_ne!(statuses_a, rerolled);
}

#[tokio::test]
async fn load_failure_sets_message_and_keeps_collection() {
  let (store, mut ctrl) = user_controller(five_users());
  ctrl.load().await;
  assert_eq!(ctrl.collection().len(), 5);

  store.set_fail(true);
  ctrl.load().await;

  assert!(!ctrl.is_loading());
  assert_eq!(
    ctrl.load_error(),
    Some("Failed to fetch users. Please try again later.")
  );
  assert_eq!(ctrl.collection().len(), 5);

  // Recovery clears the error.
  store.set_fail(false);
  ctrl.load().await;
  assert!(ctrl.load_error().is_none());
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_appends_merged_draft_with_default_enrichment() {
  let (_store, mut ctrl) = user_controller(five_users());
  ctrl.load().await;

  let draft = user_draft("New Person", "new@bluemedix.com");
  assert!(ctrl.create(&draft).await);

  assert_eq!(ctrl.collection().len(), 6);
  let created = ctrl.collection().last().unwrap();
  assert_eq!(created.id, 6); // server-assigned
  assert_eq!(created.email, "new@bluemedix.com");
  assert_eq!(created.name.firstname, "New");
  assert_eq!(created.name.lastname, "Person");
  assert_eq!(created.status, Status::Active);

  let notice = ctrl.take_notice().unwrap();
  assert_eq!(notice.message, "User added successfully!");
  assert_eq!(notice.severity, Severity::Success);
  assert!(ctrl.take_notice().is_none());
}

#[tokio::test]
async fn create_product_defaults_to_in_stock() {
  let store = FakeStore::with_items(vec![raw_product(1, "Ibuprofen", "Pain Relief", 85.0)]);
  let mut ctrl =
    ListController::with_rng(store, SmallRng::seed_from_u64(7));
  ctrl.load().await;

  let draft = ProductDraft {
    title:       "Vitamin D3".into(),
    price:       "350".into(),
    description: "Supplement".into(),
    category:    "Supplements".into(),
    image:       "/products/d3.jpg".into(),
  };
  assert!(ctrl.create(&draft).await);

  let created = ctrl.collection().last().unwrap();
  assert_eq!(created.stock, Stock::InStock);
  assert_eq!(created.price, 350.0);
  assert_eq!(
    ctrl.take_notice().unwrap().message,
    "Product added successfully!"
  );
}

#[tokio::test]
async fn create_failure_leaves_collection_untouched() {
  let (store, mut ctrl) = user_controller(five_users());
  ctrl.load().await;
  store.set_fail(true);

  assert!(!ctrl.create(&user_draft("New Person", "new@bluemedix.com")).await);

  assert_eq!(ctrl.collection().len(), 5);
  let notice = ctrl.take_notice().unwrap();
  assert_eq!(notice.message, "Failed to add user. Please try again.");
  assert_eq!(notice.severity, Severity::Error);
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_merges_draft_over_target_only() {
  let (_store, mut ctrl) = user_controller(five_users());
  ctrl.load().await;
  let prior_role = ctrl.collection()[2].role;
  let untouched_email = ctrl.collection()[0].email.clone();

  let draft = UserDraft {
    name:     "Om Ramchandra Rane".into(),
    email:    "om.rane@bluemedix.com".into(),
    username: "omrane".into(),
    password: "changed".into(),
    phone:    Some("555-0101".into()),
  };
  assert!(ctrl.update(3, &draft).await);

  let updated = ctrl.collection().iter().find(|u| u.id == 3).unwrap();
  assert_eq!(updated.name.firstname, "Om");
  assert_eq!(updated.name.lastname, "Ramchandra Rane");
  assert_eq!(updated.email, "om.rane@bluemedix.com");
  assert_eq!(updated.phone.as_deref(), Some("555-0101"));
  // Enrichment survives the merge; no other record is altered.
  assert_eq!(updated.role, prior_role);
  assert_eq!(ctrl.collection()[0].email, untouched_email);
  assert_eq!(
    ctrl.take_notice().unwrap().message,
    "User updated successfully!"
  );
}

#[tokio::test]
async fn update_failure_changes_nothing() {
  let (store, mut ctrl) = user_controller(five_users());
  ctrl.load().await;
  store.set_fail(true);

  assert!(!ctrl.update(3, &user_draft("Nobody Nowhere", "x@x.com")).await);

  let target = ctrl.collection().iter().find(|u| u.id == 3).unwrap();
  assert_eq!(target.email, "om@bluemedix.com");
  assert_eq!(
    ctrl.take_notice().unwrap().message,
    "Failed to update user. Please try again."
  );
}

// ─── Remove ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn remove_deletes_exactly_one_by_id() {
  let (_store, mut ctrl) = user_controller(five_users());
  ctrl.load().await;

  assert!(ctrl.remove(3).await);

  assert_eq!(ctrl.collection().len(), 4);
  assert!(ctrl.collection().iter().all(|u| u.id != 3));
  let ids: Vec<u64> = ctrl.collection().iter().map(|u| u.id).collect();
  assert_eq!(ids, vec![1, 2, 4, 5]); // order preserved
  assert_eq!(
    ctrl.take_notice().unwrap().message,
    "User deleted successfully!"
  );
}

#[tokio::test]
async fn remove_failure_keeps_entity() {
  let (store, mut ctrl) = user_controller(five_users());
  ctrl.load().await;
  store.set_fail(true);

  assert!(!ctrl.remove(3).await);

  assert_eq!(ctrl.collection().len(), 5);
  assert!(ctrl.collection().iter().any(|u| u.id == 3));
  assert_eq!(
    ctrl.take_notice().unwrap().message,
    "Failed to delete user. Please try again."
  );
}

// ─── Detail fetch ────────────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_detail_rerolls_enrichment_independently() {
  let (_store, mut ctrl) = user_controller(five_users());
  ctrl.load().await;

  let detail = ctrl.fetch_detail(2).await.unwrap();
  assert_eq!(detail.id, 2);
  // The fetched copy is enriched but the list entry is not rewritten.
  assert_eq!(ctrl.collection().len(), 5);
}

#[tokio::test]
async fn fetch_detail_failure_notifies() {
  let (store, mut ctrl) = user_controller(five_users());
  ctrl.load().await;
  store.set_fail(true);

  assert!(ctrl.fetch_detail(2).await.is_none());
  assert_eq!(
    ctrl.take_notice().unwrap().message,
    "Failed to fetch user details. Please try again later."
  );
}

// ─── Drafts ──────────────────────────────────────────────────────────────────

#[test]
fn user_draft_requires_all_fields_but_phone() {
  assert!(user_draft("A B", "a@b.com").validate().is_ok());

  let mut missing = user_draft("A B", "a@b.com");
  missing.password.clear();
  assert!(missing.validate().is_err());
}

#[test]
fn product_price_coercion() {
  let mut draft = ProductDraft {
    title:       "Thermometer".into(),
    price:       " 450.50 ".into(),
    description: "Digital".into(),
    category:    "Medical Devices".into(),
    image:       "/products/t.jpg".into(),
  };
  assert_eq!(draft.price_value().unwrap(), 450.50);

  draft.price = "₹120".into();
  assert!(draft.price_value().is_err());
  assert!(draft.validate().is_err());
}
