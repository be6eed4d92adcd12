//! Wire encoding of form drafts.
//!
//! Entity responses deserialize directly via the serde derives in
//! `bluemedix-core`; only the outgoing request bodies need adapting here.
//! A user's display name is split into the backend's nested
//! `firstname`/`lastname` pair, and a product's edited price string is
//! coerced to the numeric wire form.

use bluemedix_core::{
  entity::Draft,
  product::ProductDraft,
  user::{UserDraft, UserName},
};
use serde_json::{Value, json};

use crate::Result;

/// A draft that knows its JSON request body. Sealed: the module is private,
/// so only the two draft types can implement it.
pub trait WireDraft: Draft {
  fn body(&self) -> Result<Value>;
}

impl WireDraft for UserDraft {
  fn body(&self) -> Result<Value> {
    let UserName { firstname, lastname } = UserName::from_display(&self.name);
    let mut body = json!({
      "name": { "firstname": firstname, "lastname": lastname },
      "email": self.email,
      "username": self.username,
      "password": self.password,
    });
    if let (Some(phone), Some(map)) = (&self.phone, body.as_object_mut()) {
      map.insert("phone".to_owned(), Value::String(phone.clone()));
    }
    Ok(body)
  }
}

impl WireDraft for ProductDraft {
  fn body(&self) -> Result<Value> {
    let price = self.price_value().map_err(crate::Error::Core)?;
    Ok(json!({
      "title": self.title,
      "price": price,
      "description": self.description,
      "category": self.category,
      "image": self.image,
    }))
  }
}
