//! [`HttpStore`] — the reqwest implementation of [`RemoteStore`].

use std::time::Duration;

use bluemedix_core::{entity::Entity, store::RemoteStore};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{Error, Result, wire::WireDraft};

/// REST origin of the public demo backend.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// One store serves both entity types; the per-entity collection path comes
/// from [`Entity::PLURAL`].
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpStore {
  client:   Client,
  base_url: String,
}

impl HttpStore {
  /// Build a store against `base_url` with the default 30-second transport
  /// timeout.
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self { client, base_url: base_url.into() })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{path}", self.base_url.trim_end_matches('/'))
  }

  fn check(
    method: &'static str,
    path: String,
    resp: reqwest::Response,
  ) -> Result<reqwest::Response> {
    if resp.status().is_success() {
      Ok(resp)
    } else {
      Err(Error::Status { method, path, status: resp.status() })
    }
  }
}

impl<E> RemoteStore<E> for HttpStore
where
  E: Entity + DeserializeOwned,
  E::Draft: WireDraft,
{
  type Error = Error;

  /// `GET /{E}s`
  async fn list(&self) -> Result<Vec<E>> {
    let path = format!("/{}", E::PLURAL);
    let resp = self.client.get(self.url(&path)).send().await?;
    Ok(Self::check("GET", path, resp)?.json().await?)
  }

  /// `GET /{E}s/{id}`
  async fn get(&self, id: u64) -> Result<E> {
    let path = format!("/{}/{id}", E::PLURAL);
    let resp = self.client.get(self.url(&path)).send().await?;
    Ok(Self::check("GET", path, resp)?.json().await?)
  }

  /// `POST /{E}s`
  async fn create(&self, draft: E::Draft) -> Result<E> {
    let path = format!("/{}", E::PLURAL);
    let resp = self
      .client
      .post(self.url(&path))
      .json(&draft.body()?)
      .send()
      .await?;
    Ok(Self::check("POST", path, resp)?.json().await?)
  }

  /// `PUT /{E}s/{id}`
  async fn update(&self, id: u64, draft: E::Draft) -> Result<E> {
    let path = format!("/{}/{id}", E::PLURAL);
    let resp = self
      .client
      .put(self.url(&path))
      .json(&draft.body()?)
      .send()
      .await?;
    Ok(Self::check("PUT", path, resp)?.json().await?)
  }

  /// `DELETE /{E}s/{id}` — the response body is only an acknowledgement and
  /// is discarded.
  async fn delete(&self, id: u64) -> Result<()> {
    let path = format!("/{}/{id}", E::PLURAL);
    let resp = self.client.delete(self.url(&path)).send().await?;
    Self::check("DELETE", path, resp)?;
    Ok(())
  }
}
