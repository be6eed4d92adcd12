//! Core types and logic for the BlueMedix admin console.
//!
//! This crate is deliberately free of HTTP dependencies. It owns the entity
//! model (staff users and pharmaceutical products), the client-side
//! enrichment step, the avatar color hash, the [`store::RemoteStore`]
//! abstraction, and the generic [`controller::ListController`] every screen
//! is built on.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod color;
pub mod controller;
pub mod entity;
pub mod error;
pub mod product;
pub mod store;
pub mod user;

pub use error::{Error, Result};

#[cfg(test)]
mod tests;
