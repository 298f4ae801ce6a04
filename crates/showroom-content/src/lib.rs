//! Client for the Cosmic headless content API.
//!
//! The site only reads. Every query is one GET against the bucket's
//! objects endpoint:
//!
//! ```text
//! {base}/v3/buckets/{bucket}/objects?read_key=..&query={"type":"cars",..}&props=..&depth=1
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use showroom_content::{ContentApi, CosmicClient, ObjectQuery};
//!
//! let client = CosmicClient::new(&config.content, transport);
//! let page = client
//!     .find(&ObjectQuery::of_type("cars").filter("metadata.available", true).depth(1))
//!     .await?;
//! ```
//!
//! `ContentApi` is the seam page code depends on; `MemoryContentStore`
//! implements it in-process for tests and offline previews.

mod client;
mod error;
mod memory;
mod query;
mod transport;

pub use client::{ContentApi, CosmicClient, ObjectPage};
pub use error::ContentError;
pub use memory::MemoryContentStore;
pub use query::ObjectQuery;
pub use transport::{HttpResponse, Transport};

#[cfg(target_arch = "wasm32")]
pub use transport::SpinTransport;
