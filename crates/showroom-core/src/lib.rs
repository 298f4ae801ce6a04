//! Core abstractions for the showroom site.
//!
//! This crate provides the fundamental types shared by every other crate:
//! - `RequestContext` - Typed request parameters
//! - `Route` - The site's route table
//! - `SiteConfig` - Content API and site settings
//! - `TimingContext` / `LifecyclePhase` - Request lifecycle tracking

mod config;
mod context;
mod lifecycle;
mod route;
mod workload;

pub use config::*;
pub use context::*;
pub use lifecycle::*;
pub use route::*;
pub use workload::*;
