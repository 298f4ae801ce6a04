//! Observability for the showroom site.
//!
//! This crate provides:
//! - `StructuredLogger` - Request-scoped structured logging, emitted as `tracing` events
//! - `init_tracing` - Subscriber installation for binaries and the workload
//! - `MetricsCollector` / `FetchRecorder` - Section and content-fetch timings

mod logging;
mod metrics;
mod subscriber;

pub use logging::*;
pub use metrics::*;
pub use subscriber::*;

// Re-export RequestId from showroom-core for convenience
pub use showroom_core::RequestId;
