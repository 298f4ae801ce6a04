//! Streaming primitives for shell-first server rendering.
//!
//! - `Shell` / `HeadContent` - The document around the page sections
//! - `StreamingSink` - Enforces shell, then sections, then closing markup

mod error;
mod shell;
mod sink;

pub use error::StreamError;
pub use shell::*;
pub use sink::*;
