//! CLI command implementations.

pub mod render;
pub mod routes;

use clap::Args;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Site path, e.g. `/brands/ferrari`.
    #[arg(default_value = "/")]
    pub path: String,

    /// Write the document to a file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,

    /// Read content from a JSON fixture file instead of the content API.
    #[arg(long, value_name = "FIXTURES")]
    pub offline: Option<String>,
}
