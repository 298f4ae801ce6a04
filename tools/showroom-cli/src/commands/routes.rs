//! Route table listing.

use anyhow::Result;
use showroom_core::WorkloadManifest;

use crate::context::Context;

/// Run the routes command.
pub fn run(ctx: &Context) -> Result<()> {
    let manifest = WorkloadManifest::site("showroom", env!("CARGO_PKG_VERSION"));

    if ctx.output.is_json() {
        ctx.output.json(&manifest);
        return Ok(());
    }

    ctx.output
        .header(&format!("{} {} routes", manifest.name, manifest.version));
    let width = manifest
        .routes
        .iter()
        .map(|r| r.pattern.len())
        .max()
        .unwrap_or(0);
    for route in &manifest.routes {
        let methods = route.methods.join(", ");
        ctx.output.table_row(
            &[route.pattern.as_str(), route.handler.as_str(), methods.as_str()],
            &[width, 18, 0],
        );
    }
    Ok(())
}
