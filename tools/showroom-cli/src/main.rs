//! Showroom CLI - Render site pages from the terminal.
//!
//! Commands:
//! - `showroom render <path>` - Resolve a path and print the HTML document
//! - `showroom routes` - List the route table

mod commands;
mod context;
mod output;
mod transport;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::RenderArgs;

/// Showroom CLI - Preview the luxury car showroom without a Spin host
#[derive(Parser)]
#[command(name = "showroom")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a site path to HTML
    Render(RenderArgs),

    /// List the site's routes
    Routes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    showroom_observability::init_tracing_with_default(default_filter);

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Routes => commands::routes::run(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
