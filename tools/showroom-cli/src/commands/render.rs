//! Render a site path the way the workload does.

use std::fs;

use anyhow::{Context as _, Result};
use serde::Serialize;
use showroom_catalog::Catalog;
use showroom_content::{ContentApi, CosmicClient, MemoryContentStore};
use showroom_core::{RequestId, Route};
use showroom_observability::{FetchMetrics, FetchOutcome, FetchRecorder, LogFormat, LogLevel, StructuredLogger};
use showroom_site::{render_document, resolve_page};

use super::RenderArgs;
use crate::context::Context;
use crate::output::{format_bytes, format_micros, status_badge};
use crate::transport::ReqwestTransport;

/// A rendered document and how it was produced.
#[derive(Debug, Serialize)]
pub struct Rendered {
    pub path: String,
    pub handler: &'static str,
    pub status: u16,
    pub sections: Vec<SectionInfo>,
    pub fetches: Vec<FetchMetrics>,
    #[serde(skip)]
    pub document: String,
}

#[derive(Debug, Serialize)]
pub struct SectionInfo {
    pub name: String,
    pub bytes: usize,
}

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let target = normalize_target(&args.path);
    let logger = StructuredLogger::new(RequestId::generate())
        .with_workload("showroom-cli")
        .with_route(&target)
        .with_min_level(if ctx.output.is_verbose() {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        })
        .with_format(LogFormat::Human);

    let api: Box<dyn ContentApi> = match &args.offline {
        Some(fixtures) => {
            let path = ctx.resolve_path(fixtures);
            ctx.output
                .info(&format!("Offline content from {}", path.display()));
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read fixtures {}", path.display()))?;
            let value: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("Fixtures {} are not valid JSON", path.display()))?;
            Box::new(MemoryContentStore::from_json(value).context("Invalid fixtures")?)
        }
        None => {
            ctx.config
                .validate()
                .context("Content API credentials are required unless --offline is given")?;
            ctx.output
                .debug(&format!("Content API {}", ctx.config.content.base_url()));
            Box::new(CosmicClient::new(&ctx.config.content, ReqwestTransport::new()?))
        }
    };

    let spinner = ctx.output.spinner(&format!("Rendering {}", target));
    let rendered = render_target(&target, api.as_ref(), &ctx.config.site.name, &logger).await;
    spinner.finish_and_clear();

    report(&rendered, ctx);

    match &args.out {
        Some(out) => {
            let path = ctx.resolve_path(out);
            fs::write(&path, &rendered.document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ctx.output.success(&format!(
                "Wrote {} to {}",
                format_bytes(rendered.document.len()),
                path.display()
            ));
        }
        None if ctx.output.is_json() => ctx.output.json(&rendered),
        None => println!("{}", rendered.document),
    }

    Ok(())
}

/// Resolve and render `target` against `api`.
pub async fn render_target(
    target: &str,
    api: &dyn ContentApi,
    site_name: &str,
    logger: &StructuredLogger,
) -> Rendered {
    let path = target.split_once('?').map_or(target, |(path, _)| path);
    let route = Route::parse(path);
    let recorder = FetchRecorder::default();
    let catalog = Catalog::new(api, logger).with_recorder(&recorder);

    let outcome = resolve_page(route.as_ref(), &catalog, site_name).await;
    let status = outcome.status().as_u16();
    let page = outcome.into_page();

    Rendered {
        path: path.to_string(),
        handler: route.as_ref().map_or("not_found", |r| r.handler()),
        status,
        sections: page
            .sections
            .iter()
            .map(|s| SectionInfo {
                name: s.name.clone(),
                bytes: s.html.len(),
            })
            .collect(),
        fetches: recorder.take(),
        document: render_document(&page, site_name),
    }
}

fn normalize_target(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn report(rendered: &Rendered, ctx: &Context) {
    let output = &ctx.output;
    if rendered.status != 200 {
        output.warn(&format!("{} resolved to status {}", rendered.path, rendered.status));
    }
    if !output.is_verbose() {
        return;
    }

    let config = ctx
        .config_source
        .as_ref()
        .map_or_else(|| "environment".to_string(), |p| p.display().to_string());
    output.kv("config", &config);
    output.kv("handler", rendered.handler);
    output.kv("status", &status_badge(rendered.status));
    output.kv("size", &format_bytes(rendered.document.len()));
    for section in &rendered.sections {
        output.kv("section", &format!("{} ({})", section.name, format_bytes(section.bytes)));
    }
    for fetch in &rendered.fetches {
        let outcome = match &fetch.outcome {
            FetchOutcome::Found { count } => format!("{count} found"),
            FetchOutcome::NotFound => "not found".to_string(),
            FetchOutcome::Failed { error } => format!("failed: {error}"),
        };
        output.kv(
            "fetch",
            &format!("{} {} {}", fetch.entity, format_micros(fetch.duration_us), outcome),
        );
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn store() -> MemoryContentStore {
        MemoryContentStore::from_json(json!({
            "objects": [
                {
                    "id": "b1", "slug": "ferrari", "title": "Ferrari", "type": "brands",
                    "metadata": {"brand_name": "Ferrari"}
                },
                {
                    "id": "c1", "slug": "f8-tributo", "title": "F8 Tributo", "type": "cars",
                    "metadata": {"year": 2022, "price": 276550, "brand": "b1", "available": true}
                }
            ]
        }))
        .unwrap()
    }

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("test"))
    }

    #[test]
    fn test_normalize_target() {
        assert_eq!(normalize_target("cars"), "/cars");
        assert_eq!(normalize_target(" /brands/ferrari "), "/brands/ferrari");
    }

    #[tokio::test]
    async fn test_render_car_detail() {
        let store = store();
        let rendered = render_target("/cars/f8-tributo", &store, "Elite Sports Cars", &logger()).await;

        assert_eq!(rendered.status, 200);
        assert_eq!(rendered.handler, "car_detail");
        assert!(rendered.document.contains("$276,550"));
        assert!(rendered.sections.iter().any(|s| s.name == "overview"));
        assert!(!rendered.fetches.is_empty());
    }

    #[tokio::test]
    async fn test_render_demo_fixtures() {
        let fixtures: serde_json::Value =
            serde_json::from_str(include_str!("../../../../demos/fixtures.json")).unwrap();
        let store = MemoryContentStore::from_json(fixtures).unwrap();
        let rendered = render_target("/", &store, "Elite Sports Cars", &logger()).await;

        assert_eq!(rendered.status, 200);
        let names: Vec<&str> = rendered.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["hero", "featured-cars", "brands", "dealerships"]);
        assert!(rendered.document.contains("/cars/porsche-911-turbo-s"));
        assert!(!rendered.document.contains("/cars/ferrari-roma"));
    }

    #[tokio::test]
    async fn test_render_unknown_path() {
        let store = store();
        let rendered = render_target("/garage?x=1", &store, "Elite Sports Cars", &logger()).await;

        assert_eq!(rendered.status, 404);
        assert_eq!(rendered.path, "/garage");
        assert!(rendered.document.contains("Page Not Found"));
        assert!(rendered.fetches.is_empty());
    }
}
