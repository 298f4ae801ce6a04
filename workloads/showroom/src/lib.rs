//! Luxury car showroom as a Spin HTTP component.
//!
//! Resolves the route against the content API first, so the status code
//! is known, then streams the shell followed by each page section.

#![cfg(target_arch = "wasm32")]

use anyhow::{anyhow, Context as _};
use futures::SinkExt;
use spin_sdk::http::{
    Fields, IncomingRequest, Method as SpinMethod, OutgoingResponse, ResponseOutparam,
};
use spin_sdk::http_component;

use showroom_catalog::Catalog;
use showroom_content::{CosmicClient, SpinTransport};
use showroom_core::{Method, RequestContext, RequestId, Route, SiteConfig};
use showroom_observability::{
    init_tracing, FetchRecorder, LogFormat, LogLevel, MetricsCollector, StructuredLogger,
};
use showroom_site::{resolve_page, shell_for};
use showroom_streaming::StreamingSink;

const WORKLOAD: &str = "showroom";

#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    init_tracing();

    let target = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let method_name = spin_method_name(&req.method());
    let headers: Vec<(String, String)> = req
        .headers()
        .entries()
        .into_iter()
        .map(|(name, value)| (name, String::from_utf8_lossy(&value).into_owned()))
        .collect();

    let Some(method) = Method::parse(&method_name).filter(Method::is_read) else {
        let logger = StructuredLogger::new(RequestId::generate())
            .with_workload(WORKLOAD)
            .with_route(&target);
        logger
            .warn_builder("method not allowed")
            .field("method", method_name)
            .emit();
        let result = respond_plain(
            response_out,
            405,
            logger.request_id(),
            &[("allow", "GET, HEAD")],
            "Method Not Allowed",
        )
        .await;
        if let Err(e) = result {
            logger
                .error_builder("failed to send response")
                .field("error", format!("{e:#}"))
                .emit();
        }
        return;
    };

    let ctx = RequestContext::new(method, &target).with_headers(headers);
    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(&ctx.path)
        .with_min_level(LogLevel::Info)
        .with_format(LogFormat::Human);

    if let Err(e) = serve(&ctx, &logger, response_out).await {
        logger
            .error_builder("request failed")
            .field("error", format!("{e:#}"))
            .emit();
    }
}

async fn serve(
    ctx: &RequestContext,
    logger: &StructuredLogger,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    let config = match SiteConfig::from_lookup(variable) {
        Ok(config) => config,
        Err(e) => {
            logger
                .error_builder("invalid configuration")
                .field("error", e.to_string())
                .emit();
            return respond_plain(
                response_out,
                500,
                &ctx.request_id,
                &[],
                "Server configuration error",
            )
            .await;
        }
    };
    let site_name = config.site.name.as_str();

    let mut metrics = MetricsCollector::new(ctx.request_id.clone());
    metrics.set_workload(WORKLOAD);
    metrics.set_route(&ctx.path);

    let route = Route::parse(&ctx.path);
    logger
        .info_builder("request started")
        .field("method", ctx.method.as_str())
        .field("handler", route.as_ref().map_or("not_found", |r| r.handler()))
        .emit();

    let client = CosmicClient::new(&config.content, SpinTransport);
    let recorder = FetchRecorder::default();
    let catalog = Catalog::new(&client, logger).with_recorder(&recorder);

    let outcome = resolve_page(route.as_ref(), &catalog, site_name).await;
    metrics.record_fetches(recorder.take());
    let status = outcome.status().as_u16();
    let page = outcome.into_page();
    let shell = shell_for(&page, site_name);

    let headers = Fields::from_list(&[
        ("content-type".to_owned(), b"text/html; charset=utf-8".to_vec()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into_bytes()),
    ])
    .map_err(|e| anyhow!("invalid response headers: {e:?}"))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status)
        .map_err(|()| anyhow!("invalid status code {status}"))?;

    if ctx.method == Method::Head {
        response_out.set(response);
        log_summary(logger, metrics, status, 0);
        return Ok(());
    }

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    sink.send_shell(&shell.render_opening())
        .await
        .context("sending shell")?;
    metrics.record_shell_sent();

    for section in &page.sections {
        metrics.record_section_start(&section.name);
        sink.send_section(&section.name, &section.html)
            .await
            .with_context(|| format!("sending section `{}`", section.name))?;
        metrics.record_section_sent(&section.name, section.html.len());
    }

    sink.finish(&shell.render_closing())
        .await
        .context("finishing document")?;

    log_summary(logger, metrics, status, sink.bytes_sent());
    Ok(())
}

fn log_summary(logger: &StructuredLogger, metrics: MetricsCollector, status: u16, bytes: usize) {
    let summary = metrics.finalize(Some(status));
    logger
        .info_builder("request completed")
        .field_i64("status", i64::from(status))
        .field_usize("bytes_sent", bytes)
        .field("summary", summary.to_summary())
        .emit();
}

/// Plain-text response for requests that never reach page rendering.
async fn respond_plain(
    response_out: ResponseOutparam,
    status: u16,
    request_id: &RequestId,
    extra_headers: &[(&str, &str)],
    message: &str,
) -> anyhow::Result<()> {
    let mut header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), b"text/plain; charset=utf-8".to_vec()),
        ("x-request-id".to_owned(), request_id.to_string().into_bytes()),
    ];
    header_list.extend(
        extra_headers
            .iter()
            .map(|(name, value)| (name.to_string(), value.as_bytes().to_vec())),
    );

    let headers = Fields::from_list(&header_list)
        .map_err(|e| anyhow!("invalid response headers: {e:?}"))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status)
        .map_err(|()| anyhow!("invalid status code {status}"))?;

    let mut body = response.take_body();
    response_out.set(response);
    body.send(message.as_bytes().to_vec())
        .await
        .map_err(|e| anyhow!("writing response body: {e}"))?;
    Ok(())
}

/// Spin variables are lowercase; the process environment is the fallback.
fn variable(key: &str) -> Option<String> {
    spin_sdk::variables::get(&key.to_ascii_lowercase())
        .ok()
        .or_else(|| std::env::var(key).ok())
}

fn spin_method_name(method: &SpinMethod) -> String {
    match method {
        SpinMethod::Get => "GET".to_string(),
        SpinMethod::Head => "HEAD".to_string(),
        SpinMethod::Post => "POST".to_string(),
        SpinMethod::Put => "PUT".to_string(),
        SpinMethod::Delete => "DELETE".to_string(),
        SpinMethod::Connect => "CONNECT".to_string(),
        SpinMethod::Options => "OPTIONS".to_string(),
        SpinMethod::Trace => "TRACE".to_string(),
        SpinMethod::Patch => "PATCH".to_string(),
        SpinMethod::Other(other) => other.to_ascii_uppercase(),
    }
}
