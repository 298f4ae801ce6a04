//! Request timing metrics.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use showroom_core::RequestId;

/// Metrics for a single request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Workload name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    /// Route pattern.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Time to shell flush (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_shell_us: Option<u64>,
    /// Time to first section (microseconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_first_section_us: Option<u64>,
    /// Sections in the order they were sent.
    pub sections: Vec<SectionMetrics>,
    /// Content fetches in completion order.
    pub fetches: Vec<FetchMetrics>,
    /// Total request duration (microseconds).
    pub total_duration_us: u64,
    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Metrics for a single section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionMetrics {
    /// Section name.
    pub name: String,
    /// Time from request start to section start (microseconds).
    pub start_us: u64,
    /// Time from request start to section sent (microseconds).
    pub sent_us: u64,
    /// Bytes sent for this section.
    pub bytes: usize,
}

/// How a content fetch ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// Records came back.
    Found { count: usize },
    /// Upstream reported nothing matching.
    NotFound,
    /// Transport, status or decode failure.
    Failed { error: String },
}

/// Metrics for one content API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchMetrics {
    /// What was fetched, e.g. `cars` or `brand ferrari`.
    pub entity: String,
    /// Fetch duration (microseconds).
    pub duration_us: u64,
    /// Result.
    #[serde(flatten)]
    pub outcome: FetchOutcome,
}

/// Shared sink for fetch metrics.
///
/// Data access records into this through a shared reference while page
/// fetches run concurrently; the collector drains it at the end.
#[derive(Debug, Default)]
pub struct FetchRecorder {
    records: Mutex<Vec<FetchMetrics>>,
}

impl FetchRecorder {
    /// Record a finished fetch.
    pub fn record(&self, entity: impl Into<String>, duration: Duration, outcome: FetchOutcome) {
        let metrics = FetchMetrics {
            entity: entity.into(),
            duration_us: duration.as_micros() as u64,
            outcome,
        };
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(metrics);
    }

    /// Number of fetches recorded so far.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain recorded fetches.
    pub fn take(&self) -> Vec<FetchMetrics> {
        std::mem::take(
            &mut *self
                .records
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        )
    }
}

#[derive(Debug)]
struct PendingSection {
    name: String,
    start: Instant,
    sent: Option<(Instant, usize)>,
}

/// Collector for request metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    start: Instant,
    shell_sent: Option<Instant>,
    sections: Vec<PendingSection>,
    fetches: Vec<FetchMetrics>,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            start: Instant::now(),
            shell_sent: None,
            sections: Vec::new(),
            fetches: Vec::new(),
        }
    }

    /// Set workload name.
    pub fn set_workload(&mut self, workload: impl Into<String>) {
        self.workload = Some(workload.into());
    }

    /// Set route pattern.
    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    /// Record shell sent.
    pub fn record_shell_sent(&mut self) {
        self.shell_sent = Some(Instant::now());
    }

    /// Record section start.
    pub fn record_section_start(&mut self, name: &str) {
        self.sections.push(PendingSection {
            name: name.to_string(),
            start: Instant::now(),
            sent: None,
        });
    }

    /// Record section sent. A section that was never started is recorded
    /// as starting now.
    pub fn record_section_sent(&mut self, name: &str, bytes: usize) {
        let now = Instant::now();
        match self
            .sections
            .iter_mut()
            .rev()
            .find(|s| s.name == name && s.sent.is_none())
        {
            Some(section) => section.sent = Some((now, bytes)),
            None => self.sections.push(PendingSection {
                name: name.to_string(),
                start: now,
                sent: Some((now, bytes)),
            }),
        }
    }

    /// Absorb fetch metrics, typically drained from a [`FetchRecorder`].
    pub fn record_fetches(&mut self, fetches: impl IntoIterator<Item = FetchMetrics>) {
        self.fetches.extend(fetches);
    }

    /// Get total elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Finalize and return the metrics. Sections that were started but
    /// never sent are dropped.
    pub fn finalize(self, status_code: Option<u16>) -> RequestMetrics {
        let start = self.start;
        let micros = |t: Instant| t.duration_since(start).as_micros() as u64;

        let sections: Vec<SectionMetrics> = self
            .sections
            .into_iter()
            .filter_map(|section| {
                let (sent, bytes) = section.sent?;
                Some(SectionMetrics {
                    name: section.name,
                    start_us: micros(section.start),
                    sent_us: micros(sent),
                    bytes,
                })
            })
            .collect();

        RequestMetrics {
            request_id: self.request_id.to_string(),
            workload: self.workload,
            route: self.route,
            time_to_shell_us: self.shell_sent.map(micros),
            time_to_first_section_us: sections.iter().map(|s| s.sent_us).min(),
            sections,
            fetches: self.fetches,
            total_duration_us: start.elapsed().as_micros() as u64,
            status_code,
        }
    }
}

impl RequestMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Total bytes across all sections.
    pub fn section_bytes(&self) -> usize {
        self.sections.iter().map(|s| s.bytes).sum()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let ms = |us: u64| us as f64 / 1000.0;
        let mut lines = Vec::new();

        lines.push(format!(
            "Request: {} [{}]",
            self.request_id,
            self.status_code
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string())
        ));

        if let Some(tts) = self.time_to_shell_us {
            lines.push(format!("  Time to shell: {:.2}ms", ms(tts)));
        }
        if let Some(ttfs) = self.time_to_first_section_us {
            lines.push(format!("  Time to first section: {:.2}ms", ms(ttfs)));
        }
        lines.push(format!("  Total: {:.2}ms", ms(self.total_duration_us)));

        if !self.fetches.is_empty() {
            lines.push("  Content:".to_string());
            for fetch in &self.fetches {
                let outcome = match &fetch.outcome {
                    FetchOutcome::Found { count } => format!("{} found", count),
                    FetchOutcome::NotFound => "not found".to_string(),
                    FetchOutcome::Failed { error } => format!("FAILED: {}", error),
                };
                lines.push(format!(
                    "    {}: {:.2}ms - {}",
                    fetch.entity,
                    ms(fetch.duration_us),
                    outcome
                ));
            }
        }

        if !self.sections.is_empty() {
            lines.push("  Sections:".to_string());
            for section in &self.sections {
                lines.push(format!(
                    "    {}: {} bytes at {:.2}ms",
                    section.name,
                    section.bytes,
                    ms(section.sent_us)
                ));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_keep_send_order() {
        let mut metrics = MetricsCollector::new(RequestId::from_string("r"));
        metrics.record_shell_sent();
        metrics.record_section_start("hero");
        metrics.record_section_sent("hero", 120);
        metrics.record_section_sent("featured-cars", 300);
        metrics.record_section_start("abandoned");

        let summary = metrics.finalize(Some(200));
        let names: Vec<&str> = summary.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["hero", "featured-cars"]);
        assert_eq!(summary.section_bytes(), 420);
        assert!(summary.time_to_shell_us.is_some());
        assert!(summary.time_to_first_section_us.is_some());
        assert_eq!(summary.status_code, Some(200));
    }

    #[test]
    fn test_recorder_drains_into_collector() {
        let recorder = FetchRecorder::default();
        recorder.record("cars", Duration::from_millis(12), FetchOutcome::Found { count: 3 });
        recorder.record("brand zonda", Duration::from_millis(4), FetchOutcome::NotFound);
        assert_eq!(recorder.len(), 2);

        let mut metrics = MetricsCollector::new(RequestId::from_string("r"));
        metrics.record_fetches(recorder.take());
        assert!(recorder.is_empty());

        let summary = metrics.finalize(Some(404));
        assert_eq!(summary.fetches.len(), 2);
        assert_eq!(summary.fetches[0].duration_us, 12_000);

        let text = summary.to_summary();
        assert!(text.contains("Request: r [404]"));
        assert!(text.contains("cars: 12.00ms - 3 found"));
        assert!(text.contains("brand zonda: 4.00ms - not found"));
    }

    #[test]
    fn test_fetch_outcome_serializes_flat() {
        let fetch = FetchMetrics {
            entity: "dealerships".to_string(),
            duration_us: 10,
            outcome: FetchOutcome::Failed { error: "HTTP 500".to_string() },
        };
        let json: serde_json::Value = serde_json::to_value(&fetch).unwrap();
        assert_eq!(json["outcome"], "failed");
        assert_eq!(json["error"], "HTTP 500");
        assert_eq!(json["entity"], "dealerships");
    }
}
