//! Request lifecycle tracking.

use std::time::{Duration, Instant};

/// Lifecycle phases for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Request received, content not yet resolved.
    Start,
    /// Shell HTML has been flushed to the client.
    ShellSent,
    /// A named section has been sent.
    SectionSent(String),
    /// Request completed.
    Completion,
}

/// Named timing marks, stored as offsets from request start.
#[derive(Debug, Clone)]
pub struct TimingContext {
    start: Instant,
    marks: Vec<(String, Duration)>,
}

impl TimingContext {
    /// Create a new timing context starting now.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            marks: Vec::new(),
        }
    }

    /// Record a timing mark. Re-marking a name overwrites it.
    pub fn mark(&mut self, name: &str) {
        let offset = self.start.elapsed();
        match self.marks.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = offset,
            None => self.marks.push((name.to_string(), offset)),
        }
    }

    /// Mark section start.
    pub fn mark_section_start(&mut self, section: &str) {
        self.mark(&format!("section:{}:start", section));
    }

    /// Mark section sent.
    pub fn mark_section_sent(&mut self, section: &str) {
        self.mark(&format!("section:{}:sent", section));
    }

    /// Offset of a mark from request start.
    pub fn offset(&self, name: &str) -> Option<Duration> {
        self.marks
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, offset)| *offset)
    }

    /// Elapsed time since start.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Time until the shell was flushed.
    pub fn time_to_shell(&self) -> Option<Duration> {
        self.offset("shell_sent")
    }

    /// Time until the first section was flushed.
    pub fn time_to_first_section(&self) -> Option<Duration> {
        self.marks
            .iter()
            .filter(|(n, _)| n.starts_with("section:") && n.ends_with(":sent"))
            .map(|(_, offset)| *offset)
            .min()
    }

    /// How long a section took between its start and sent marks.
    pub fn section_duration(&self, section: &str) -> Option<Duration> {
        let start = self.offset(&format!("section:{}:start", section))?;
        let sent = self.offset(&format!("section:{}:sent", section))?;
        Some(sent.saturating_sub(start))
    }
}

impl Default for TimingContext {
    fn default() -> Self {
        Self::new()
    }
}
