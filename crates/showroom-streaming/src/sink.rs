//! Streaming sink that enforces the shell-first pattern.

use std::fmt::Display;

use futures::{Sink, SinkExt};
use showroom_core::{LifecyclePhase, TimingContext};

use crate::error::StreamError;

/// State of the streaming sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SinkState {
    /// Shell not yet sent.
    Initial,
    /// Shell has been sent, sections can be streamed.
    ShellSent,
    /// Closing markup sent.
    Completed,
}

/// Sink that writes a page as shell, sections, then closing markup.
///
/// Generic over any `Sink<Vec<u8>>`, including Spin's `OutgoingBody`.
pub struct StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    inner: S,
    state: SinkState,
    timing: TimingContext,
    sections_sent: Vec<String>,
    bytes_sent: usize,
}

impl<S, E> StreamingSink<S, E>
where
    S: Sink<Vec<u8>, Error = E> + Unpin,
    E: Display,
{
    /// Create a new streaming sink.
    pub fn new(sink: S, timing: TimingContext) -> Self {
        Self {
            inner: sink,
            state: SinkState::Initial,
            timing,
            sections_sent: Vec::new(),
            bytes_sent: 0,
        }
    }

    /// Send the shell opening. Must be called exactly once, first.
    pub async fn send_shell(&mut self, html: &str) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => {}
            SinkState::ShellSent => return Err(StreamError::ShellAlreadySent),
            SinkState::Completed => return Err(StreamError::Completed),
        }

        self.timing.mark("shell_start");
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark("shell_sent");
        self.state = SinkState::ShellSent;

        Ok(())
    }

    /// Send a named section. Shell must be sent first.
    pub async fn send_section(&mut self, name: &str, html: &str) -> Result<(), StreamError> {
        self.ensure_open()?;

        self.timing.mark_section_start(name);
        self.write(html.as_bytes().to_vec()).await?;
        self.timing.mark_section_sent(name);
        self.sections_sent.push(name.to_string());

        Ok(())
    }

    /// Send the closing markup, flush, and complete the response.
    pub async fn finish(&mut self, closing: &str) -> Result<(), StreamError> {
        self.ensure_open()?;

        self.write(closing.as_bytes().to_vec()).await?;
        self.inner
            .flush()
            .await
            .map_err(|e| StreamError::Sink(e.to_string()))?;
        self.timing.mark("complete");
        self.state = SinkState::Completed;

        Ok(())
    }

    fn ensure_open(&self) -> Result<(), StreamError> {
        match self.state {
            SinkState::Initial => Err(StreamError::ShellNotSent),
            SinkState::ShellSent => Ok(()),
            SinkState::Completed => Err(StreamError::Completed),
        }
    }

    async fn write(&mut self, bytes: Vec<u8>) -> Result<(), StreamError> {
        let len = bytes.len();
        self.inner
            .send(bytes)
            .await
            .map_err(|e| StreamError::Sink(e.to_string()))?;
        self.bytes_sent += len;
        Ok(())
    }

    /// Names of the sections sent so far, in order.
    pub fn sections_sent(&self) -> &[String] {
        &self.sections_sent
    }

    /// Total bytes written.
    pub fn bytes_sent(&self) -> usize {
        self.bytes_sent
    }

    /// Get the current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        match (self.state, self.sections_sent.last()) {
            (SinkState::Initial, _) => LifecyclePhase::Start,
            (SinkState::ShellSent, None) => LifecyclePhase::ShellSent,
            (SinkState::ShellSent, Some(last)) => LifecyclePhase::SectionSent(last.clone()),
            (SinkState::Completed, _) => LifecyclePhase::Completion,
        }
    }

    /// Get timing context reference.
    pub fn timing(&self) -> &TimingContext {
        &self.timing
    }

    /// Consume the sink and return the inner value.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    fn sink() -> StreamingSink<Vec<Vec<u8>>, std::convert::Infallible> {
        StreamingSink::new(Vec::new(), TimingContext::new())
    }

    #[test]
    fn test_shell_then_sections_then_finish() {
        let mut sink = sink();
        block_on(async {
            sink.send_shell("<html>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::ShellSent);
            sink.send_section("hero", "<section>hero</section>").await.unwrap();
            assert_eq!(sink.phase(), LifecyclePhase::SectionSent("hero".to_string()));
            sink.finish("</html>").await.unwrap();
        });

        assert_eq!(sink.phase(), LifecyclePhase::Completion);
        assert_eq!(sink.sections_sent(), ["hero".to_string()]);
        assert_eq!(sink.bytes_sent(), 6 + 23 + 7);
        assert!(sink.timing().time_to_shell().is_some());
        assert!(sink.timing().section_duration("hero").is_some());

        let chunks = sink.into_inner();
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2], b"</html>".to_vec());
    }

    #[test]
    fn test_section_before_shell_is_rejected() {
        let mut sink = sink();
        let err = block_on(sink.send_section("hero", "x")).unwrap_err();
        assert!(matches!(err, StreamError::ShellNotSent));
        assert_eq!(sink.phase(), LifecyclePhase::Start);
    }

    #[test]
    fn test_shell_twice_is_rejected() {
        let mut sink = sink();
        block_on(sink.send_shell("a")).unwrap();
        let err = block_on(sink.send_shell("b")).unwrap_err();
        assert!(matches!(err, StreamError::ShellAlreadySent));
    }

    #[test]
    fn test_nothing_after_finish() {
        let mut sink = sink();
        block_on(async {
            sink.send_shell("a").await.unwrap();
            sink.finish("z").await.unwrap();
        });
        let err = block_on(sink.send_section("late", "x")).unwrap_err();
        assert!(matches!(err, StreamError::Completed));
        assert_eq!(sink.into_inner().len(), 2);
    }
}
