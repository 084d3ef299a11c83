//! Progress events and the sinks that display them.
//!
//! The converter never prints. It hands each [`ProgressEvent`] to a
//! [`ProgressSink`], and the sink decides whether that ends up on stdout, in
//! a text widget, or in a channel to another thread.

use std::fmt;
use std::io::Write;
use std::path::PathBuf;
use tokio::sync::mpsc::UnboundedSender;
use crate::core::{ConversionResult, ConversionSummary};

/// One line of user-facing output.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgressEvent {
    /// Validation passed and the output folder is ready
    Started,
    /// Per-file outcome
    File(ConversionResult),
    /// Always the last event of a run
    Finished(ConversionSummary),
}

impl ProgressEvent {
    pub fn converted(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self::File(ConversionResult::Converted {
            input: input.into(),
            output: output.into(),
        })
    }

    pub fn failed(input: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::File(ConversionResult::Failed {
            input: input.into(),
            message: message.into(),
        })
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl fmt::Display for ProgressEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started => write!(f, "Starting conversion..."),
            Self::File(ConversionResult::Converted { input, output }) => {
                write!(f, "Converted: {} -> {}", input.display(), output.display())
            }
            Self::File(ConversionResult::Failed { input, message }) => {
                write!(f, "Error converting {}: {}", input.display(), message)
            }
            Self::Finished(summary) => {
                write!(
                    f,
                    "Conversion finished. Converted {} images in {:.2} seconds.",
                    summary.count,
                    summary.elapsed_seconds()
                )?;
                if summary.cancelled {
                    write!(f, " Cancelled.")?;
                }
                Ok(())
            }
        }
    }
}

/// Receives the ordered stream of events of a run.
pub trait ProgressSink {
    fn emit(&mut self, event: &ProgressEvent);
}

impl<F> ProgressSink for F
where
    F: FnMut(&ProgressEvent),
{
    fn emit(&mut self, event: &ProgressEvent) {
        self(event)
    }
}

/// Writes one line per event to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ProgressSink for ConsoleSink {
    fn emit(&mut self, event: &ProgressEvent) {
        let mut out = std::io::stdout().lock();
        // A closed stdout must not abort the batch
        let _ = writeln!(out, "{event}");
    }
}

/// Collects rendered lines in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    lines: Vec<String>,
    events: Vec<ProgressEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn events(&self) -> &[ProgressEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl ProgressSink for MemorySink {
    fn emit(&mut self, event: &ProgressEvent) {
        self.lines.push(event.to_string());
        self.events.push(event.clone());
    }
}

/// Forwards owned events to another task or thread.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<ProgressEvent>,
}

impl ChannelSink {
    pub fn new(tx: UnboundedSender<ProgressEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelSink {
    fn emit(&mut self, event: &ProgressEvent) {
        // Receiver gone means nobody is listening; keep converting
        let _ = self.tx.send(event.clone());
    }
}

/// Wraps a sink and tallies per-file outcomes.
///
/// The summary line only carries the attempted count, so callers wanting a
/// success/failure split read it from here.
#[derive(Debug)]
pub struct TallySink<S> {
    inner: S,
    succeeded: usize,
    failed: usize,
}

impl<S: ProgressSink> TallySink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            succeeded: 0,
            failed: 0,
        }
    }

    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ProgressSink> ProgressSink for TallySink<S> {
    fn emit(&mut self, event: &ProgressEvent) {
        if let ProgressEvent::File(result) = event {
            if result.is_success() {
                self.succeeded += 1;
            } else {
                self.failed += 1;
            }
        }
        self.inner.emit(event);
    }
}
