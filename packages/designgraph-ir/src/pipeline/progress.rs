//! Progress channel
//!
//! Notification only: sinks cannot influence the run. Checkpoints:
//!
//! | percent | phase                  |
//! |---------|------------------------|
//! | 0       | start                  |
//! | 5..=40  | one per unit, raw extraction |
//! | 40      | raw extraction done    |
//! | 50      | aggregation done       |
//! | 50..=95 | one per unit, analysis |
//! | 100     | complete               |

use serde::Serialize;

pub const START: u8 = 0;
pub const EXTRACTION_START: u8 = 5;
pub const EXTRACTION_DONE: u8 = 40;
pub const AGGREGATION_DONE: u8 = 50;
pub const ANALYSIS_DONE: u8 = 95;
pub const COMPLETE: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressUpdate {
    pub percent: u8,
    pub phase: String,
}

impl ProgressUpdate {
    pub fn new(percent: u8, phase: impl Into<String>) -> Self {
        Self {
            percent: percent.min(COMPLETE),
            phase: phase.into(),
        }
    }
}

/// Receiver of progress updates
pub trait ProgressSink {
    fn report(&mut self, update: ProgressUpdate);
}

impl<F> ProgressSink for F
where
    F: FnMut(ProgressUpdate),
{
    fn report(&mut self, update: ProgressUpdate) {
        self(update)
    }
}

/// Discards every update
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn report(&mut self, _update: ProgressUpdate) {}
}

/// Keeps every update, for tests and batch hosts
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    pub updates: Vec<ProgressUpdate>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percents(&self) -> Vec<u8> {
        self.updates.iter().map(|u| u.percent).collect()
    }

    pub fn last(&self) -> Option<&ProgressUpdate> {
        self.updates.last()
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&mut self, update: ProgressUpdate) {
        self.updates.push(update);
    }
}

/// Interpolated checkpoint for unit `done` of `total` inside `[from, to]`
pub fn unit_checkpoint(from: u8, to: u8, done: usize, total: usize) -> u8 {
    if total == 0 {
        return to;
    }
    let span = f64::from(to.saturating_sub(from));
    let fraction = done.min(total) as f64 / total as f64;
    from + (span * fraction).round() as u8
}

/// Wraps a sink and keeps emitted percentages non-decreasing
pub(crate) struct ProgressTracker<'s> {
    sink: &'s mut dyn ProgressSink,
    last: u8,
}

impl<'s> ProgressTracker<'s> {
    pub(crate) fn new(sink: &'s mut dyn ProgressSink) -> Self {
        Self { sink, last: 0 }
    }

    pub(crate) fn emit(&mut self, percent: u8, phase: impl Into<String>) {
        let percent = percent.max(self.last).min(COMPLETE);
        self.last = percent;
        self.sink.report(ProgressUpdate::new(percent, phase));
    }
}
