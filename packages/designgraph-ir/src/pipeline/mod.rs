//! Extraction pipeline
//!
//! Session-scoped orchestration: one [`ExtractionPipeline::run`] allocates an
//! [`ExtractionSession`], reports progress through a [`ProgressSink`], honours
//! a [`CancellationToken`] and returns an [`ExtractionOutput`].

pub mod cancellation;
pub mod orchestrator;
pub mod output;
pub mod progress;
pub mod session;

pub use cancellation::CancellationToken;
pub use orchestrator::{stages, ExtractionPipeline};
pub use output::{Completion, ExtractionOutput};
pub use progress::{NoopProgress, ProgressSink, ProgressUpdate, RecordingProgress};
pub use session::{ExtractionSession, PipelineStats};
