//! Engagement analysis pipeline.
//!
//! Flow for one submission:
//! 1. Byte payload lands in a scoped temp file and the external decoder opens it
//! 2. The sampler walks the stream and keeps every Nth frame
//! 3. Each kept frame is downscaled, classified and face-scanned inside its
//!    own fault boundary
//! 4. The accumulator reduces surviving frames into the engagement report

pub mod accumulator;
pub mod analyzer;
pub mod error;
pub mod pool;
pub mod report;

pub use accumulator::{EmotionAccumulator, FrameAnalysis};
pub use analyzer::{AnalyzerConfig, VideoAnalyzer};
pub use error::{AnalysisError, FrameError};
pub use pool::AnalysisPool;
pub use report::EngagementReport;
