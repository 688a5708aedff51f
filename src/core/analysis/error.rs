//! Submission-level and per-frame error taxonomy.

use thiserror::Error;

use crate::core::emotion::ClassifierError;
use crate::core::face::LocatorError;
use crate::core::video::OpenError;

/// Whole-submission failures. The Display strings of the three rejection
/// variants are caller-facing verbatim.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("No video data received")]
    EmptyInput,
    #[error("Failed to open video")]
    OpenFailed(#[from] OpenError),
    #[error("No frames successfully analyzed")]
    NoFramesAnalyzed,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("worker pool init failed: {0}")]
    PoolInit(String),
}

impl AnalysisError {
    /// True for submissions the caller can fix (rejections), false for
    /// internal faults.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AnalysisError::EmptyInput
                | AnalysisError::OpenFailed(_)
                | AnalysisError::NoFramesAnalyzed
        )
    }
}

/// Failures inside one sampled frame's work. Absorbed by the sampling loop;
/// never surfaced to the caller.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("emotion classification failed: {0}")]
    Classify(#[from] ClassifierError),
    #[error("face localization failed: {0}")]
    Locate(#[from] LocatorError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages_are_verbatim() {
        assert_eq!(AnalysisError::EmptyInput.to_string(), "No video data received");
        assert_eq!(
            AnalysisError::OpenFailed(OpenError::Unreadable("x".into())).to_string(),
            "Failed to open video"
        );
        assert_eq!(
            AnalysisError::NoFramesAnalyzed.to_string(),
            "No frames successfully analyzed"
        );
    }

    #[test]
    fn test_rejection_partition() {
        assert!(AnalysisError::EmptyInput.is_rejection());
        assert!(AnalysisError::NoFramesAnalyzed.is_rejection());
        assert!(AnalysisError::OpenFailed(OpenError::Unreadable("x".into())).is_rejection());
        assert!(!AnalysisError::PoolInit("boom".into()).is_rejection());
        assert!(!AnalysisError::Io(std::io::Error::other("disk full")).is_rejection());
    }
}
