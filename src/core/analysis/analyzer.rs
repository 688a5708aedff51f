//! Submission orchestration.
//!
//! Drives one submission end to end: temp resource lifecycle, the sampling
//! loop, and the per-frame fault boundary. One bad frame never aborts the
//! submission; a frame that fails anywhere contributes to nothing.

use std::io::Write;
use std::sync::Arc;

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::core::emotion::EmotionClassifier;
use crate::core::face::{EyeContactEstimator, FaceLocator, ScanParams};
use crate::core::video::{Frame, FrameSampler, VideoOpener};

use super::accumulator::{EmotionAccumulator, FrameAnalysis};
use super::error::{AnalysisError, FrameError};
use super::report::EngagementReport;

/// Pipeline tuning. The defaults match the production settings: inference on
/// every 30th frame, half-resolution inference input, 1.1/5 face scan,
/// 20% center tolerance.
#[derive(Debug, Clone, Copy)]
pub struct AnalyzerConfig {
    /// Run inference on every Nth frame.
    pub frame_interval: u32,
    /// Downscale factor applied before inference.
    pub scale_factor: f32,
    pub scan: ScanParams,
    pub eye_contact: EyeContactEstimator,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            frame_interval: FrameSampler::DEFAULT_INTERVAL,
            scale_factor: 0.5,
            scan: ScanParams::default(),
            eye_contact: EyeContactEstimator::default(),
        }
    }
}

/// Drives one submission at a time. The opener, classifier and locator are
/// loaded once at startup and shared read-only across all submissions;
/// everything else lives for a single `analyze` call.
pub struct VideoAnalyzer {
    opener: Arc<dyn VideoOpener>,
    classifier: Arc<dyn EmotionClassifier>,
    locator: Arc<dyn FaceLocator>,
    config: AnalyzerConfig,
}

impl VideoAnalyzer {
    pub fn new(
        opener: Arc<dyn VideoOpener>,
        classifier: Arc<dyn EmotionClassifier>,
        locator: Arc<dyn FaceLocator>,
    ) -> Self {
        Self::with_config(opener, classifier, locator, AnalyzerConfig::default())
    }

    pub fn with_config(
        opener: Arc<dyn VideoOpener>,
        classifier: Arc<dyn EmotionClassifier>,
        locator: Arc<dyn FaceLocator>,
        config: AnalyzerConfig,
    ) -> Self {
        Self {
            opener,
            classifier,
            locator,
            config,
        }
    }

    /// Analyze one video submission. Blocks until the stream is exhausted;
    /// there is no cancellation or timeout.
    pub fn analyze(&self, video_bytes: &[u8]) -> Result<EngagementReport, AnalysisError> {
        if video_bytes.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        // The guard removes the file on every exit path below.
        let mut temp = NamedTempFile::new()?;
        temp.write_all(video_bytes)?;
        temp.flush()?;

        let source = self.opener.open(temp.path()).map_err(|e| {
            warn!("⚠️ failed to open video stream: {}", e);
            AnalysisError::from(e)
        })?;

        let mut accumulator = EmotionAccumulator::new();
        let sampler = FrameSampler::new(source, self.config.frame_interval);

        for frame in sampler {
            match self.process_frame(&frame) {
                Ok(analysis) => {
                    debug!(
                        "frame {}: dominant={} eye_contact={}",
                        frame.frame_number, analysis.dominant, analysis.eye_contact
                    );
                    accumulator.record(&analysis);
                }
                Err(e) => {
                    warn!("⚠️ frame {} skipped: {}", frame.frame_number, e);
                }
            }
        }

        let report = accumulator
            .finish()
            .ok_or(AnalysisError::NoFramesAnalyzed)?;
        info!(
            "📊 engagement report: dominant={} frames={} confidence={:.1} eye_contact={:.1}%",
            report.overall_dominant_emotion,
            report.total_frames_analyzed,
            report.average_confidence_score,
            report.eye_contact_score
        );
        Ok(report)
    }

    /// One sampled frame's work inside its own fault boundary: downscale,
    /// classify, grayscale, locate, eye-contact.
    fn process_frame(&self, frame: &Frame) -> Result<FrameAnalysis, FrameError> {
        let scaled = frame.downscale(self.config.scale_factor);
        let prediction = self.classifier.classify(&scaled)?;

        let gray = scaled.to_gray();
        let faces = self.locator.locate(&gray, &self.config.scan)?;
        let eye_contact = self
            .config
            .eye_contact
            .is_eye_contact(&faces, scaled.width, scaled.height);

        Ok(FrameAnalysis {
            dominant: prediction.dominant,
            confidence: prediction.dominant_confidence(),
            eye_contact,
        })
    }
}
