//! Engagement analysis facade - submit-and-block over the bounded pool.

use std::sync::Arc;

use log::info;
use once_cell::sync::OnceCell;

use crate::core::analysis::{
    AnalysisError, AnalysisPool, AnalyzerConfig, EngagementReport, VideoAnalyzer,
};
use crate::core::emotion::EmotionClassifier;
use crate::core::face::FaceLocator;
use crate::core::video::VideoOpener;

static SERVICE: OnceCell<EngagementService> = OnceCell::new();

/// Front door for video submissions.
///
/// The caller hands over raw video bytes and blocks until the dispatched
/// pipeline run completes - no partial results, no mid-run progress.
pub struct EngagementService {
    analyzer: VideoAnalyzer,
    pool: AnalysisPool,
}

impl EngagementService {
    /// Build with default pipeline tuning and worker count. The classifier
    /// and locator are loaded once here and shared read-only for the process
    /// lifetime; inference is stateless, so no teardown is needed.
    pub fn new(
        opener: Arc<dyn VideoOpener>,
        classifier: Arc<dyn EmotionClassifier>,
        locator: Arc<dyn FaceLocator>,
    ) -> Result<Self, AnalysisError> {
        Self::with_config(
            opener,
            classifier,
            locator,
            AnalyzerConfig::default(),
            AnalysisPool::default_workers(),
        )
    }

    pub fn with_config(
        opener: Arc<dyn VideoOpener>,
        classifier: Arc<dyn EmotionClassifier>,
        locator: Arc<dyn FaceLocator>,
        config: AnalyzerConfig,
        workers: usize,
    ) -> Result<Self, AnalysisError> {
        info!("🎬 EngagementService: starting with {} workers", workers);
        Ok(Self {
            analyzer: VideoAnalyzer::with_config(opener, classifier, locator, config),
            pool: AnalysisPool::new(workers)?,
        })
    }

    /// Submit a video and block until its report (or error) is ready.
    pub fn process_video(&self, video_bytes: &[u8]) -> Result<EngagementReport, AnalysisError> {
        info!("📥 video submission: {} bytes", video_bytes.len());
        self.pool.run(|| self.analyzer.analyze(video_bytes))
    }

    /// Install the process-wide service. Fails with the rejected service if
    /// one is already installed.
    pub fn install(self) -> Result<(), EngagementService> {
        SERVICE.set(self)
    }

    /// The process-wide service, if one was installed.
    pub fn global() -> Option<&'static EngagementService> {
        SERVICE.get()
    }
}

impl Drop for EngagementService {
    fn drop(&mut self) {
        info!("🗑️ EngagementService: released");
    }
}
