//! Per-frame outcome accumulation.

use crate::core::emotion::{Emotion, EmotionScores};

use super::report::EngagementReport;

/// One sampled frame's outcome. Produced inside the frame's fault boundary
/// and consumed immediately by the accumulator.
#[derive(Debug, Clone, Copy)]
pub struct FrameAnalysis {
    pub dominant: Emotion,
    /// Classifier confidence for this frame's own dominant category (percent).
    pub confidence: f64,
    pub eye_contact: bool,
}

/// Mutable per-submission counters. Owned exclusively by one analysis run;
/// a frame either contributes to every counter or to none.
#[derive(Debug, Default)]
pub struct EmotionAccumulator {
    counts: [u64; 7],
    total_frames: u64,
    confidence_sum: f64,
    eye_contact_frames: u64,
}

impl EmotionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, analysis: &FrameAnalysis) {
        self.counts[analysis.dominant as usize] += 1;
        self.total_frames += 1;
        self.confidence_sum += analysis.confidence;
        if analysis.eye_contact {
            self.eye_contact_frames += 1;
        }
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Reduce to the final report. `None` when nothing was analyzed.
    pub fn finish(self) -> Option<EngagementReport> {
        if self.total_frames == 0 {
            return None;
        }
        let total = self.total_frames as f64;

        let mut averages = EmotionScores::default();
        for &emotion in &Emotion::ALL {
            averages.set(emotion, self.counts[emotion as usize] as f64 / total * 100.0);
        }

        Some(EngagementReport {
            overall_dominant_emotion: averages.dominant(),
            average_emotion_scores: averages,
            total_frames_analyzed: self.total_frames,
            average_confidence_score: self.confidence_sum / total,
            eye_contact_score: self.eye_contact_frames as f64 / total * 100.0,
        })
    }
}
