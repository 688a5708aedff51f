//! Final engagement summary.

use serde::{Deserialize, Serialize};

use crate::core::emotion::{Emotion, EmotionScores};

/// Immutable summary of one analyzed submission. Serializes to the
/// caller-facing JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementReport {
    /// Percent of analyzed frames dominated by each category (0-100).
    pub average_emotion_scores: EmotionScores,
    pub overall_dominant_emotion: Emotion,
    pub total_frames_analyzed: u64,
    /// Mean of each frame's own dominant-category confidence.
    pub average_confidence_score: f64,
    /// Percent of analyzed frames with a centered face (0-100).
    pub eye_contact_score: f64,
}
