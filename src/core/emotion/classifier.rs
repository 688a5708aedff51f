//! Facial-emotion classification capability.

use thiserror::Error;

use crate::core::emotion::{Emotion, EmotionScores};
use crate::core::video::Frame;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("emotion inference failed: {0}")]
    Inference(String),
}

/// One frame's classification: the full per-category confidence mapping
/// (percent, 0-100) plus the single highest-confidence category.
#[derive(Debug, Clone, Copy)]
pub struct EmotionPrediction {
    pub scores: EmotionScores,
    pub dominant: Emotion,
}

impl EmotionPrediction {
    /// Confidence the classifier reported for its own dominant category.
    pub fn dominant_confidence(&self) -> f64 {
        self.scores.get(self.dominant)
    }
}

/// External facial-emotion classification capability.
///
/// Implementations run in permissive mode: a frame without a confidently
/// localized face still yields a best-effort prediction instead of an error.
/// Sampled frames are sparse and downscaled, so many of them lack a clear
/// frontal face; a strict implementation would starve the accumulator.
pub trait EmotionClassifier: Send + Sync {
    fn classify(&self, frame: &Frame) -> Result<EmotionPrediction, ClassifierError>;
}

/// Mock classifier with injectable per-frame behavior.
pub struct MockEmotionClassifier {
    pattern: Box<dyn Fn(u64) -> Result<EmotionPrediction, ClassifierError> + Send + Sync>,
}

impl MockEmotionClassifier {
    /// Same dominant emotion at the same confidence for every frame.
    pub fn fixed(dominant: Emotion, confidence: f64) -> Self {
        let prediction = Self::prediction(dominant, confidence);
        Self {
            pattern: Box::new(move |_| Ok(prediction)),
        }
    }

    /// Full control over the outcome per frame number.
    pub fn with_pattern<F>(pattern: F) -> Self
    where
        F: Fn(u64) -> Result<EmotionPrediction, ClassifierError> + Send + Sync + 'static,
    {
        Self {
            pattern: Box::new(pattern),
        }
    }

    /// Fails on frame numbers matching the predicate, otherwise a fixed
    /// prediction.
    pub fn failing_on<F>(predicate: F, dominant: Emotion, confidence: f64) -> Self
    where
        F: Fn(u64) -> bool + Send + Sync + 'static,
    {
        let prediction = Self::prediction(dominant, confidence);
        Self {
            pattern: Box::new(move |frame_number| {
                if predicate(frame_number) {
                    Err(ClassifierError::Inference(format!(
                        "injected failure at frame {}",
                        frame_number
                    )))
                } else {
                    Ok(prediction)
                }
            }),
        }
    }

    /// A prediction with all confidence concentrated on one category.
    pub fn prediction(dominant: Emotion, confidence: f64) -> EmotionPrediction {
        let mut scores = EmotionScores::default();
        scores.set(dominant, confidence);
        EmotionPrediction { scores, dominant }
    }
}

impl EmotionClassifier for MockEmotionClassifier {
    fn classify(&self, frame: &Frame) -> Result<EmotionPrediction, ClassifierError> {
        (self.pattern)(frame.frame_number)
    }
}
