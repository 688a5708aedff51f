//! Emotion vocabulary and per-category score mapping.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod classifier;

pub use classifier::{ClassifierError, EmotionClassifier, EmotionPrediction, MockEmotionClassifier};

/// The fixed emotion vocabulary. Declaration order is the priority order used
/// to break exact ties when picking a dominant category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Fear,
    Disgust,
    Surprise,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Happy,
        Emotion::Sad,
        Emotion::Angry,
        Emotion::Fear,
        Emotion::Disgust,
        Emotion::Surprise,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happy => "happy",
            Emotion::Sad => "sad",
            Emotion::Angry => "angry",
            Emotion::Fear => "fear",
            Emotion::Disgust => "disgust",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value per emotion category. Field order matches the priority order of
/// [`Emotion`] and the serialized JSON field order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub happy: f64,
    pub sad: f64,
    pub angry: f64,
    pub fear: f64,
    pub disgust: f64,
    pub surprise: f64,
    pub neutral: f64,
}

impl EmotionScores {
    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Happy => self.happy,
            Emotion::Sad => self.sad,
            Emotion::Angry => self.angry,
            Emotion::Fear => self.fear,
            Emotion::Disgust => self.disgust,
            Emotion::Surprise => self.surprise,
            Emotion::Neutral => self.neutral,
        }
    }

    pub fn set(&mut self, emotion: Emotion, value: f64) {
        match emotion {
            Emotion::Happy => self.happy = value,
            Emotion::Sad => self.sad = value,
            Emotion::Angry => self.angry = value,
            Emotion::Fear => self.fear = value,
            Emotion::Disgust => self.disgust = value,
            Emotion::Surprise => self.surprise = value,
            Emotion::Neutral => self.neutral = value,
        }
    }

    /// Highest-scoring category. Exact ties keep the earliest category in
    /// priority order, so the result never depends on iteration accidents.
    pub fn dominant(&self) -> Emotion {
        let mut best = Emotion::Happy;
        for &emotion in &Emotion::ALL[1..] {
            if self.get(emotion) > self.get(best) {
                best = emotion;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_picks_maximum() {
        let mut scores = EmotionScores::default();
        scores.set(Emotion::Surprise, 62.0);
        scores.set(Emotion::Neutral, 30.0);
        assert_eq!(scores.dominant(), Emotion::Surprise);
    }

    #[test]
    fn test_dominant_tie_breaks_by_priority_order() {
        let mut scores = EmotionScores::default();
        scores.set(Emotion::Neutral, 50.0);
        scores.set(Emotion::Sad, 50.0);
        assert_eq!(scores.dominant(), Emotion::Sad);

        let mut scores = EmotionScores::default();
        scores.set(Emotion::Happy, 50.0);
        scores.set(Emotion::Neutral, 50.0);
        assert_eq!(scores.dominant(), Emotion::Happy);
    }

    #[test]
    fn test_dominant_all_zero_is_first_category() {
        assert_eq!(EmotionScores::default().dominant(), Emotion::Happy);
    }

    #[test]
    fn test_get_set_roundtrip() {
        let mut scores = EmotionScores::default();
        for (i, &emotion) in Emotion::ALL.iter().enumerate() {
            scores.set(emotion, i as f64);
        }
        for (i, &emotion) in Emotion::ALL.iter().enumerate() {
            assert_eq!(scores.get(emotion), i as f64);
        }
    }

    #[test]
    fn test_serialized_keys_are_lowercase_category_names() {
        let json = serde_json::to_value(EmotionScores::default()).unwrap();
        for emotion in Emotion::ALL {
            assert!(json.get(emotion.as_str()).is_some(), "missing {}", emotion);
        }
        assert_eq!(
            serde_json::to_value(Emotion::Fear).unwrap(),
            serde_json::Value::String("fear".into())
        );
    }
}
