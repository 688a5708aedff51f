//! Caller-facing response models and status mapping.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::analysis::{AnalysisError, EngagementReport};

pub const LIVENESS_MESSAGE: &str = "Test endpoint: API is up and running.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivenessBody {
    pub message: String,
}

/// Status code plus JSON body, ready for a transport layer to send verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

/// Encode an analysis outcome: 200 with the report, 400 for rejections the
/// caller can fix, 500 with the underlying message otherwise.
pub fn into_reply(result: Result<EngagementReport, AnalysisError>) -> Reply {
    match result {
        Ok(report) => Reply {
            status: 200,
            body: serde_json::to_value(&report).expect("report serializes"),
        },
        Err(e) => Reply {
            status: if e.is_rejection() { 400 } else { 500 },
            body: serde_json::to_value(ErrorBody {
                error: e.to_string(),
            })
            .expect("error body serializes"),
        },
    }
}

/// Liveness probe body; nothing runs behind it.
pub fn liveness() -> LivenessBody {
    LivenessBody {
        message: LIVENESS_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::emotion::{Emotion, EmotionScores};
    use crate::core::video::OpenError;
    use serde_json::json;

    fn sample_report() -> EngagementReport {
        EngagementReport {
            average_emotion_scores: EmotionScores {
                happy: 100.0,
                ..Default::default()
            },
            overall_dominant_emotion: Emotion::Happy,
            total_frames_analyzed: 5,
            average_confidence_score: 80.0,
            eye_contact_score: 40.0,
        }
    }

    #[test]
    fn test_success_reply() {
        let reply = into_reply(Ok(sample_report()));
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["overall_dominant_emotion"], "happy");
        assert_eq!(reply.body["total_frames_analyzed"], 5);
    }

    #[test]
    fn test_rejection_replies_are_400_with_exact_bodies() {
        for (err, message) in [
            (AnalysisError::EmptyInput, "No video data received"),
            (
                AnalysisError::OpenFailed(OpenError::Unreadable("x".into())),
                "Failed to open video",
            ),
            (AnalysisError::NoFramesAnalyzed, "No frames successfully analyzed"),
        ] {
            let reply = into_reply(Err(err));
            assert_eq!(reply.status, 400);
            assert_eq!(reply.body, json!({ "error": message }));
        }
    }

    #[test]
    fn test_internal_failure_reply_is_500_with_message() {
        let reply = into_reply(Err(AnalysisError::PoolInit("no threads".into())));
        assert_eq!(reply.status, 500);
        assert_eq!(reply.body, json!({ "error": "worker pool init failed: no threads" }));
    }

    #[test]
    fn test_liveness_body() {
        let body = liveness();
        assert_eq!(body.message, "Test endpoint: API is up and running.");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({ "message": "Test endpoint: API is up and running." })
        );
    }
}
