//! Eye-contact proxy: a face near the frame center approximates
//! gaze-at-camera. Not a true gaze estimate.

use super::FaceBox;

/// A face whose box center sits strictly within `center_tolerance` of the
/// frame center in both axes counts as eye contact. Any one qualifying face
/// marks the frame; evaluation stops at the first match.
#[derive(Debug, Clone, Copy)]
pub struct EyeContactEstimator {
    pub center_tolerance: f32,
}

impl Default for EyeContactEstimator {
    fn default() -> Self {
        Self {
            center_tolerance: 0.2,
        }
    }
}

impl EyeContactEstimator {
    pub fn with_tolerance(center_tolerance: f32) -> Self {
        Self { center_tolerance }
    }

    pub fn is_eye_contact(&self, faces: &[FaceBox], frame_width: u32, frame_height: u32) -> bool {
        let frame_cx = frame_width as f32 / 2.0;
        let frame_cy = frame_height as f32 / 2.0;
        let max_dx = frame_width as f32 * self.center_tolerance;
        let max_dy = frame_height as f32 * self.center_tolerance;

        faces.iter().any(|face| {
            let (cx, cy) = face.center();
            (cx - frame_cx).abs() < max_dx && (cy - frame_cy).abs() < max_dy
        })
    }
}
