//! Face localization capability.

use thiserror::Error;

use crate::core::video::GrayFrame;

pub mod eye_contact;

pub use eye_contact::EyeContactEstimator;

#[derive(Debug, Error)]
pub enum LocatorError {
    #[error("face scan failed: {0}")]
    Scan(String),
}

/// Axis-aligned face bounding box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceBox {
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }
}

/// Multiscale scan tuning. `scale_step` is the ratio between successive
/// scanning window sizes; `min_neighbors` is how many overlapping candidate
/// detections a region needs before it is accepted as a face.
#[derive(Debug, Clone, Copy)]
pub struct ScanParams {
    pub scale_step: f32,
    pub min_neighbors: u32,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            scale_step: 1.1,
            min_neighbors: 5,
        }
    }
}

/// External face-locating capability: zero or more candidate boxes in a
/// grayscale image.
pub trait FaceLocator: Send + Sync {
    fn locate(&self, frame: &GrayFrame, params: &ScanParams) -> Result<Vec<FaceBox>, LocatorError>;
}

/// Mock locator with injectable per-frame behavior.
pub struct MockFaceLocator {
    pattern: Box<dyn Fn(&GrayFrame) -> Result<Vec<FaceBox>, LocatorError> + Send + Sync>,
}

impl MockFaceLocator {
    /// Never finds a face.
    pub fn none() -> Self {
        Self {
            pattern: Box::new(|_| Ok(Vec::new())),
        }
    }

    /// The same boxes for every frame.
    pub fn fixed(boxes: Vec<FaceBox>) -> Self {
        Self {
            pattern: Box::new(move |_| Ok(boxes.clone())),
        }
    }

    /// A quarter-size box whose center coincides with the frame center.
    pub fn centered() -> Self {
        Self {
            pattern: Box::new(|frame| {
                let width = (frame.width / 4).max(2);
                let height = (frame.height / 4).max(2);
                Ok(vec![FaceBox {
                    x: frame.width / 2 - width / 2,
                    y: frame.height / 2 - height / 2,
                    width,
                    height,
                }])
            }),
        }
    }

    /// Full control over the outcome per frame.
    pub fn with_pattern<F>(pattern: F) -> Self
    where
        F: Fn(&GrayFrame) -> Result<Vec<FaceBox>, LocatorError> + Send + Sync + 'static,
    {
        Self {
            pattern: Box::new(pattern),
        }
    }

    /// Fails every scan.
    pub fn failing() -> Self {
        Self {
            pattern: Box::new(|frame| {
                Err(LocatorError::Scan(format!(
                    "injected failure at frame {}",
                    frame.frame_number
                )))
            }),
        }
    }
}

impl FaceLocator for MockFaceLocator {
    fn locate(&self, frame: &GrayFrame, _params: &ScanParams) -> Result<Vec<FaceBox>, LocatorError> {
        (self.pattern)(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_gray_frame(width: u32, height: u32) -> GrayFrame {
        GrayFrame {
            width,
            height,
            data: vec![128u8; (width * height) as usize],
            frame_number: 1,
        }
    }

    #[test]
    fn test_face_box_center() {
        let face = FaceBox {
            x: 10,
            y: 20,
            width: 40,
            height: 60,
        };
        assert_eq!(face.center(), (30.0, 50.0));
    }

    #[test]
    fn test_scan_params_defaults() {
        let params = ScanParams::default();
        assert!((params.scale_step - 1.1).abs() < f32::EPSILON);
        assert_eq!(params.min_neighbors, 5);
    }

    #[test]
    fn test_centered_mock_box_sits_on_frame_center() {
        let locator = MockFaceLocator::centered();
        let frame = create_gray_frame(64, 48);

        let boxes = locator.locate(&frame, &ScanParams::default()).unwrap();
        assert_eq!(boxes.len(), 1);
        assert_eq!(boxes[0].center(), (32.0, 24.0));
    }

    #[test]
    fn test_none_and_failing_mocks() {
        let frame = create_gray_frame(64, 64);
        let params = ScanParams::default();

        assert!(MockFaceLocator::none().locate(&frame, &params).unwrap().is_empty());
        assert!(MockFaceLocator::failing().locate(&frame, &params).is_err());
    }
}
