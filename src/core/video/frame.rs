//! Frame buffers and per-frame preprocessing.

/// Decoded frame. `frame_number` is the 1-based position in the stream.
#[derive(Debug, Clone)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>, // RGBA
    pub frame_number: u64,
}

impl Frame {
    pub fn new(width: u32, height: u32, data: Vec<u8>, frame_number: u64) -> Self {
        Self {
            width,
            height,
            data,
            frame_number,
        }
    }

    pub fn pixel_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Area-averaged downscale by `scale_factor` (0 < factor <= 1). Quarters
    /// the pixel count at the default 0.5, which is what makes the downstream
    /// inference affordable. Pure and deterministic.
    pub fn downscale(&self, scale_factor: f32) -> Frame {
        let target_width = ((self.width as f32 * scale_factor) as u32).max(1);
        let target_height = ((self.height as f32 * scale_factor) as u32).max(1);

        let img = image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .expect("Invalid frame data");
        let resized = image::imageops::thumbnail(&img, target_width, target_height);

        Frame {
            width: target_width,
            height: target_height,
            data: resized.into_raw(),
            frame_number: self.frame_number,
        }
    }

    /// Integer-luma grayscale (299/587/114 weights).
    pub fn to_gray(&self) -> GrayFrame {
        let data = self
            .data
            .chunks_exact(4)
            .map(|rgba| {
                ((rgba[0] as u32 * 299 + rgba[1] as u32 * 587 + rgba[2] as u32 * 114) / 1000) as u8
            })
            .collect();

        GrayFrame {
            width: self.width,
            height: self.height,
            data,
            frame_number: self.frame_number,
        }
    }
}

/// Single-channel derivative handed to face localization.
#[derive(Debug, Clone)]
pub struct GrayFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub frame_number: u64,
}
