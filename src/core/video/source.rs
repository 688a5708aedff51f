//! Sequential frame sources and the video-opening capability.
//!
//! Container/codec decoding is an external capability behind [`VideoOpener`];
//! the pipeline only sees a stream of decoded frames.

use std::path::Path;

use thiserror::Error;

use super::frame::Frame;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("unreadable video stream: {0}")]
    Unreadable(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Sequential decoded-frame source. `None` signals end of stream (or a
/// decoder giving up mid-stream, which looks the same to the consumer). The
/// backing resource is released on drop.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<Frame>;
}

/// External video-decoding capability: opens the encoded video written at
/// `path` and yields a sequential frame source.
pub trait VideoOpener: Send + Sync {
    fn open(&self, path: &Path) -> Result<Box<dyn FrameSource>, OpenError>;
}

/// In-memory source over pre-built frames.
pub struct VecFrameSource {
    frames: std::vec::IntoIter<Frame>,
}

impl VecFrameSource {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl FrameSource for VecFrameSource {
    fn next_frame(&mut self) -> Option<Frame> {
        self.frames.next()
    }
}

/// Lazily generated uniform-pixel stream. Exercises the sampling loop at any
/// length without real decoding.
pub struct SyntheticFrameSource {
    width: u32,
    height: u32,
    remaining: u64,
    produced: u64,
    fill: u8,
}

impl SyntheticFrameSource {
    pub fn new(frame_count: u64, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            remaining: frame_count,
            produced: 0,
            fill: 128,
        }
    }
}

impl FrameSource for SyntheticFrameSource {
    fn next_frame(&mut self) -> Option<Frame> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.produced += 1;

        let data = vec![self.fill; (self.width * self.height * 4) as usize];
        Some(Frame::new(self.width, self.height, data, self.produced))
    }
}

/// Mock opener with injectable outcomes.
pub struct MockVideoOpener {
    factory: Box<dyn Fn(&Path) -> Result<Box<dyn FrameSource>, OpenError> + Send + Sync>,
}

impl MockVideoOpener {
    /// Every open yields a fresh synthetic stream of `frame_count` frames.
    pub fn synthetic(frame_count: u64, width: u32, height: u32) -> Self {
        Self {
            factory: Box::new(move |_| {
                Ok(Box::new(SyntheticFrameSource::new(frame_count, width, height)))
            }),
        }
    }

    /// Every open fails as an unreadable stream.
    pub fn unreadable() -> Self {
        Self {
            factory: Box::new(|_| Err(OpenError::Unreadable("corrupt container".into()))),
        }
    }

    /// Full control, including inspection of the path handed to the opener.
    pub fn with_factory<F>(factory: F) -> Self
    where
        F: Fn(&Path) -> Result<Box<dyn FrameSource>, OpenError> + Send + Sync + 'static,
    {
        Self {
            factory: Box::new(factory),
        }
    }
}

impl VideoOpener for MockVideoOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn FrameSource>, OpenError> {
        (self.factory)(path)
    }
}
