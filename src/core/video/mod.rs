pub mod frame;
pub mod sampler;
pub mod source;

pub use frame::{Frame, GrayFrame};
pub use sampler::FrameSampler;
pub use source::{FrameSource, MockVideoOpener, OpenError, SyntheticFrameSource, VideoOpener};
