pub mod analysis;
pub mod emotion;
pub mod face;
pub mod video;
