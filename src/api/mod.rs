pub mod engagement;
pub mod models;

pub use engagement::EngagementService;
pub use models::{into_reply, liveness, Reply};
