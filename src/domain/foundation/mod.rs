//! Foundation module - Shared domain primitives.

mod response;
mod timestamp;

pub use response::ResponseDecision;
pub use timestamp::Timestamp;
