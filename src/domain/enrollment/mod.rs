//! Enrollment domain module.
//!
//! What a verified payment turns into on the mailing list.

mod member_status;
mod request;

pub use member_status::MemberStatus;
pub use request::{EnrollmentRequest, MEMBERSHIP_TERM_YEARS};
