//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `IpnVerifier` - Authenticity round-trip with the payment provider
//! - `MailingList` - Enrollment of payers as list members

mod ipn_verifier;
mod mailing_list;

pub use ipn_verifier::{IpnVerifier, VerificationError, VerificationErrorCode};
pub use mailing_list::{
    FieldError, MailingList, MailingListError, MailingListErrorCode, MemberRecord,
};
