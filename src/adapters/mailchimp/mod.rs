//! Mailchimp mailing list adapter.
//!
//! Implements the `MailingList` port by adding each verified payer to an
//! audience as a `pending` member with FNAME, LNAME, JOINED and EXPIRES merge
//! fields.
//!
//! # Configuration
//!
//! Required environment variables:
//! - `PAYPAL_IPN__MAILCHIMP__API_KEY`: API key, including its datacenter suffix
//! - `PAYPAL_IPN__MAILCHIMP__LIST_ID`: audience ID

mod api_types;
mod mailchimp_adapter;
mod mock_mailing_list;

pub use api_types::{AddMemberBody, MailchimpMember, MergeFields, ProblemDetail, ProblemFieldError};
pub use mailchimp_adapter::{MailchimpAdapter, MailchimpClientConfig};
pub use mock_mailing_list::MockMailingList;
