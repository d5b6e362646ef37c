//! Mock mailing list for testing.
//!
//! Behaves like the Mailchimp members endpoint by default: a new address is
//! added as pending, and adding it again fails with "Member Exists". Supports
//! error injection, fixed responses and call tracking.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::enrollment::EnrollmentRequest;
use crate::ports::{MailingList, MailingListError, MemberRecord};

/// Mock mailing list for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockMailingList::new();
/// mock.set_error(MailingListError::network("refused"));
/// let result = mock.add_pending_member(&request).await;
/// assert_eq!(mock.requests().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockMailingList {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Addresses already on the list.
    members: HashSet<String>,

    /// Fixed record to return instead of the default behaviour.
    next_record: Option<MemberRecord>,

    /// Error to return instead of the default behaviour.
    next_error: Option<MailingListError>,

    /// Requests received, in call order.
    requests: Vec<EnrollmentRequest>,
}

impl MockMailingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an address as already present.
    pub fn with_member(self, email: impl Into<String>) -> Self {
        self.inner.lock().unwrap().members.insert(email.into());
        self
    }

    /// Return this record on every call.
    pub fn set_record(&self, record: MemberRecord) {
        self.inner.lock().unwrap().next_record = Some(record);
    }

    /// Fail every call with this error.
    pub fn set_error(&self, error: MailingListError) {
        self.inner.lock().unwrap().next_error = Some(error);
    }

    pub fn requests(&self) -> Vec<EnrollmentRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.inner.lock().unwrap().members.contains(email)
    }
}

#[async_trait]
impl MailingList for MockMailingList {
    async fn add_pending_member(
        &self,
        request: &EnrollmentRequest,
    ) -> Result<MemberRecord, MailingListError> {
        let mut state = self.inner.lock().unwrap();
        state.requests.push(request.clone());

        if let Some(error) = &state.next_error {
            return Err(error.clone());
        }
        if let Some(record) = &state.next_record {
            return Ok(record.clone());
        }

        if !state.members.insert(request.email_address.clone()) {
            return Err(MailingListError::api(
                Some(400),
                format!(
                    "{} is already a list member. Use PUT to insert or update list members.",
                    request.email_address
                ),
            )
            .with_title("Member Exists"));
        }

        Ok(MemberRecord {
            status_code: 200,
            id: None,
            email_address: request.email_address.clone(),
            status: request.status(),
            raw_body: None,
        })
    }
}
