//! Mailing-list member states.

use serde::{Deserialize, Serialize};

/// State of a member on the mailing list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Awaiting double opt-in confirmation.
    Pending,
    Subscribed,
    Unsubscribed,
    Cleaned,
    Transactional,
    Archived,
    /// Status string this crate does not know.
    #[default]
    #[serde(other)]
    Unknown,
}

impl MemberStatus {
    /// Whether a member in this state counts as enrolled.
    pub fn is_enrolled(&self) -> bool {
        matches!(self, MemberStatus::Pending | MemberStatus::Subscribed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Pending => "pending",
            MemberStatus::Subscribed => "subscribed",
            MemberStatus::Unsubscribed => "unsubscribed",
            MemberStatus::Cleaned => "cleaned",
            MemberStatus::Transactional => "transactional",
            MemberStatus::Archived => "archived",
            MemberStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
