//! Inbound IPN payloads: the raw body and its decoded fields.

use std::collections::HashMap;

/// Prefix PayPal requires on the verification postback.
pub const VALIDATE_COMMAND: &[u8] = b"cmd=_notify-validate&";

/// The untouched form-encoded request body.
///
/// Verification must echo these exact bytes back to PayPal, so the raw body
/// is kept alongside (not replaced by) the decoded [`NotificationFields`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawNotification(Vec<u8>);

impl RawNotification {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self(body.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Body of the verification postback: `cmd=_notify-validate&` followed by
    /// the original bytes.
    pub fn verification_body(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(VALIDATE_COMMAND.len() + self.0.len());
        body.extend_from_slice(VALIDATE_COMMAND);
        body.extend_from_slice(&self.0);
        body
    }

    /// Decodes the body into fields. Never fails.
    pub fn decode(&self) -> NotificationFields {
        NotificationFields::decode(&self.0)
    }
}

/// Field mapping decoded from a [`RawNotification`].
///
/// Absent fields read as the empty string. Unknown keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationFields {
    fields: HashMap<String, String>,
}

impl NotificationFields {
    /// Best-effort `application/x-www-form-urlencoded` decoding.
    ///
    /// Keys and values are percent-decoded with `+` as space; invalid UTF-8
    /// is replaced lossily. When a key repeats, the first occurrence wins.
    pub fn decode(body: &[u8]) -> Self {
        let mut fields = HashMap::new();
        for (key, value) in form_urlencoded::parse(body) {
            fields
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Self { fields }
    }

    /// Value of `key`, or `None` when the notification did not carry it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Value of `key`, or `""` when absent.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn txn_id(&self) -> &str {
        self.value("txn_id")
    }

    pub fn txn_type(&self) -> &str {
        self.value("txn_type")
    }

    pub fn payment_status(&self) -> &str {
        self.value("payment_status")
    }

    pub fn payer_email(&self) -> &str {
        self.value("payer_email")
    }

    pub fn first_name(&self) -> &str {
        self.value("first_name")
    }

    pub fn last_name(&self) -> &str {
        self.value("last_name")
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
