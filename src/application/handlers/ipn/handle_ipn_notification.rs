//! HandleIpnNotificationHandler - Command handler for PayPal IPN deliveries.

use std::sync::Arc;

use http::Method;

use crate::domain::enrollment::EnrollmentRequest;
use crate::domain::foundation::{ResponseDecision, Timestamp};
use crate::domain::ipn::{filter, IpnError, RawNotification, VerificationOutcome};
use crate::ports::{IpnVerifier, MailingList};

use super::enrollment_outcome::EnrollmentOutcome;

/// Command to handle one IPN delivery.
#[derive(Debug, Clone)]
pub struct HandleIpnNotificationCommand {
    /// HTTP method the notification arrived with.
    pub method: Method,
    /// Raw form-encoded body.
    pub payload: Vec<u8>,
}

/// Handler for PayPal IPN deliveries.
///
/// Verifies the notification with PayPal, filters for completed web
/// payments, and enrolls the payer on the mailing list. Every path ends in
/// exactly one [`ResponseDecision`] except a fatal enrollment failure, which
/// is returned as `Err`.
pub struct HandleIpnNotificationHandler {
    verifier: Arc<dyn IpnVerifier>,
    mailing_list: Arc<dyn MailingList>,
    sandbox: bool,
}

impl HandleIpnNotificationHandler {
    pub fn new(verifier: Arc<dyn IpnVerifier>, mailing_list: Arc<dyn MailingList>) -> Self {
        Self {
            verifier,
            mailing_list,
            sandbox: false,
        }
    }

    /// Log a sandbox notice for each notification.
    pub fn with_sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = sandbox;
        self
    }

    pub async fn handle(
        &self,
        cmd: HandleIpnNotificationCommand,
    ) -> Result<ResponseDecision, IpnError> {
        // 1. Only POST carries a notification
        if cmd.method != Method::POST {
            tracing::info!(method = %cmd.method, "Request method not allowed");
            return Ok(ResponseDecision::method_not_allowed());
        }

        tracing::info!("PayPal IPN notification received");
        if self.sandbox {
            tracing::info!("SANDBOX: using PayPal sandbox environment");
        }

        // 2. Decode, keeping the raw bytes for the postback
        let raw = RawNotification::new(cmd.payload);
        let fields = raw.decode();

        // 3. Verify with PayPal; anything but VERIFIED stops here
        match self.verifier.verify(&raw).await {
            Ok(VerificationOutcome::Verified) => {
                tracing::info!(txn_id = fields.txn_id(), "IPN verified");
            }
            Ok(VerificationOutcome::Invalid) => {
                tracing::warn!(txn_id = fields.txn_id(), "IPN invalid");
                return Ok(ResponseDecision::internal_error());
            }
            Ok(VerificationOutcome::Unexpected(body)) => {
                tracing::warn!(
                    txn_id = fields.txn_id(),
                    response = %body,
                    "Unexpected IPN verification response"
                );
                return Ok(ResponseDecision::internal_error());
            }
            Err(e) => {
                tracing::warn!(txn_id = fields.txn_id(), error = %e, "IPN verification failed");
                return Ok(ResponseDecision::internal_error());
            }
        }

        // 4. Completed web payments only
        if let Err(rejection) = filter::check(&fields) {
            tracing::info!(
                txn_id = fields.txn_id(),
                payment_status = fields.payment_status(),
                txn_type = fields.txn_type(),
                reason = %rejection,
                "IPN ignored"
            );
            return Ok(ResponseDecision::internal_error());
        }

        // 5. Enroll the payer
        let request = EnrollmentRequest::from_notification(&fields, Timestamp::now());
        tracing::info!(
            payer_email = %request.email_address,
            joined_at = %request.joined_at,
            expires_at = %request.expires_at,
            "Enrolling payer on mailing list"
        );

        let result = self.mailing_list.add_pending_member(&request).await;

        // 6. Classify
        EnrollmentOutcome::classify(result, &request.email_address).into_decision()
    }
}
