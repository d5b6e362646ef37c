//! Mailchimp mailing list adapter.
//!
//! Implements the `MailingList` trait against the Mailchimp Marketing API v3.
//!
//! # Authentication
//!
//! HTTP basic auth with any username and the API key as password. The key's
//! suffix after the last `-` names the datacenter that serves the account.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use crate::config::{MailchimpConfig, ValidationError};
use crate::domain::enrollment::EnrollmentRequest;
use crate::ports::{MailingList, MailingListError, MemberRecord};

use super::api_types::{AddMemberBody, MailchimpMember, ProblemDetail};

const API_VERSION_PATH: &str = "3.0";

/// Username sent with basic auth; Mailchimp ignores it.
const BASIC_AUTH_USER: &str = "anystring";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Mailchimp API configuration.
#[derive(Clone)]
pub struct MailchimpClientConfig {
    /// API key (`<hex>-<dc>`).
    api_key: SecretString,

    /// Audience (list) the payers are added to.
    list_id: String,

    /// Base URL without the version segment, e.g. `https://us6.api.mailchimp.com`.
    api_base_url: String,

    timeout: Duration,
}

impl MailchimpClientConfig {
    pub fn new(
        api_key: impl Into<String>,
        list_id: impl Into<String>,
        api_base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            list_id: list_id.into(),
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build from application configuration, deriving the base URL from the
    /// API key's datacenter unless overridden.
    pub fn from_config(config: &MailchimpConfig) -> Result<Self, ValidationError> {
        let api_base_url = config
            .api_base_url()
            .ok_or(ValidationError::MissingDatacenter)?;

        Ok(Self::new(config.api_key.clone(), config.list_id.clone(), api_base_url)
            .with_timeout(Duration::from_secs(config.timeout_secs)))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `{base}/3.0/lists/{list_id}/members`
    pub fn members_url(&self) -> String {
        format!(
            "{}/{}/lists/{}/members",
            self.api_base_url, API_VERSION_PATH, self.list_id
        )
    }
}

/// Mailchimp mailing list adapter.
pub struct MailchimpAdapter {
    config: MailchimpClientConfig,
    http_client: reqwest::Client,
}

impl MailchimpAdapter {
    /// Create a new Mailchimp adapter with the given configuration.
    pub fn new(config: MailchimpClientConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl MailingList for MailchimpAdapter {
    async fn add_pending_member(
        &self,
        request: &EnrollmentRequest,
    ) -> Result<MemberRecord, MailingListError> {
        let body = AddMemberBody::from(request);

        let response = self
            .http_client
            .post(self.config.members_url())
            .basic_auth(BASIC_AUTH_USER, Some(self.config.api_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| MailingListError::network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| MailingListError::invalid_response(Some(status), e.to_string()))?;

        if (200..300).contains(&status) {
            return match serde_json::from_str::<MailchimpMember>(&text) {
                Ok(member) => Ok(member.into_record(status)),
                Err(e) => {
                    tracing::warn!(status = status, error = %e, "Mailchimp member response unreadable");
                    Ok(MemberRecord::unreadable(status, text))
                }
            };
        }

        match serde_json::from_str::<ProblemDetail>(&text) {
            Ok(problem) => {
                let error = problem.into_error(status);
                tracing::warn!(
                    status = status,
                    title = error.title.as_deref().unwrap_or_default(),
                    detail = %error.message,
                    errors = ?error.errors,
                    "Mailchimp rejected member"
                );
                Err(error)
            }
            Err(_) => {
                tracing::warn!(status = status, body = %text, "Mailchimp returned unparseable error");
                Err(MailingListError::invalid_response(Some(status), text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::enrollment::MemberStatus;
    use crate::domain::foundation::Timestamp;
    use crate::domain::ipn::NotificationFields;
    use crate::adapters::paypal::MockIpnVerifier;
    use crate::application::handlers::ipn::{
        HandleIpnNotificationCommand, HandleIpnNotificationHandler,
    };
    use crate::domain::foundation::ResponseDecision;
    use crate::ports::MailingListErrorCode;
    use std::sync::Arc;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LIST_ID: &str = "a1b2c3d4e5";
    const MEMBERS_PATH: &str = "/3.0/lists/a1b2c3d4e5/members";

    fn adapter_for(server: &MockServer) -> MailchimpAdapter {
        let config = MailchimpClientConfig::new("0123456789abcdef-us6", LIST_ID, server.uri())
            .with_timeout(Duration::from_secs(2));
        MailchimpAdapter::new(config).unwrap()
    }

    fn request() -> EnrollmentRequest {
        let fields = NotificationFields::decode(
            b"payer_email=ada%40example.com&first_name=Ada&last_name=Lovelace",
        );
        EnrollmentRequest::from_notification(&fields, Timestamp::now())
    }

    fn member_json(status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": "852aaa9532cb36adfb5e9fef7a4206a9",
            "email_address": "ada@example.com",
            "status": status,
            "list_id": LIST_ID
        })
    }

    #[test]
    fn members_url_includes_version_and_list() {
        let config = MailchimpClientConfig::new("key-us6", LIST_ID, "https://us6.api.mailchimp.com/");
        assert_eq!(
            config.members_url(),
            "https://us6.api.mailchimp.com/3.0/lists/a1b2c3d4e5/members"
        );
    }

    #[test]
    fn from_config_derives_datacenter_host() {
        let config = MailchimpConfig {
            api_key: "0123456789abcdef-us21".to_string(),
            list_id: LIST_ID.to_string(),
            base_url: None,
            timeout_secs: 10,
        };

        let client = MailchimpClientConfig::from_config(&config).unwrap();

        assert_eq!(
            client.members_url(),
            "https://us21.api.mailchimp.com/3.0/lists/a1b2c3d4e5/members"
        );
    }

    #[test]
    fn from_config_without_datacenter_fails() {
        let config = MailchimpConfig {
            api_key: "nodatacenter".to_string(),
            list_id: LIST_ID.to_string(),
            base_url: None,
            timeout_secs: 10,
        };

        assert!(matches!(
            MailchimpClientConfig::from_config(&config),
            Err(ValidationError::MissingDatacenter)
        ));
    }

    #[tokio::test]
    async fn posts_pending_member_with_merge_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MEMBERS_PATH))
            .and(header_exists("authorization"))
            .respond_with(ResponseTemplate::new(200).set_body_json(member_json("pending")))
            .expect(1)
            .mount(&server)
            .await;

        let request = request();
        let record = adapter_for(&server)
            .add_pending_member(&request)
            .await
            .unwrap();

        assert_eq!(record.status_code, 200);
        assert_eq!(record.status, MemberStatus::Pending);
        assert!(record.is_enrolled());

        let received = server.received_requests().await.unwrap();
        let sent: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        assert_eq!(sent["email_address"], "ada@example.com");
        assert_eq!(sent["status"], "pending");
        assert_eq!(sent["merge_fields"]["FNAME"], "Ada");
        assert_eq!(sent["merge_fields"]["LNAME"], "Lovelace");
        assert_eq!(sent["merge_fields"]["JOINED"], request.joined_at.to_iso8601());
        assert_eq!(sent["merge_fields"]["EXPIRES"], request.expires_at.to_iso8601());
    }

    #[tokio::test]
    async fn member_exists_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MEMBERS_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "type": "https://mailchimp.com/developer/marketing/docs/errors/",
                "title": "Member Exists",
                "status": 400,
                "detail": "ada@example.com is already a list member. Use PUT to insert or update list members.",
                "instance": "b1e2c3d4-0000-0000-0000-000000000000"
            })))
            .mount(&server)
            .await;

        let err = adapter_for(&server)
            .add_pending_member(&request())
            .await
            .unwrap_err();

        assert_eq!(err.code, MailingListErrorCode::ApiError);
        assert_eq!(err.status_code, Some(400));
        assert!(err.message.contains("ada@example.com"));
    }

    #[tokio::test]
    async fn unparseable_error_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MEMBERS_PATH))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
            .mount(&server)
            .await;

        let err = adapter_for(&server)
            .add_pending_member(&request())
            .await
            .unwrap_err();

        assert_eq!(err.code, MailingListErrorCode::InvalidResponse);
        assert_eq!(err.status_code, Some(502));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let config = MailchimpClientConfig::new("key-us6", LIST_ID, "http://127.0.0.1:9")
            .with_timeout(Duration::from_millis(500));
        let adapter = MailchimpAdapter::new(config).unwrap();

        let err = adapter.add_pending_member(&request()).await.unwrap_err();

        assert_eq!(err.code, MailingListErrorCode::NetworkError);
        assert_eq!(err.status_code, None);
    }

    async fn handle_completed_payment(
        adapter: MailchimpAdapter,
    ) -> Result<ResponseDecision, crate::domain::ipn::IpnError> {
        let handler = HandleIpnNotificationHandler::new(
            Arc::new(MockIpnVerifier::verified()),
            Arc::new(adapter),
        );
        handler
            .handle(HandleIpnNotificationCommand {
                method: http::Method::POST,
                payload: b"payment_status=Completed&txn_type=web_accept\
                    &payer_email=ada%40example.com&first_name=Ada&last_name=Lovelace"
                    .to_vec(),
            })
            .await
    }

    #[tokio::test]
    async fn success_without_member_status_is_handled_500() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MEMBERS_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "email_address": "ada@example.com" })),
            )
            .mount(&server)
            .await;

        let record = adapter_for(&server)
            .add_pending_member(&request())
            .await
            .unwrap();
        assert_eq!(record.status, MemberStatus::Unknown);

        let result = handle_completed_payment(adapter_for(&server)).await;
        assert_eq!(result, Ok(ResponseDecision::internal_error()));
    }

    #[tokio::test]
    async fn unreadable_success_body_is_handled_500() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MEMBERS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let record = adapter_for(&server)
            .add_pending_member(&request())
            .await
            .unwrap();
        assert_eq!(record.raw_body.as_deref(), Some("<html>ok</html>"));
        assert!(!record.is_enrolled());

        let result = handle_completed_payment(adapter_for(&server)).await;
        assert_eq!(result, Ok(ResponseDecision::internal_error()));
    }
}
