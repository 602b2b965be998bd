//! Twilio REST gateway.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::{MessageError, MessageReceipt, PhoneNumber, SmsGateway};

/// Default timeout for message requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub const DEFAULT_API_BASE: &str = "https://api.twilio.com";

/// Account credentials and sender number.
#[derive(Clone, Debug)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub auth_token: String,
    pub from: PhoneNumber,
}

/// Sends messages with `POST /2010-04-01/Accounts/{sid}/Messages.json`.
pub struct TwilioGateway {
    /// HTTP client (reusable connection pool).
    http_client: reqwest::Client,
    api_base: String,
    credentials: TwilioCredentials,
}

/// Fields we use from a created message resource.
#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
    #[serde(default)]
    status: Option<String>,
}

/// Error body returned on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<u64>,
    message: String,
}

impl TwilioGateway {
    pub fn new(credentials: TwilioCredentials) -> Self {
        Self::with_api_base(credentials, DEFAULT_API_BASE)
    }

    /// Point the gateway at a different API host (test doubles, regional edges).
    pub fn with_api_base(credentials: TwilioCredentials, api_base: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http_client,
            api_base: api_base.into(),
            credentials,
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_base.trim_end_matches('/'),
            self.credentials.account_sid
        )
    }
}

#[async_trait]
impl SmsGateway for TwilioGateway {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<MessageReceipt, MessageError> {
        let response = self
            .http_client
            .post(self.messages_url())
            .basic_auth(
                &self.credentials.account_sid,
                Some(&self.credentials.auth_token),
            )
            .form(&[
                ("To", to.as_str()),
                ("From", self.credentials.from.as_str()),
                ("Body", body),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MessageError::Unreachable(format!("request timed out: {e}"))
                } else if e.is_connect() {
                    MessageError::Unreachable(format!("connection failed: {e}"))
                } else {
                    MessageError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.json::<ErrorBody>().await {
                Ok(ErrorBody {
                    code: Some(code),
                    message,
                }) => format!("HTTP status {status}, code {code}: {message}"),
                Ok(ErrorBody { message, .. }) => format!("HTTP status {status}: {message}"),
                Err(_) => format!("HTTP status {status}"),
            };
            return Err(MessageError::RequestFailed(detail));
        }

        let resource: MessageResource = response.json().await.map_err(|e| {
            MessageError::InvalidResponse(format!("failed to parse message resource: {e}"))
        })?;

        Ok(MessageReceipt {
            id: resource.sid,
            to: to.clone(),
            status: resource.status.unwrap_or_else(|| "queued".to_string()),
        })
    }
}
