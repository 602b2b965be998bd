//! Nullable SMS gateway: records messages instead of sending them.

use async_trait::async_trait;
use rxr_messages::{MessageError, MessageReceipt, PhoneNumber, SmsGateway};
use std::sync::Mutex;

pub struct NullSmsGateway {
    sent: Mutex<Vec<(PhoneNumber, String)>>,
    failure: Option<String>,
}

impl NullSmsGateway {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// A gateway that rejects every message with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    /// Every accepted `(to, body)` pair, in send order.
    pub fn sent(&self) -> Vec<(PhoneNumber, String)> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for NullSmsGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsGateway for NullSmsGateway {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<MessageReceipt, MessageError> {
        if let Some(reason) = &self.failure {
            return Err(MessageError::RequestFailed(reason.clone()));
        }
        let mut sent = self.sent.lock().unwrap();
        sent.push((to.clone(), body.to_string()));
        Ok(MessageReceipt {
            id: format!("SM{:032}", sent.len()),
            to: to.clone(),
            status: "queued".to_string(),
        })
    }
}
