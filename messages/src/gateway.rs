//! SMS delivery collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{MessageError, PhoneNumber};

/// What the gateway reported for an accepted message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReceipt {
    /// Gateway-assigned message id.
    pub id: String,
    pub to: PhoneNumber,
    /// Delivery status as reported by the gateway (e.g. `queued`).
    pub status: String,
}

#[async_trait]
pub trait SmsGateway: Send + Sync {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<MessageReceipt, MessageError>;
}

#[async_trait]
impl<G: SmsGateway + ?Sized> SmsGateway for &G {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<MessageReceipt, MessageError> {
        (**self).send(to, body).await
    }
}

#[async_trait]
impl<G: SmsGateway + ?Sized> SmsGateway for std::sync::Arc<G> {
    async fn send(&self, to: &PhoneNumber, body: &str) -> Result<MessageReceipt, MessageError> {
        (**self).send(to, body).await
    }
}
