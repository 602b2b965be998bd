//! Booking confirmation sender.

use crate::{render_confirmation, BookingRequest, MessageError, MessageReceipt, Signature, SmsGateway};

pub struct BookingNotifier<G> {
    gateway: G,
    signature: Signature,
}

impl<G: SmsGateway> BookingNotifier<G> {
    pub fn new(gateway: G, signature: Signature) -> Self {
        Self { gateway, signature }
    }

    /// Body that [`Self::confirm`] would send.
    pub fn preview(&self, request: &BookingRequest) -> String {
        render_confirmation(request, &self.signature)
    }

    /// Render and send the confirmation for `request`.
    pub async fn confirm(&self, request: &BookingRequest) -> Result<MessageReceipt, MessageError> {
        let body = self.preview(request);
        match self.gateway.send(&request.phone, &body).await {
            Ok(receipt) => {
                tracing::info!(
                    to = %receipt.to,
                    id = %receipt.id,
                    status = %receipt.status,
                    customer = %request.customer_name,
                    "booking confirmation sent"
                );
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(to = %request.phone, error = %e, "booking confirmation failed");
                Err(e)
            }
        }
    }
}
