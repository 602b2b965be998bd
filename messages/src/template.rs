//! Booking confirmation template.

use rxr_types::ServiceType;
use serde::{Deserialize, Serialize};

use crate::{MessageError, PhoneNumber};

/// A validated booking form submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingRequest {
    pub customer_name: String,
    pub phone: PhoneNumber,
    pub vehicle: String,
    pub service: ServiceType,
}

impl BookingRequest {
    pub fn new(
        customer_name: &str,
        phone: &str,
        vehicle: &str,
        service: ServiceType,
    ) -> Result<Self, MessageError> {
        let customer_name = customer_name.trim();
        if customer_name.is_empty() {
            return Err(MessageError::MissingField("customer name"));
        }
        let vehicle = vehicle.trim();
        if vehicle.is_empty() {
            return Err(MessageError::MissingField("vehicle"));
        }
        Ok(Self {
            customer_name: customer_name.to_string(),
            phone: PhoneNumber::parse(phone)?,
            vehicle: vehicle.to_string(),
            service,
        })
    }
}

/// Sign-off printed at the bottom of every confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_owner() -> String {
    "Ram Mejia".to_string()
}

fn default_title() -> String {
    "Owner | RxR Mobile Detailing, LLC".to_string()
}

impl Default for Signature {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            title: default_title(),
        }
    }
}

pub fn render_confirmation(request: &BookingRequest, signature: &Signature) -> String {
    format!(
        "Hey {name},\n\
         \n\
         Thanks for booking with RxR - Rinse and Repeat!\n\
         We've received your request and are getting ready to work our detailing magic.\n\
         \n\
         Booking Summary:\n\
         - Vehicle: {vehicle}\n\
         - Service: {service}\n\
         \n\
         We'll send a confirmation and ETA shortly. If you have questions or need to reschedule, just reply to this message.\n\
         \n\
         Until then, keep it clean,\n\
         \n\
         {owner}\n\
         {title}\n",
        name = request.customer_name,
        vehicle = request.vehicle,
        service = request.service.label(),
        owner = signature.owner,
        title = signature.title,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> BookingRequest {
        BookingRequest::new(
            "Dana",
            "+15551234567",
            "Toyota Tacoma",
            ServiceType::InteriorExterior,
        )
        .unwrap()
    }

    #[test]
    fn body_contains_booking_details() {
        let body = render_confirmation(&request(), &Signature::default());
        assert!(body.starts_with("Hey Dana,\n\n"));
        assert!(body.contains("- Vehicle: Toyota Tacoma\n"));
        assert!(body.contains("- Service: Interior + Exterior\n"));
        assert!(body.ends_with("Ram Mejia\nOwner | RxR Mobile Detailing, LLC\n"));
    }

    #[test]
    fn custom_signature() {
        let signature = Signature {
            owner: "Alex".into(),
            title: "Dispatch".into(),
        };
        let body = render_confirmation(&request(), &signature);
        assert!(body.ends_with("Alex\nDispatch\n"));
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(matches!(
            BookingRequest::new("  ", "+15551234567", "Civic", ServiceType::Ceramic),
            Err(MessageError::MissingField("customer name"))
        ));
        assert!(matches!(
            BookingRequest::new("Dana", "+15551234567", "", ServiceType::Ceramic),
            Err(MessageError::MissingField("vehicle"))
        ));
        assert!(matches!(
            BookingRequest::new("Dana", "555", "Civic", ServiceType::Ceramic),
            Err(MessageError::InvalidPhone(_))
        ));
    }
}
