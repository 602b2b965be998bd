//! Booking confirmation messages.
//!
//! A booking form (customer name, phone, vehicle, service) is rendered into a
//! fixed confirmation text and handed to an [`SmsGateway`]. Delivery itself is
//! the gateway's business; this crate only validates the request, renders the
//! body, and reports what the gateway returned.

pub mod error;
pub mod gateway;
pub mod notifier;
pub mod phone;
pub mod template;
pub mod twilio;

pub use error::MessageError;
pub use gateway::{MessageReceipt, SmsGateway};
pub use notifier::BookingNotifier;
pub use phone::PhoneNumber;
pub use template::{render_confirmation, BookingRequest, Signature};
pub use twilio::{TwilioCredentials, TwilioGateway};
