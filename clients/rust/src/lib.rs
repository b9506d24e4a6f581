mod base;
mod call_booking;
mod contact;
mod status;
mod webinar;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use call_booking::CallBookingClient;
pub use call_booking::BookCallInput;
use contact::ContactClient;
pub use contact::SubmitContactFormInput;
pub use leadflow_api_structs::dtos::*;
use status::StatusClient;
use std::sync::Arc;
use webinar::WebinarClient;
pub use webinar::RegisterForWebinarInput;

/// Leadflow SDK
///
/// The SDK contains methods for calling the webhooks of the leadflow server.
#[derive(Clone)]
pub struct LeadflowSDK {
    pub call_booking: CallBookingClient,
    pub contact: ContactClient,
    pub status: StatusClient,
    pub webinar: WebinarClient,
}

impl LeadflowSDK {
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));

        Self {
            call_booking: CallBookingClient::new(base.clone()),
            contact: ContactClient::new(base.clone()),
            status: StatusClient::new(base.clone()),
            webinar: WebinarClient::new(base),
        }
    }
}
