mod advisor;
mod call_booking;
mod contact;
mod email;
mod registrant;
mod reminder;
pub mod scheduling;
mod shared;
mod webinar_date;

pub use advisor::{default_roster, Advisor};
pub use call_booking::{
    CallBookingLogEntry, Prospect, ScreeningAnswers, ScreeningOutcome, NOT_FEDERAL_MESSAGE,
    WEBINAR_REDIRECT_MESSAGE, WEBINAR_REDIRECT_PATH,
};
pub use contact::{ContactSubmission, CONTACT_FORM_SOURCE};
pub use email::{EmailContent, TemplateContext};
pub use registrant::{
    greeting_name, NewRegistrant, Registrant, RowId, WEBINAR_REGISTRATION_SOURCE,
};
pub use reminder::{ReminderTier, SentReminders};
pub use scheduling::RoundRobinState;
pub use shared::access_token::AccessToken;
pub use webinar_date::{InvalidWebinarDateError, WebinarDate};

pub use chrono_tz::Tz;
