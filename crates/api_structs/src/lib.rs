mod call_booking;
mod contact;
mod shared;
mod status;
mod webinar;

pub mod dtos {
    pub use crate::call_booking::dtos::*;
    pub use crate::shared::dtos::*;
}

pub use crate::call_booking::api::*;
pub use crate::contact::api::*;
pub use crate::status::api::*;
pub use crate::webinar::api::*;
