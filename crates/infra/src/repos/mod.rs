mod call_booking;
mod contact;
mod registrant;
mod round_robin;
mod shared;

use crate::config::Config;
use crate::services::google_sheets::{GoogleAuthProvider, GoogleSheetsRestApi};
use crate::system::ISys;
pub use call_booking::{ICallBookingRepo, InMemoryCallBookingRepo, SheetsCallBookingRepo};
pub use contact::{IContactRepo, InMemoryContactRepo, SheetsContactRepo};
pub use registrant::{IRegistrantRepo, InMemoryRegistrantRepo, SheetsRegistrantRepo};
pub use round_robin::{FileRoundRobinRepo, IRoundRobinRepo, InMemoryRoundRobinRepo};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub registrants: Arc<dyn IRegistrantRepo>,
    pub contacts: Arc<dyn IContactRepo>,
    pub call_bookings: Arc<dyn ICallBookingRepo>,
    pub round_robin: Arc<dyn IRoundRobinRepo>,
}

impl Repos {
    /// Spreadsheet backed stores. Returns `None` when no Google credentials
    /// are configured.
    pub fn create_sheets(config: &Config, sys: Arc<dyn ISys>) -> Option<Self> {
        let google = config.google.as_ref()?;
        let auth = Arc::new(GoogleAuthProvider::new(google, sys));
        let sheet = |id: &str| GoogleSheetsRestApi::new(auth.clone(), id.to_string());

        info!(
            "Using Google Sheets stores. Registrants: {}, contacts: {}",
            google.registrant_sheet_id, google.contact_sheet_id
        );
        Some(Self {
            registrants: Arc::new(SheetsRegistrantRepo::new(sheet(&google.registrant_sheet_id))),
            contacts: Arc::new(SheetsContactRepo::new(sheet(&google.contact_sheet_id))),
            call_bookings: Arc::new(SheetsCallBookingRepo::new(sheet(&google.contact_sheet_id))),
            round_robin: Arc::new(FileRoundRobinRepo::new(
                config.assignment_state_path.clone(),
            )),
        })
    }

    pub fn create_inmemory() -> Self {
        Self {
            registrants: Arc::new(InMemoryRegistrantRepo::new()),
            contacts: Arc::new(InMemoryContactRepo::new()),
            call_bookings: Arc::new(InMemoryCallBookingRepo::new()),
            round_robin: Arc::new(InMemoryRoundRobinRepo::new()),
        }
    }
}
