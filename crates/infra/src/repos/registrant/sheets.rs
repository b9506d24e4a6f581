use super::IRegistrantRepo;
use crate::repos::shared::sheet_table::SheetTable;
use crate::services::google_sheets::{
    schema::{ColumnMap, REGISTRANT_SCHEMA},
    GoogleSheetsRestApi,
};
use leadflow_domain::{NewRegistrant, Registrant, ReminderTier, RowId, SentReminders};

/// Column holding the sent timestamp of `tier`
fn sent_column(tier: ReminderTier) -> &'static str {
    match tier {
        ReminderTier::Confirmation => "Email_Confirmation_Sent",
        ReminderTier::SevenDay => "Email_7Day_Sent",
        ReminderTier::ThreeDay => "Email_3Day_Sent",
        ReminderTier::OneDay => "Email_1Day_Sent",
        ReminderTier::DayOf => "Email_DayOf_Sent",
    }
}

fn to_registrant(columns: &ColumnMap, row: RowId, values: &[String]) -> Registrant {
    let sent = |tier| columns.get_opt(values, sent_column(tier));
    Registrant {
        row,
        first_name: columns.get(values, "First Name"),
        last_name: columns.get(values, "Last Name"),
        email: columns.get(values, "Email"),
        agency: columns.get(values, "Agency"),
        submitted_at: columns.get(values, "Submitted At"),
        source: columns.get(values, "Source"),
        webinar_id: columns.get(values, "Webinar_ID"),
        webinar_date: columns.get(values, "Webinar_Date"),
        sent: SentReminders {
            confirmation: sent(ReminderTier::Confirmation),
            seven_day: sent(ReminderTier::SevenDay),
            three_day: sent(ReminderTier::ThreeDay),
            one_day: sent(ReminderTier::OneDay),
            day_of: sent(ReminderTier::DayOf),
        },
    }
}

pub struct SheetsRegistrantRepo {
    table: SheetTable,
}

impl SheetsRegistrantRepo {
    pub fn new(api: GoogleSheetsRestApi) -> Self {
        Self {
            table: SheetTable::new(api, REGISTRANT_SCHEMA),
        }
    }
}

#[async_trait::async_trait]
impl IRegistrantRepo for SheetsRegistrantRepo {
    async fn insert(&self, registrant: &NewRegistrant) -> anyhow::Result<RowId> {
        self.table
            .append(&[
                ("First Name", registrant.first_name.as_str()),
                ("Last Name", registrant.last_name.as_str()),
                ("Email", registrant.email.as_str()),
                ("Agency", registrant.agency.as_str()),
                ("Submitted At", registrant.submitted_at.as_str()),
                ("Source", registrant.source.as_str()),
                ("Webinar_ID", registrant.webinar_id.as_str()),
                ("Webinar_Date", registrant.webinar_date.as_str()),
            ])
            .await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Registrant>> {
        let (columns, rows) = self.table.rows().await?;
        Ok(rows
            .iter()
            .map(|(row, values)| to_registrant(&columns, *row, values))
            .collect())
    }

    async fn mark_sent(
        &self,
        row: RowId,
        tier: ReminderTier,
        timestamp: &str,
    ) -> anyhow::Result<()> {
        self.table.write_cell(sent_column(tier), row, timestamp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn maps_rows_by_header() {
        let header = REGISTRANT_SCHEMA.header_row();
        let columns = ColumnMap::resolve(&REGISTRANT_SCHEMA, &header);
        let values = cells(&[
            "Ada",
            "Lovelace",
            "a@x.com",
            "NASA",
            "2025-12-20T10:00:00Z",
            "webinar_registration",
            "dec-30-2025",
            "2025-12-30T11:00:00-05:00",
            "2025-12-20T10:00:05Z",
            "",
            " ",
        ]);

        let registrant = to_registrant(&columns, RowId(7), &values);
        assert_eq!(registrant.row, RowId(7));
        assert_eq!(registrant.email, "a@x.com");
        assert_eq!(registrant.webinar_id, "dec-30-2025");
        assert!(registrant.sent.is_sent(ReminderTier::Confirmation));
        assert!(!registrant.sent.is_sent(ReminderTier::SevenDay));
        assert!(!registrant.sent.is_sent(ReminderTier::ThreeDay));
        // Trailing cells are left out by the api
        assert!(!registrant.sent.is_sent(ReminderTier::DayOf));
    }

    #[test]
    fn maps_reordered_sheets() {
        let header = cells(&["Email", "Webinar_Date", "Email_1Day_Sent"]);
        let columns = ColumnMap::resolve(&REGISTRANT_SCHEMA, &header);
        let values = cells(&["b@x.com", "2025-12-30", "2025-12-29T14:05:00Z"]);

        let registrant = to_registrant(&columns, RowId(2), &values);
        assert_eq!(registrant.email, "b@x.com");
        assert_eq!(registrant.webinar_date, "2025-12-30");
        assert!(registrant.sent.is_sent(ReminderTier::OneDay));
    }
}
