use super::ICallBookingRepo;
use crate::repos::shared::sheet_table::SheetTable;
use crate::services::google_sheets::{
    schema::{ColumnMap, CALL_BOOKING_SCHEMA},
    GoogleSheetsRestApi,
};
use leadflow_domain::{CallBookingLogEntry, Prospect, ScreeningAnswers};

const NOT_ASSIGNED: &str = "N/A";

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn to_entry(columns: &ColumnMap, values: &[String]) -> CallBookingLogEntry {
    CallBookingLogEntry {
        timestamp: columns.get(values, "Timestamp"),
        prospect: Prospect {
            name: columns.get(values, "Name"),
            email: columns.get(values, "Email"),
            phone: columns.get(values, "Phone"),
            topic: columns.get(values, "Topic"),
            screening: ScreeningAnswers {
                is_federal_employee: columns.get(values, "Is Federal"),
                wants_advisor: columns.get(values, "Wants Advisor"),
                single_question: columns.get(values, "Single Question"),
            },
        },
        assigned_to: columns
            .get_opt(values, "Assigned To")
            .filter(|advisor| advisor != NOT_ASSIGNED),
        qualified: columns.get(values, "Qualified").eq_ignore_ascii_case("yes"),
    }
}

/// Call booking log kept in its own tab of the contact spreadsheet
pub struct SheetsCallBookingRepo {
    table: SheetTable,
}

impl SheetsCallBookingRepo {
    pub fn new(api: GoogleSheetsRestApi) -> Self {
        Self {
            table: SheetTable::new(api, CALL_BOOKING_SCHEMA),
        }
    }
}

#[async_trait::async_trait]
impl ICallBookingRepo for SheetsCallBookingRepo {
    async fn insert(&self, entry: &CallBookingLogEntry) -> anyhow::Result<()> {
        let prospect = &entry.prospect;
        self.table
            .append(&[
                ("Timestamp", entry.timestamp.as_str()),
                ("Name", prospect.name.as_str()),
                ("Email", prospect.email.as_str()),
                ("Phone", prospect.phone.as_str()),
                ("Topic", prospect.topic.as_str()),
                (
                    "Assigned To",
                    entry.assigned_to.as_deref().unwrap_or(NOT_ASSIGNED),
                ),
                ("Qualified", yes_no(entry.qualified)),
                ("Is Federal", prospect.screening.is_federal_employee.as_str()),
                ("Wants Advisor", prospect.screening.wants_advisor.as_str()),
                ("Single Question", prospect.screening.single_question.as_str()),
            ])
            .await?;
        Ok(())
    }

    async fn find_all(&self) -> anyhow::Result<Vec<CallBookingLogEntry>> {
        let (columns, rows) = self.table.rows().await?;
        Ok(rows
            .iter()
            .map(|(_, values)| to_entry(&columns, values))
            .collect())
    }
}
