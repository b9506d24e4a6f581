use super::IContactRepo;
use crate::repos::shared::sheet_table::SheetTable;
use crate::services::google_sheets::{schema::CONTACT_SCHEMA, GoogleSheetsRestApi};
use leadflow_domain::{ContactSubmission, RowId};

pub struct SheetsContactRepo {
    table: SheetTable,
}

impl SheetsContactRepo {
    pub fn new(api: GoogleSheetsRestApi) -> Self {
        Self {
            table: SheetTable::new(api, CONTACT_SCHEMA),
        }
    }
}

#[async_trait::async_trait]
impl IContactRepo for SheetsContactRepo {
    async fn insert(&self, submission: &ContactSubmission) -> anyhow::Result<RowId> {
        self.table
            .append(&[
                ("First Name", submission.first_name.as_str()),
                ("Last Name", submission.last_name.as_str()),
                ("Email", submission.email.as_str()),
                ("Phone", submission.phone.as_str()),
                ("Message", submission.message.as_str()),
                ("Submitted At", submission.submitted_at.as_str()),
                ("Source", submission.source.as_str()),
            ])
            .await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ContactSubmission>> {
        let (columns, rows) = self.table.rows().await?;
        Ok(rows
            .iter()
            .map(|(_, values)| ContactSubmission {
                first_name: columns.get(values, "First Name"),
                last_name: columns.get(values, "Last Name"),
                email: columns.get(values, "Email"),
                phone: columns.get(values, "Phone"),
                message: columns.get(values, "Message"),
                submitted_at: columns.get(values, "Submitted At"),
                source: columns.get(values, "Source"),
            })
            .collect())
    }
}
