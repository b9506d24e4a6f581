use crate::services::google_sheets::{
    schema::{parse_updated_row, ColumnMap, SheetSchema},
    GoogleSheetsRestApi,
};
use leadflow_domain::RowId;
use tokio::sync::Mutex;
use tracing::info;

/// A tab of a spreadsheet used as an append-only table described by a
/// `SheetSchema`
pub struct SheetTable {
    api: GoogleSheetsRestApi,
    schema: SheetSchema,
    columns: Mutex<Option<ColumnMap>>,
}

impl SheetTable {
    pub fn new(api: GoogleSheetsRestApi, schema: SheetSchema) -> Self {
        Self {
            api,
            schema,
            columns: Mutex::new(None),
        }
    }

    /// Column map of the tab. On first use the tab is created if needed and
    /// every schema column missing from the header row is appended to it.
    async fn columns(&self) -> anyhow::Result<ColumnMap> {
        let mut cached = self.columns.lock().await;
        if let Some(columns) = cached.as_ref() {
            return Ok(columns.clone());
        }

        let tabs = self.api.tab_titles().await?;
        if !tabs.iter().any(|title| title == self.schema.tab) {
            info!("Creating tab {}", self.schema.tab);
            self.api.add_tab(self.schema.tab).await?;
        }

        let mut header = self
            .api
            .get(&self.schema.header_range())
            .await?
            .into_iter()
            .next()
            .unwrap_or_default();
        if header.iter().all(|h| h.trim().is_empty()) {
            header.clear();
        }

        let columns = ColumnMap::resolve(&self.schema, &header);
        let columns = if header.is_empty() || !columns.missing_columns().is_empty() {
            if header.is_empty() {
                header = self.schema.header_row();
            } else {
                header.extend(columns.missing_columns().iter().cloned());
            }
            info!(
                "Writing header row (schema v{}) to {}: {:?}",
                self.schema.version, self.schema.tab, header
            );
            self.api
                .update(&self.schema.header_range(), vec![header.clone()])
                .await?;
            ColumnMap::resolve(&self.schema, &header)
        } else {
            columns
        };

        *cached = Some(columns.clone());
        Ok(columns)
    }

    pub async fn append(&self, values: &[(&str, &str)]) -> anyhow::Result<RowId> {
        let columns = self.columns().await?;
        let updated_range = self
            .api
            .append(
                &self.schema.table_range(columns.width()),
                columns.build_row(values),
            )
            .await?;
        parse_updated_row(&updated_range)
            .ok_or_else(|| anyhow::anyhow!("Unexpected updated range: {}", updated_range))
    }

    /// All non-empty data rows with their row ids
    pub async fn rows(&self) -> anyhow::Result<(ColumnMap, Vec<(RowId, Vec<String>)>)> {
        self.columns().await?;
        let mut rows = self.api.get(&self.schema.sheet_range()).await?.into_iter();
        let header = rows.next().unwrap_or_default();
        let columns = ColumnMap::resolve(&self.schema, &header);

        let rows = rows
            .enumerate()
            // The first data row is row 2
            .map(|(i, row)| (RowId(i as u32 + 2), row))
            .filter(|(_, row)| row.iter().any(|cell| !cell.trim().is_empty()))
            .collect();
        Ok((columns, rows))
    }

    /// Only writes to columns present in the header row
    pub async fn write_cell(&self, column: &str, row: RowId, value: &str) -> anyhow::Result<()> {
        let columns = self.columns().await?;
        let index = columns
            .header_index_of(column)
            .ok_or_else(|| anyhow::anyhow!("Column {} is not in the header row", column))?;
        self.api
            .update(
                &self.schema.cell_range(index, row),
                vec![vec![value.to_string()]],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::google_sheets::{
        schema::{CALL_BOOKING_SCHEMA, CONTACT_SCHEMA, REGISTRANT_SCHEMA},
        test_utils::sheets_api,
    };
    use mockito::{Matcher, ServerGuard};
    use serde_json::json;

    async fn mock_tabs(server: &mut ServerGuard, spreadsheet_id: &str, tabs: &[&str]) {
        let sheets = tabs
            .iter()
            .map(|title| json!({ "properties": { "title": title } }))
            .collect::<Vec<_>>();
        server
            .mock("GET", format!("/{}", spreadsheet_id).as_str())
            .match_query(Matcher::Any)
            .with_header("content-type", "application/json")
            .with_body(json!({ "sheets": sheets }).to_string())
            .create_async()
            .await;
    }

    async fn mock_header(server: &mut ServerGuard, path: &str, header: Vec<String>) {
        server
            .mock("GET", path)
            .with_header("content-type", "application/json")
            .with_body(json!({ "values": [header] }).to_string())
            .create_async()
            .await;
    }

    fn v1_registrant_header() -> Vec<String> {
        [
            "First Name",
            "Last Name",
            "Email",
            "Agency",
            "Retirement Timeline",
            "Submitted At",
            "Source",
            "Webinar_ID",
            "Webinar_Date",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect()
    }

    #[tokio::test]
    async fn contacts_on_the_registrant_sheet_extend_the_header() {
        let mut server = mockito::Server::new_async().await;
        let api = sheets_api(&mut server, "shared").await;
        mock_tabs(&mut server, "shared", &["Sheet1"]).await;
        mock_header(
            &mut server,
            "/shared/values/Sheet1!1:1",
            REGISTRANT_SCHEMA.header_row(),
        )
        .await;

        let mut extended = REGISTRANT_SCHEMA.header_row();
        extended.extend(["Phone".to_string(), "Message".to_string()]);
        let header_update = server
            .mock("PUT", "/shared/values/Sheet1!1:1")
            .match_query(Matcher::Any)
            .match_body(Matcher::PartialJson(json!({ "values": [extended] })))
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        let mut row = vec![""; 15];
        row[0] = "Grace";
        row[2] = "g@x.com";
        row[4] = "2026-01-05T14:05:00Z";
        row[13] = "555-0100";
        row[14] = "When can I retire?";
        let append = server
            .mock("POST", "/shared/values/Sheet1!A:O:append")
            .match_query(Matcher::Any)
            .match_body(Matcher::Json(json!({ "values": [row] })))
            .with_header("content-type", "application/json")
            .with_body(r#"{"updates": {"updatedRange": "Sheet1!A9:O9"}}"#)
            .create_async()
            .await;

        let table = SheetTable::new(api, CONTACT_SCHEMA);
        let row_id = table
            .append(&[
                ("First Name", "Grace"),
                ("Email", "g@x.com"),
                ("Phone", "555-0100"),
                ("Message", "When can I retire?"),
                ("Submitted At", "2026-01-05T14:05:00Z"),
            ])
            .await
            .unwrap();
        assert_eq!(row_id, RowId(9));
        header_update.assert_async().await;
        append.assert_async().await;
    }

    #[tokio::test]
    async fn sent_marks_on_a_v1_sheet_go_to_new_columns() {
        let mut server = mockito::Server::new_async().await;
        let api = sheets_api(&mut server, "registrants").await;
        mock_tabs(&mut server, "registrants", &["Sheet1"]).await;
        mock_header(&mut server, "/registrants/values/Sheet1!1:1", v1_registrant_header()).await;
        server
            .mock("PUT", "/registrants/values/Sheet1!1:1")
            .match_query(Matcher::Any)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;
        // Webinar_Date is column I, the confirmation flag lands in J
        let mark = server
            .mock("PUT", "/registrants/values/Sheet1!J7")
            .match_query(Matcher::Any)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        let table = SheetTable::new(api, REGISTRANT_SCHEMA);
        table
            .write_cell("Email_Confirmation_Sent", RowId(7), "2026-01-05T14:05:00Z")
            .await
            .unwrap();
        mark.assert_async().await;
    }

    #[tokio::test]
    async fn no_cell_is_written_when_the_header_cannot_be_extended() {
        let mut server = mockito::Server::new_async().await;
        let api = sheets_api(&mut server, "registrants").await;
        mock_tabs(&mut server, "registrants", &["Sheet1"]).await;
        mock_header(&mut server, "/registrants/values/Sheet1!1:1", v1_registrant_header()).await;
        server
            .mock("PUT", "/registrants/values/Sheet1!1:1")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;
        let cells = server
            .mock("PUT", Matcher::Regex(r"^/registrants/values/Sheet1![A-Z]+\d+".into()))
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let table = SheetTable::new(api, REGISTRANT_SCHEMA);
        assert!(table
            .write_cell("Email_Confirmation_Sent", RowId(7), "2026-01-05T14:05:00Z")
            .await
            .is_err());
        cells.assert_async().await;
    }

    #[tokio::test]
    async fn creates_the_call_bookings_tab_on_first_use() {
        let mut server = mockito::Server::new_async().await;
        let api = sheets_api(&mut server, "contacts").await;
        mock_tabs(&mut server, "contacts", &["Sheet1"]).await;
        let add_tab = server
            .mock("POST", "/contacts:batchUpdate")
            .match_body(Matcher::PartialJson(json!({
                "requests": [{ "addSheet": { "properties": { "title": "Call Bookings" } } }]
            })))
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;
        server
            .mock("GET", Matcher::Regex(r"Call%20Bookings.*!1:1$".into()))
            .with_header("content-type", "application/json")
            .with_body(r#"{"range": "'Call Bookings'!A1:Z1"}"#)
            .create_async()
            .await;
        let header = server
            .mock("PUT", Matcher::Regex(r"Call%20Bookings.*!1:1$".into()))
            .match_query(Matcher::Any)
            .match_body(Matcher::PartialJson(json!({
                "values": [CALL_BOOKING_SCHEMA.header_row()]
            })))
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;
        server
            .mock("POST", Matcher::Regex(r"Call%20Bookings.*!A:J:append$".into()))
            .match_query(Matcher::Any)
            .with_header("content-type", "application/json")
            .with_body(r#"{"updates": {"updatedRange": "'Call Bookings'!A2:J2"}}"#)
            .create_async()
            .await;

        let table = SheetTable::new(api, CALL_BOOKING_SCHEMA);
        assert_eq!(table.append(&[("Name", "Jane")]).await.unwrap(), RowId(2));
        add_tab.assert_async().await;
        header.assert_async().await;
    }
}
