use super::auth_provider::GoogleAuthProvider;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

const API_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

// https://developers.google.com/sheets/api/reference/rest/v4/spreadsheets.values#ValueRange
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    range: Option<String>,
    #[serde(default)]
    values: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateValuesResponse {
    updated_range: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendValuesResponse {
    updates: Option<UpdateValuesResponse>,
}

// https://developers.google.com/sheets/api/reference/rest/v4/spreadsheets#Spreadsheet
#[derive(Debug, Default, Deserialize)]
struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Debug, Deserialize)]
struct Sheet {
    properties: SheetProperties,
}

#[derive(Debug, Serialize, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSheetRequest {
    add_sheet: AddSheet,
}

#[derive(Debug, Serialize)]
struct AddSheet {
    properties: SheetProperties,
}

#[derive(Debug, Serialize)]
struct BatchUpdateRequest {
    requests: Vec<AddSheetRequest>,
}

/// Thin wrapper around the values endpoints of the Google Sheets REST api
pub struct GoogleSheetsRestApi {
    client: Client,
    auth: Arc<GoogleAuthProvider>,
    base_url: String,
    spreadsheet_id: String,
}

impl GoogleSheetsRestApi {
    pub fn new(auth: Arc<GoogleAuthProvider>, spreadsheet_id: String) -> Self {
        Self {
            client: Client::new(),
            auth,
            base_url: API_BASE_URL.to_string(),
            spreadsheet_id,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn spreadsheet_url(&self) -> String {
        format!("{}/{}", self.base_url, self.spreadsheet_id)
    }

    fn values_url(&self, range: &str) -> String {
        format!("{}/values/{}", self.spreadsheet_url(), range)
    }

    /// Titles of the tabs in the spreadsheet
    pub async fn tab_titles(&self) -> anyhow::Result<Vec<String>> {
        let token = self.auth.access_token().await?;
        let res = self
            .client
            .get(self.spreadsheet_url())
            .query(&[("fields", "sheets.properties.title")])
            .bearer_auth(token.secret())
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                warn!("Google sheets api spreadsheet GET error: {:?}", e);
                e
            })?;
        Ok(res
            .json::<Spreadsheet>()
            .await?
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }

    pub async fn add_tab(&self, title: &str) -> anyhow::Result<()> {
        let token = self.auth.access_token().await?;
        let body = BatchUpdateRequest {
            requests: vec![AddSheetRequest {
                add_sheet: AddSheet {
                    properties: SheetProperties {
                        title: title.to_string(),
                    },
                },
            }],
        };
        self.client
            .post(format!("{}:batchUpdate", self.spreadsheet_url()))
            .bearer_auth(token.secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                warn!("Google sheets api batchUpdate error: {:?}", e);
                e
            })?;
        Ok(())
    }

    /// Reads all rows of `range`. Trailing empty cells are not returned by
    /// the api, so rows can be shorter than the range.
    pub async fn get(&self, range: &str) -> anyhow::Result<Vec<Vec<String>>> {
        let token = self.auth.access_token().await?;
        let res = self
            .client
            .get(self.values_url(range))
            .bearer_auth(token.secret())
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                warn!("Google sheets api GET error: {:?}", e);
                e
            })?;
        Ok(res.json::<ValueRange>().await?.values)
    }

    /// Appends `row` after the last row of the table in `range` and returns
    /// the range that was written, e.g. `Sheet1!A5:M5`
    pub async fn append(&self, range: &str, row: Vec<String>) -> anyhow::Result<String> {
        let token = self.auth.access_token().await?;
        let body = ValueRange {
            range: None,
            values: vec![row],
        };
        let res = self
            .client
            .post(format!("{}:append", self.values_url(range)))
            .query(&[
                ("valueInputOption", "RAW"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .bearer_auth(token.secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                warn!("Google sheets api append error: {:?}", e);
                e
            })?;

        res.json::<AppendValuesResponse>()
            .await?
            .updates
            .and_then(|u| u.updated_range)
            .ok_or_else(|| anyhow::anyhow!("Append response did not contain the updated range"))
    }

    pub async fn update(&self, range: &str, rows: Vec<Vec<String>>) -> anyhow::Result<()> {
        let token = self.auth.access_token().await?;
        let body = ValueRange {
            range: Some(range.to_string()),
            values: rows,
        };
        self.client
            .put(self.values_url(range))
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(token.secret())
            .json(&body)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                warn!("Google sheets api PUT error: {:?}", e);
                e
            })?;
        Ok(())
    }
}
