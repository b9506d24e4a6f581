// https://developers.google.com/sheets/api/reference/rest
mod auth_provider;
pub mod schema;
mod sheets_api;

pub use auth_provider::GoogleAuthProvider;
pub use sheets_api::GoogleSheetsRestApi;

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;
    use crate::{config::GoogleSheetsConfig, ISys, StaticTimeSys};
    use mockito::{Matcher, ServerGuard};
    use secrecy::SecretString;
    use std::sync::Arc;

    pub const TOKEN: &str = "ya29.test-token";

    pub fn sheets_config() -> GoogleSheetsConfig {
        GoogleSheetsConfig {
            client_id: "client-id".into(),
            client_secret: SecretString::from("client-secret".to_string()),
            refresh_token: SecretString::from("refresh-token".to_string()),
            registrant_sheet_id: "registrants".into(),
            contact_sheet_id: "contacts".into(),
        }
    }

    pub fn auth_provider(server: &ServerGuard, sys: Arc<dyn ISys>) -> GoogleAuthProvider {
        GoogleAuthProvider::new(&sheets_config(), sys)
            .with_token_endpoint(format!("{}/token", server.url()))
    }

    /// Api for `spreadsheet_id` on the mock server, with the token endpoint
    /// mocked as well
    pub async fn sheets_api(server: &mut ServerGuard, spreadsheet_id: &str) -> GoogleSheetsRestApi {
        server
            .mock("POST", "/token")
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"access_token": "{}", "expires_in": 3599}}"#, TOKEN))
            .create_async()
            .await;
        let auth = auth_provider(server, Arc::new(StaticTimeSys(0)));
        GoogleSheetsRestApi::new(Arc::new(auth), spreadsheet_id.into())
            .with_base_url(server.url())
    }

    /// Requests must carry the access token
    pub fn bearer() -> Matcher {
        Matcher::Exact(format!("Bearer {}", TOKEN))
    }
}
