use crate::{config::GoogleSheetsConfig, ISys};
use leadflow_domain::AccessToken;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

// https://developers.google.com/identity/protocols/oauth2/web-server#offline

const TOKEN_REFETCH_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

struct RefreshTokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct RefreshTokenResponse {
    access_token: String,
    // Access token expires in specified in seconds
    expires_in: i64,
}

async fn refresh_access_token(
    client: &reqwest::Client,
    endpoint: &str,
    req: RefreshTokenRequest<'_>,
) -> anyhow::Result<RefreshTokenResponse> {
    let params = [
        ("client_id", req.client_id),
        ("client_secret", req.client_secret),
        ("refresh_token", req.refresh_token),
        ("grant_type", "refresh_token"),
    ];
    let res = client
        .post(endpoint)
        .form(&params)
        .send()
        .await?
        .error_for_status()?;

    Ok(res.json::<RefreshTokenResponse>().await?)
}

/// Hands out Google access tokens for the spreadsheet api.
///
/// The current `AccessToken` is kept by the provider and only renewed with
/// the refresh token grant when it is about to expire.
pub struct GoogleAuthProvider {
    client: reqwest::Client,
    token_endpoint: String,
    client_id: String,
    client_secret: SecretString,
    refresh_token: SecretString,
    token: Mutex<Option<AccessToken>>,
    sys: Arc<dyn ISys>,
}

impl GoogleAuthProvider {
    pub fn new(config: &GoogleSheetsConfig, sys: Arc<dyn ISys>) -> Self {
        Self {
            client: reqwest::Client::new(),
            token_endpoint: TOKEN_REFETCH_ENDPOINT.to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            refresh_token: config.refresh_token.clone(),
            token: Mutex::new(None),
            sys,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_token_endpoint(mut self, endpoint: String) -> Self {
        self.token_endpoint = endpoint;
        self
    }

    pub async fn access_token(&self) -> anyhow::Result<AccessToken> {
        let mut token = self.token.lock().await;
        if let Some(current) = token.as_ref() {
            if current.is_valid(self.sys.get_timestamp_millis()) {
                return Ok(current.clone());
            }
        }

        // Access token has or will expire soon, now renew it
        let tokens = refresh_access_token(
            &self.client,
            &self.token_endpoint,
            RefreshTokenRequest {
                client_id: &self.client_id,
                client_secret: self.client_secret.expose_secret(),
                refresh_token: self.refresh_token.expose_secret(),
            },
        )
        .await
        .map_err(|e| {
            warn!("Unable to refresh google access token. Error: {:?}", e);
            e
        })?;

        let renewed = AccessToken::from_expires_in(
            tokens.access_token,
            tokens.expires_in,
            self.sys.get_timestamp_millis(),
        );
        info!("Renewed google access token");
        *token = Some(renewed.clone());
        Ok(renewed)
    }
}
