use secrecy::{ExposeSecret, SecretString};

/// Tokens are renewed this long before they actually expire
const EXPIRY_LEEWAY_MILLIS: i64 = 1000 * 60;

/// A short lived OAuth access token together with the timestamp (millis)
/// at which it expires.
#[derive(Debug, Clone)]
pub struct AccessToken {
    token: SecretString,
    expires_ts: i64,
}

impl AccessToken {
    pub fn new(token: String, expires_ts: i64) -> Self {
        Self {
            token: SecretString::from(token),
            expires_ts,
        }
    }

    /// Creates a token from the `expires_in` (seconds) field of an OAuth
    /// token response received at `now_ts`
    pub fn from_expires_in(token: String, expires_in_secs: i64, now_ts: i64) -> Self {
        Self::new(token, now_ts + expires_in_secs * 1000)
    }

    /// Valid tokens have at least one minute left before they expire
    pub fn is_valid(&self, now_ts: i64) -> bool {
        now_ts + EXPIRY_LEEWAY_MILLIS <= self.expires_ts
    }

    pub fn expires_ts(&self) -> i64 {
        self.expires_ts
    }

    pub fn secret(&self) -> &str {
        self.token.expose_secret()
    }
}
