use chrono_tz::Tz;
use leadflow_domain::{default_roster, Advisor};
use secrecy::SecretString;
use std::{collections::HashMap, path::PathBuf};
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;
const DEFAULT_WEBINAR_URL: &str = "https://planwellfp.com/webinar";
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 587;
const DEFAULT_FROM_NAME: &str = "PlanWell Financial Planning";
const DEFAULT_ASSIGNMENT_STATE_PATH: &str = ".call_booking_state.json";
const DEFAULT_NURTURE_INTERVAL_SECS: u64 = 60 * 60;

/// Credentials and spreadsheet ids for the Google Sheets backed stores
#[derive(Debug, Clone)]
pub struct GoogleSheetsConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    pub refresh_token: SecretString,
    /// Spreadsheet holding webinar registrants
    pub registrant_sheet_id: String,
    /// Spreadsheet holding contact form submissions and the call booking log
    pub contact_sheet_id: String,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: SecretString,
    pub from_email: String,
    pub from_name: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the webhook server to run on
    pub port: u16,
    /// Timezone used for webinar dates that do not carry an offset
    pub local_timezone: Tz,
    /// Zoom links keyed by webinar id
    pub webinar_join_links: HashMap<String, String>,
    /// Link used in emails when a webinar has no join link configured yet
    pub webinar_fallback_url: String,
    /// `None` when the Google credentials are missing, the stores then
    /// fall back to inmemory repositories
    pub google: Option<GoogleSheetsConfig>,
    /// `None` when SMTP credentials are missing. No emails are sent then.
    pub smtp: Option<SmtpConfig>,
    /// Advisors taking call bookings, in round robin order
    pub advisors: Vec<Advisor>,
    /// Where the round robin state is persisted between restarts
    pub assignment_state_path: PathBuf,
    /// Run the nurture scheduler inside the webhook server. Must stay disabled
    /// when the scheduler is triggered by cron, concurrent runs can send
    /// duplicate reminders.
    pub nurture_job_enabled: bool,
    pub nurture_job_interval_secs: u64,
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env_or<T: std::str::FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    match env_var(name) {
        Some(value) => match value.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!(
                    "The given {}: {} is not valid, falling back to the default: {}.",
                    name, value, default
                );
                default
            }
        },
        None => default,
    }
}

fn parse_join_links(raw: Option<String>) -> HashMap<String, String> {
    let raw = match raw {
        Some(raw) => raw,
        None => return HashMap::new(),
    };
    match serde_json::from_str::<HashMap<String, String>>(&raw) {
        Ok(links) => links
            .into_iter()
            .filter(|(_, link)| !link.trim().is_empty())
            .collect(),
        Err(e) => {
            warn!(
                "WEBINAR_JOIN_LINKS is not a JSON object of strings, ignoring it. Error: {:?}",
                e
            );
            HashMap::new()
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let port = parse_env_or("PORT", DEFAULT_PORT);
        let local_timezone = parse_env_or("LOCAL_TIMEZONE", DEFAULT_TIMEZONE);

        let google = match (
            env_var("GOOGLE_CLIENT_ID"),
            env_var("GOOGLE_CLIENT_SECRET"),
            env_var("GOOGLE_REFRESH_TOKEN"),
            env_var("GOOGLE_SHEET_ID"),
        ) {
            (Some(client_id), Some(client_secret), Some(refresh_token), Some(sheet_id)) => {
                let contact_sheet_id =
                    env_var("CONTACT_SHEET_ID").unwrap_or_else(|| sheet_id.clone());
                Some(GoogleSheetsConfig {
                    client_id,
                    client_secret: SecretString::from(client_secret),
                    refresh_token: SecretString::from(refresh_token),
                    registrant_sheet_id: sheet_id,
                    contact_sheet_id,
                })
            }
            _ => {
                warn!("Google Sheets credentials not configured. Using inmemory stores.");
                None
            }
        };

        let smtp = match (env_var("SMTP_USER"), env_var("SMTP_PASSWORD")) {
            (Some(user), Some(password)) => Some(SmtpConfig {
                host: env_var("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.into()),
                port: parse_env_or("SMTP_PORT", DEFAULT_SMTP_PORT),
                from_email: env_var("FROM_EMAIL").unwrap_or_else(|| user.clone()),
                from_name: env_var("FROM_NAME").unwrap_or_else(|| DEFAULT_FROM_NAME.into()),
                user,
                password: SecretString::from(password),
            }),
            _ => {
                info!("SMTP credentials not configured. Emails will not be sent.");
                None
            }
        };

        Self {
            port,
            local_timezone,
            webinar_join_links: parse_join_links(env_var("WEBINAR_JOIN_LINKS")),
            webinar_fallback_url: env_var("WEBINAR_FALLBACK_URL")
                .unwrap_or_else(|| DEFAULT_WEBINAR_URL.into()),
            google,
            smtp,
            advisors: default_roster(),
            assignment_state_path: env_var("ASSIGNMENT_STATE_PATH")
                .unwrap_or_else(|| DEFAULT_ASSIGNMENT_STATE_PATH.into())
                .into(),
            nurture_job_enabled: parse_env_or("NURTURE_JOB_ENABLED", false),
            nurture_job_interval_secs: parse_env_or(
                "NURTURE_JOB_INTERVAL_SECS",
                DEFAULT_NURTURE_INTERVAL_SECS,
            ),
        }
    }

    /// Zoom link for the given webinar
    pub fn join_link(&self, webinar_id: &str) -> &str {
        self.webinar_join_links
            .get(webinar_id)
            .map(|link| link.as_str())
            .unwrap_or(&self.webinar_fallback_url)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
