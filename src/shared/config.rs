//! Application configuration. API credentials, addresses, report settings.

use serde::Deserialize;

/// Default hour of day (local time) for the daily status report.
pub const DEFAULT_REPORT_HOUR: u32 = 9;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// HTTP bind address. Read from TASKBOARD_HTTP_ADDR.
    #[serde(default)]
    pub http_addr: Option<String>,

    /// Directory holding the SQLite database. Read from TASKBOARD_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Trello Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Trello API key. Read from TRELLO_KEY.
    #[serde(default)]
    pub trello_key: Option<String>,

    /// Trello API token. Read from TRELLO_TOKEN.
    #[serde(default)]
    pub trello_token: Option<String>,

    /// Trello member whose boards are listed. Read from TRELLO_USERNAME.
    #[serde(default)]
    pub trello_username: Option<String>,

    /// Trello API base URL. Defaults to the public API. Read from TASKBOARD_TRELLO_API_URL.
    #[serde(default)]
    pub trello_api_url: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Mail (SMTP) Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// SMTP relay host. Read from TASKBOARD_SMTP_HOST.
    #[serde(default)]
    pub smtp_host: Option<String>,

    /// SMTP port (default 587). Read from TASKBOARD_SMTP_PORT.
    #[serde(default)]
    pub smtp_port: Option<u16>,

    /// SMTP username. Read from TASKBOARD_SMTP_USERNAME.
    #[serde(default)]
    pub smtp_username: Option<String>,

    /// SMTP password. Read from TASKBOARD_SMTP_PASSWORD.
    #[serde(default)]
    pub smtp_password: Option<String>,

    /// From address for outgoing mail. Read from TASKBOARD_MAIL_FROM.
    #[serde(default)]
    pub mail_from: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Admin / Company (status report recipient and signature)
    // ─────────────────────────────────────────────────────────────────────────
    /// Recipient of the daily status report. Read from TASKBOARD_ADMIN_MAIL.
    #[serde(default)]
    pub admin_mail: Option<String>,

    /// Admin display name used in the report greeting. Read from TASKBOARD_ADMIN_NAME.
    #[serde(default)]
    pub admin_name: Option<String>,

    #[serde(default)]
    pub company_name: Option<String>,

    #[serde(default)]
    pub company_goal: Option<String>,

    #[serde(default)]
    pub company_email: Option<String>,

    #[serde(default)]
    pub company_phone: Option<String>,

    /// Hour of day (local, 0-23) when the report fires. Read from TASKBOARD_REPORT_HOUR.
    #[serde(default)]
    pub report_hour: Option<u32>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("TASKBOARD"));
        if let Ok(path) = std::env::var("TASKBOARD_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // TRELLO_* are read directly (no TASKBOARD_ prefix) so .env can use the
        // names from the Trello app-key page verbatim.
        if cfg.trello_key.is_none() {
            cfg.trello_key = std::env::var("TRELLO_KEY").ok();
        }
        if cfg.trello_token.is_none() {
            cfg.trello_token = std::env::var("TRELLO_TOKEN").ok();
        }
        if cfg.trello_username.is_none() {
            cfg.trello_username = std::env::var("TRELLO_USERNAME").ok();
        }
        Ok(cfg)
    }

    /// Returns the HTTP bind address. Defaults to 0.0.0.0:8080.
    pub fn http_addr_or_default(&self) -> String {
        self.http_addr
            .clone()
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
    }

    /// Returns the data directory. Defaults to ./data.
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir.clone().unwrap_or_else(|| "./data".to_string())
    }

    /// Returns the Trello API base URL. Defaults to the public endpoint.
    pub fn trello_api_url_or_default(&self) -> String {
        self.trello_api_url
            .clone()
            .unwrap_or_else(|| "https://api.trello.com/1".to_string())
    }

    /// Returns the report hour clamped to a valid hour of day. Defaults to 9.
    pub fn report_hour_or_default(&self) -> u32 {
        self.report_hour.unwrap_or(DEFAULT_REPORT_HOUR).min(23)
    }

    /// Returns true if the Trello gateway is fully configured.
    pub fn is_trello_configured(&self) -> bool {
        self.trello_key.is_some() && self.trello_token.is_some() && self.trello_username.is_some()
    }

    /// Returns true if SMTP sending is fully configured.
    pub fn is_smtp_configured(&self) -> bool {
        self.smtp_host.is_some()
            && self.smtp_username.is_some()
            && self.smtp_password.is_some()
            && self.mail_from.is_some()
    }

    /// Builds the immutable admin/company configuration for the status report.
    /// Returns `None` when no recipient address is set (report disabled).
    pub fn admin_config(&self) -> Option<AdminConfig> {
        let admin_mail = self.admin_mail.clone()?;
        Some(AdminConfig {
            admin_mail,
            admin_name: self.admin_name.clone().unwrap_or_default(),
            company_name: self.company_name.clone().unwrap_or_default(),
            company_goal: self.company_goal.clone().unwrap_or_default(),
            company_email: self.company_email.clone().unwrap_or_default(),
            company_phone: self.company_phone.clone().unwrap_or_default(),
        })
    }
}

/// Admin and company details for the status report. Constructed once at
/// startup and passed explicitly to consumers; never read ambiently.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub admin_mail: String,
    pub admin_name: String,
    pub company_name: String,
    pub company_goal: String,
    pub company_email: String,
    pub company_phone: String,
}
