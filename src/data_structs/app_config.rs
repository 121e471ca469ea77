use std::env;

/// Everything needed to open one authenticated SMTP session.
#[derive(Debug, PartialEq, Eq)]
#[derive(Clone)]
pub struct SmtpSettings {
    pub username: String,
    pub password: String,
    pub server: String,
    pub port: u16,
}

/// Where SMTP credentials come from. The two modes are mutually exclusive per
/// deployment; there is no fallback from one to the other.
#[derive(Debug, Clone)]
pub enum CredentialMode {
    /// Credentials fixed at process startup from the environment. Request
    /// bodies carry no SMTP fields in this mode; any present are ignored.
    Environment(SmtpSettings),
    /// Every request supplies its own credentials in the body.
    PerRequest,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credential_mode: CredentialMode,
    pub bind_port: u16,
}

impl AppConfig {
    /// Reads the process configuration. Missing or malformed required
    /// variables are fatal; the server must not accept traffic without them.
    pub fn from_env() -> AppConfig {
        let bind_port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid port number!");

        let mode = env::var("EMAIL_CREDENTIAL_MODE")
            .unwrap_or_else(|_| "environment".to_string());

        let credential_mode = match mode.as_str() {
            "per-request" => CredentialMode::PerRequest,
            "environment" => {
                let username = env::var("EMAIL_USER").expect("EMAIL_USER not set!");
                let password = env::var("EMAIL_PASSWORD").expect("EMAIL_PASSWORD not set!");
                let server = env::var("EMAIL_SMTP_SERVER").expect("EMAIL_SMTP_SERVER not set!");
                let port = env::var("EMAIL_SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse::<u16>()
                    .expect("EMAIL_SMTP_PORT must be a valid port number!");
                CredentialMode::Environment(SmtpSettings { username, password, server, port })
            }
            other => panic!("Unknown EMAIL_CREDENTIAL_MODE '{}', expected 'environment' or 'per-request'", other),
        };

        return AppConfig { credential_mode, bind_port };
    }
}
