use serde::{Deserialize, Serialize};

use crate::data_structs::app_config::{CredentialMode, SmtpSettings};

// one outgoing email; lives only for the duration of the request
#[derive(Debug, PartialEq, Eq)]
#[derive(Deserialize, Serialize)]
pub struct EmailSendRequest {
    pub recipient: String,
    pub subject: String,
    pub content: String,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_server: Option<String>,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

fn default_smtp_port() -> u16 {
    return 587;
}

impl EmailSendRequest {
    /// Resolves the SMTP settings for this request. In environment mode the
    /// startup settings win unconditionally; in per-request mode absent fields
    /// resolve to empty strings so the dispatcher's credential check rejects
    /// them before any I/O.
    pub fn smtp_settings(&self, mode: &CredentialMode) -> SmtpSettings {
        return match mode {
            CredentialMode::Environment(settings) => settings.clone(),
            CredentialMode::PerRequest => SmtpSettings {
                username: self.smtp_username.clone().unwrap_or_default(),
                password: self.smtp_password.clone().unwrap_or_default(),
                server: self.smtp_server.clone().unwrap_or_default(),
                port: self.smtp_port,
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smtp_port_defaults_to_587() {
        let request: EmailSendRequest = serde_json::from_str(
            r#"{"recipient":"user@example.com","subject":"Hi","content":"Body"}"#,
        )
        .unwrap();
        assert_eq!(request.smtp_port, 587);
    }

    #[test]
    fn per_request_mode_reads_settings_from_the_body() {
        let request: EmailSendRequest = serde_json::from_str(
            r#"{"recipient":"user@example.com","subject":"Hi","content":"Body",
                "smtp_username":"a@b.com","smtp_password":"p","smtp_server":"smtp.b.com","smtp_port":2525}"#,
        )
        .unwrap();

        let settings = request.smtp_settings(&CredentialMode::PerRequest);
        assert_eq!(settings.username, "a@b.com");
        assert_eq!(settings.password, "p");
        assert_eq!(settings.server, "smtp.b.com");
        assert_eq!(settings.port, 2525);
    }

    #[test]
    fn environment_mode_ignores_body_settings() {
        let request: EmailSendRequest = serde_json::from_str(
            r#"{"recipient":"user@example.com","subject":"Hi","content":"Body",
                "smtp_username":"attacker@evil.com","smtp_password":"x","smtp_server":"smtp.evil.com"}"#,
        )
        .unwrap();

        let configured = SmtpSettings {
            username: "service@example.com".to_string(),
            password: "secret".to_string(),
            server: "smtp.example.com".to_string(),
            port: 587,
        };
        let settings = request.smtp_settings(&CredentialMode::Environment(configured.clone()));
        assert_eq!(settings, configured);
    }
}
