// src/mailer.rs

use reqwest::blocking::Client;
use serde::Serialize;
use thiserror::Error;

use crate::config::MailConfig;

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("API error: {0}")]
    ApiError(String),
}

pub struct BrevoMailer {
    api_key: String,
    sender_email: String,
    sender_name: String,
    client: Client,
}

#[derive(Serialize)]
struct BrevoSender<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(Serialize)]
struct BrevoRecipient<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BrevoPayload<'a> {
    sender: BrevoSender<'a>,
    to: Vec<BrevoRecipient<'a>>,
    subject: &'a str,
    html_content: String,
}

impl BrevoMailer {
    pub fn new(cfg: &MailConfig) -> Self {
        Self {
            api_key: cfg.api_key.clone(),
            sender_email: cfg.sender_email.clone(),
            sender_name: cfg.sender_name.clone(),
            client: Client::new(),
        }
    }

    /// `magic_link` must be absolute; it is clicked from a mail client.
    pub fn send_magic_link(
        &self,
        recipient_email: &str,
        magic_link: &str,
    ) -> Result<(), MailerError> {
        let payload = BrevoPayload {
            sender: BrevoSender {
                name: &self.sender_name,
                email: &self.sender_email,
            },
            to: vec![BrevoRecipient {
                email: recipient_email,
            }],
            subject: "Tu enlace para ingresar a Turanchito",
            html_content: magic_link_html(magic_link),
        };

        let resp = self
            .client
            .post(BREVO_SEND_URL)
            .header("api-key", &self.api_key)
            .json(&payload)
            .send()
            .map_err(|e| MailerError::RequestFailed(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            return Err(MailerError::ApiError(format!("{status}: {body}")));
        }

        Ok(())
    }
}

fn magic_link_html(link: &str) -> String {
    maud::html! {
        h1 { "Ingresa a Turanchito" }
        p { "Haz clic en el siguiente enlace para ingresar a tu cuenta. El enlace vence en 15 minutos." }
        p { a href=(link) { "Ingresar" } }
        p { "Si no solicitaste este enlace, puedes ignorar este correo." }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_body_links_and_escapes() {
        let html = magic_link_html("https://turanchito.com/auth/magic?token=a&b");
        assert!(html.contains(r#"href="https://turanchito.com/auth/magic?token=a&amp;b""#));
        assert!(html.contains("Ingresa a Turanchito"));
    }
}
