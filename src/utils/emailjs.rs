use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::contact::form::TemplateParams;

const SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Email service credentials are not configured")]
    MissingCredentials,
    #[error("Failed to build request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("Email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Credentials {
    pub fn new(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, DispatchError> {
        match (service_id, template_id, public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(Self {
                service_id: service_id.to_string(),
                template_id: template_id.to_string(),
                public_key: public_key.to_string(),
            }),
            _ => Err(DispatchError::MissingCredentials),
        }
    }

    pub fn from_build_env() -> Result<Self, DispatchError> {
        Self::new(
            config::get_emailjs_service_id(),
            config::get_emailjs_template_id(),
            config::get_emailjs_public_key(),
        )
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// JSON body the EmailJS send endpoint takes.
pub fn request_body(credentials: &Credentials, params: &TemplateParams) -> Result<String, DispatchError> {
    let body = SendRequest {
        service_id: &credentials.service_id,
        template_id: &credentials.template_id,
        user_id: &credentials.public_key,
        template_params: params,
    };
    Ok(serde_json::to_string(&body)?)
}

/// Send one templated email. No retries.
pub async fn send(params: &TemplateParams) -> Result<(), DispatchError> {
    let credentials = Credentials::from_build_env()?;
    let body = request_body(&credentials, params)?;

    let response = Request::post(SEND_URL)
        .header("Content-Type", "application/json")
        .body(body)?
        .send()
        .await?;

    if response.ok() {
        gloo_console::log!("Contact email accepted");
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(DispatchError::Rejected { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TemplateParams {
        TemplateParams {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: "N/A".into(),
            service: "Cloud Computing".into(),
            message: "hello".into(),
            time: "Thu, 15 Oct 2026, 09:05 pm".into(),
        }
    }

    #[test]
    fn test_credentials_require_all_three_values() {
        assert!(matches!(
            Credentials::new(Some("svc"), None, Some("key")),
            Err(DispatchError::MissingCredentials)
        ));
        let credentials = Credentials::new(Some("svc"), Some("tpl"), Some("key")).unwrap();
        assert_eq!(credentials.public_key, "key");
    }

    #[test]
    fn test_request_body_shape() {
        let credentials = Credentials::new(Some("svc"), Some("tpl"), Some("key")).unwrap();
        let body = request_body(&credentials, &params()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["service_id"], "svc");
        assert_eq!(value["template_id"], "tpl");
        assert_eq!(value["user_id"], "key");
        assert_eq!(value["template_params"]["email"], "ada@example.com");
        assert_eq!(value["template_params"]["time"], "Thu, 15 Oct 2026, 09:05 pm");
    }
}
