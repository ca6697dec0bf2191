use chrono::{DateTime, TimeZone};
use chrono_tz::Australia::Melbourne;
use serde::Serialize;

use crate::config;
use crate::payment::catalog::Category;

pub const OTHER_SERVICE: &str = "Others";
const NOT_PROVIDED: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Service,
    Message,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

/// Named fields the email template expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateParams {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub time: String,
}

impl ContactForm {
    pub fn with(&self, field: ContactField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            ContactField::Name => next.name = value,
            ContactField::Email => next.email = value,
            ContactField::Company => next.company = value,
            ContactField::Service => next.service = value,
            ContactField::Message => next.message = value,
        }
        next
    }

    fn company_or_default(&self) -> &str {
        if self.company.is_empty() {
            NOT_PROVIDED
        } else {
            &self.company
        }
    }

    pub fn template_params<Tz: TimeZone>(&self, sent_at: DateTime<Tz>) -> TemplateParams {
        TemplateParams {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company_or_default().to_string(),
            service: self.service.clone(),
            message: self.message.clone(),
            time: melbourne_timestamp(sent_at),
        }
    }

    pub fn whatsapp_message(&self) -> String {
        format!(
            "Hi, I'm {} ({}) from {}.\nService Interested In: {}\nMessage: {}",
            self.name,
            self.email,
            self.company_or_default(),
            self.service,
            self.message
        )
    }

    pub fn whatsapp_url(&self) -> String {
        format!(
            "https://api.whatsapp.com/send?phone={}&text={}",
            config::WHATSAPP_PHONE,
            urlencoding::encode(&self.whatsapp_message())
        )
    }
}

/// Options offered in the contact form's service select.
pub fn service_options() -> Vec<&'static str> {
    Category::ALL
        .into_iter()
        .map(Category::headline)
        .chain(std::iter::once(OTHER_SERVICE))
        .collect()
}

/// e.g. `Thu, 15 Oct 2026, 09:05 pm`
pub fn melbourne_timestamp<Tz: TimeZone>(instant: DateTime<Tz>) -> String {
    instant
        .with_timezone(&Melbourne)
        .format("%a, %-d %b %Y, %I:%M %P")
        .to_string()
}
