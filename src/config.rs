use crate::payment::selection::PricingStrategy;

// Values are baked in at build time (trunk passes the environment through).

pub const WHATSAPP_PHONE: &str = "61411851765";
pub const CONTACT_EMAIL: &str = "Infosofttech.info@gmail.com";
pub const COMPANY_NAME: &str = "Infosoft Technologies";
pub const LEGAL_NAME: &str = "Infosoft Tech PTY LTD";

pub fn get_emailjs_service_id() -> Option<&'static str> {
    non_empty(option_env!("EMAILJS_SERVICE_ID"))
}

pub fn get_emailjs_template_id() -> Option<&'static str> {
    non_empty(option_env!("EMAILJS_TEMPLATE_ID"))
}

pub fn get_emailjs_public_key() -> Option<&'static str> {
    non_empty(option_env!("EMAILJS_PUBLIC_KEY"))
}

/// Pricing strategy for this build. Unset or unknown falls back to user-entered amounts.
pub fn get_pricing_strategy() -> PricingStrategy {
    pricing_strategy_from(option_env!("INFOSOFT_PRICING"))
}

fn pricing_strategy_from(value: Option<&str>) -> PricingStrategy {
    match value {
        None => PricingStrategy::UserEntered,
        Some(raw) => PricingStrategy::from_setting(raw).unwrap_or_else(|| {
            log::warn!("Unknown INFOSOFT_PRICING value {:?}, using user-entered amounts", raw);
            PricingStrategy::UserEntered
        }),
    }
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
