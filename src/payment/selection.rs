use super::catalog::{price_of, Category, Service};

pub const BILLING_COUNTRY: &str = "Australia";

/// How the payable amount is obtained. One strategy per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingStrategy {
    /// Amount is looked up from the fixed price table.
    PriceTable,
    /// Customer types the invoice amount.
    UserEntered,
}

impl PricingStrategy {
    pub fn from_setting(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "table" | "price-table" => Some(PricingStrategy::PriceTable),
            "entry" | "user-entered" | "free" => Some(PricingStrategy::UserEntered),
            _ => None,
        }
    }

    /// Billing address fields the form shows for this strategy.
    pub fn billing_fields(self) -> &'static [FormField] {
        match self {
            PricingStrategy::PriceTable => &[
                FormField::Street,
                FormField::Suburb,
                FormField::City,
                FormField::State,
                FormField::Postcode,
            ],
            PricingStrategy::UserEntered => &[
                FormField::Street,
                FormField::State,
                FormField::City,
                FormField::Postcode,
            ],
        }
    }
}

/// Free-text fields with no derivation attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Email,
    CardholderName,
    CardNumber,
    ExpiryDate,
    Cvv,
    Street,
    Suburb,
    City,
    State,
    Postcode,
}

impl FormField {
    pub fn placeholder(self) -> &'static str {
        match self {
            FormField::Email => "your@email.com",
            FormField::CardholderName => "John Doe",
            FormField::CardNumber => "1234 5678 9012 3456",
            FormField::ExpiryDate => "MM/YY",
            FormField::Cvv => "123",
            FormField::Street => "123 Main Street",
            FormField::Suburb => "Suburb",
            FormField::City => "City",
            FormField::State => "State/Province",
            FormField::Postcode => "Post Code",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BillingAddress {
    pub street: String,
    pub suburb: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub country: String,
}

impl Default for BillingAddress {
    fn default() -> Self {
        Self {
            street: String::new(),
            suburb: String::new(),
            city: String::new(),
            state: String::new(),
            postcode: String::new(),
            country: BILLING_COUNTRY.to_string(),
        }
    }
}

/// Everything the payment form holds for the current visit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub category: Option<Category>,
    pub service: Option<Service>,
    pub amount: f64,
    pub email: String,
    pub cardholder_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub billing: BillingAddress,
}

/// The closed set of edits the form can make.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    SetCategory(Option<Category>),
    SetService(Option<Service>),
    SetAmount(String),
    SetField(FormField, String),
}

impl Selection {
    /// Returns the state after `update`. Pure: same inputs, same output.
    pub fn apply(&self, strategy: PricingStrategy, update: FieldUpdate) -> Selection {
        let mut next = self.clone();
        match update {
            FieldUpdate::SetCategory(category) => {
                next.category = category;
                next.service = None;
                next.amount = 0.0;
            }
            FieldUpdate::SetService(service) => {
                // A service from another category would break the pairing
                let service = match (next.category, service) {
                    (Some(category), Some(service)) if service.category() == category => {
                        Some(service)
                    }
                    _ => None,
                };
                next.service = service;
                if strategy == PricingStrategy::PriceTable {
                    next.amount = next
                        .category
                        .zip(service)
                        .and_then(|(category, service)| price_of(category, service))
                        .unwrap_or(0.0);
                }
            }
            FieldUpdate::SetAmount(text) => {
                if strategy == PricingStrategy::UserEntered {
                    next.amount = parse_amount(&text);
                }
            }
            FieldUpdate::SetField(field, value) => {
                *next.field_mut(field) = value;
            }
        }
        next
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::CardholderName => &self.cardholder_name,
            FormField::CardNumber => &self.card_number,
            FormField::ExpiryDate => &self.expiry_date,
            FormField::Cvv => &self.cvv,
            FormField::Street => &self.billing.street,
            FormField::Suburb => &self.billing.suburb,
            FormField::City => &self.billing.city,
            FormField::State => &self.billing.state,
            FormField::Postcode => &self.billing.postcode,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Email => &mut self.email,
            FormField::CardholderName => &mut self.cardholder_name,
            FormField::CardNumber => &mut self.card_number,
            FormField::ExpiryDate => &mut self.expiry_date,
            FormField::Cvv => &mut self.cvv,
            FormField::Street => &mut self.billing.street,
            FormField::Suburb => &mut self.billing.suburb,
            FormField::City => &mut self.billing.city,
            FormField::State => &mut self.billing.state,
            FormField::Postcode => &mut self.billing.postcode,
        }
    }

    /// Pay button is live once a service is picked and there is something to charge.
    pub fn can_submit(&self) -> bool {
        self.service.is_some() && self.amount > 0.0
    }
}

/// Non-negative decimal from user text; anything else is 0.
pub fn parse_amount(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(strategy: PricingStrategy, category: &str, service: &str) -> Selection {
        let category = Category::from_label(category).unwrap();
        let service = Service::from_label(category, service).unwrap();
        Selection::default()
            .apply(strategy, FieldUpdate::SetCategory(Some(category)))
            .apply(strategy, FieldUpdate::SetService(Some(service)))
    }

    #[test]
    fn test_category_change_resets_dependents() {
        for strategy in [PricingStrategy::PriceTable, PricingStrategy::UserEntered] {
            let state = pick(strategy, "Cloud Computing", "Cost Optimization")
                .apply(strategy, FieldUpdate::SetAmount("120".into()));
            for category in [None, Some(Category::DataManagement), Some(Category::CloudComputing)] {
                let next = state.apply(strategy, FieldUpdate::SetCategory(category));
                assert_eq!(next.category, category);
                assert_eq!(next.service, None);
                assert_eq!(next.amount, 0.0);
            }
        }
    }

    #[test]
    fn test_price_table_derives_amount() {
        let strategy = PricingStrategy::PriceTable;
        for category in Category::ALL {
            for service in category.services() {
                let state = Selection::default()
                    .apply(strategy, FieldUpdate::SetCategory(Some(category)))
                    .apply(strategy, FieldUpdate::SetService(Some(*service)));
                assert_eq!(state.amount, service.price());
            }
        }

        let cleared = pick(strategy, "Data Management", "Data Governance")
            .apply(strategy, FieldUpdate::SetService(None));
        assert_eq!(cleared.service, None);
        assert_eq!(cleared.amount, 0.0);
    }

    #[test]
    fn test_price_table_ignores_typed_amount() {
        let strategy = PricingStrategy::PriceTable;
        let state = pick(strategy, "Cloud Computing", "Strategy & Migration");
        let next = state.apply(strategy, FieldUpdate::SetAmount("1".into()));
        assert_eq!(next.amount, 2999.0);
    }

    #[test]
    fn test_service_outside_category_is_rejected() {
        let strategy = PricingStrategy::PriceTable;
        let state = Selection::default()
            .apply(strategy, FieldUpdate::SetCategory(Some(Category::ItSupport)))
            .apply(strategy, FieldUpdate::SetService(Some(Service::BigDataAndAnalytics)));
        assert_eq!(state.service, None);
        assert_eq!(state.amount, 0.0);

        let no_category = Selection::default()
            .apply(strategy, FieldUpdate::SetService(Some(Service::Cybersecurity)));
        assert_eq!(no_category.service, None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("150.5"), 150.5);
        assert_eq!(parse_amount(" 42 "), 42.0);
        assert_eq!(parse_amount("-10"), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
    }

    #[test]
    fn test_free_entry_amount_untouched_by_service_pick() {
        let strategy = PricingStrategy::UserEntered;
        let state = pick(strategy, "Cloud Computing", "Cost Optimization")
            .apply(strategy, FieldUpdate::SetAmount("300".into()))
            .apply(strategy, FieldUpdate::SetService(Some(Service::StrategyAndMigration)));
        assert_eq!(state.service, Some(Service::StrategyAndMigration));
        assert_eq!(state.amount, 300.0);
    }

    #[test]
    fn test_updates_are_idempotent() {
        let updates = [
            FieldUpdate::SetCategory(Some(Category::DataManagement)),
            FieldUpdate::SetService(Some(Service::DataGovernance)),
            FieldUpdate::SetAmount("99.99".into()),
            FieldUpdate::SetField(FormField::Email, "a@b.co".into()),
        ];
        for strategy in [PricingStrategy::PriceTable, PricingStrategy::UserEntered] {
            let mut state = Selection::default();
            for update in updates.iter().cloned() {
                let once = state.apply(strategy, update.clone());
                let twice = once.apply(strategy, update);
                assert_eq!(once, twice);
                state = once;
            }
        }
    }

    #[test]
    fn test_other_fields_are_set_verbatim() {
        let state = Selection::default()
            .apply(PricingStrategy::UserEntered, FieldUpdate::SetField(FormField::CardNumber, " 4111 ".into()))
            .apply(PricingStrategy::UserEntered, FieldUpdate::SetField(FormField::Suburb, "Carlton".into()));
        assert_eq!(state.card_number, " 4111 ");
        assert_eq!(state.field(FormField::Suburb), "Carlton");
        assert_eq!(state.billing.country, BILLING_COUNTRY);
        assert_eq!(state.amount, 0.0);
    }

    #[test]
    fn test_cloud_strategy_scenario() {
        let table = pick(PricingStrategy::PriceTable, "Cloud Computing", "Strategy & Migration");
        assert_eq!(table.amount, 2999.0);
        assert!(table.can_submit());

        let entry = pick(PricingStrategy::UserEntered, "Cloud Computing", "Strategy & Migration");
        assert_eq!(entry.amount, 0.0);
        assert!(!entry.can_submit());
        let entry = entry.apply(PricingStrategy::UserEntered, FieldUpdate::SetAmount("500".into()));
        assert_eq!(entry.amount, 500.0);
        assert!(entry.can_submit());
    }

    #[test]
    fn test_switching_category_after_pricing_scenario() {
        let strategy = PricingStrategy::PriceTable;
        let state = pick(strategy, "Data Management", "Big Data & Analytics");
        assert_eq!(state.amount, 4999.0);

        let switched = state.apply(
            strategy,
            FieldUpdate::SetCategory(Category::from_label("IT Support & Managed Services")),
        );
        assert_eq!(switched.category, Some(Category::ItSupport));
        assert_eq!(switched.service, None);
        assert_eq!(switched.amount, 0.0);
    }

    #[test]
    fn test_strategy_setting() {
        assert_eq!(PricingStrategy::from_setting("TABLE"), Some(PricingStrategy::PriceTable));
        assert_eq!(PricingStrategy::from_setting("entry"), Some(PricingStrategy::UserEntered));
        assert_eq!(PricingStrategy::from_setting("auction"), None);
        assert!(PricingStrategy::PriceTable.billing_fields().contains(&FormField::Suburb));
        assert!(!PricingStrategy::UserEntered.billing_fields().contains(&FormField::Suburb));
    }
}
