/// Service categories offered on the payment form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CloudComputing,
    DataManagement,
    ItSupport,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::CloudComputing,
        Category::DataManagement,
        Category::ItSupport,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::CloudComputing => "Cloud Computing",
            Category::DataManagement => "Data Management",
            Category::ItSupport => "IT Support & Managed Services",
        }
    }

    /// Shorter title used on the landing page cards and contact form.
    pub fn headline(self) -> &'static str {
        match self {
            Category::ItSupport => "IT Support & Services",
            other => other.label(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    pub fn services(self) -> &'static [Service] {
        match self {
            Category::CloudComputing => &[
                Service::StrategyAndMigration,
                Service::ManagementAndSecurity,
                Service::CostOptimization,
            ],
            Category::DataManagement => &[
                Service::DatabaseAndWarehousing,
                Service::BigDataAndAnalytics,
                Service::DataGovernance,
            ],
            Category::ItSupport => &[
                Service::TechnicalSupport,
                Service::InfrastructureMonitoring,
                Service::Cybersecurity,
            ],
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::CloudComputing => "Strategic cloud adoption and management to help your business scale securely and cost-effectively.",
            Category::DataManagement => "Robust data infrastructure and analytics that turn data into business value.",
            Category::ItSupport => "Reliable 24/7 technical support and proactive infrastructure management to keep you running smoothly.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    StrategyAndMigration,
    ManagementAndSecurity,
    CostOptimization,
    DatabaseAndWarehousing,
    BigDataAndAnalytics,
    DataGovernance,
    TechnicalSupport,
    InfrastructureMonitoring,
    Cybersecurity,
}

impl Service {
    pub fn label(self) -> &'static str {
        match self {
            Service::StrategyAndMigration => "Strategy & Migration",
            Service::ManagementAndSecurity => "Management & Security",
            Service::CostOptimization => "Cost Optimization",
            Service::DatabaseAndWarehousing => "Database & Warehousing",
            Service::BigDataAndAnalytics => "Big Data & Analytics",
            Service::DataGovernance => "Data Governance",
            Service::TechnicalSupport => "24/7 Technical Support",
            Service::InfrastructureMonitoring => "Infrastructure Monitoring",
            Service::Cybersecurity => "Cybersecurity",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Service::StrategyAndMigration
            | Service::ManagementAndSecurity
            | Service::CostOptimization => Category::CloudComputing,
            Service::DatabaseAndWarehousing
            | Service::BigDataAndAnalytics
            | Service::DataGovernance => Category::DataManagement,
            Service::TechnicalSupport
            | Service::InfrastructureMonitoring
            | Service::Cybersecurity => Category::ItSupport,
        }
    }

    /// Looks a label up among the services of one category only.
    pub fn from_label(category: Category, label: &str) -> Option<Self> {
        category
            .services()
            .iter()
            .copied()
            .find(|s| s.label() == label)
    }

    /// Fixed price in AUD.
    pub fn price(self) -> f64 {
        match self {
            Service::StrategyAndMigration => 2999.0,
            Service::ManagementAndSecurity => 1999.0,
            Service::CostOptimization => 1499.0,
            Service::DatabaseAndWarehousing => 3499.0,
            Service::BigDataAndAnalytics => 4999.0,
            Service::DataGovernance => 2499.0,
            Service::TechnicalSupport => 999.0,
            Service::InfrastructureMonitoring => 1299.0,
            Service::Cybersecurity => 3999.0,
        }
    }
}

/// Table price for a pair, `None` when the service is not sold under the
/// category.
pub fn price_of(category: Category, service: Service) -> Option<f64> {
    (service.category() == category).then(|| service.price())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_service_belongs_to_its_category() {
        for category in Category::ALL {
            for service in category.services() {
                assert_eq!(service.category(), category);
            }
        }
    }

    #[test]
    fn test_labels_round_trip_through_lookup() {
        assert_eq!(
            Category::from_label("IT Support & Managed Services"),
            Some(Category::ItSupport)
        );
        assert_eq!(Category::from_label("IT Support & Services"), None);
        assert_eq!(
            Service::from_label(Category::CloudComputing, "Strategy & Migration"),
            Some(Service::StrategyAndMigration)
        );
        assert_eq!(
            Service::from_label(Category::DataManagement, "Strategy & Migration"),
            None
        );
    }

    #[test]
    fn test_price_table() {
        assert_eq!(
            price_of(Category::CloudComputing, Service::StrategyAndMigration),
            Some(2999.0)
        );
        assert_eq!(
            price_of(Category::DataManagement, Service::BigDataAndAnalytics),
            Some(4999.0)
        );
        assert_eq!(price_of(Category::ItSupport, Service::BigDataAndAnalytics), None);
    }
}
