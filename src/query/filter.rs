// src/query/filter.rs

//! Category filter over student services.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::models::{Service, ServiceCategory};
use crate::utils::fold_case;

/// Audience filter selected by the user.
///
/// "All Students" services only show up under [`ServiceFilter::All`]; the
/// category is a value of its own, not a wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceFilter {
    #[default]
    All,
    Senior,
    Newcomer,
}

impl ServiceFilter {
    /// Parse a filter name. Unknown names fall back to `All`.
    pub fn parse(value: &str) -> Self {
        match fold_case(value.trim()).as_str() {
            "senior" | "senior students" => ServiceFilter::Senior,
            "newcomer" | "newcomer students" => ServiceFilter::Newcomer,
            "all" | "all students" | "" => ServiceFilter::All,
            other => {
                log::warn!("Unknown service filter '{}', showing all services", other);
                ServiceFilter::All
            }
        }
    }

    /// The category this filter keeps, or `None` for everything.
    fn category(&self) -> Option<ServiceCategory> {
        match self {
            ServiceFilter::All => None,
            ServiceFilter::Senior => Some(ServiceCategory::SeniorStudents),
            ServiceFilter::Newcomer => Some(ServiceCategory::NewcomerStudents),
        }
    }

    /// Whether a service passes this filter.
    pub fn matches(&self, service: &Service) -> bool {
        self.category()
            .is_none_or(|category| service.category == category)
    }
}

impl FromStr for ServiceFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for ServiceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceFilter::All => f.write_str("all"),
            ServiceFilter::Senior => f.write_str("senior"),
            ServiceFilter::Newcomer => f.write_str("newcomer"),
        }
    }
}

/// Services passing the filter, in their catalog order.
pub fn filter_services(services: &[Service], filter: ServiceFilter) -> Vec<&Service> {
    let filtered: Vec<&Service> = services.iter().filter(|s| filter.matches(s)).collect();
    log::debug!(
        "Filter '{}' kept {}/{} services",
        filter,
        filtered.len(),
        services.len()
    );
    filtered
}
