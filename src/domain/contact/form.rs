// src/domain/contact/form.rs
use super::entity::ContactSubmission;
use super::value_objects::{
    AnnualRevenue, ContactMessage, EmailAddress, PersonName, PhoneNumber, Service,
};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

pub const FIELD_FIRST_NAME: &str = "first-name";
pub const FIELD_LAST_NAME: &str = "last-name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE_NUMBER: &str = "phone-number";
pub const FIELD_ANNUAL_REVENUE: &str = "annual-revenue";
pub const FIELD_SERVICES: &str = "services";
pub const FIELD_MESSAGE: &str = "message";

/// Contact form fields exactly as the visitor submitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormInput {
    #[serde(rename = "first-name")]
    pub first_name: String,
    #[serde(rename = "last-name")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "phone-number")]
    pub phone_number: String,
    #[serde(rename = "annual-revenue")]
    pub annual_revenue: String,
    pub services: Vec<String>,
    pub message: String,
}

impl ContactFormInput {
    /// Trim every text field and drop blank service values.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            annual_revenue: self.annual_revenue.trim().to_string(),
            services: self
                .services
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            message: self.message.trim().to_string(),
        }
    }

    /// Check every field and build a [`ContactSubmission`]. Each field
    /// reports at most one message: the first rule it breaks.
    pub fn validate(&self) -> Result<ContactSubmission, ValidationReport> {
        let mut errors = FieldErrors::default();

        let first_name = errors.check(
            FIELD_FIRST_NAME,
            PersonName::parse("First name", &self.first_name),
        );
        let last_name = errors.check(
            FIELD_LAST_NAME,
            PersonName::parse("Last name", &self.last_name),
        );
        let email = errors.check(FIELD_EMAIL, EmailAddress::parse(&self.email));
        let phone_number = errors.check(FIELD_PHONE_NUMBER, PhoneNumber::parse(&self.phone_number));
        let annual_revenue = errors.check(
            FIELD_ANNUAL_REVENUE,
            AnnualRevenue::parse(&self.annual_revenue),
        );
        let services = errors.check(FIELD_SERVICES, parse_services(&self.services));
        let message = errors.check(FIELD_MESSAGE, ContactMessage::parse(&self.message));

        match (
            first_name,
            last_name,
            email,
            phone_number,
            annual_revenue,
            services,
            message,
        ) {
            (
                Some(first_name),
                Some(last_name),
                Some(email),
                Some(phone_number),
                Some(annual_revenue),
                Some(services),
                Some(message),
            ) if errors.is_empty() => Ok(ContactSubmission::new(
                first_name,
                last_name,
                email,
                phone_number,
                annual_revenue,
                services,
                message,
            )),
            _ => Err(ValidationReport {
                errors: errors.into_inner(),
                data: self.clone(),
            }),
        }
    }
}

fn parse_services(raw: &[String]) -> Result<Vec<Service>, String> {
    if raw.is_empty() {
        return Err("Please select at least one service you're interested in".into());
    }
    let mut services = Vec::with_capacity(raw.len());
    for code in raw {
        let service: Service = code
            .parse()
            .map_err(|()| format!("Invalid service selected: {code}"))?;
        if !services.contains(&service) {
            services.push(service);
        }
    }
    Ok(services)
}

#[derive(Default)]
struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.0.entry(field.to_string()).or_default().push(message);
                None
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

/// Field-scoped validation failures together with the rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: BTreeMap<String, Vec<String>>,
    pub data: ContactFormInput,
}

impl ValidationReport {
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[][..], Vec::as_slice)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "{} field(s) rejected: {}", fields.len(), fields.join(", "))
    }
}
