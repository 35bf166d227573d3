// src/domain/contact/entity.rs
use super::value_objects::{
    AnnualRevenue, ContactMessage, EmailAddress, PersonName, PhoneNumber, Service,
};

/// A validated contact form submission. Only [`ContactFormInput::validate`]
/// can build one, so every instance satisfies the form rules.
///
/// [`ContactFormInput::validate`]: super::form::ContactFormInput::validate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    first_name: PersonName,
    last_name: PersonName,
    email: EmailAddress,
    phone_number: PhoneNumber,
    annual_revenue: AnnualRevenue,
    services: Vec<Service>,
    message: Option<ContactMessage>,
}

impl ContactSubmission {
    pub(super) fn new(
        first_name: PersonName,
        last_name: PersonName,
        email: EmailAddress,
        phone_number: PhoneNumber,
        annual_revenue: AnnualRevenue,
        services: Vec<Service>,
        message: Option<ContactMessage>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            phone_number,
            annual_revenue,
            services,
            message,
        }
    }

    pub const fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub const fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub const fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    pub const fn annual_revenue(&self) -> AnnualRevenue {
        self.annual_revenue
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub const fn message(&self) -> Option<&ContactMessage> {
        self.message.as_ref()
    }
}
