// tests/support/builders.rs
use momentum_site::domain::contact::ContactFormInput;

/// Contact form that passes validation unless a setter breaks it.
pub struct ContactFormBuilder {
    input: ContactFormInput,
}

impl ContactFormBuilder {
    pub fn new() -> Self {
        Self {
            input: ContactFormInput {
                first_name: "Jane".into(),
                last_name: "Doe".into(),
                email: "jane@bakery.example".into(),
                phone_number: "(509) 555-0142".into(),
                annual_revenue: "100k-500k".into(),
                services: vec!["essentials".into(), "cleanup".into()],
                message: "We are two years behind on our books.".into(),
            },
        }
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.input.first_name = value.into();
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.input.email = value.into();
        self
    }

    pub fn services(mut self, services: &[&str]) -> Self {
        self.input.services = services.iter().map(|s| (*s).to_string()).collect();
        self
    }

    pub fn message(mut self, value: impl Into<String>) -> Self {
        self.input.message = value.into();
        self
    }

    pub fn build(self) -> ContactFormInput {
        self.input
    }

    /// Field pairs as a browser would post them, one `services` pair per
    /// selected checkbox.
    pub fn pairs(&self) -> Vec<(String, String)> {
        let input = &self.input;
        let mut pairs = vec![
            ("first-name".to_string(), input.first_name.clone()),
            ("last-name".to_string(), input.last_name.clone()),
            ("email".to_string(), input.email.clone()),
            ("phone-number".to_string(), input.phone_number.clone()),
            ("annual-revenue".to_string(), input.annual_revenue.clone()),
        ];
        pairs.extend(
            input
                .services
                .iter()
                .map(|service| ("services".to_string(), service.clone())),
        );
        pairs.push(("message".to_string(), input.message.clone()));
        pairs
    }
}

impl Default for ContactFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}
