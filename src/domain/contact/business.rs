// src/domain/contact/business.rs

/// Who the site speaks for. Shared by every outgoing email template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessIdentity {
    pub name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    /// Footer line listing what the business offers.
    pub offerings: String,
    /// Person who follows up on new leads.
    pub contact_person: String,
}

impl Default for BusinessIdentity {
    fn default() -> Self {
        Self {
            name: "Momentum Business Solutions".into(),
            tagline: "Where Strategy Meets Execution".into(),
            email: "cade@momentumbusiness.org".into(),
            phone: "(509) 554-8022".into(),
            offerings: "QuickBooks Online | Payroll Processing | Financial Consulting | Strategic Planning"
                .into(),
            contact_person: "Cade".into(),
        }
    }
}
