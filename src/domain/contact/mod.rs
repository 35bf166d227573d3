// src/domain/contact/mod.rs
pub mod business;
pub mod entity;
pub mod form;
pub mod value_objects;

pub use business::BusinessIdentity;
pub use entity::ContactSubmission;
pub use form::{ContactFormInput, ValidationReport};
pub use value_objects::{
    AnnualRevenue, ContactMessage, EmailAddress, PersonName, PhoneNumber, Service,
};
