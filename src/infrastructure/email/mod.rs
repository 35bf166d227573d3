// src/infrastructure/email/mod.rs
pub mod postmark;

pub use postmark::PostmarkEmailSender;
