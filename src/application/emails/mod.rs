// src/application/emails/mod.rs
//! Templates for the two messages sent per contact submission.

mod layout;
pub mod notification;
pub mod thank_you;

pub use layout::escape_html;

/// Subject plus both bodies of one email, ready to be addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}
