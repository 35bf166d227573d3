// src/application/commands/contact/mod.rs
mod service;
mod submit;

pub use service::{ContactCommandService, ContactSettings};
pub use submit::{SubmitContactCommand, SubmitContactCommandBuilder};
