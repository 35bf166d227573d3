// src/application/commands/contact/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{email::EmailSender, time::Clock, verification::HumanVerifier},
    domain::contact::BusinessIdentity,
};

/// Addresses and identity used when dispatching contact emails.
#[derive(Debug, Clone)]
pub struct ContactSettings {
    /// Sender address registered with the email provider.
    pub from: String,
    /// Inbox that receives lead notifications.
    pub owner_inbox: String,
    pub identity: BusinessIdentity,
}

pub struct ContactCommandService {
    pub(super) email_sender: Arc<dyn EmailSender>,
    pub(super) verifier: Arc<dyn HumanVerifier>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: ContactSettings,
}

impl ContactCommandService {
    pub fn new(
        email_sender: Arc<dyn EmailSender>,
        verifier: Arc<dyn HumanVerifier>,
        clock: Arc<dyn Clock>,
        settings: ContactSettings,
    ) -> Self {
        Self {
            email_sender,
            verifier,
            clock,
            settings,
        }
    }

    pub const fn settings(&self) -> &ContactSettings {
        &self.settings
    }
}
