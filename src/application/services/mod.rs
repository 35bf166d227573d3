// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::contact::{ContactCommandService, ContactSettings},
        ports::{ClockPort, EmailSenderPort, HumanVerifierPort, SlugGeneratorPort},
    },
    domain::slug::BlogSlugService,
};

pub struct ApplicationServices {
    pub contact_commands: Arc<ContactCommandService>,
    pub slug_service: Arc<BlogSlugService>,
}

impl ApplicationServices {
    pub fn new(
        email_sender: Arc<EmailSenderPort>,
        verifier: Arc<HumanVerifierPort>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        contact_settings: ContactSettings,
    ) -> Self {
        let contact_commands = Arc::new(ContactCommandService::new(
            email_sender,
            verifier,
            clock,
            contact_settings,
        ));
        let slug_service = Arc::new(BlogSlugService::new(slugger));

        Self {
            contact_commands,
            slug_service,
        }
    }
}
