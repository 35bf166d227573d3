// src/application/commands/contact/submit.rs
use super::ContactCommandService;
use crate::{
    application::{
        dto::{ContactOutcome, ContactReceipt, EmailDispatchResult},
        emails::{self, RenderedEmail},
        error::{ApplicationError, ApplicationResult},
        ports::email::OutboundEmail,
    },
    domain::{
        contact::{ContactFormInput, ContactSubmission},
        errors::DomainError,
    },
};

pub struct SubmitContactCommand {
    pub form: ContactFormInput,
    /// Hidden `website` field. People never see it, bots fill it in.
    pub honeypot: Option<String>,
    pub verification_token: Option<String>,
    pub remote_ip: Option<String>,
}

impl SubmitContactCommand {
    pub fn builder() -> SubmitContactCommandBuilder {
        SubmitContactCommandBuilder::default()
    }

    fn honeypot_triggered(&self) -> bool {
        self.honeypot
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }
}

#[derive(Default)]
pub struct SubmitContactCommandBuilder {
    form: Option<ContactFormInput>,
    honeypot: Option<String>,
    verification_token: Option<String>,
    remote_ip: Option<String>,
}

impl SubmitContactCommandBuilder {
    #[must_use]
    pub fn form(mut self, form: ContactFormInput) -> Self {
        self.form = Some(form);
        self
    }

    #[must_use]
    pub fn honeypot(mut self, value: impl Into<String>) -> Self {
        self.honeypot = Some(value.into());
        self
    }

    #[must_use]
    pub fn verification_token(mut self, token: impl Into<String>) -> Self {
        self.verification_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn remote_ip(mut self, ip: impl Into<String>) -> Self {
        self.remote_ip = Some(ip.into());
        self
    }

    pub fn build(self) -> Result<SubmitContactCommand, &'static str> {
        Ok(SubmitContactCommand {
            form: self.form.ok_or("form is required")?,
            honeypot: self.honeypot,
            verification_token: self.verification_token,
            remote_ip: self.remote_ip,
        })
    }
}

impl ContactCommandService {
    /// Validate a contact submission, notify the owner, then thank the
    /// visitor. Only the owner notification has to succeed.
    pub async fn submit_contact(
        &self,
        command: SubmitContactCommand,
    ) -> ApplicationResult<ContactOutcome> {
        if command.honeypot_triggered() {
            tracing::warn!(
                remote_ip = command.remote_ip.as_deref().unwrap_or("unknown"),
                "honeypot triggered, discarding submission"
            );
            return Ok(ContactOutcome::Discarded);
        }

        self.ensure_human(&command).await?;

        let raw = command.form;
        let submission = raw.clone().normalized().validate().map_err(|mut report| {
            tracing::info!(fields = %report, "contact form rejected");
            // Echo what the visitor sent, not the trimmed copy.
            report.data = raw;
            DomainError::InvalidSubmission(report)
        })?;

        let notification = self.send_notification(&submission).await;
        if let Some(error) = notification.error.as_deref() {
            tracing::error!(error, "lead notification failed");
            return Err(ApplicationError::delivery(format!(
                "Failed to send client notification: {error}"
            )));
        }

        let thank_you = self.send_thank_you(&submission).await;
        if let Some(error) = thank_you.error.as_deref() {
            tracing::warn!(
                error,
                "thank-you email failed, lead notification was delivered"
            );
        }

        tracing::info!(
            name = %submission.full_name(),
            email = %submission.email(),
            services = submission.services().len(),
            "contact form submitted"
        );

        Ok(ContactOutcome::Accepted(ContactReceipt {
            first_name: submission.first_name().to_string(),
            email: submission.email().to_string(),
            notification,
            thank_you,
        }))
    }

    async fn ensure_human(&self, command: &SubmitContactCommand) -> ApplicationResult<()> {
        if !self.verifier.is_enabled() {
            return Ok(());
        }

        let token = command
            .verification_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                tracing::info!(
                    remote_ip = command.remote_ip.as_deref().unwrap_or("unknown"),
                    "missing verification token"
                );
                ApplicationError::validation("Please complete the security check")
            })?;

        match self.verifier.verify(token, command.remote_ip.as_deref()).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::info!(
                    remote_ip = command.remote_ip.as_deref().unwrap_or("unknown"),
                    "verification rejected"
                );
                Err(ApplicationError::validation(
                    "Security check failed. Please try again.",
                ))
            }
            Err(err) => {
                tracing::error!(error = %err, "verification request failed");
                Err(ApplicationError::unavailable(
                    "Security verification failed. Please try again.",
                ))
            }
        }
    }

    async fn send_notification(&self, submission: &ContactSubmission) -> EmailDispatchResult {
        let rendered = emails::notification::render(
            submission,
            &self.settings.identity,
            self.clock.now(),
        );
        self.dispatch(self.settings.owner_inbox.clone(), rendered).await
    }

    async fn send_thank_you(&self, submission: &ContactSubmission) -> EmailDispatchResult {
        let rendered = emails::thank_you::render(submission, &self.settings.identity);
        self.dispatch(submission.email().to_string(), rendered).await
    }

    async fn dispatch(&self, to: String, rendered: RenderedEmail) -> EmailDispatchResult {
        let email = OutboundEmail {
            from: self.settings.from.clone(),
            to,
            subject: rendered.subject,
            text_body: rendered.text_body,
            html_body: rendered.html_body,
        };
        self.email_sender.send(&email).await.into()
    }
}
