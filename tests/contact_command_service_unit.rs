use std::sync::Arc;

mod support;

use momentum_site::application::commands::contact::SubmitContactCommand;
use momentum_site::application::dto::ContactOutcome;
use momentum_site::application::error::ApplicationError;
use momentum_site::domain::errors::DomainError;
use support::{
    ContactFormBuilder, MAIL_FROM, OWNER_INBOX, RecordingEmailSender, StaticVerifier,
    VerifierMode, contact_service, transport_failure,
};

fn command(form: ContactFormBuilder) -> SubmitContactCommand {
    SubmitContactCommand::builder()
        .form(form.build())
        .remote_ip("203.0.113.7")
        .build()
        .unwrap()
}

#[tokio::test]
async fn valid_submission_notifies_owner_then_thanks_visitor() {
    let sender = Arc::new(RecordingEmailSender::new());
    let service = contact_service(sender.clone(), Arc::new(StaticVerifier::disabled()));

    let outcome = service
        .submit_contact(command(ContactFormBuilder::new()))
        .await
        .unwrap();

    let ContactOutcome::Accepted(receipt) = outcome else {
        panic!("expected accepted outcome");
    };
    assert!(receipt.client_email_sent());
    assert!(receipt.thank_you_email_sent());
    assert_eq!(receipt.first_name, "Jane");
    assert_eq!(receipt.email, "jane@bakery.example");

    let sent = sender.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, OWNER_INBOX);
    assert_eq!(sent[0].from, MAIL_FROM);
    assert_eq!(
        sent[0].subject,
        "New Lead: Contact Form Submission - Jane Doe"
    );
    assert!(sent[0].text_body.contains("Monday, January 1, 2024 at 12:00 AM UTC"));
    assert!(sent[0].html_body.contains("Essentials Package"));
    assert!(sent[0].text_body.contains("* QuickBooks Cleanup"));
    assert_eq!(sent[1].to, "jane@bakery.example");
    assert_eq!(
        sent[1].subject,
        "Thank you for your interest in Momentum Business Solutions"
    );
}

#[tokio::test]
async fn invalid_submission_sends_nothing() {
    let sender = Arc::new(RecordingEmailSender::new());
    let service = contact_service(sender.clone(), Arc::new(StaticVerifier::disabled()));

    let err = service
        .submit_contact(command(
            ContactFormBuilder::new().services(&[]).email("not-an-email"),
        ))
        .await
        .unwrap_err();

    match err {
        ApplicationError::Domain(DomainError::InvalidSubmission(report)) => {
            assert_eq!(
                report.messages("services"),
                ["Please select at least one service you're interested in"]
            );
            assert_eq!(
                report.messages("email"),
                ["Please enter a valid email address"]
            );
            assert!(!report.has_error("first-name"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn rejected_submission_echoes_raw_input() {
    let sender = Arc::new(RecordingEmailSender::new());
    let service = contact_service(sender.clone(), Arc::new(StaticVerifier::disabled()));

    let err = service
        .submit_contact(command(
            ContactFormBuilder::new()
                .first_name("  J ")
                .services(&["", "  "]),
        ))
        .await
        .unwrap_err();

    match err {
        ApplicationError::Domain(DomainError::InvalidSubmission(report)) => {
            assert!(report.has_error("first-name"));
            assert!(report.has_error("services"));
            assert_eq!(report.data.first_name, "  J ");
            assert_eq!(report.data.services, ["", "  "]);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn notification_failure_skips_thank_you() {
    let sender = Arc::new(RecordingEmailSender::scripted(vec![transport_failure(
        "connection reset",
    )]));
    let service = contact_service(sender.clone(), Arc::new(StaticVerifier::disabled()));

    let err = service
        .submit_contact(command(ContactFormBuilder::new()))
        .await
        .unwrap_err();

    match err {
        ApplicationError::Delivery(message) => {
            assert!(message.starts_with("Failed to send client notification"));
            assert!(message.contains("connection reset"));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(sender.sent().len(), 1);
}

#[tokio::test]
async fn thank_you_failure_still_accepts_submission() {
    let sender = Arc::new(RecordingEmailSender::scripted(vec![
        Ok(()),
        transport_failure("mailbox unavailable"),
    ]));
    let service = contact_service(sender.clone(), Arc::new(StaticVerifier::disabled()));

    let outcome = service
        .submit_contact(command(ContactFormBuilder::new()))
        .await
        .unwrap();

    let ContactOutcome::Accepted(receipt) = outcome else {
        panic!("expected accepted outcome");
    };
    assert!(receipt.client_email_sent());
    assert!(!receipt.thank_you_email_sent());
    assert!(
        receipt
            .thank_you
            .error
            .as_deref()
            .is_some_and(|e| e.contains("mailbox unavailable"))
    );
    assert_eq!(sender.sent().len(), 2);
}

#[tokio::test]
async fn honeypot_discards_without_sending() {
    let sender = Arc::new(RecordingEmailSender::new());
    let verifier = Arc::new(StaticVerifier::new(VerifierMode::Pass));
    let service = contact_service(sender.clone(), verifier.clone());

    let cmd = SubmitContactCommand::builder()
        .form(ContactFormBuilder::new().services(&[]).build())
        .honeypot("https://spam.example")
        .build()
        .unwrap();

    let outcome = service.submit_contact(cmd).await.unwrap();
    assert_eq!(outcome, ContactOutcome::Discarded);
    assert!(sender.sent().is_empty());
    assert!(verifier.tokens().is_empty());
}

#[tokio::test]
async fn blank_honeypot_is_ignored() {
    let sender = Arc::new(RecordingEmailSender::new());
    let service = contact_service(sender.clone(), Arc::new(StaticVerifier::disabled()));

    let cmd = SubmitContactCommand::builder()
        .form(ContactFormBuilder::new().build())
        .honeypot("   ")
        .build()
        .unwrap();

    let outcome = service.submit_contact(cmd).await.unwrap();
    assert!(matches!(outcome, ContactOutcome::Accepted(_)));
    assert_eq!(sender.sent().len(), 2);
}

#[tokio::test]
async fn missing_token_fails_when_verification_enabled() {
    let sender = Arc::new(RecordingEmailSender::new());
    let verifier = Arc::new(StaticVerifier::new(VerifierMode::Pass));
    let service = contact_service(sender.clone(), verifier.clone());

    let err = service
        .submit_contact(command(ContactFormBuilder::new()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, ApplicationError::Validation(ref msg) if msg == "Please complete the security check")
    );
    assert!(verifier.tokens().is_empty());
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn passing_token_reaches_verifier() {
    let sender = Arc::new(RecordingEmailSender::new());
    let verifier = Arc::new(StaticVerifier::new(VerifierMode::Pass));
    let service = contact_service(sender.clone(), verifier.clone());

    let cmd = SubmitContactCommand::builder()
        .form(ContactFormBuilder::new().build())
        .verification_token(" token-123 ")
        .build()
        .unwrap();

    let outcome = service.submit_contact(cmd).await.unwrap();
    assert!(matches!(outcome, ContactOutcome::Accepted(_)));
    assert_eq!(verifier.tokens(), ["token-123"]);
}

#[tokio::test]
async fn rejected_token_is_a_validation_error() {
    let sender = Arc::new(RecordingEmailSender::new());
    let service = contact_service(
        sender.clone(),
        Arc::new(StaticVerifier::new(VerifierMode::Reject)),
    );

    let cmd = SubmitContactCommand::builder()
        .form(ContactFormBuilder::new().build())
        .verification_token("bad")
        .build()
        .unwrap();

    let err = service.submit_contact(cmd).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
    assert!(sender.sent().is_empty());
}

#[tokio::test]
async fn unreachable_verifier_is_unavailable() {
    let sender = Arc::new(RecordingEmailSender::new());
    let service = contact_service(
        sender.clone(),
        Arc::new(StaticVerifier::new(VerifierMode::Unreachable)),
    );

    let cmd = SubmitContactCommand::builder()
        .form(ContactFormBuilder::new().build())
        .verification_token("token")
        .build()
        .unwrap();

    let err = service.submit_contact(cmd).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Unavailable(_)));
    assert!(sender.sent().is_empty());
}

#[test]
fn builder_requires_form() {
    assert!(SubmitContactCommand::builder().build().is_err());
}
