// src/application/emails/notification.rs
use super::RenderedEmail;
use super::layout::{escape_html, html_document, html_footer, html_header};
use crate::domain::contact::{BusinessIdentity, ContactSubmission};
use chrono::{DateTime, Utc};
use std::fmt::Write as _;

const NOTIFICATION_STYLE: &str = r"
        .lead-priority { display: inline-block; background: #53945c; color: white; padding: 6px 16px; border-radius: 20px; font-size: 13px; font-weight: 600; margin-top: 12px; }
        .info-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 20px; }
        .info-item { background: #f4f9f5; padding: 16px; border-radius: 8px; border-left: 4px solid #53945c; }
        .info-label { font-weight: 600; color: #374151; font-size: 14px; margin-bottom: 6px; text-transform: uppercase; letter-spacing: 0.5px; }
        .info-value { color: #1f2937; font-size: 15px; font-weight: 500; }
        .revenue-highlight { background: #dfe9fa; border-left-color: #4f7ee2; }
        .services-list { background: #dfe9fa; padding: 20px; border-radius: 8px; border-left: 4px solid #4f7ee2; }
        .service-tag { display: inline-block; background: #53945c; color: white; padding: 6px 14px; border-radius: 18px; font-size: 13px; font-weight: 500; margin-right: 10px; margin-bottom: 6px; }
        .service-tag.bookkeeping { background: #53945c; }
        .service-tag.payroll { background: #4f7ee2; }
        .service-tag.consulting { background: #417848; }
        .service-tag.cleanup { background: #709fea; }
        .message-box { background: #f8fafc; border: 2px solid #e2e8f0; border-radius: 8px; padding: 20px; font-style: italic; color: #475569; line-height: 1.7; }
        .submission-meta { background: #f1f5f9; padding: 12px 16px; border-radius: 6px; font-size: 12px; color: #64748b; margin-bottom: 20px; }";

pub fn subject(submission: &ContactSubmission) -> String {
    format!(
        "New Lead: Contact Form Submission - {}",
        submission.full_name()
    )
}

pub fn format_timestamp(submitted_at: DateTime<Utc>) -> String {
    submitted_at
        .format("%A, %B %-d, %Y at %-I:%M %p UTC")
        .to_string()
}

/// Lead notification for the business owner.
pub fn render(
    submission: &ContactSubmission,
    identity: &BusinessIdentity,
    submitted_at: DateTime<Utc>,
) -> RenderedEmail {
    let subject = subject(submission);
    let timestamp = format_timestamp(submitted_at);
    RenderedEmail {
        html_body: html_body(submission, identity, &subject, &timestamp),
        text_body: text_body(submission, identity, &timestamp),
        subject,
    }
}

fn html_body(
    submission: &ContactSubmission,
    identity: &BusinessIdentity,
    subject: &str,
    timestamp: &str,
) -> String {
    let service_tags = submission
        .services()
        .iter()
        .map(|service| {
            format!(
                r#"<span class="service-tag {}">{}</span>"#,
                service.tag_class(),
                service.label()
            )
        })
        .collect::<String>();

    let message_section = submission
        .message()
        .map(|message| {
            format!(
                r#"
        <div class="section">
            <h2>Client Message</h2>
            <div class="message-box">
                "{}"
            </div>
        </div>
"#,
                escape_html(message.as_str())
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"{header}

        <div class="submission-meta">
            <strong>Submitted:</strong> {timestamp} | <strong>Source:</strong> Website Contact Form
        </div>

        <div class="section">
            <h2>Contact Information</h2>
            <div class="info-grid">
                <div class="info-item">
                    <div class="info-label">Full Name</div>
                    <div class="info-value">{full_name}</div>
                </div>
                <div class="info-item">
                    <div class="info-label">Email Address</div>
                    <div class="info-value">{email}</div>
                </div>
                <div class="info-item">
                    <div class="info-label">Phone Number</div>
                    <div class="info-value">{phone}</div>
                </div>
                <div class="info-item revenue-highlight">
                    <div class="info-label">Annual Revenue</div>
                    <div class="info-value">{revenue}</div>
                </div>
            </div>
        </div>

        <div class="section">
            <h2>Services of Interest</h2>
            <div class="services-list">
                <div class="info-label" style="margin-bottom: 12px;">Client selected the following services:</div>
                {service_tags}
            </div>
        </div>
{message_section}
{footer}"#,
        header = html_header(identity, Some("New Qualified Lead")),
        full_name = escape_html(&submission.full_name()),
        email = escape_html(submission.email().as_str()),
        phone = escape_html(submission.phone_number().as_str()),
        revenue = submission.annual_revenue().label(),
        footer = html_footer(identity),
    );

    html_document(subject, NOTIFICATION_STYLE, &body)
}

fn text_body(submission: &ContactSubmission, identity: &BusinessIdentity, timestamp: &str) -> String {
    let mut services = String::new();
    for service in submission.services() {
        let _ = writeln!(services, "* {}", service.label());
    }

    let message = submission
        .message()
        .map(|message| {
            format!(
                "CLIENT MESSAGE:\n---------------\n\"{}\"\n\n",
                message.as_str()
            )
        })
        .unwrap_or_default();

    format!(
        "NEW QUALIFIED LEAD - {name}
===============================================

SUBMISSION DETAILS:
Submitted: {timestamp}
Source: Website Contact Form

CONTACT INFORMATION:
-------------------
Name: {full_name}
Email: {email}
Phone: {phone}
Annual Revenue: {revenue}

SERVICES OF INTEREST:
--------------------
Client selected the following services:
{services}
{message}CONTACT INFORMATION:
-------------------
{name}
{tagline}

{offerings}
Email: {business_email}
Phone: {business_phone}

---
This email was generated from your website contact form.
",
        name = identity.name,
        tagline = identity.tagline,
        offerings = identity.offerings,
        business_email = identity.email,
        business_phone = identity.phone,
        full_name = submission.full_name(),
        email = submission.email(),
        phone = submission.phone_number(),
        revenue = submission.annual_revenue().label(),
    )
}
