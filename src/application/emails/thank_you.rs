// src/application/emails/thank_you.rs
use super::RenderedEmail;
use super::layout::{escape_html, html_document, html_footer, html_header};
use crate::domain::contact::{BusinessIdentity, ContactSubmission};

const THANK_YOU_STYLE: &str = r"
        .greeting { font-size: 20px; font-weight: 600; color: #1f2937; margin-bottom: 20px; }
        .main-content { font-size: 15px; margin-bottom: 24px; }
        .timeline-box { background: #f4f9f5; padding: 20px; border-radius: 8px; border-left: 4px solid #53945c; margin-bottom: 24px; }
        .timeline-box h3 { color: #53945c; margin-top: 0; }
        .contact-info { background: #dfe9fa; padding: 20px; border-radius: 8px; border-left: 4px solid #4f7ee2; margin-bottom: 24px; }
        .contact-info h3 { color: #4f7ee2; margin-top: 0; }
        .contact-detail { margin: 6px 0; }";

pub fn subject(identity: &BusinessIdentity) -> String {
    format!("Thank you for your interest in {}", identity.name)
}

/// Autoresponder for the visitor who filled in the form.
pub fn render(submission: &ContactSubmission, identity: &BusinessIdentity) -> RenderedEmail {
    RenderedEmail {
        subject: subject(identity),
        text_body: text_body(submission, identity),
        html_body: html_body(submission, identity),
    }
}

fn html_body(submission: &ContactSubmission, identity: &BusinessIdentity) -> String {
    let name = escape_html(&identity.name);
    let body = format!(
        r#"{header}

        <div class="greeting">
            Thank you, {first_name}!
        </div>

        <div class="main-content">
            <p>We sincerely appreciate you taking the time to reach out to {name}. Your inquiry about our financial management services has been received and is very important to us.</p>

            <p>We understand that managing your business finances can be complex, and we're here to handle the bookkeeping, payroll, and reporting so you can focus on what you do best - growing your business.</p>
        </div>

        <div class="timeline-box">
            <h3>What Happens Next?</h3>
            <p><strong>Within 24 hours:</strong> {person} from our team will personally review your submission and reach out to discuss your specific needs and how we can best support your business goals.</p>
        </div>

        <div class="contact-info">
            <h3>In the Meantime</h3>
            <p>If you have any urgent questions or would like to speak with us immediately, please don't hesitate to reach out:</p>
            <div class="contact-detail"><strong>Email:</strong> {email}</div>
            <div class="contact-detail"><strong>Phone:</strong> {phone}</div>
        </div>

        <div class="main-content">
            <p>We look forward to the opportunity to partner with you and help your business achieve its financial goals.</p>

            <p>Best regards,<br>
            <strong>The {name} Team</strong></p>
        </div>

{footer}"#,
        header = html_header(identity, None),
        first_name = escape_html(submission.first_name().as_str()),
        person = escape_html(&identity.contact_person),
        email = escape_html(&identity.email),
        phone = escape_html(&identity.phone),
        footer = html_footer(identity),
    );

    html_document(
        &format!("Thank You for Your Interest - {}", identity.name),
        THANK_YOU_STYLE,
        &body,
    )
}

fn text_body(submission: &ContactSubmission, identity: &BusinessIdentity) -> String {
    format!(
        "Thank you, {first_name}!

We sincerely appreciate you taking the time to reach out to {name}. Your inquiry about our financial management services has been received and is very important to us.

We understand that managing your business finances can be complex, and we're here to handle the bookkeeping, payroll, and reporting so you can focus on what you do best - growing your business.

WHAT HAPPENS NEXT?
Within 24 hours: {person} from our team will personally review your submission and reach out to discuss your specific needs and how we can best support your business goals.

IN THE MEANTIME:
If you have any urgent questions or would like to speak with us immediately, please don't hesitate to reach out:

Email: {email}
Phone: {phone}

We look forward to the opportunity to partner with you and help your business achieve its financial goals.

Best regards,
The {name} Team

---
{name}
{tagline}

{offerings}
Email: {email} | Phone: {phone}
",
        first_name = submission.first_name(),
        name = identity.name,
        person = identity.contact_person,
        email = identity.email,
        phone = identity.phone,
        tagline = identity.tagline,
        offerings = identity.offerings,
    )
}
