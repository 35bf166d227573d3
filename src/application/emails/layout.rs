// src/application/emails/layout.rs
use crate::domain::contact::BusinessIdentity;

pub(super) const BASE_STYLE: &str = r"
        body { font-family: 'Manrope', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #374151; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f8fafc; }
        .email-container { background: white; border-radius: 12px; padding: 32px; box-shadow: 0 4px 6px rgba(0,0,0,0.05); border: 1px solid #e2e8f0; }
        .header { border-bottom: 3px solid #53945c; padding-bottom: 24px; margin-bottom: 32px; }
        .company-name { color: #53945c; font-size: 28px; font-weight: 700; margin: 0; font-family: 'Outfit', sans-serif; }
        .tagline { color: #64748b; font-size: 15px; margin: 6px 0 0 0; font-weight: 500; }
        .section { margin-bottom: 28px; }
        .section h2 { color: #1f2937; font-size: 18px; font-weight: 600; margin-bottom: 16px; border-bottom: 2px solid #e5e7eb; padding-bottom: 8px; }
        .footer { margin-top: 32px; padding-top: 24px; border-top: 2px solid #e5e7eb; text-align: center; color: #64748b; font-size: 13px; }";

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

pub(super) fn html_header(identity: &BusinessIdentity, badge: Option<&str>) -> String {
    let badge = badge
        .map(|text| format!("\n            <span class=\"lead-priority\">{}</span>", escape_html(text)))
        .unwrap_or_default();
    format!(
        r#"        <div class="header">
            <h1 class="company-name">{name}</h1>
            <p class="tagline">{tagline}</p>{badge}
        </div>"#,
        name = escape_html(&identity.name),
        tagline = escape_html(&identity.tagline),
    )
}

pub(super) fn html_footer(identity: &BusinessIdentity) -> String {
    format!(
        r#"        <div class="footer">
            <p><strong>{name}</strong></p>
            <p>{offerings}</p>
            <p>Email: {email} | Phone: {phone}</p>
        </div>"#,
        name = escape_html(&identity.name),
        offerings = escape_html(&identity.offerings),
        email = escape_html(&identity.email),
        phone = escape_html(&identity.phone),
    )
}

pub(super) fn html_document(title: &str, extra_style: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{BASE_STYLE}{extra_style}
    </style>
</head>
<body>
    <div class="email-container">
{body}
    </div>
</body>
</html>"#,
        title = escape_html(title),
    )
}
