use serde::Serialize;

const BRAND: &str = "Vendora";
const BODY_STYLE: &str = "font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin:10px";

/// A fully rendered email, ready to hand to a mailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEmail {
    pub subject: String,
    pub html: String,
}

/// Notice sent when an account is disabled, with the moderation reasons.
pub fn account_disabled(user_name: &str, reasons: &str) -> RenderedEmail {
    let user = escape(user_name);
    let reasons = escape(reasons);
    RenderedEmail {
        subject: format!("Your {BRAND} account has been disabled"),
        html: format!(
            "<div style=\"{BODY_STYLE}\">\
             <h2>Dear {user},</h2>\
             <p>We regret to inform you that your {BRAND} account has been disabled for the following reasons:</p>\
             <p>{reasons}</p>\
             <p>If you have any questions or concerns, please don't hesitate to contact our support.</p>\
             <p>Best regards,</p>\
             <p>The {BRAND} team</p>\
             </div>"
        ),
    }
}

/// Notice sent when a previously disabled account is re-enabled.
pub fn account_enabled(user_name: &str) -> RenderedEmail {
    let user = escape(user_name);
    RenderedEmail {
        subject: format!("Your {BRAND} account has been re-enabled"),
        html: format!(
            "<div style=\"{BODY_STYLE}\">\
             <h2>Dear {user},</h2>\
             <p>We are happy to tell you that your {BRAND} account has been re-enabled.</p>\
             <p>If you have any questions or concerns, please don't hesitate to contact our support.</p>\
             <p>Best regards,</p>\
             <p>The {BRAND} team</p>\
             </div>"
        ),
    }
}

/// One-time login verification code.
pub fn login_otp(user_name: &str, code: &str) -> RenderedEmail {
    let user = escape(user_name);
    let code = escape(code);
    RenderedEmail {
        subject: format!("Your {BRAND} login verification code"),
        html: format!(
            "<div style=\"{BODY_STYLE}\">\
             <h2>Hi {user},</h2>\
             <p>To ensure the security of your account, please use the following code to verify your login:</p>\
             <p><strong>Verification code:</strong> {code}</p>\
             <p>If you have any questions or concerns, please don't hesitate to contact our support.</p>\
             <p>Best regards,</p>\
             <p>The {BRAND} team</p>\
             </div>"
        ),
    }
}

/// Minimal HTML escaping for interpolated user content.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
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
