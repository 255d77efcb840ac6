//! Transactional email templates for account lifecycle notices.
//!
//! Rendering is pure string work; delivery belongs to whatever mailer the
//! deployment wires up.

pub mod templates;

pub use templates::{RenderedEmail, account_disabled, account_enabled, login_otp};
