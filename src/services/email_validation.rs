use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ActivityError, ActivityResult};

const MAX_EMAIL_LEN: usize = 254;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid")
});

/// Trims surrounding whitespace and checks the basic `local@domain.tld` shape.
/// Casing is preserved.
pub fn normalize_email(raw: &str) -> ActivityResult<String> {
    let email = raw.trim();
    if email.is_empty() || email.len() > MAX_EMAIL_LEN || !EMAIL_REGEX.is_match(email) {
        return Err(ActivityError::InvalidEmail);
    }
    Ok(email.to_string())
}
