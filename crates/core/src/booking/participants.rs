//! Participant list parsing

use aura_domain::constants::{EMAIL_PATTERN, PARTICIPANT_SEPARATOR};
use aura_domain::SchedulingError;
use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_REGEX should compile - this is a bug"));

/// Whether `candidate` looks like a single email address: one `@`, a dot in
/// the domain part and no whitespace.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_REGEX.is_match(candidate)
}

/// Split a comma separated participant list into trimmed addresses.
///
/// Blank entries are dropped, so `"a@x.io,,"` yields one participant and an
/// empty string yields none.
///
/// # Errors
/// [`SchedulingError::InvalidEmails`] listing every entry that is not an
/// address, in input order.
pub fn parse_participants(raw: &str) -> Result<Vec<String>, SchedulingError> {
    let entries: Vec<&str> =
        raw.split(PARTICIPANT_SEPARATOR).map(str::trim).filter(|p| !p.is_empty()).collect();

    let invalid: Vec<String> =
        entries.iter().filter(|p| !is_valid_email(p)).map(|p| (*p).to_string()).collect();
    if !invalid.is_empty() {
        return Err(SchedulingError::InvalidEmails { invalid });
    }

    Ok(entries.into_iter().map(str::to_string).collect())
}
