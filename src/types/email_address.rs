#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailAddressError {
    #[error("Email address is required.")]
    Missing,
    #[error("Please enter a valid email address.")]
    Malformed,
}

impl EmailAddress {
    pub fn parse(s: String) -> Result<EmailAddress, EmailAddressError> {
        EmailAddress::validate(&s)?;
        Ok(EmailAddress(s))
    }

    /// Checks the value against the grammar the subscription endpoint enforces:
    /// non-empty, no whitespace, `local@domain` with at least one "." in the
    /// domain and a non-empty label on each side of it.
    pub fn validate(s: &str) -> Result<(), EmailAddressError> {
        if s.is_empty() {
            return Err(EmailAddressError::Missing);
        }
        if !has_email_shape(s) {
            return Err(EmailAddressError::Malformed);
        }

        Ok(())
    }
}

fn has_email_shape(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match s.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() {
        return false;
    }

    // The dot must come after at least one domain character and before the end,
    // with no second "@" in between
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && !domain[..i].contains('@') && i + 1 < domain.len())
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
