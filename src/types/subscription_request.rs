use crate::types::email_address::EmailAddress;

/// Built fresh from the current field value on every submit attempt and
/// discarded once the call resolves.
pub struct SubscriptionRequest {
    pub email: EmailAddress,
}
