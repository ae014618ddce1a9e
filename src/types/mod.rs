mod email_address;
mod subscription_request;

pub use email_address::{EmailAddress, EmailAddressError};
pub use subscription_request::SubscriptionRequest;
