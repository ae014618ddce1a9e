use crate::subscription_client::SubscriptionClient;
use crate::types::{EmailAddress, EmailAddressError, SubscriptionRequest};

/// What the user currently sees: the editable form, the in-flight spinner, the
/// success panel, or an inline error above a still-editable form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success(EmailAddress),
    Failed(String),
}

/// Mediates between raw keystrokes and a submittable request: revalidates on
/// every field change, gates `submit` on validity, and owns the submission
/// lifecycle. One instance per rendered form; instances are independent.
pub struct SignupForm {
    client: SubscriptionClient,
    field: String,
    validation: Result<EmailAddress, EmailAddressError>,
    state: SubmissionState,
}

impl SignupForm {
    pub fn new(client: SubscriptionClient) -> Self {
        Self {
            client,
            field: String::new(),
            validation: EmailAddress::parse(String::new()),
            state: SubmissionState::Idle,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn validation_error(&self) -> Option<EmailAddressError> {
        self.validation.as_ref().err().copied()
    }

    /// Stores the raw value and revalidates synchronously, caching the parsed
    /// address so a later submit uses exactly the value that passed. No other
    /// side effects; the same value always yields the same result.
    pub fn update_field(&mut self, value: String) {
        self.validation = EmailAddress::parse(value.clone());
        self.field = value;
    }

    pub fn can_submit(&self) -> bool {
        self.validation.is_ok() && self.state != SubmissionState::Submitting
    }

    /// Runs one submission to completion. A no-op when `can_submit()` is false;
    /// the rendered surface is expected to disable the button, but the
    /// controller does not rely on it.
    #[tracing::instrument(
        name = "Submit newsletter subscription",
        skip(self),
        fields(subscriber_email = %self.field)
    )]
    pub async fn submit(&mut self) {
        if self.state == SubmissionState::Submitting {
            return;
        }
        // Only a value that passed validation may leave the form
        let email = match &self.validation {
            Ok(email) => email.clone(),
            Err(_) => return,
        };

        self.state = SubmissionState::Submitting;
        let request = SubscriptionRequest {
            email: email.clone(),
        };
        let outcome = self.client.submit_subscription(&request).await;

        // Both arms leave Submitting, whatever the wire did
        self.state = match outcome {
            Ok(_ack) => {
                self.update_field(String::new());
                SubmissionState::Success(email)
            }
            Err(e) => SubmissionState::Failed(e.user_message()),
        };
    }

    /// Back to an editable, empty form. Only meaningful from the success panel
    /// ("subscribe another email"); a no-op in every other state.
    pub fn reset(&mut self) {
        if let SubmissionState::Success(_) = self.state {
            self.update_field(String::new());
            self.state = SubmissionState::Idle;
        }
    }
}
