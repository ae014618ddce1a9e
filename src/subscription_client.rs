use reqwest::{Client, StatusCode};

use crate::types::SubscriptionRequest;

pub struct SubscriptionClient {
    http_client: Client,
    endpoint_url: String,
}

#[derive(serde::Serialize)]
struct SubscriptionBody<'a> {
    email: &'a str,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// The server's raw JSON response on a successful subscription. Opaque to the
/// rest of the crate; kept only in case a caller wants to inspect it.
#[derive(Debug)]
pub struct SubscriptionAck(serde_json::Value);

impl SubscriptionAck {
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubscriptionError {
    #[error("The subscription endpoint answered with status {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("Failed to reach the subscription endpoint")]
    Transport(#[source] reqwest::Error),
}

impl SubscriptionError {
    /// The inline message the form shows for this failure.
    pub fn user_message(&self) -> String {
        match self {
            SubscriptionError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            SubscriptionError::Status { message: None, .. } => {
                "Failed to subscribe. Please ensure your email is correct or try again later."
                    .to_string()
            }
            SubscriptionError::Transport(_) => {
                "Failed to subscribe. Please try again later.".to_string()
            }
        }
    }
}

impl SubscriptionClient {
    pub fn new(endpoint_url: String, timeout: std::time::Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Unable to build HTTP client");
        Self {
            http_client,
            endpoint_url,
        }
    }

    /// Performs exactly one POST of `{"email": ...}` to the endpoint. Never
    /// retries; a non-2xx answer keeps its status code and any `message` field
    /// the body carried.
    pub async fn submit_subscription(
        &self,
        request: &SubscriptionRequest,
    ) -> Result<SubscriptionAck, SubscriptionError> {
        let request_body = SubscriptionBody {
            email: request.email.as_ref(),
        };
        let response = self
            .http_client
            .post(&self.endpoint_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach the subscription endpoint: {:?}", e);
                SubscriptionError::Transport(e)
            })?;

        let status = response.status();
        if status.is_success() {
            // A 2xx answer that is not JSON counts as malformed, not as a
            // server-side rejection
            let payload = response
                .json::<serde_json::Value>()
                .await
                .map_err(SubscriptionError::Transport)?;
            return Ok(SubscriptionAck(payload));
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        tracing::error!(
            "The subscription endpoint rejected the request: status {}, message {:?}",
            status,
            message
        );

        Err(SubscriptionError::Status { status, message })
    }
}
