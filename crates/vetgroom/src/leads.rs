//! Lead capture
//!
//! Contact form submissions are forwarded to an external lead-capture
//! endpoint as a single JSON `POST`. There is no retry and no queueing: a
//! failed submission stays in the form for the visitor to send again.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::LeadError;

pub const DEFAULT_ENDPOINT: &str = "https://dashboard-sigma-six-16.vercel.app/api/leads/submit";
pub const DEFAULT_BUSINESS_ID: &str = "vet-groomers-001";
pub const DEFAULT_SOURCE: &str = "contact_page";

/// Shown when the endpoint rejects a lead without saying why
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";
/// Shown when the request or its response could not be completed
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Values typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl LeadFields {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Wire body sent to the lead endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload<'a> {
    pub business_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
    pub source: &'a str,
}

#[derive(Debug, Deserialize)]
struct LeadErrorBody {
    error: Option<String>,
}

/// Where and as whom leads are submitted
#[derive(Debug, Clone)]
pub struct LeadConfig {
    pub endpoint: String,
    pub business_id: String,
    pub source: String,
    pub timeout: Option<Duration>,
}

impl Default for LeadConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            business_id: DEFAULT_BUSINESS_ID.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            timeout: None,
        }
    }
}

/// HTTP client for the lead endpoint
#[derive(Debug, Clone)]
pub struct LeadClient {
    client: reqwest::Client,
    config: LeadConfig,
}

impl LeadClient {
    pub fn new(config: LeadConfig) -> Result<Self, LeadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LeadError::Config(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LeadConfig {
        &self.config
    }

    /// Build the wire body for a set of form fields
    pub fn payload<'a>(&'a self, fields: &'a LeadFields) -> LeadPayload<'a> {
        LeadPayload {
            business_id: &self.config.business_id,
            name: &fields.name,
            email: &fields.email,
            phone: &fields.phone,
            message: &fields.message,
            source: &self.config.source,
        }
    }

    /// Send one lead. Any 2xx status counts as accepted.
    pub async fn submit(&self, fields: &LeadFields) -> Result<(), LeadError> {
        debug!("Submitting lead to {}", self.config.endpoint);

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&self.payload(fields))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            debug!("Lead accepted with status {}", status);
            return Ok(());
        }

        let body: LeadErrorBody = response.json().await?;
        let message = body
            .error
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
        warn!("Lead rejected with status {}: {}", status, message);

        Err(LeadError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Visible state of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// Contact form: the typed values plus the submission state
#[derive(Debug, Clone, Default, Serialize)]
pub struct LeadForm {
    pub fields: LeadFields,
    pub status: FormStatus,
}

impl LeadForm {
    pub fn new(fields: LeadFields) -> Self {
        Self {
            fields,
            status: FormStatus::Idle,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Submit the form. On success the fields are cleared; on failure they
    /// are kept and the status carries the message to show.
    pub async fn submit(&mut self, client: &LeadClient) -> &FormStatus {
        self.status = FormStatus::Submitting;

        self.status = match client.submit(&self.fields).await {
            Ok(()) => {
                self.fields.clear();
                FormStatus::Success
            }
            Err(e) => {
                warn!("Lead submission failed: {}", e);
                FormStatus::Error(e.user_message())
            }
        };

        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let client = LeadClient::new(LeadConfig::default()).unwrap();
        let fields = LeadFields {
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            phone: String::new(),
            message: "Poodle trim".to_string(),
        };

        let body = serde_json::to_value(client.payload(&fields)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "businessId": "vet-groomers-001",
                "name": "Sam",
                "email": "sam@example.com",
                "phone": "",
                "message": "Poodle trim",
                "source": "contact_page"
            })
        );
    }

    #[test]
    fn test_optional_fields_default_to_empty() {
        let fields: LeadFields =
            serde_json::from_str(r#"{"name": "Sam", "email": "sam@example.com"}"#).unwrap();
        assert_eq!(fields.phone, "");
        assert_eq!(fields.message, "");
    }

    #[test]
    fn test_form_status_serialization() {
        assert_eq!(
            serde_json::to_value(FormStatus::Error("invalid email".to_string())).unwrap(),
            serde_json::json!({"status": "error", "message": "invalid email"})
        );
        assert_eq!(
            serde_json::to_value(FormStatus::Success).unwrap(),
            serde_json::json!({"status": "success"})
        );
    }

    #[test]
    fn test_user_messages() {
        let rejected = LeadError::Rejected {
            status: 400,
            message: "invalid email".to_string(),
        };
        assert_eq!(rejected.user_message(), "invalid email");
        assert_eq!(
            LeadError::Transport("connection refused".to_string()).user_message(),
            NETWORK_ERROR_MESSAGE
        );
    }
}
