//! Contact form submission models

use serde::Serialize;
use vetgroom::{FormStatus, LeadFields, LeadForm};

/// Form state returned after a submission attempt
#[derive(Debug, Serialize)]
pub struct LeadFormResponse {
    pub fields: LeadFields,
    #[serde(flatten)]
    pub status: FormStatus,
}

impl From<LeadForm> for LeadFormResponse {
    fn from(form: LeadForm) -> Self {
        Self {
            fields: form.fields,
            status: form.status,
        }
    }
}
