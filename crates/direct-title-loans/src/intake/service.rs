use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::forms::PrivacyRequest;

use super::request_id::{ClockedRequestIds, RequestId, RequestIdSource};

pub const PRIVACY_ACKNOWLEDGEMENT: &str =
    "Your privacy request has been received. We will respond within 45 days.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyReceipt {
    pub success: bool,
    pub request_id: RequestId,
    pub message: String,
}

/// Acknowledges privacy requests of any shape.
#[derive(Debug, Default, Clone)]
pub struct PrivacyIntake<S = ClockedRequestIds> {
    ids: S,
}

impl<S: RequestIdSource> PrivacyIntake<S> {
    pub fn new(ids: S) -> Self {
        Self { ids }
    }

    pub fn receive(&self, payload: &Value) -> PrivacyReceipt {
        let resident_type = payload
            .get("residentType")
            .and_then(Value::as_str)
            .unwrap_or("");
        let request_types = payload
            .get("requestTypes")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        self.acknowledge(resident_type, request_types)
    }

    /// Same acknowledgement for a request already parsed by the HTML form.
    pub fn receive_request(&self, request: &PrivacyRequest) -> PrivacyReceipt {
        self.acknowledge(&request.resident_type, request.request_types.len())
    }

    fn acknowledge(&self, resident_type: &str, request_types: usize) -> PrivacyReceipt {
        let request_id = self.ids.next_request_id();
        info!(
            request_id = %request_id,
            resident_type,
            request_types,
            "privacy request received"
        );

        PrivacyReceipt {
            success: true,
            request_id,
            message: PRIVACY_ACKNOWLEDGEMENT.to_string(),
        }
    }
}
