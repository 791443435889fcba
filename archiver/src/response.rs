use crate::repository::RepositoryEntry;
use serde::Serialize;
use serde_json::Value;

/// Which save-request endpoint produced a body, and so how it is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveResponse {
    /// POST on the save endpoint: a single request object.
    Requested,
    /// GET on the save endpoint: an array of request objects, newest first.
    Polled,
}

/// One report entry, built from a single save-endpoint call.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ArchivalResult {
    pub status_code: Option<u16>,
    pub request_id: Option<String>,
    pub url: String,
    pub service_type: String,
    pub save_request_status: Option<String>,
    pub save_task_status: Option<String>,
    pub save_request_date: Option<String>,
}

impl ArchivalResult {
    fn bare(entry: &RepositoryEntry) -> Self {
        Self {
            status_code: None,
            request_id: None,
            url: entry.url.clone(),
            service_type: entry.service_type.clone(),
            save_request_status: None,
            save_task_status: None,
            save_request_date: None,
        }
    }

    /// Map an HTTP response to a result. Never fails: bodies that can't be
    /// decoded leave the corresponding fields empty.
    pub fn from_response(
        entry: &RepositoryEntry,
        status: u16,
        body: &str,
        shape: SaveResponse,
    ) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();

        if status != 200 {
            let reason = parsed
                .as_ref()
                .and_then(|json| json.get("reason"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| body.to_string());

            return Self {
                status_code: Some(status),
                save_request_status: Some(reason),
                ..Self::bare(entry)
            };
        }

        let request = match (shape, parsed.as_ref()) {
            (SaveResponse::Requested, Some(json)) => Some(json),
            (SaveResponse::Polled, Some(json)) => json.as_array().and_then(|items| items.first()),
            (_, None) => None,
        };
        let field = |key: &str| request.and_then(|obj| obj.get(key)).and_then(field_text);

        Self {
            status_code: Some(status),
            request_id: field("id"),
            save_request_status: field("save_request_status"),
            save_task_status: field("save_task_status"),
            save_request_date: field("save_request_date"),
            ..Self::bare(entry)
        }
    }

    /// Result for a request that never got a response.
    pub fn transport_failure(entry: &RepositoryEntry, message: impl Into<String>) -> Self {
        Self {
            save_request_status: Some(message.into()),
            ..Self::bare(entry)
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == Some(200)
    }

    /// JSON form of the result, for logs.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
