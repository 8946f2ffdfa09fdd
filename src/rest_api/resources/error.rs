// Copyright 2024-2026 Contributors to the supplier-daemon project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error;
use std::fmt;

/// An error response that may be returned by a REST endpoint. Serializes
/// to the body envelope; the status code travels alongside for the
/// framework layer to apply.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing)]
    status_code: u16,
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ErrorResponse {
    pub fn new(status_code: u16, message: &str) -> Self {
        Self {
            status_code,
            success: false,
            message: message.to_string(),
            error: None,
        }
    }

    /// Creates a 500 response that carries the underlying failure text in
    /// the body's `error` field
    pub fn internal_error(message: &str, error: &str) -> Self {
        Self {
            status_code: 500,
            success: false,
            message: message.to_string(),
            error: Some(error.to_string()),
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Error for ErrorResponse {}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Status Code {}: Message {}", self.status_code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn error_field_is_omitted_when_absent() {
        let response = ErrorResponse::new(404, "Supplier not found");
        let body = serde_json::to_value(&response).expect("failed to serialize");
        assert_eq!(
            body,
            serde_json::json!({"success": false, "message": "Supplier not found"})
        );
    }

    #[test]
    fn internal_errors_surface_the_source_text() {
        let response = ErrorResponse::internal_error("Failed to get all suppliers", "broken pipe");
        assert_eq!(response.status_code(), 500);
        let body = serde_json::to_value(&response).expect("failed to serialize");
        assert_eq!(
            body,
            serde_json::json!({
                "success": false,
                "message": "Failed to get all suppliers",
                "error": "broken pipe"
            })
        );
    }
}
