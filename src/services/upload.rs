//! HTTP service for submitting invoice documents to the backend.
//!
//! One multipart POST per submission, no retry. Validation and the
//! month wire format live here so they can be tested off-browser.

use gloo_net::http::Request;
use web_sys::{File, FormData};

use crate::config::{BACKEND_URL, UPLOAD_PATH};
use crate::types::{AppError, AppResult, UploadReceipt};

/// Form-level message when a required field is missing.
const MISSING_FIELDS: &str = "Please fill all fields and select files";

/// Fallback when the backend gives no usable error body.
const GENERIC_FAILURE: &str = "Upload failed";

/// Check that every required field is present before submitting.
///
/// The client name must contain at least one non-whitespace character,
/// the month must be set, and at least one file must be selected.
pub fn validate(client_name: &str, month: &str, file_count: usize) -> AppResult<()> {
    if client_name.trim().is_empty() || month.is_empty() || file_count == 0 {
        return Err(AppError::Validation(MISSING_FIELDS.to_string()));
    }
    Ok(())
}

/// Convert the month from `YYYY-MM` display format to the `YYYY_MM`
/// wire format expected by the backend.
pub fn wire_month(month: &str) -> String {
    month.replacen('-', "_", 1)
}

/// Pull a human-readable message out of an error response body.
///
/// The backend reports failures as `{"message": "..."}`; anything else
/// collapses to a generic message.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

/// Upload invoice files for one client and tax month.
///
/// Builds a multipart body with `client_name`, `month` (wire format)
/// and one `files` part per selected file, preserving list order, and
/// POSTs it to the fixed upload endpoint.
pub async fn upload_documents(
    client_name: &str,
    month: &str,
    files: &[File],
) -> AppResult<UploadReceipt> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create form data: {:?}", e)))?;

    form_data
        .append_with_str("client_name", client_name)
        .map_err(|e| AppError::Network(format!("Failed to append field: {:?}", e)))?;
    form_data
        .append_with_str("month", &wire_month(month))
        .map_err(|e| AppError::Network(format!("Failed to append field: {:?}", e)))?;

    for file in files {
        form_data
            .append_with_blob("files", file)
            .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;
    }

    let url = format!("{}{}", BACKEND_URL, UPLOAD_PATH);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("Could not reach the server: {}", e)))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        log::error!("Upload rejected ({}): {}", response.status(), message);
        return Err(AppError::Upload(message));
    }

    response
        .json::<UploadReceipt>()
        .await
        .map_err(|e| AppError::Upload(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_any_missing_field() {
        assert!(validate("", "2026-01", 3).is_err());
        assert!(validate("   ", "2026-01", 3).is_err());
        assert!(validate("ABC_Enterprises", "", 3).is_err());
        assert!(validate("ABC_Enterprises", "2026-01", 0).is_err());
    }

    #[test]
    fn validate_accepts_complete_input() {
        assert!(validate("ABC_Enterprises", "2026-01", 1).is_ok());
    }

    #[test]
    fn validation_failure_carries_the_form_message() {
        let err = validate("", "", 0).unwrap_err();
        assert_eq!(err.to_string(), "Please fill all fields and select files");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn wire_month_replaces_first_hyphen_only() {
        assert_eq!(wire_month("2024-03"), "2024_03");
        assert_eq!(wire_month("2026-01"), "2026_01");
        // A month input only ever yields one hyphen, but the substitution
        // is defined as first-only either way.
        assert_eq!(wire_month("2024-03-15"), "2024_03-15");
    }

    #[test]
    fn receipt_deserializes_backend_response() {
        // Shape returned by the processing service; extra keys are ignored.
        let json = r#"{
            "status": "success",
            "message": "Files uploaded successfully",
            "client": "ABC_Enterprises",
            "month": "2026_01",
            "file_count": 3,
            "upload_dir": "uploads/ABC_Enterprises/2026_01"
        }"#;

        let receipt: UploadReceipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.message, "Files uploaded successfully");
        assert_eq!(receipt.file_count, 3);
    }

    #[test]
    fn error_message_comes_from_body_when_present() {
        assert_eq!(
            extract_error_message(r#"{"message": "Invalid client"}"#),
            "Invalid client"
        );
    }

    #[test]
    fn error_message_falls_back_when_body_unusable() {
        assert_eq!(extract_error_message(""), "Upload failed");
        assert_eq!(extract_error_message("<html>502</html>"), "Upload failed");
        assert_eq!(extract_error_message(r#"{"detail": "nope"}"#), "Upload failed");
    }
}
