//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Invoice Types** - rows and columns shown by the result table
//! - **Upload Types** - submission workflow state and backend responses
//! - **Navigation Types** - typed payload carried between views
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Invoice Types
// =============================================================================

/// Semantic column of the invoice table.
///
/// The display order and the label-to-field mapping are fixed here so a
/// renamed header can never silently break cell lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKey {
    File,
    InvoiceNumber,
    Date,
    Gstin,
    Amount,
    Tax,
    Total,
    Status,
}

/// Column display order of the invoice table.
pub const COLUMNS: [ColumnKey; 8] = [
    ColumnKey::File,
    ColumnKey::InvoiceNumber,
    ColumnKey::Date,
    ColumnKey::Gstin,
    ColumnKey::Amount,
    ColumnKey::Tax,
    ColumnKey::Total,
    ColumnKey::Status,
];

impl ColumnKey {
    /// Header label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            ColumnKey::File => "File",
            ColumnKey::InvoiceNumber => "Invoice #",
            ColumnKey::Date => "Date",
            ColumnKey::Gstin => "GSTIN",
            ColumnKey::Amount => "Amount",
            ColumnKey::Tax => "Tax",
            ColumnKey::Total => "Total",
            ColumnKey::Status => "Status",
        }
    }
}

/// One extracted invoice line as returned by the backend.
///
/// All fields are optional strings; anything the extractor could not fill
/// renders as `"-"`. Unknown keys in the payload are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRow {
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default, alias = "invoice #")]
    pub invoice_number: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub gstin: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub tax: Option<String>,
    #[serde(default)]
    pub total: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Set by mismatch detection when the row needs review.
    #[serde(default, rename = "hasIssues")]
    pub has_issues: bool,
}

impl InvoiceRow {
    /// Raw value of a column, if present.
    pub fn value(&self, key: ColumnKey) -> Option<&str> {
        let field = match key {
            ColumnKey::File => &self.file,
            ColumnKey::InvoiceNumber => &self.invoice_number,
            ColumnKey::Date => &self.date,
            ColumnKey::Gstin => &self.gstin,
            ColumnKey::Amount => &self.amount,
            ColumnKey::Tax => &self.tax,
            ColumnKey::Total => &self.total,
            ColumnKey::Status => &self.status,
        };
        field.as_deref()
    }

    /// Overwrite a column with an edited value.
    pub fn set_value(&mut self, key: ColumnKey, value: String) {
        let field = match key {
            ColumnKey::File => &mut self.file,
            ColumnKey::InvoiceNumber => &mut self.invoice_number,
            ColumnKey::Date => &mut self.date,
            ColumnKey::Gstin => &mut self.gstin,
            ColumnKey::Amount => &mut self.amount,
            ColumnKey::Tax => &mut self.tax,
            ColumnKey::Total => &mut self.total,
            ColumnKey::Status => &mut self.status,
        };
        *field = Some(value);
    }

    /// Display text for a cell: the stored value, or `"-"` when the
    /// field is missing or empty.
    pub fn display_value(&self, key: ColumnKey) -> String {
        match self.value(key) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => "-".to_string(),
        }
    }

    /// Whether extraction failed for this row.
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }

    /// Background treatment for the row. Error wins over warning.
    pub fn highlight(&self) -> RowHighlight {
        if self.is_error() {
            RowHighlight::Error
        } else if self.has_issues {
            RowHighlight::Warning
        } else {
            RowHighlight::Default
        }
    }
}

/// Row background category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowHighlight {
    Error,
    Warning,
    Default,
}

impl RowHighlight {
    /// Get CSS class for styling.
    pub fn css_class(self) -> &'static str {
        match self {
            RowHighlight::Error => "row-error",
            RowHighlight::Warning => "row-warning",
            RowHighlight::Default => "row-default",
        }
    }
}

// =============================================================================
// Upload Types
// =============================================================================

/// Response from the backend upload endpoint.
///
/// The backend returns more (saved paths, per-file sizes); only the
/// fields the UI shows are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Human-readable confirmation message.
    pub message: String,
    /// Number of files the backend accepted.
    pub file_count: u32,
}

/// State of the submission workflow.
///
/// Exactly one submission may be in flight; [`UploadPhase::can_submit`]
/// guards the coordinator itself, not just the disabled button.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadPhase {
    Idle,
    Submitting,
    Succeeded(UploadReceipt),
    /// The submission failed; the form shows the message inline and
    /// stays editable for a retry.
    Failed,
}

impl UploadPhase {
    /// Whether a new submission may start.
    pub fn can_submit(&self) -> bool {
        !matches!(self, UploadPhase::Submitting)
    }
}

// =============================================================================
// Navigation Types
// =============================================================================

/// Typed payload carried from the landing view into the upload view.
///
/// Filled right before navigating, drained once when the upload form
/// mounts. Replaces ambient location state with an explicit contract.
#[derive(Clone, Debug, Default)]
pub struct UploadSeed {
    /// Client-name suggestion, e.g. the top folder of a dropped directory.
    pub client_name: Option<String>,
    /// Files already picked on the landing view, in selection order.
    pub files: Vec<web_sys::File>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// `Display` yields the bare user-facing message so forms can render
/// it verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// A required field is missing before submission.
    Validation(String),
    /// The backend rejected the upload (non-2xx response).
    Upload(String),
    /// The request never completed (connection refused, CORS, ...).
    Network(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) | AppError::Upload(msg) | AppError::Network(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_deserializes_snake_case_fields() {
        let json = r#"{
            "file": "inv_001.pdf",
            "invoice_number": "INV-001",
            "date": "2026-01-12",
            "gstin": "27AAPFU0939F1ZV",
            "amount": "1000.00",
            "tax": "180.00",
            "total": "1180.00",
            "status": "ok"
        }"#;

        let row: InvoiceRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.invoice_number.as_deref(), Some("INV-001"));
        assert_eq!(row.gstin.as_deref(), Some("27AAPFU0939F1ZV"));
        assert!(!row.has_issues);
    }

    #[test]
    fn row_accepts_display_label_alias_and_ignores_unknown_keys() {
        let json = r#"{
            "invoice #": "INV-002",
            "hasIssues": true,
            "confidence": 0.42
        }"#;

        let row: InvoiceRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.invoice_number.as_deref(), Some("INV-002"));
        assert!(row.has_issues);
    }

    #[test]
    fn missing_or_empty_fields_display_as_placeholder() {
        let mut row = InvoiceRow::default();
        assert_eq!(row.display_value(ColumnKey::Amount), "-");

        row.amount = Some(String::new());
        assert_eq!(row.display_value(ColumnKey::Amount), "-");

        row.amount = Some("500".to_string());
        assert_eq!(row.display_value(ColumnKey::Amount), "500");
    }

    #[test]
    fn highlight_prefers_error_over_warning() {
        let row = InvoiceRow {
            status: Some("error".to_string()),
            has_issues: true,
            ..Default::default()
        };
        assert_eq!(row.highlight(), RowHighlight::Error);

        let row = InvoiceRow {
            has_issues: true,
            ..Default::default()
        };
        assert_eq!(row.highlight(), RowHighlight::Warning);

        assert_eq!(InvoiceRow::default().highlight(), RowHighlight::Default);
    }

    #[test]
    fn set_value_round_trips_every_column() {
        let mut row = InvoiceRow::default();
        for key in COLUMNS {
            row.set_value(key, format!("v-{}", key.label()));
        }
        for key in COLUMNS {
            assert_eq!(row.value(key), Some(format!("v-{}", key.label()).as_str()));
        }
    }

    #[test]
    fn submitting_phase_blocks_resubmission() {
        assert!(UploadPhase::Idle.can_submit());
        assert!(!UploadPhase::Submitting.can_submit());
        assert!(UploadPhase::Failed.can_submit());
        assert!(UploadPhase::Succeeded(UploadReceipt {
            message: "ok".to_string(),
            file_count: 1,
        })
        .can_submit());
    }
}
