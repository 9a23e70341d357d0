//! Application configuration.
//!
//! Centralized configuration for the InvoiceFlow frontend.
//! In development these are hardcoded; in production they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The document-processing service that receives invoice uploads.
pub const BACKEND_URL: &str = "http://localhost:8000";

/// Upload endpoint path, appended to [`BACKEND_URL`].
pub const UPLOAD_PATH: &str = "/upload/";

/// Application name shown in the navbar.
pub const APP_NAME: &str = "InvoiceFlow";

/// Delay before redirecting to the landing view after a successful
/// upload, in milliseconds.
pub const REDIRECT_DELAY_MS: u32 = 2_000;
