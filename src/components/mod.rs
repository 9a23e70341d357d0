//! UI components for the InvoiceFlow frontend.
//!
//! # Layout Components
//! - [`Navbar`] - top navigation bar
//!
//! # Views
//! - [`LandingPage`] - file intake entry point (picker + drag-and-drop)
//! - [`UploadPage`] - upload form for a client and tax month
//!
//! # Feature Components
//! - [`InvoiceTable`] - editable table of extracted invoice rows

mod invoice_table;
mod landing;
mod navbar;
mod upload_form;

pub use invoice_table::*;
pub use landing::*;
pub use navbar::*;
pub use upload_form::*;
