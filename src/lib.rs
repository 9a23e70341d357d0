//! InvoiceFlow - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading GST invoice documents (per
//! client, per tax month) to the processing backend and reviewing the
//! extracted line-items in an editable table.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Navbar                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── "/"        LandingPage (picker + drag-and-drop intake) │
//! │  └── "/upload"  UploadPage  (client, month, pending files)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Extraction, mismatch detection and ITC protection run in the
//! backend service; this crate only submits documents and displays
//! what comes back.
//!
//! # Modules
//!
//! - [`types`] - common types (InvoiceRow, UploadPhase, AppError, ...)
//! - [`components`] - UI components (Navbar, LandingPage, UploadForm, InvoiceTable)
//! - [`services`] - file collection and backend communication

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Invoice rows and columns
    ColumnKey, InvoiceRow, RowHighlight, COLUMNS,
    // Upload workflow
    UploadPhase, UploadReceipt,
    // Navigation
    UploadSeed,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("InvoiceFlow - starting Leptos app");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    // Typed payload carried from the landing view into the upload view.
    provide_context(create_rw_signal(None::<UploadSeed>));

    view! {
        <Router>
            <Navbar/>
            <main>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/upload" view=UploadPage/>
                </Routes>
            </main>
        </Router>
    }
}
