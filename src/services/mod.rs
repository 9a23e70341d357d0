//! Browser and backend plumbing.
//!
//! # Services
//!
//! - [`files`] - flatten picker selections and dropped directories into a file list
//! - [`upload`] - multipart upload of invoice documents to the backend

pub mod files;
pub mod upload;

pub use files::*;
pub use upload::*;
