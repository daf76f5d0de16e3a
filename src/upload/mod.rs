//! Upload operations
//!
//! This module turns tabular data into an [`UploadPayload`] and sends it to
//! the configured endpoint in a single JSON POST.

pub mod config;
pub mod operations;
pub mod transport;
pub mod types;

pub use config::{UploaderConfig, DEFAULT_TIMEOUT_SECS};
pub use operations::Uploader;
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use types::{UploadOutcome, UploadPayload, UploadReport};
