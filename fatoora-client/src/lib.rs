//! Fatoora Client - HTTP client for the invoice server
//!
//! Provides network-based HTTP calls to the invoice server API. The only
//! operation in scope is the invoice status check; the crate also builds the
//! URLs the UI layer hands to the page host (print view).

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{InvoiceId, StatusCheckResult};
