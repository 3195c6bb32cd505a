//! Shared types for the Fatoora front layer
//!
//! Common types used across crates: invoice line-item models, notification
//! types, and the status-check response structure.

pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    InvoiceId, LineItem, LineTotals, Notification, NotificationId, Severity, format_amount,
};
pub use response::StatusCheckResult;
