//! Fatoora Front - client-side interaction layer for the invoice server
//!
//! The page-facing behaviors of the e-invoice UI, built on explicit seams
//! instead of implicit global state:
//!
//! - **Row calculation** (`form`): pure subtotal/VAT/total computation over
//!   coerced form-field text, recomputed per edit.
//! - **Notifications** (`core::notify`): transient messages with a fixed
//!   auto-expiry, delivered through a [`NotificationSink`] handle.
//! - **Status checks** (`core::status`): one asynchronous request per
//!   invocation against the invoice status endpoint, driving notifications
//!   and a page reload through the [`PageHost`] seam.
//! - **Dispatch** (`events`, `desk`): a [`UiEvent`] sum type routed by
//!   [`InvoiceDesk`], one event per turn.

// Re-export workspace crates for downstream use
pub use fatoora_client;
pub use shared;

pub mod core;
pub mod desk;
pub mod events;
pub mod form;
pub mod utils;

// Re-export the public surface
pub use crate::core::config::UiConfig;
pub use crate::core::notify::{
    AUTO_DISMISS_MS, ConsoleSink, NotificationCenter, NotificationSink,
};
pub use crate::core::status::{HeadlessPage, PageHost, StatusApi, StatusPoller};
pub use crate::desk::InvoiceDesk;
pub use crate::events::{AutoConfirm, ConfirmPrompt, DestructiveAction, ExportFormat, UiEvent};
pub use crate::form::{LogDisplay, TotalsDisplay};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};
