//! UI event definitions
//!
//! The page's implicit DOM callbacks become one explicit sum type, dispatched
//! by [`InvoiceDesk::handle`](crate::desk::InvoiceDesk::handle) one event per
//! turn.

use std::fmt;

use shared::{InvoiceId, NotificationId};

use crate::form::FormRow;

/// Export targets exposed by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "Excel"),
            ExportFormat::Pdf => write!(f, "PDF"),
        }
    }
}

/// Actions that require user confirmation before the form submits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestructiveAction {
    Delete,
    Cancel,
}

impl DestructiveAction {
    pub fn verb(&self) -> &'static str {
        match self {
            DestructiveAction::Delete => "delete",
            DestructiveAction::Cancel => "cancel",
        }
    }

    /// Prompt shown to the user before the action proceeds
    pub fn prompt(&self) -> String {
        format!("Are you sure you want to {} this item?", self.verb())
    }
}

/// Asks the user to confirm a destructive action
pub trait ConfirmPrompt: Send + Sync + 'static {
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt that accepts everything (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoConfirm;

impl ConfirmPrompt for AutoConfirm {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!("Auto-confirming: {}", message);
        true
    }
}

/// One user-interaction turn
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A numeric input inside an invoice row changed; carries the row
    /// snapshot (container-level delegation, rows need no re-binding)
    RowEdited { row: FormRow },
    /// The user dismissed a notification
    NotificationDismissed(NotificationId),
    /// The user asked for a server-side status check
    StatusCheckRequested(InvoiceId),
    /// The user asked for the print view
    PrintRequested(InvoiceId),
    /// The user asked for an export
    ExportRequested(ExportFormat),
    /// A delete/cancel form is about to submit
    DestructiveSubmit { action: DestructiveAction },
}
