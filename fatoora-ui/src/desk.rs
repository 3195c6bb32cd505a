//! Invoice desk - the layer's invocation surface
//!
//! Bundles the notification center, status poller, page host, and form
//! calculator behind one handle, and routes [`UiEvent`]s to them. Events are
//! handled one per turn; only the status check leaves the turn, as a spawned
//! task.

use std::sync::Arc;

use fatoora_client::{ClientResult, HttpClient};
use shared::{InvoiceId, Severity, StatusCheckResult};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::core::notify::{NotificationCenter, NotificationSink};
use crate::core::status::{PageHost, StatusApi, StatusPoller};
use crate::events::{ConfirmPrompt, DestructiveAction, ExportFormat, UiEvent};
use crate::form::{LogDisplay, TotalsDisplay, compute_totals, read_line_item};

/// Notification shown by the not-yet-implemented export actions
pub const EXPORT_COMING_SOON_MSG: &str = "Export feature coming soon!";

/// The invocation surface of the interaction layer
pub struct InvoiceDesk {
    notifier: NotificationCenter,
    poller: Arc<StatusPoller>,
    client: HttpClient,
    page: Arc<dyn PageHost>,
    display: Arc<dyn TotalsDisplay>,
    confirm: Arc<dyn ConfirmPrompt>,
}

impl InvoiceDesk {
    /// Assemble a desk from its parts
    ///
    /// `client` serves URL building; `api` serves the status protocol. In
    /// production both are the same [`HttpClient`]; tests substitute `api`.
    pub fn new(
        client: HttpClient,
        api: Arc<dyn StatusApi>,
        notifier: NotificationCenter,
        page: Arc<dyn PageHost>,
        display: Arc<dyn TotalsDisplay>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        let poller = Arc::new(StatusPoller::new(api, notifier.clone(), Arc::clone(&page)));
        Self {
            notifier,
            poller,
            client,
            page,
            display,
            confirm,
        }
    }

    /// Assemble a desk around a live HTTP client with default display and
    /// confirmation behavior
    pub fn with_client(
        client: HttpClient,
        sink: Arc<dyn NotificationSink>,
        page: Arc<dyn PageHost>,
        confirm: Arc<dyn ConfirmPrompt>,
    ) -> Self {
        let api: Arc<dyn StatusApi> = Arc::new(client.clone());
        Self::new(
            client,
            api,
            NotificationCenter::new(sink),
            page,
            Arc::new(LogDisplay),
            confirm,
        )
    }

    /// The notification center backing this desk
    pub fn notifier(&self) -> &NotificationCenter {
        &self.notifier
    }

    // ========== Invocation surface ==========

    /// Trigger a status check for an invoice
    ///
    /// Fire-and-forget: the call returns immediately and the request runs as
    /// its own task, so the UI turn is never blocked. Overlapping checks for
    /// the same invoice are allowed and notify independently.
    pub fn check_status(&self, id: InvoiceId) -> JoinHandle<ClientResult<StatusCheckResult>> {
        let poller = Arc::clone(&self.poller);
        tokio::spawn(async move { poller.check_status(id).await })
    }

    /// Open the invoice print view in a new browsing context
    pub fn print_invoice(&self, id: InvoiceId) {
        let url = self.client.print_view_url(id);
        self.page.open_window(&url);
    }

    /// Export stub; notifies and performs no export
    pub fn export_to_excel(&self) {
        tracing::info!("Export to Excel functionality to be implemented");
        self.notifier.notify(EXPORT_COMING_SOON_MSG, Severity::Info);
    }

    /// Export stub; notifies and performs no export
    pub fn export_to_pdf(&self) {
        tracing::info!("Export to PDF functionality to be implemented");
        self.notifier.notify(EXPORT_COMING_SOON_MSG, Severity::Info);
    }

    /// Ask the user to confirm a destructive submit; returns whether the
    /// submit may proceed
    pub fn confirm_destructive(&self, action: DestructiveAction) -> bool {
        self.confirm.confirm(&action.prompt())
    }

    // ========== Event routing ==========

    /// Route one event
    pub fn handle(&self, event: UiEvent) {
        match event {
            UiEvent::RowEdited { row } => {
                // Rows missing their numeric fields are skipped outright
                if let Some(item) = read_line_item(&row) {
                    let totals = compute_totals(&item);
                    self.display.render(&row, &totals);
                }
            }
            UiEvent::NotificationDismissed(id) => {
                self.notifier.dismiss(id);
            }
            UiEvent::StatusCheckRequested(id) => {
                self.check_status(id);
            }
            UiEvent::PrintRequested(id) => self.print_invoice(id),
            UiEvent::ExportRequested(ExportFormat::Excel) => self.export_to_excel(),
            UiEvent::ExportRequested(ExportFormat::Pdf) => self.export_to_pdf(),
            UiEvent::DestructiveSubmit { action } => {
                if self.confirm_destructive(action) {
                    tracing::info!("Confirmed {} submit", action.verb());
                } else {
                    tracing::info!("Declined {} submit", action.verb());
                }
            }
        }
    }

    /// Drain the event queue, one event per turn
    pub async fn run(&self, mut events: mpsc::UnboundedReceiver<UiEvent>) {
        while let Some(event) = events.recv().await {
            self.handle(event);
        }
    }
}
