//! Invoice status checks
//!
//! One asynchronous request per invocation. The outcome always degrades to a
//! notification; only a confirmed success reloads the page. No retry, no
//! de-duplication of overlapping calls.

use std::sync::Arc;

use async_trait::async_trait;
use fatoora_client::{ClientResult, HttpClient};
use shared::{InvoiceId, Severity, StatusCheckResult};

use super::notify::NotificationCenter;

/// Success message shown when the server confirms a status update
pub const STATUS_UPDATED_MSG: &str = "Status updated successfully";
/// Generic failure message for network and malformed-response errors
pub const STATUS_CHECK_FAILED_MSG: &str = "Error checking status";

/// Status endpoint abstraction
///
/// Implemented by [`HttpClient`] for the live server; tests substitute their
/// own implementation, so the protocol branches are exercised without a
/// network.
#[async_trait]
pub trait StatusApi: Send + Sync + 'static {
    async fn invoice_status(&self, id: InvoiceId) -> ClientResult<StatusCheckResult>;
}

#[async_trait]
impl StatusApi for HttpClient {
    async fn invoice_status(&self, id: InvoiceId) -> ClientResult<StatusCheckResult> {
        HttpClient::invoice_status(self, id).await
    }
}

/// Page-level side effects owned by the host environment
pub trait PageHost: Send + Sync + 'static {
    /// Reload the whole page; the only way status results reach the UI
    fn reload(&self);

    /// Open a URL in a new browsing context
    fn open_window(&self, url: &str);
}

/// Host that only logs page effects (headless runs)
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessPage;

impl PageHost for HeadlessPage {
    fn reload(&self) {
        tracing::info!("Page reload requested");
    }

    fn open_window(&self, url: &str) {
        tracing::info!("Open window: {}", url);
    }
}

/// Drives the status-check protocol
pub struct StatusPoller {
    api: Arc<dyn StatusApi>,
    notifier: NotificationCenter,
    page: Arc<dyn PageHost>,
}

impl StatusPoller {
    pub fn new(
        api: Arc<dyn StatusApi>,
        notifier: NotificationCenter,
        page: Arc<dyn PageHost>,
    ) -> Self {
        Self {
            api,
            notifier,
            page,
        }
    }

    /// Check one invoice's status and surface the outcome
    ///
    /// - server confirms (`success == true`): one success notification, then
    ///   one page reload;
    /// - server declines (`success == false`): one error notification with
    ///   the server-supplied message, no reload;
    /// - network or malformed response: one generic failure notification
    ///   plus a diagnostic log entry, no reload.
    ///
    /// The raw result is returned after the side effects, so callers can
    /// still compose on it.
    pub async fn check_status(&self, id: InvoiceId) -> ClientResult<StatusCheckResult> {
        let result = self.api.invoice_status(id).await;

        match &result {
            Ok(r) if r.success => {
                self.notifier.notify(STATUS_UPDATED_MSG, Severity::Success);
                self.page.reload();
            }
            Ok(r) => {
                self.notifier
                    .notify(r.message_or(STATUS_CHECK_FAILED_MSG), Severity::Error);
            }
            Err(e) => {
                tracing::error!("Status check for invoice {} failed: {}", id, e);
                self.notifier.notify(STATUS_CHECK_FAILED_MSG, Severity::Error);
            }
        }

        result
    }
}
