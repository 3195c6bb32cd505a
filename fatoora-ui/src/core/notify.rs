//! Notification center
//!
//! Manages the page-lifetime collection of transient messages. Each
//! non-sticky notification gets a scheduled auto-dismiss task keyed by its
//! id, so manual and automatic dismissal are idempotent with respect to each
//! other regardless of which fires first.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use shared::{Notification, NotificationId, Severity};
use tokio::task::JoinHandle;

/// Fixed auto-dismiss delay for transient notifications
pub const AUTO_DISMISS_MS: u64 = 5000;

/// Destination for notifications
///
/// Owned by the page/UI toolkit, not by this layer. Passing the sink in
/// explicitly keeps the center decoupled from any global container.
pub trait NotificationSink: Send + Sync + 'static {
    /// Insert at the start of the notification region (most-recent-first)
    fn insert(&self, notification: &Notification);

    /// Remove by id; ids that are no longer present must be tolerated
    fn remove(&self, id: NotificationId);
}

struct CenterInner {
    sink: Arc<dyn NotificationSink>,
    /// Live notifications; the handle is the pending expiry task
    /// (`None` for sticky entries, which never expire).
    active: Mutex<HashMap<NotificationId, Option<JoinHandle<()>>>>,
    auto_dismiss: Duration,
}

/// Process-wide notification manager
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<CenterInner>,
}

impl NotificationCenter {
    /// Create a center with the standard 5 second auto-dismiss
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self::with_auto_dismiss(sink, Duration::from_millis(AUTO_DISMISS_MS))
    }

    /// Create a center with a custom auto-dismiss delay
    pub fn with_auto_dismiss(sink: Arc<dyn NotificationSink>, auto_dismiss: Duration) -> Self {
        Self {
            inner: Arc::new(CenterInner {
                sink,
                active: Mutex::new(HashMap::new()),
                auto_dismiss,
            }),
        }
    }

    /// Surface a transient notification
    ///
    /// Inserts into the sink and schedules auto-dismissal. Duplicate
    /// messages stack; notifications do not interact.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let notification = Notification::new(message, severity);
        self.inner.sink.insert(&notification);
        self.track(notification.id, false);
        notification.id
    }

    /// Surface a notification that never auto-expires
    pub fn notify_sticky(&self, message: impl Into<String>, severity: Severity) -> NotificationId {
        let notification = Notification::new(message, severity).sticky();
        self.inner.sink.insert(&notification);
        self.track(notification.id, true);
        notification.id
    }

    /// Take over lifecycle management of a notification already present in
    /// the sink (e.g. rendered with the page). Non-sticky adoptees expire on
    /// the same schedule as runtime-created ones; sticky ones never do.
    pub fn adopt(&self, notification: &Notification) {
        self.track(notification.id, notification.sticky);
    }

    /// Dismiss a notification now
    ///
    /// Idempotent: returns `true` if the notification was still live, and
    /// `false` (doing nothing) when it was already gone. Cancels the pending
    /// expiry task so a later timer fire cannot double-remove.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let entry = self.inner.active.lock().unwrap().remove(&id);
        match entry {
            Some(timer) => {
                if let Some(handle) = timer {
                    handle.abort();
                }
                self.inner.sink.remove(id);
                true
            }
            None => false,
        }
    }

    /// Number of live notifications
    pub fn live_count(&self) -> usize {
        self.inner.active.lock().unwrap().len()
    }

    fn track(&self, id: NotificationId, sticky: bool) {
        // Hold the registry lock across spawn so the expiry task cannot
        // observe the map before its own entry is inserted.
        let mut active = self.inner.active.lock().unwrap();
        let timer = if sticky {
            None
        } else {
            let inner = Arc::clone(&self.inner);
            Some(tokio::spawn(async move {
                tokio::time::sleep(inner.auto_dismiss).await;
                // Whoever removes the entry performs the sink removal;
                // a prior manual dismiss leaves nothing to do here.
                if inner.active.lock().unwrap().remove(&id).is_some() {
                    inner.sink.remove(id);
                    tracing::debug!("Notification {} expired", id);
                }
            }))
        };
        active.insert(id, timer);
    }
}

/// Sink that keeps notifications in memory and logs them
///
/// Used by the headless binary and anywhere no real page region exists. The
/// in-memory region preserves most-recent-first ordering.
#[derive(Default)]
pub struct ConsoleSink {
    region: Mutex<Vec<Notification>>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current region contents, most recent first
    pub fn snapshot(&self) -> Vec<Notification> {
        self.region.lock().unwrap().clone()
    }
}

impl NotificationSink for ConsoleSink {
    fn insert(&self, notification: &Notification) {
        tracing::info!(
            "[{}] {}",
            notification.severity.style_class(),
            notification.message
        );
        self.region.lock().unwrap().insert(0, notification.clone());
    }

    fn remove(&self, id: NotificationId) {
        self.region.lock().unwrap().retain(|n| n.id != id);
    }
}
