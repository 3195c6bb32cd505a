// fatoora-ui/tests/desk_integration.rs
// Integration tests: the status-check protocol and the invocation surface,
// exercised against in-memory stand-ins for the server and the page.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use fatoora_client::{ClientConfig, ClientError, ClientResult};
use fatoora_ui::form::FormRow;
use fatoora_ui::{
    ConfirmPrompt, DestructiveAction, ExportFormat, InvoiceDesk, NotificationCenter,
    NotificationSink, PageHost, StatusApi, TotalsDisplay, UiEvent,
};
use shared::{InvoiceId, LineTotals, Notification, NotificationId, Severity, StatusCheckResult};
use tokio::sync::mpsc;

/// Scripted server behavior, one script per mock
enum Script {
    Success,
    Failure(&'static str),
    NetworkError,
}

struct MockStatusApi {
    script: Script,
    calls: AtomicUsize,
}

impl MockStatusApi {
    fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl StatusApi for MockStatusApi {
    async fn invoice_status(&self, _id: InvoiceId) -> ClientResult<StatusCheckResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Success => Ok(StatusCheckResult {
                success: true,
                message: Some("Status retrieved".into()),
                data: None,
            }),
            Script::Failure(message) => Ok(StatusCheckResult {
                success: false,
                message: Some((*message).into()),
                data: None,
            }),
            Script::NetworkError => Err(ClientError::Internal("connection refused".into())),
        }
    }
}

#[derive(Default)]
struct RecordingSink {
    inserted: Mutex<Vec<Notification>>,
    removed: Mutex<Vec<NotificationId>>,
}

impl RecordingSink {
    fn messages(&self) -> Vec<(String, Severity)> {
        self.inserted
            .lock()
            .unwrap()
            .iter()
            .map(|n| (n.message.clone(), n.severity))
            .collect()
    }
}

impl NotificationSink for RecordingSink {
    fn insert(&self, notification: &Notification) {
        self.inserted.lock().unwrap().push(notification.clone());
    }

    fn remove(&self, id: NotificationId) {
        self.removed.lock().unwrap().push(id);
    }
}

#[derive(Default)]
struct CountingPage {
    reloads: AtomicUsize,
    windows: Mutex<Vec<String>>,
}

impl PageHost for CountingPage {
    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }

    fn open_window(&self, url: &str) {
        self.windows.lock().unwrap().push(url.to_string());
    }
}

#[derive(Default)]
struct RecordingDisplay {
    rendered: Mutex<Vec<LineTotals>>,
}

impl TotalsDisplay for RecordingDisplay {
    fn render(&self, _row: &FormRow, totals: &LineTotals) {
        self.rendered.lock().unwrap().push(*totals);
    }
}

struct ScriptedConfirm {
    accept: bool,
    prompts: Mutex<Vec<String>>,
}

impl ConfirmPrompt for ScriptedConfirm {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.lock().unwrap().push(message.to_string());
        self.accept
    }
}

struct Fixture {
    desk: InvoiceDesk,
    sink: Arc<RecordingSink>,
    page: Arc<CountingPage>,
    display: Arc<RecordingDisplay>,
    confirm: Arc<ScriptedConfirm>,
}

fn fixture(api: Arc<MockStatusApi>, accept_prompts: bool) -> Fixture {
    let sink = Arc::new(RecordingSink::default());
    let page = Arc::new(CountingPage::default());
    let display = Arc::new(RecordingDisplay::default());
    let confirm = Arc::new(ScriptedConfirm {
        accept: accept_prompts,
        prompts: Mutex::new(Vec::new()),
    });

    // Long expiry so no timer interferes with the assertions
    let notifier = NotificationCenter::with_auto_dismiss(
        sink.clone() as Arc<dyn NotificationSink>,
        Duration::from_secs(60),
    );

    let client = ClientConfig::new("http://localhost:8000").build_http_client();
    let desk = InvoiceDesk::new(
        client,
        api as Arc<dyn StatusApi>,
        notifier,
        page.clone() as Arc<dyn PageHost>,
        display.clone() as Arc<dyn TotalsDisplay>,
        confirm.clone() as Arc<dyn ConfirmPrompt>,
    );

    Fixture {
        desk,
        sink,
        page,
        display,
        confirm,
    }
}

#[tokio::test]
async fn test_status_success_notifies_then_reloads_once() {
    let f = fixture(MockStatusApi::new(Script::Success), true);

    let result = f.desk.check_status(InvoiceId(1)).await.unwrap().unwrap();
    assert!(result.success);

    let messages = f.sink.messages();
    assert_eq!(
        messages,
        vec![("Status updated successfully".to_string(), Severity::Success)]
    );
    assert_eq!(f.page.reloads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_status_failure_surfaces_server_message_without_reload() {
    let f = fixture(
        MockStatusApi::new(Script::Failure("Invoice not yet submitted to ZATCA")),
        true,
    );

    let result = f.desk.check_status(InvoiceId(2)).await.unwrap().unwrap();
    assert!(!result.success);

    let messages = f.sink.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].0.contains("Invoice not yet submitted to ZATCA"));
    assert_eq!(messages[0].1, Severity::Error);
    assert_eq!(f.page.reloads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_network_failure_notifies_generically_without_reload() {
    let f = fixture(MockStatusApi::new(Script::NetworkError), true);

    let result = f.desk.check_status(InvoiceId(3)).await.unwrap();
    assert!(result.is_err());

    let messages = f.sink.messages();
    assert_eq!(
        messages,
        vec![("Error checking status".to_string(), Severity::Error)]
    );
    assert_eq!(f.page.reloads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_overlapping_checks_notify_independently() {
    let api = MockStatusApi::new(Script::Failure("still processing"));
    let f = fixture(api.clone(), true);

    let first = f.desk.check_status(InvoiceId(4));
    let second = f.desk.check_status(InvoiceId(4));
    let (a, b) = tokio::join!(first, second);
    a.unwrap().unwrap();
    b.unwrap().unwrap();

    assert_eq!(api.calls.load(Ordering::SeqCst), 2);
    assert_eq!(f.sink.messages().len(), 2);
    assert_eq!(f.page.reloads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_print_opens_one_window_at_print_view() {
    let f = fixture(MockStatusApi::new(Script::Success), true);

    f.desk.print_invoice(InvoiceId(42));

    let windows = f.page.windows.lock().unwrap();
    assert_eq!(
        windows.as_slice(),
        &["http://localhost:8000/invoices/42/print/".to_string()]
    );
    assert_eq!(f.page.reloads.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_export_stubs_notify_and_do_nothing_else() {
    let f = fixture(MockStatusApi::new(Script::Success), true);

    f.desk.export_to_excel();
    f.desk.export_to_pdf();

    let messages = f.sink.messages();
    assert_eq!(messages.len(), 2);
    for (message, severity) in &messages {
        assert_eq!(message, "Export feature coming soon!");
        assert_eq!(*severity, Severity::Info);
    }
    assert_eq!(f.page.reloads.load(Ordering::SeqCst), 0);
    assert!(f.page.windows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_destructive_submit_is_gated_by_the_prompt() {
    let declined = fixture(MockStatusApi::new(Script::Success), false);
    assert!(!declined.desk.confirm_destructive(DestructiveAction::Delete));
    assert_eq!(
        declined.confirm.prompts.lock().unwrap().as_slice(),
        &["Are you sure you want to delete this item?".to_string()]
    );

    let accepted = fixture(MockStatusApi::new(Script::Success), true);
    assert!(accepted.desk.confirm_destructive(DestructiveAction::Cancel));
    assert_eq!(
        accepted.confirm.prompts.lock().unwrap().as_slice(),
        &["Are you sure you want to cancel this item?".to_string()]
    );
}

#[tokio::test]
async fn test_row_edit_event_renders_totals() {
    let f = fixture(MockStatusApi::new(Script::Success), true);

    let row = FormRow::new()
        .with_field("items-0-quantity", "3")
        .with_field("items-0-unit_price", "100")
        .with_field("items-0-vat_rate", "15")
        .with_field("items-0-discount", "10");
    f.desk.handle(UiEvent::RowEdited { row });

    let rendered = f.display.rendered.lock().unwrap();
    assert_eq!(rendered.len(), 1);
    assert!((rendered[0].subtotal - 290.0).abs() < 1e-9);
    assert!((rendered[0].vat_amount - 43.5).abs() < 1e-9);
    assert!((rendered[0].total - 333.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_incomplete_row_event_renders_nothing() {
    let f = fixture(MockStatusApi::new(Script::Success), true);

    let row = FormRow::new().with_field("items-0-quantity", "3");
    f.desk.handle(UiEvent::RowEdited { row });

    assert!(f.display.rendered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_dismiss_event_removes_notification() {
    let f = fixture(MockStatusApi::new(Script::Success), true);

    let id = f.desk.notifier().notify("saved", Severity::Success);
    f.desk.handle(UiEvent::NotificationDismissed(id));

    assert_eq!(f.sink.removed.lock().unwrap().as_slice(), &[id]);

    // Dismissing again (stale id) is a no-op
    f.desk.handle(UiEvent::NotificationDismissed(id));
    assert_eq!(f.sink.removed.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_export_event_routing() {
    let f = fixture(MockStatusApi::new(Script::Success), true);

    f.desk.handle(UiEvent::ExportRequested(ExportFormat::Excel));
    f.desk.handle(UiEvent::ExportRequested(ExportFormat::Pdf));

    assert_eq!(f.sink.messages().len(), 2);
}

#[tokio::test]
async fn test_dispatcher_drains_queued_events() {
    let f = fixture(MockStatusApi::new(Script::Success), true);
    let desk = Arc::new(f.desk);

    let (tx, rx) = mpsc::unbounded_channel();
    let loop_desk = Arc::clone(&desk);
    let dispatcher = tokio::spawn(async move { loop_desk.run(rx).await });

    let row = FormRow::new()
        .with_field("items-0-quantity", "2")
        .with_field("items-0-unit_price", "50")
        .with_field("items-0-vat_rate", "5");
    tx.send(UiEvent::RowEdited { row }).unwrap();
    tx.send(UiEvent::ExportRequested(ExportFormat::Pdf)).unwrap();

    // Closing the queue ends the loop once everything is drained
    drop(tx);
    dispatcher.await.unwrap();

    assert_eq!(f.display.rendered.lock().unwrap().len(), 1);
    assert_eq!(
        f.sink.messages(),
        vec![("Export feature coming soon!".to_string(), Severity::Info)]
    );
}
