use std::sync::Arc;

use fatoora_ui::{
    AutoConfirm, ConsoleSink, HeadlessPage, InvoiceDesk, UiConfig, init_logger_with_file,
};
use shared::InvoiceId;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = UiConfig::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Fatoora front layer starting...");
    tracing::info!("Invoice server: {}", config.api_base_url);

    // 2. Assemble the desk against the configured server
    let client = config.client_config().build_http_client();
    let desk = InvoiceDesk::with_client(
        client,
        Arc::new(ConsoleSink::new()),
        Arc::new(HeadlessPage),
        Arc::new(AutoConfirm),
    );

    // 3. Run the requested operation
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [op, id] if op == "check-status" => {
            let id = InvoiceId(id.parse()?);
            if let Err(e) = desk.check_status(id).await? {
                tracing::warn!("Status check did not succeed: {}", e);
            }
        }
        [op, id] if op == "print" => {
            desk.print_invoice(InvoiceId(id.parse()?));
        }
        [op] if op == "export-excel" => desk.export_to_excel(),
        [op] if op == "export-pdf" => desk.export_to_pdf(),
        _ => {
            eprintln!(
                "Usage: fatoora-ui <check-status ID | print ID | export-excel | export-pdf>"
            );
        }
    }

    Ok(())
}
