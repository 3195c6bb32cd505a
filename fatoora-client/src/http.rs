//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{InvoiceId, StatusCheckResult};

/// Header that marks requests as AJAX calls; the server selects its JSON
/// branch on it.
const REQUESTED_WITH_HEADER: &str = "X-Requested-With";
const REQUESTED_WITH_VALUE: &str = "XMLHttpRequest";

/// HTTP client for making network requests to the invoice server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    /// Server base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build an absolute URL for a server path
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self
            .client
            .get(self.url(path))
            .header(REQUESTED_WITH_HEADER, REQUESTED_WITH_VALUE);

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        // A 2xx body that is not the expected JSON shape is a decode error
        response.json().await.map_err(Into::into)
    }

    // ========== Invoice API ==========

    /// Check an invoice's current processing state
    pub async fn invoice_status(&self, id: InvoiceId) -> ClientResult<StatusCheckResult> {
        tracing::debug!("Checking status for invoice {}", id);
        self.get(&Self::status_path(id)).await
    }

    /// Relative path of the status endpoint for an invoice
    pub fn status_path(id: InvoiceId) -> String {
        format!("invoices/{}/status/", id)
    }

    /// Absolute URL of the print view for an invoice
    ///
    /// The print view is opened in a new browsing context by the page host;
    /// no request is issued by this client.
    pub fn print_view_url(&self, id: InvoiceId) -> String {
        self.url(&format!("invoices/{}/print/", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_path() {
        assert_eq!(HttpClient::status_path(InvoiceId(42)), "invoices/42/status/");
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ClientConfig::new("http://localhost:8000/").build_http_client();
        assert_eq!(
            client.url("invoices/1/status/"),
            "http://localhost:8000/invoices/1/status/"
        );
        assert_eq!(
            client.url("/invoices/1/status/"),
            "http://localhost:8000/invoices/1/status/"
        );
    }

    #[test]
    fn test_print_view_url() {
        let client = ClientConfig::new("http://localhost:8000").build_http_client();
        assert_eq!(
            client.print_view_url(InvoiceId(7)),
            "http://localhost:8000/invoices/7/print/"
        );
    }
}
