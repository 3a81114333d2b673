use async_trait::async_trait;

use crate::errors::Result;
use crate::invoices::invoices_model::{
    InvoiceRecord, InvoiceUpload, ManualInvoiceForm, NewManualInvoice, RecordScope,
};

/// Source of invoice records (REST API, fixture, mock).
///
/// Implementations return an empty list for payloads that are not arrays and
/// only fail with a transport error.
#[async_trait]
pub trait InvoiceRecordSource: Send + Sync {
    async fn list_invoices(&self, scope: &RecordScope) -> Result<Vec<InvoiceRecord>>;
}

/// Write operations exposed by the invoice API.
#[async_trait]
pub trait InvoiceGatewayTrait: InvoiceRecordSource {
    async fn create_manual_invoice(&self, invoice: NewManualInvoice) -> Result<InvoiceRecord>;
    async fn upload_invoice(&self, upload: InvoiceUpload) -> Result<InvoiceRecord>;
    async fn delete_invoice(&self, invoice_id: &str) -> Result<()>;
}

/// Trait for invoice service operations
#[async_trait]
pub trait InvoiceServiceTrait: Send + Sync {
    /// Records for the scope, oldest first, undated records last.
    async fn list_invoices(&self, scope: &RecordScope) -> Result<Vec<InvoiceRecord>>;
    async fn create_manual_invoice(&self, form: ManualInvoiceForm) -> Result<InvoiceRecord>;
    async fn upload_invoice(&self, upload: InvoiceUpload) -> Result<InvoiceRecord>;
    /// Deletes remotely, then returns `current` without the deleted record.
    async fn delete_invoice(
        &self,
        invoice_id: &str,
        current: Vec<InvoiceRecord>,
    ) -> Result<Vec<InvoiceRecord>>;
}
