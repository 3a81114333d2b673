use async_trait::async_trait;
use log::{debug, error};
use std::cmp::Ordering;
use std::sync::Arc;

use super::invoices_model::{InvoiceRecord, InvoiceUpload, ManualInvoiceForm, RecordScope};
use super::invoices_traits::{InvoiceGatewayTrait, InvoiceRecordSource, InvoiceServiceTrait};
use crate::errors::{Error, Result, ValidationError};
use crate::utils::parse_decimal;
use crate::utils::time_utils::parse_date_bound;

/// Service for listing and mutating invoices through the invoice API.
pub struct InvoiceService {
    gateway: Arc<dyn InvoiceGatewayTrait>,
}

impl InvoiceService {
    pub fn new(gateway: Arc<dyn InvoiceGatewayTrait>) -> Self {
        Self { gateway }
    }

    fn validate_form(form: &ManualInvoiceForm) -> Result<()> {
        let date = form.invoice_date.trim();
        if !date.is_empty() && parse_date_bound(date).is_none() {
            return Err(ValidationError::InvalidInput(format!(
                "Invoice date '{}' is not a YYYY-MM-DD date",
                date
            ))
            .into());
        }

        for (field, value) in [
            ("amountWithoutGst", &form.amount_without_gst),
            ("gstAmount", &form.gst_amount),
        ] {
            if !value.trim().is_empty() && parse_decimal(value).is_none() {
                return Err(ValidationError::InvalidInput(format!(
                    "{} '{}' is not a number",
                    field, value
                ))
                .into());
            }
        }
        Ok(())
    }
}

/// Sorts records by invoice date ascending; records without a usable date
/// go last. The sort is stable.
pub fn sort_by_invoice_date(records: &mut [InvoiceRecord]) {
    records.sort_by(|a, b| match (a.parsed_date(), b.parsed_date()) {
        (Some(da), Some(db)) => da.cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[async_trait]
impl InvoiceServiceTrait for InvoiceService {
    async fn list_invoices(&self, scope: &RecordScope) -> Result<Vec<InvoiceRecord>> {
        let mut records = self.gateway.list_invoices(scope).await.map_err(|e| {
            error!("Failed to fetch invoices: {}", e);
            e
        })?;
        sort_by_invoice_date(&mut records);
        debug!("Loaded {} invoices for {:?}", records.len(), scope);
        Ok(records)
    }

    async fn create_manual_invoice(&self, form: ManualInvoiceForm) -> Result<InvoiceRecord> {
        Self::validate_form(&form)?;
        let payload = form.to_payload();
        debug!("Saving manual invoice: {:?}", payload);
        self.gateway.create_manual_invoice(payload).await.map_err(|e| {
            error!("Manual invoice save failed: {}", e);
            e
        })
    }

    async fn upload_invoice(&self, upload: InvoiceUpload) -> Result<InvoiceRecord> {
        if upload.file_name.trim().is_empty() || upload.bytes.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "file".to_string(),
            )));
        }
        self.gateway.upload_invoice(upload).await.map_err(|e| {
            error!("Upload failed: {}", e);
            e
        })
    }

    async fn delete_invoice(
        &self,
        invoice_id: &str,
        current: Vec<InvoiceRecord>,
    ) -> Result<Vec<InvoiceRecord>> {
        self.gateway.delete_invoice(invoice_id).await.map_err(|e| {
            error!("Failed to delete invoice {}: {}", invoice_id, e);
            e
        })?;

        Ok(current
            .into_iter()
            .filter(|inv| inv.id.as_deref() != Some(invoice_id))
            .collect())
    }
}
