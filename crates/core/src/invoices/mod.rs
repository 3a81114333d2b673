//! Invoices module - domain models, services, and traits.

mod invoices_model;
mod invoices_service;
mod invoices_traits;

pub use invoices_model::{
    decode_invoice_list, InvoiceRecord, InvoiceUpload, ManualInvoiceForm, MetalKind,
    NewManualInvoice, RecordScope,
};
pub use invoices_service::{sort_by_invoice_date, InvoiceService};
pub use invoices_traits::{InvoiceGatewayTrait, InvoiceRecordSource, InvoiceServiceTrait};

#[cfg(test)]
mod invoices_model_tests;
