//! Aura Gold Invoice API - REST client for the invoice and user service.
//!
//! This crate provides the HTTP client for listing, creating, uploading and
//! deleting invoices and for user login and signup. The client implements
//! the gateway traits of `auragold-core`, so services and the dashboard
//! poller can use it directly.
//!
//! # Usage
//!
//! ```rust,ignore
//! use auragold_core::invoices::RecordScope;
//! use auragold_invoice_api::InvoiceApiClient;
//!
//! let client = InvoiceApiClient::new("https://aura-1jkg.onrender.com")?;
//! let invoices = client.list_invoices(&RecordScope::User("42".into())).await?;
//! ```

mod client;
mod error;
mod gateway;
mod types;

pub use client::{InvoiceApiClient, DEFAULT_BASE_URL};
pub use error::{InvoiceApiError, Result};
pub use types::*;
