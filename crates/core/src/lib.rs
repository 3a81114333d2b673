//! Aura Gold Core - Invoice analytics, valuation and session services.
//!
//! This crate contains the domain logic of the Aura Gold console. It is
//! transport-agnostic: invoice and auth endpoints are reached through the
//! traits in [`invoices`] and [`session`], implemented by the
//! `invoice-api` crate.

pub mod analytics;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod invoices;
pub mod session;
pub mod utils;
pub mod valuation;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
