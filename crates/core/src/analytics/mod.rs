//! Revenue dashboard analytics: filter, aggregation and derived views.

mod aggregations;
mod analytics_model;
mod filter;
mod views;

pub use aggregations::*;
pub use analytics_model::*;
pub use filter::{filter_invoices, matches_criteria};
pub use views::{derive_views, DerivedViews};
