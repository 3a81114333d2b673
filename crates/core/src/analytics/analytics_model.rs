//! Dashboard analytics models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{GOLD_PREFIX, SILVER_PREFIX};
use crate::utils::time_utils::parse_date_bound;

/// Metal restriction applied by the dashboard filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MetalFilter {
    #[default]
    All,
    Gold,
    Silver,
}

impl MetalFilter {
    /// Prefix a record's uppercased metal type must start with.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            MetalFilter::All => None,
            MetalFilter::Gold => Some(GOLD_PREFIX),
            MetalFilter::Silver => Some(SILVER_PREFIX),
        }
    }
}

impl FromStr for MetalFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ALL" | "" => Ok(MetalFilter::All),
            "GOLD" => Ok(MetalFilter::Gold),
            "SILVER" => Ok(MetalFilter::Silver),
            other => Err(format!("Unknown metal filter: {}", other)),
        }
    }
}

impl fmt::Display for MetalFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetalFilter::All => write!(f, "ALL"),
            MetalFilter::Gold => write!(f, "GOLD"),
            MetalFilter::Silver => write!(f, "SILVER"),
        }
    }
}

/// Date range and metal restriction for the dashboard.
///
/// Both date bounds are inclusive; the end bound covers the whole day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub metal_filter: MetalFilter,
}

impl FilterCriteria {
    /// Builds criteria from raw form input. Blank or unparseable dates leave
    /// that bound unset.
    pub fn from_inputs(start: &str, end: &str, metal: MetalFilter) -> Self {
        Self {
            start_date: parse_date_bound(start),
            end_date: parse_date_bound(end),
            metal_filter: metal,
        }
    }

    pub fn has_date_bounds(&self) -> bool {
        self.start_date.is_some() || self.end_date.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_spend: Decimal,
    pub gst_paid: Decimal,
    pub count: usize,
    pub avg_invoice: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyBucket {
    /// `YYYY-MM`
    pub month: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    /// `YYYY-MM-DD`
    pub date: String,
    pub total: Decimal,
}

/// Number of invoices per normalized metal label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetalShare {
    pub name: String,
    pub value: usize,
}

/// Pre-tax amount vs GST for one invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GstRow {
    pub id: Option<String>,
    pub invoice_date: String,
    pub amount_without_gst: Decimal,
    pub gst_amount: Decimal,
}

/// Sum of pre-tax amounts per metal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestedTotals {
    pub gold: Decimal,
    pub silver: Decimal,
}

/// One slice of the home page allocation donut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestedSlice {
    pub key: String,
    pub name: String,
    pub value: Decimal,
}
