//! Reductions over a filtered invoice set.
//!
//! Every function here is total: records missing the fields a reduction
//! needs are skipped, never reported.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use crate::analytics::analytics_model::{
    DailyBucket, GstRow, InvestedSlice, InvestedTotals, KpiSummary, MetalShare, MonthlyBucket,
};
use crate::constants::DAILY_TREND_WINDOW_DAYS;
use crate::invoices::{InvoiceRecord, MetalKind};
use crate::utils::time_utils::{day_key, month_key, trailing_window_start};

fn add(acc: &mut Decimal, value: Decimal) {
    *acc = acc.saturating_add(value);
}

pub fn kpi_summary(records: &[InvoiceRecord]) -> KpiSummary {
    if records.is_empty() {
        return KpiSummary::default();
    }

    let mut total_spend = Decimal::ZERO;
    let mut gst_paid = Decimal::ZERO;
    for inv in records {
        if let Some(total) = inv.total_amount {
            add(&mut total_spend, total);
        }
        if let Some(gst) = inv.gst_amount {
            add(&mut gst_paid, gst);
        }
    }

    let count = records.len();
    let avg_invoice = total_spend / Decimal::from(count);

    KpiSummary {
        total_spend,
        gst_paid,
        count,
        avg_invoice,
    }
}

/// Sums `totalAmount` per `YYYY-MM`, ascending.
pub fn monthly_totals(records: &[InvoiceRecord]) -> Vec<MonthlyBucket> {
    bucket_totals(records, |_| true, month_key)
        .into_iter()
        .map(|(month, total)| MonthlyBucket { month, total })
        .collect()
}

/// Sums `totalAmount` per `YYYY-MM-DD` for records no older than the trailing
/// window ending at `now`, ascending.
pub fn daily_totals(records: &[InvoiceRecord], now: NaiveDateTime) -> Vec<DailyBucket> {
    let cutoff = trailing_window_start(now, DAILY_TREND_WINDOW_DAYS);
    bucket_totals(records, |d| d >= cutoff, day_key)
        .into_iter()
        .map(|(date, total)| DailyBucket { date, total })
        .collect()
}

fn bucket_totals<P, K>(records: &[InvoiceRecord], include: P, key: K) -> BTreeMap<String, Decimal>
where
    P: Fn(NaiveDateTime) -> bool,
    K: Fn(NaiveDateTime) -> String,
{
    let mut buckets: BTreeMap<String, Decimal> = BTreeMap::new();
    for inv in records {
        let (Some(date), Some(total)) = (inv.parsed_date(), inv.total_amount) else {
            continue;
        };
        if !include(date) {
            continue;
        }
        add(buckets.entry(key(date)).or_insert(Decimal::ZERO), total);
    }
    buckets
}

/// Invoice count per normalized metal label. Order is unspecified.
pub fn metal_distribution(records: &[InvoiceRecord]) -> Vec<MetalShare> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for inv in records {
        *counts.entry(inv.metal().label().to_string()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(name, value)| MetalShare { name, value })
        .collect()
}

pub fn gst_rows(records: &[InvoiceRecord]) -> Vec<GstRow> {
    records
        .iter()
        .map(|inv| GstRow {
            id: inv.id.clone(),
            invoice_date: inv.invoice_date.clone().unwrap_or_default(),
            amount_without_gst: inv.amount_without_gst.unwrap_or(Decimal::ZERO),
            gst_amount: inv.gst_amount.unwrap_or(Decimal::ZERO),
        })
        .collect()
}

/// Sums `amountWithoutGst` for gold and silver records.
pub fn invested_totals(records: &[InvoiceRecord]) -> InvestedTotals {
    let mut totals = InvestedTotals::default();
    for inv in records {
        let (Some(label), Some(base)) = (inv.metal_label(), inv.amount_without_gst) else {
            continue;
        };
        match MetalKind::from_label(Some(label)) {
            MetalKind::Gold => add(&mut totals.gold, base),
            MetalKind::Silver => add(&mut totals.silver, base),
            MetalKind::Other(_) | MetalKind::Unknown => {}
        }
    }
    totals
}

/// Allocation slices for the home page; metals with nothing invested are
/// left out.
pub fn invested_breakdown(totals: &InvestedTotals) -> Vec<InvestedSlice> {
    [
        ("GOLD", "Gold", totals.gold),
        ("SILVER", "Silver", totals.silver),
    ]
    .into_iter()
    .filter(|(_, _, value)| *value > Decimal::ZERO)
    .map(|(key, name, value)| InvestedSlice {
        key: key.to_string(),
        name: name.to_string(),
        value,
    })
    .collect()
}
