//! Plain-text rendering of console output.

use auragold_core::analytics::{InvestedSlice, InvestedTotals};
use auragold_core::dashboard::{DashboardSnapshot, FetchStatus};
use auragold_core::invoices::InvoiceRecord;
use auragold_core::utils::format_inr;
use auragold_core::valuation::ProfitDirection;
use rust_decimal::Decimal;

const NOT_AVAILABLE: &str = "-";

pub fn invoice_line(record: &InvoiceRecord) -> String {
    format!(
        "{:<12} {:<12} {:<10} {:>16} {:>14} {:>16}",
        record.id.as_deref().unwrap_or(NOT_AVAILABLE),
        record.invoice_date.as_deref().unwrap_or(NOT_AVAILABLE),
        record.metal_label().unwrap_or(NOT_AVAILABLE),
        format_inr(record.amount_without_gst),
        format_inr(record.gst_amount),
        format_inr(record.total_amount),
    )
}

pub fn invoice_table(records: &[InvoiceRecord]) -> String {
    if records.is_empty() {
        return "No invoices found.".to_string();
    }
    let mut lines = vec![format!(
        "{:<12} {:<12} {:<10} {:>16} {:>14} {:>16}",
        "ID", "DATE", "METAL", "WITHOUT GST", "GST", "TOTAL"
    )];
    lines.extend(records.iter().map(invoice_line));
    lines.join("\n")
}

pub fn investment_summary(
    display_name: &str,
    totals: &InvestedTotals,
    slices: &[InvestedSlice],
) -> String {
    let mut lines = vec![
        format!("Welcome back, {}", display_name),
        format!("Gold invested:   {}", format_inr(Some(totals.gold))),
        format!("Silver invested: {}", format_inr(Some(totals.silver))),
    ];
    if slices.is_empty() {
        lines.push("No investments yet.".to_string());
    } else {
        let whole = slices
            .iter()
            .fold(Decimal::ZERO, |acc, s| acc.saturating_add(s.value));
        for slice in slices {
            let share = slice
                .value
                .checked_div(whole)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .unwrap_or(Decimal::ZERO)
                .round_dp(1);
            lines.push(format!("  {:<7} {:>5.1}%", slice.name, share));
        }
    }
    lines.join("\n")
}

fn status_line(status: &FetchStatus) -> String {
    match status {
        FetchStatus::Idle => "Status: idle".to_string(),
        FetchStatus::Loading => "Status: loading...".to_string(),
        FetchStatus::Success => "Status: up to date".to_string(),
        FetchStatus::Error(message) => format!("Status: {}", message),
    }
}

fn profit_line(metal: &str, profit: Decimal) -> String {
    let marker = match ProfitDirection::of(profit) {
        ProfitDirection::Positive => "▲",
        ProfitDirection::Negative => "▼",
        ProfitDirection::Flat => "·",
    };
    format!("  {:<7} {} {}", metal, marker, format_inr(Some(profit)))
}

pub fn dashboard(snapshot: &DashboardSnapshot) -> String {
    let views = &snapshot.views;
    let mut lines = vec![
        status_line(&snapshot.status),
        format!("Records loaded: {}", snapshot.record_count),
        String::new(),
        format!("Total spend:   {}", format_inr(Some(views.kpi.total_spend))),
        format!("GST paid:      {}", format_inr(Some(views.kpi.gst_paid))),
        format!("Invoices:      {}", views.kpi.count),
        format!("Average:       {}", format_inr(Some(views.kpi.avg_invoice))),
    ];

    lines.push(String::new());
    lines.push("Monthly spend".to_string());
    lines.extend(
        views
            .monthly
            .iter()
            .map(|b| format!("  {}  {}", b.month, format_inr(Some(b.total)))),
    );

    lines.push(String::new());
    lines.push("Daily spend (last 30 days)".to_string());
    lines.extend(
        views
            .daily
            .iter()
            .map(|b| format!("  {}  {}", b.date, format_inr(Some(b.total)))),
    );

    let mut metals = views.metals.clone();
    metals.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    lines.push(String::new());
    lines.push("Invoices by metal".to_string());
    lines.extend(metals.iter().map(|m| format!("  {:<10} {}", m.name, m.value)));

    lines.push(String::new());
    lines.push("GST breakdown".to_string());
    lines.extend(views.gst.iter().map(|row| {
        format!(
            "  {:<12} {:<12} {:>16} {:>14}",
            row.id.as_deref().unwrap_or(NOT_AVAILABLE),
            row.invoice_date,
            format_inr(Some(row.amount_without_gst)),
            format_inr(Some(row.gst_amount)),
        )
    }));

    lines.push(String::new());
    lines.push("Invested".to_string());
    lines.push(format!("  Gold    {}", format_inr(Some(views.invested.gold))));
    lines.push(format!("  Silver  {}", format_inr(Some(views.invested.silver))));
    lines.push("Estimated profit".to_string());
    lines.push(profit_line("Gold", views.profits.gold));
    lines.push(profit_line("Silver", views.profits.silver));

    lines.join("\n")
}
