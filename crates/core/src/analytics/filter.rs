use crate::analytics::analytics_model::FilterCriteria;
use crate::invoices::InvoiceRecord;
use crate::utils::time_utils::{end_of_day, start_of_day};

/// Narrows records to the criteria, preserving order.
pub fn filter_invoices(records: &[InvoiceRecord], criteria: &FilterCriteria) -> Vec<InvoiceRecord> {
    records
        .iter()
        .filter(|inv| matches_criteria(inv, criteria))
        .cloned()
        .collect()
}

pub fn matches_criteria(record: &InvoiceRecord, criteria: &FilterCriteria) -> bool {
    let date = record.parsed_date();

    if let Some(start) = criteria.start_date {
        match date {
            Some(d) if d >= start_of_day(start) => {}
            _ => return false,
        }
    }

    if let Some(end) = criteria.end_date {
        match (date, end_of_day(end)) {
            (Some(d), Some(last)) if d <= last => {}
            (Some(_), None) => {}
            _ => return false,
        }
    }

    if let Some(prefix) = criteria.metal_filter.prefix() {
        let metal = record.metal_label().unwrap_or_default().to_uppercase();
        if !metal.starts_with(prefix) {
            return false;
        }
    }

    true
}
