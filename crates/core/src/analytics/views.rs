use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::analytics::aggregations::{
    daily_totals, gst_rows, invested_totals, kpi_summary, metal_distribution, monthly_totals,
};
use crate::analytics::analytics_model::{
    DailyBucket, FilterCriteria, GstRow, InvestedTotals, KpiSummary, MetalShare, MonthlyBucket,
};
use crate::analytics::filter::filter_invoices;
use crate::invoices::InvoiceRecord;
use crate::valuation::{calculate_profits, Holdings, Profits};

/// Everything the revenue dashboard displays, recomputed from scratch on
/// every input change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedViews {
    pub kpi: KpiSummary,
    pub monthly: Vec<MonthlyBucket>,
    pub daily: Vec<DailyBucket>,
    pub metals: Vec<MetalShare>,
    pub gst: Vec<GstRow>,
    pub invested: InvestedTotals,
    pub profits: Profits,
}

/// Runs the filter, aggregation and valuation stages.
///
/// `now` anchors the trailing daily window.
pub fn derive_views(
    records: &[InvoiceRecord],
    criteria: &FilterCriteria,
    holdings: &Holdings,
    now: NaiveDateTime,
) -> DerivedViews {
    let filtered = filter_invoices(records, criteria);
    let invested = invested_totals(&filtered);

    DerivedViews {
        kpi: kpi_summary(&filtered),
        monthly: monthly_totals(&filtered),
        daily: daily_totals(&filtered, now),
        metals: metal_distribution(&filtered),
        gst: gst_rows(&filtered),
        profits: calculate_profits(&invested, holdings),
        invested,
    }
}
