//! Invoice domain models.

use chrono::NaiveDateTime;
use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{
    DISPLAY_DECIMAL_PRECISION, GOLD_PREFIX, SILVER_PREFIX, UNKNOWN_METAL_LABEL,
};
use crate::utils::parse_decimal;
use crate::utils::time_utils::parse_invoice_date;

/// One captured purchase document, as returned by the invoice API.
///
/// Every field is optional. Malformed amounts and ids decode to `None`
/// instead of failing the whole record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRecord {
    #[serde(default, deserialize_with = "lenient_format::deserialize_option_id")]
    pub id: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_format::deserialize_option_id"
    )]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_format::deserialize_option_string")]
    pub invoice_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_format::deserialize_option_string")]
    pub metal_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_format::deserialize_option_decimal")]
    pub amount_without_gst: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_format::deserialize_option_decimal")]
    pub gst_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_format::deserialize_option_decimal")]
    pub total_amount: Option<Decimal>,
}

impl InvoiceRecord {
    /// Parsed invoice date; unparseable strings count as missing.
    pub fn parsed_date(&self) -> Option<NaiveDateTime> {
        self.invoice_date.as_deref().and_then(parse_invoice_date)
    }

    /// Metal type with empty labels treated as missing.
    pub fn metal_label(&self) -> Option<&str> {
        self.metal_type.as_deref().filter(|m| !m.is_empty())
    }

    pub fn metal(&self) -> MetalKind {
        MetalKind::from_label(self.metal_label())
    }
}

/// Metal label after case-insensitive prefix normalization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetalKind {
    Gold,
    Silver,
    /// Any other label, uppercased.
    Other(String),
    Unknown,
}

impl MetalKind {
    pub fn from_label(raw: Option<&str>) -> Self {
        let Some(raw) = raw.filter(|m| !m.is_empty()) else {
            return MetalKind::Unknown;
        };
        let upper = raw.to_uppercase();
        if upper.starts_with(GOLD_PREFIX) {
            MetalKind::Gold
        } else if upper.starts_with(SILVER_PREFIX) {
            MetalKind::Silver
        } else {
            MetalKind::Other(upper)
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MetalKind::Gold => GOLD_PREFIX,
            MetalKind::Silver => SILVER_PREFIX,
            MetalKind::Other(label) => label,
            MetalKind::Unknown => UNKNOWN_METAL_LABEL,
        }
    }
}

/// Who the record listing is scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordScope {
    User(String),
    All,
}

/// Form input for a manually entered invoice.
///
/// Amounts are kept as the raw text the user typed; [`NewManualInvoice`]
/// is derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualInvoiceForm {
    pub user_id: Option<String>,
    pub invoice_date: String,
    pub metal_type: String,
    pub amount_without_gst: String,
    pub gst_amount: String,
}

impl ManualInvoiceForm {
    /// `amount_without_gst + gst_amount` rounded to paise, when both parse.
    pub fn derived_total(&self) -> Option<Decimal> {
        let base = parse_decimal(&self.amount_without_gst)?;
        let gst = parse_decimal(&self.gst_amount)?;
        Some((base + gst).round_dp_with_strategy(
            DISPLAY_DECIMAL_PRECISION,
            RoundingStrategy::MidpointAwayFromZero,
        ))
    }

    pub fn to_payload(&self) -> NewManualInvoice {
        NewManualInvoice {
            user_id: self.user_id.clone().filter(|id| !id.is_empty()),
            invoice_date: non_empty(&self.invoice_date),
            metal_type: non_empty(&self.metal_type),
            amount_without_gst: parse_decimal(&self.amount_without_gst),
            gst_amount: parse_decimal(&self.gst_amount),
            total_amount: self.derived_total(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Payload sent to the manual entry endpoint. Empty fields are sent as null.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewManualInvoice {
    pub user_id: Option<String>,
    pub invoice_date: Option<String>,
    pub metal_type: Option<String>,
    pub amount_without_gst: Option<Decimal>,
    pub gst_amount: Option<Decimal>,
    pub total_amount: Option<Decimal>,
}

/// A file picked for upload and OCR parsing by the invoice API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub user_id: Option<String>,
}

/// Decodes a record-listing payload.
///
/// Anything other than a JSON array is "no data". Array elements that are
/// not objects are skipped.
pub fn decode_invoice_list(payload: Value) -> Vec<InvoiceRecord> {
    let Value::Array(items) = payload else {
        debug!("Invoice listing payload is not an array; treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| {
            if !item.is_object() {
                debug!("Skipping non-object invoice entry: {}", item);
                return None;
            }
            match serde_json::from_value::<InvoiceRecord>(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping undecodable invoice entry: {}", e);
                    None
                }
            }
        })
        .collect()
}

// Lenient decoding for API payloads. Unlike the strict request formats, bad
// values never fail deserialization; they are logged and become `None`.
pub(crate) mod lenient_format {
    use log::debug;
    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use crate::utils::parse_decimal;

    pub fn deserialize_option_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => {
                let parsed = parse_decimal(&s);
                if parsed.is_none() && !s.trim().is_empty() {
                    debug!("Ignoring non-numeric amount '{}'", s);
                }
                parsed
            }
            Some(Value::Number(n)) => {
                let parsed = parse_decimal(&n.to_string());
                if parsed.is_none() {
                    debug!("Ignoring amount outside decimal range: {}", n);
                }
                parsed
            }
            Some(other) => {
                debug!("Ignoring amount of unexpected type: {}", other);
                None
            }
        })
    }

    pub fn deserialize_option_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    pub fn deserialize_option_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(Value::String(s)) => Some(s),
            None | Some(Value::Null) => None,
            Some(other) => {
                debug!("Ignoring non-string field value: {}", other);
                None
            }
        })
    }
}
