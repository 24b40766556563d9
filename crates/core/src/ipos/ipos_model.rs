use serde::{Deserialize, Serialize};

/// Parses a raw CSV cell into an optional numeric value.
///
/// Thousands-separator commas and surrounding whitespace are stripped before
/// parsing. Absent, empty, and unparseable cells all map to `None`; a
/// malformed cell never fails the row it came from.
pub fn parse_numeric(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;
    if raw.trim().is_empty() {
        return None;
    }
    raw.replace(',', "").trim().parse::<f64>().ok()
}

/// Domain model representing one IPO record.
///
/// `date` and `name` are free-form text copied verbatim from the source file;
/// every numeric field is either a parsed value or explicitly absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipo {
    pub id: i32,
    pub date: String,
    pub name: String,
    pub issue_size: Option<f64>,
    pub qib_subscription: Option<f64>,
    pub hni_subscription: Option<f64>,
    pub rii_subscription: Option<f64>,
    pub total_subscription: Option<f64>,
    pub offer_price: Option<f64>,
    pub list_price: Option<f64>,
    pub listing_gain_pct: Option<f64>,
    pub cmp_bse: Option<f64>,
    pub cmp_nse: Option<f64>,
    pub current_gain_pct: Option<f64>,
}

/// Input model for a record about to be stored. The identity is assigned by
/// the store on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIpo {
    pub date: String,
    pub name: String,
    pub issue_size: Option<f64>,
    pub qib_subscription: Option<f64>,
    pub hni_subscription: Option<f64>,
    pub rii_subscription: Option<f64>,
    pub total_subscription: Option<f64>,
    pub offer_price: Option<f64>,
    pub list_price: Option<f64>,
    pub listing_gain_pct: Option<f64>,
    pub cmp_bse: Option<f64>,
    pub cmp_nse: Option<f64>,
    pub current_gain_pct: Option<f64>,
}
