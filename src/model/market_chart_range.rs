use chrono::NaiveDateTime;
use serde::Serialize;

/// Same series as `Market_Chart` but fetched through the explicit
/// `[from, to]` range endpoint; columns are prefixed `mrag_`.
#[derive(Debug, Clone, Serialize)]
pub struct Market_Chart_Range {
    pub mrag_data_ts: NaiveDateTime,
    pub mrag_currency: String,
    pub coin_id: String,
    pub date: NaiveDateTime,
    pub mrag_price: f64,
    pub mrag_market_cap: f64,
    pub mrag_volume: f64,
}
