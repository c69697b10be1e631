use chrono::NaiveDateTime;
use serde::Serialize;

/// One `(coin_id, date)` point of the market-chart series. The source
/// granularity is an API-side rule (daily for long windows); within one
/// fetch the key is unique.
#[derive(Debug, Clone, Serialize)]
pub struct Market_Chart {
    pub mkch_data_ts: NaiveDateTime,
    pub mkch_currency: String,
    pub coin_id: String,
    pub date: NaiveDateTime,
    pub mkch_price: f64,
    pub mkch_market_cap: f64,
    pub mkch_volume: f64,
}
