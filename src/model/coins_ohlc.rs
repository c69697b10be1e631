use chrono::NaiveDateTime;
use serde::Serialize;

/// OHLC columns carried into the merged table; split out so a failed
/// join can leave them null as one block.
#[derive(Debug, Clone, Serialize)]
pub struct Ohlc_Values {
    pub ohlc_data_ts: NaiveDateTime,
    pub ohlc_currency: String,
    pub ohlc_open: f64,
    pub ohlc_high: f64,
    pub ohlc_low: f64,
    pub ohlc_close: f64,
}

/// One OHLC candle keyed `(coin_id, date)`; the date is the close time
/// of the bucket.
#[derive(Debug, Clone, Serialize)]
pub struct Coins_Ohlc {
    pub coin_id: String,
    pub date: NaiveDateTime,
    #[serde(flatten)]
    pub values: Ohlc_Values,
}
