use chrono::NaiveDateTime;
use serde::Serialize;

/// Normalized `/coins/markets` snapshot row. Identity columns keep their
/// canonical names; everything else is prefixed `cmrk_`. Percentage
/// columns are stored as fractions (5.2% -> 0.052).
#[derive(Debug, Clone, Serialize)]
pub struct Coins_Market {
    pub cmrk_data_ts: NaiveDateTime,
    pub cmrk_currency: String,
    pub coin_id: String,
    pub coin_symbol: String,
    pub coin_name: String,
    pub cmrk_image: Option<String>,
    pub cmrk_current_price: Option<f64>,
    pub cmrk_market_cap: Option<f64>,
    pub cmrk_market_cap_rank: Option<i64>,
    pub cmrk_fully_diluted_valuation: Option<f64>,
    pub cmrk_total_volume: Option<f64>,
    pub cmrk_high_24h: Option<f64>,
    pub cmrk_low_24h: Option<f64>,
    pub cmrk_price_change_24h: Option<f64>,
    pub cmrk_price_change_percentage_24h: Option<f64>,
    pub cmrk_market_cap_change_24h: Option<f64>,
    pub cmrk_market_cap_change_percentage_24h: Option<f64>,
    pub cmrk_circulating_supply: Option<f64>,
    pub cmrk_total_supply: Option<f64>,
    pub cmrk_max_supply: Option<f64>,
    pub cmrk_ath: Option<f64>,
    pub cmrk_ath_change_percentage: Option<f64>,
    pub cmrk_ath_date: Option<NaiveDateTime>,
    pub cmrk_atl: Option<f64>,
    pub cmrk_atl_change_percentage: Option<f64>,
    pub cmrk_atl_date: Option<NaiveDateTime>,
    pub cmrk_roi: Option<String>,
    pub cmrk_last_updated: Option<NaiveDateTime>,
    pub cmrk_price_change_percentage_1h_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_24h_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_7d_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_14d_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_30d_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_200d_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_1y_in_currency: Option<f64>,
}
