use chrono::NaiveDateTime;
use serde::Serialize;

/// Final analytics row: the reconciled historical columns plus derived
/// features. `cmrk_roi` is dropped here (mostly missing upstream) and
/// trending presentation columns get "-" / 9999 sentinels instead of
/// nulls; every other missing value is preserved.
#[derive(Debug, Clone, Serialize)]
pub struct Processed {
    pub date: NaiveDateTime,
    pub data_ts: Option<NaiveDateTime>,
    pub currency: Option<String>,
    pub coin_id: String,
    pub coin_symbol: Option<String>,
    pub coin_name: Option<String>,
    pub mkch_price: f64,
    pub mkch_market_cap: f64,
    pub mkch_volume: f64,
    pub ohlc_open: Option<f64>,
    pub ohlc_high: Option<f64>,
    pub ohlc_low: Option<f64>,
    pub ohlc_close: Option<f64>,
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
    pub cmrk_last_updated: Option<NaiveDateTime>,
    pub cmrk_price_change_percentage_1h_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_24h_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_7d_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_14d_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_30d_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_200d_in_currency: Option<f64>,
    pub cmrk_price_change_percentage_1y_in_currency: Option<f64>,
    pub trdg_img_thumb: String,
    pub trdg_img_small: String,
    pub trdg_img_large: String,
    pub trdg_score: i64,
    pub trdg_sparkline: String,
    pub trending_flag: Option<i64>,
    pub market_dominance: Option<f64>,
    pub circulation_percentage: Option<f64>,
    pub price_vs_ath: Option<f64>,
    pub volatility_7d: Option<f64>,
    pub price_change_classification: String,
    pub liquidity_score: Option<f64>,
    pub growth_potential: Option<f64>,
    pub risk_reward_ratio: Option<f64>,
    pub market_cap_to_supply_ratio: Option<f64>,
    pub daily_price_range: Option<f64>,
    pub stability_index: Option<f64>,
    pub circulation_health: String,
    pub performance_trend_1y: String,
}
