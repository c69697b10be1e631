use chrono::NaiveDateTime;
use serde::Serialize;

/// Normalized `/search/trending` row. `trdg_id` is CoinGecko's internal
/// numeric id; `coin_id` is the canonical lowercased identifier.
#[derive(Debug, Clone, Serialize)]
pub struct Search_Trending {
    pub trdg_data_ts: NaiveDateTime,
    pub trdg_id: i64,
    pub coin_id: String,
    pub coin_name: String,
    pub coin_symbol: String,
    pub trdg_market_cap_rank: i64,
    pub trdg_img_thumb: String,
    pub trdg_img_small: String,
    pub trdg_img_large: String,
    pub trdg_slug: String,
    pub trdg_score: i64,
    pub trdg_price_usd: f64,
    pub trdg_price_btc: f64,
    pub trdg_price_change_percentage_24h_btc: Option<f64>,
    pub trdg_price_change_percentage_24h_usd: Option<f64>,
    pub trdg_market_cap_usd: f64,
    pub trdg_market_cap_btc: f64,
    pub trdg_total_volume_usd: f64,
    pub trdg_total_volume_btc: f64,
    pub trdg_sparkline: String,
}

impl Search_Trending {
    /// The columns carried through the stage-1 join. `coin_symbol` and
    /// `coin_name` duplicate the market snapshot's own fields and are
    /// dropped here.
    pub fn attrs(&self) -> Trending_Attrs {
        Trending_Attrs {
            trdg_data_ts: self.trdg_data_ts,
            trdg_id: self.trdg_id,
            trdg_market_cap_rank: self.trdg_market_cap_rank,
            trdg_img_thumb: self.trdg_img_thumb.to_owned(),
            trdg_img_small: self.trdg_img_small.to_owned(),
            trdg_img_large: self.trdg_img_large.to_owned(),
            trdg_slug: self.trdg_slug.to_owned(),
            trdg_score: self.trdg_score,
            trdg_price_usd: self.trdg_price_usd,
            trdg_price_btc: self.trdg_price_btc,
            trdg_price_change_percentage_24h_btc: self
                .trdg_price_change_percentage_24h_btc,
            trdg_price_change_percentage_24h_usd: self
                .trdg_price_change_percentage_24h_usd,
            trdg_market_cap_usd: self.trdg_market_cap_usd,
            trdg_market_cap_btc: self.trdg_market_cap_btc,
            trdg_total_volume_usd: self.trdg_total_volume_usd,
            trdg_total_volume_btc: self.trdg_total_volume_btc,
            trdg_sparkline: self.trdg_sparkline.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Trending_Attrs {
    pub trdg_data_ts: NaiveDateTime,
    pub trdg_id: i64,
    pub trdg_market_cap_rank: i64,
    pub trdg_img_thumb: String,
    pub trdg_img_small: String,
    pub trdg_img_large: String,
    pub trdg_slug: String,
    pub trdg_score: i64,
    pub trdg_price_usd: f64,
    pub trdg_price_btc: f64,
    pub trdg_price_change_percentage_24h_btc: Option<f64>,
    pub trdg_price_change_percentage_24h_usd: Option<f64>,
    pub trdg_market_cap_usd: f64,
    pub trdg_market_cap_btc: f64,
    pub trdg_total_volume_usd: f64,
    pub trdg_total_volume_btc: f64,
    pub trdg_sparkline: String,
}
