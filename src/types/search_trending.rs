use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct TrendingResponse {
    pub coins: Vec<TrendingCoin>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingCoin {
    pub item: TrendingItem,
}

/// One trending entry. `coin_id` here is CoinGecko's internal numeric id;
/// the canonical string identifier is `id`.
#[derive(Debug, Deserialize)]
pub struct TrendingItem {
    pub id: String,
    pub coin_id: i64,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: i64,
    pub thumb: String,
    pub small: String,
    pub large: String,
    pub slug: String,
    pub score: i64,
    pub data: TrendingItemData,
}

/// Currency figures on this endpoint are tolerant-typed: plain numbers
/// or display strings such as `"$53,922,445"`.
#[derive(Debug, Deserialize)]
pub struct TrendingItemData {
    #[serde(deserialize_with = "money_f64")]
    pub price: f64,
    #[serde(deserialize_with = "money_f64")]
    pub price_btc: f64,
    pub price_change_percentage_24h: HashMap<String, f64>,
    #[serde(deserialize_with = "money_f64")]
    pub market_cap: f64,
    #[serde(deserialize_with = "money_f64")]
    pub market_cap_btc: f64,
    #[serde(deserialize_with = "money_f64")]
    pub total_volume: f64,
    #[serde(deserialize_with = "money_f64")]
    pub total_volume_btc: f64,
    pub sparkline: String,
}

fn money_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text
            .replace(['$', ','], "")
            .parse::<f64>()
            .map_err(serde::de::Error::custom),
    }
}
