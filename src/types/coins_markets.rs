use serde::Deserialize;
use serde_json::Value;

/// One `/coins/markets` entry. Every listed key must be present in the
/// payload (a missing key is a decode error and signals an upstream
/// contract change); nullable fields are `Option`.
#[derive(Debug, Deserialize)]
pub struct CoinGeckoMarket {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub image: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub current_price: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub market_cap: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub market_cap_rank: Option<i64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub fully_diluted_valuation: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub total_volume: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub high_24h: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub low_24h: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price_change_24h: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub market_cap_change_24h: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub circulating_supply: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub total_supply: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub max_supply: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub ath: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub ath_change_percentage: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub ath_date: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub atl: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub atl_change_percentage: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub atl_date: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub roi: Option<Value>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub last_updated: Option<String>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price_change_percentage_24h_in_currency: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price_change_percentage_14d_in_currency: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price_change_percentage_30d_in_currency: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price_change_percentage_200d_in_currency: Option<f64>,
    #[serde(deserialize_with = "Option::deserialize")]
    pub price_change_percentage_1y_in_currency: Option<f64>,
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_json(id: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "symbol": "btc",
                "name": "Bitcoin",
                "image": "https://example.org/btc.png",
                "current_price": 42000.5,
                "market_cap": 800000000000.0,
                "market_cap_rank": 1,
                "fully_diluted_valuation": 880000000000.0,
                "total_volume": 32000000000.0,
                "high_24h": 43000.0,
                "low_24h": 41000.0,
                "price_change_24h": -120.5,
                "price_change_percentage_24h": -0.4,
                "market_cap_change_24h": -2000000.0,
                "market_cap_change_percentage_24h": -0.3,
                "circulating_supply": 19600000.0,
                "total_supply": 21000000.0,
                "max_supply": 21000000.0,
                "ath": 69000.0,
                "ath_change_percentage": -39.1,
                "ath_date": "2021-11-10T14:24:11.849Z",
                "atl": 67.81,
                "atl_change_percentage": 61850.2,
                "atl_date": "2013-07-06T00:00:00.000Z",
                "roi": null,
                "last_updated": "2024-01-02T08:15:00.000Z",
                "price_change_percentage_1h_in_currency": 0.1,
                "price_change_percentage_24h_in_currency": -0.4,
                "price_change_percentage_7d_in_currency": 5.2,
                "price_change_percentage_14d_in_currency": 8.0,
                "price_change_percentage_30d_in_currency": 12.5,
                "price_change_percentage_200d_in_currency": 60.0,
                "price_change_percentage_1y_in_currency": 155.0
            }}"#
        )
    }

    #[test]
    fn test_decode_market_entry() {
        let entry: CoinGeckoMarket =
            serde_json::from_str(&sample_json("bitcoin")).unwrap();
        assert_eq!(entry.id, "bitcoin");
        assert_eq!(entry.market_cap_rank, Some(1));
        assert_eq!(entry.ath, Some(69000.0));
        assert!(entry.roi.is_none());
    }

    #[test]
    fn test_missing_key_is_a_decode_error() {
        let body = sample_json("bitcoin").replace(r#""ath": 69000.0,"#, "");
        let result: Result<CoinGeckoMarket, _> = serde_json::from_str(&body);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_fields_decode_as_none() {
        let body = sample_json("bitcoin")
            .replace("\"max_supply\": 21000000.0", "\"max_supply\": null");
        let entry: CoinGeckoMarket = serde_json::from_str(&body).unwrap();
        assert!(entry.max_supply.is_none());
    }
}
