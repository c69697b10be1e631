use serde::Deserialize;

/// Payload shape shared by `/coins/{id}/market_chart` and
/// `/coins/{id}/market_chart/range`. The three series are aligned by
/// index and carry `[epoch_ms, value]` pairs.
#[derive(Debug, Deserialize)]
pub struct CoinGeckoMarketData {
    pub prices: Vec<MarketData>,
    pub market_caps: Vec<MarketData>,
    pub total_volumes: Vec<MarketData>,
}

#[derive(Deserialize, Debug)]
pub struct MarketData(pub i64, pub f64);
