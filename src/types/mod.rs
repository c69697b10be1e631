mod coins_markets;
mod market_chart;
mod ohlc;
mod search_trending;

pub use coins_markets::CoinGeckoMarket;
pub use market_chart::{CoinGeckoMarketData, MarketData};
pub use ohlc::Candle;
pub use search_trending::{
    TrendingCoin, TrendingItem, TrendingItemData, TrendingResponse,
};
