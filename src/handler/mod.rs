pub mod coins_markets;
pub mod coins_ohlc;
pub mod fetch_loop;
pub mod market_chart;
pub mod market_chart_range;
pub mod merge_init;
pub mod processed;
pub mod search_trending;
pub mod universe;
