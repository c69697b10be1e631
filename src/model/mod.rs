mod coins_market;
mod coins_ohlc;
mod market_chart;
mod market_chart_range;
mod merged;
mod processed;
mod search_trending;

pub use coins_market::Coins_Market;
pub use coins_ohlc::{Coins_Ohlc, Ohlc_Values};
pub use market_chart::Market_Chart;
pub use market_chart_range::Market_Chart_Range;
pub use merged::{Chart_Ohlc, Market_Trending, Merge_Status, Merged};
pub use processed::Processed;
pub use search_trending::{Search_Trending, Trending_Attrs};
