use serde::Deserialize;

/// One `/coins/{id}/ohlc` candle: `[epoch_ms, open, high, low, close]`.
/// The timestamp marks the close of the bucket.
#[derive(Debug, Deserialize)]
pub struct Candle(pub i64, pub f64, pub f64, pub f64, pub f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_candles() {
        let body = r#"[[1704067200000,42000.1,42500.0,41800.5,42250.9]]"#;
        let candles: Vec<Candle> = serde_json::from_str(body).unwrap();
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].0, 1_704_067_200_000);
        assert_eq!(candles[0].4, 42250.9);
    }
}
