use chrono::{DateTime, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::error::Error;

/// Day windows accepted by the OHLC endpoint.
pub const OHLC_DAY_OPTIONS: [i64; 7] = [1, 7, 14, 30, 90, 180, 365];

/// Fetch timestamp stamped on every normalized row, truncated to seconds.
pub fn now_ts() -> NaiveDateTime {
    let now = Utc::now().naive_utc();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Decode an epoch-milliseconds value into a naive UTC instant.
pub fn decode_ms(ms: i64) -> Result<NaiveDateTime, Error> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| Error::DecodeDateTimeError(ms.to_string()))
}

/// Convert a `YYYY-MM-DD` UTC date into a second-resolution Unix timestamp
/// at midnight. Malformed input fails with `Error::Format`.
pub fn date_to_unix_seconds(date: &str) -> Result<i64, Error> {
    let day = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
    Ok(day.and_time(NaiveTime::MIN).and_utc().timestamp())
}

/// Snap a requested day window down to the largest allowed OHLC value
/// that does not exceed it.
pub fn snap_ohlc_days(requested: i64) -> i64 {
    OHLC_DAY_OPTIONS
        .iter()
        .copied()
        .filter(|days| *days <= requested)
        .max()
        .unwrap_or(OHLC_DAY_OPTIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_ohlc_days() {
        assert_eq!(snap_ohlc_days(45), 30);
        assert_eq!(snap_ohlc_days(365), 365);
        assert_eq!(snap_ohlc_days(400), 365);
        assert_eq!(snap_ohlc_days(6), 1);
        assert_eq!(snap_ohlc_days(0), 1);
    }

    #[test]
    fn test_date_to_unix_seconds() {
        assert_eq!(date_to_unix_seconds("2024-10-14").unwrap(), 1_728_864_000);
        assert_eq!(date_to_unix_seconds("2024-01-01").unwrap(), 1_704_067_200);
    }

    #[test]
    fn test_date_to_unix_seconds_rejects_bad_format() {
        assert!(matches!(
            date_to_unix_seconds("14-10-2024"),
            Err(Error::Format(_))
        ));
        assert!(matches!(
            date_to_unix_seconds("2024/01/01"),
            Err(Error::Format(_))
        ));
    }

    #[test]
    fn test_decode_ms() {
        let dt = decode_ms(1_704_067_200_000).unwrap();
        assert_eq!(dt.to_string(), "2024-01-01 00:00:00");
    }

    #[test]
    fn test_now_ts_has_second_precision() {
        assert_eq!(now_ts().nanosecond(), 0);
    }
}
