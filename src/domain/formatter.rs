/// ドメインサービス: タイムスタンプの整形と解釈
///
/// Kalturaはエントリの作成・更新日時をUNIX秒で返します。
/// 表示時はユーザー設定のタイムゾーンオフセットを適用します。
use crate::domain::error::DomainError;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

/// UNIX秒をユーザーのタイムゾーンオフセットで整形する
///
/// オフセットが不正な場合やタイムスタンプが範囲外の場合は
/// UTCのまま、もしくは生の数値を返します。
pub fn format_unix(timestamp: i64, offset_seconds: i32) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return timestamp.to_string();
    };

    match FixedOffset::east_opt(offset_seconds) {
        Some(offset) => dt
            .with_timezone(&offset)
            .format("%Y-%m-%d %H:%M:%S %:z")
            .to_string(),
        None => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    }
}

/// `--since` 等のタイムスタンプ引数を解釈する
///
/// UNIX秒（整数）または `YYYY-MM-DD` 形式の日付を受け付けます。
/// 日付はUTCの0時として解釈します。
pub fn parse_timestamp_arg(input: &str) -> Result<i64, DomainError> {
    let input = input.trim();

    if let Ok(ts) = input.parse::<i64>() {
        return Ok(ts);
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).expect("midnight is always valid");
        return Ok(Utc.from_utc_datetime(&midnight).timestamp());
    }

    Err(DomainError::InvalidTimestamp {
        input: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_unix_utc() {
        // 2021-01-01 00:00:00 UTC
        let formatted = format_unix(1609459200, 0);
        assert!(formatted.starts_with("2021-01-01 00:00:00"));
    }

    #[test]
    fn test_format_unix_with_jst_offset() {
        // JST(+9時間)ではUTC深夜0時が朝9時になる
        let formatted = format_unix(1609459200, 32400);
        assert!(formatted.starts_with("2021-01-01 09:00:00"));
        assert!(formatted.contains("+09:00"));
    }

    #[test]
    fn test_parse_timestamp_arg_unix_seconds() {
        assert_eq!(parse_timestamp_arg("1609459200").unwrap(), 1609459200);
        assert_eq!(parse_timestamp_arg(" 0 ").unwrap(), 0);
    }

    #[test]
    fn test_parse_timestamp_arg_date() {
        assert_eq!(parse_timestamp_arg("2021-01-01").unwrap(), 1609459200);
    }

    #[test]
    fn test_parse_timestamp_arg_rejects_garbage() {
        let result = parse_timestamp_arg("yesterday");
        assert!(matches!(result, Err(DomainError::InvalidTimestamp { .. })));
    }
}
