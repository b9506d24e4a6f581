use chrono::{Duration, FixedOffset, TimeZone, Utc};

/// Webinar at 11:00 EST, `days` calendar days after `now_ts`
pub fn webinar_in_days(now_ts: i64, days: i64) -> String {
    let est = FixedOffset::west_opt(5 * 3600).unwrap();
    let today = Utc
        .timestamp_millis_opt(now_ts)
        .unwrap()
        .with_timezone(&est)
        .date_naive();
    let date = today + Duration::days(days);
    est.from_local_datetime(&date.and_hms_opt(11, 0, 0).unwrap())
        .unwrap()
        .to_rfc3339()
}
