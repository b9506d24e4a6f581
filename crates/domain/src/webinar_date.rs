use chrono::prelude::*;
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidWebinarDateError {
    #[error("Webinar date: `{0}` is malformed")]
    Malformed(String),
}

/// The start of a webinar as submitted by the registration form.
///
/// Most dates carry an explicit offset (`2025-12-30T11:00:00-05:00`), older
/// rows may only contain a local date and time, or just a date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WebinarDate {
    Zoned(DateTime<FixedOffset>),
    Floating(NaiveDateTime),
}

impl WebinarDate {
    pub fn parse(datestr: &str) -> Result<Self, InvalidWebinarDateError> {
        let datestr = datestr.trim();
        let malformed = || InvalidWebinarDateError::Malformed(datestr.to_string());
        if datestr.is_empty() {
            return Err(malformed());
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(datestr) {
            return Ok(Self::Zoned(dt));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(datestr, format) {
                return Ok(Self::Floating(dt));
            }
        }
        NaiveDate::parse_from_str(datestr, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self::Floating)
            .ok_or_else(malformed)
    }

    /// Calendar date of the webinar in its own timezone
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::Zoned(dt) => dt.date_naive(),
            Self::Floating(dt) => dt.date(),
        }
    }

    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Zoned(dt) => Some(*dt.offset()),
            Self::Floating(_) => None,
        }
    }

    /// Localizes the timestamp `now_ts` (millis) to the webinar's offset, or
    /// to `local_tz` when the webinar date has no offset.
    pub fn localize_now(&self, now_ts: i64, local_tz: &Tz) -> NaiveDateTime {
        let now = Utc.timestamp_millis_opt(now_ts).single().unwrap_or_else(Utc::now);
        match self.offset() {
            Some(offset) => now.with_timezone(&offset).naive_local(),
            None => now.with_timezone(local_tz).naive_local(),
        }
    }

    /// Number of calendar days between today and the webinar date. Negative
    /// when the webinar is in the past.
    pub fn days_until(&self, now_ts: i64, local_tz: &Tz) -> i64 {
        let today = self.localize_now(now_ts, local_tz).date();
        (self.date() - today).num_days()
    }

    /// E.g. "Tuesday, December 30"
    pub fn format_long(&self) -> String {
        self.date().format("%A, %B %d").to_string()
    }

    /// The webinars are hosted on US eastern time so the label only
    /// distinguishes standard from daylight time.
    pub fn timezone_label(&self) -> &'static str {
        match self.offset().map(|o| o.local_minus_utc()) {
            Some(secs) if secs == -4 * 3600 => "EDT",
            _ => "EST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tue Dec 30 2025 09:00:00 GMT-0500
    const DEC_30_MORNING_EST: i64 = 1767103200000;

    #[test]
    fn it_parses_supported_formats() {
        assert!(matches!(
            WebinarDate::parse("2025-12-30T11:00:00-05:00"),
            Ok(WebinarDate::Zoned(_))
        ));
        assert!(matches!(
            WebinarDate::parse("2025-12-30T16:00:00Z"),
            Ok(WebinarDate::Zoned(_))
        ));
        assert!(matches!(
            WebinarDate::parse("2025-12-30T11:00:00"),
            Ok(WebinarDate::Floating(_))
        ));
        assert!(matches!(
            WebinarDate::parse("2025-12-30"),
            Ok(WebinarDate::Floating(_))
        ));
    }

    #[test]
    fn it_rejects_invalid_dates() {
        for bad in ["", "tomorrow", "2025-13-01", "30/12/2025", "2025-02-30"] {
            assert_eq!(
                WebinarDate::parse(bad),
                Err(InvalidWebinarDateError::Malformed(bad.to_string()))
            );
        }
    }

    #[test]
    fn days_until_uses_calendar_days() {
        let tz = chrono_tz::America::New_York;
        let webinar = WebinarDate::parse("2026-01-02T11:00:00-05:00").unwrap();
        assert_eq!(webinar.days_until(DEC_30_MORNING_EST, &tz), 3);

        // 23:30 on Dec 31 is still one calendar day before Jan 2
        let late = DEC_30_MORNING_EST + 1000 * 60 * 60 * (24 + 14) + 1000 * 60 * 30;
        assert_eq!(webinar.days_until(late, &tz), 2);

        let past = WebinarDate::parse("2025-12-29T11:00:00-05:00").unwrap();
        assert_eq!(past.days_until(DEC_30_MORNING_EST, &tz), -1);
    }

    #[test]
    fn now_is_localized_to_the_webinar_offset() {
        let webinar = WebinarDate::parse("2025-12-30T11:00:00-05:00").unwrap();
        // Local timezone must not matter when the date has an offset
        let now = webinar.localize_now(DEC_30_MORNING_EST, &chrono_tz::Asia::Tokyo);
        assert_eq!(now.hour(), 9);
        assert_eq!(webinar.days_until(DEC_30_MORNING_EST, &chrono_tz::Asia::Tokyo), 0);
    }

    #[test]
    fn floating_dates_use_local_timezone() {
        let webinar = WebinarDate::parse("2025-12-30").unwrap();
        // 11:00 in New York is already past midnight in Tokyo
        let now = DEC_30_MORNING_EST + 1000 * 60 * 60 * 2;
        assert_eq!(
            webinar.days_until(now, &chrono_tz::America::New_York),
            0
        );
        assert_eq!(webinar.days_until(now, &chrono_tz::Asia::Tokyo), -1);
    }

    #[test]
    fn formats_for_emails() {
        let webinar = WebinarDate::parse("2025-12-30T11:00:00-05:00").unwrap();
        assert_eq!(webinar.format_long(), "Tuesday, December 30");
        assert_eq!(webinar.timezone_label(), "EST");

        let summer = WebinarDate::parse("2026-06-05T11:00:00-04:00").unwrap();
        assert_eq!(summer.format_long(), "Friday, June 05");
        assert_eq!(summer.timezone_label(), "EDT");

        let utc = WebinarDate::parse("2026-06-05T15:00:00Z").unwrap();
        assert_eq!(utc.timezone_label(), "EST");
    }
}
