use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

// Mocking out time so that the nurture scheduler can be tested at any
// point of a webinar countdown.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    fn now(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.get_timestamp_millis())
            .single()
            .unwrap_or_else(Utc::now)
    }

    /// Timestamp written into the sheets, e.g. `2026-01-05T14:05:00Z`
    fn now_rfc3339(&self) -> String {
        self.now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// System frozen at a given timestamp
pub struct StaticTimeSys(pub i64);
impl ISys for StaticTimeSys {
    fn get_timestamp_millis(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_static_time() {
        // Mon Jan 05 2026 14:05:00 UTC
        let sys = StaticTimeSys(1767621900000);
        assert_eq!(sys.now_rfc3339(), "2026-01-05T14:05:00Z");
    }
}
