//! Date parsing for statement rows: plain dates pass through, timestamps are
//! pinned to the calendar day in the user's timezone.

use anyhow::Result;
use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

/// Timezone used to turn timestamps into calendar dates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateContext {
    tz: Tz,
}

impl DateContext {
    /// Build from an IANA name like "America/Chicago"
    pub fn new(tz: &str) -> Result<Self> {
        let tz: Tz = tz
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
        Ok(Self { tz })
    }

    pub fn utc() -> Self {
        Self { tz: chrono_tz::UTC }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Parse `YYYY-MM-DD`, `MM/DD/YYYY` or an RFC 3339 timestamp.
    ///
    /// Timestamps are converted into this context's timezone before the date
    /// is taken, so `2025-11-01T03:00:00Z` is Oct 31 in Chicago.
    pub fn parse(&self, s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(d);
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
            return Some(d);
        }

        DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&self.tz).date_naive())
    }
}

impl Default for DateContext {
    fn default() -> Self {
        Self::utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plain_formats() {
        let ctx = DateContext::utc();
        assert_eq!(ctx.parse("2025-11-05"), Some(ymd(2025, 11, 5)));
        assert_eq!(ctx.parse(" 11/05/2025 "), Some(ymd(2025, 11, 5)));
        assert_eq!(ctx.parse(""), None);
        assert_eq!(ctx.parse("yesterday"), None);
        assert_eq!(ctx.parse("2025-02-30"), None);
    }

    #[test]
    fn test_timestamp_uses_local_day() {
        // Nov is CST (UTC-6)
        let chicago = DateContext::new("America/Chicago").unwrap();
        assert_eq!(chicago.parse("2025-11-01T03:00:00Z"), Some(ymd(2025, 10, 31)));
        assert_eq!(DateContext::utc().parse("2025-11-01T03:00:00Z"), Some(ymd(2025, 11, 1)));
    }

    #[test]
    fn test_invalid_timezone() {
        let err = DateContext::new("Mars/Olympus").unwrap_err();
        assert!(err.to_string().contains("invalid timezone"));
    }
}
