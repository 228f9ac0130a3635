//! Time-zone-aware conversion between `datetime-local` inputs, API instants
//! and table display strings.
//!
//! Inputs carry local wall-clock time with minute precision
//! (`2026-10-20T10:00`), the API speaks RFC 3339 in UTC.
//!
//! The zone is any chrono `TimeZone`. Its offset is resolved for every
//! instant separately, so a window crossing a DST change keeps both ends right.

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, SecondsFormat, TimeZone, Utc,
};

/// Value format of `<input type="datetime-local">`
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const INPUT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Table format: `20.10.2026 10:00`
pub const DISPLAY_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Offset of `zone` in effect at `instant`.
pub fn offset_at<Tz: TimeZone>(zone: &Tz, instant: &DateTime<Utc>) -> FixedOffset {
    zone.offset_from_utc_datetime(&instant.naive_utc()).fix()
}

/// Read a `datetime-local` value as wall-clock time in `zone`.
///
/// The offset is the one in effect at that wall-clock time. An hour repeated
/// when clocks go back resolves to its first occurrence, an hour skipped when
/// clocks go forward is rejected.
pub fn parse_local_input<Tz: TimeZone>(value: &str, zone: &Tz) -> Result<DateTime<Utc>, String> {
    let value = value.trim();
    let naive = NaiveDateTime::parse_from_str(value, INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, INPUT_FORMAT_SECONDS))
        .map_err(|_| format!("Некорректная дата: «{}»", value))?;
    zone.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| format!("Некорректная дата: «{}»", value))
}

/// Render an instant as a `datetime-local` value in `zone`.
pub fn to_local_input<Tz: TimeZone>(instant: &DateTime<Utc>, zone: &Tz) -> String {
    instant
        .with_timezone(&offset_at(zone, instant))
        .format(INPUT_FORMAT)
        .to_string()
}

/// Render an instant for tables.
pub fn format_display<Tz: TimeZone>(instant: &DateTime<Utc>, zone: &Tz) -> String {
    instant
        .with_timezone(&offset_at(zone, instant))
        .format(DISPLAY_FORMAT)
        .to_string()
}

/// Serialize an instant the way the API expects it: `2026-10-20T07:00:00Z`.
pub fn format_api(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Lenient parser for instants coming from the API.
///
/// Accepts RFC 3339, naive `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS`
/// (taken as UTC) and bare dates (midnight UTC).
pub fn parse_api_datetime(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// `#[serde(with = "api_datetime")]` for `DateTime<Utc>` fields exchanged with the API.
pub mod api_datetime {
    use super::{format_api, parse_api_datetime};
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_api(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_api_datetime(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime: {}", raw)))
    }
}

#[cfg(test)]
pub(crate) mod test_zones {
    use chrono::{
        Datelike, Days, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone,
    };

    /// Central European time: UTC+1, UTC+2 from the last Sunday of March
    /// 01:00 UTC to the last Sunday of October 01:00 UTC.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Berlin;

    const WINTER: i32 = 3600;
    const SUMMER: i32 = 2 * 3600;

    fn last_sunday(year: i32, month: u32) -> Option<NaiveDateTime> {
        let first_of_next = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
        let last = first_of_next.pred_opt()?;
        let back = last.weekday().num_days_from_sunday() as u64;
        last.checked_sub_days(Days::new(back))?.and_hms_opt(1, 0, 0)
    }

    fn offset(seconds: i32) -> FixedOffset {
        FixedOffset::east_opt(seconds).expect("offset in range")
    }

    impl Berlin {
        fn is_summer_utc(utc: &NaiveDateTime) -> bool {
            match (last_sunday(utc.year(), 3), last_sunday(utc.year(), 10)) {
                (Some(start), Some(end)) => *utc >= start && *utc < end,
                _ => false,
            }
        }
    }

    impl TimeZone for Berlin {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            Berlin
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            match local.and_hms_opt(0, 0, 0) {
                Some(midnight) => self.offset_from_local_datetime(&midnight),
                None => LocalResult::None,
            }
        }

        fn offset_from_local_datetime(
            &self,
            local: &NaiveDateTime,
        ) -> LocalResult<FixedOffset> {
            // Read the wall clock with each offset and check which reading is consistent
            let as_winter = Self::is_summer_utc(&(*local - Duration::seconds(WINTER.into())));
            let as_summer = Self::is_summer_utc(&(*local - Duration::seconds(SUMMER.into())));
            match (as_winter, as_summer) {
                (false, false) => LocalResult::Single(offset(WINTER)),
                (true, true) => LocalResult::Single(offset(SUMMER)),
                (false, true) => LocalResult::Ambiguous(offset(SUMMER), offset(WINTER)),
                (true, false) => LocalResult::None,
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            match utc.and_hms_opt(0, 0, 0) {
                Some(midnight) => self.offset_from_utc_datetime(&midnight),
                None => offset(WINTER),
            }
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if Self::is_summer_utc(utc) {
                offset(SUMMER)
            } else {
                offset(WINTER)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_zones::Berlin;
    use super::*;

    fn moscow() -> FixedOffset {
        FixedOffset::east_opt(3 * 3600).unwrap()
    }

    #[test]
    fn local_input_is_converted_to_utc() {
        let instant = parse_local_input("2026-10-20T10:00", &moscow()).unwrap();
        assert_eq!(format_api(&instant), "2026-10-20T07:00:00Z");
    }

    #[test]
    fn local_input_round_trips_through_utc() {
        let instant = parse_local_input("2026-12-31T23:30", &moscow()).unwrap();
        assert_eq!(to_local_input(&instant, &moscow()), "2026-12-31T23:30");
        assert_eq!(format_display(&instant, &moscow()), "31.12.2026 23:30");
        assert_eq!(format_display(&instant, &Utc), "31.12.2026 20:30");
    }

    #[test]
    fn offset_follows_daylight_saving_per_instant() {
        // 2026-10-25: CEST ends, Berlin goes from +02:00 to +01:00
        let october = parse_local_input("2026-10-20T00:00", &Berlin).unwrap();
        let november = parse_local_input("2026-11-20T00:00", &Berlin).unwrap();
        assert_eq!(format_api(&october), "2026-10-19T22:00:00Z");
        assert_eq!(format_api(&november), "2026-11-19T23:00:00Z");

        let stored = parse_api_datetime("2026-11-19T23:00:00Z").unwrap();
        assert_eq!(to_local_input(&stored, &Berlin), "2026-11-20T00:00");
        assert_eq!(to_local_input(&october, &Berlin), "2026-10-20T00:00");
        assert_eq!(format_display(&stored, &Berlin), "20.11.2026 00:00");
    }

    #[test]
    fn repeated_hour_takes_first_occurrence_and_skipped_hour_fails() {
        let repeated = parse_local_input("2026-10-25T02:30", &Berlin).unwrap();
        assert_eq!(format_api(&repeated), "2026-10-25T00:30:00Z");
        assert!(parse_local_input("2026-03-29T02:30", &Berlin).is_err());
    }

    #[test]
    fn input_with_seconds_is_accepted() {
        let instant = parse_local_input("2026-10-20T10:00:30", &Utc).unwrap();
        assert_eq!(format_api(&instant), "2026-10-20T10:00:30Z");
    }

    #[test]
    fn garbage_input_is_rejected() {
        assert!(parse_local_input("", &moscow()).is_err());
        assert!(parse_local_input("20.10.2026", &moscow()).is_err());
    }
    #[test]
    fn api_formats_are_understood() {
        let expected = "2026-10-20T07:00:00Z";
        for raw in [
            "2026-10-20T07:00:00Z",
            "2026-10-20T10:00:00+03:00",
            "2026-10-20 07:00:00",
            "2026-10-20T07:00:00.000",
        ] {
            let parsed = parse_api_datetime(raw).unwrap();
            assert_eq!(format_api(&parsed), expected, "input {raw}");
        }
        let date_only = parse_api_datetime("2026-10-20").unwrap();
        assert_eq!(format_api(&date_only), "2026-10-20T00:00:00Z");
        assert_eq!(parse_api_datetime("soon"), None);
    }
}
