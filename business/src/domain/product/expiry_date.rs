use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone};

/// Length of one day in milliseconds.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an expiry string into a local wall-clock time.
///
/// Plain dates resolve to local midnight. Timestamps carrying an offset are
/// converted to local time. Returns `None` for anything else.
pub fn parse_expiry_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Local).naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// Calendar days from `today` to the expiry day.
///
/// Both ends are truncated to midnight first, so the time of day carried by
/// the input never changes the result.
pub fn calendar_days_until(raw: &str, today: NaiveDate) -> Option<i64> {
    let expiry = parse_expiry_date(raw)?;
    Some((expiry.date() - today).num_days())
}

/// Whole days from `now` to the expiry instant, rounded towards negative
/// infinity.
///
/// Unlike [`calendar_days_until`] this works on the raw millisecond
/// difference between real instants: something that expired an hour ago is
/// already `-1`, and a daylight-saving shift in between counts by its true
/// length.
pub fn whole_days_until(raw: &str, now: NaiveDateTime) -> Option<i64> {
    whole_days_until_in(raw, now, &Local)
}

/// [`whole_days_until`] with both wall-clock ends read in `tz`.
pub fn whole_days_until_in<Tz: TimeZone>(raw: &str, now: NaiveDateTime, tz: &Tz) -> Option<i64> {
    let expiry = parse_expiry_instant(raw, tz)?;
    let now = resolve_local(now, tz);
    let diff_ms = expiry.signed_duration_since(now).num_milliseconds();
    Some(diff_ms.div_euclid(DAY_MS))
}

fn parse_expiry_instant<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw.trim()) {
        return Some(with_offset.with_timezone(tz));
    }
    parse_expiry_date(raw).map(|local| resolve_local(local, tz))
}

/// Pins a wall-clock time in `tz` to an instant.
///
/// A time repeated by a backward shift resolves to its first occurrence. A
/// time skipped by a forward shift is read with the offset in force before
/// the gap, which lands it the gap's length later on the new clock.
pub fn resolve_local<Tz: TimeZone>(local: NaiveDateTime, tz: &Tz) -> DateTime<Tz> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(instant) => instant,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            let before_gap = tz.offset_from_utc_datetime(&(local - TimeDelta::days(1)));
            tz.from_utc_datetime(&(local - before_gap.fix()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date, time), "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn should_parse_plain_dates_as_midnight() {
        let parsed = parse_expiry_date("2025-03-04").unwrap();
        assert_eq!(parsed, at("2025-03-04", "00:00:00"));

        let slashed = parse_expiry_date("2025/03/04").unwrap();
        assert_eq!(slashed, parsed);
    }

    #[test]
    fn should_parse_local_timestamps() {
        assert_eq!(
            parse_expiry_date("2025-03-04T18:30:00").unwrap(),
            at("2025-03-04", "18:30:00")
        );
        assert_eq!(
            parse_expiry_date(" 2025-03-04 18:30 ").unwrap(),
            at("2025-03-04", "18:30:00")
        );
    }

    #[test]
    fn should_parse_timestamps_with_offset() {
        assert!(parse_expiry_date("2025-03-04T18:30:00Z").is_some());
        assert!(parse_expiry_date("2025-03-04T18:30:00+05:30").is_some());
    }

    #[test]
    fn should_reject_malformed_dates() {
        assert!(parse_expiry_date("").is_none());
        assert!(parse_expiry_date("not-a-date").is_none());
        assert!(parse_expiry_date("2025-02-30").is_none());
        assert!(parse_expiry_date("04/03/2025").is_none());
    }

    #[test]
    fn should_ignore_time_of_day_for_calendar_days() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        assert_eq!(calendar_days_until("2025-03-04", today), Some(3));
        assert_eq!(calendar_days_until("2025-03-04T23:59:00", today), Some(3));
        assert_eq!(calendar_days_until("2025-02-27T01:00:00", today), Some(-2));
        assert_eq!(calendar_days_until("garbage", today), None);
    }

    #[test]
    fn should_floor_the_raw_difference_for_whole_days() {
        let now = at("2025-03-01", "10:00:00");

        assert_eq!(whole_days_until("2025-03-01T10:00:00", now), Some(0));
        assert_eq!(whole_days_until("2025-03-01", now), Some(-1));
        assert_eq!(whole_days_until("2025-03-03", now), Some(1));
        assert_eq!(whole_days_until("2025-02-27T10:00:00", now), Some(-2));
        assert_eq!(whole_days_until("2025-02-27T09:59:59", now), Some(-3));
        assert_eq!(whole_days_until("nope", now), None);
    }

    #[test]
    fn should_count_real_hours_across_spring_forward() {
        // the night of 2025-03-09 is 23 hours long in New York
        let tz = chrono_tz::America::New_York;
        let now = at("2025-03-08", "23:30:00");

        assert_eq!(whole_days_until_in("2025-03-10", now, &tz), Some(0));
        assert_eq!(whole_days_until_in("2025-03-10T00:29:00", now, &tz), Some(0));
        assert_eq!(whole_days_until_in("2025-03-10T00:30:00", now, &tz), Some(1));
    }

    #[test]
    fn should_count_real_hours_across_fall_back() {
        // the night of 2025-11-02 is 25 hours long in New York
        let tz = chrono_tz::America::New_York;
        let now = at("2025-11-01", "23:30:00");

        assert_eq!(whole_days_until_in("2025-11-02T22:30:00", now, &tz), Some(1));
        assert_eq!(whole_days_until_in("2025-11-02T22:29:00", now, &tz), Some(0));
    }

    #[test]
    fn should_resolve_ambiguous_and_skipped_wall_times() {
        let tz = chrono_tz::America::New_York;
        let utc = |local: NaiveDateTime| resolve_local(local, &tz).naive_utc();

        // 01:30 happens twice; the first one is still on EDT
        assert_eq!(utc(at("2025-11-02", "01:30:00")), at("2025-11-02", "05:30:00"));
        // 02:30 never happens; read on EST it is 03:30 EDT
        assert_eq!(utc(at("2025-03-09", "02:30:00")), at("2025-03-09", "07:30:00"));
        assert_eq!(utc(at("2025-06-01", "12:00:00")), at("2025-06-01", "16:00:00"));
    }

    #[test]
    fn should_keep_offset_timestamps_exact() {
        let tz = chrono_tz::America::New_York;
        let now = at("2025-06-01", "08:00:00");

        // 12:00Z is 08:00 EDT
        assert_eq!(whole_days_until_in("2025-06-02T12:00:00Z", now, &tz), Some(1));
        assert_eq!(whole_days_until_in("2025-06-02T11:59:59Z", now, &tz), Some(0));
    }
}
