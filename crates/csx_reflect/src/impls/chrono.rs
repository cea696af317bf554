//! *chrono* date and time types.
//!
//! The zero value of a moment is `0001-01-01T00:00:00`, the first
//! representable tick, not the Unix epoch.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};

use crate::impls::opaque::impl_reflect_opaque;

/// Seconds from `0001-01-01T00:00:00` to the Unix epoch.
pub const SECONDS_BEFORE_UNIX_EPOCH: i64 = 62_135_596_800;

fn is_first_tick(utc: &DateTime<Utc>) -> bool {
    utc.timestamp() == -SECONDS_BEFORE_UNIX_EPOCH && utc.timestamp_subsec_nanos() == 0
}

impl_reflect_opaque!(
    NaiveDateTime, "chrono::naive", "NaiveDateTime" => "DateTime",
    value_type = true,
    default = |v| is_first_tick(&v.and_utc()),
);

impl_reflect_opaque!(
    DateTime<Utc>, "chrono", "DateTime<Utc>" => "DateTime",
    value_type = true,
    default = |v| is_first_tick(v),
);

impl_reflect_opaque!(
    DateTime<FixedOffset>, "chrono", "DateTime<FixedOffset>" => "DateTimeOffset",
    value_type = true,
    default = |v| v.offset().local_minus_utc() == 0 && is_first_tick(&v.to_utc()),
);

impl_reflect_opaque!(
    TimeDelta, "chrono", "TimeDelta" => "TimeSpan",
    value_type = true,
    default = |v| v.is_zero(),
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};

    use crate::Reflect;

    #[test]
    fn first_tick_is_default() {
        let first = NaiveDate::from_ymd_opt(1, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(first.is_default_value());
        assert!(!chrono::NaiveDateTime::default().is_default_value());
        assert!(TimeDelta::zero().is_default_value());
    }
}
