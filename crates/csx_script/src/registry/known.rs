//! Construction recipes for well-known value types.

use alloc::sync::Arc;
use core::time::Duration;

use csx_reflect::info::{TypeHandle, TypeInfo};

use crate::serializer::{ConstructorSerializer, ScriptSerializer, TypeHandleSerializer, ValueRef, typed_getter};

const NANOS_PER_TICK: u32 = 100;

/// The serializer of a well-known opaque type, `None` for any other type.
pub(super) fn recipe(info: &'static TypeInfo) -> Option<Arc<dyn ScriptSerializer>> {
    if !matches!(info, TypeInfo::Opaque(_)) {
        return None;
    }

    if info.is::<TypeHandle>() {
        return Some(Arc::new(TypeHandleSerializer));
    }

    if info.is::<Duration>() {
        // `new TimeSpan(ticks)`
        let ticks = typed_getter::<Duration, _>(|duration| {
            let ticks = duration.as_nanos() / u128::from(NANOS_PER_TICK);
            ValueRef::owned(i64::try_from(ticks).unwrap_or(i64::MAX))
        });
        return Some(Arc::new(ConstructorSerializer::new(info).with_getter(ticks)));
    }

    #[cfg(feature = "uuid")]
    if info.is::<uuid::Uuid>() {
        // `new Guid("hyphenated text")`
        let text = typed_getter::<uuid::Uuid, _>(|uuid| {
            ValueRef::owned(alloc::string::ToString::to_string(&uuid.hyphenated()))
        });
        return Some(Arc::new(ConstructorSerializer::new(info).with_getter(text)));
    }

    #[cfg(feature = "chrono")]
    if let Some(serializer) = chrono_recipe(info) {
        return Some(serializer);
    }

    None
}

// -----------------------------------------------------------------------------
// chrono

#[cfg(feature = "chrono")]
use chrono_recipes::chrono_recipe;

#[cfg(feature = "chrono")]
mod chrono_recipes {
    use alloc::sync::Arc;

    use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};
    use csx_reflect::derive::Reflect;
    use csx_reflect::impls::SECONDS_BEFORE_UNIX_EPOCH;
    use csx_reflect::info::TypeInfo;

    use super::NANOS_PER_TICK;
    use crate::serializer::{ConstructorSerializer, ScriptSerializer, ValueRef, typed_getter};

    const TICKS_PER_SECOND: i64 = 10_000_000;

    /// Second argument of `new DateTime(ticks, kind)`.
    #[derive(Reflect, Clone, Copy)]
    enum DateTimeKind {
        Unspecified = 0,
        Utc = 1,
    }

    /// Ticks since `0001-01-01T00:00:00`.
    fn moment_ticks(utc: &DateTime<Utc>) -> i64 {
        utc.timestamp()
            .saturating_add(SECONDS_BEFORE_UNIX_EPOCH)
            .saturating_mul(TICKS_PER_SECOND)
            .saturating_add(i64::from(utc.timestamp_subsec_nanos() / NANOS_PER_TICK))
    }

    fn span_ticks(delta: &TimeDelta) -> i64 {
        delta
            .num_seconds()
            .saturating_mul(TICKS_PER_SECOND)
            .saturating_add(i64::from(delta.subsec_nanos() / NANOS_PER_TICK as i32))
    }

    pub(super) fn chrono_recipe(info: &'static TypeInfo) -> Option<Arc<dyn ScriptSerializer>> {
        let constructor = ConstructorSerializer::new(info);

        let serializer = if info.is::<NaiveDateTime>() {
            // `new DateTime(ticks, DateTimeKind.Unspecified)`
            constructor
                .with_getter(typed_getter::<NaiveDateTime, _>(|moment| {
                    ValueRef::owned(moment_ticks(&moment.and_utc()))
                }))
                .with_getter(typed_getter::<NaiveDateTime, _>(|_| {
                    ValueRef::owned(DateTimeKind::Unspecified)
                }))
        } else if info.is::<DateTime<Utc>>() {
            // `new DateTime(ticks, DateTimeKind.Utc)`
            constructor
                .with_getter(typed_getter::<DateTime<Utc>, _>(|moment| {
                    ValueRef::owned(moment_ticks(moment))
                }))
                .with_getter(typed_getter::<DateTime<Utc>, _>(|_| ValueRef::owned(DateTimeKind::Utc)))
        } else if info.is::<DateTime<FixedOffset>>() {
            // `new DateTimeOffset(new DateTime(..), new TimeSpan(offset))`
            constructor
                .with_getter(typed_getter::<DateTime<FixedOffset>, _>(|moment| {
                    ValueRef::owned(moment.naive_local())
                }))
                .with_getter(typed_getter::<DateTime<FixedOffset>, _>(|moment| {
                    let offset = i64::from(moment.offset().local_minus_utc());
                    ValueRef::owned(TimeDelta::try_seconds(offset).unwrap_or_default())
                }))
        } else if info.is::<TimeDelta>() {
            // `new TimeSpan(ticks)`
            constructor.with_getter(typed_getter::<TimeDelta, _>(|delta| {
                ValueRef::owned(span_ticks(delta))
            }))
        } else {
            return None;
        };

        Some(Arc::new(serializer))
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use csx_reflect::info::TypeHandle;

    use crate::registry::SerializerRegistry;

    fn serialize(value: &dyn csx_reflect::Reflect) -> alloc::string::String {
        crate::serialize_with(&SerializerRegistry::new(), value).unwrap()
    }

    #[test]
    fn durations_count_ticks() {
        assert_eq!(serialize(&Duration::from_millis(1500)), "new TimeSpan(15000000L)");
        assert_eq!(serialize(&Duration::MAX), "new TimeSpan(9223372036854775807L)");
    }

    #[test]
    fn type_handles() {
        assert_eq!(serialize(&TypeHandle::of::<(u8, i16)>()), "typeof((byte, short))");
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn uuids_use_hyphenated_text() {
        let id = uuid::Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8);
        assert_eq!(serialize(&id), "new Guid(\"67e55044-10b1-426f-9247-bb680e5fe0c8\")");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn moments_count_ticks_from_year_one() {
        use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, Utc};

        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        assert_eq!(
            serialize(&epoch),
            "new DateTime(621355968000000000L, DateTimeKind.Utc)"
        );

        let first = NaiveDate::from_ymd_opt(1, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(serialize(&first), "new DateTime(0L, DateTimeKind.Unspecified)");

        let offset = FixedOffset::east_opt(3600).unwrap();
        let local: DateTime<FixedOffset> = epoch.with_timezone(&offset);
        assert_eq!(
            serialize(&local),
            "new DateTimeOffset(new DateTime(621356004000000000L, DateTimeKind.Unspecified), \
             new TimeSpan(36000000000L))"
        );

        assert_eq!(serialize(&TimeDelta::milliseconds(-5)), "new TimeSpan(-50000L)");
    }
}
