use chrono::{Datelike, Month, Offset, TimeZone, Weekday};

use crate::calendar::{
    Instant, LocalDate, LocalDateTime, LocalTime, MonthDay, OffsetDateTime, OffsetTime, Year,
    ZonedDateTime,
};
use crate::zone::ZoneId;

/// Capability to build a value of `Self` out of an absolute instant observed
/// in a zone. Every implementation is total and deterministic; the zone rules
/// do the only real work, the rest is projection.
pub trait FromInstant: Sized {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self;
}

impl FromInstant for Instant {
    fn from_instant(instant: Instant, _zone: &ZoneId) -> Self {
        instant
    }
}

impl FromInstant for ZonedDateTime {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self {
        instant.with_timezone(zone)
    }
}

impl FromInstant for LocalDateTime {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self {
        instant.with_timezone(zone).naive_local()
    }
}

impl FromInstant for LocalDate {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self {
        LocalDateTime::from_instant(instant, zone).date()
    }
}

impl FromInstant for LocalTime {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self {
        LocalDateTime::from_instant(instant, zone).time()
    }
}

impl FromInstant for OffsetDateTime {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self {
        let offset = zone.offset_from_utc_datetime(&instant.naive_utc()).fix();
        instant.with_timezone(&offset)
    }
}

impl FromInstant for OffsetTime {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self {
        let at_offset = OffsetDateTime::from_instant(instant, zone);
        OffsetTime::new(at_offset.time(), *at_offset.offset())
    }
}

impl FromInstant for Month {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self {
        let month = ZonedDateTime::from_instant(instant, zone).month();
        Month::try_from(month as u8).expect("month field out of range")
    }
}

impl FromInstant for MonthDay {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self {
        let zoned = ZonedDateTime::from_instant(instant, zone);
        let month = Month::try_from(zoned.month() as u8).expect("month field out of range");
        MonthDay::new(month, zoned.day() as u8)
    }
}

impl FromInstant for Weekday {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self {
        ZonedDateTime::from_instant(instant, zone).weekday()
    }
}

impl FromInstant for Year {
    fn from_instant(instant: Instant, zone: &ZoneId) -> Self {
        Year::new(ZonedDateTime::from_instant(instant, zone).year())
    }
}
