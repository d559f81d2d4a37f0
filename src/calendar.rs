use std::fmt;

use chrono::{DateTime, FixedOffset, Month, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::zone::ZoneId;

/// An absolute point in time, independent of any zone.
pub type Instant = DateTime<Utc>;

/// A date-time carrying full zone identity.
pub type ZonedDateTime = DateTime<ZoneId>;

/// A date-time as observed in some zone, with the zone identity dropped.
pub type LocalDateTime = NaiveDateTime;

pub type LocalDate = NaiveDate;

pub type LocalTime = NaiveTime;

/// A date-time pinned to the fixed offset a zone had at one instant.
pub type OffsetDateTime = DateTime<FixedOffset>;

/// A time of day together with the fixed offset it was observed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetTime {
    time: NaiveTime,
    offset: FixedOffset,
}

impl OffsetTime {
    pub fn new(time: NaiveTime, offset: FixedOffset) -> OffsetTime {
        OffsetTime { time, offset }
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }
}

impl fmt::Display for OffsetTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.time, self.offset)
    }
}

/// A month and day-of-month, with the year discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    pub fn new(month: Month, day: u8) -> MonthDay {
        MonthDay { month, day }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month.number_from_month(), self.day)
    }
}

/// A calendar year on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Year(i32);

impl Year {
    pub fn new(year: i32) -> Year {
        Year(year)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
