//! Thin abstractions over the chrono calendar primitives: an effectful
//! time-zone resolution service and a composable construction of
//! calendar-shaped values from an `(Instant, ZoneId)` pair.

pub use calendar::{
    Instant, LocalDate, LocalDateTime, LocalTime, MonthDay, OffsetDateTime, OffsetTime, Year,
    ZonedDateTime,
};
pub use chrono::{Month, Weekday};
pub use chrono_tz::Tz;
pub use effect::Effect;
pub use from_instant::FromInstant;
pub use time_data::TimeData;
pub use zone::{OffsetPrefix, ZoneError, ZoneId, ZoneOffset};

mod calendar;
mod effect;
mod from_instant;
mod time_data;
mod zone;
pub mod zone_service;
