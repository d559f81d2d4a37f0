use std::fmt;

use chrono::{FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::{Tz, TzOffset};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("unrecognized zone identifier: {0}")]
    InvalidZoneId(String),

    #[error("invalid offset zone specification: {0}")]
    InvalidZoneSpec(String),

    #[error("platform zone lookup failed: {0}")]
    Platform(#[from] std::io::Error),
}

/// Label in front of a fixed-offset zone identifier. Only the tokens the
/// platform registry recognizes exist as variants; anything else is rejected
/// at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetPrefix {
    Bare,
    Gmt,
    Utc,
    Ut,
}

impl OffsetPrefix {
    fn from_token(token: &str) -> Option<OffsetPrefix> {
        match token {
            "" => Some(OffsetPrefix::Bare),
            "GMT" => Some(OffsetPrefix::Gmt),
            "UTC" => Some(OffsetPrefix::Utc),
            "UT" => Some(OffsetPrefix::Ut),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OffsetPrefix::Bare => "",
            OffsetPrefix::Gmt => "GMT",
            OffsetPrefix::Utc => "UTC",
            OffsetPrefix::Ut => "UT",
        }
    }
}

/// Identifier for a time-zone rule set: either a named region from the IANA
/// database or a fixed numeric offset. The canonical string form is available
/// through `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ZoneId {
    Region(Tz),
    Offset {
        prefix: OffsetPrefix,
        offset: FixedOffset,
    },
}

impl ZoneId {
    /// Resolve a canonical region identifier against the platform registry.
    pub fn of(id: &str) -> Result<ZoneId, ZoneError> {
        id.parse::<Tz>()
            .map(ZoneId::Region)
            .map_err(|_| ZoneError::InvalidZoneId(id.to_string()))
    }

    /// Build a fixed-offset zone, optionally labeled with a prefix token.
    ///
    /// An empty prefix yields a bare offset zone. The tokens `GMT`, `UTC` and
    /// `UT` are accepted with a non-zero offset. Every other combination,
    /// including a recognized prefix together with a zero offset, is rejected
    /// with [`ZoneError::InvalidZoneSpec`].
    pub fn of_offset(prefix: &str, offset: FixedOffset) -> Result<ZoneId, ZoneError> {
        let prefix = OffsetPrefix::from_token(prefix).ok_or_else(|| {
            ZoneError::InvalidZoneSpec(format!("unrecognized offset prefix {:?}", prefix))
        })?;
        if prefix != OffsetPrefix::Bare && offset.local_minus_utc() == 0 {
            return Err(ZoneError::InvalidZoneSpec(format!(
                "prefix {} requires a non-zero offset",
                prefix.as_str()
            )));
        }
        Ok(ZoneId::Offset { prefix, offset })
    }
}

impl From<Tz> for ZoneId {
    fn from(tz: Tz) -> ZoneId {
        ZoneId::Region(tz)
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneId::Region(tz) => f.write_str(tz.name()),
            ZoneId::Offset { prefix, offset } => write!(f, "{}{}", prefix.as_str(), offset),
        }
    }
}

/// Offset of a [`ZoneId`] at a particular point in time. This is what makes
/// `DateTime<ZoneId>` work with the chrono conversion machinery; it follows
/// the same shape as chrono-tz's `TzOffset`.
#[derive(Debug, Clone)]
pub enum ZoneOffset {
    Region(TzOffset),
    Fixed {
        prefix: OffsetPrefix,
        offset: FixedOffset,
    },
}

impl Offset for ZoneOffset {
    fn fix(&self) -> FixedOffset {
        match self {
            ZoneOffset::Region(offset) => offset.fix(),
            ZoneOffset::Fixed { offset, .. } => *offset,
        }
    }
}

impl fmt::Display for ZoneOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneOffset::Region(offset) => fmt::Display::fmt(offset, f),
            ZoneOffset::Fixed { prefix, offset } => write!(f, "{}{}", prefix.as_str(), offset),
        }
    }
}

impl TimeZone for ZoneId {
    type Offset = ZoneOffset;

    fn from_offset(offset: &ZoneOffset) -> ZoneId {
        match offset {
            ZoneOffset::Region(offset) => ZoneId::Region(Tz::from_offset(offset)),
            ZoneOffset::Fixed { prefix, offset } => ZoneId::Offset {
                prefix: *prefix,
                offset: *offset,
            },
        }
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<ZoneOffset> {
        match self {
            ZoneId::Region(tz) => tz.offset_from_local_date(local).map(ZoneOffset::Region),
            ZoneId::Offset { prefix, offset } => LocalResult::Single(ZoneOffset::Fixed {
                prefix: *prefix,
                offset: *offset,
            }),
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<ZoneOffset> {
        match self {
            ZoneId::Region(tz) => tz.offset_from_local_datetime(local).map(ZoneOffset::Region),
            ZoneId::Offset { prefix, offset } => LocalResult::Single(ZoneOffset::Fixed {
                prefix: *prefix,
                offset: *offset,
            }),
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> ZoneOffset {
        match self {
            ZoneId::Region(tz) => ZoneOffset::Region(tz.offset_from_utc_date(utc)),
            ZoneId::Offset { prefix, offset } => ZoneOffset::Fixed {
                prefix: *prefix,
                offset: *offset,
            },
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> ZoneOffset {
        match self {
            ZoneId::Region(tz) => ZoneOffset::Region(tz.offset_from_utc_datetime(utc)),
            ZoneId::Offset { prefix, offset } => ZoneOffset::Fixed {
                prefix: *prefix,
                offset: *offset,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn hours(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).expect("offset in range")
    }

    #[test]
    fn region_display_is_registry_name() {
        let zone = ZoneId::of("Europe/Stockholm").unwrap();
        assert_eq!(zone.to_string(), "Europe/Stockholm");
    }

    #[test]
    fn offset_display_carries_prefix() {
        let zone = ZoneId::of_offset("UTC", hours(2)).unwrap();
        assert_eq!(zone.to_string(), "UTC+02:00");
        let bare = ZoneId::of_offset("", hours(2)).unwrap();
        assert_eq!(bare.to_string(), "+02:00");
    }

    #[test]
    fn invalid_offset_combinations_are_rejected() {
        assert!(matches!(
            ZoneId::of_offset("EST", hours(2)),
            Err(ZoneError::InvalidZoneSpec(_))
        ));
        assert!(matches!(
            ZoneId::of_offset("GMT", hours(0)),
            Err(ZoneError::InvalidZoneSpec(_))
        ));
        assert!(ZoneId::of_offset("", hours(0)).is_ok());
    }

    #[test]
    fn zoned_conversion_applies_rules() {
        let instant = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        let stockholm = ZoneId::of("Europe/Stockholm").unwrap();
        let zoned = instant.with_timezone(&stockholm);
        // CEST in July
        assert_eq!(zoned.offset().fix().local_minus_utc(), 2 * 3600);

        let fixed = ZoneId::of_offset("", hours(-5)).unwrap();
        let offset_dt = instant.with_timezone(&fixed);
        assert_eq!(offset_dt.offset().fix().local_minus_utc(), -5 * 3600);
        assert_eq!(offset_dt, instant);
    }
}
