//! Zone resolution through the platform registry, exposed as deferred
//! effects. Building any of these operations performs no work; everything
//! happens when the caller runs the returned [`Effect`]. All operations are
//! pure functions of their arguments plus platform state and are safe to
//! build and run from any number of threads.

use std::collections::HashSet;
use std::path::{Component, Path};

use chrono::FixedOffset;
use chrono_tz::TZ_VARIANTS;
use lazy_static::lazy_static;
use tracing::debug;

use crate::effect::Effect;
use crate::zone::{ZoneError, ZoneId};

lazy_static! {
    static ref AVAILABLE_ZONE_IDS: HashSet<String> =
        TZ_VARIANTS.iter().map(|tz| tz.name().to_string()).collect();
}

/// The platform's configured local zone.
///
/// Resolution follows the C library rule: the `TZ` environment variable when
/// set (a leading `:` is ignored), otherwise the zone the `/etc/localtime`
/// symlink points at inside its zoneinfo directory. Platform faults surface
/// as [`ZoneError::Platform`].
pub fn system() -> Effect<Result<ZoneId, ZoneError>> {
    Effect::defer(|| {
        let name = system_zone_name()?;
        debug!(zone = %name, "resolved system zone");
        ZoneId::of(&name)
    })
}

/// The set of all zone identifiers the platform registry knows.
pub fn available() -> Effect<Result<HashSet<String>, ZoneError>> {
    Effect::defer(|| Ok(AVAILABLE_ZONE_IDS.clone()))
}

/// Resolve a canonical zone identifier string against the registry.
pub fn of(id: impl Into<String>) -> Effect<Result<ZoneId, ZoneError>> {
    let id = id.into();
    Effect::defer(move || {
        let zone = ZoneId::of(&id)?;
        debug!(zone = %zone, "resolved zone identifier");
        Ok(zone)
    })
}

/// Build a fixed-offset zone, optionally labeled with one of the prefix
/// tokens the registry recognizes (`GMT`, `UTC`, `UT`).
pub fn of_offset(prefix: impl Into<String>, offset: FixedOffset) -> Effect<Result<ZoneId, ZoneError>> {
    let prefix = prefix.into();
    Effect::defer(move || ZoneId::of_offset(&prefix, offset))
}

// Windows keeps the configured zone in the registry instead of an
// /etc/localtime symlink, so discovery there needs a different second step.
fn system_zone_name() -> Result<String, ZoneError> {
    if let Ok(tz) = std::env::var("TZ") {
        let tz = tz.strip_prefix(':').unwrap_or(&tz);
        if !tz.is_empty() {
            return Ok(tz.to_string());
        }
    }
    let target = std::fs::read_link("/etc/localtime")?;
    zone_name_from_localtime(&target).ok_or_else(|| {
        ZoneError::Platform(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("localtime target {} is not inside a zoneinfo directory", target.display()),
        ))
    })
}

/// Extract the zone name from a localtime symlink target, i.e. the path
/// components after the `zoneinfo` directory.
fn zone_name_from_localtime(target: &Path) -> Option<String> {
    let mut components = target.components();
    for component in components.by_ref() {
        if matches!(component, Component::Normal(c) if c == "zoneinfo") {
            break;
        }
    }
    let name = components
        .filter_map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn available_ids_round_trip_through_of() {
        let ids = available().run().unwrap();
        assert!(ids.contains("Europe/Stockholm"));
        for id in ids {
            let zone = of(id.clone()).run().unwrap();
            assert_eq!(zone.to_string(), id);
        }
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let result = of("Not/A/Real/Zone").run();
        assert!(matches!(result, Err(ZoneError::InvalidZoneId(_))));
    }

    #[test]
    fn offset_zone_contract() {
        let two_hours = FixedOffset::east_opt(2 * 3600).unwrap();
        let prefixed = of_offset("UTC", two_hours).run().unwrap();
        assert_eq!(prefixed.to_string(), "UTC+02:00");
        let bare = of_offset("", two_hours).run().unwrap();
        assert_eq!(bare.to_string(), "+02:00");
        assert!(matches!(
            of_offset("PST", two_hours).run(),
            Err(ZoneError::InvalidZoneSpec(_))
        ));
    }

    #[test]
    fn system_zone_honors_tz_variable() {
        std::env::set_var("TZ", "Europe/Stockholm");
        let zone = system().run().unwrap();
        assert_eq!(zone.to_string(), "Europe/Stockholm");
        std::env::remove_var("TZ");
    }

    #[test]
    fn localtime_target_parsing() {
        let target = PathBuf::from("/usr/share/zoneinfo/Europe/Stockholm");
        assert_eq!(
            zone_name_from_localtime(&target).as_deref(),
            Some("Europe/Stockholm")
        );
        assert_eq!(zone_name_from_localtime(Path::new("/etc/nothing")), None);
    }
}
