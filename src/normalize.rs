//! # Angle normalization
//!
//! The transforms return raw angles: right ascension, azimuth and longitude
//! may fall anywhere on the real line. This module wraps them explicitly.
//!
//! | Quantity | Range | Function |
//! |---|---|---|
//! | Right ascension, azimuth, longitude | [0°, 360°) | [`range_degrees`] |
//! | Hour angle, angular differences | [−180°, 180°) | [`range_signed_degrees`] |
//! | Sidereal time | [0h, 24h) | [`range_hours`] |
//!
//! Latitudes (declination, altitude, ecliptic and galactic latitude) come out
//! of an `asin`/`atan2` and are left untouched. `NaN` stays `NaN`.

use crate::{
    constants::{Degree, Hours},
    positions::{EclipticalPosition, EquatorialPosition, GalacticPosition, HorizontalPosition},
};

/// Wrap `value` into [0, `period`).
///
/// `rem_euclid` can round a tiny negative input up to `period` itself, which
/// is folded back to zero.
fn wrap(value: f64, period: f64) -> f64 {
    let r = value.rem_euclid(period);
    if r >= period {
        0.0
    } else {
        r
    }
}

/// Wrap an angle into [0°, 360°).
pub fn range_degrees(angle: Degree) -> Degree {
    wrap(angle, 360.0)
}

/// Wrap an angle into [−180°, 180°).
pub fn range_signed_degrees(angle: Degree) -> Degree {
    let r = range_degrees(angle);
    if r >= 180.0 {
        r - 360.0
    } else {
        r
    }
}

/// Wrap a time into [0h, 24h).
pub fn range_hours(hours: Hours) -> Hours {
    wrap(hours, 24.0)
}

impl EquatorialPosition {
    /// Same position with the right ascension in [0°, 360°).
    pub fn normalized(self) -> Self {
        EquatorialPosition {
            ra: range_degrees(self.ra),
            ..self
        }
    }
}

impl HorizontalPosition {
    /// Same position with the azimuth in [0°, 360°).
    pub fn normalized(self) -> Self {
        HorizontalPosition {
            az: range_degrees(self.az),
            ..self
        }
    }
}

impl EclipticalPosition {
    /// Same position with the longitude in [0°, 360°).
    pub fn normalized(self) -> Self {
        EclipticalPosition {
            lng: range_degrees(self.lng),
            ..self
        }
    }
}

impl GalacticPosition {
    /// Same position with the galactic longitude in [0°, 360°).
    pub fn normalized(self) -> Self {
        GalacticPosition {
            l: range_degrees(self.l),
            ..self
        }
    }
}
