//! # Constants and type definitions for skyframe
//!
//! This module centralizes the **conversion factors**, **reference epochs** and
//! **type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, arcseconds ↔ radians, hours ↔ radians)
//! - Reference epochs (J2000.0 as JD and MJD)
//! - Type aliases documenting the unit carried by a plain `f64`
//! - The two trivial converters [`deg_to_rad`] and [`rad_to_deg`]
//!
//! All angles crossing the public API are in degrees; radians only live inside
//! the transform bodies.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

// -------------------------------------------------------------------------------------------------
// Epochs
// -------------------------------------------------------------------------------------------------

/// Julian Day of J2000.0 (2000-01-01 12:00:00)
pub const J2000: f64 = 2451545.0;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00)
pub const T2000: f64 = 51544.5;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2400000.5;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Time or angle in hours (1h = 15°)
pub type Hours = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Day (days)
pub type JulianDay = f64;
/// Modified Julian Date (days)
pub type MJD = f64;

/// Convert an angle from degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: Degree) -> Radian {
    degrees * RADEG
}

/// Convert an angle from radians to degrees.
#[inline]
pub fn rad_to_deg(radians: Radian) -> Degree {
    radians / RADEG
}

/// Julian centuries elapsed since J2000.0.
#[inline]
pub fn julian_centuries(jd: JulianDay) -> f64 {
    (jd - J2000) / DAYS_PER_JULIAN_CENTURY
}
