//! # Position records
//!
//! Plain value types for every frame handled by the crate. They carry no
//! identity and no invariant beyond their units: angles are in **degrees**,
//! distances in **astronomical units**. Callers own them; transforms read an
//! input record and return a fresh output record.
//!
//! | Type | Fields | Frame |
//! |---|---|---|
//! | [`HeliocentricPosition`] | `l`, `b`, `r` | Sun-centred ecliptic |
//! | [`GeocentricPosition`] | `x`, `y`, `z` | Earth-centred rectangular |
//! | [`EquatorialPosition`] | `ra`, `dec` | celestial equator |
//! | [`HorizontalPosition`] | `alt`, `az` | observer-local |
//! | [`EclipticalPosition`] | `lng`, `lat` | ecliptic |
//! | [`GalacticPosition`] | `l`, `b` | galactic (B1950 pole) |
//! | [`ObserverPosition`] | `lng`, `lat` | geographic |

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Degree};

/// Heliocentric ecliptic position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeliocentricPosition {
    /// Heliocentric longitude (degrees)
    pub l: Degree,
    /// Heliocentric latitude (degrees)
    pub b: Degree,
    /// Radius vector (AU)
    pub r: AstronomicalUnit,
}

/// Geocentric rectangular position, in AU.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeocentricPosition {
    pub x: AstronomicalUnit,
    pub y: AstronomicalUnit,
    pub z: AstronomicalUnit,
}

/// Equatorial position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EquatorialPosition {
    /// Right ascension (degrees)
    pub ra: Degree,
    /// Declination (degrees)
    pub dec: Degree,
}

/// Horizontal position as seen by an observer.
///
/// Azimuth is measured westward from the **south**.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HorizontalPosition {
    /// Altitude above the horizon (degrees)
    pub alt: Degree,
    /// Azimuth (degrees)
    pub az: Degree,
}

/// Ecliptical position of an object (direction only).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EclipticalPosition {
    /// Ecliptic longitude (degrees)
    pub lng: Degree,
    /// Ecliptic latitude (degrees)
    pub lat: Degree,
}

/// Galactic position referred to the B1950 galactic pole.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GalacticPosition {
    /// Galactic longitude (degrees)
    pub l: Degree,
    /// Galactic latitude (degrees)
    pub b: Degree,
}

/// Geographic location of an observer.
///
/// Longitude is counted positive **west** of Greenwich, matching the hour
/// angle relation `H = θ − L − α` used by the horizontal transforms.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ObserverPosition {
    /// Geographic longitude, positive west (degrees)
    pub lng: Degree,
    /// Geographic latitude (degrees)
    pub lat: Degree,
}

impl HeliocentricPosition {
    pub fn new(l: Degree, b: Degree, r: AstronomicalUnit) -> Self {
        HeliocentricPosition { l, b, r }
    }
}

impl GeocentricPosition {
    pub fn new(x: AstronomicalUnit, y: AstronomicalUnit, z: AstronomicalUnit) -> Self {
        GeocentricPosition { x, y, z }
    }

    /// Euclidean distance from the geocentre (AU).
    pub fn distance(&self) -> AstronomicalUnit {
        Vector3::from(*self).norm()
    }
}

impl From<GeocentricPosition> for Vector3<f64> {
    fn from(p: GeocentricPosition) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3<f64>> for GeocentricPosition {
    fn from(v: Vector3<f64>) -> Self {
        GeocentricPosition::new(v.x, v.y, v.z)
    }
}

impl EquatorialPosition {
    pub fn new(ra: Degree, dec: Degree) -> Self {
        EquatorialPosition { ra, dec }
    }
}

impl HorizontalPosition {
    pub fn new(alt: Degree, az: Degree) -> Self {
        HorizontalPosition { alt, az }
    }
}

impl EclipticalPosition {
    pub fn new(lng: Degree, lat: Degree) -> Self {
        EclipticalPosition { lng, lat }
    }
}

impl GalacticPosition {
    pub fn new(l: Degree, b: Degree) -> Self {
        GalacticPosition { l, b }
    }
}

impl ObserverPosition {
    pub fn new(lng: Degree, lat: Degree) -> Self {
        ObserverPosition { lng, lat }
    }
}
