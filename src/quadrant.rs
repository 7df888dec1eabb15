//! # Quadrant-correct transforms
//!
//! `atan2` counterparts of the angular transforms in
//! [`transform`](crate::transform). They take the same inputs and the same
//! Earth model quantities (mean sidereal time forward, apparent sidereal time
//! backward), but resolve the full circle instead of returning the
//! half-plane answer of a single-argument `atan`.
//!
//! Output ranges:
//!
//! | Function | Longitude-like output |
//! |---|---|
//! | [`get_horizontal_from_equatorial_atan2`] | azimuth in (−180°, 180°], from the south |
//! | [`get_equatorial_from_horizontal_atan2`] | `θ − H − L`, not wrapped |
//! | [`get_equatorial_from_ecliptical_atan2`] | right ascension in (−180°, 180°] |
//! | [`get_ecliptical_from_equatorial_atan2`] | longitude in (−180°, 180°] |
//!
//! Wrap them with [`normalize`](crate::normalize) when a [0°, 360°) range is wanted.

use crate::{
    constants::{deg_to_rad, rad_to_deg, Hours, JulianDay, RADH},
    earth_model::EarthModel,
    positions::{EclipticalPosition, EquatorialPosition, HorizontalPosition, ObserverPosition},
    ref_system::{
        rot_ecliptic_to_equatorial, rot_equatorial_to_ecliptic, spherical_from_vector, unit_vector,
    },
};

/// Equatorial → horizontal with a quadrant-resolved azimuth, at the mean
/// sidereal time of `jd`.
pub fn get_horizontal_from_equatorial_atan2<M: EarthModel + ?Sized>(
    object: &EquatorialPosition,
    observer: &ObserverPosition,
    jd: JulianDay,
    model: &M,
) -> HorizontalPosition {
    get_horizontal_from_equatorial_sidereal_atan2(object, observer, model.mean_sidereal_time(jd))
}

/// Equatorial → horizontal for a given Greenwich sidereal time (hours).
///
/// ```text
/// A = atan2( sin H, cos H·sin φ − tan δ·cos φ )
/// ```
///
/// The altitude is computed exactly as in the legacy transform.
pub fn get_horizontal_from_equatorial_sidereal_atan2(
    object: &EquatorialPosition,
    observer: &ObserverPosition,
    sidereal: Hours,
) -> HorizontalPosition {
    let h_angle = sidereal * RADH - deg_to_rad(observer.lng) - deg_to_rad(object.ra);
    let latitude = deg_to_rad(observer.lat);
    let declination = deg_to_rad(object.dec);

    let az = h_angle
        .sin()
        .atan2(h_angle.cos() * latitude.sin() - declination.tan() * latitude.cos());
    let alt = (latitude.sin() * declination.sin()
        + latitude.cos() * declination.cos() * h_angle.cos())
    .asin();

    HorizontalPosition {
        alt: rad_to_deg(alt),
        az: rad_to_deg(az),
    }
}

/// Horizontal → equatorial with a quadrant-resolved hour angle, at the
/// apparent sidereal time of `jd`.
///
/// ```text
/// H = atan2( sin A, cos A·sin φ + tan h·cos φ )
/// ```
pub fn get_equatorial_from_horizontal_atan2<M: EarthModel + ?Sized>(
    object: &HorizontalPosition,
    observer: &ObserverPosition,
    jd: JulianDay,
    model: &M,
) -> EquatorialPosition {
    let az = deg_to_rad(object.az);
    let alt = deg_to_rad(object.alt);
    let longitude = deg_to_rad(observer.lng);
    let latitude = deg_to_rad(observer.lat);

    let h_angle = az.sin().atan2(az.cos() * latitude.sin() + alt.tan() * latitude.cos());
    let declination =
        (latitude.sin() * alt.sin() - latitude.cos() * alt.cos() * az.cos()).asin();

    let sidereal = model.apparent_sidereal_time(jd) * RADH;

    EquatorialPosition {
        ra: rad_to_deg(sidereal - h_angle - longitude),
        dec: rad_to_deg(declination),
    }
}

/// Ecliptical → equatorial by rotating the direction vector about the equinox
/// axis by the true obliquity.
pub fn get_equatorial_from_ecliptical_atan2<M: EarthModel + ?Sized>(
    object: &EclipticalPosition,
    jd: JulianDay,
    model: &M,
) -> EquatorialPosition {
    let v = rot_ecliptic_to_equatorial(jd, model) * unit_vector(object.lng, object.lat);
    let (ra, dec, _) = spherical_from_vector(&v);
    EquatorialPosition { ra, dec }
}

/// Equatorial → ecliptical by the inverse rotation.
pub fn get_ecliptical_from_equatorial_atan2<M: EarthModel + ?Sized>(
    object: &EquatorialPosition,
    jd: JulianDay,
    model: &M,
) -> EclipticalPosition {
    let v = rot_equatorial_to_ecliptic(jd, model) * unit_vector(object.ra, object.dec);
    let (lng, lat, _) = spherical_from_vector(&v);
    EclipticalPosition { lng, lat }
}
