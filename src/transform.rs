//! # Coordinate transforms
//!
//! The five closed-form transforms between heliocentric, geocentric,
//! equatorial, horizontal and ecliptical coordinates, plus the horizontal
//! transform driven by an explicit sidereal time.
//!
//! Every function is pure: it reads its input record, asks the [`EarthModel`]
//! for the obliquity or the sidereal time at `jd`, and returns a new record.
//! Angles are degrees at the boundary and radians inside.
//!
//! ## Quadrants
//!
//! The angular transforms reproduce the historical single-argument `atan`
//! formulation bit for bit:
//!
//! | Transform | Correction applied to the `atan` result |
//! |---|---|
//! | equatorial → horizontal | none |
//! | horizontal → equatorial | none |
//! | ecliptical → equatorial | `+π` if negative, `+π` again if `λ > π` |
//! | equatorial → ecliptical | `+π` if negative |
//!
//! Azimuths and hour angles can therefore come out 180° away from the true
//! direction when the `atan` denominator is negative. Use
//! [`quadrant`](crate::quadrant) for the `atan2` formulation.
//!
//! No output angle is wrapped: see [`normalize`](crate::normalize).
//!
//! ## Failure mode
//!
//! None of these functions fail. An inverse trigonometric argument pushed
//! out of [-1, 1] by rounding, or a `NaN` input, yields `NaN` components.
//!
//! ## Reference
//!
//! Jean Meeus, *Astronomical Algorithms*, chapters 13 and 26.

use std::f64::consts::PI;

use crate::{
    constants::{deg_to_rad, rad_to_deg, Hours, JulianDay, RADH},
    earth_model::EarthModel,
    positions::{
        EclipticalPosition, EquatorialPosition, GeocentricPosition, HeliocentricPosition,
        HorizontalPosition, ObserverPosition,
    },
};

/// Transform heliocentric ecliptic coordinates into geocentric rectangular coordinates.
///
/// Rotation of the ecliptic direction about the equinox axis by the true
/// obliquity ε, scaled by the radius vector:
///
/// ```text
/// X = R·cos L·cos B
/// Y = R·(sin L·cos B·cos ε − sin B·sin ε)
/// Z = R·(sin L·cos B·sin ε + sin B·cos ε)
/// ```
///
/// Arguments
/// ---------
/// * `object`: heliocentric longitude/latitude (degrees) and radius (AU).
/// * `jd`: Julian Day used for the obliquity.
/// * `model`: provider of the nutation record.
///
/// Return
/// ------
/// * Rectangular coordinates in AU. `R = 0` maps to the origin.
pub fn get_geocentric_from_heliocentric<M: EarthModel + ?Sized>(
    object: &HeliocentricPosition,
    jd: JulianDay,
    model: &M,
) -> GeocentricPosition {
    let ecliptic = deg_to_rad(model.nutation(jd).ecliptic);
    let (sin_e, cos_e) = ecliptic.sin_cos();

    let b = deg_to_rad(object.b);
    let l = deg_to_rad(object.l);
    let (sin_b, cos_b) = (b.sin(), b.cos());
    let (sin_l, cos_l) = (l.sin(), l.cos());

    GeocentricPosition {
        x: object.r * cos_l * cos_b,
        y: object.r * (sin_l * cos_b * cos_e - sin_b * sin_e),
        z: object.r * (sin_l * cos_b * sin_e + sin_b * cos_e),
    }
}

/// Transform equatorial coordinates into horizontal coordinates.
///
/// Uses the **mean** sidereal time at `jd`; see
/// [`get_horizontal_from_equatorial_sidereal`] for the formulas.
pub fn get_horizontal_from_equatorial<M: EarthModel + ?Sized>(
    object: &EquatorialPosition,
    observer: &ObserverPosition,
    jd: JulianDay,
    model: &M,
) -> HorizontalPosition {
    get_horizontal_from_equatorial_sidereal(object, observer, model.mean_sidereal_time(jd))
}

/// Transform equatorial coordinates into horizontal coordinates for a given
/// Greenwich sidereal time.
///
/// ```text
/// H = θ − L − α
/// A = atan( sin H / (cos H·sin φ − tan δ·cos φ) )
/// h = asin( sin φ·sin δ + cos φ·cos δ·cos H )
/// ```
///
/// with θ the sidereal time, L the observer longitude (positive west),
/// φ the observer latitude, α and δ the object right ascension and declination.
///
/// Arguments
/// ---------
/// * `object`: right ascension and declination (degrees).
/// * `observer`: observer longitude (positive west) and latitude (degrees).
/// * `sidereal`: Greenwich sidereal time (hours).
///
/// Return
/// ------
/// * Altitude and azimuth (degrees, azimuth from the south). The azimuth is
///   the raw `atan` value in (−90°, 90°) and is not quadrant-resolved.
pub fn get_horizontal_from_equatorial_sidereal(
    object: &EquatorialPosition,
    observer: &ObserverPosition,
    sidereal: Hours,
) -> HorizontalPosition {
    let sidereal = sidereal * RADH;

    // hour angle of the object at the observer
    let ra = deg_to_rad(object.ra);
    let longitude = deg_to_rad(observer.lng);
    let h_angle = sidereal - longitude - ra;

    let latitude = deg_to_rad(observer.lat);
    let declination = deg_to_rad(object.dec);

    let az = (h_angle.sin()
        / (h_angle.cos() * latitude.sin() - declination.tan() * latitude.cos()))
    .atan();

    let alt = (latitude.sin() * declination.sin()
        + latitude.cos() * declination.cos() * h_angle.cos())
    .asin();

    HorizontalPosition {
        alt: rad_to_deg(alt),
        az: rad_to_deg(az),
    }
}

/// Transform horizontal coordinates into equatorial coordinates.
///
/// Inverse of [`get_horizontal_from_equatorial`], evaluated with the
/// **apparent** sidereal time:
///
/// ```text
/// H = atan( sin A / (cos A·sin φ + tan h·cos φ) )
/// δ = asin( sin φ·sin h − cos φ·cos h·cos A )
/// α = θ − H − L
/// ```
///
/// Because the forward transform uses mean sidereal time, a round trip
/// differs in right ascension by the equation of the equinoxes (at most ~1.1 s
/// of time) unless the model returns equal sidereal times.
pub fn get_equatorial_from_horizontal<M: EarthModel + ?Sized>(
    object: &HorizontalPosition,
    observer: &ObserverPosition,
    jd: JulianDay,
    model: &M,
) -> EquatorialPosition {
    let az = deg_to_rad(object.az);
    let alt = deg_to_rad(object.alt);

    let longitude = deg_to_rad(observer.lng);
    let latitude = deg_to_rad(observer.lat);

    let h_angle = (az.sin() / (az.cos() * latitude.sin() + alt.tan() * latitude.cos())).atan();
    let declination =
        (latitude.sin() * alt.sin() - latitude.cos() * alt.cos() * az.cos()).asin();

    let sidereal = model.apparent_sidereal_time(jd) * RADH;

    EquatorialPosition {
        ra: rad_to_deg(sidereal - h_angle - longitude),
        dec: rad_to_deg(declination),
    }
}

/// Transform ecliptical coordinates into equatorial coordinates.
///
/// ```text
/// α = atan( (sin λ·cos ε − tan β·sin ε) / cos λ )
/// δ = asin( sin β·cos ε + cos β·sin ε·sin λ )
/// ```
///
/// The right ascension gets `π` added when the `atan` result is negative and
/// another `π` when λ exceeds `π`. This two-step correction is right only
/// while `sin λ·cos ε − tan β·sin ε` has the sign of `sin λ` and λ lies in
/// [0°, 360°); at high ecliptic latitudes near the equinoxes the right
/// ascension comes out 180° away.
pub fn get_equatorial_from_ecliptical<M: EarthModel + ?Sized>(
    object: &EclipticalPosition,
    jd: JulianDay,
    model: &M,
) -> EquatorialPosition {
    let ecliptic = deg_to_rad(model.nutation(jd).ecliptic);

    let longitude = deg_to_rad(object.lng);
    let latitude = deg_to_rad(object.lat);

    let mut ra = ((longitude.sin() * ecliptic.cos() - latitude.tan() * ecliptic.sin())
        / longitude.cos())
    .atan();

    if ra < 0.0 {
        ra += PI;
    }
    if longitude > PI {
        ra += PI;
    }

    let declination = (latitude.sin() * ecliptic.cos()
        + latitude.cos() * ecliptic.sin() * longitude.sin())
    .asin();

    EquatorialPosition {
        ra: rad_to_deg(ra),
        dec: rad_to_deg(declination),
    }
}

/// Transform equatorial coordinates into ecliptical coordinates.
///
/// ```text
/// λ = atan( (sin α·cos ε + tan δ·sin ε) / cos α )    (+π if negative)
/// β = asin( sin δ·cos ε − cos δ·sin ε·sin α )
/// ```
///
/// Only the "negative → +π" correction is applied, so λ always lies in
/// [0°, 180°): objects whose true longitude is in [180°, 360°) come back
/// 180° away.
pub fn get_ecliptical_from_equatorial<M: EarthModel + ?Sized>(
    object: &EquatorialPosition,
    jd: JulianDay,
    model: &M,
) -> EclipticalPosition {
    let ra = deg_to_rad(object.ra);
    let declination = deg_to_rad(object.dec);
    let ecliptic = deg_to_rad(model.nutation(jd).ecliptic);

    let mut longitude = ((ra.sin() * ecliptic.cos() + declination.tan() * ecliptic.sin())
        / ra.cos())
    .atan();
    if longitude < 0.0 {
        longitude += PI;
    }

    let latitude = (declination.sin() * ecliptic.cos()
        - declination.cos() * ecliptic.sin() * ra.sin())
    .asin();

    EclipticalPosition {
        lng: rad_to_deg(longitude),
        lat: rad_to_deg(latitude),
    }
}
