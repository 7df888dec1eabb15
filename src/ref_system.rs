//! # Rotations between ecliptic and equatorial frames
//!
//! Matrix form of the frame changes used by the quadrant-correct transforms
//! ([`quadrant`](crate::quadrant)) and the rectangular helpers:
//!
//! - [`rotmt`] – elementary rotation about a principal axis,
//! - [`rot_ecliptic_to_equatorial`] / [`rot_equatorial_to_ecliptic`] – rotation by
//!   the true obliquity of date,
//! - [`unit_vector`] / [`spherical_from_vector`] – direction cosines ↔ longitude/latitude,
//! - [`equatorial_from_rectangular`] – direction and distance of a geocentric position.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::{
    constants::{deg_to_rad, rad_to_deg, AstronomicalUnit, Degree, JulianDay, Radian},
    earth_model::EarthModel,
    positions::{EquatorialPosition, GeocentricPosition},
};

/// Principal axis of a rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes.
///
/// This function builds a [`nalgebra::Matrix3`] representing an **active rotation**
/// of a 3D vector by an angle `alpha` around the chosen axis, counter-clockwise
/// when looking from the positive end of the axis toward the origin.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians**.
/// * `axis` - Axis of rotation.
///
/// # Returns
///
/// A 3×3 orthonormal matrix `R` such that the rotated vector is `x' = R · x`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation taking ecliptic direction vectors to equatorial ones at `jd`.
///
/// A rotation by the true obliquity ε about the equinox (X) axis.
pub fn rot_ecliptic_to_equatorial<M: EarthModel + ?Sized>(
    jd: JulianDay,
    model: &M,
) -> Matrix3<f64> {
    rotmt(deg_to_rad(model.nutation(jd).ecliptic), Axis::X)
}

/// Rotation taking equatorial direction vectors to ecliptic ones at `jd`.
pub fn rot_equatorial_to_ecliptic<M: EarthModel + ?Sized>(
    jd: JulianDay,
    model: &M,
) -> Matrix3<f64> {
    rotmt(-deg_to_rad(model.nutation(jd).ecliptic), Axis::X)
}

/// Unit direction vector of a longitude/latitude pair given in degrees.
pub fn unit_vector(lng: Degree, lat: Degree) -> Vector3<f64> {
    let (sin_lng, cos_lng) = deg_to_rad(lng).sin_cos();
    let (sin_lat, cos_lat) = deg_to_rad(lat).sin_cos();
    Vector3::new(cos_lat * cos_lng, cos_lat * sin_lng, sin_lat)
}

/// Longitude, latitude (degrees) and norm of a rectangular vector.
///
/// Longitude is the `atan2` of `(y, x)` and lies in (−180°, 180°]; latitude
/// uses `atan2(z, √(x²+y²))`, so the vector need not be normalized. The null
/// vector gives `(0, 0, 0)`.
pub fn spherical_from_vector(v: &Vector3<f64>) -> (Degree, Degree, f64) {
    let rho = v.x.hypot(v.y);
    (
        rad_to_deg(v.y.atan2(v.x)),
        rad_to_deg(v.z.atan2(rho)),
        v.norm(),
    )
}

/// Right ascension, declination and distance of a geocentric rectangular position.
///
/// Arguments
/// ---------
/// * `position`: equatorial rectangular coordinates, e.g. the output of
///   [`get_geocentric_from_heliocentric`](crate::transform::get_geocentric_from_heliocentric).
///
/// Return
/// ------
/// * The direction (right ascension in (−180°, 180°]) and the distance in AU.
pub fn equatorial_from_rectangular(
    position: &GeocentricPosition,
) -> (EquatorialPosition, AstronomicalUnit) {
    let (ra, dec, distance) = spherical_from_vector(&Vector3::from(*position));
    (EquatorialPosition { ra, dec }, distance)
}
