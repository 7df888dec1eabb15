#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use skyframe::normalize::range_signed_degrees;
use skyframe::{EclipticalPosition, EquatorialPosition, HorizontalPosition};

/// Mean obliquity of J2000.0 used throughout Meeus chapter 13.
pub const OBLIQUITY_J2000: f64 = 23.4392911;

pub fn hms_to_deg(h: f64, m: f64, s: f64) -> f64 {
    (h + m / 60.0 + s / 3600.0) * 15.0
}

pub fn dms_to_deg(sign: f64, d: f64, m: f64, s: f64) -> f64 {
    sign * (d + m / 60.0 + s / 3600.0)
}

/// Compare right ascensions modulo 360°.
pub fn assert_equatorial_close(
    actual: &EquatorialPosition,
    expected: &EquatorialPosition,
    epsilon: f64,
) {
    let d_ra = range_signed_degrees(actual.ra - expected.ra);
    assert_abs_diff_eq!(d_ra, 0.0, epsilon = epsilon);
    assert_abs_diff_eq!(actual.dec, expected.dec, epsilon = epsilon);
}

pub fn assert_ecliptical_close(
    actual: &EclipticalPosition,
    expected: &EclipticalPosition,
    epsilon: f64,
) {
    let d_lng = range_signed_degrees(actual.lng - expected.lng);
    assert_abs_diff_eq!(d_lng, 0.0, epsilon = epsilon);
    assert_abs_diff_eq!(actual.lat, expected.lat, epsilon = epsilon);
}

pub fn assert_horizontal_close(
    actual: &HorizontalPosition,
    expected: &HorizontalPosition,
    epsilon: f64,
) {
    assert_abs_diff_eq!(actual.alt, expected.alt, epsilon = epsilon);
    let d_az = range_signed_degrees(actual.az - expected.az);
    assert_abs_diff_eq!(d_az, 0.0, epsilon = epsilon);
}
