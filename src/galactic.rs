//! # Galactic coordinates
//!
//! Conversions between B1950.0 equatorial coordinates and galactic
//! coordinates (Meeus, *Astronomical Algorithms*, eqs. 13.7–13.10).
//!
//! The galactic north pole lies at α = 192.25°, δ = 27.4° (B1950.0) and the
//! origin of galactic longitude at position angle 123° from the pole.
//! Both directions use `atan2`, and the longitude-like outputs are wrapped
//! into [0°, 360°).

use crate::{
    constants::{deg_to_rad, rad_to_deg, Degree},
    normalize::range_degrees,
    positions::{EquatorialPosition, GalacticPosition},
};

/// Right ascension of the galactic north pole (B1950.0)
const POLE_RA: Degree = 192.25;
/// Declination of the galactic north pole (B1950.0)
const POLE_DEC: Degree = 27.4;
/// Galactic longitude of the north celestial pole
const NCP_L: Degree = 123.0;

/// Galactic coordinates of a B1950.0 equatorial position.
///
/// ```text
/// x = atan2( sin(α_p − α), cos(α_p − α)·sin δ_p − tan δ·cos δ_p )
/// l = 303° − x
/// b = asin( sin δ·sin δ_p + cos δ·cos δ_p·cos(α_p − α) )
/// ```
pub fn get_galactic_from_equatorial(object: &EquatorialPosition) -> GalacticPosition {
    let ra_offset = deg_to_rad(POLE_RA - object.ra);
    let declination = deg_to_rad(object.dec);
    let (sin_p, cos_p) = deg_to_rad(POLE_DEC).sin_cos();

    let x = ra_offset.sin().atan2(ra_offset.cos() * sin_p - declination.tan() * cos_p);
    let b = (declination.sin() * sin_p + declination.cos() * cos_p * ra_offset.cos()).asin();

    GalacticPosition {
        l: range_degrees(NCP_L + 180.0 - rad_to_deg(x)),
        b: rad_to_deg(b),
    }
}

/// B1950.0 equatorial coordinates of a galactic position.
///
/// ```text
/// y = atan2( sin(l − 123°), cos(l − 123°)·sin δ_p − tan b·cos δ_p )
/// α = y + 12.25°
/// δ = asin( sin b·sin δ_p + cos b·cos δ_p·cos(l − 123°) )
/// ```
pub fn get_equatorial_from_galactic(object: &GalacticPosition) -> EquatorialPosition {
    let l_offset = deg_to_rad(object.l - NCP_L);
    let latitude = deg_to_rad(object.b);
    let (sin_p, cos_p) = deg_to_rad(POLE_DEC).sin_cos();

    let y = l_offset.sin().atan2(l_offset.cos() * sin_p - latitude.tan() * cos_p);
    let dec = (latitude.sin() * sin_p + latitude.cos() * cos_p * l_offset.cos()).asin();

    EquatorialPosition {
        ra: range_degrees(rad_to_deg(y) + POLE_RA - 180.0),
        dec: rad_to_deg(dec),
    }
}

#[cfg(test)]
mod galactic_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_nova_serpentis_1978() {
        // Meeus example 13.c
        let nova = EquatorialPosition::new(
            (17.0 + 48.0 / 60.0 + 59.74 / 3600.0) * 15.0,
            -(14.0 + 43.0 / 60.0 + 8.2 / 3600.0),
        );

        let gal = get_galactic_from_equatorial(&nova);
        assert_abs_diff_eq!(gal.l, 12.9593, epsilon = 1e-4);
        assert_abs_diff_eq!(gal.b, 6.0463, epsilon = 1e-4);

        let back = get_equatorial_from_galactic(&gal);
        assert_abs_diff_eq!(back.ra, nova.ra, epsilon = 1e-9);
        assert_abs_diff_eq!(back.dec, nova.dec, epsilon = 1e-9);
    }

    #[test]
    fn test_galactic_pole() {
        let gal = get_galactic_from_equatorial(&EquatorialPosition::new(POLE_RA, POLE_DEC));
        assert_abs_diff_eq!(gal.b, 90.0, epsilon = 1e-9);

        let equ = get_equatorial_from_galactic(&GalacticPosition::new(0.0, 90.0));
        assert_abs_diff_eq!(equ.dec, POLE_DEC, epsilon = 1e-9);
    }

    #[test]
    fn test_celestial_pole_longitude() {
        let gal = get_galactic_from_equatorial(&EquatorialPosition::new(0.0, 90.0));
        assert_abs_diff_eq!(gal.l, NCP_L, epsilon = 1e-9);
        assert_abs_diff_eq!(gal.b, POLE_DEC, epsilon = 1e-9);
    }
}
