use hifitime::{Epoch, TimeScale};
use std::str::FromStr;

use crate::{
    constants::{Hours, JulianDay, Radian, DPI, JDTOMJD, MJD, RADH, T2000},
    earth_orientation::get_nutation,
    skyframe_errors::SkyframeError,
};

/// Julian Day (UTC) of a [`hifitime::Epoch`].
pub fn julian_day(epoch: &Epoch) -> JulianDay {
    epoch.to_jde_utc_days()
}

/// Julian Day of an ISO 8601 date string (e.g. `"1987-04-10T19:21:00"`).
///
/// A string without an explicit time scale is read as UTC.
///
/// Return
/// ------
/// * The Julian Day, or [`SkyframeError::InvalidDate`] if `date` cannot be parsed.
pub fn julian_day_from_str(date: &str) -> Result<JulianDay, SkyframeError> {
    let epoch = Epoch::from_str(date)?;
    Ok(julian_day(&epoch))
}

/// Julian Day of a Gregorian calendar date given in UTC, with a fractional day.
///
/// Argument
/// --------
/// * `year`, `month`: calendar year and month (1–12)
/// * `day`: day of month with its fraction (e.g. `10.80625` for 19:21 UTC)
///
/// Return
/// ------
/// * The Julian Day, or [`SkyframeError::InvalidDate`] for an impossible date.
pub fn julian_day_from_gregorian(
    year: i32,
    month: u8,
    day: f64,
) -> Result<JulianDay, SkyframeError> {
    if !(1.0..32.0).contains(&day) {
        return Err(SkyframeError::InvalidDate(format!(
            "{year:04}-{month:02}: day {day} out of range"
        )));
    }

    let midnight =
        Epoch::maybe_from_gregorian(year, month, day.trunc() as u8, 0, 0, 0, 0, TimeScale::UTC)?;

    Ok(julian_day(&midnight) + day.fract())
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date (UT1 time scale).
///
/// This function implements the IAU 1982 polynomial formula
/// for the mean sidereal time at 0h UT1, plus the fractional-day
/// correction term due to Earth's rotation rate.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT1 time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # Details
/// The GMST is computed in two steps:
/// 1. Use a cubic polynomial (coefficients C0–C3) to get GMST at 0h UT1
///    in seconds for the given date.
/// 2. Add the contribution of Earth's rotation during the fractional day
///    using the factor `RAP`, which converts solar days to sidereal days.
pub fn gmst(tjm: MJD) -> Radian {
    // Polynomial coefficients for GMST at 0h UT1 (in seconds)
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.00273790934;

    let itjm = tjm.floor();
    let t = (itjm - T2000) / 36525.0;

    // GMST at 0h UT1, seconds → radians
    let gmst0 = (((C3 * t + C2) * t + C1) * t + C0) * DPI / 86400.0;

    // fraction of the current day, scaled to sidereal rotation
    let h = (tjm - itjm) * DPI;

    (gmst0 + h * RAP).rem_euclid(DPI)
}

/// Mean sidereal time at Greenwich, in hours within [0, 24).
pub fn get_mean_sidereal_time(jd: JulianDay) -> Hours {
    gmst(jd - JDTOMJD) / RADH
}

/// Apparent sidereal time at Greenwich, in hours within [0, 24).
///
/// Mean sidereal time corrected by the equation of the equinoxes Δψ·cos ε
/// taken from [`get_nutation`].
pub fn get_apparent_sidereal_time(jd: JulianDay) -> Hours {
    let correction = get_nutation(jd).equation_of_equinoxes() / 15.0;
    (get_mean_sidereal_time(jd) + correction).rem_euclid(24.0)
}
