//! # Earth orientation: obliquity and nutation
//!
//! Provides the nutation collaborator consumed by every transform that needs
//! the obliquity of the ecliptic:
//!
//! - [`obleq`] – mean obliquity of the ecliptic (IAU 1976 polynomial),
//! - [`nutn80`] – nutation in longitude and obliquity (IAU 1980, 63 terms),
//! - [`get_nutation`] – both combined into a [`Nutation`] record in degrees.
//!
//! The series is the IAU 1980 theory as tabulated by Meeus, *Astronomical
//! Algorithms*, table 22.A: the 106-term series truncated to the 63 terms
//! whose amplitude reaches 0.0003".

use serde::{Deserialize, Serialize};

use crate::constants::{
    deg_to_rad, julian_centuries, rad_to_deg, ArcSec, Degree, JulianDay, Radian, RADEG, RADSEC,
};

/// Nutation quantities at a given Julian Day, all in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutation {
    /// Nutation in longitude Δψ
    pub longitude: Degree,
    /// Nutation in obliquity Δε
    pub obliquity: Degree,
    /// True obliquity of the ecliptic ε = ε₀ + Δε
    pub ecliptic: Degree,
}

impl Nutation {
    /// Equation of the equinoxes Δψ·cos ε, in degrees.
    pub fn equation_of_equinoxes(&self) -> Degree {
        self.longitude * deg_to_rad(self.ecliptic).cos()
    }
}

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 1976 model).
///
/// Arguments
/// ---------
/// * `jd`: Julian Day (dynamical time).
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic ε₀ in radians.
///
/// Formula
/// -------
/// Cubic polynomial in Julian centuries `T` since J2000, coefficients in
/// arcseconds, evaluated with Horner's scheme:
///
/// ```text
/// ε₀ = 23°26'21.448" − 46.815"·T − 0.0006"·T² + 0.00181"·T³
/// ```
pub fn obleq(jd: JulianDay) -> Radian {
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.0006 * RADSEC;
    let ob3 = 0.00181 * RADSEC;

    let t = julian_centuries(jd);

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// One periodic term of the IAU 1980 series.
///
/// `args` multiplies the fundamental arguments `[D, M, M', F, Ω]`; the
/// amplitudes are in units of 0.0001", with their secular rates per century.
struct NutationTerm {
    args: [i8; 5],
    psi: f64,
    psi_t: f64,
    eps: f64,
    eps_t: f64,
}

const fn term(args: [i8; 5], psi: f64, psi_t: f64, eps: f64, eps_t: f64) -> NutationTerm {
    NutationTerm {
        args,
        psi,
        psi_t,
        eps,
        eps_t,
    }
}

#[rustfmt::skip]
static NUTATION_TERMS: [NutationTerm; 63] = [
    //     D   M  M'   F   Ω        Δψ     Δψ·T     Δε    Δε·T
    term([ 0,  0,  0,  0,  1], -171996.0, -174.2, 92025.0,  8.9),
    term([-2,  0,  0,  2,  2],  -13187.0,   -1.6,  5736.0, -3.1),
    term([ 0,  0,  0,  2,  2],   -2274.0,   -0.2,   977.0, -0.5),
    term([ 0,  0,  0,  0,  2],    2062.0,    0.2,  -895.0,  0.5),
    term([ 0,  1,  0,  0,  0],    1426.0,   -3.4,    54.0, -0.1),
    term([ 0,  0,  1,  0,  0],     712.0,    0.1,    -7.0,  0.0),
    term([-2,  1,  0,  2,  2],    -517.0,    1.2,   224.0, -0.6),
    term([ 0,  0,  0,  2,  1],    -386.0,   -0.4,   200.0,  0.0),
    term([ 0,  0,  1,  2,  2],    -301.0,    0.0,   129.0, -0.1),
    term([-2, -1,  0,  2,  2],     217.0,   -0.5,   -95.0,  0.3),
    term([-2,  0,  1,  0,  0],    -158.0,    0.0,     0.0,  0.0),
    term([-2,  0,  0,  2,  1],     129.0,    0.1,   -70.0,  0.0),
    term([ 0,  0, -1,  2,  2],     123.0,    0.0,   -53.0,  0.0),
    term([ 2,  0,  0,  0,  0],      63.0,    0.0,     0.0,  0.0),
    term([ 0,  0,  1,  0,  1],      63.0,    0.1,   -33.0,  0.0),
    term([ 2,  0, -1,  2,  2],     -59.0,    0.0,    26.0,  0.0),
    term([ 0,  0, -1,  0,  1],     -58.0,   -0.1,    32.0,  0.0),
    term([ 0,  0,  1,  2,  1],     -51.0,    0.0,    27.0,  0.0),
    term([-2,  0,  2,  0,  0],      48.0,    0.0,     0.0,  0.0),
    term([ 0,  0, -2,  2,  1],      46.0,    0.0,   -24.0,  0.0),
    term([ 2,  0,  0,  2,  2],     -38.0,    0.0,    16.0,  0.0),
    term([ 0,  0,  2,  2,  2],     -31.0,    0.0,    13.0,  0.0),
    term([ 0,  0,  2,  0,  0],      29.0,    0.0,     0.0,  0.0),
    term([-2,  0,  1,  2,  2],      29.0,    0.0,   -12.0,  0.0),
    term([ 0,  0,  0,  2,  0],      26.0,    0.0,     0.0,  0.0),
    term([-2,  0,  0,  2,  0],     -22.0,    0.0,     0.0,  0.0),
    term([ 0,  0, -1,  2,  1],      21.0,    0.0,   -10.0,  0.0),
    term([ 0,  2,  0,  0,  0],      17.0,   -0.1,     0.0,  0.0),
    term([ 2,  0, -1,  0,  1],      16.0,    0.0,    -8.0,  0.0),
    term([-2,  2,  0,  2,  2],     -16.0,    0.1,     7.0,  0.0),
    term([ 0,  1,  0,  0,  1],     -15.0,    0.0,     9.0,  0.0),
    term([-2,  0,  1,  0,  1],     -13.0,    0.0,     7.0,  0.0),
    term([ 0, -1,  0,  0,  1],     -12.0,    0.0,     6.0,  0.0),
    term([ 0,  0,  2, -2,  0],      11.0,    0.0,     0.0,  0.0),
    term([ 2,  0, -1,  2,  1],     -10.0,    0.0,     5.0,  0.0),
    term([ 2,  0,  1,  2,  2],      -8.0,    0.0,     3.0,  0.0),
    term([ 0,  1,  0,  2,  2],       7.0,    0.0,    -3.0,  0.0),
    term([-2,  1,  1,  0,  0],      -7.0,    0.0,     0.0,  0.0),
    term([ 0, -1,  0,  2,  2],      -7.0,    0.0,     3.0,  0.0),
    term([ 2,  0,  0,  2,  1],      -7.0,    0.0,     3.0,  0.0),
    term([ 2,  0,  1,  0,  0],       6.0,    0.0,     0.0,  0.0),
    term([-2,  0,  2,  2,  2],       6.0,    0.0,    -3.0,  0.0),
    term([-2,  0,  1,  2,  1],       6.0,    0.0,    -3.0,  0.0),
    term([ 2,  0, -2,  0,  1],      -6.0,    0.0,     3.0,  0.0),
    term([ 2,  0,  0,  0,  1],      -6.0,    0.0,     3.0,  0.0),
    term([ 0, -1,  1,  0,  0],       5.0,    0.0,     0.0,  0.0),
    term([-2, -1,  0,  2,  1],      -5.0,    0.0,     3.0,  0.0),
    term([-2,  0,  0,  0,  1],      -5.0,    0.0,     3.0,  0.0),
    term([ 0,  0,  2,  2,  1],      -5.0,    0.0,     3.0,  0.0),
    term([-2,  0,  2,  0,  1],       4.0,    0.0,     0.0,  0.0),
    term([-2,  1,  0,  2,  1],       4.0,    0.0,     0.0,  0.0),
    term([ 0,  0,  1, -2,  0],       4.0,    0.0,     0.0,  0.0),
    term([-1,  0,  1,  0,  0],      -4.0,    0.0,     0.0,  0.0),
    term([-2,  1,  0,  0,  0],      -4.0,    0.0,     0.0,  0.0),
    term([ 1,  0,  0,  0,  0],      -4.0,    0.0,     0.0,  0.0),
    term([ 0,  0,  1,  2,  0],       3.0,    0.0,     0.0,  0.0),
    term([ 0,  0, -2,  2,  2],      -3.0,    0.0,     0.0,  0.0),
    term([-1, -1,  1,  0,  0],      -3.0,    0.0,     0.0,  0.0),
    term([ 0,  1,  1,  0,  0],      -3.0,    0.0,     0.0,  0.0),
    term([ 0, -1,  1,  2,  2],      -3.0,    0.0,     0.0,  0.0),
    term([ 2, -1, -1,  2,  2],      -3.0,    0.0,     0.0,  0.0),
    term([ 0,  0,  3,  2,  2],      -3.0,    0.0,     0.0,  0.0),
    term([ 2, -1,  0,  2,  2],      -3.0,    0.0,     0.0,  0.0),
];

/// Fundamental lunisolar arguments `[D, M, M', F, Ω]` in radians.
///
/// `t` = Julian centuries since J2000.0.
///
/// - `D`  = mean elongation of the Moon from the Sun
/// - `M`  = mean anomaly of the Sun
/// - `M'` = mean anomaly of the Moon
/// - `F`  = Moon's argument of latitude
/// - `Ω`  = longitude of the Moon's ascending node
fn fundamental_arguments(t: f64) -> [Radian; 5] {
    let t2 = t * t;
    let t3 = t2 * t;

    let d = 297.85036 + 445267.111480 * t - 0.0019142 * t2 + t3 / 189474.0;
    let m = 357.52772 + 35999.050340 * t - 0.0001603 * t2 - t3 / 300000.0;
    let mm = 134.96298 + 477198.867398 * t + 0.0086972 * t2 + t3 / 56250.0;
    let f = 93.27191 + 483202.017538 * t - 0.0036825 * t2 + t3 / 327270.0;
    let om = 125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450000.0;

    [d, m, mm, f, om].map(|deg| (deg % 360.0) * RADEG)
}

/// Compute the nutation angles in longitude and obliquity using the IAU 1980 model.
///
/// Arguments
/// ---------
/// * `jd`: Julian Day (dynamical time).
///
/// Returns
/// --------
/// * A tuple `(Δψ, Δε)` in arcseconds:
///     - `Δψ`: nutation in longitude
///     - `Δε`: nutation in obliquity
///
/// Each term contributes `(S + S'·T)·sin(arg)` to Δψ and `(C + C'·T)·cos(arg)`
/// to Δε, where `arg` is the integer combination of the five fundamental
/// arguments given in the table.
pub fn nutn80(jd: JulianDay) -> (ArcSec, ArcSec) {
    let t = julian_centuries(jd);
    let fundamental = fundamental_arguments(t);

    let (dpsi, deps) = NUTATION_TERMS
        .iter()
        .fold((0.0, 0.0), |(dpsi, deps), term| {
            let arg: f64 = term
                .args
                .iter()
                .zip(fundamental.iter())
                .map(|(&n, &a)| f64::from(n) * a)
                .sum();

            (
                dpsi + (term.psi + term.psi_t * t) * arg.sin(),
                deps + (term.eps + term.eps_t * t) * arg.cos(),
            )
        });

    // table amplitudes are in 0.0001"
    let (dpsi, deps) = (dpsi * 1e-4, deps * 1e-4);
    log::trace!("nutation at JD {jd}: dpsi = {dpsi}\", deps = {deps}\"");

    (dpsi, deps)
}

/// Nutation collaborator: nutation in longitude and obliquity, and the true
/// obliquity of the ecliptic, all in degrees.
///
/// See also
/// --------
/// * [`obleq`] – mean obliquity ε₀
/// * [`nutn80`] – periodic terms Δψ, Δε
pub fn get_nutation(jd: JulianDay) -> Nutation {
    let (dpsi, deps) = nutn80(jd);
    let mean_obliquity = rad_to_deg(obleq(jd));

    Nutation {
        longitude: dpsi / 3600.0,
        obliquity: deps / 3600.0,
        ecliptic: mean_obliquity + deps / 3600.0,
    }
}
