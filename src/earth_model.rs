//! # Earth models
//!
//! The transforms only need three time-dependent quantities from the rest of
//! an astronomy library: the nutation record (for the obliquity of the
//! ecliptic), the mean sidereal time and the apparent sidereal time. They
//! obtain them through the [`EarthModel`] trait, so a caller can plug in its
//! own providers.
//!
//! Two models ship with the crate:
//!
//! - [`Iau1980`] – computes everything from the Julian Day
//!   ([`get_nutation`], [`get_mean_sidereal_time`], [`get_apparent_sidereal_time`]),
//! - [`FixedEarthModel`] – returns constant, caller-supplied values whatever the
//!   Julian Day (precomputed quantities, reproducible scenarios).
//!
//! ## Example
//!
//! ```rust
//! use skyframe::earth_model::{EarthModel, FixedEarthModel, Iau1980};
//!
//! let jd = 2446895.5;
//! let sidereal = Iau1980.mean_sidereal_time(jd);
//!
//! let frozen = FixedEarthModel::new(23.4392911, sidereal);
//! assert_eq!(frozen.mean_sidereal_time(0.0), sidereal);
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    constants::{Degree, Hours, JulianDay},
    earth_orientation::{get_nutation, Nutation},
    time::{get_apparent_sidereal_time, get_mean_sidereal_time},
};

/// Provider of the Earth orientation quantities consumed by the transforms.
pub trait EarthModel {
    /// Nutation in longitude, nutation in obliquity and true obliquity (degrees).
    fn nutation(&self, jd: JulianDay) -> Nutation;

    /// Mean sidereal time at Greenwich (hours).
    fn mean_sidereal_time(&self, jd: JulianDay) -> Hours;

    /// Apparent sidereal time at Greenwich (hours).
    fn apparent_sidereal_time(&self, jd: JulianDay) -> Hours;
}

impl<M: EarthModel + ?Sized> EarthModel for &M {
    fn nutation(&self, jd: JulianDay) -> Nutation {
        (**self).nutation(jd)
    }

    fn mean_sidereal_time(&self, jd: JulianDay) -> Hours {
        (**self).mean_sidereal_time(jd)
    }

    fn apparent_sidereal_time(&self, jd: JulianDay) -> Hours {
        (**self).apparent_sidereal_time(jd)
    }
}

/// IAU 1980 nutation, IAU 1976 obliquity and IAU 1982 sidereal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Iau1980;

impl EarthModel for Iau1980 {
    fn nutation(&self, jd: JulianDay) -> Nutation {
        get_nutation(jd)
    }

    fn mean_sidereal_time(&self, jd: JulianDay) -> Hours {
        get_mean_sidereal_time(jd)
    }

    fn apparent_sidereal_time(&self, jd: JulianDay) -> Hours {
        get_apparent_sidereal_time(jd)
    }
}

/// Earth model returning the same values for every Julian Day.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FixedEarthModel {
    /// Nutation record returned for every Julian Day (all angles in degrees)
    pub nutation: Nutation,
    /// Greenwich mean sidereal time, in hours
    pub mean_sidereal: Hours,
    /// Greenwich apparent sidereal time, in hours
    pub apparent_sidereal: Hours,
}

impl FixedEarthModel {
    /// Constant obliquity (degrees) and a sidereal time (hours) used both as
    /// mean and apparent sidereal time. Nutation in longitude and obliquity is zero.
    pub fn new(obliquity: Degree, sidereal: Hours) -> Self {
        FixedEarthModel {
            nutation: Nutation {
                longitude: 0.0,
                obliquity: 0.0,
                ecliptic: obliquity,
            },
            mean_sidereal: sidereal,
            apparent_sidereal: sidereal,
        }
    }

    /// Freeze another model at a given Julian Day.
    pub fn snapshot<M: EarthModel + ?Sized>(model: &M, jd: JulianDay) -> Self {
        FixedEarthModel {
            nutation: model.nutation(jd),
            mean_sidereal: model.mean_sidereal_time(jd),
            apparent_sidereal: model.apparent_sidereal_time(jd),
        }
    }
}

impl EarthModel for FixedEarthModel {
    fn nutation(&self, _jd: JulianDay) -> Nutation {
        self.nutation
    }

    fn mean_sidereal_time(&self, _jd: JulianDay) -> Hours {
        self.mean_sidereal
    }

    fn apparent_sidereal_time(&self, _jd: JulianDay) -> Hours {
        self.apparent_sidereal
    }
}

#[cfg(test)]
mod earth_model_test {
    use super::*;
    use crate::constants::J2000;

    #[test]
    fn test_iau1980_delegates() {
        let jd = J2000 + 1234.5;
        assert_eq!(Iau1980.nutation(jd), get_nutation(jd));
        assert_eq!(Iau1980.mean_sidereal_time(jd), get_mean_sidereal_time(jd));
        assert_eq!(
            Iau1980.apparent_sidereal_time(jd),
            get_apparent_sidereal_time(jd)
        );
    }

    #[test]
    fn test_snapshot_freezes_values() {
        let jd = 2446895.5;
        let frozen = FixedEarthModel::snapshot(&Iau1980, jd);

        for other in [0.0, J2000, jd + 365.25] {
            assert_eq!(frozen.nutation(other), Iau1980.nutation(jd));
            assert_eq!(
                frozen.mean_sidereal_time(other),
                Iau1980.mean_sidereal_time(jd)
            );
            assert_eq!(
                frozen.apparent_sidereal_time(other),
                Iau1980.apparent_sidereal_time(jd)
            );
        }
    }

    #[test]
    fn test_trait_object() {
        let models: Vec<Box<dyn EarthModel>> = vec![
            Box::new(Iau1980),
            Box::new(FixedEarthModel::new(23.5, 0.0)),
        ];
        let obliquities: Vec<f64> = models
            .iter()
            .map(|m| m.nutation(J2000).ecliptic)
            .collect();
        assert!((obliquities[0] - 23.44).abs() < 0.01);
        assert_eq!(obliquities[1], 23.5);
    }
}
