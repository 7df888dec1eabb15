//! # skyframe
//!
//! Transformations between the coordinate systems used to locate a body on
//! the sky: heliocentric ecliptical, geocentric rectangular, equatorial,
//! horizontal, ecliptical and galactic.
//!
//! ## Modules
//!
//! - [`transform`] – the closed-form transforms, with the historical
//!   single-argument `atan` quadrant handling,
//! - [`quadrant`] – `atan2` counterparts that resolve the full circle,
//! - [`galactic`] – B1950.0 equatorial ↔ galactic,
//! - [`transformer`] – a configured façade dispatching between the two conventions,
//! - [`earth_model`] – the [`EarthModel`](earth_model::EarthModel) trait supplying
//!   nutation and sidereal time, with the IAU 1980 implementation,
//! - [`earth_orientation`] / [`time`] – nutation, obliquity, sidereal time and Julian Day helpers,
//! - [`normalize`] – explicit wrapping of angles,
//! - [`ref_system`] – rotation matrices between the ecliptic and the equator.
//!
//! ## Conventions
//!
//! All angles are in degrees, sidereal time in hours and distances in AU.
//! Observer longitude is **positive west** of Greenwich and azimuth is
//! measured **from the south**, increasing westward.
//!
//! ## Example
//!
//! ```rust
//! use skyframe::earth_model::Iau1980;
//! use skyframe::positions::EquatorialPosition;
//! use skyframe::transform::{get_ecliptical_from_equatorial, get_equatorial_from_ecliptical};
//!
//! let jd = 2446895.5;
//! let pollux = EquatorialPosition::new(116.328942, 28.026183);
//!
//! let ecl = get_ecliptical_from_equatorial(&pollux, jd, &Iau1980);
//! let back = get_equatorial_from_ecliptical(&ecl, jd, &Iau1980);
//!
//! assert!((back.ra - pollux.ra).abs() < 1e-9);
//! assert!((back.dec - pollux.dec).abs() < 1e-9);
//! ```

pub mod constants;
pub mod earth_model;
pub mod earth_orientation;
pub mod galactic;
pub mod normalize;
pub mod positions;
pub mod quadrant;
pub mod ref_system;
pub mod skyframe_errors;
pub mod time;
pub mod transform;
pub mod transformer;

pub use earth_model::{EarthModel, FixedEarthModel, Iau1980};
pub use positions::{
    EclipticalPosition, EquatorialPosition, GalacticPosition, GeocentricPosition,
    HeliocentricPosition, HorizontalPosition, ObserverPosition,
};
pub use skyframe_errors::SkyframeError;
pub use transformer::{QuadrantConvention, TransformConfig, Transformer};
