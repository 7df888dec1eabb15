//! # Configured transformer
//!
//! [`Transformer`] bundles an [`EarthModel`] with a [`TransformConfig`] and
//! exposes one method per transform. The configuration selects
//!
//! - the **quadrant convention**: the legacy single-argument `atan`
//!   formulas of [`transform`](crate::transform) (default) or their `atan2`
//!   counterparts in [`quadrant`](crate::quadrant),
//! - whether longitude-like outputs are **normalized** into [0°, 360°).
//!
//! The default configuration reproduces the legacy numbers bit for bit.
//!
//! ## Example
//!
//! ```rust
//! use skyframe::positions::EquatorialPosition;
//! use skyframe::transformer::{TransformConfig, Transformer};
//!
//! let config = TransformConfig::from_json(r#"{ "quadrant": "atan2", "normalize": true }"#).unwrap();
//! let transformer = Transformer::new(config);
//!
//! let pollux = EquatorialPosition::new(116.328942, 28.026183);
//! let ecl = transformer.ecliptical_from_equatorial(&pollux, 2446895.5);
//! assert!((0.0..360.0).contains(&ecl.lng));
//! ```

use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    constants::JulianDay,
    earth_model::{EarthModel, Iau1980},
    galactic::{get_equatorial_from_galactic, get_galactic_from_equatorial},
    positions::{
        EclipticalPosition, EquatorialPosition, GalacticPosition, GeocentricPosition,
        HeliocentricPosition, HorizontalPosition, ObserverPosition,
    },
    quadrant,
    skyframe_errors::SkyframeError,
    transform,
};

/// How the angular transforms resolve the quadrant of their longitude-like output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadrantConvention {
    /// Single-argument `atan` with the historical corrections.
    #[default]
    Legacy,
    /// Full-circle `atan2`.
    Atan2,
}

impl FromStr for QuadrantConvention {
    type Err = SkyframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(QuadrantConvention::Legacy),
            "atan2" => Ok(QuadrantConvention::Atan2),
            _ => Err(SkyframeError::InvalidQuadrantConvention(s.to_string())),
        }
    }
}

impl fmt::Display for QuadrantConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadrantConvention::Legacy => write!(f, "legacy"),
            QuadrantConvention::Atan2 => write!(f, "atan2"),
        }
    }
}

/// Options of a [`Transformer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub quadrant: QuadrantConvention,
    /// Wrap right ascension, azimuth and longitudes into [0°, 360°).
    pub normalize: bool,
}

impl TransformConfig {
    pub fn new(quadrant: QuadrantConvention, normalize: bool) -> Self {
        TransformConfig {
            quadrant,
            normalize,
        }
    }

    /// Parse a configuration from JSON. Missing fields take their default value.
    ///
    /// Arguments
    /// ---------
    /// * `json`: e.g. `{ "quadrant": "atan2", "normalize": true }`.
    ///
    /// Return
    /// ------
    /// * The configuration, or [`SkyframeError::ConfigParse`] on malformed input
    ///   or an unknown quadrant convention.
    pub fn from_json(json: &str) -> Result<Self, SkyframeError> {
        match serde_json::from_str::<TransformConfig>(json) {
            Ok(config) => {
                debug!("Parsed transform configuration: {config:?}");
                Ok(config)
            }
            Err(err) => {
                debug!("Invalid transform configuration: {err}");
                Err(SkyframeError::from(err))
            }
        }
    }
}

/// Coordinate transforms bound to an Earth model and a configuration.
#[derive(Debug, Clone)]
pub struct Transformer<M: EarthModel = Iau1980> {
    model: M,
    config: TransformConfig,
}

impl Transformer<Iau1980> {
    /// Transformer using the IAU 1980 nutation and IAU 1982 sidereal time.
    pub fn new(config: TransformConfig) -> Self {
        Self::with_model(Iau1980, config)
    }
}

impl Default for Transformer<Iau1980> {
    fn default() -> Self {
        Self::new(TransformConfig::default())
    }
}

impl<M: EarthModel> Transformer<M> {
    pub fn with_model(model: M, config: TransformConfig) -> Self {
        debug!(
            "Building transformer: quadrant = {}, normalize = {}",
            config.quadrant, config.normalize
        );
        Transformer { model, config }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    fn is_legacy(&self) -> bool {
        self.config.quadrant == QuadrantConvention::Legacy
    }

    /// Heliocentric → geocentric rectangular. Not affected by the configuration.
    pub fn geocentric_from_heliocentric(
        &self,
        object: &HeliocentricPosition,
        jd: JulianDay,
    ) -> GeocentricPosition {
        transform::get_geocentric_from_heliocentric(object, jd, &self.model)
    }

    pub fn horizontal_from_equatorial(
        &self,
        object: &EquatorialPosition,
        observer: &ObserverPosition,
        jd: JulianDay,
    ) -> HorizontalPosition {
        let hrz = if self.is_legacy() {
            transform::get_horizontal_from_equatorial(object, observer, jd, &self.model)
        } else {
            quadrant::get_horizontal_from_equatorial_atan2(object, observer, jd, &self.model)
        };

        if self.config.normalize {
            hrz.normalized()
        } else {
            hrz
        }
    }

    pub fn equatorial_from_horizontal(
        &self,
        object: &HorizontalPosition,
        observer: &ObserverPosition,
        jd: JulianDay,
    ) -> EquatorialPosition {
        let equ = if self.is_legacy() {
            transform::get_equatorial_from_horizontal(object, observer, jd, &self.model)
        } else {
            quadrant::get_equatorial_from_horizontal_atan2(object, observer, jd, &self.model)
        };
        self.finish_equatorial(equ)
    }

    pub fn equatorial_from_ecliptical(
        &self,
        object: &EclipticalPosition,
        jd: JulianDay,
    ) -> EquatorialPosition {
        let equ = if self.is_legacy() {
            transform::get_equatorial_from_ecliptical(object, jd, &self.model)
        } else {
            quadrant::get_equatorial_from_ecliptical_atan2(object, jd, &self.model)
        };
        self.finish_equatorial(equ)
    }

    pub fn ecliptical_from_equatorial(
        &self,
        object: &EquatorialPosition,
        jd: JulianDay,
    ) -> EclipticalPosition {
        let ecl = if self.is_legacy() {
            transform::get_ecliptical_from_equatorial(object, jd, &self.model)
        } else {
            quadrant::get_ecliptical_from_equatorial_atan2(object, jd, &self.model)
        };

        if self.config.normalize {
            ecl.normalized()
        } else {
            ecl
        }
    }

    /// B1950.0 equatorial → galactic. Always quadrant-resolved and wrapped.
    pub fn galactic_from_equatorial(&self, object: &EquatorialPosition) -> GalacticPosition {
        get_galactic_from_equatorial(object)
    }

    /// Galactic → B1950.0 equatorial. Always quadrant-resolved and wrapped.
    pub fn equatorial_from_galactic(&self, object: &GalacticPosition) -> EquatorialPosition {
        get_equatorial_from_galactic(object)
    }

    fn finish_equatorial(&self, equ: EquatorialPosition) -> EquatorialPosition {
        if self.config.normalize {
            equ.normalized()
        } else {
            equ
        }
    }
}

#[cfg(test)]
mod transformer_test {
    use super::*;
    use crate::earth_model::FixedEarthModel;
    use approx::assert_abs_diff_eq;

    const OBLIQUITY: f64 = 23.4392911;

    #[test]
    fn test_quadrant_convention_from_str() {
        let legacy = "legacy".parse::<QuadrantConvention>();
        assert_eq!(legacy, Ok(QuadrantConvention::Legacy));

        let atan2 = "ATAN2".parse::<QuadrantConvention>();
        assert_eq!(atan2, Ok(QuadrantConvention::Atan2));

        assert_eq!(
            "atan".parse::<QuadrantConvention>(),
            Err(SkyframeError::InvalidQuadrantConvention("atan".into()))
        );
        assert_eq!(QuadrantConvention::Atan2.to_string(), "atan2");
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{"quadrant":"atan2","normalize":true}"#;
        let config = TransformConfig::from_json(json).unwrap();
        assert_eq!(config.quadrant, QuadrantConvention::Atan2);
        assert!(config.normalize);

        let config = TransformConfig::from_json("{}").unwrap();
        assert_eq!(config, TransformConfig::default());

        let config = TransformConfig::from_json(r#"{"normalize":true}"#).unwrap();
        assert_eq!(config.quadrant, QuadrantConvention::Legacy);
        assert!(config.normalize);
    }

    #[test]
    fn test_config_from_json_errors() {
        let err = TransformConfig::from_json(r#"{"quadrant":"sideways"}"#).unwrap_err();
        assert!(matches!(err, SkyframeError::ConfigParse(_)));

        let err = TransformConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, SkyframeError::ConfigParse(_)));
    }

    #[test]
    fn test_config_serialization() {
        let config = TransformConfig::new(QuadrantConvention::Atan2, false);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"quadrant":"atan2","normalize":false}"#);
    }

    #[test]
    fn test_default_transformer_matches_free_functions() {
        let transformer = Transformer::default();
        let jd = 2446895.5;
        let object = EquatorialPosition::new(250.0, -20.0);
        let observer = ObserverPosition::new(-77.065, 38.921);

        assert_eq!(
            transformer.ecliptical_from_equatorial(&object, jd),
            transform::get_ecliptical_from_equatorial(&object, jd, &Iau1980)
        );
        assert_eq!(
            transformer.horizontal_from_equatorial(&object, &observer, jd),
            transform::get_horizontal_from_equatorial(&object, &observer, jd, &Iau1980)
        );
    }

    #[test]
    fn test_atan2_dispatch() {
        let model = FixedEarthModel::new(OBLIQUITY, 0.0);
        let config = TransformConfig::new(QuadrantConvention::Atan2, false);
        let transformer = Transformer::with_model(model, config);

        let object = EquatorialPosition::new(250.0, -20.0);
        assert_eq!(
            transformer.ecliptical_from_equatorial(&object, 0.0),
            quadrant::get_ecliptical_from_equatorial_atan2(&object, 0.0, &model)
        );
    }

    #[test]
    fn test_normalized_round_trip() {
        let model = FixedEarthModel::new(OBLIQUITY, 0.0);
        let config = TransformConfig::new(QuadrantConvention::Atan2, true);
        let transformer = Transformer::with_model(model, config);

        let object = EquatorialPosition::new(250.0, -20.0);
        let ecl = transformer.ecliptical_from_equatorial(&object, 0.0);
        assert!((180.0..360.0).contains(&ecl.lng));

        let back = transformer.equatorial_from_ecliptical(&ecl, 0.0);
        assert_abs_diff_eq!(back.ra, object.ra, epsilon = 1e-9);
        assert_abs_diff_eq!(back.dec, object.dec, epsilon = 1e-9);
    }

    #[test]
    fn test_normalized_horizontal() {
        let model = FixedEarthModel::new(OBLIQUITY, 0.0);
        let config = TransformConfig::new(QuadrantConvention::Legacy, true);
        let transformer = Transformer::with_model(model, config);

        let object = EquatorialPosition::new(-10.0, 80.0);
        let observer = ObserverPosition::new(0.0, 20.0);
        let hrz = transformer.horizontal_from_equatorial(&object, &observer, 0.0);
        assert!((0.0..360.0).contains(&hrz.az));

        let equ = transformer.equatorial_from_horizontal(&hrz, &observer, 0.0);
        assert!((0.0..360.0).contains(&equ.ra));
    }

    #[test]
    fn test_galactic_passthrough() {
        let transformer = Transformer::default();
        let object = EquatorialPosition::new(267.2489166666667, -14.718944444444444);

        let gal = transformer.galactic_from_equatorial(&object);
        assert_eq!(gal, get_galactic_from_equatorial(&object));

        let back = transformer.equatorial_from_galactic(&gal);
        assert_eq!(back, get_equatorial_from_galactic(&gal));
    }
}
