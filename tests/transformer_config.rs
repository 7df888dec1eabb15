mod common;

use approx::assert_abs_diff_eq;
use common::{assert_horizontal_close, OBLIQUITY_J2000};
use skyframe::{
    quadrant::get_horizontal_from_equatorial_atan2, transform, EclipticalPosition,
    EquatorialPosition, FixedEarthModel, HeliocentricPosition, HorizontalPosition, Iau1980,
    ObserverPosition, QuadrantConvention, SkyframeError, TransformConfig, Transformer,
};

#[test]
fn test_default_is_legacy_bit_for_bit() {
    let transformer = Transformer::default();
    let expected = TransformConfig::new(QuadrantConvention::Legacy, false);
    assert_eq!(*transformer.config(), expected);

    let jd = 2451545.0;
    let helio = HeliocentricPosition::new(88.0, 1.5, 0.72);
    assert_eq!(
        transformer.geocentric_from_heliocentric(&helio, jd),
        transform::get_geocentric_from_heliocentric(&helio, jd, &Iau1980)
    );

    let hrz = HorizontalPosition::new(35.0, 200.0);
    let observer = ObserverPosition::new(-2.35, 48.85);
    assert_eq!(
        transformer.equatorial_from_horizontal(&hrz, &observer, jd),
        transform::get_equatorial_from_horizontal(&hrz, &observer, jd, &Iau1980)
    );

    let ecl = EclipticalPosition::new(300.0, -12.0);
    assert_eq!(
        transformer.equatorial_from_ecliptical(&ecl, jd),
        transform::get_equatorial_from_ecliptical(&ecl, jd, &Iau1980)
    );
}

#[test]
fn test_json_configured_transformer() {
    let json = r#"{ "quadrant": "atan2", "normalize": true }"#;
    let config = TransformConfig::from_json(json).unwrap();
    let model = FixedEarthModel::new(OBLIQUITY_J2000, 0.0);
    let transformer = Transformer::with_model(model, config);

    // circumpolar object north of the zenith
    let object = EquatorialPosition::new(-10.0, 80.0);
    let observer = ObserverPosition::new(0.0, 20.0);

    let hrz = transformer.horizontal_from_equatorial(&object, &observer, 0.0);
    let raw = get_horizontal_from_equatorial_atan2(&object, &observer, 0.0, &model);

    assert!((0.0..360.0).contains(&hrz.az));
    assert_horizontal_close(&hrz, &raw, 1e-12);
    assert!((90.0..270.0).contains(&hrz.az));

    let back = transformer.equatorial_from_horizontal(&hrz, &observer, 0.0);
    assert_abs_diff_eq!(back.ra, 350.0, epsilon = 1e-9);
    assert_abs_diff_eq!(back.dec, 80.0, epsilon = 1e-9);
}

#[test]
fn test_config_errors() {
    assert!(matches!(
        TransformConfig::from_json(r#"{ "quadrant": 2 }"#),
        Err(SkyframeError::ConfigParse(_))
    ));
    assert!(matches!(
        "quadrant".parse::<QuadrantConvention>(),
        Err(SkyframeError::InvalidQuadrantConvention(_))
    ));
}

#[test]
fn test_transformer_over_borrowed_model() {
    let model = FixedEarthModel::snapshot(&Iau1980, 2446895.5);
    let transformer = Transformer::with_model(&model, TransformConfig::default());

    let object = EquatorialPosition::new(116.328942, 28.026183);
    assert_eq!(
        transformer.ecliptical_from_equatorial(&object, 0.0),
        transform::get_ecliptical_from_equatorial(&object, 2446895.5, &Iau1980)
    );
}
