use grading::{BandId, Grade, ToneBand, grade_from_properties, grade_to_properties};
use serde_json::json;

#[test]
fn test_property_bag_roundtrip() {
    let mut grade = Grade::neutral();
    grade.band_mut(BandId::Lift).hue = 0.25;
    grade.band_mut(BandId::Lift).sat = 0.5;
    grade.band_mut(BandId::Gamma).strength = 1.8;
    grade.band_mut(BandId::Gain).luma = -0.4;

    let bag = grade_to_properties(&grade).expect("Failed to serialize grade");
    let loaded = grade_from_properties(&bag).expect("Failed to restore grade");

    assert_eq!(grade, loaded, "Roundtrip failed: grades are not equal");
}

#[test]
fn test_bag_is_keyed_by_band_name() {
    let bag = grade_to_properties(&Grade::neutral()).unwrap();
    let object = bag.as_object().expect("bag must be a JSON object");

    for id in BandId::ALL {
        let band = object
            .get(id.key())
            .unwrap_or_else(|| panic!("missing band {}", id.key()));
        assert_eq!(band["strength"], json!(1.0));
        assert_eq!(band["hue"], json!(0.0));
    }
}

#[test]
fn test_missing_bands_fall_back_to_defaults() {
    let bag = json!({
        "lift": { "hue": 0.1, "sat": 0.2, "strength": 0.5, "luma": 0.0 }
    });
    let grade = grade_from_properties(&bag).expect("partial bag must restore");

    assert_eq!(grade.lift.strength, 0.5);
    assert_eq!(*grade.band(BandId::Gamma), ToneBand::default());
    assert_eq!(*grade.band(BandId::Gain), ToneBand::default());
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let bag = json!({
        "gamma": { "sat": 0.3 }
    });
    let grade = grade_from_properties(&bag).unwrap();

    assert_eq!(grade.gamma.sat, 0.3);
    assert_eq!(grade.gamma.strength, 1.0);
    assert_eq!(grade.gamma.hue, 0.0);
}

#[test]
fn test_unknown_keys_are_ignored() {
    let bag = json!({
        "lift": { "hue": 0.5, "flavor": "cherry" },
        "offset": { "hue": 0.9 }
    });
    let grade = grade_from_properties(&bag).expect("extra keys must be tolerated");
    assert_eq!(grade.lift.hue, 0.5);
}

#[test]
fn test_out_of_range_restores_are_clamped() {
    let bag = json!({
        "lift": { "hue": 1.25, "sat": 3.0, "strength": 9.0, "luma": -5.0 },
        "gamma": { "strength": 0.0 }
    });
    let grade = grade_from_properties(&bag).unwrap();

    assert!((grade.lift.hue - 0.25).abs() < 1e-6);
    assert_eq!(grade.lift.sat, 1.0);
    assert_eq!(grade.lift.strength, 2.0);
    assert_eq!(grade.lift.luma, -1.0);
    // Gamma strength floors at 0.1, not 0.
    assert_eq!(grade.gamma.strength, 0.1);
}

#[test]
fn test_non_object_payload_is_an_error() {
    assert!(grade_from_properties(&json!([1, 2, 3])).is_err());
    assert!(grade_from_properties(&json!("lift")).is_err());
    assert!(grade_from_properties(&json!(null)).is_err());
}

#[test]
fn test_non_numeric_values_are_an_error() {
    let bag = json!({ "lift": { "hue": "red" } });
    assert!(grade_from_properties(&bag).is_err());
}
