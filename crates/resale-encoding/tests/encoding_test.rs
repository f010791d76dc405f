//! Integration tests for feature encoding invariants.

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use resale_encoding::{
    AttributeSet, Category, EncoderConfig, FeatureEncoder, FeatureLayout, FeatureSchema,
    FeatureVector, FlatModel, FlatType, StoreyRange, Town, encode, storey_median,
};

fn random_attributes(rng: &mut StdRng) -> AttributeSet {
    AttributeSet::new(
        *Town::ALL.choose(rng).unwrap(),
        *FlatType::ALL.choose(rng).unwrap(),
        *FlatModel::ALL.choose(rng).unwrap(),
        rng.gen_range(30.0..=200.0),
        *StoreyRange::STANDARD.choose(rng).unwrap(),
        rng.gen_range(1960..=2025),
    )
    .unwrap()
}

fn group_sum(vector: &FeatureVector, prefix: &str) -> f64 {
    vector
        .iter()
        .filter(|(name, _)| name.starts_with(prefix))
        .map(|(_, value)| value)
        .sum()
}

#[test]
fn test_bedok_scenario() {
    let attrs = AttributeSet::parse("BEDOK", "4 ROOM", "MODEL A", 90.0, "07 TO 09", 2005).unwrap();
    let vector = encode(&attrs, &FeatureSchema::full());

    assert_relative_eq!(vector.get("flat_age").unwrap(), 20.0);
    assert_relative_eq!(vector.get("storey_median").unwrap(), 8.0);
    assert_relative_eq!(vector.get("floor_area_sqm").unwrap(), 90.0);
    assert_eq!(vector.get("town_BEDOK"), Some(1.0));
    assert_eq!(vector.get("flat_type_4 ROOM"), Some(1.0));
    assert_eq!(vector.get("flat_model_MODEL A"), Some(1.0));

    for town in Town::ALL.iter().filter(|t| **t != Town::Bedok) {
        assert_eq!(vector.get(&town.column_name()), Some(0.0), "{town}");
    }
}

#[test]
fn test_storey_median_examples() {
    assert_relative_eq!(storey_median("07 TO 09").unwrap(), 8.0);
    assert_relative_eq!(storey_median("01 TO 03").unwrap(), 2.0);
    assert!(storey_median("07-09").is_err());
}

#[test]
fn test_random_attribute_sets_keep_invariants() {
    let schema = FeatureSchema::full();
    let encoder = FeatureEncoder::new(&schema);
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..500 {
        let attrs = random_attributes(&mut rng);
        let vector = encoder.encode(&attrs);

        // Keys are exactly the schema, in schema order.
        assert_eq!(vector.names(), schema.names());

        // One hot per group.
        for prefix in [Town::PREFIX, FlatType::PREFIX, FlatModel::PREFIX] {
            assert_relative_eq!(group_sum(&vector, prefix), 1.0);
        }
        assert!(
            vector
                .iter()
                .skip(3)
                .all(|(_, value)| value == 0.0 || value == 1.0)
        );
        assert_eq!(vector.get(&attrs.town().column_name()), Some(1.0));

        let age = vector.get("flat_age").unwrap();
        assert_relative_eq!(age, f64::from(2025 - attrs.lease_commence_year()));
        assert!(age >= 0.0);

        // Pure: same input, same output.
        assert_eq!(encoder.encode(&attrs), vector);
    }
}

#[test]
fn test_reordered_schema_keeps_its_order() {
    let mut names: Vec<String> = FeatureSchema::full().names().to_vec();
    names.reverse();
    let schema = FeatureSchema::new(names.clone()).unwrap();

    let attrs = AttributeSet::parse("YISHUN", "EXECUTIVE", "APARTMENT", 145.0, "10 TO 12", 1988)
        .unwrap();
    let vector = encode(&attrs, &schema);

    assert_eq!(vector.names(), names.as_slice());
    assert_eq!(vector.values()[names.len() - 1], 145.0);
    assert_eq!(vector.get("flat_age"), Some(37.0));
}

#[test]
fn test_missing_town_column_degrades_to_zero_group() {
    // Schema trained with ANG MO KIO as the dropped baseline level.
    let names: Vec<String> = FeatureSchema::full()
        .iter()
        .filter(|name| *name != "town_ANG MO KIO")
        .map(String::from)
        .collect();
    let schema = FeatureSchema::new(names).unwrap();
    let layout = FeatureLayout::resolve(&schema);
    assert_eq!(layout.coverage().missing_towns, [Town::AngMoKio]);

    let encoder = FeatureEncoder::with_config(layout, EncoderConfig::default());
    let attrs = AttributeSet::parse("ANG MO KIO", "3 ROOM", "NEW GENERATION", 67.0, "04 TO 06", 1979)
        .unwrap();
    let vector = encoder.encode(&attrs);

    assert_relative_eq!(group_sum(&vector, Town::PREFIX), 0.0);
    assert_relative_eq!(group_sum(&vector, FlatType::PREFIX), 1.0);
    assert_relative_eq!(group_sum(&vector, FlatModel::PREFIX), 1.0);
}
