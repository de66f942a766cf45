#![cfg(feature = "serde")]

use birthday_core::{generate_distribution, OccupancyHistogram, OccupancyTier, Seed, SeededRandomStream};

#[test]
fn histogram_serializes_as_plain_array() {
    let mut stream = SeededRandomStream::new(1234);
    let histogram = generate_distribution(5, 1, &mut stream).unwrap();
    let json = serde_json::to_string(&histogram).unwrap();
    assert_eq!(json, "[5]");

    let back: OccupancyHistogram = serde_json::from_str(&json).unwrap();
    assert_eq!(back, histogram);
}

#[test]
fn seed_and_tier_use_compact_forms() {
    assert_eq!(serde_json::to_string(&Seed(1234)).unwrap(), "1234");
    assert_eq!(
        serde_json::to_string(&OccupancyTier::Saturated).unwrap(),
        "\"saturated\""
    );
}

#[test]
fn empty_histogram_is_rejected_on_deserialize() {
    assert!(serde_json::from_str::<OccupancyHistogram>("[]").is_err());
}
