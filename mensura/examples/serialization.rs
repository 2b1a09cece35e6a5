//! Serialize quantities to JSON and restore them (requires the `serde` feature).

use mensura::{Length, LengthUnit};

fn main() {
    let q = Length::new(1.0, LengthUnit::Feet).unwrap();

    let json = serde_json::to_string(&q).unwrap();
    assert_eq!(json, r#"{"value":1.0,"unit":"Feet"}"#);

    let restored: Length = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, q);

    // NaN survives neither construction nor deserialization.
    let bad: Result<Length, _> = serde_json::from_str(r#"{"value":null,"unit":"Feet"}"#);
    assert!(bad.is_err());
}
