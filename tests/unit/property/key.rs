use super::*;
use crate::foundation::core::Color;

const FILL: Property<Color> = Property::new("fillColor", NodeCategories::SHAPE);
const HIDDEN: Property<bool> = Property::non_animatable("hidden", NodeCategories::all());

#[test]
fn categories_admit_only_members() {
    let set = NodeCategories::SHAPE | NodeCategories::TEXT;
    assert!(set.admits(NodeCategory::Shape));
    assert!(set.admits(NodeCategory::Text));
    assert!(!set.admits(NodeCategory::Generic));
}

#[test]
fn every_category_has_a_distinct_bit() {
    let mut seen = NodeCategories::empty();
    for c in NodeCategory::ALL {
        assert!(!seen.intersects(c.as_set()));
        seen |= c.as_set();
    }
    assert_eq!(seen, NodeCategories::all());
}

#[test]
fn property_key_carries_kind_and_flags() {
    let key = FILL.key();
    assert_eq!(key.key_path, "fillColor");
    assert_eq!(key.value_kind, "Color");
    assert!(key.animatable);
    assert!(key.applies_to(NodeCategory::Shape));
    assert!(!key.applies_to(NodeCategory::Generic));

    assert!(!HIDDEN.key().animatable);
}

#[test]
fn property_roundtrips_through_raw_value() {
    let raw = FILL.encode(Color::WHITE);
    assert_eq!(FILL.decode(&raw), Some(Color::WHITE));
}

#[test]
fn display_names_key_path_and_kind() {
    assert_eq!(FILL.key().to_string(), "fillColor (Color)");
    assert_eq!(NodeCategory::Replicator.to_string(), "replicator");
}
