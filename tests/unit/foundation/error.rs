use super::*;
use crate::property::catalog;

#[test]
fn json_errors_become_serde_errors() {
    let parse = serde_json::from_str::<crate::animation::timing::AuxiliaryProperty>(
        r#"{"name":"warp","value":1.0}"#,
    )
    .unwrap_err();

    let err = CadenceError::from(parse);
    assert!(matches!(err, CadenceError::Serde(_)));
    assert!(err.to_string().starts_with("serialization error:"));
    assert!(err.as_invalid_descriptor().is_none());
}

#[test]
fn invalid_descriptor_names_property_and_category() {
    let err = InvalidDescriptorError {
        category: NodeCategory::Generic,
        property: catalog::FILL_COLOR.key(),
        reason: InvalidReason::NotApplicable,
    };
    assert_eq!(
        err.to_string(),
        "fillColor (Color) is not a generic node property"
    );

    let top = CadenceError::from(err.clone());
    assert_eq!(top.to_string(), err.to_string());
    assert_eq!(top.as_invalid_descriptor(), Some(&err));
}

#[test]
fn not_animatable_reason_has_its_own_message() {
    let err = InvalidDescriptorError {
        category: NodeCategory::Shape,
        property: catalog::HIDDEN.key(),
        reason: InvalidReason::NotAnimatable,
    };
    assert!(err.to_string().contains("is not animatable on a shape node"));
}
