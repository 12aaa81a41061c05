use crate::{
    descriptor::tree::Descriptor,
    foundation::error::{InvalidDescriptorError, InvalidReason},
    property::key::{NodeCategory, PropertyKey},
};

/// Check that every key may be animated on a node of `category`.
///
/// Stops at the first offending key; keys are inspected in iteration order.
pub fn validate_keys<'a>(
    keys: impl IntoIterator<Item = &'a PropertyKey>,
    category: NodeCategory,
) -> Result<(), InvalidDescriptorError> {
    for key in keys {
        let reason = if !key.applies_to(category) {
            InvalidReason::NotApplicable
        } else if !key.animatable {
            InvalidReason::NotAnimatable
        } else {
            continue;
        };
        return Err(InvalidDescriptorError {
            category,
            property: *key,
            reason,
        });
    }
    Ok(())
}

/// Validate every property a descriptor animates, recursively for groups.
///
/// Keys are checked in key-path order so the reported property is stable.
pub fn validate_descriptor(
    descriptor: &Descriptor,
    category: NodeCategory,
) -> Result<(), InvalidDescriptorError> {
    validate_keys(&descriptor.property_keys(), category)
}

#[cfg(test)]
#[path = "../../tests/unit/validate/validator.rs"]
mod tests;
