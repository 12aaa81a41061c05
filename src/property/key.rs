use std::{fmt, marker::PhantomData};

use crate::property::value::{PropertyValue, RawValue};

/// Classification of a render-tree node.
///
/// Specialised nodes inherit every generic property, so a property legal on
/// [`NodeCategory::Generic`] is legal everywhere.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum NodeCategory {
    /// Plain node.
    Generic,
    /// Vector shape node.
    Shape,
    /// Particle emitter node.
    Emitter,
    /// Gradient node.
    Gradient,
    /// Replicator node.
    Replicator,
    /// Text node.
    Text,
}

impl NodeCategory {
    /// Every category, in declaration order.
    pub const ALL: [NodeCategory; 6] = [
        Self::Generic,
        Self::Shape,
        Self::Emitter,
        Self::Gradient,
        Self::Replicator,
        Self::Text,
    ];

    /// The single-bit set for this category.
    pub const fn as_set(self) -> NodeCategories {
        match self {
            Self::Generic => NodeCategories::GENERIC,
            Self::Shape => NodeCategories::SHAPE,
            Self::Emitter => NodeCategories::EMITTER,
            Self::Gradient => NodeCategories::GRADIENT,
            Self::Replicator => NodeCategories::REPLICATOR,
            Self::Text => NodeCategories::TEXT,
        }
    }

    /// Lowercase human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Shape => "shape",
            Self::Emitter => "emitter",
            Self::Gradient => "gradient",
            Self::Replicator => "replicator",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// Set of node categories a property may be animated on.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[derive(serde::Serialize, serde::Deserialize)]
    pub struct NodeCategories: u8 {
        /// Plain nodes.
        const GENERIC = 1 << 0;
        /// Shape nodes.
        const SHAPE = 1 << 1;
        /// Emitter nodes.
        const EMITTER = 1 << 2;
        /// Gradient nodes.
        const GRADIENT = 1 << 3;
        /// Replicator nodes.
        const REPLICATOR = 1 << 4;
        /// Text nodes.
        const TEXT = 1 << 5;
    }
}

impl NodeCategories {
    /// Does this set admit `category`?
    pub const fn admits(self, category: NodeCategory) -> bool {
        self.contains(category.as_set())
    }
}

/// Type-erased identity of an animatable property.
///
/// This is what descriptors carry around and what validation inspects; the
/// typed [`Property`] exists only at construction sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct PropertyKey {
    /// Key path understood by the animation engine.
    pub key_path: &'static str,
    /// Name of the value representation (for diagnostics).
    pub value_kind: &'static str,
    /// Whether the engine can interpolate this property at all.
    pub animatable: bool,
    /// Node categories this property is legal on.
    pub categories: NodeCategories,
}

impl PropertyKey {
    /// Is this property legal on `category`?
    pub const fn applies_to(&self, category: NodeCategory) -> bool {
        self.categories.admits(category)
    }
}

impl PartialOrd for PropertyKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PropertyKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key_path
            .cmp(other.key_path)
            .then_with(|| self.value_kind.cmp(other.value_kind))
            .then_with(|| self.animatable.cmp(&other.animatable))
            .then_with(|| self.categories.cmp(&other.categories))
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key_path, self.value_kind)
    }
}

/// A typed animatable property.
///
/// `T` fixes the value type accepted by descriptor factories, while the
/// wrapped [`PropertyKey`] is what survives into heterogeneous groups.
pub struct Property<T> {
    key: PropertyKey,
    _value: PhantomData<fn() -> T>,
}

impl<T: PropertyValue> Property<T> {
    /// Declare an animatable property legal on `categories`.
    pub const fn new(key_path: &'static str, categories: NodeCategories) -> Self {
        Self {
            key: PropertyKey {
                key_path,
                value_kind: T::KIND,
                animatable: true,
                categories,
            },
            _value: PhantomData,
        }
    }

    /// Declare a property the engine cannot interpolate.
    pub const fn non_animatable(key_path: &'static str, categories: NodeCategories) -> Self {
        let mut property = Self::new(key_path, categories);
        property.key.animatable = false;
        property
    }

    /// Type-erased key.
    pub const fn key(&self) -> PropertyKey {
        self.key
    }

    /// Engine key path.
    pub const fn key_path(&self) -> &'static str {
        self.key.key_path
    }

    /// Convert a typed value into the engine representation.
    pub fn encode(&self, value: T) -> RawValue {
        value.encode()
    }

    /// Convert an engine value back, if it has the expected shape.
    pub fn decode(&self, raw: &RawValue) -> Option<T> {
        T::decode(raw)
    }
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Property<T> {}

impl<T> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.key).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/property/key.rs"]
mod tests;
