//! The shape tag: one category per recognizable runtime value kind.

/// Runtime category of a value, as determined by [`classify`](crate::classify).
///
/// Shapes are not mutually exclusive in a dynamically typed host (a mapping
/// is also a generic object); the classifier's fixed precedence picks the
/// single most specific tag.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum Shape {
    /// The absent-value marker.
    Undefined,
    /// The explicitly-empty marker.
    Null,
    /// Two-valued logic primitive.
    Bool,
    /// Numeric primitive (NaN and the infinities included).
    Number,
    /// Immutable text primitive.
    Str,
    /// Index-ordered, length-bearing sequence.
    List,
    /// Insertion-ordered mapping with keys of any shape.
    Map,
    /// Insertion-ordered uniqueness set.
    Set,
    /// Callable carrying its own attached state.
    Callable,
    /// Plain keyed record of own enumerable properties.
    Record,
    /// None of the above (opaque host handles).
    Unrecognized,
}

impl Shape {
    /// Whether values of this shape are returned from a deep clone as-is.
    #[inline]
    pub const fn is_primitive(self) -> bool {
        matches!(
            self,
            Shape::Undefined | Shape::Null | Shape::Bool | Shape::Number | Shape::Str
        )
    }

    /// Whether values of this shape own recursively cloned storage.
    #[inline]
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Shape::List | Shape::Map | Shape::Set | Shape::Callable | Shape::Record
        )
    }

    /// Get a human-readable name for this shape.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Undefined => "undefined",
            Shape::Null => "null",
            Shape::Bool => "bool",
            Shape::Number => "number",
            Shape::Str => "string",
            Shape::List => "list",
            Shape::Map => "map",
            Shape::Set => "set",
            Shape::Callable => "callable",
            Shape::Record => "record",
            Shape::Unrecognized => "unrecognized",
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_and_container_partition() {
        for shape in [
            Shape::Undefined,
            Shape::Null,
            Shape::Bool,
            Shape::Number,
            Shape::Str,
        ] {
            assert!(shape.is_primitive());
            assert!(!shape.is_container());
        }
        for shape in [
            Shape::List,
            Shape::Map,
            Shape::Set,
            Shape::Callable,
            Shape::Record,
        ] {
            assert!(shape.is_container());
            assert!(!shape.is_primitive());
        }
        assert!(!Shape::Unrecognized.is_primitive());
        assert!(!Shape::Unrecognized.is_container());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Shape::Map.to_string(), "map");
        assert_eq!(Shape::Unrecognized.to_string(), "unrecognized");
    }
}
