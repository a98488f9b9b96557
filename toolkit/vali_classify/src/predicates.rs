//! The classifier and its derived predicates.

use vali_host::HostCaps;
use vali_value::Value;

use crate::shape::Shape;

/// Categorize a value into exactly one [`Shape`].
///
/// Fixed precedence, first match wins:
/// 1. undefined / null / bool short-circuit before any container probing,
/// 2. string and number primitives,
/// 3. genuine sequences,
/// 4. mappings — only when the environment supports the mapping type,
/// 5. uniqueness sets — same capability guard,
/// 6. callables (classic pre-class-syntax callables included),
/// 7. generic keyed records,
/// 8. unrecognized.
///
/// A mapping or set in an environment without the corresponding container
/// type falls through to [`Shape::Record`]: the value still behaves like a
/// generic keyed object, its entries are internal slots rather than own
/// enumerable properties.
///
/// Pure function of its arguments; never fails.
pub fn classify(value: &Value, caps: &HostCaps) -> Shape {
    match value {
        Value::Undefined => Shape::Undefined,
        Value::Null => Shape::Null,
        Value::Bool(_) => Shape::Bool,
        Value::Str(_) => Shape::Str,
        Value::Number(_) => Shape::Number,
        Value::List(_) => Shape::List,
        Value::Map(_) => {
            if caps.map_supported {
                Shape::Map
            } else {
                Shape::Record
            }
        }
        Value::Set(_) => {
            if caps.set_supported {
                Shape::Set
            } else {
                Shape::Record
            }
        }
        Value::Callable(_) => Shape::Callable,
        Value::Record(_) => Shape::Record,
        Value::Opaque(_) => Shape::Unrecognized,
    }
}

/// True for both nullish flavors.
#[inline]
pub fn is_undefined_or_null(value: &Value) -> bool {
    matches!(value, Value::Undefined | Value::Null)
}

/// True only for the absent-value marker.
#[inline]
pub fn is_undefined(value: &Value) -> bool {
    matches!(value, Value::Undefined)
}

/// True for any invokable value.
#[inline]
pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Callable(_))
}

/// True only if `value` is invokable and its prototype's `constructor`
/// refers back to the value itself.
///
/// Under the legacy-engine quirk ([`HostCaps::misreports_experimental_callables`]),
/// "invokable" alone is not a sufficient signal — the value must additionally
/// pass as a generic object, i.e. carry at least one own enumerable property.
pub fn is_class_definition(value: &Value, caps: &HostCaps) -> bool {
    let Value::Callable(callable) = value else {
        return false;
    };
    if caps.misreports_experimental_callables() && !callable.has_own_properties() {
        return false;
    }
    callable.constructor_links_back()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use vali_value::{CallError, PropertyBag, Value, ValueMap, ValueSet};

    use super::*;

    fn identity(receiver: &Value, _args: &[Value]) -> Result<Value, CallError> {
        Ok(receiver.clone())
    }

    #[test]
    fn every_shape_gets_its_tag() {
        let caps = HostCaps::full();
        assert_eq!(classify(&Value::Undefined, &caps), Shape::Undefined);
        assert_eq!(classify(&Value::Null, &caps), Shape::Null);
        assert_eq!(classify(&Value::Bool(true), &caps), Shape::Bool);
        assert_eq!(classify(&Value::Number(f64::NAN), &caps), Shape::Number);
        assert_eq!(classify(&Value::string("x"), &caps), Shape::Str);
        assert_eq!(classify(&Value::list(vec![]), &caps), Shape::List);
        assert_eq!(classify(&Value::map(ValueMap::default()), &caps), Shape::Map);
        assert_eq!(classify(&Value::set(ValueSet::default()), &caps), Shape::Set);
        assert_eq!(
            classify(
                &Value::callable("f", identity, PropertyBag::default()),
                &caps
            ),
            Shape::Callable
        );
        assert_eq!(
            classify(&Value::record(PropertyBag::default()), &caps),
            Shape::Record
        );
        assert_eq!(classify(&Value::opaque("gl", 1), &caps), Shape::Unrecognized);
    }

    #[test]
    fn missing_capabilities_fall_through_to_record() {
        let caps = HostCaps::full().without_map().without_set();
        assert_eq!(
            classify(&Value::map(ValueMap::default()), &caps),
            Shape::Record
        );
        assert_eq!(
            classify(&Value::set(ValueSet::default()), &caps),
            Shape::Record
        );
        // Unrelated shapes are unaffected.
        assert_eq!(classify(&Value::list(vec![]), &caps), Shape::List);
    }

    #[test]
    fn nullish_predicates_distinguish_flavors() {
        assert!(is_undefined_or_null(&Value::Undefined));
        assert!(is_undefined_or_null(&Value::Null));
        assert!(is_undefined(&Value::Undefined));
        assert!(!is_undefined(&Value::Null));
        assert!(!is_undefined_or_null(&Value::Number(0.0)));
    }

    #[test]
    fn class_definition_requires_constructor_linkage() {
        let caps = HostCaps::full();
        let plain = Value::callable("f", identity, PropertyBag::default());
        assert!(is_function(&plain));
        assert!(!is_class_definition(&plain, &caps));

        let class = Value::class(
            "Widget",
            identity,
            PropertyBag::default(),
            PropertyBag::default(),
        );
        assert!(is_function(&class));
        assert!(is_class_definition(&class, &caps));

        assert!(!is_class_definition(&Value::Number(1.0), &caps));
    }

    #[test]
    fn legacy_engine_demands_object_evidence() {
        let legacy = HostCaps::full().with_engine_id("AppleWebKit/534.57.2");

        // A bare class-like callable is not trusted on the legacy engine.
        let bare = Value::class(
            "Widget",
            identity,
            PropertyBag::default(),
            PropertyBag::default(),
        );
        assert!(!is_class_definition(&bare, &legacy));

        // With own properties it passes as a generic object again.
        let mut props = PropertyBag::default();
        props.insert("version".to_string(), Value::Number(1.0));
        let stateful = Value::class("Widget", identity, props, PropertyBag::default());
        assert!(is_class_definition(&stateful, &legacy));

        // On a modern engine the bare callable is fine.
        assert!(is_class_definition(&bare, &HostCaps::full()));
    }
}
