//! The `Value` sum type: one variant per runtime shape.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

use crate::callable::{CallError, CallableValue};
use crate::heap::Heap;

/// Insertion-ordered bag of string-named properties.
pub type PropertyBag = IndexMap<String, Value, FxBuildHasher>;

/// Insertion-ordered mapping with keys of any value shape.
pub type ValueMap = IndexMap<Value, Value, FxBuildHasher>;

/// Insertion-ordered set of unique values.
pub type ValueSet = IndexSet<Value, FxBuildHasher>;

/// An opaque host handle the toolkit does not recognize.
///
/// Stands in for engine objects (GPU contexts and the like) that are passed
/// through the value layer but are never cloned or inspected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OpaqueValue {
    /// Host-side description of the handle.
    pub label: &'static str,
    /// Host-side handle id.
    pub handle: u64,
}

/// Runtime value in the Vali toolkit.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline, no heap allocation)
    /// The absent-value marker.
    Undefined,
    /// The explicitly-empty marker.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value (NaN and the infinities included).
    Number(f64),

    // Heap shapes (all allocation goes through `Value::` factories)
    /// Immutable text.
    Str(Heap<String>),
    /// Index-ordered, heterogeneous sequence.
    List(Heap<Vec<Value>>),
    /// Insertion-ordered mapping; keys may be of any shape.
    Map(Heap<ValueMap>),
    /// Insertion-ordered uniqueness set.
    Set(Heap<ValueSet>),
    /// Callable carrying an own-property bag.
    Callable(CallableValue),
    /// Plain keyed record: own enumerable string-named properties only.
    Record(Heap<PropertyBag>),

    /// Unrecognized host handle.
    Opaque(OpaqueValue),
}

// Factory methods (the ONLY way to construct heap shapes)

impl Value {
    /// Create a numeric value.
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a sequence value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a mapping value. Insertion order of `entries` is the
    /// iteration order of the map.
    #[inline]
    pub fn map(entries: ValueMap) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Create a set value. Insertion order of `members` is the iteration
    /// order of the set.
    #[inline]
    pub fn set(members: ValueSet) -> Self {
        Value::Set(Heap::new(members))
    }

    /// Create a plain keyed record.
    #[inline]
    pub fn record(props: PropertyBag) -> Self {
        Value::Record(Heap::new(props))
    }

    /// Create a callable value with an own-property bag and no prototype.
    pub fn callable<F>(name: &'static str, call: F, props: PropertyBag) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        Value::Callable(CallableValue::new(name, Arc::new(call), props, None))
    }

    /// Create a class definition: a callable whose prototype's `constructor`
    /// slot is wired back to the callable itself.
    ///
    /// The prototype and the callable form a reference cycle by construction.
    /// Prototypes are shared library objects with program lifetime, so the
    /// cycle is never collected and never walked by the deep cloner.
    pub fn class<F>(
        name: &'static str,
        call: F,
        props: PropertyBag,
        prototype: PropertyBag,
    ) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, CallError> + Send + Sync + 'static,
    {
        let proto = Heap::new(prototype);
        let callable = CallableValue::new(name, Arc::new(call), props, Some(proto.clone()));
        let value = Value::Callable(callable);
        proto.write().insert("constructor".to_string(), value.clone());
        value
    }

    /// Wrap an opaque host handle.
    #[inline]
    pub fn opaque(label: &'static str, handle: u64) -> Self {
        Value::Opaque(OpaqueValue { label, handle })
    }
}

// Accessors

impl Value {
    /// Check if this value is truthy under host semantics.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.read().is_empty(),
            _ => true,
        }
    }

    /// Try to read a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to read a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to read text content (cloned out of shared storage).
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::Str(s) => Some(s.read().clone()),
            _ => None,
        }
    }

    /// Run `f` over the sequence elements, if this is a sequence.
    pub fn with_list<R>(&self, f: impl FnOnce(&[Value]) -> R) -> Option<R> {
        match self {
            Value::List(items) => Some(f(&items.read())),
            _ => None,
        }
    }

    /// Get the shape name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Set(_) => "set",
            Value::Callable(_) => "callable",
            Value::Record(_) => "record",
            Value::Opaque(_) => "opaque",
        }
    }
}

// Identity and structural equality

/// Host identity equality for numbers: NaN equals NaN, signed zeros are equal.
#[expect(
    clippy::float_cmp,
    reason = "identity semantics compare exact numeric values"
)]
fn same_value_zero(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Canonical bit pattern for hashing a number consistently with
/// [`same_value_zero`]: all NaNs collapse to one pattern, -0.0 to +0.0.
fn canonical_number_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0.0_f64.to_bits()
    } else {
        n.to_bits()
    }
}

impl PartialEq for Value {
    /// Host identity semantics: primitives by value, heap shapes by
    /// allocation identity. This is the key equality `Map` and `Set` use,
    /// so two distinct-but-deep-equal records are two distinct keys.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => same_value_zero(*a, *b),
            (Value::Str(a), Value::Str(b)) => a.ptr_eq(b) || *a.read() == *b.read(),
            (Value::List(a), Value::List(b)) => a.ptr_eq(b),
            (Value::Map(a), Value::Map(b)) => a.ptr_eq(b),
            (Value::Set(a), Value::Set(b)) => a.ptr_eq(b),
            (Value::Record(a), Value::Record(b)) => a.ptr_eq(b),
            (Value::Callable(a), Value::Callable(b)) => a.identity() == b.identity(),
            (Value::Opaque(a), Value::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Undefined | Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Number(n) => canonical_number_bits(*n).hash(state),
            Value::Str(s) => s.read().hash(state),
            Value::List(h) => h.ptr_id().hash(state),
            Value::Map(h) => h.ptr_id().hash(state),
            Value::Set(h) => h.ptr_id().hash(state),
            Value::Record(h) => h.ptr_id().hash(state),
            Value::Callable(c) => c.identity().hash(state),
            Value::Opaque(o) => o.hash(state),
        }
    }
}

impl Value {
    /// Check structural equality with another value.
    ///
    /// Containers compare element-wise in iteration order; callables compare
    /// by identity (behavior has no structural representation). Used for
    /// diagnostics and tests; key lookup uses identity equality instead.
    pub fn deep_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => *a.read() == *b.read(),
            (Value::List(a), Value::List(b)) => {
                let (a, b) = (a.read(), b.read());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.deep_equals(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                let (a, b) = (a.read(), b.read());
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka.deep_equals(kb) && va.deep_equals(vb))
            }
            (Value::Set(a), Value::Set(b)) => {
                let (a, b) = (a.read(), b.read());
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.deep_equals(y))
            }
            (Value::Record(a), Value::Record(b)) => {
                let (a, b) = (a.read(), b.read());
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va.deep_equals(vb))
            }
            _ => self == other,
        }
    }
}

// Rendering

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{}\"", &*s.read()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.read().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(map) => {
                write!(f, "Map {{")?;
                for (i, (k, v)) in map.read().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k} => {v}")?;
                }
                write!(f, "}}")
            }
            Value::Set(set) => {
                write!(f, "Set {{")?;
                for (i, member) in set.read().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{member}")?;
                }
                write!(f, "}}")
            }
            Value::Callable(c) => write!(f, "<callable {}>", c.name()),
            Value::Record(props) => {
                write!(f, "{{")?;
                for (i, (k, v)) in props.read().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Opaque(o) => write!(f, "<opaque {}#{}>", o.label, o.handle),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Number(n) => write!(f, "Number({n})"),
            Value::Str(s) => write!(f, "Str({:?})", &*s.read()),
            Value::List(h) => write!(f, "List({h:?})"),
            Value::Map(h) => write!(f, "Map({h:?})"),
            Value::Set(h) => write!(f, "Set({h:?})"),
            Value::Callable(c) => write!(f, "Callable({c:?})"),
            Value::Record(h) => write!(f, "Record({h:?})"),
            Value::Opaque(o) => write!(f, "Opaque({}#{})", o.label, o.handle),
        }
    }
}
