//! Callable values carrying their own attached state.
//!
//! Loosely-typed hosts let a function double as a namespace or a class
//! definition: the callable has behavior *and* an own-property bag. There is
//! no implicit equivalent in Rust, so `CallableValue` models the pattern
//! explicitly as a struct holding (a) an invoke function, (b) a keyed
//! property bag, and (c) an optional shared prototype record.
//!
//! Cloning a callable produces a *behavioral proxy*: the copy forwards
//! invocation to the same invoke function (receiver and arguments unchanged)
//! and aliases the same prototype, but owns a detached property bag. See
//! [`CallableValue::proxy_with_props`].

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::heap::Heap;
use crate::value::{PropertyBag, Value};

/// Invocation signature: dynamic receiver plus positional arguments.
pub type CallFn = Arc<dyn Fn(&Value, &[Value]) -> Result<Value, CallError> + Send + Sync>;

/// Error raised by invoking a callable value.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CallError {
    /// The callable was invoked with the wrong number of arguments.
    #[error("wrong argument count: expected {expected}, got {got}")]
    WrongArgCount { expected: usize, got: usize },
    /// The callable rejected its receiver or arguments.
    #[error("{0}")]
    Message(String),
}

impl CallError {
    /// Build a free-form invocation error.
    pub fn message(msg: impl Into<String>) -> Self {
        CallError::Message(msg.into())
    }
}

/// A callable unit of behavior with an own-property bag.
#[derive(Clone)]
pub struct CallableValue {
    /// Invocation target, shared between a callable and all of its proxies.
    call: CallFn,
    /// Diagnostic label.
    name: &'static str,
    /// Own enumerable properties (insertion-ordered).
    props: Heap<PropertyBag>,
    /// Shared prototype record. Prototypes are library code, not data:
    /// clones alias this allocation, they never copy it.
    prototype: Option<Heap<PropertyBag>>,
}

impl CallableValue {
    pub(crate) fn new(
        name: &'static str,
        call: CallFn,
        props: PropertyBag,
        prototype: Option<Heap<PropertyBag>>,
    ) -> Self {
        CallableValue {
            call,
            name,
            props: Heap::new(props),
            prototype,
        }
    }

    /// Invoke the callable, forwarding the receiver and arguments unchanged.
    pub fn invoke(&self, receiver: &Value, args: &[Value]) -> Result<Value, CallError> {
        (self.call)(receiver, args)
    }

    /// Diagnostic label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Own enumerable property storage.
    pub fn props(&self) -> &Heap<PropertyBag> {
        &self.props
    }

    /// Shared prototype record, if any.
    pub fn prototype(&self) -> Option<&Heap<PropertyBag>> {
        self.prototype.as_ref()
    }

    /// Read one own property (cloned out of the bag).
    pub fn get_prop(&self, key: &str) -> Option<Value> {
        self.props.read().get(key).cloned()
    }

    /// Set one own property.
    pub fn set_prop(&self, key: impl Into<String>, value: Value) {
        self.props.write().insert(key.into(), value);
    }

    /// Whether the callable carries any own enumerable properties.
    pub fn has_own_properties(&self) -> bool {
        !self.props.read().is_empty()
    }

    /// Identity of this callable: the allocation of its own property bag.
    ///
    /// Every construction (including a proxy) allocates a fresh bag, so this
    /// distinguishes a callable from its clones while `call` stays shared.
    pub fn identity(&self) -> usize {
        self.props.ptr_id()
    }

    /// Whether `prototype.constructor` refers back to this callable.
    ///
    /// This is the class-definition linkage: a proxy clone shares the
    /// prototype but has its own identity, so the linkage holds only for the
    /// callable the prototype was wired to.
    pub fn constructor_links_back(&self) -> bool {
        let Some(proto) = &self.prototype else {
            return false;
        };
        match proto.read().get("constructor") {
            Some(Value::Callable(c)) => c.props.ptr_eq(&self.props),
            _ => false,
        }
    }

    /// Build a behavioral proxy: same invoke function, same shared prototype,
    /// the given (freshly allocated) property bag.
    pub fn proxy_with_props(&self, props: PropertyBag) -> CallableValue {
        CallableValue {
            call: Arc::clone(&self.call),
            name: self.name,
            props: Heap::new(props),
            prototype: self.prototype.clone(),
        }
    }
}

impl fmt::Debug for CallableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallableValue")
            .field("name", &self.name)
            .field("props", &format!("{} properties", self.props.read().len()))
            .field("has_prototype", &self.prototype.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn increment(_receiver: &Value, args: &[Value]) -> Result<Value, CallError> {
        match args {
            [Value::Number(n)] => Ok(Value::Number(n + 1.0)),
            _ => Err(CallError::WrongArgCount {
                expected: 1,
                got: args.len(),
            }),
        }
    }

    #[test]
    fn invoke_forwards_arguments() {
        let f = Value::callable("increment", increment, PropertyBag::default());
        let Value::Callable(c) = &f else {
            panic!("expected callable");
        };
        assert_eq!(
            c.invoke(&Value::Undefined, &[Value::Number(5.0)]),
            Ok(Value::Number(6.0))
        );
        assert_eq!(
            c.invoke(&Value::Undefined, &[]),
            Err(CallError::WrongArgCount {
                expected: 1,
                got: 0
            })
        );
    }

    #[test]
    fn proxy_shares_invoke_but_not_props() {
        let f = Value::callable("increment", increment, PropertyBag::default());
        let Value::Callable(c) = &f else {
            panic!("expected callable");
        };
        c.set_prop("tag", Value::string("x"));

        let proxy = c.proxy_with_props(c.props.read().clone());
        assert_ne!(proxy.identity(), c.identity());
        proxy.set_prop("tag", Value::string("y"));

        assert_eq!(c.get_prop("tag"), Some(Value::string("x")));
        assert_eq!(
            proxy.invoke(&Value::Undefined, &[Value::Number(1.0)]),
            Ok(Value::Number(2.0))
        );
    }

    #[test]
    fn class_factory_wires_constructor_linkage() {
        let class = Value::class(
            "Widget",
            increment,
            PropertyBag::default(),
            PropertyBag::default(),
        );
        let Value::Callable(c) = &class else {
            panic!("expected callable");
        };
        assert!(c.constructor_links_back());

        // A proxy shares the prototype but is not the constructor.
        let proxy = c.proxy_with_props(PropertyBag::default());
        assert!(!proxy.constructor_links_back());
    }
}
