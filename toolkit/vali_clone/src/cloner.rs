//! The recursive clone walker.

use rustc_hash::FxHashMap;

use vali_classify::{classify, Shape};
use vali_host::HostCaps;
use vali_value::{PropertyBag, Value, ValueMap, ValueSet};

use crate::errors::CloneError;
use crate::grow::with_stack_headroom;

/// Produce a structurally equivalent, fully detached copy of `value`.
///
/// Total over all runtime values: unrecognized shapes degrade to
/// `Value::Undefined` rather than failing. Never mutates its input; the
/// only side effect is allocation of the new containers.
#[tracing::instrument(level = "trace", skip_all, fields(shape = %classify(value, caps)))]
pub fn deep_clone(value: &Value, caps: &HostCaps) -> Value {
    DeepCloner::new(caps).clone_value(value)
}

/// Strict variant of [`deep_clone`]: an unrecognized shape anywhere in the
/// tree aborts the whole call with [`CloneError::UnsupportedShape`].
#[tracing::instrument(level = "trace", skip_all, fields(shape = %classify(value, caps)))]
pub fn try_deep_clone(value: &Value, caps: &HostCaps) -> Result<Value, CloneError> {
    DeepCloner::new(caps).try_clone_value(value)
}

/// One deep-clone traversal.
///
/// Holds the identity map from source allocation to produced clone for the
/// duration of a top-level call. Reusing a cloner across calls extends
/// sharing preservation across those calls; the free functions create a
/// fresh cloner per call, which matches the original algorithm.
pub struct DeepCloner<'caps> {
    caps: &'caps HostCaps,
    /// Source `ptr_id` to already-produced clone.
    seen: FxHashMap<usize, Value>,
}

impl<'caps> DeepCloner<'caps> {
    /// Create a cloner for one traversal under the given capabilities.
    pub fn new(caps: &'caps HostCaps) -> Self {
        DeepCloner {
            caps,
            seen: FxHashMap::default(),
        }
    }

    /// Clone with the faithful, silently-degrading surface.
    pub fn clone_value(&mut self, value: &Value) -> Value {
        // The walker cannot fail in degrade mode.
        self.walk(value, false).unwrap_or(Value::Undefined)
    }

    /// Clone with the strict surface. On error the cloner may hold
    /// partially built clones and should be discarded.
    pub fn try_clone_value(&mut self, value: &Value) -> Result<Value, CloneError> {
        self.walk(value, true)
    }

    fn walk(&mut self, value: &Value, strict: bool) -> Result<Value, CloneError> {
        with_stack_headroom(|| match classify(value, self.caps) {
            // Immutable primitives are returned as-is.
            Shape::Undefined | Shape::Null | Shape::Bool | Shape::Number | Shape::Str => {
                Ok(value.clone())
            }
            Shape::List => self.clone_list(value, strict),
            Shape::Map => self.clone_map(value, strict),
            Shape::Set => self.clone_set(value, strict),
            Shape::Callable => self.clone_callable(value, strict),
            Shape::Record => self.clone_record(value, strict),
            Shape::Unrecognized => {
                if strict {
                    Err(CloneError::UnsupportedShape {
                        type_name: value.type_name(),
                    })
                } else {
                    Ok(Value::Undefined)
                }
            }
        })
    }

    /// Look up an already-cloned source allocation, or register `fresh` as
    /// the clone for `source_id` before its contents are filled in. The
    /// early registration is what terminates cyclic inputs.
    fn enter(&mut self, source_id: usize, fresh: &Value) -> Option<Value> {
        if let Some(done) = self.seen.get(&source_id) {
            return Some(done.clone());
        }
        self.seen.insert(source_id, fresh.clone());
        None
    }

    fn clone_list(&mut self, value: &Value, strict: bool) -> Result<Value, CloneError> {
        let Value::List(source) = value else {
            return Ok(value.clone());
        };
        let out = Value::list(Vec::new());
        if let Some(done) = self.enter(source.ptr_id(), &out) {
            return Ok(done);
        }
        let items = {
            let guard = source.read();
            guard
                .iter()
                .map(|item| self.walk(item, strict))
                .collect::<Result<Vec<Value>, CloneError>>()?
        };
        if let Value::List(dest) = &out {
            *dest.write() = items;
        }
        Ok(out)
    }

    fn clone_map(&mut self, value: &Value, strict: bool) -> Result<Value, CloneError> {
        let Value::Map(source) = value else {
            return Ok(value.clone());
        };
        let out = Value::map(ValueMap::default());
        if let Some(done) = self.enter(source.ptr_id(), &out) {
            return Ok(done);
        }
        let mut entries = ValueMap::default();
        {
            let guard = source.read();
            for (key, val) in guard.iter() {
                // Keys clone to fresh identities, so cloned entries can never
                // collide: the source map already enforced uniqueness.
                let key = self.walk(key, strict)?;
                let val = self.walk(val, strict)?;
                entries.insert(key, val);
            }
        }
        if let Value::Map(dest) = &out {
            *dest.write() = entries;
        }
        Ok(out)
    }

    fn clone_set(&mut self, value: &Value, strict: bool) -> Result<Value, CloneError> {
        let Value::Set(source) = value else {
            return Ok(value.clone());
        };
        let out = Value::set(ValueSet::default());
        if let Some(done) = self.enter(source.ptr_id(), &out) {
            return Ok(done);
        }
        let mut members = ValueSet::default();
        {
            let guard = source.read();
            for member in guard.iter() {
                members.insert(self.walk(member, strict)?);
            }
        }
        if let Value::Set(dest) = &out {
            *dest.write() = members;
        }
        Ok(out)
    }

    /// Callable clone: a behavioral proxy. Invocation forwards to the same
    /// invoke function with receiver and arguments unchanged; the prototype
    /// is aliased, never copied; only the own-property bag is detached.
    fn clone_callable(&mut self, value: &Value, strict: bool) -> Result<Value, CloneError> {
        let Value::Callable(source) = value else {
            return Ok(value.clone());
        };
        let out = Value::Callable(source.proxy_with_props(PropertyBag::default()));
        if let Some(done) = self.enter(source.identity(), &out) {
            return Ok(done);
        }
        let mut bag = PropertyBag::default();
        {
            let guard = source.props().read();
            for (key, val) in guard.iter() {
                bag.insert(key.clone(), self.walk(val, strict)?);
            }
        }
        if let Value::Callable(dest) = &out {
            *dest.props().write() = bag;
        }
        Ok(out)
    }

    fn clone_record(&mut self, value: &Value, strict: bool) -> Result<Value, CloneError> {
        match value {
            Value::Record(source) => {
                let out = Value::record(PropertyBag::default());
                if let Some(done) = self.enter(source.ptr_id(), &out) {
                    return Ok(done);
                }
                let mut props = PropertyBag::default();
                {
                    let guard = source.read();
                    for (key, val) in guard.iter() {
                        props.insert(key.clone(), self.walk(val, strict)?);
                    }
                }
                if let Value::Record(dest) = &out {
                    *dest.write() = props;
                }
                Ok(out)
            }
            // A mapping or set classified down to the generic-object shape
            // (container type unsupported on this host): its entries live in
            // internal slots, not own enumerable properties, so the copy is
            // an empty bare record.
            Value::Map(h) => Ok(self.detached_empty_record(h.ptr_id())),
            Value::Set(h) => Ok(self.detached_empty_record(h.ptr_id())),
            _ => Ok(value.clone()),
        }
    }

    fn detached_empty_record(&mut self, source_id: usize) -> Value {
        let out = Value::record(PropertyBag::default());
        match self.enter(source_id, &out) {
            Some(done) => done,
            None => out,
        }
    }
}
