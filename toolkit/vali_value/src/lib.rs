//! Runtime values for the Vali toolkit.
//!
//! # Heap Enforcement Architecture
//!
//! This crate enforces that all heap allocations go through factory methods
//! on `Value`. The `Heap<T>` wrapper type has a crate-private constructor, so
//! external code cannot create heap values directly.
//!
//! ## Correct Usage
//!
//! ```text
//! let s = Value::string("hello");                 // OK
//! let list = Value::list(vec![]);                 // OK
//! let rec = Value::record(PropertyBag::default()); // OK
//! ```
//!
//! ## Prevented (Won't Compile)
//!
//! ```text
//! let s = Value::Str(Heap::new(...));     // ERROR: Heap::new is pub(crate)
//! let l = Value::List(Arc::new(...));     // ERROR: Expected Heap, got Arc
//! ```
//!
//! # Reference Semantics
//!
//! `Heap<T>` is shared, lock-guarded storage: a shallow `Value::clone` aliases
//! the same allocation, so mutating one copy is observable through the other.
//! That is the host behavior the toolkit models, and it is exactly what a
//! structural deep clone has to detach.
//!
//! # Equality
//!
//! `PartialEq`/`Hash` on `Value` use host identity semantics: primitives
//! compare by value (NaN equals NaN, signed zeros are equal), heap shapes
//! compare by allocation identity. `Value::deep_equals` provides structural
//! comparison for diagnostics and tests.

mod callable;
mod heap;
mod value;

pub use callable::{CallError, CallFn, CallableValue};
pub use heap::Heap;
pub use value::{OpaqueValue, PropertyBag, Value, ValueMap, ValueSet};
