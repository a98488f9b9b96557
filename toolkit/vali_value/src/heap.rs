//! Shared heap storage for container values.
//!
//! `Heap<T>` wraps every mutable container in `Arc<RwLock<T>>` so that
//! shallow copies of a `Value` alias the same storage, the way the host's
//! object references do. `Heap::new` is `pub(crate)`: external code must go
//! through the `Value::` factory methods, which keeps allocation identity
//! under this crate's control.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared, lock-guarded storage for one container allocation.
pub struct Heap<T>(Arc<RwLock<T>>);

impl<T> Heap<T> {
    /// Allocate new storage. Crate-private: only `Value` factories allocate.
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(RwLock::new(value)))
    }

    /// Acquire a shared read guard on the storage.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    /// Acquire an exclusive write guard on the storage.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// Stable identity of this allocation.
    ///
    /// Two `Heap`s report the same id exactly when they alias the same
    /// storage. Valid for as long as any alias is alive.
    pub fn ptr_id(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }

    /// Check whether two heaps alias the same allocation.
    pub fn ptr_eq(&self, other: &Heap<T>) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Heap<T> {
    /// Shallow clone: the copy aliases the same storage.
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Try-lock so a Debug print never deadlocks against a held writer.
        match self.0.try_read() {
            Some(guard) => guard.fmt(f),
            None => write!(f, "<locked>"),
        }
    }
}
