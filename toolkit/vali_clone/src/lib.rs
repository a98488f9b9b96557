//! Structural deep clone over runtime values.
//!
//! [`deep_clone`] walks a value depth-first and produces a structurally
//! equivalent, fully detached copy: mutating the clone is never observable
//! through the original, and vice versa, at every nesting depth. Dispatch
//! goes through the [`vali_classify`] shape tag, so the walker matches
//! exhaustively over a closed set of shapes instead of re-probing types.
//!
//! Two surfaces over the same walker:
//!
//! - [`deep_clone`]: total. Unrecognized shapes degrade silently to
//!   `Value::Undefined`, matching the original toolkit's contract.
//! - [`try_deep_clone`]: strict. Unrecognized shapes surface as
//!   [`CloneError::UnsupportedShape`].
//!
//! # Sharing and cycles
//!
//! One top-level call threads an identity map from source allocation to its
//! already-produced clone. A heap node reachable twice is cloned once and
//! the copy preserves the sharing; a cyclic structure clones into an
//! equivalent cyclic structure instead of recursing forever. Acyclic,
//! non-shared inputs observe exactly the original algorithm.
//!
//! # Stack depth
//!
//! Recursion depth equals the nesting depth of the input. The walker grows
//! the stack on demand (see [`with_stack_headroom`]), so deeply nested
//! values do not overflow it.

mod cloner;
mod errors;
mod grow;

pub use cloner::{deep_clone, try_deep_clone, DeepCloner};
pub use errors::CloneError;
pub use grow::with_stack_headroom;
