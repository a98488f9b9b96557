//! Runtime type classification for the Vali toolkit.
//!
//! [`classify`] answers "what kind of runtime value is this?" with exactly
//! one [`Shape`] tag, using a fixed decision order. The original toolkit
//! chained duck-typed probes whose order mattered; here the probe chain is a
//! single constructor of a closed tag, and everything downstream matches
//! exhaustively over it.
//!
//! The classifier is pure, total, and never fails: unsupported container
//! types fall through to the generic-record shape, anything unknown lands on
//! [`Shape::Unrecognized`].

mod predicates;
mod shape;

pub use predicates::{classify, is_class_definition, is_function, is_undefined, is_undefined_or_null};
pub use shape::Shape;
