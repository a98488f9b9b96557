//! Error type for the strict clone surface.

use thiserror::Error;

/// Error raised by [`try_deep_clone`](crate::try_deep_clone).
///
/// The faithful surface ([`deep_clone`](crate::deep_clone)) never raises;
/// this type only exists for callers that prefer an explicit "unsupported
/// value" outcome over silent degradation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CloneError {
    /// The value (or one of its constituents) has no recognized shape.
    #[error("cannot clone unsupported shape: {type_name}")]
    UnsupportedShape {
        /// Shape name of the offending value.
        type_name: &'static str,
    },
}
