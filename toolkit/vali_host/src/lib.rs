//! Host-environment surface for the Vali toolkit.
//!
//! The original toolkit resolved its environment through a global host
//! object: container-type availability was probed at call time and the
//! engine's version-identification string was read from a global. This crate
//! replaces the implicit global with explicit, injectable pieces:
//!
//! - [`HostCaps`]: which optional container types the environment supports,
//!   plus the read-only engine-identification string.
//! - [`FrameScheduler`]: thin forwarding wrappers over host animation-frame
//!   scheduling and cancellation, with a thread-backed default.
//! - [`trace_message`] and friends: diagnostic trace wrappers over the
//!   `tracing` facade.

mod caps;
mod frame;
mod trace;

pub use caps::HostCaps;
pub use frame::{FrameCallback, FrameHandle, FrameScheduler, ThreadScheduler};
pub use trace::{trace_error, trace_message, trace_value, trace_warning};
