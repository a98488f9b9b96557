//! Stack headroom for the recursive clone walker.
//!
//! Clone recursion depth equals the nesting depth of the input value, and
//! callers do not pre-validate depth. Rather than imposing an arbitrary
//! limit, the walker grows the stack on demand.
//!
//! - **Native targets**: `stacker` allocates a new stack segment whenever
//!   less than the red zone remains.
//! - **WASM targets**: passthrough; the runtime manages its own stack.

/// Remaining stack below this triggers a growth (64KB).
///
/// One walker frame is small; the red zone only needs to cover one
/// recursion step plus the container iteration around it.
const RED_ZONE: usize = 64 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM passthrough.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn with_stack_headroom<R>(f: impl FnOnce() -> R) -> R {
    f()
}
