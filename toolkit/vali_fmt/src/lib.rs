//! Bounded numeric, string, and color formatting helpers.
//!
//! Straight-line, stateless, single-purpose functions: placeholder
//! substitution and padding over text, clamping and boundary tests over
//! numbers, power-of-two helpers, and color-channel packing to the host's
//! textual forms. All functions are total; parsing helpers return `Option`.

mod color;
mod numeric;
mod template;

pub use color::{pack_rgb, pack_rgba, unpack_rgb};
pub use numeric::{
    is_between_equals, is_between_not_equals, is_power_of_two, limit_into, next_power_of_two,
};
pub use template::{format_string, pad_left, stringify};
