//! Color-channel packing and unpacking to the host's textual forms.

use crate::numeric::limit_into;

/// Pack three 8-bit channels into `#RRGGBB` form.
pub fn pack_rgb(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Pack three 8-bit channels and an alpha in `[0, 1]` into
/// `rgba(r,g,b,a)` form. Alpha is clamped into range.
pub fn pack_rgba(r: u8, g: u8, b: u8, a: f64) -> String {
    let a = limit_into(a, 0.0, 1.0);
    format!("rgba({r},{g},{b},{a})")
}

/// Unpack a `#RRGGBB` string into its three channels.
///
/// Returns `None` for anything that is not exactly a hash followed by six
/// hexadecimal digits.
pub fn unpack_rgb(text: &str) -> Option<(u8, u8, u8)> {
    let hex = text.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn pack_rgb_is_uppercase_hex() {
        assert_eq!(pack_rgb(255, 0, 128), "#FF0080");
        assert_eq!(pack_rgb(0, 0, 0), "#000000");
    }

    #[test]
    fn pack_rgba_clamps_alpha() {
        assert_eq!(pack_rgba(1, 2, 3, 0.5), "rgba(1,2,3,0.5)");
        assert_eq!(pack_rgba(1, 2, 3, 2.0), "rgba(1,2,3,1)");
        assert_eq!(pack_rgba(1, 2, 3, -0.5), "rgba(1,2,3,0)");
    }

    #[test]
    fn unpack_round_trips_pack() {
        assert_eq!(unpack_rgb(&pack_rgb(12, 34, 56)), Some((12, 34, 56)));
        assert_eq!(unpack_rgb("#ff0080"), Some((255, 0, 128)));
    }

    #[test]
    fn unpack_rejects_malformed_text() {
        assert_eq!(unpack_rgb("FF0080"), None);
        assert_eq!(unpack_rgb("#FF008"), None);
        assert_eq!(unpack_rgb("#FF00801"), None);
        assert_eq!(unpack_rgb("#GG0000"), None);
        assert_eq!(unpack_rgb(""), None);
    }
}
