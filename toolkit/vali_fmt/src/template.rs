//! Placeholder substitution and padding.

use vali_value::Value;

/// Render a value the way the host stringifies it for interpolation.
///
/// Nullish markers render as their literal names, strings render without
/// quotes; container shapes fall back to the diagnostic `Display` form.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if n.is_nan() {
                "NaN".to_string()
            } else if n.is_infinite() {
                if *n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
            } else {
                format!("{n}")
            }
        }
        Value::Str(s) => s.read().clone(),
        other => other.to_string(),
    }
}

/// Substitute `{N}` tokens (N a non-negative integer) with the stringified
/// Nth positional argument.
///
/// Malformed tokens and indices without a matching argument are left
/// verbatim, including their braces.
pub fn format_string(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        match after_open.find('}') {
            Some(close) => {
                let token = &after_open[..close];
                let is_index = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
                match token.parse::<usize>().ok().filter(|_| is_index) {
                    Some(index) if index < args.len() => {
                        out.push_str(&stringify(&args[index]));
                        rest = &after_open[close + 1..];
                    }
                    _ => {
                        // Not a substitutable token: emit the brace and
                        // rescan from the next character.
                        out.push('{');
                        rest = after_open;
                    }
                }
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Left-pad `text` with `fill` up to `width` characters. Text already at
/// least `width` characters long is returned unchanged.
pub fn pad_left(text: &str, width: usize, fill: char) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(width);
    for _ in len..width {
        out.push(fill);
    }
    out.push_str(text);
    out
}
