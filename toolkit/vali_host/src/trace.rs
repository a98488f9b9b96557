//! Diagnostic trace wrappers.
//!
//! Thin forwarding over the `tracing` facade; the host application installs
//! whatever subscriber it wants.

use vali_value::Value;

/// Emit a diagnostic trace message.
pub fn trace_message(message: &str) {
    tracing::trace!(target: "vali", "{message}");
}

/// Emit a diagnostic warning.
pub fn trace_warning(message: &str) {
    tracing::warn!(target: "vali", "{message}");
}

/// Emit a diagnostic error.
pub fn trace_error(message: &str) {
    tracing::error!(target: "vali", "{message}");
}

/// Emit a labeled rendering of a runtime value at trace level.
pub fn trace_value(label: &str, value: &Value) {
    tracing::trace!(target: "vali", shape = value.type_name(), "{label}: {value}");
}
