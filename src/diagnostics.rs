//! Stderr diagnostics shared by parsing, validation, and normalization.

/// Prefix error text so failures are easy to grep in terminal output.
pub fn error_message(msg: impl AsRef<str>) -> String {
    format!("ERROR: {}", msg.as_ref())
}

/// Non-fatal warning on stderr.
pub fn warn(msg: impl AsRef<str>) {
    eprintln!("WARN: {}", msg.as_ref());
}
