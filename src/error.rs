//! Error types for palette generation.

use thiserror::Error;

/// Errors produced while building a palette.
#[derive(Debug, Error)]
pub enum Error {
    /// A color string was not exactly 6 hex digits.
    #[error("invalid hex color: expected 6 hex digits, got {0:?}")]
    InvalidHex(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_includes_input() {
        let err = Error::InvalidHex("zzz".into());
        let msg = format!("{err}");
        assert!(msg.contains("zzz"), "expected input in message, got: {msg}");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
