//! Error types for bytepool.

use std::fmt;

/// Errors that can occur when configuring a pool or reading buffer content.
///
/// Acquire and release never fail; these variants only cover string
/// conversions and configuration checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// The buffer content is not valid UTF-8.
    Utf8 {
        /// Number of leading bytes that form valid UTF-8.
        valid_up_to: usize,
    },

    /// Invalid configuration parameter.
    InvalidConfig {
        /// Description of what was invalid.
        message: &'static str,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::Utf8 { valid_up_to } => {
                write!(f, "invalid utf-8 after {} bytes", valid_up_to)
            }
            PoolError::InvalidConfig { message } => {
                write!(f, "invalid config: {}", message)
            }
        }
    }
}

impl std::error::Error for PoolError {}

impl From<std::str::Utf8Error> for PoolError {
    fn from(e: std::str::Utf8Error) -> Self {
        PoolError::Utf8 {
            valid_up_to: e.valid_up_to(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_conversion() {
        let bytes = [b'o', b'k', 0xFF];
        let utf8_err = std::str::from_utf8(&bytes).unwrap_err();
        let err: PoolError = utf8_err.into();
        assert_eq!(err, PoolError::Utf8 { valid_up_to: 2 });
    }

    #[test]
    fn test_display() {
        let err = PoolError::InvalidConfig {
            message: "max_retained_capacity must be non-zero",
        };
        assert!(err.to_string().contains("invalid config"));

        let err = PoolError::Utf8 { valid_up_to: 7 };
        assert!(err.to_string().contains("7 bytes"));
    }
}
