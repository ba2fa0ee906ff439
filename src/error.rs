// ── Central error type ────────────────────────────────────────────────────────
//
// All fallible operations in comdef return `error::Result<T>`.  No panics
// in production paths; errors carry the failing HRESULT or a description of
// the malformed input.

use crate::hresult::HRESULT;

/// Every error that comdef can produce.
#[derive(Debug)]
pub enum ComdefError {
    /// An operation reported a failing `HRESULT`.
    Hresult {
        /// The raw status code, high bit set.
        hr: HRESULT,
    },

    /// A GUID string did not match the canonical
    /// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
    InvalidGuid {
        /// What exactly was wrong, for display purposes.
        detail: &'static str,
    },
}

impl std::fmt::Display for ComdefError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hresult { hr } => {
                // i32 hex formatting shows the two's-complement bit pattern,
                // so failures print in the familiar 0x8000xxxx shape.
                write!(f, "operation failed (HRESULT {hr:#010x})")
            }
            Self::InvalidGuid { detail } => write!(f, "invalid GUID string: {detail}"),
        }
    }
}

impl std::error::Error for ComdefError {}

// Convert a windows-crate error directly into a ComdefError so that `?` can
// be used on `windows::core::Result<T>` alongside the platform module.
#[cfg(windows)]
impl From<windows::core::Error> for ComdefError {
    fn from(e: windows::core::Error) -> Self {
        Self::Hresult { hr: e.code().0 }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ComdefError>;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hresult::E_NOINTERFACE;

    #[test]
    fn hresult_error_displays_the_code_in_hex() {
        let e = ComdefError::Hresult { hr: E_NOINTERFACE };
        assert_eq!(e.to_string(), "operation failed (HRESULT 0x80004002)");
    }

    #[test]
    fn invalid_guid_error_names_the_violation() {
        let e = ComdefError::InvalidGuid {
            detail: "non-hex digit",
        };
        assert_eq!(e.to_string(), "invalid GUID string: non-hex digit");
    }
}
