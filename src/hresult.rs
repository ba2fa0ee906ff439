// ── HRESULT status codes ──────────────────────────────────────────────────────
//
// The 32-bit signed status-code convention shared by every COM interface
// method.  Zero and positive values are success variants; the high bit set
// (negative as `i32`) is failure.  Dependent code compares against these
// constants by value, so each one is bit-exact.

use crate::error::{ComdefError, Result};
use crate::types::LONG;

/// Signed 32-bit status code returned by COM interface methods.
pub type HRESULT = i32;
/// Legacy alias for a status code carried in a `LONG`.
pub type SCODE = LONG;

// ── Success codes ─────────────────────────────────────────────────────────────

/// The operation succeeded.
pub const S_OK: HRESULT = 0;
/// The operation succeeded with the alternate (boolean-false) outcome.
pub const S_FALSE: HRESULT = 1;

// ── Failure codes ─────────────────────────────────────────────────────────────

/// The requested capability is not implemented.
pub const E_NOTIMPL: HRESULT = 0x8000_4001_u32 as i32;
/// The object does not support the requested interface.
pub const E_NOINTERFACE: HRESULT = 0x8000_4002_u32 as i32;
/// A pointer argument was invalid (usually null where non-null is required).
pub const E_POINTER: HRESULT = 0x8000_4003_u32 as i32;
/// The operation was aborted.
pub const E_ABORT: HRESULT = 0x8000_4004_u32 as i32;
/// Unspecified failure.
pub const E_FAIL: HRESULT = 0x8000_4005_u32 as i32;
/// Catastrophic failure; an invariant the callee relied on did not hold.
pub const E_UNEXPECTED: HRESULT = 0x8000_FFFF_u32 as i32;
/// Access denied (`ERROR_ACCESS_DENIED` carried as an HRESULT).
pub const E_ACCESSDENIED: HRESULT = 0x8007_0005_u32 as i32;
/// Invalid handle (`ERROR_INVALID_HANDLE` carried as an HRESULT).
pub const E_HANDLE: HRESULT = 0x8007_0006_u32 as i32;
/// Allocation failed (`ERROR_OUTOFMEMORY` carried as an HRESULT).
pub const E_OUTOFMEMORY: HRESULT = 0x8007_000E_u32 as i32;
/// One or more arguments are invalid (`ERROR_INVALID_PARAMETER`).
pub const E_INVALIDARG: HRESULT = 0x8007_0057_u32 as i32;

// ── Predicates ────────────────────────────────────────────────────────────────

/// True for success codes (`S_OK`, `S_FALSE`, and friends).
///
/// Mirrors the `SUCCEEDED()` macro from `<winerror.h>`: success is simply a
/// non-negative value.
#[allow(non_snake_case)]
pub const fn SUCCEEDED(hr: HRESULT) -> bool {
    hr >= 0
}

/// True for failure codes (high bit set).
#[allow(non_snake_case)]
pub const fn FAILED(hr: HRESULT) -> bool {
    hr < 0
}

// ── Result adapter ────────────────────────────────────────────────────────────

/// Convert an `HRESULT` into a crate [`Result`], preserving the success code.
///
/// Success codes pass through unchanged (`check(S_FALSE)` is `Ok(S_FALSE)`,
/// so callers that care about the alternate-success distinction still see
/// it); failures become [`ComdefError::Hresult`].
pub fn check(hr: HRESULT) -> Result<HRESULT> {
    if SUCCEEDED(hr) {
        Ok(hr)
    } else {
        Err(ComdefError::Hresult { hr })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_constants_have_exact_values() {
        assert_eq!(S_OK, 0);
        assert_eq!(S_FALSE, 1);
    }

    #[test]
    fn e_nointerface_is_0x80004002() {
        assert_eq!(E_NOINTERFACE as u32, 0x8000_4002);
        assert_eq!(format!("{:#010x}", E_NOINTERFACE as u32), "0x80004002");
    }

    #[test]
    fn succeeded_accepts_both_success_codes() {
        assert!(SUCCEEDED(S_OK));
        assert!(SUCCEEDED(S_FALSE));
        assert!(!SUCCEEDED(E_FAIL));
        assert!(!SUCCEEDED(E_NOINTERFACE));
    }

    #[test]
    fn failure_constants_all_have_the_high_bit_set() {
        let failures = [
            E_NOTIMPL,
            E_NOINTERFACE,
            E_POINTER,
            E_ABORT,
            E_FAIL,
            E_UNEXPECTED,
            E_ACCESSDENIED,
            E_HANDLE,
            E_OUTOFMEMORY,
            E_INVALIDARG,
        ];
        for hr in failures {
            assert!(FAILED(hr), "{hr:#010x} must be a failure code");
            assert!(!SUCCEEDED(hr));
        }
    }

    #[test]
    fn scode_carries_status_values() {
        let sc: SCODE = E_FAIL;
        assert!(FAILED(sc));
        assert_eq!(std::mem::size_of::<SCODE>(), 4);
    }

    #[test]
    fn check_passes_success_through() {
        assert_eq!(check(S_OK).unwrap(), S_OK);
        assert_eq!(check(S_FALSE).unwrap(), S_FALSE);
    }

    #[test]
    fn check_converts_failure_to_the_crate_error() {
        match check(E_NOINTERFACE) {
            Err(ComdefError::Hresult { hr }) => assert_eq!(hr, E_NOINTERFACE),
            other => panic!("expected Hresult error, got {other:?}"),
        }
    }
}
