// ── Native Windows bridge ─────────────────────────────────────────────────────
//
// Conversions between the portable definitions and the `windows` crate's own
// types, plus parity tests proving the two sides agree.  On non-Windows
// targets this module does not exist and the portable definitions stand
// alone.

use crate::guid::GUID;
use crate::hresult::HRESULT;

// ── GUID ──────────────────────────────────────────────────────────────────────

impl From<windows::core::GUID> for GUID {
    fn from(g: windows::core::GUID) -> Self {
        Self {
            data1: g.data1,
            data2: g.data2,
            data3: g.data3,
            data4: g.data4,
        }
    }
}

impl From<GUID> for windows::core::GUID {
    fn from(g: GUID) -> Self {
        Self {
            data1: g.data1,
            data2: g.data2,
            data3: g.data3,
            data4: g.data4,
        }
    }
}

// ── HRESULT ───────────────────────────────────────────────────────────────────

/// Wrap a portable status code in the native newtype.
pub fn hresult_into_native(hr: HRESULT) -> windows::core::HRESULT {
    windows::core::HRESULT(hr)
}

/// Unwrap a native status code into the portable representation.
pub fn hresult_from_native(hr: windows::core::HRESULT) -> HRESULT {
    hr.0
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guid::IsEqualGUID;
    use crate::hresult::{E_NOINTERFACE, S_FALSE, S_OK};
    use crate::unknown::IID_IUnknown;
    use std::mem::size_of;
    use windows::core::Interface;

    #[test]
    fn guid_layouts_agree() {
        assert_eq!(size_of::<GUID>(), size_of::<windows::core::GUID>());
    }

    #[test]
    fn guid_roundtrips_through_the_native_type() {
        let g = GUID::new(0x1234_5678, 0x9abc, 0xdef0, [1, 2, 3, 4, 5, 6, 7, 8]);
        let native: windows::core::GUID = g.into();
        let back: GUID = native.into();
        assert!(IsEqualGUID(&g, &back));
    }

    #[test]
    fn iid_iunknown_matches_the_native_interface_id() {
        let native: GUID = <windows::core::IUnknown as Interface>::IID.into();
        assert_eq!(native, IID_IUnknown);
    }

    #[test]
    fn hresult_bridge_preserves_the_sign_convention() {
        assert!(hresult_into_native(S_OK).is_ok());
        assert!(hresult_into_native(S_FALSE).is_ok());
        assert!(!hresult_into_native(E_NOINTERFACE).is_ok());
        assert_eq!(hresult_from_native(windows::core::HRESULT(0)), S_OK);
        assert_eq!(
            hresult_from_native(hresult_into_native(E_NOINTERFACE)),
            E_NOINTERFACE
        );
    }
}
