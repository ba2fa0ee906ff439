// ── Primitive Windows types ───────────────────────────────────────────────────
//
// The classic <windows.h> integer, character, and handle aliases, pinned to
// the widths the Windows SDK gives them.  Code written against the COM ABI
// compiles unchanged whether or not the target is Windows; `platform::win32`
// checks these definitions against the native ones.

use std::ffi::c_void;

// ── Integer aliases ───────────────────────────────────────────────────────────

/// Unsigned 32-bit integer (`unsigned int`).
pub type UINT = u32;
/// Signed 32-bit integer (`int`).
pub type INT = i32;
/// Signed 32-bit integer.  The SDK's `long` stays 32-bit even on LP64
/// targets, so this is `i32`, never the host `long`.
pub type LONG = i32;
/// Unsigned 32-bit integer (`unsigned long`, same LP64 caveat as [`LONG`]).
pub type ULONG = u32;
/// Signed 16-bit integer.
pub type SHORT = i16;
/// Unsigned 16-bit integer.
pub type USHORT = u16;
/// Unsigned 8-bit integer.
pub type BYTE = u8;
/// Unsigned 16-bit integer.
pub type WORD = u16;
/// Unsigned 32-bit integer.
pub type DWORD = u32;
/// VARIANT type discriminant (the `VT_*` values).
pub type VARTYPE = u16;
/// Locale identifier.
pub type LCID = DWORD;

// ── Booleans ──────────────────────────────────────────────────────────────────

/// Signed 32-bit boolean.  Zero is false; any non-zero value is true.
pub type BOOL = i32;

/// The canonical true value for [`BOOL`].
pub const TRUE: BOOL = 1;
/// The canonical false value for [`BOOL`].
pub const FALSE: BOOL = 0;

// ── Wide characters and strings ───────────────────────────────────────────────

/// UTF-16 code unit, the SDK's 16-bit `wchar_t`.
pub type WCHAR = u16;
/// Text-mode character; always the wide flavour here.
pub type TCHAR = WCHAR;
/// Character type used by OLE and Automation interfaces.
pub type OLECHAR = WCHAR;
/// Mutable pointer to a NUL-terminated UTF-16 string.
pub type LPWSTR = *mut WCHAR;
/// Const pointer to a NUL-terminated UTF-16 string.
pub type LPCWSTR = *const WCHAR;

// ── Handles and untyped pointers ──────────────────────────────────────────────

/// Untyped mutable pointer (`void*`), the out-parameter currency of
/// [`IUnknown::query_interface`](crate::IUnknown::query_interface).
pub type LPVOID = *mut c_void;
/// Opaque pointer-sized handle to a kernel object.
pub type HANDLE = *mut c_void;
/// Opaque handle to a window.
pub type HWND = HANDLE;
/// Opaque handle to a menu.
pub type HMENU = HANDLE;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn integer_aliases_have_sdk_widths() {
        assert_eq!(size_of::<UINT>(), 4);
        assert_eq!(size_of::<INT>(), 4);
        assert_eq!(size_of::<LONG>(), 4);
        assert_eq!(size_of::<ULONG>(), 4);
        assert_eq!(size_of::<DWORD>(), 4);
        assert_eq!(size_of::<LCID>(), 4);
        assert_eq!(size_of::<WORD>(), 2);
        assert_eq!(size_of::<USHORT>(), 2);
        assert_eq!(size_of::<SHORT>(), 2);
        assert_eq!(size_of::<VARTYPE>(), 2);
        assert_eq!(size_of::<BYTE>(), 1);
    }

    #[test]
    fn bool_is_a_signed_32_bit_integer() {
        assert_eq!(size_of::<BOOL>(), 4);
        assert!(BOOL::MIN < 0);
        assert_eq!(TRUE, 1);
        assert_eq!(FALSE, 0);
    }

    #[test]
    fn wide_chars_are_utf16_code_units() {
        assert_eq!(size_of::<WCHAR>(), 2);
        assert_eq!(size_of::<TCHAR>(), 2);
        assert_eq!(size_of::<OLECHAR>(), 2);
    }

    #[test]
    fn handles_are_pointer_sized() {
        assert_eq!(size_of::<HANDLE>(), size_of::<usize>());
        assert_eq!(size_of::<HWND>(), size_of::<usize>());
        assert_eq!(size_of::<HMENU>(), size_of::<usize>());
        assert_eq!(size_of::<LPVOID>(), size_of::<usize>());
        assert_eq!(size_of::<LPWSTR>(), size_of::<usize>());
    }
}
