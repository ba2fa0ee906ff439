// ── Safety policy ─────────────────────────────────────────────────────────────
// Unsafe code is forbidden everywhere.  This crate declares types, constants,
// and traits; nothing dereferences a pointer.  The one exception lives in the
// `DLLEXPORT!` expansion, whose `no_mangle` attribute carries its own
// targeted allow.
#![deny(unsafe_code)]

//! Portable Windows/COM primitive definitions.
//!
//! The classic `<windows.h>`/`<objbase.h>` subset that COM-style code needs
//! in order to compile anywhere: integer and character aliases ([`UINT`],
//! [`BOOL`], [`WCHAR`], …), opaque handles ([`HWND`], [`HANDLE`]), the
//! 16-byte [`GUID`] with its canonical text form, the [`HRESULT`] status
//! convention ([`S_OK`], [`E_NOINTERFACE`], [`SUCCEEDED`]), the root
//! [`IUnknown`] capability, and the declaration macros ([`STDMETHOD!`],
//! [`STDMETHOD_!`], [`DEFINE_GUID!`], [`DLLEXPORT!`]).
//!
//! Everything is defined once, identically, for every target.  On Windows
//! the `platform::win32` module additionally bridges to the `windows`
//! crate's native definitions so values cross the boundary losslessly.
//!
//! The crate deliberately stops at declarations and ships no COM runtime or
//! dispatch machinery.  [`IUnknown`] is a trait for downstream implementers,
//! not an object system.

mod error;
mod guid;
mod hresult;
pub mod platform;
mod types;
mod unknown;

pub use error::{ComdefError, Result};
pub use guid::{GUID, GUID_NULL, IID, IsEqualGUID, IsEqualIID, LPIID, REFGUID, REFIID};
pub use hresult::{
    check, E_ABORT, E_ACCESSDENIED, E_FAIL, E_HANDLE, E_INVALIDARG, E_NOINTERFACE, E_NOTIMPL,
    E_OUTOFMEMORY, E_POINTER, E_UNEXPECTED, FAILED, HRESULT, SCODE, SUCCEEDED, S_FALSE, S_OK,
};
pub use types::{
    BOOL, BYTE, DWORD, FALSE, HANDLE, HMENU, HWND, INT, LCID, LONG, LPCWSTR, LPVOID, LPWSTR,
    OLECHAR, SHORT, TCHAR, TRUE, UINT, ULONG, USHORT, VARTYPE, WCHAR, WORD,
};
pub use unknown::{IID_IUnknown, IUnknown};
