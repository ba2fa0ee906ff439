// ── IUnknown and the COM declaration macros ───────────────────────────────────
//
// `IUnknown` here is a capability contract, not a vtable: implementers decide
// how to count references and which interfaces to hand out.  No concrete
// implementation ships outside the tests.

use crate::guid::{GUID, IID, REFIID};
use crate::hresult::HRESULT;
use crate::types::{LPVOID, ULONG};

// ── The root capability ───────────────────────────────────────────────────────

/// The root COM capability: interface discovery plus reference counting.
///
/// Exactly three operations, in the classic vtable order.  The trait is
/// object-safe, so `&dyn IUnknown` works where C++ would pass `IUnknown*`.
pub trait IUnknown {
    /// Ask for another interface on the same object.
    ///
    /// On success, stores a pointer to the requested interface in `out` and
    /// returns [`S_OK`](crate::S_OK).  When `riid` names an unsupported
    /// interface, stores null and returns
    /// [`E_NOINTERFACE`](crate::E_NOINTERFACE).
    fn query_interface(&self, riid: REFIID<'_>, out: &mut LPVOID) -> HRESULT;

    /// Increment the reference count, returning the new count.
    fn add_ref(&self) -> ULONG;

    /// Decrement the reference count, returning the new count.
    fn release(&self) -> ULONG;
}

/// Interface identifier of [`IUnknown`]:
/// `{00000000-0000-0000-C000-000000000046}`.
#[allow(non_upper_case_globals)]
pub const IID_IUnknown: IID =
    GUID::new(0, 0, 0, [0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46]);

// ── Declaration macros ────────────────────────────────────────────────────────

/// Declare an interface method returning [`HRESULT`](crate::HRESULT), COM
/// style.
///
/// Expands to a trait-method signature, so interface declarations ported
/// from Windows keep their shape:
///
/// ```
/// use comdef::{LPCWSTR, STDMETHOD, STDMETHOD_, ULONG};
///
/// trait IExample: comdef::IUnknown {
///     STDMETHOD!(fn Rename(&self, name: LPCWSTR));
///     STDMETHOD_!(ULONG, fn Generation(&self));
/// }
/// ```
#[macro_export]
macro_rules! STDMETHOD {
    ($(#[$meta:meta])* fn $name:ident(&self $(, $arg:ident : $ty:ty)* $(,)?)) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        fn $name(&self $(, $arg: $ty)*) -> $crate::HRESULT;
    };
}

/// Declare an interface method with an explicit return type.
///
/// The underscore flavour of [`STDMETHOD!`], for the handful of methods
/// (`AddRef`, `Release`, …) that return something other than an `HRESULT`.
#[macro_export]
macro_rules! STDMETHOD_ {
    ($ret:ty, $(#[$meta:meta])* fn $name:ident(&self $(, $arg:ident : $ty:ty)* $(,)?)) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        fn $name(&self $(, $arg: $ty)*) -> $ret;
    };
}

/// Mark a function as an unmangled, `extern "system"` export.
///
/// The Rust spelling of `__declspec(dllexport)` + `STDAPICALLTYPE`:
/// `extern "system"` selects stdcall on 32-bit Windows and the C convention
/// everywhere else, exactly as the SDK macro pair did.
#[macro_export]
macro_rules! DLLEXPORT {
    ($(#[$meta:meta])* $vis:vis fn $name:ident($($arg:ident : $ty:ty),* $(,)?) $(-> $ret:ty)? $body:block) => {
        $(#[$meta])*
        // `no_mangle` counts as unsafe code; scope the allow to this item.
        #[allow(unsafe_code)]
        #[no_mangle]
        $vis extern "system" fn $name($($arg: $ty),*) $(-> $ret)? $body
    };
}

// ── Tests ─────────────────────────────────────────────────────────────────────
