// ── Platform abstraction layer ────────────────────────────────────────────────
//
// The portable definitions stand on their own on every target.  Everything
// that touches the platform's native COM types lives in the `win32`
// sub-module, compiled only on Windows, and never leaks outward.

#[cfg(windows)]
pub mod win32;
