// ── GUID ──────────────────────────────────────────────────────────────────────
//
// The 16-byte interface/class identifier.  Layout matches the Windows SDK
// `GUID` struct exactly: one 32-bit field, two 16-bit fields, and an 8-byte
// array, `#[repr(C)]`, no padding.  Equality is byte-wise over all 16 bytes.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ComdefError;

// ── The identifier type ───────────────────────────────────────────────────────

/// A 128-bit globally unique identifier.
///
/// Field names follow the `windows` crate (lowercase) rather than the SDK's
/// `Data1`..`Data4` so the two structs convert field-for-field; see
/// `platform::win32`.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GUID {
    pub data1: u32,
    pub data2: u16,
    pub data3: u16,
    pub data4: [u8; 8],
}

/// Interface identifier; structurally a [`GUID`].
pub type IID = GUID;
/// Mutable pointer to an [`IID`].
pub type LPIID = *mut IID;
/// Borrowed reference to a [`GUID`]; no ownership transfer.
pub type REFGUID<'a> = &'a GUID;
/// Borrowed reference to an [`IID`]; no ownership transfer.
pub type REFIID<'a> = &'a IID;

/// The all-zero GUID.
pub const GUID_NULL: GUID = GUID::new(0, 0, 0, [0; 8]);

impl GUID {
    /// Build a GUID from its four SDK fields.
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Reassemble a GUID from its 16-byte wire form (`data1`, `data2`, and
    /// `data3` little-endian, `data4` verbatim).
    pub const fn from_bytes(b: [u8; 16]) -> Self {
        Self {
            data1: u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
            data2: u16::from_le_bytes([b[4], b[5]]),
            data3: u16::from_le_bytes([b[6], b[7]]),
            data4: [b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]],
        }
    }

    /// The 16-byte wire form; inverse of [`GUID::from_bytes`].
    pub const fn to_bytes(self) -> [u8; 16] {
        let d1 = self.data1.to_le_bytes();
        let d2 = self.data2.to_le_bytes();
        let d3 = self.data3.to_le_bytes();
        let d4 = self.data4;
        [
            d1[0], d1[1], d1[2], d1[3], d2[0], d2[1], d3[0], d3[1], d4[0], d4[1], d4[2], d4[3],
            d4[4], d4[5], d4[6], d4[7],
        ]
    }
}

impl Default for GUID {
    /// The null GUID, matching zero-initialised SDK structs.
    fn default() -> Self {
        GUID_NULL
    }
}

// ── Equality ──────────────────────────────────────────────────────────────────

/// Byte-wise GUID equality: true only when all 16 bytes match.
///
/// The derived `PartialEq` compares the same way; the free function exists
/// for call sites ported from C, where `IsEqualGUID(&a, &b)` is the
/// household spelling, and is `const` so identifiers can be matched in
/// constant tables.
#[allow(non_snake_case)]
pub const fn IsEqualGUID(a: REFGUID<'_>, b: REFGUID<'_>) -> bool {
    if a.data1 != b.data1 || a.data2 != b.data2 || a.data3 != b.data3 {
        return false;
    }
    // Array `==` is not const-callable; walk the bytes.
    let mut i = 0;
    while i < 8 {
        if a.data4[i] != b.data4[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// [`IsEqualGUID`] under its interface-identifier name.
#[allow(non_snake_case)]
pub const fn IsEqualIID(a: REFIID<'_>, b: REFIID<'_>) -> bool {
    IsEqualGUID(a, b)
}

// ── Text form ─────────────────────────────────────────────────────────────────

impl fmt::Display for GUID {
    /// The canonical lowercase `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
            self.data1,
            self.data2,
            self.data3,
            self.data4[0],
            self.data4[1],
            self.data4[2],
            self.data4[3],
            self.data4[4],
            self.data4[5],
            self.data4[6],
            self.data4[7]
        )
    }
}

impl fmt::Debug for GUID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// One hex nibble, accepting both cases.
fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Two consecutive hex characters as one byte.
fn hex_pair(b: &[u8], at: usize) -> Option<u8> {
    Some((hex_nibble(b[at])? << 4) | hex_nibble(b[at + 1])?)
}

impl FromStr for GUID {
    type Err = ComdefError;

    /// Parse the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form,
    /// case-insensitive, with or without surrounding registry braces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = if let Some(body) = s.strip_prefix('{') {
            body.strip_suffix('}').ok_or(ComdefError::InvalidGuid {
                detail: "opening brace without a closing brace",
            })?
        } else if s.ends_with('}') {
            return Err(ComdefError::InvalidGuid {
                detail: "closing brace without an opening brace",
            });
        } else {
            s
        };

        let b = inner.as_bytes();
        if b.len() != 36 {
            return Err(ComdefError::InvalidGuid {
                detail: "expected 36 characters in the 8-4-4-4-12 form",
            });
        }
        if b[8] != b'-' || b[13] != b'-' || b[18] != b'-' || b[23] != b'-' {
            return Err(ComdefError::InvalidGuid {
                detail: "group separators must be dashes",
            });
        }

        let hex = |at: usize| {
            hex_pair(b, at).ok_or(ComdefError::InvalidGuid {
                detail: "non-hex digit",
            })
        };

        // The text form prints each of the first three fields big-endian.
        let data1 = (u32::from(hex(0)?) << 24)
            | (u32::from(hex(2)?) << 16)
            | (u32::from(hex(4)?) << 8)
            | u32::from(hex(6)?);
        let data2 = (u16::from(hex(9)?) << 8) | u16::from(hex(11)?);
        let data3 = (u16::from(hex(14)?) << 8) | u16::from(hex(16)?);

        let mut data4 = [0u8; 8];
        data4[0] = hex(19)?;
        data4[1] = hex(21)?;
        for i in 0..6 {
            data4[i + 2] = hex(24 + i * 2)?;
        }

        Ok(GUID::new(data1, data2, data3, data4))
    }
}

// ── Serialization ─────────────────────────────────────────────────────────────
//
// GUIDs travel as their canonical string form, so serialized data stays
// human-readable and byte order never enters the picture.

impl Serialize for GUID {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GUID {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GuidVisitor;

        impl Visitor<'_> for GuidVisitor {
            type Value = GUID;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a GUID string like \"00000000-0000-0000-c000-000000000046\"")
            }

            fn visit_str<E>(self, v: &str) -> Result<GUID, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(GuidVisitor)
    }
}

// ── DEFINE_GUID ───────────────────────────────────────────────────────────────

/// Define a named public GUID constant, SDK style.
///
/// ```
/// use comdef::DEFINE_GUID;
///
/// DEFINE_GUID!(
///     IID_IExample,
///     0x1234_5678, 0x9abc, 0xdef0,
///     0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0xde, 0xf0
/// );
///
/// assert_eq!(IID_IExample.data1, 0x1234_5678);
/// ```
#[macro_export]
macro_rules! DEFINE_GUID {
    ($name:ident, $data1:expr, $data2:expr, $data3:expr,
     $b0:expr, $b1:expr, $b2:expr, $b3:expr, $b4:expr, $b5:expr, $b6:expr, $b7:expr) => {
        #[allow(non_upper_case_globals)]
        pub const $name: $crate::GUID =
            $crate::GUID::new($data1, $data2, $data3, [$b0, $b1, $b2, $b3, $b4, $b5, $b6, $b7]);
    };
}

// ── Tests ─────────────────────────────────────────────────────────────────────
