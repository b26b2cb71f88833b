//! Character-level grammar for resource-name segments.
//!
//! Names are built from two segment shapes: collection ids (fixed
//! lowercase words such as `stores`) and resource ids (UUIDs). The
//! grammar is strict: a resource id must be in canonical lowercase
//! hyphenated `8-4-4-4-12` form, so every name that parses is byte for
//! byte the form generation emits. Uppercase hex and hyphen-free UUID
//! spellings are rejected.

/// Byte offsets of the four hyphens in a canonical UUID.
const HYPHEN_OFFSETS: [usize; 4] = [8, 13, 18, 23];

/// Length in bytes of a canonical UUID string.
const RESOURCE_ID_LEN: usize = 36;

/// Returns true iff `s` is a valid collection id.
///
/// Collection ids are non-empty and consist only of ASCII `a`-`z`.
pub fn is_collection_id(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_lowercase())
}

/// Returns true iff `s` is a valid resource id.
///
/// Resource ids are canonical lowercase hyphenated UUIDs, exactly 36
/// bytes with hyphens at offsets 8, 13, 18, and 23.
pub fn is_resource_id(s: &str) -> bool {
    if s.len() != RESOURCE_ID_LEN {
        return false;
    }
    s.bytes().enumerate().all(|(offset, b)| {
        if HYPHEN_OFFSETS.contains(&offset) {
            b == b'-'
        } else {
            matches!(b, b'0'..=b'9' | b'a'..=b'f')
        }
    })
}
