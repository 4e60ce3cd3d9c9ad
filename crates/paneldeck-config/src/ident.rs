//! Syntax rules for user-supplied page identifiers.

/// Maximum length of a user-supplied identifier.
pub const MAX_IDENT_LEN: usize = 30;

/// Returns true if the value is acceptable as a user-supplied page id.
///
/// Identifiers are 1 to 30 word characters (letters, digits, underscores)
/// and must end with a letter or digit, e.g. `living_room_1`.
#[must_use]
pub fn is_valid_ident(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_IDENT_LEN {
        return false;
    }

    let bytes = value.as_bytes();
    for &b in bytes {
        if !(b.is_ascii_alphanumeric() || b == b'_') {
            return false;
        }
    }
    bytes[bytes.len() - 1] != b'_'
}
