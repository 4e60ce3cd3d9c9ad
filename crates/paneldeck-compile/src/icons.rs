//! Icon name to codepoint resolution.
//!
//! The icon table is an external JSON list of `{name, hex}` records. It is
//! parsed and health-checked once by the embedding application; lookups
//! during a compile are infallible reads against the loaded table.

use serde::Deserialize;
use smol_str::SmolStr;

use crate::error::IconTableError;

/// Prefix selecting lookup by hex value instead of name.
pub const HEX_PREFIX: &str = "hex:";

/// Default icon for a screensaver status slot without an explicit value.
pub const DEFAULT_STATUS_ICON: &str = "alert-circle-outline";
/// Icon of the left (previous page) navigation control.
pub const NAV_LEFT_ICON: &str = "arrow-left-bold";
/// Icon of the right (next page) navigation control.
pub const NAV_RIGHT_ICON: &str = "arrow-right-bold";
/// Icon of a hidden page's home link.
pub const NAV_HOME_ICON: &str = "home";

#[derive(Debug, Deserialize)]
struct RawIcon {
    name: SmolStr,
    hex: SmolStr,
}

/// One loaded icon table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRecord {
    /// Icon name, e.g. `arrow-left-bold`.
    pub name: SmolStr,
    /// Hex form of the codepoint, as it appeared in the source.
    pub hex: SmolStr,
    /// The display codepoint.
    pub codepoint: char,
}

/// An immutable name-to-codepoint mapping.
#[derive(Debug, Clone)]
pub struct IconLibrary {
    records: Vec<IconRecord>,
}

impl IconLibrary {
    /// Parses a JSON icon table and health-checks every record.
    ///
    /// # Errors
    ///
    /// Returns an [`IconTableError`] when the source is not a JSON list,
    /// the list is empty, a record has an empty name or hex value, or a
    /// hex value is not a Unicode codepoint.
    pub fn from_json(source: &str) -> Result<Self, IconTableError> {
        let raw: Vec<RawIcon> = serde_json::from_str(source)
            .map_err(|err| IconTableError::Parse(SmolStr::new(err.to_string())))?;
        if raw.is_empty() {
            return Err(IconTableError::Empty);
        }

        let mut records = Vec::with_capacity(raw.len());
        for (index, record) in raw.into_iter().enumerate() {
            if record.name.is_empty() || record.hex.is_empty() {
                return Err(IconTableError::IncompleteRecord { index });
            }
            let codepoint = u32::from_str_radix(&record.hex, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| IconTableError::BadCodepoint {
                    name: record.name.clone(),
                    hex: record.hex.clone(),
                })?;
            records.push(IconRecord {
                name: record.name,
                hex: record.hex,
                codepoint,
            });
        }
        Ok(Self { records })
    }

    /// Resolves an icon name, or a `hex:`-prefixed literal, to a codepoint.
    ///
    /// Matching is exact and case-sensitive against the name field, or
    /// against the hex field when the `hex:` prefix is present.
    #[must_use]
    pub fn resolve(&self, value: &str) -> Option<char> {
        if let Some(hex) = value.strip_prefix(HEX_PREFIX) {
            self.records.iter().find(|record| record.hex == hex)
        } else {
            self.records.iter().find(|record| record.name == value)
        }
        .map(|record| record.codepoint)
    }

    /// Returns the loaded records in table order.
    #[must_use]
    pub fn records(&self) -> &[IconRecord] {
        &self.records
    }

    /// Number of loaded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a successfully loaded table.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library() -> IconLibrary {
        IconLibrary::from_json(
            r#"[
                {"name": "lightbulb", "hex": "E335"},
                {"name": "home", "hex": "E2DC"},
                {"name": "weather-sunny", "hex": "E598"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_by_name() {
        let icons = library();
        assert_eq!(icons.resolve("lightbulb"), Some('\u{E335}'));
        assert_eq!(icons.resolve("comet"), None);
        // Case-sensitive.
        assert_eq!(icons.resolve("Lightbulb"), None);
    }

    #[test]
    fn test_resolve_by_hex() {
        let icons = library();
        assert_eq!(icons.resolve("hex:E2DC"), Some('\u{E2DC}'));
        assert_eq!(icons.resolve("hex:FFFF1"), None);
    }

    #[test]
    fn test_name_and_hex_agree() {
        let icons = library();
        assert_eq!(icons.resolve("weather-sunny"), icons.resolve("hex:E598"));
    }

    #[test]
    fn test_rejects_empty_table() {
        assert!(matches!(IconLibrary::from_json("[]"), Err(IconTableError::Empty)));
    }

    #[test]
    fn test_rejects_bad_source() {
        assert!(matches!(
            IconLibrary::from_json("not json"),
            Err(IconTableError::Parse(_))
        ));
        assert!(matches!(
            IconLibrary::from_json(r#"[{"name": "", "hex": "E335"}]"#),
            Err(IconTableError::IncompleteRecord { index: 0 })
        ));
        assert!(matches!(
            IconLibrary::from_json(r#"[{"name": "ok", "hex": "E335"}, {"name": "x", "hex": ""}]"#),
            Err(IconTableError::IncompleteRecord { index: 1 })
        ));
        assert!(matches!(
            IconLibrary::from_json(r#"[{"name": "bad", "hex": "D800"}]"#),
            Err(IconTableError::BadCodepoint { .. })
        ));
    }
}
