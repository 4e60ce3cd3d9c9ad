//! Screensaver page and locale configuration.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::card::IconSpec;

/// Default strftime pattern for the screensaver date line.
pub const DEFAULT_DATE_FORMAT: &str = "%A, %d. %B %Y";
/// Default strftime pattern for the screensaver clock.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";
/// Minimum length of a clock format string.
pub const CLOCK_FORMAT_MIN_LEN: usize = 2;
/// Maximum length of a clock format string.
pub const CLOCK_FORMAT_MAX_LEN: usize = 32;

fn default_date_format() -> SmolStr {
    SmolStr::new_static(DEFAULT_DATE_FORMAT)
}

fn default_time_format() -> SmolStr {
    SmolStr::new_static(DEFAULT_TIME_FORMAT)
}

/// Screensaver page configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScreensaverConfig {
    /// User-supplied page id.
    #[serde(default)]
    pub id: Option<SmolStr>,
    /// strftime pattern for the date line.
    #[serde(default = "default_date_format")]
    pub date_format: SmolStr,
    /// strftime pattern for the clock.
    #[serde(default = "default_time_format")]
    pub time_format: SmolStr,
    /// Weather entity backing the forecast row.
    #[serde(default)]
    pub weather_entity_id: Option<SmolStr>,
    /// Left status icon slot.
    #[serde(default)]
    pub status_icon_left: Option<StatusIconConfig>,
    /// Right status icon slot.
    #[serde(default)]
    pub status_icon_right: Option<StatusIconConfig>,
}

impl Default for ScreensaverConfig {
    fn default() -> Self {
        Self {
            id: None,
            date_format: default_date_format(),
            time_format: default_time_format(),
            weather_entity_id: None,
            status_icon_left: None,
            status_icon_right: None,
        }
    }
}

/// One of the two screensaver status icon slots.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusIconConfig {
    /// Entity whose state drives the icon.
    #[serde(default)]
    pub entity_id: Option<SmolStr>,
    /// Icon override.
    #[serde(default)]
    pub icon: Option<IconSpec>,
    /// Render with the smaller status font.
    #[serde(default)]
    pub alt_font: bool,
}

/// Locale settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocaleConfig {
    /// Weekday display name overrides.
    #[serde(default)]
    pub day_of_week_map: DayOfWeekMap,
}

/// Days of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Weekday {
    /// All seven days in calendar order.
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the lowercase English day name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sunday => "sunday",
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-weekday display name overrides.
///
/// Each configured day carries exactly two strings, the short form then
/// the long form, e.g. `["Sun", "Sunday"]`. Arity is checked by the
/// compiler so a mistake is reported with the day's field path rather
/// than rejected at deserialization time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DayOfWeekMap {
    /// Override for Sunday.
    #[serde(default)]
    pub sunday: Vec<SmolStr>,
    /// Override for Monday.
    #[serde(default)]
    pub monday: Vec<SmolStr>,
    /// Override for Tuesday.
    #[serde(default)]
    pub tuesday: Vec<SmolStr>,
    /// Override for Wednesday.
    #[serde(default)]
    pub wednesday: Vec<SmolStr>,
    /// Override for Thursday.
    #[serde(default)]
    pub thursday: Vec<SmolStr>,
    /// Override for Friday.
    #[serde(default)]
    pub friday: Vec<SmolStr>,
    /// Override for Saturday.
    #[serde(default)]
    pub saturday: Vec<SmolStr>,
}

impl DayOfWeekMap {
    /// Iterates the override slots in calendar order, configured or not.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[SmolStr])> {
        [
            (Weekday::Sunday, self.sunday.as_slice()),
            (Weekday::Monday, self.monday.as_slice()),
            (Weekday::Tuesday, self.tuesday.as_slice()),
            (Weekday::Wednesday, self.wednesday.as_slice()),
            (Weekday::Thursday, self.thursday.as_slice()),
            (Weekday::Friday, self.friday.as_slice()),
            (Weekday::Saturday, self.saturday.as_slice()),
        ]
        .into_iter()
    }

    /// Returns true when no day is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, names)| names.is_empty())
    }
}
