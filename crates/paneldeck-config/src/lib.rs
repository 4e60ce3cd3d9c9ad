//! `paneldeck-config` - Typed configuration model for touch-panel page layouts.
//!
//! This crate defines the input side of the paneldeck compiler:
//!
//! - **Panel config**: the top-level tree of cards, screensaver and locale
//! - **Entity references**: parsing of `<domain>.<name>` ids and the
//!   `delete` / `iText.` sentinels
//! - **Identifiers**: syntax rules for user-supplied page ids
//! - **Layout limits**: per-model entity-count bounds for every card kind
//!
//! Shape-level deserialization is handled by `serde`; everything beyond
//! shape (cardinality, cross-references, icon names) is checked by
//! `paneldeck-compile`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod card;
pub mod entity;
pub mod ident;
pub mod panel;
pub mod screensaver;

pub use card::{ArmMode, CardConfig, CardEntity, CardKind, EntityLimits, IconSpec};
pub use entity::{EntityDomain, EntityRef, EntityRefError};
pub use ident::{is_valid_ident, MAX_IDENT_LEN};
pub use panel::{
    Model, PanelConfig, UnknownModel, DEFAULT_SLEEP_TIMEOUT, SLEEP_TIMEOUT_MAX, SLEEP_TIMEOUT_MIN,
};
pub use screensaver::{
    DayOfWeekMap, LocaleConfig, ScreensaverConfig, StatusIconConfig, Weekday, CLOCK_FORMAT_MAX_LEN,
    CLOCK_FORMAT_MIN_LEN, DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT,
};
