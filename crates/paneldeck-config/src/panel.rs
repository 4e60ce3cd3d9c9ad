//! Top-level panel configuration and the hardware model selector.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use thiserror::Error;

use crate::card::CardConfig;
use crate::screensaver::{LocaleConfig, ScreensaverConfig};

/// Minimum display timeout in seconds.
pub const SLEEP_TIMEOUT_MIN: u16 = 2;
/// Maximum display timeout in seconds (12 hours).
pub const SLEEP_TIMEOUT_MAX: u16 = 43200;
/// Default display timeout in seconds.
pub const DEFAULT_SLEEP_TIMEOUT: u16 = 10;

pub(crate) fn default_sleep_timeout() -> u16 {
    DEFAULT_SLEEP_TIMEOUT
}

/// Error returned when a model selector string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown panel model '{0}', expected 'eu', 'us-l' or 'us-p'")]
pub struct UnknownModel(pub SmolStr);

/// Physical panel variant a layout is compiled for.
///
/// The model decides how many entities each card kind can hold; see
/// [`CardKind::entity_limits`](crate::card::CardKind::entity_limits).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    /// The EU landscape panel.
    #[default]
    #[serde(rename = "eu")]
    Eu,
    /// The US panel mounted in landscape orientation.
    #[serde(rename = "us-l")]
    UsLandscape,
    /// The US panel mounted in portrait orientation.
    #[serde(rename = "us-p")]
    UsPortrait,
}

impl Model {
    /// Parses a model selector string.
    pub fn parse(text: &str) -> Result<Self, UnknownModel> {
        match text {
            "eu" => Ok(Self::Eu),
            "us-l" => Ok(Self::UsLandscape),
            "us-p" => Ok(Self::UsPortrait),
            _ => Err(UnknownModel(SmolStr::new(text))),
        }
    }

    /// Returns the canonical selector string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eu => "eu",
            Self::UsLandscape => "us-l",
            Self::UsPortrait => "us-p",
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level panel configuration consumed by the compiler.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelConfig {
    /// Hardware variant the layout is compiled for.
    #[serde(default)]
    pub model: Model,
    /// Device-wide display timeout in seconds.
    #[serde(default = "default_sleep_timeout")]
    pub sleep_timeout: u16,
    /// Locale settings.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Screensaver page; absent means no screensaver page is generated.
    #[serde(default)]
    pub screensaver: Option<ScreensaverConfig>,
    /// Card pages in display order.
    #[serde(default)]
    pub cards: Vec<CardConfig>,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            model: Model::default(),
            sleep_timeout: DEFAULT_SLEEP_TIMEOUT,
            locale: LocaleConfig::default(),
            screensaver: None,
            cards: Vec::new(),
        }
    }
}
