//! Card configuration records and per-model layout limits.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::panel::{Model, DEFAULT_SLEEP_TIMEOUT};

/// The set of card layouts a panel page can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Scrolling list of entity rows.
    Entities,
    /// Icon grid with up to six tiles.
    Grid,
    /// Icon grid with smaller two-line tiles, up to eight.
    Grid2,
    /// QR code page with up to two entity rows.
    Qr,
    /// Alarm control panel page.
    Alarm,
    /// Thermostat page.
    Thermostat,
    /// Media player page.
    Media,
}

impl CardKind {
    /// Returns the configuration name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Entities => "entities",
            Self::Grid => "grid",
            Self::Grid2 => "grid2",
            Self::Qr => "qr",
            Self::Alarm => "alarm",
            Self::Thermostat => "thermostat",
            Self::Media => "media",
        }
    }

    /// Returns the entity-count bounds for this kind on the given model,
    /// or `None` when the kind has no entities slot at all.
    #[must_use]
    pub fn entity_limits(self, model: Model) -> Option<EntityLimits> {
        match self {
            Self::Entities => Some(match model {
                Model::UsPortrait => EntityLimits { min: 1, max: 6 },
                Model::Eu | Model::UsLandscape => EntityLimits { min: 1, max: 4 },
            }),
            Self::Grid => Some(EntityLimits { min: 1, max: 6 }),
            Self::Grid2 => Some(EntityLimits { min: 1, max: 8 }),
            Self::Qr => Some(EntityLimits { min: 1, max: 2 }),
            Self::Media => Some(EntityLimits { min: 0, max: 8 }),
            Self::Alarm | Self::Thermostat => None,
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive entity-count bounds for one card kind on one model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityLimits {
    /// Minimum number of entities.
    pub min: usize,
    /// Maximum number of entities.
    pub max: usize,
}

impl EntityLimits {
    /// Returns true if `count` lies within the bounds.
    #[must_use]
    pub const fn contains(self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

/// Arming actions an alarm card can expose.
///
/// Disarming is always available and is not configured here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArmMode {
    /// Arm for staying home.
    ArmHome,
    /// Arm for leaving.
    ArmAway,
    /// Arm for the night.
    ArmNight,
    /// Arm for an extended absence.
    ArmVacation,
}

impl ArmMode {
    /// Returns the wire name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArmHome => "arm_home",
            Self::ArmAway => "arm_away",
            Self::ArmNight => "arm_night",
            Self::ArmVacation => "arm_vacation",
        }
    }

    /// Returns the button label shown on the panel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ArmHome => "Arm Home",
            Self::ArmAway => "Arm Away",
            Self::ArmNight => "Arm Night",
            Self::ArmVacation => "Arm Vacation",
        }
    }
}

impl std::fmt::Display for ArmMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon selection for an entity row or status slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IconSpec {
    /// Icon name, or a `hex:`-prefixed codepoint literal.
    #[serde(default)]
    pub value: Option<SmolStr>,
    /// 16-bit RGB565 display color.
    #[serde(default)]
    pub color: Option<u16>,
}

/// One entity slot on a card.
#[derive(Debug, Clone, Deserialize)]
pub struct CardEntity {
    /// Entity id, `delete`, or an `iText.` literal.
    pub entity_id: SmolStr,
    /// Display name override.
    #[serde(default)]
    pub name: Option<SmolStr>,
    /// Icon override.
    #[serde(default)]
    pub icon: Option<IconSpec>,
}

impl CardEntity {
    /// Creates an entity slot with no display name or icon override.
    #[must_use]
    pub fn new(entity_id: impl Into<SmolStr>) -> Self {
        Self {
            entity_id: entity_id.into(),
            name: None,
            icon: None,
        }
    }
}

/// Configuration for one card page.
#[derive(Debug, Clone, Deserialize)]
pub struct CardConfig {
    /// Card layout kind.
    #[serde(rename = "type")]
    pub kind: CardKind,
    /// User-supplied page id.
    #[serde(default)]
    pub id: Option<SmolStr>,
    /// Page title.
    #[serde(default)]
    pub title: SmolStr,
    /// Hidden cards are left out of the navigation ring.
    #[serde(default)]
    pub hidden: bool,
    /// Display timeout for this page in seconds.
    #[serde(default = "crate::panel::default_sleep_timeout")]
    pub sleep_timeout: u16,
    /// Entity slots.
    #[serde(default)]
    pub entities: Vec<CardEntity>,
    /// Text encoded by a qr card.
    #[serde(default)]
    pub qr_text: Option<SmolStr>,
    /// Alarm entity driven by an alarm card.
    #[serde(default)]
    pub alarm_entity_id: Option<SmolStr>,
    /// Arming actions offered by an alarm card, in button order.
    #[serde(default)]
    pub supported_modes: Vec<ArmMode>,
    /// Climate entity driven by a thermostat card.
    #[serde(default)]
    pub thermo_entity_id: Option<SmolStr>,
    /// Media player entity driven by a media card.
    #[serde(default)]
    pub media_entity_id: Option<SmolStr>,
}

impl CardConfig {
    /// Creates a card of the given kind with every optional field unset.
    #[must_use]
    pub fn new(kind: CardKind) -> Self {
        Self {
            kind,
            id: None,
            title: SmolStr::default(),
            hidden: false,
            sleep_timeout: DEFAULT_SLEEP_TIMEOUT,
            entities: Vec::new(),
            qr_text: None,
            alarm_entity_id: None,
            supported_modes: Vec::new(),
            thermo_entity_id: None,
            media_entity_id: None,
        }
    }
}
