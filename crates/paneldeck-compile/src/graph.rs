//! The compiled page graph.
//!
//! Output of a successful compile: every identifier assigned, every icon
//! resolved to a codepoint, every entity reference interned, and all
//! navigation links wired. The graph is plain data; `paneldeck-emit`
//! walks it into an ordered directive stream.

use paneldeck_config::{ArmMode, CardKind, Model, Weekday};
use smol_str::SmolStr;

use crate::intern::{EntitySymbol, EntityTable};

/// Number of generated screensaver weather slots: one current-conditions
/// slot plus four forecast slots.
pub const WEATHER_SLOTS: u8 = 5;

/// Fully resolved output of one compile.
#[derive(Debug)]
pub struct PageGraph {
    /// Hardware model the layout was checked against.
    pub model: Model,
    /// Device-wide display timeout in seconds.
    pub sleep_timeout: u16,
    /// Weekday display overrides, in calendar order.
    pub day_of_week: Vec<(Weekday, DayNames)>,
    /// The always-first screensaver page, if configured.
    pub screensaver: Option<Screensaver>,
    /// Card pages in configuration order.
    pub pages: Vec<Page>,
    /// Every distinct entity reference, in first-seen order.
    pub entities: EntityTable,
}

impl PageGraph {
    /// Finds a card page by identifier.
    #[must_use]
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    /// Iterates the non-hidden card pages in ring order.
    pub fn visible_pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter().filter(|page| !page.hidden)
    }
}

/// Short and long display names for one weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayNames {
    /// Abbreviated name, e.g. "Sun".
    pub short: SmolStr,
    /// Full name, e.g. "Sunday".
    pub long: SmolStr,
}

/// The screensaver page.
#[derive(Debug)]
pub struct Screensaver {
    /// Page identifier.
    pub id: SmolStr,
    /// strftime pattern for the date line.
    pub date_format: SmolStr,
    /// strftime pattern for the clock.
    pub time_format: SmolStr,
    /// Weather entity backing the forecast row. Carried as a plain
    /// reference; it is not part of the entity table.
    pub weather_entity_id: Option<SmolStr>,
    /// Left status icon slot.
    pub status_left: Option<StatusIcon>,
    /// Right status icon slot.
    pub status_right: Option<StatusIcon>,
    /// Generated weather items; empty unless a weather entity is set.
    pub items: Vec<Item>,
}

/// A screensaver status icon slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIcon {
    /// Item identifier.
    pub id: SmolStr,
    /// Entity whose state drives the icon, if any.
    pub entity: Option<EntitySymbol>,
    /// Resolved display codepoint.
    pub icon: char,
    /// 16-bit display color.
    pub color: Option<u16>,
    /// Render with the smaller status font.
    pub alt_font: bool,
}

/// One navigable page built from a card.
#[derive(Debug)]
pub struct Page {
    /// Page identifier, user-supplied or generated.
    pub id: SmolStr,
    /// Kind payload.
    pub kind: PageKind,
    /// Display title.
    pub title: SmolStr,
    /// Display timeout for this page in seconds.
    pub sleep_timeout: u16,
    /// Hidden pages are reachable only through navigation items.
    pub hidden: bool,
    /// Items in configuration order.
    pub items: Vec<Item>,
    /// Left navigation control. Holds the home link on hidden pages.
    pub nav_left: Option<NavLink>,
    /// Right navigation control. Never set on hidden pages.
    pub nav_right: Option<NavLink>,
}

/// Per-kind page payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageKind {
    /// Scrolling list of entity rows.
    Entities,
    /// Icon grid.
    Grid,
    /// Icon grid rendered with the two-line tile override.
    Grid2,
    /// QR code page.
    Qr {
        /// Text encoded into the QR code.
        text: Option<SmolStr>,
    },
    /// Alarm control page.
    Alarm {
        /// The alarm entity.
        entity: EntitySymbol,
        /// Arming actions in button order.
        modes: Vec<ArmMode>,
    },
    /// Thermostat page. The climate entity rides here; the page has no
    /// items.
    Thermostat {
        /// The climate entity.
        entity: EntitySymbol,
    },
    /// Media player page.
    Media {
        /// The media player entity.
        entity: EntitySymbol,
    },
}

impl PageKind {
    /// Returns the card kind this payload was built from.
    #[must_use]
    pub fn card_kind(&self) -> CardKind {
        match self {
            Self::Entities => CardKind::Entities,
            Self::Grid => CardKind::Grid,
            Self::Grid2 => CardKind::Grid2,
            Self::Qr { .. } => CardKind::Qr,
            Self::Alarm { .. } => CardKind::Alarm,
            Self::Thermostat { .. } => CardKind::Thermostat,
            Self::Media { .. } => CardKind::Media,
        }
    }
}

/// A left, right, or home navigation control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Item identifier.
    pub id: SmolStr,
    /// Identifier of the page this control navigates to.
    pub target: SmolStr,
    /// Resolved display codepoint.
    pub icon: char,
}

/// A renderable unit placed on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// A row bound to an entity or to inline text.
    Entity {
        /// Item identifier.
        id: SmolStr,
        /// What the row is bound to.
        binding: EntityBinding,
        /// Display name override.
        name: Option<SmolStr>,
        /// Icon override.
        icon: Option<ResolvedIcon>,
    },
    /// A placeholder slot that renders nothing.
    Delete {
        /// Item identifier.
        id: SmolStr,
    },
    /// A generated screensaver weather slot.
    Weather {
        /// Item identifier.
        id: SmolStr,
        /// Slot position: 0 is current conditions, 1-4 are the forecast.
        slot: u8,
    },
    /// An alarm arming button.
    AlarmButton {
        /// Item identifier, derived from the page id and mode.
        id: SmolStr,
        /// The arming action this button triggers.
        mode: ArmMode,
    },
}

impl Item {
    /// Returns the item's identifier.
    #[must_use]
    pub fn id(&self) -> &SmolStr {
        match self {
            Self::Entity { id, .. }
            | Self::Delete { id }
            | Self::Weather { id, .. }
            | Self::AlarmButton { id, .. } => id,
        }
    }
}

/// What an entity item is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityBinding {
    /// An interned entity reference.
    Entity(EntitySymbol),
    /// Inline static text, exempt from interning.
    Text(SmolStr),
}

/// An icon override resolved against the icon library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedIcon {
    /// Explicit codepoint, when the configuration names an icon.
    pub codepoint: Option<char>,
    /// 16-bit display color.
    pub color: Option<u16>,
}
