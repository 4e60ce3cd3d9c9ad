//! The directive vocabulary.

use paneldeck_compile::{EntitySymbol, Item, NavLink, StatusIcon};
use paneldeck_config::{CardKind, Weekday};
use smol_str::SmolStr;

/// One instruction for a backend building the panel UI.
///
/// Directives reference pages by identifier and entities by their interned
/// symbol; [`DefineEntity`](Self::DefineEntity) binds each symbol to its
/// entity id before any page directive uses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Binds an interned entity symbol to its entity id.
    DefineEntity {
        /// The interned symbol.
        symbol: EntitySymbol,
        /// The entity id the symbol stands for.
        entity_id: SmolStr,
    },

    /// Sets the device-wide display timeout.
    SetSleepTimeout {
        /// Timeout in seconds.
        seconds: u16,
    },

    /// Overrides the display names of one weekday.
    SetDayOfWeek {
        /// The day being overridden.
        day: Weekday,
        /// Abbreviated name.
        short: SmolStr,
        /// Full name.
        long: SmolStr,
    },

    /// Creates the screensaver page.
    CreateScreensaver {
        /// Page identifier.
        id: SmolStr,
    },

    /// Sets the screensaver's date line format.
    SetDateFormat {
        /// strftime pattern.
        format: SmolStr,
    },

    /// Sets the screensaver's clock format.
    SetTimeFormat {
        /// strftime pattern.
        format: SmolStr,
    },

    /// Binds the screensaver's forecast row to a weather entity.
    SetWeatherEntity {
        /// The weather entity id.
        entity_id: SmolStr,
    },

    /// Places the screensaver's status icon slots.
    SetStatusIcons {
        /// The screensaver page.
        page: SmolStr,
        /// Left slot.
        left: Option<StatusIcon>,
        /// Right slot.
        right: Option<StatusIcon>,
    },

    /// Creates a card page. Precedes every other directive that
    /// references the page.
    CreatePage {
        /// Page identifier.
        id: SmolStr,
        /// Card kind the backend instantiates.
        kind: CardKind,
        /// Display title.
        title: SmolStr,
        /// Display timeout for this page in seconds.
        sleep_timeout: u16,
        /// Primary entity of alarm, thermostat, and media pages.
        primary: Option<EntitySymbol>,
    },

    /// Removes a page from the navigation ring.
    SetHidden {
        /// The page.
        page: SmolStr,
        /// Whether the page is hidden.
        hidden: bool,
    },

    /// Overrides how an already created page is rendered.
    SetRenderType {
        /// The page.
        page: SmolStr,
        /// The kind to render as.
        kind: CardKind,
    },

    /// Sets the text a qr page encodes.
    SetQrText {
        /// The page.
        page: SmolStr,
        /// The encoded text.
        text: SmolStr,
    },

    /// Places a page's left navigation control.
    SetNavLeft {
        /// The page.
        page: SmolStr,
        /// The control.
        link: NavLink,
    },

    /// Places a page's right navigation control.
    SetNavRight {
        /// The page.
        page: SmolStr,
        /// The control.
        link: NavLink,
    },

    /// Attaches one item to a page.
    AttachItem {
        /// The page.
        page: SmolStr,
        /// The item.
        item: Item,
    },
}
