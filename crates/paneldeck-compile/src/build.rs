//! Page graph construction.
//!
//! Runs only on a [`ValidatedPanel`], so every rule has already passed;
//! the builder's own error path is limited to icon-library gaps for the
//! built-in default icons.

use paneldeck_config::{
    CardConfig, CardKind, EntityRef, IconSpec, PanelConfig, ScreensaverConfig, StatusIconConfig,
};
use smol_str::SmolStr;
use tracing::debug;

use crate::diagnostics::FieldPath;
use crate::error::CompileError;
use crate::graph::{
    DayNames, EntityBinding, Item, NavLink, Page, PageGraph, PageKind, ResolvedIcon, Screensaver,
    StatusIcon, WEATHER_SLOTS,
};
use crate::icons::{
    IconLibrary, DEFAULT_STATUS_ICON, NAV_HOME_ICON, NAV_LEFT_ICON, NAV_RIGHT_ICON,
};
use crate::intern::{EntitySymbol, EntityTable};
use crate::uid::UidAllocator;
use crate::validate::ValidatedPanel;

pub(crate) struct GraphBuilder<'a> {
    icons: &'a IconLibrary,
    config: &'a PanelConfig,
    screensaver_id: Option<SmolStr>,
    card_ids: Vec<SmolStr>,
    entities: EntityTable,
    alloc: UidAllocator,
}

impl<'a> GraphBuilder<'a> {
    pub(crate) fn new(icons: &'a IconLibrary, validated: ValidatedPanel<'a>) -> Self {
        let ValidatedPanel {
            config,
            screensaver_id,
            card_ids,
            entities,
            alloc,
        } = validated;
        Self {
            icons,
            config,
            screensaver_id,
            card_ids,
            entities,
            alloc,
        }
    }

    pub(crate) fn build(mut self) -> Result<PageGraph, CompileError> {
        let config = self.config;
        let card_ids = std::mem::take(&mut self.card_ids);

        let screensaver = match (&config.screensaver, self.screensaver_id.take()) {
            (Some(screensaver), Some(id)) => Some(self.build_screensaver(screensaver, id)?),
            _ => None,
        };

        // The ring covers visible cards only, in configuration order.
        let visible: Vec<SmolStr> = config
            .cards
            .iter()
            .zip(&card_ids)
            .filter(|(card, _)| !card.hidden)
            .map(|(_, id)| id.clone())
            .collect();
        let ring = visible.len();

        let mut pages = Vec::with_capacity(config.cards.len());
        let mut cursor = 0usize;
        for (index, (card, id)) in config.cards.iter().zip(&card_ids).enumerate() {
            let mut page = self.build_page(index, card, id.clone())?;
            if card.hidden {
                page.nav_left = self.home_link(index, screensaver.as_ref(), &visible)?;
            } else {
                let prev = visible[(cursor + ring - 1) % ring].clone();
                let next = visible[(cursor + 1) % ring].clone();
                page.nav_left = Some(self.nav_link(index, prev, NAV_LEFT_ICON)?);
                page.nav_right = Some(self.nav_link(index, next, NAV_RIGHT_ICON)?);
                cursor += 1;
            }
            pages.push(page);
        }

        let day_of_week = config
            .locale
            .day_of_week_map
            .iter()
            .filter_map(|(day, names)| match names {
                [short, long] => Some((
                    day,
                    DayNames {
                        short: short.clone(),
                        long: long.clone(),
                    },
                )),
                _ => None,
            })
            .collect();

        debug!(
            pages = pages.len(),
            visible = ring,
            entities = self.entities.len(),
            "page graph built"
        );
        Ok(PageGraph {
            model: config.model,
            sleep_timeout: config.sleep_timeout,
            day_of_week,
            screensaver,
            pages,
            entities: self.entities,
        })
    }

    fn build_screensaver(
        &mut self,
        config: &ScreensaverConfig,
        id: SmolStr,
    ) -> Result<Screensaver, CompileError> {
        let path = FieldPath::root("screensaver");
        let status_left =
            self.status_icon(&path.key("status_icon_left"), config.status_icon_left.as_ref())?;
        let status_right =
            self.status_icon(&path.key("status_icon_right"), config.status_icon_right.as_ref())?;

        // One current-conditions slot plus four forecast slots, generated
        // only when a weather entity is configured.
        let mut items = Vec::new();
        if config.weather_entity_id.is_some() {
            for slot in 0..WEATHER_SLOTS {
                items.push(Item::Weather {
                    id: self.alloc.next("weather_"),
                    slot,
                });
            }
        }

        Ok(Screensaver {
            id,
            date_format: config.date_format.clone(),
            time_format: config.time_format.clone(),
            weather_entity_id: config.weather_entity_id.clone(),
            status_left,
            status_right,
            items,
        })
    }

    fn status_icon(
        &mut self,
        path: &FieldPath,
        config: Option<&StatusIconConfig>,
    ) -> Result<Option<StatusIcon>, CompileError> {
        let Some(config) = config else { return Ok(None) };
        let spec = config.icon.as_ref();
        let name = spec
            .and_then(|spec| spec.value.as_deref())
            .unwrap_or(DEFAULT_STATUS_ICON);
        let icon = self.resolve_icon(&path.key("icon").key("value"), name)?;
        let entity = config.entity_id.as_deref().map(|id| self.entities.intern(id));
        Ok(Some(StatusIcon {
            id: self.alloc.next("status_"),
            entity,
            icon,
            color: spec.and_then(|spec| spec.color),
            alt_font: config.alt_font,
        }))
    }

    fn build_page(
        &mut self,
        index: usize,
        card: &CardConfig,
        id: SmolStr,
    ) -> Result<Page, CompileError> {
        let kind = match card.kind {
            CardKind::Entities => PageKind::Entities,
            CardKind::Grid => PageKind::Grid,
            CardKind::Grid2 => PageKind::Grid2,
            CardKind::Qr => PageKind::Qr {
                text: card.qr_text.clone(),
            },
            CardKind::Alarm => PageKind::Alarm {
                entity: self.primary_symbol(card.alarm_entity_id.as_deref()),
                modes: card.supported_modes.clone(),
            },
            CardKind::Thermostat => PageKind::Thermostat {
                entity: self.primary_symbol(card.thermo_entity_id.as_deref()),
            },
            CardKind::Media => PageKind::Media {
                entity: self.primary_symbol(card.media_entity_id.as_deref()),
            },
        };

        let items = match card.kind {
            // Button ids are derived from the page id so the runtime can
            // route a press back to its page without a lookup table.
            CardKind::Alarm => card
                .supported_modes
                .iter()
                .map(|&mode| Item::AlarmButton {
                    id: SmolStr::new(format!("{id}_{}", mode.as_str())),
                    mode,
                })
                .collect(),
            CardKind::Thermostat => Vec::new(),
            _ => self.entity_items(index, card)?,
        };

        Ok(Page {
            id,
            kind,
            title: card.title.clone(),
            sleep_timeout: card.sleep_timeout,
            hidden: card.hidden,
            items,
            nav_left: None,
            nav_right: None,
        })
    }

    /// Validation guarantees the primary entity of alarm, thermostat, and
    /// media cards is present and already interned.
    fn primary_symbol(&mut self, entity_id: Option<&str>) -> EntitySymbol {
        self.entities.intern(entity_id.unwrap_or_default())
    }

    fn entity_items(&mut self, index: usize, card: &CardConfig) -> Result<Vec<Item>, CompileError> {
        let entities_path = FieldPath::root("cards").index(index).key("entities");
        let mut items = Vec::with_capacity(card.entities.len());
        for (slot, entity) in card.entities.iter().enumerate() {
            let id = self.alloc.next("item_");
            if entity.entity_id == EntityRef::DELETE {
                items.push(Item::Delete { id });
                continue;
            }
            let binding = match entity.entity_id.strip_prefix(EntityRef::TEXT_PREFIX) {
                Some(text) => EntityBinding::Text(SmolStr::new(text)),
                None => EntityBinding::Entity(self.entities.intern(&entity.entity_id)),
            };
            let icon =
                self.item_icon(&entities_path.index(slot).key("icon"), entity.icon.as_ref())?;
            items.push(Item::Entity {
                id,
                binding,
                name: entity.name.clone(),
                icon,
            });
        }
        Ok(items)
    }

    fn item_icon(
        &self,
        path: &FieldPath,
        spec: Option<&IconSpec>,
    ) -> Result<Option<ResolvedIcon>, CompileError> {
        let Some(spec) = spec else { return Ok(None) };
        let codepoint = match spec.value.as_deref() {
            Some(name) => Some(self.resolve_icon(&path.key("value"), name)?),
            None => None,
        };
        Ok(Some(ResolvedIcon {
            codepoint,
            color: spec.color,
        }))
    }

    fn nav_link(
        &mut self,
        index: usize,
        target: SmolStr,
        icon: &str,
    ) -> Result<NavLink, CompileError> {
        let icon = self.resolve_icon(&FieldPath::root("cards").index(index), icon)?;
        Ok(NavLink {
            id: self.alloc.next("nav_"),
            target,
            icon,
        })
    }

    fn home_link(
        &mut self,
        index: usize,
        screensaver: Option<&Screensaver>,
        visible: &[SmolStr],
    ) -> Result<Option<NavLink>, CompileError> {
        // Hidden pages link home to the screensaver, falling back to the
        // first visible card. With neither, the page gets no link.
        let target = screensaver
            .map(|screensaver| screensaver.id.clone())
            .or_else(|| visible.first().cloned());
        match target {
            Some(target) => Ok(Some(self.nav_link(index, target, NAV_HOME_ICON)?)),
            None => Ok(None),
        }
    }

    fn resolve_icon(&self, path: &FieldPath, name: &str) -> Result<char, CompileError> {
        self.icons
            .resolve(name)
            .ok_or_else(|| CompileError::UnresolvedIcon {
                path: path.clone(),
                name: SmolStr::new(name),
            })
    }
}
