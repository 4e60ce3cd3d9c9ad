//! Configuration validation.
//!
//! All rules run over the whole configuration and every violation is
//! collected before the result is decided, so a single compile reports
//! everything that is wrong. Two side effects ride along with the rule
//! walk because they must observe configuration order: entity references
//! are interned as they are first seen, and page identifiers are assigned
//! (user-supplied or allocated) so navigation targets can be checked
//! against generated ids too.

use paneldeck_config::{
    is_valid_ident, CardConfig, CardKind, EntityDomain, EntityRef, IconSpec, Model, PanelConfig,
    ScreensaverConfig, StatusIconConfig, CLOCK_FORMAT_MAX_LEN, CLOCK_FORMAT_MIN_LEN,
    MAX_IDENT_LEN, SLEEP_TIMEOUT_MAX, SLEEP_TIMEOUT_MIN,
};
use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticBuilder, DiagnosticCode, FieldPath};
use crate::icons::IconLibrary;
use crate::intern::EntityTable;
use crate::uid::UidAllocator;

/// Entity types a screensaver status icon may observe.
const STATUS_ICON_DOMAINS: &[EntityDomain] = &[
    EntityDomain::Sensor,
    EntityDomain::BinarySensor,
    EntityDomain::Light,
];
const WEATHER_DOMAINS: &[EntityDomain] = &[EntityDomain::Weather];
const ALARM_DOMAINS: &[EntityDomain] = &[EntityDomain::AlarmControlPanel];
const THERMOSTAT_DOMAINS: &[EntityDomain] = &[EntityDomain::Climate];
const MEDIA_DOMAINS: &[EntityDomain] = &[EntityDomain::MediaPlayer];

/// Number of distinct alarm arming actions.
const ARM_MODE_COUNT: usize = 4;

/// A configuration that passed every validation rule.
///
/// Produced by [`Validator::validate`] and consumed by the graph builder.
#[derive(Debug)]
pub struct ValidatedPanel<'a> {
    /// The validated input.
    pub config: &'a PanelConfig,
    /// Identifier of the screensaver page, if one is configured.
    pub screensaver_id: Option<SmolStr>,
    /// Identifier of every card, in configuration order.
    pub card_ids: Vec<SmolStr>,
    /// Every distinct entity reference, in first-seen order.
    pub entities: EntityTable,
    /// Allocator carried into graph construction, with all page ids
    /// reserved or consumed.
    pub alloc: UidAllocator,
}

/// Checks a configuration against every rule, collecting all violations.
#[derive(Debug)]
pub struct Validator<'a> {
    icons: &'a IconLibrary,
    diagnostics: DiagnosticBuilder,
    entities: EntityTable,
    alloc: UidAllocator,
    /// `navigate.<target>` references found in card entity lists, checked
    /// once all page identifiers are known.
    navigation_refs: Vec<(FieldPath, SmolStr)>,
}

impl<'a> Validator<'a> {
    /// Creates a validator resolving icons against the given library.
    #[must_use]
    pub fn new(icons: &'a IconLibrary) -> Self {
        Self {
            icons,
            diagnostics: DiagnosticBuilder::new(),
            entities: EntityTable::new(),
            alloc: UidAllocator::new(),
            navigation_refs: Vec::new(),
        }
    }

    /// Runs every rule over the configuration.
    ///
    /// # Errors
    ///
    /// Returns every violation found, in configuration order.
    pub fn validate(mut self, config: &'a PanelConfig) -> Result<ValidatedPanel<'a>, Vec<Diagnostic>> {
        self.check_global(config);
        if let Some(screensaver) = &config.screensaver {
            self.check_screensaver(screensaver);
        }
        for (index, card) in config.cards.iter().enumerate() {
            self.check_card(config.model, index, card);
        }

        // Page ids are assigned before the cross-reference check so a
        // navigation item can target a card that never declared one.
        let (screensaver_id, card_ids) = self.assign_page_ids(config);
        self.check_navigation_targets(&card_ids);

        if self.diagnostics.has_errors() {
            return Err(self.diagnostics.finish());
        }
        debug!(
            cards = card_ids.len(),
            entities = self.entities.len(),
            "configuration validated"
        );
        Ok(ValidatedPanel {
            config,
            screensaver_id,
            card_ids,
            entities: self.entities,
            alloc: self.alloc,
        })
    }

    fn check_global(&mut self, config: &PanelConfig) {
        self.check_sleep_timeout(FieldPath::root("sleep_timeout"), config.sleep_timeout);
        for (day, names) in config.locale.day_of_week_map.iter() {
            if names.is_empty() || names.len() == 2 {
                continue;
            }
            self.diagnostics.error(
                DiagnosticCode::DayNameArity,
                FieldPath::root("locale").key("day_of_week_map").key(day.as_str()),
                format!("expected [short, long] names, got {} entries", names.len()),
            );
        }
    }

    fn check_screensaver(&mut self, config: &ScreensaverConfig) {
        let path = FieldPath::root("screensaver");
        if let Some(id) = &config.id {
            self.check_page_id(&path.key("id"), id);
        }
        self.check_clock_format(path.key("date_format"), &config.date_format);
        self.check_clock_format(path.key("time_format"), &config.time_format);
        if let Some(entity_id) = &config.weather_entity_id {
            // Checked but not interned; the weather entity is carried as a
            // plain reference.
            self.check_entity(&path.key("weather_entity_id"), entity_id, Some(WEATHER_DOMAINS));
        }
        self.check_status_icon(&path.key("status_icon_left"), config.status_icon_left.as_ref());
        self.check_status_icon(&path.key("status_icon_right"), config.status_icon_right.as_ref());
    }

    fn check_status_icon(&mut self, path: &FieldPath, config: Option<&StatusIconConfig>) {
        let Some(config) = config else { return };
        if let Some(entity_id) = &config.entity_id {
            if self
                .check_entity(&path.key("entity_id"), entity_id, Some(STATUS_ICON_DOMAINS))
                .is_some()
            {
                self.entities.intern(entity_id);
            }
        }
        self.check_icon(&path.key("icon"), config.icon.as_ref());
    }

    fn check_card(&mut self, model: Model, index: usize, card: &CardConfig) {
        let path = FieldPath::root("cards").index(index);
        if let Some(id) = &card.id {
            self.check_page_id(&path.key("id"), id);
        }
        self.check_sleep_timeout(path.key("sleep_timeout"), card.sleep_timeout);

        let count = card.entities.len();
        match card.kind.entity_limits(model) {
            Some(limits) if !limits.contains(count) => {
                self.diagnostics.error(
                    if count < limits.min {
                        DiagnosticCode::TooFewEntities
                    } else {
                        DiagnosticCode::TooManyEntities
                    },
                    path.key("entities"),
                    format!(
                        "'{}' cards take between {} and {} entities on model '{model}', got {count}",
                        card.kind, limits.min, limits.max
                    ),
                );
            }
            Some(_) => {}
            None => {
                if count > 0 {
                    self.diagnostics.error(
                        DiagnosticCode::EntitiesNotAllowed,
                        path.key("entities"),
                        format!("'{}' cards do not take an entities list", card.kind),
                    );
                }
            }
        }

        match card.kind {
            CardKind::Alarm => {
                self.check_primary(
                    path.key("alarm_entity_id"),
                    card.alarm_entity_id.as_deref(),
                    ALARM_DOMAINS,
                    "alarm_entity_id",
                );
                self.check_arm_modes(&path, card);
            }
            CardKind::Thermostat => {
                self.check_primary(
                    path.key("thermo_entity_id"),
                    card.thermo_entity_id.as_deref(),
                    THERMOSTAT_DOMAINS,
                    "thermo_entity_id",
                );
            }
            CardKind::Media => {
                self.check_primary(
                    path.key("media_entity_id"),
                    card.media_entity_id.as_deref(),
                    MEDIA_DOMAINS,
                    "media_entity_id",
                );
            }
            CardKind::Entities | CardKind::Grid | CardKind::Grid2 | CardKind::Qr => {}
        }

        for (slot, entity) in card.entities.iter().enumerate() {
            let entity_path = path.key("entities").index(slot);
            let id_path = entity_path.key("entity_id");
            if let Some(EntityRef::Entity { domain, name }) =
                self.check_entity(&id_path, &entity.entity_id, None)
            {
                self.entities.intern(&entity.entity_id);
                if domain == EntityDomain::Navigate {
                    self.navigation_refs.push((id_path, name));
                }
            }
            self.check_icon(&entity_path.key("icon"), entity.icon.as_ref());
        }
    }

    fn check_arm_modes(&mut self, card_path: &FieldPath, card: &CardConfig) {
        let path = card_path.key("supported_modes");
        let count = card.supported_modes.len();
        if count == 0 || count > ARM_MODE_COUNT {
            self.diagnostics.error(
                DiagnosticCode::ArmModeCount,
                path.clone(),
                format!("supported_modes must name 1 to {ARM_MODE_COUNT} modes, got {count}"),
            );
        }
        let mut seen = FxHashSet::default();
        for &mode in &card.supported_modes {
            if !seen.insert(mode) {
                self.diagnostics.error(
                    DiagnosticCode::DuplicateArmMode,
                    path.clone(),
                    format!("mode '{mode}' appears more than once"),
                );
            }
        }
    }

    /// Checks a required single-entity field and interns it when valid.
    fn check_primary(
        &mut self,
        path: FieldPath,
        value: Option<&str>,
        allowed: &[EntityDomain],
        field: &str,
    ) {
        match value {
            Some(entity_id) => {
                if self.check_entity(&path, entity_id, Some(allowed)).is_some() {
                    self.entities.intern(entity_id);
                }
            }
            None => {
                self.diagnostics.error(
                    DiagnosticCode::MissingEntity,
                    path,
                    format!("{field} is required"),
                );
            }
        }
    }

    /// Parses an entity reference and, when `allowed` is given, requires a
    /// concrete entity from that domain set. Returns `None` after reporting
    /// a diagnostic.
    fn check_entity(
        &mut self,
        path: &FieldPath,
        value: &str,
        allowed: Option<&[EntityDomain]>,
    ) -> Option<EntityRef> {
        let parsed = match EntityRef::parse(value) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.diagnostics
                    .error(DiagnosticCode::InvalidEntityRef, path.clone(), err.to_string());
                return None;
            }
        };
        let Some(allowed) = allowed else {
            return Some(parsed);
        };
        if matches!(&parsed, EntityRef::Entity { domain, .. } if allowed.contains(domain)) {
            return Some(parsed);
        }
        let found = match &parsed {
            EntityRef::Entity { domain, .. } => domain.as_str(),
            EntityRef::Delete => EntityRef::DELETE,
            EntityRef::Text(_) => "iText",
        };
        self.diagnostics.error(
            DiagnosticCode::WrongEntityDomain,
            path.clone(),
            format!(
                "entity type '{found}' is not allowed here (expected {})",
                domain_list(allowed)
            ),
        );
        None
    }

    fn check_icon(&mut self, path: &FieldPath, icon: Option<&IconSpec>) {
        let Some(value) = icon.and_then(|spec| spec.value.as_ref()) else {
            return;
        };
        if self.icons.resolve(value).is_none() {
            self.diagnostics.error(
                DiagnosticCode::UnknownIcon,
                path.key("value"),
                format!("icon '{value}' is not in the icon library"),
            );
        }
    }

    fn check_page_id(&mut self, path: &FieldPath, id: &str) {
        if !is_valid_ident(id) {
            self.diagnostics.error(
                DiagnosticCode::InvalidIdentifier,
                path.clone(),
                format!(
                    "identifier '{id}' must be 1 to {MAX_IDENT_LEN} word characters \
                     ending in a letter or digit"
                ),
            );
            return;
        }
        if !self.alloc.reserve(id) {
            self.diagnostics.error(
                DiagnosticCode::DuplicatePageId,
                path.clone(),
                format!("page identifier '{id}' is used more than once"),
            );
        }
    }

    fn check_sleep_timeout(&mut self, path: FieldPath, value: u16) {
        if !(SLEEP_TIMEOUT_MIN..=SLEEP_TIMEOUT_MAX).contains(&value) {
            self.diagnostics.error(
                DiagnosticCode::SleepTimeoutOutOfRange,
                path,
                format!(
                    "sleep timeout must be between {SLEEP_TIMEOUT_MIN} and \
                     {SLEEP_TIMEOUT_MAX} seconds, got {value}"
                ),
            );
        }
    }

    fn check_clock_format(&mut self, path: FieldPath, value: &str) {
        let len = value.chars().count();
        if !(CLOCK_FORMAT_MIN_LEN..=CLOCK_FORMAT_MAX_LEN).contains(&len) {
            self.diagnostics.error(
                DiagnosticCode::ClockFormatLength,
                path,
                format!(
                    "format string must be {CLOCK_FORMAT_MIN_LEN} to \
                     {CLOCK_FORMAT_MAX_LEN} characters, got {len}"
                ),
            );
        }
    }

    fn assign_page_ids(&mut self, config: &PanelConfig) -> (Option<SmolStr>, Vec<SmolStr>) {
        let screensaver_id = config.screensaver.as_ref().map(|screensaver| {
            screensaver
                .id
                .clone()
                .unwrap_or_else(|| self.alloc.next("screensaver_"))
        });
        let card_ids = config
            .cards
            .iter()
            .map(|card| card.id.clone().unwrap_or_else(|| self.alloc.next("page_")))
            .collect();
        (screensaver_id, card_ids)
    }

    fn check_navigation_targets(&mut self, card_ids: &[SmolStr]) {
        if self.navigation_refs.is_empty() {
            return;
        }
        let known: FxHashSet<&str> = card_ids.iter().map(SmolStr::as_str).collect();
        for (path, target) in std::mem::take(&mut self.navigation_refs) {
            if !known.contains(target.as_str()) {
                self.diagnostics.error(
                    DiagnosticCode::UnknownNavigationTarget,
                    path,
                    format!("no card has identifier '{target}'"),
                );
            }
        }
    }
}

fn domain_list(domains: &[EntityDomain]) -> String {
    domains
        .iter()
        .map(|domain| domain.as_str())
        .collect::<Vec<_>>()
        .join(" or ")
}
