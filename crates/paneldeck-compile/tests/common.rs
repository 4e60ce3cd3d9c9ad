//! Shared helpers for compiler tests.
#![allow(dead_code)]

use smol_str::SmolStr;

pub use paneldeck_compile::{
    CompileError, Compiler, Diagnostic, DiagnosticCode, IconLibrary, PageGraph,
};
pub use paneldeck_config::{
    ArmMode, CardConfig, CardEntity, CardKind, PanelConfig, ScreensaverConfig,
};

/// Icon table carrying the built-in defaults plus a few extras.
pub const ICON_TABLE: &str = r#"[
    {"name": "alert-circle-outline", "hex": "E027"},
    {"name": "arrow-left-bold", "hex": "E730"},
    {"name": "arrow-right-bold", "hex": "E734"},
    {"name": "home", "hex": "E2DC"},
    {"name": "lightbulb", "hex": "E335"},
    {"name": "thermometer", "hex": "E50F"},
    {"name": "weather-sunny", "hex": "E598"}
]"#;

pub fn compiler() -> Compiler {
    Compiler::new(IconLibrary::from_json(ICON_TABLE).unwrap())
}

/// Compiles a configuration that is expected to be valid.
pub fn compile(config: &PanelConfig) -> PageGraph {
    compiler().compile(config).expect("configuration should compile")
}

/// Compiles and returns the collected diagnostic codes, empty on success.
pub fn check_errors(config: &PanelConfig) -> Vec<DiagnosticCode> {
    match compiler().compile(config) {
        Ok(_) => Vec::new(),
        Err(CompileError::Validation(diagnostics)) => {
            diagnostics.iter().map(|diagnostic| diagnostic.code).collect()
        }
        Err(other) => panic!("expected validation errors, got: {other}"),
    }
}

pub fn check_has_error(config: &PanelConfig, expected: DiagnosticCode) {
    let errors = check_errors(config);
    assert!(errors.contains(&expected), "expected {expected:?} in {errors:?}");
}

pub fn panel(cards: Vec<CardConfig>) -> PanelConfig {
    PanelConfig {
        cards,
        ..PanelConfig::default()
    }
}

pub fn screensaver(id: Option<&str>) -> ScreensaverConfig {
    ScreensaverConfig {
        id: id.map(SmolStr::new),
        ..ScreensaverConfig::default()
    }
}

/// Entities card with the given id and entity list.
pub fn entities_card(id: Option<&str>, entity_ids: &[&str]) -> CardConfig {
    let mut card = CardConfig::new(CardKind::Entities);
    card.id = id.map(SmolStr::new);
    card.entities = entity_ids.iter().map(|id| CardEntity::new(*id)).collect();
    card
}

/// Alarm card with the given primary entity and modes.
pub fn alarm_card(id: Option<&str>, entity_id: &str, modes: &[ArmMode]) -> CardConfig {
    let mut card = CardConfig::new(CardKind::Alarm);
    card.id = id.map(SmolStr::new);
    card.alarm_entity_id = Some(SmolStr::new(entity_id));
    card.supported_modes = modes.to_vec();
    card
}
