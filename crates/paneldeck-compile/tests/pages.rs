//! Page construction: kinds, items, identifiers, and the screensaver.

mod common;
use common::*;

use paneldeck_compile::{DayNames, EntityBinding, Item, PageKind, ResolvedIcon, WEATHER_SLOTS};
use paneldeck_config::{DayOfWeekMap, IconSpec, Model, StatusIconConfig, Weekday};
use smol_str::SmolStr;

#[test]
fn test_weather_entity_generates_five_slots() {
    let mut config = panel(vec![entities_card(Some("main"), &["light.one"])]);
    let mut saver = screensaver(Some("scr"));
    saver.weather_entity_id = Some(SmolStr::new("weather.forecast_home"));
    config.screensaver = Some(saver);

    let graph = compile(&config);
    let saver = graph.screensaver.as_ref().unwrap();
    assert_eq!(saver.weather_entity_id.as_deref(), Some("weather.forecast_home"));
    assert_eq!(saver.items.len(), usize::from(WEATHER_SLOTS));
    for (index, item) in saver.items.iter().enumerate() {
        match item {
            Item::Weather { id, slot } => {
                assert_eq!(usize::from(*slot), index);
                assert!(id.starts_with("weather_"), "unexpected id {id}");
            }
            other => panic!("expected a weather item, got {other:?}"),
        }
    }

    // The weather entity is wired by id, not through the entity table.
    assert!(graph.entities.get("weather.forecast_home").is_none());
}

#[test]
fn test_screensaver_without_weather_has_no_items() {
    let mut config = panel(vec![entities_card(Some("main"), &["light.one"])]);
    config.screensaver = Some(screensaver(Some("scr")));

    let graph = compile(&config);
    assert!(graph.screensaver.as_ref().unwrap().items.is_empty());
}

#[test]
fn test_status_icon_defaults_to_alert_circle() {
    let mut config = panel(vec![entities_card(Some("main"), &["light.one"])]);
    let mut saver = screensaver(Some("scr"));
    saver.status_icon_left = Some(StatusIconConfig {
        entity_id: Some(SmolStr::new("sensor.door")),
        icon: None,
        alt_font: true,
    });
    config.screensaver = Some(saver);

    let graph = compile(&config);
    let saver = graph.screensaver.as_ref().unwrap();
    let left = saver.status_left.as_ref().unwrap();
    assert_eq!(left.icon, '\u{E027}');
    assert!(left.color.is_none());
    assert!(left.alt_font);
    let entity = left.entity.unwrap();
    assert_eq!(graph.entities.resolve(entity).unwrap(), "sensor.door");
    assert!(saver.status_right.is_none());
}

#[test]
fn test_status_icon_with_explicit_spec() {
    let mut config = panel(vec![entities_card(Some("main"), &["light.one"])]);
    let mut saver = screensaver(Some("scr"));
    saver.status_icon_right = Some(StatusIconConfig {
        entity_id: Some(SmolStr::new("light.porch")),
        icon: Some(IconSpec {
            value: Some(SmolStr::new("lightbulb")),
            color: Some(0xF800),
        }),
        alt_font: false,
    });
    config.screensaver = Some(saver);

    let graph = compile(&config);
    let right = graph.screensaver.as_ref().unwrap().status_right.as_ref().unwrap();
    assert_eq!(right.icon, '\u{E335}');
    assert_eq!(right.color, Some(0xF800));
    assert!(!right.alt_font);
}

#[test]
fn test_qr_card_carries_its_text() {
    let mut card = entities_card(Some("guest"), &["light.one"]);
    card.kind = CardKind::Qr;
    card.qr_text = Some(SmolStr::new("WIFI:S:guests;P:hunter2;;"));

    let graph = compile(&panel(vec![card]));
    let page = graph.page("guest").unwrap();
    assert_eq!(
        page.kind,
        PageKind::Qr {
            text: Some(SmolStr::new("WIFI:S:guests;P:hunter2;;"))
        }
    );
}

#[test]
fn test_alarm_card_derives_button_ids() {
    let card = alarm_card(
        Some("alarm"),
        "alarm_control_panel.home",
        &[ArmMode::ArmHome, ArmMode::ArmAway, ArmMode::ArmNight],
    );
    let graph = compile(&panel(vec![card]));

    let page = graph.page("alarm").unwrap();
    match &page.kind {
        PageKind::Alarm { entity, modes } => {
            assert_eq!(graph.entities.resolve(*entity).unwrap(), "alarm_control_panel.home");
            assert_eq!(modes, &[ArmMode::ArmHome, ArmMode::ArmAway, ArmMode::ArmNight]);
        }
        other => panic!("expected an alarm page, got {other:?}"),
    }

    let ids: Vec<&str> = page.items.iter().map(|item| item.id().as_str()).collect();
    assert_eq!(ids, vec!["alarm_arm_home", "alarm_arm_away", "alarm_arm_night"]);
    assert!(matches!(
        page.items[2],
        Item::AlarmButton { mode: ArmMode::ArmNight, .. }
    ));
}

#[test]
fn test_thermostat_page_has_no_items() {
    let mut card = CardConfig::new(CardKind::Thermostat);
    card.id = Some(SmolStr::new("heat"));
    card.thermo_entity_id = Some(SmolStr::new("climate.living_room"));

    let graph = compile(&panel(vec![card]));
    let page = graph.page("heat").unwrap();
    assert!(page.items.is_empty());
    match &page.kind {
        PageKind::Thermostat { entity } => {
            assert_eq!(graph.entities.resolve(*entity).unwrap(), "climate.living_room");
        }
        other => panic!("expected a thermostat page, got {other:?}"),
    }
}

#[test]
fn test_media_card_allows_empty_entity_list() {
    let mut card = CardConfig::new(CardKind::Media);
    card.id = Some(SmolStr::new("player"));
    card.media_entity_id = Some(SmolStr::new("media_player.kitchen"));

    let graph = compile(&panel(vec![card]));
    let page = graph.page("player").unwrap();
    assert!(page.items.is_empty());
    assert!(matches!(page.kind, PageKind::Media { .. }));
}

#[test]
fn test_grid2_keeps_its_kind() {
    let mut card = entities_card(Some("tiles"), &["light.one", "light.two"]);
    card.kind = CardKind::Grid2;

    let graph = compile(&panel(vec![card]));
    let page = graph.page("tiles").unwrap();
    assert_eq!(page.kind, PageKind::Grid2);
    assert_eq!(page.kind.card_kind(), CardKind::Grid2);
    assert_eq!(page.items.len(), 2);
}

#[test]
fn test_delete_and_text_slots() {
    let card = entities_card(Some("mixed"), &["delete", "iText.Back soon", "light.one"]);
    let graph = compile(&panel(vec![card]));

    let page = graph.page("mixed").unwrap();
    assert_eq!(page.items.len(), 3);
    assert!(matches!(page.items[0], Item::Delete { .. }));
    match &page.items[1] {
        Item::Entity { binding: EntityBinding::Text(text), .. } => {
            assert_eq!(text, "Back soon");
        }
        other => panic!("expected a text item, got {other:?}"),
    }
    match &page.items[2] {
        Item::Entity { binding: EntityBinding::Entity(symbol), .. } => {
            assert_eq!(graph.entities.resolve(*symbol).unwrap(), "light.one");
        }
        other => panic!("expected an entity item, got {other:?}"),
    }

    // Placeholders and inline text never reach the entity table.
    assert_eq!(graph.entities.len(), 1);
    assert!(graph.entities.get("delete").is_none());
}

#[test]
fn test_item_icons_resolve_by_name_and_hex() {
    let mut card = entities_card(Some("icons"), &[]);
    card.entities = vec![
        CardEntity {
            entity_id: SmolStr::new("light.one"),
            name: Some(SmolStr::new("Lamp")),
            icon: Some(IconSpec {
                value: Some(SmolStr::new("lightbulb")),
                color: None,
            }),
        },
        CardEntity {
            entity_id: SmolStr::new("light.two"),
            name: None,
            icon: Some(IconSpec {
                value: Some(SmolStr::new("hex:E335")),
                color: Some(31),
            }),
        },
        CardEntity {
            entity_id: SmolStr::new("light.three"),
            name: None,
            icon: Some(IconSpec {
                value: None,
                color: Some(2016),
            }),
        },
    ];

    let graph = compile(&panel(vec![card]));
    let page = graph.page("icons").unwrap();

    let icon = |index: usize| match &page.items[index] {
        Item::Entity { icon, .. } => icon.clone(),
        other => panic!("expected an entity item, got {other:?}"),
    };
    assert_eq!(icon(0), Some(ResolvedIcon { codepoint: Some('\u{E335}'), color: None }));
    assert_eq!(icon(1), Some(ResolvedIcon { codepoint: Some('\u{E335}'), color: Some(31) }));
    // A color-only override keeps the runtime's default glyph.
    assert_eq!(icon(2), Some(ResolvedIcon { codepoint: None, color: Some(2016) }));

    match &page.items[0] {
        Item::Entity { name, .. } => assert_eq!(name.as_deref(), Some("Lamp")),
        other => panic!("expected an entity item, got {other:?}"),
    }
}

#[test]
fn test_day_of_week_overrides_in_calendar_order() {
    let mut config = panel(vec![entities_card(Some("main"), &["light.one"])]);
    config.locale.day_of_week_map = DayOfWeekMap {
        wednesday: vec![SmolStr::new("Mit"), SmolStr::new("Mittwoch")],
        sunday: vec![SmolStr::new("Son"), SmolStr::new("Sonntag")],
        ..DayOfWeekMap::default()
    };

    let graph = compile(&config);
    assert_eq!(
        graph.day_of_week,
        vec![
            (
                Weekday::Sunday,
                DayNames { short: SmolStr::new("Son"), long: SmolStr::new("Sonntag") }
            ),
            (
                Weekday::Wednesday,
                DayNames { short: SmolStr::new("Mit"), long: SmolStr::new("Mittwoch") }
            ),
        ]
    );
}

#[test]
fn test_model_and_timeouts_carry_over() {
    let mut card = entities_card(Some("main"), &["light.one"]);
    card.title = SmolStr::new("Lights");
    card.sleep_timeout = 300;
    let mut config = panel(vec![card]);
    config.model = Model::UsPortrait;
    config.sleep_timeout = 120;

    let graph = compile(&config);
    assert_eq!(graph.model, Model::UsPortrait);
    assert_eq!(graph.sleep_timeout, 120);
    let page = graph.page("main").unwrap();
    assert_eq!(page.title, "Lights");
    assert_eq!(page.sleep_timeout, 300);
}

#[test]
fn test_missing_ids_are_generated_in_declaration_order() {
    let mut config = panel(vec![
        entities_card(None, &["light.one"]),
        entities_card(None, &["light.two"]),
    ]);
    config.screensaver = Some(screensaver(None));

    let graph = compile(&config);
    assert_eq!(graph.screensaver.as_ref().unwrap().id, "screensaver_1");
    let ids: Vec<&str> = graph.pages.iter().map(|page| page.id.as_str()).collect();
    assert_eq!(ids, vec!["page_2", "page_3"]);
}

#[test]
fn test_generated_ids_skip_user_supplied_ones() {
    let config = panel(vec![
        entities_card(Some("page_2"), &["light.one"]),
        entities_card(None, &["light.two"]),
        entities_card(None, &["light.three"]),
    ]);

    let graph = compile(&config);
    let ids: Vec<&str> = graph.pages.iter().map(|page| page.id.as_str()).collect();
    assert_eq!(ids, vec!["page_2", "page_1", "page_3"]);
}
