//! Graph traversal and directive ordering.

use paneldeck_compile::{Page, PageGraph, PageKind, Screensaver};
use paneldeck_config::CardKind;
use tracing::debug;

use crate::directive::Directive;
use crate::sink::CodeSink;

/// Feeds the whole graph to a sink as an ordered directive stream.
///
/// Ordering guarantees:
///
/// - entity defines come first, one per table entry, in table order
/// - a page's create directive precedes every attach/set directive that
///   references the page
/// - the screensaver precedes the card pages, which follow in
///   configuration order
pub fn emit_graph(graph: &PageGraph, sink: &mut dyn CodeSink) {
    for (symbol, entity_id) in graph.entities.iter() {
        sink.emit(Directive::DefineEntity {
            symbol,
            entity_id: entity_id.clone(),
        });
    }

    sink.emit(Directive::SetSleepTimeout {
        seconds: graph.sleep_timeout,
    });
    for (day, names) in &graph.day_of_week {
        sink.emit(Directive::SetDayOfWeek {
            day: *day,
            short: names.short.clone(),
            long: names.long.clone(),
        });
    }

    if let Some(screensaver) = &graph.screensaver {
        emit_screensaver(screensaver, sink);
    }
    for page in &graph.pages {
        emit_page(page, sink);
    }
    debug!(
        entities = graph.entities.len(),
        pages = graph.pages.len(),
        "directive stream emitted"
    );
}

fn emit_screensaver(screensaver: &Screensaver, sink: &mut dyn CodeSink) {
    sink.emit(Directive::CreateScreensaver {
        id: screensaver.id.clone(),
    });
    sink.emit(Directive::SetDateFormat {
        format: screensaver.date_format.clone(),
    });
    sink.emit(Directive::SetTimeFormat {
        format: screensaver.time_format.clone(),
    });
    if let Some(entity_id) = &screensaver.weather_entity_id {
        sink.emit(Directive::SetWeatherEntity {
            entity_id: entity_id.clone(),
        });
    }
    if screensaver.status_left.is_some() || screensaver.status_right.is_some() {
        sink.emit(Directive::SetStatusIcons {
            page: screensaver.id.clone(),
            left: screensaver.status_left.clone(),
            right: screensaver.status_right.clone(),
        });
    }
    for item in &screensaver.items {
        sink.emit(Directive::AttachItem {
            page: screensaver.id.clone(),
            item: item.clone(),
        });
    }
}

fn emit_page(page: &Page, sink: &mut dyn CodeSink) {
    // grid2 shares the grid constructor and differs only in rendering, so
    // it is created as grid and overridden afterwards.
    let (kind, render_override) = match &page.kind {
        PageKind::Grid2 => (CardKind::Grid, Some(CardKind::Grid2)),
        kind => (kind.card_kind(), None),
    };
    let primary = match &page.kind {
        PageKind::Alarm { entity, .. }
        | PageKind::Thermostat { entity }
        | PageKind::Media { entity } => Some(*entity),
        PageKind::Entities | PageKind::Grid | PageKind::Grid2 | PageKind::Qr { .. } => None,
    };

    sink.emit(Directive::CreatePage {
        id: page.id.clone(),
        kind,
        title: page.title.clone(),
        sleep_timeout: page.sleep_timeout,
        primary,
    });
    if page.hidden {
        sink.emit(Directive::SetHidden {
            page: page.id.clone(),
            hidden: true,
        });
    }
    if let Some(kind) = render_override {
        sink.emit(Directive::SetRenderType {
            page: page.id.clone(),
            kind,
        });
    }
    if let PageKind::Qr { text: Some(text) } = &page.kind {
        sink.emit(Directive::SetQrText {
            page: page.id.clone(),
            text: text.clone(),
        });
    }
    for item in &page.items {
        sink.emit(Directive::AttachItem {
            page: page.id.clone(),
            item: item.clone(),
        });
    }
    if let Some(link) = &page.nav_left {
        sink.emit(Directive::SetNavLeft {
            page: page.id.clone(),
            link: link.clone(),
        });
    }
    if let Some(link) = &page.nav_right {
        sink.emit(Directive::SetNavRight {
            page: page.id.clone(),
            link: link.clone(),
        });
    }
}
