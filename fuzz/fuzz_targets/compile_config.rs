#![no_main]

use libfuzzer_sys::fuzz_target;
use paneldeck_compile::{Compiler, IconLibrary};
use paneldeck_config::PanelConfig;

const MAX_CONFIG_BYTES: usize = 8192;

const ICON_TABLE: &str = r#"[
    {"name": "alert-circle-outline", "hex": "E027"},
    {"name": "arrow-left-bold", "hex": "E730"},
    {"name": "arrow-right-bold", "hex": "E734"},
    {"name": "home", "hex": "E2DC"}
]"#;

fuzz_target!(|data: &[u8]| {
    let capped = &data[..data.len().min(MAX_CONFIG_BYTES)];
    let Ok(config) = serde_json::from_slice::<PanelConfig>(capped) else {
        return;
    };

    // Any configuration that deserializes must compile to Ok or Err,
    // never panic.
    let library = IconLibrary::from_json(ICON_TABLE).expect("static icon table");
    let _ = Compiler::new(library).compile(&config);
});
