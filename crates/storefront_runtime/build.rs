use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const FONT_SIZE_RANGE: std::ops::RangeInclusive<u16> = 12..=32;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DiagnosticsSection {
    level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogSection {
    unknown_work: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ReaderSection {
    default_font_size: u16,
    default_font_family: String,
    default_playback_position: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShelfSection {
    loop_threshold: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorefrontFile {
    diagnostics: DiagnosticsSection,
    catalog: CatalogSection,
    reader: ReaderSection,
    shelf: ShelfSection,
}

fn validate(config: &StorefrontFile) -> Result<(), String> {
    if !["debug", "info", "warn", "error", "off"].contains(&config.diagnostics.level.as_str()) {
        return Err(format!(
            "diagnostics.level must be debug, info, warn, error or off; found `{}`",
            config.diagnostics.level
        ));
    }
    if !["fallback", "not-found"].contains(&config.catalog.unknown_work.as_str()) {
        return Err(format!(
            "catalog.unknown_work must be fallback or not-found; found `{}`",
            config.catalog.unknown_work
        ));
    }
    if !FONT_SIZE_RANGE.contains(&config.reader.default_font_size) {
        return Err(format!(
            "reader.default_font_size must be within {FONT_SIZE_RANGE:?}; found {}",
            config.reader.default_font_size
        ));
    }
    if !["serif", "sans"].contains(&config.reader.default_font_family.as_str()) {
        return Err(format!(
            "reader.default_font_family must be serif or sans; found `{}`",
            config.reader.default_font_family
        ));
    }
    if config.reader.default_playback_position > 100 {
        return Err(format!(
            "reader.default_playback_position must be within 0..=100; found {}",
            config.reader.default_playback_position
        ));
    }
    if config.shelf.loop_threshold == 0 {
        return Err("shelf.loop_threshold must be at least 1".to_string());
    }
    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("storefront.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: StorefrontFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(message) = validate(&config) {
        panic!("invalid {}: {message}", path.display());
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize storefront config");
    let generated = format!(
        "/// Build-time generated storefront configuration JSON.\n\
pub const STOREFRONT_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("storefront_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
