use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct WorkRow {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ShelfRow {
    title: String,
    works: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct DetailRow {
    work_id: String,
}

#[derive(Debug, Deserialize)]
struct NamedRow {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ReaderRow {
    chapters: Vec<serde_json::Value>,
    #[serde(default)]
    characters: Vec<NamedRow>,
    #[serde(default)]
    voices: Vec<NamedRow>,
    #[serde(default)]
    assignments: std::collections::BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    fallback_work: String,
    default_shelf: Vec<String>,
    works: Vec<WorkRow>,
    shelves: Vec<ShelfRow>,
    details: Vec<DetailRow>,
    reader: ReaderRow,
}

fn validate(catalog: &CatalogFile) -> Result<(), String> {
    let mut work_ids = BTreeSet::new();
    for work in &catalog.works {
        if !work_ids.insert(work.id.as_str()) {
            return Err(format!("duplicate work id `{}`", work.id));
        }
    }

    let check_known = |context: &str, id: &str| {
        if work_ids.contains(id) {
            Ok(())
        } else {
            Err(format!("{context} references unknown work `{id}`"))
        }
    };

    for id in &catalog.default_shelf {
        check_known("default_shelf", id)?;
    }
    for shelf in &catalog.shelves {
        for id in shelf.works.iter().flatten() {
            check_known(&format!("shelf `{}`", shelf.title), id)?;
        }
    }
    for detail in &catalog.details {
        check_known("details", &detail.work_id)?;
    }
    if !catalog
        .details
        .iter()
        .any(|detail| detail.work_id == catalog.fallback_work)
    {
        return Err(format!(
            "fallback work `{}` has no details record",
            catalog.fallback_work
        ));
    }

    if catalog.reader.chapters.is_empty() {
        return Err("reader book has no chapters".to_string());
    }
    let characters = catalog
        .reader
        .characters
        .iter()
        .map(|row| row.id.as_str())
        .collect::<BTreeSet<_>>();
    let voices = catalog
        .reader
        .voices
        .iter()
        .map(|row| row.id.as_str())
        .collect::<BTreeSet<_>>();
    for (character, voice) in &catalog.reader.assignments {
        if !characters.contains(character.as_str()) {
            return Err(format!("assignment for unknown character `{character}`"));
        }
        if !voices.contains(voice.as_str()) {
            return Err(format!("assignment to unknown voice `{voice}`"));
        }
    }

    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("data").join("catalog.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let catalog: CatalogFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(err) = validate(&catalog) {
        panic!("invalid catalog {}: {err}", path.display());
    }

    let tables: serde_json::Value = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to convert {}: {err}", path.display()));
    let json = serde_json::to_string_pretty(&tables).expect("serialize catalog tables");
    let generated = format!(
        "/// Build-time generated storefront catalog JSON.\n\
pub const STATIC_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
