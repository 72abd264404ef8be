//! Build script for pdfpress-i18n crate
//!
//! This script validates all locale bundles at compile time to ensure:
//! - Every bundle is valid JSON with an object root
//! - Every value is a non-empty string or a nested object
//! - Message keys contain no dots (they would break dot-path resolution)
//!
//! Key coverage gaps against the base locale are warnings, not errors:
//! partially translated bundles are expected and are backfilled by the
//! fallback merge at runtime.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use serde_json::Value;

const BASE_LOCALE: &str = "en";

/// Leaf dot-paths mapped to the placeholder names they reference
type LeafMap = BTreeMap<String, BTreeSet<String>>;

/// Extract `{{name}}` placeholder names from a message
fn extract_placeholders(text: &str) -> BTreeSet<String> {
    let mut params = BTreeSet::new();
    let mut rest = text;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                params.insert(after[..end].to_string());
                rest = &after[end + 2..];
            }
            None => break,
        }
    }
    params
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Walk a bundle value, collecting leaves and structural violations
fn validate_value(value: &Value, path: &str, leaves: &mut LeafMap, errors: &mut Vec<String>) {
    match value {
        Value::String(text) => {
            if text.is_empty() {
                errors.push(format!("Empty message at '{}'", path));
            }
            leaves.insert(path.to_string(), extract_placeholders(text));
        }
        Value::Object(children) => {
            for (key, child) in children {
                if key.is_empty() {
                    errors.push(format!("Empty key under '{}'", path));
                    continue;
                }
                if key.contains('.') {
                    errors.push(format!("Key '{}' under '{}' contains a dot", key, path));
                    continue;
                }
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                validate_value(child, &child_path, leaves, errors);
            }
        }
        other => {
            errors.push(format!(
                "Invalid value at '{}': expected string or object, found {}",
                path,
                value_kind(other)
            ));
        }
    }
}

/// Validate a single bundle file
fn validate_bundle_file(path: &Path) -> Result<LeafMap, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let value: Value = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))?;

    if !value.is_object() {
        return Err(format!(
            "Bundle root must be an object, found {} in {}",
            value_kind(&value),
            path.display()
        ));
    }

    let mut leaves = LeafMap::new();
    let mut errors = Vec::new();
    validate_value(&value, "", &mut leaves, &mut errors);

    if errors.is_empty() {
        Ok(leaves)
    } else {
        Err(format!("{}: {}", path.display(), errors.join("; ")))
    }
}

/// Find all bundle files
fn find_bundle_files() -> Result<HashMap<String, PathBuf>, String> {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;

    let locales_dir = Path::new(&manifest_dir)
        .parent()
        .and_then(Path::parent)
        .ok_or("Failed to get workspace directory")?
        .join("locales");

    if !locales_dir.exists() {
        return Err(format!(
            "Locales directory not found: {}",
            locales_dir.display()
        ));
    }

    let mut bundle_files = HashMap::new();

    for entry in fs::read_dir(&locales_dir)
        .map_err(|e| format!("Failed to read locales directory: {}", e))?
    {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            let locale_name = path
                .file_stem()
                .and_then(|n| n.to_str())
                .ok_or_else(|| format!("Invalid bundle file name: {}", path.display()))?;
            bundle_files.insert(locale_name.to_string(), path.clone());
        }
    }

    if bundle_files.is_empty() {
        return Err("No bundle files found".to_string());
    }

    Ok(bundle_files)
}

/// Main validation function
fn validate_bundles() -> Result<(), String> {
    println!("cargo:rerun-if-changed=../../locales");

    let bundle_files = find_bundle_files()?;

    println!("Found {} locale bundles", bundle_files.len());

    let mut all_leaves: HashMap<String, LeafMap> = HashMap::new();
    let mut validation_errors = Vec::new();

    for (locale, path) in &bundle_files {
        println!("cargo:rerun-if-changed={}", path.display());
        match validate_bundle_file(path) {
            Ok(leaves) => {
                println!("✅ {}: {} messages", locale, leaves.len());
                all_leaves.insert(locale.clone(), leaves);
            }
            Err(e) => {
                validation_errors.push(format!("❌ {}: {}", locale, e));
            }
        }
    }

    if !validation_errors.is_empty() {
        return Err(format!(
            "Validation errors:\n{}",
            validation_errors.join("\n")
        ));
    }

    // Coverage against the base locale is advisory; the runtime merge
    // backfills anything missing.
    let base_leaves = all_leaves
        .get(BASE_LOCALE)
        .ok_or_else(|| format!("Base locale bundle '{}.json' not found", BASE_LOCALE))?;

    for (locale, leaves) in &all_leaves {
        if locale == BASE_LOCALE {
            continue;
        }

        for key in base_leaves.keys() {
            if !leaves.contains_key(key) {
                println!(
                    "cargo:warning={}: missing message key '{}', will fall back to {}",
                    locale, key, BASE_LOCALE
                );
            }
        }

        for key in leaves.keys() {
            if !base_leaves.contains_key(key) {
                println!(
                    "cargo:warning={}: extra message key '{}' not present in {}",
                    locale, key, BASE_LOCALE
                );
            }
        }

        for (key, base_params) in base_leaves {
            if let Some(params) = leaves.get(key) {
                if params != base_params {
                    println!(
                        "cargo:warning={}: placeholder mismatch for '{}'. {} has {:?}, found {:?}",
                        locale, key, BASE_LOCALE, base_params, params
                    );
                }
            }
        }
    }

    println!("🎉 All locale bundles validated successfully!");
    Ok(())
}

fn main() {
    if let Err(e) = validate_bundles() {
        eprintln!("Bundle validation failed:\n{}", e);
        process::exit(1);
    }
}
