//! JSON configuration files: custom palettes in, raw variants out.
//!
//! The on-disk shape mirrors the output: a version string plus a map of
//! variant ids to named colors. JSON objects carry no order, so loading
//! produces a deterministic ordering instead: variants by id, colors by the
//! canonical swatch list with unknown ids appended alphabetically.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::builtin::COLOR_ORDER;
use crate::types::{RawColor, RawVariant};

#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    version: String,
    variants: BTreeMap<String, ConfigVariant>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ConfigVariant {
    name: String,
    #[serde(default)]
    emoji: String,
    dark: bool,
    colors: BTreeMap<String, ConfigColor>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ConfigColor {
    name: String,
    hex: String,
    #[serde(default)]
    accent: bool,
}

/// Load a config file and convert it to an ordered raw variant list.
///
/// Returns the variants plus the config's version string.
pub fn load(path: &Path) -> Result<(Vec<RawVariant>, String)> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config file: {}", path.display()))?;
    let config: ConfigFile = serde_json::from_str(&data)
        .with_context(|| format!("parsing JSON config: {}", path.display()))?;

    let variants = config
        .variants
        .into_iter()
        .map(|(id, variant)| {
            let mut colors: Vec<RawColor> = variant
                .colors
                .into_iter()
                .map(|(color_id, color)| RawColor {
                    id: color_id,
                    name: color.name,
                    hex: color.hex,
                    accent: color.accent,
                })
                .collect();
            colors.sort_by_key(|c| canonical_rank(&c.id));

            RawVariant {
                id,
                name: variant.name,
                emoji: variant.emoji,
                dark: variant.dark,
                colors,
            }
        })
        .collect();

    Ok((variants, config.version))
}

/// Canonical swatches keep their list position; unknown ids sort after them
/// alphabetically.
fn canonical_rank(id: &str) -> (usize, String) {
    match COLOR_ORDER.iter().position(|&c| c == id) {
        Some(pos) => (pos, String::new()),
        None => (COLOR_ORDER.len(), id.to_string()),
    }
}

/// Write a small starter config a user can edit with their own colors.
pub fn write_example(path: &Path) -> Result<()> {
    let config = ConfigFile {
        version: "1.0.0".to_string(),
        variants: BTreeMap::from([
            (
                "latte".to_string(),
                ConfigVariant {
                    name: "Latte".to_string(),
                    emoji: "🌻".to_string(),
                    dark: false,
                    colors: example_colors(&[
                        ("rosewater", "Rosewater", "#dc8a78", true),
                        ("flamingo", "Flamingo", "#dd7878", true),
                        ("pink", "Pink", "#ea76cb", true),
                        ("red", "Red", "#d20f39", true),
                        ("text", "Text", "#4c4f69", false),
                        ("base", "Base", "#eff1f5", false),
                    ]),
                },
            ),
            (
                "mocha".to_string(),
                ConfigVariant {
                    name: "Mocha".to_string(),
                    emoji: "🌙".to_string(),
                    dark: true,
                    colors: example_colors(&[
                        ("rosewater", "Rosewater", "#f5e0dc", true),
                        ("flamingo", "Flamingo", "#f2cdcd", true),
                        ("pink", "Pink", "#f5c2e7", true),
                        ("red", "Red", "#f38ba8", true),
                        ("text", "Text", "#cdd6f4", false),
                        ("base", "Base", "#1e1e2e", false),
                    ]),
                },
            ),
        ]),
    };

    let data = serde_json::to_string_pretty(&config).context("serializing example config")?;
    fs::write(path, data).with_context(|| format!("writing {}", path.display()))
}

fn example_colors(entries: &[(&str, &str, &str, bool)]) -> BTreeMap<String, ConfigColor> {
    entries
        .iter()
        .map(|(id, name, hex, accent)| {
            (
                (*id).to_string(),
                ConfigColor {
                    name: (*name).to_string(),
                    hex: (*hex).to_string(),
                    accent: *accent,
                },
            )
        })
        .collect()
}
