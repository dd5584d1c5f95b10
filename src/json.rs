//! Ordered JSON output.
//!
//! Downstream themes diff generated palettes, so key order is part of the
//! contract: `version` first, then variants in canonical order, swatches in
//! canonical order, ANSI slots black through white. Hand-written `Serialize`
//! impls (maps carry no order) over the same serde stack as everything else.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ansi::ANSI_SLOTS;
use crate::builtin::{COLOR_ORDER, VARIANT_ORDER};
use crate::types::{PaletteResult, Variant};

impl Serialize for PaletteResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("version", &self.version)?;
        // Fixed order; ids outside the canonical set are not emitted.
        for id in VARIANT_ORDER {
            if let Some(variant) = self.variants.get(id) {
                map.serialize_entry(id, variant)?;
            }
        }
        map.end()
    }
}

impl Serialize for Variant {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("name", &self.name)?;
        map.serialize_entry("emoji", &self.emoji)?;
        map.serialize_entry("order", &self.order)?;
        map.serialize_entry("dark", &self.dark)?;
        map.serialize_entry("colors", &OrderedColors(self))?;
        map.serialize_entry("ansiColors", &OrderedAnsi(self))?;
        map.end()
    }
}

struct OrderedColors<'a>(&'a Variant);

impl Serialize for OrderedColors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for id in COLOR_ORDER {
            if let Some(color) = self.0.colors.get(id) {
                map.serialize_entry(id, color)?;
            }
        }
        map.end()
    }
}

struct OrderedAnsi<'a>(&'a Variant);

impl Serialize for OrderedAnsi<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for slot in &ANSI_SLOTS {
            if let Some(ansi) = self.0.ansi_colors.get(slot.name) {
                map.serialize_entry(slot.name, ansi)?;
            }
        }
        map.end()
    }
}

/// Pretty-print the palette as JSON to any writer.
pub fn write_json(palette: &PaletteResult, writer: &mut impl io::Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, palette).context("serializing palette JSON")?;
    writer.write_all(b"\n").context("writing palette JSON")
}

/// Pretty-print the palette as JSON to a file, creating parent directories.
pub fn write_json_file(palette: &PaletteResult, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating directory: {}", dir.display()))?;
        }
    }
    let mut file =
        fs::File::create(path).with_context(|| format!("creating file: {}", path.display()))?;
    write_json(palette, &mut file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder;
    use crate::builtin;
    use crate::types::RawVariant;

    fn default_palette() -> PaletteResult {
        builder::generate(&builtin::default_variants(), "").unwrap()
    }

    fn empty_raw(id: &str, dark: bool) -> RawVariant {
        RawVariant {
            id: id.to_string(),
            name: id.to_string(),
            emoji: String::new(),
            dark,
            colors: vec![],
        }
    }

    #[test]
    fn version_comes_first() {
        let json = serde_json::to_string(&default_palette()).unwrap();
        assert!(json.starts_with(r#"{"version":"#), "got: {}", &json[..40]);
    }

    #[test]
    fn variants_in_canonical_order() {
        // Declare in reverse to prove output order comes from the table.
        let raws: Vec<RawVariant> = VARIANT_ORDER
            .iter()
            .rev()
            .map(|id| empty_raw(id, *id != "latte"))
            .collect();
        let json = serde_json::to_string(&builder::generate(&raws, "").unwrap()).unwrap();
        let positions: Vec<usize> = VARIANT_ORDER
            .iter()
            .map(|id| json.find(&format!("\"{id}\":")).expect("variant present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn unknown_variant_ids_are_skipped() {
        let raws = vec![crate::types::RawVariant {
            id: "custom".to_string(),
            name: "Custom".to_string(),
            emoji: String::new(),
            dark: true,
            colors: vec![],
        }];
        let palette = builder::generate(&raws, "1").unwrap();
        let json = serde_json::to_string(&palette).unwrap();
        assert!(!json.contains("custom"));
    }

    #[test]
    fn swatches_in_canonical_order_within_variant() {
        let json = serde_json::to_string(&default_palette()).unwrap();
        // Check the first variant's colors block.
        let colors_start = json.find("\"colors\":").unwrap();
        let rosewater = json[colors_start..].find("\"rosewater\":").unwrap();
        let crust = json[colors_start..].find("\"crust\":").unwrap();
        assert!(rosewater < crust);
    }

    #[test]
    fn variant_field_order_is_fixed() {
        let json = serde_json::to_string(&default_palette()).unwrap();
        let latte = json.find("\"latte\":").unwrap();
        let tail = &json[latte..];
        let fields: Vec<usize> = ["\"name\":", "\"emoji\":", "\"order\":", "\"dark\":", "\"colors\":", "\"ansiColors\":"]
            .iter()
            .map(|f| tail.find(f).expect("field present"))
            .collect();
        assert!(fields.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn output_is_deterministic() {
        let a = serde_json::to_string_pretty(&default_palette()).unwrap();
        let b = serde_json::to_string_pretty(&default_palette()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn write_json_file_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("openpalette-json-{}", std::process::id()));
        let path = dir.join("nested").join("palette.json");
        write_json_file(&default_palette(), &path).unwrap();
        assert!(path.exists());
        std::fs::remove_dir_all(&dir).ok();
    }
}
