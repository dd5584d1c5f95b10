//! Variant orchestration: raw input colors in, fully derived palette out.
//!
//! Each variant is processed independently and sequentially; ordering
//! indices come from input declaration order, never from map iteration.

use std::collections::HashMap;

use anyhow::{Context, Result};

use crate::ansi::{self, ANSI_SLOTS};
use crate::color::ColorValue;
use crate::colorspace;
use crate::types::{PaletteColor, PaletteResult, RawColor, RawVariant, Variant};

/// Convert one raw input color into a derived swatch.
///
/// Validates the hex string and computes the RGB and display-HSL fields. A
/// malformed hex aborts the whole generation run; no partial palette is
/// emitted.
pub fn process_color(raw: &RawColor, order: usize) -> Result<PaletteColor> {
    let color =
        ColorValue::parse(&raw.hex).with_context(|| format!("color {:?}", raw.id))?;
    let hsl = colorspace::classic_hsl(&raw.hex).with_context(|| format!("color {:?}", raw.id))?;

    Ok(PaletteColor {
        name: raw.name.clone(),
        order,
        hex: color.to_hex(),
        rgb: color.to_rgb(),
        hsl,
        accent: raw.accent,
    })
}

/// Build one variant: swatch map first, then the 8 ANSI slots.
pub fn build_variant(raw: &RawVariant, order: usize) -> Result<Variant> {
    let mut colors = HashMap::with_capacity(raw.colors.len());
    for (color_order, raw_color) in raw.colors.iter().enumerate() {
        let color = process_color(raw_color, color_order)
            .with_context(|| format!("variant {:?}", raw.id))?;
        colors.insert(raw_color.id.clone(), color);
    }

    let ansi_colors = ansi::derive_ansi(&ANSI_SLOTS, &colors, raw.dark);

    Ok(Variant {
        name: raw.name.clone(),
        emoji: raw.emoji.clone(),
        order,
        dark: raw.dark,
        colors,
        ansi_colors,
    })
}

/// Build the full palette from an ordered list of raw variants.
pub fn generate(raw_variants: &[RawVariant], version: &str) -> Result<PaletteResult> {
    let mut variants = HashMap::with_capacity(raw_variants.len());
    for (order, raw) in raw_variants.iter().enumerate() {
        variants.insert(raw.id.clone(), build_variant(raw, order)?);
    }

    Ok(PaletteResult {
        version: version.to_string(),
        variants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str, hex: &str, accent: bool) -> RawColor {
        RawColor {
            id: id.to_string(),
            name: id.to_string(),
            hex: hex.to_string(),
            accent,
        }
    }

    fn raw_variant(id: &str, dark: bool, colors: Vec<RawColor>) -> RawVariant {
        RawVariant {
            id: id.to_string(),
            name: id.to_string(),
            emoji: "🎨".to_string(),
            dark,
            colors,
        }
    }

    #[test]
    fn process_color_fills_all_fields() {
        let color = process_color(&raw("blue", "#1e66f5", true), 3).unwrap();
        assert_eq!(color.order, 3);
        assert_eq!(color.hex, "#1e66f5");
        assert_eq!((color.rgb.r, color.rgb.g, color.rgb.b), (30, 102, 245));
        assert!(color.accent);
        assert!((color.hsl.h - 219.91).abs() < 0.01);
    }

    #[test]
    fn process_color_rejects_bad_hex() {
        let err = process_color(&raw("oops", "#12345", false), 0).unwrap_err();
        assert!(format!("{err:#}").contains("oops"));
    }

    #[test]
    fn build_variant_reports_offending_variant_and_color() {
        let variant = raw_variant("mocha", true, vec![raw("bad", "nothex", false)]);
        let err = build_variant(&variant, 0).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("mocha"), "missing variant id in: {msg}");
        assert!(msg.contains("bad"), "missing color id in: {msg}");
    }

    #[test]
    fn build_variant_produces_eight_ansi_slots() {
        let variant = raw_variant("test", true, vec![raw("red", "#f38ba8", true)]);
        let built = build_variant(&variant, 0).unwrap();
        assert_eq!(built.ansi_colors.len(), 8);
        assert_eq!(built.ansi_colors["red"].normal.hex, "#f38ba8");
        // Slots with no source swatch fall back to black.
        assert_eq!(built.ansi_colors["green"].normal.hex, "#000000");
    }

    #[test]
    fn color_order_matches_declaration_order() {
        let variant = raw_variant(
            "test",
            false,
            vec![
                raw("zeta", "#111111", false),
                raw("alpha", "#222222", false),
                raw("mid", "#333333", false),
            ],
        );
        let built = build_variant(&variant, 0).unwrap();
        assert_eq!(built.colors["zeta"].order, 0);
        assert_eq!(built.colors["alpha"].order, 1);
        assert_eq!(built.colors["mid"].order, 2);
    }

    #[test]
    fn variant_order_matches_list_position() {
        let raws = vec![
            raw_variant("b", true, vec![]),
            raw_variant("a", false, vec![]),
        ];
        let result = generate(&raws, "1.0.0").unwrap();
        assert_eq!(result.variants["b"].order, 0);
        assert_eq!(result.variants["a"].order, 1);
        assert_eq!(result.version, "1.0.0");
    }

    #[test]
    fn one_bad_color_aborts_the_run() {
        let raws = vec![
            raw_variant("good", true, vec![raw("red", "#f38ba8", true)]),
            raw_variant("broken", false, vec![raw("red", "#xyzxyz", true)]),
        ];
        assert!(generate(&raws, "").is_err());
    }
}
