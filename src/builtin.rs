//! Built-in default variant set and canonical ordering tables.
//!
//! The default set carried in the binary is the single light variant with
//! its 26 named swatches, used whenever no config file is supplied. Custom
//! configs add the darker variants. The ordering slices here also drive the
//! fixed JSON output order.

use crate::types::{RawColor, RawVariant};

/// Variant ids in output order.
pub const VARIANT_ORDER: [&str; 4] = ["latte", "frappe", "macchiato", "mocha"];

/// Swatch ids in output order: the 14 accents, then the monochrome ramp.
pub const COLOR_ORDER: [&str; 26] = [
    "rosewater", "flamingo", "pink", "mauve", "red", "maroon", "peach", "yellow", "green", "teal",
    "sky", "sapphire", "blue", "lavender", "text", "subtext1", "subtext0", "overlay2", "overlay1",
    "overlay0", "surface2", "surface1", "surface0", "base", "mantle", "crust",
];

/// Display names for the canonical swatches, aligned with [`COLOR_ORDER`].
const COLOR_NAMES: [&str; 26] = [
    "Rosewater",
    "Flamingo",
    "Pink",
    "Mauve",
    "Red",
    "Maroon",
    "Peach",
    "Yellow",
    "Green",
    "Teal",
    "Sky",
    "Sapphire",
    "Blue",
    "Lavender",
    "Text",
    "Subtext 1",
    "Subtext 0",
    "Overlay 2",
    "Overlay 1",
    "Overlay 0",
    "Surface 2",
    "Surface 1",
    "Surface 0",
    "Base",
    "Mantle",
    "Crust",
];

/// The first 14 canonical swatches are accents; the ramp is not.
const ACCENT_COUNT: usize = 14;

const LATTE_HEX: [&str; 26] = [
    "#dc8a78", "#dd7878", "#ea76cb", "#8839ef", "#d20f39", "#e64553", "#fe640b", "#df8e1d",
    "#40a02b", "#179299", "#04a5e5", "#209fb5", "#1e66f5", "#7287fd", "#4c4f69", "#5c5f77",
    "#6c6f85", "#7c7f93", "#8c8fa1", "#9ca0b0", "#acb0be", "#bcc0cc", "#ccd0da", "#eff1f5",
    "#e6e9ef", "#dce0e8",
];

fn variant(id: &str, name: &str, emoji: &str, dark: bool, hexes: &[&str; 26]) -> RawVariant {
    let colors = COLOR_ORDER
        .iter()
        .zip(COLOR_NAMES.iter())
        .zip(hexes.iter())
        .enumerate()
        .map(|(i, ((id, name), hex))| RawColor {
            id: (*id).to_string(),
            name: (*name).to_string(),
            hex: (*hex).to_string(),
            accent: i < ACCENT_COUNT,
        })
        .collect();

    RawVariant {
        id: id.to_string(),
        name: name.to_string(),
        emoji: emoji.to_string(),
        dark,
        colors,
    }
}

/// The default variant set used when no config file is supplied.
pub fn default_variants() -> Vec<RawVariant> {
    vec![variant("latte", "Latte", "🌻", false, &LATTE_HEX)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorValue;

    #[test]
    fn default_set_is_latte_only() {
        let variants = default_variants();
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].id, "latte");
        assert!(!variants[0].dark);
    }

    #[test]
    fn latte_has_26_valid_colors() {
        let latte = &default_variants()[0];
        assert_eq!(latte.colors.len(), 26);
        for color in &latte.colors {
            assert!(
                ColorValue::parse(&color.hex).is_ok(),
                "bad hex {} for {}",
                color.hex,
                color.id
            );
        }
    }

    #[test]
    fn accents_are_the_first_fourteen() {
        let latte = &default_variants()[0];
        for (i, color) in latte.colors.iter().enumerate() {
            assert_eq!(color.accent, i < ACCENT_COUNT, "{}", color.id);
        }
    }

    #[test]
    fn color_ids_follow_canonical_order() {
        let latte = &default_variants()[0];
        let ids: Vec<&str> = latte.colors.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, COLOR_ORDER);
    }

    #[test]
    fn latte_is_first_in_variant_order() {
        assert_eq!(VARIANT_ORDER[0], "latte");
    }
}
