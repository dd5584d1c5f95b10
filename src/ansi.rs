//! ANSI slot derivation.
//!
//! Fills the 8 conventional terminal slots (normal + bright halves, codes
//! 0-15) from a variant's named base swatches. Chromatic slots take a fixed
//! source swatch and derive their bright half perceptually in LCH space;
//! black and white swap between named grays instead, because lightness and
//! chroma shifts are unreliable near the achromatic extremes.

use std::collections::HashMap;

use crate::color::ColorValue;
use crate::colorspace;
use crate::types::{AnsiColor, AnsiVariant, Hsl, PaletteColor};

/// Where a slot's normal and bright colors come from.
#[derive(Debug, Clone, Copy)]
pub enum SlotSource {
    /// Both halves start from one named swatch; bright is derived in LCH.
    Chromatic(&'static str),
    /// Normal and bright are distinct named swatches, chosen per theme.
    Themed {
        dark_normal: &'static str,
        dark_bright: &'static str,
        light_normal: &'static str,
        light_bright: &'static str,
    },
}

/// One row of the slot table.
#[derive(Debug, Clone, Copy)]
pub struct AnsiSlot {
    pub name: &'static str,
    pub normal_code: u8,
    pub bright_code: u8,
    pub source: SlotSource,
}

/// The canonical 8-slot table, in output order.
pub const ANSI_SLOTS: [AnsiSlot; 8] = [
    AnsiSlot {
        name: "black",
        normal_code: 0,
        bright_code: 8,
        source: SlotSource::Themed {
            dark_normal: "surface1",
            dark_bright: "surface2",
            light_normal: "subtext1",
            light_bright: "subtext0",
        },
    },
    AnsiSlot {
        name: "red",
        normal_code: 1,
        bright_code: 9,
        source: SlotSource::Chromatic("red"),
    },
    AnsiSlot {
        name: "green",
        normal_code: 2,
        bright_code: 10,
        source: SlotSource::Chromatic("green"),
    },
    AnsiSlot {
        name: "yellow",
        normal_code: 3,
        bright_code: 11,
        source: SlotSource::Chromatic("yellow"),
    },
    AnsiSlot {
        name: "blue",
        normal_code: 4,
        bright_code: 12,
        source: SlotSource::Chromatic("blue"),
    },
    AnsiSlot {
        name: "magenta",
        normal_code: 5,
        bright_code: 13,
        source: SlotSource::Chromatic("pink"),
    },
    AnsiSlot {
        name: "cyan",
        normal_code: 6,
        bright_code: 14,
        source: SlotSource::Chromatic("teal"),
    },
    AnsiSlot {
        name: "white",
        normal_code: 7,
        bright_code: 15,
        source: SlotSource::Themed {
            dark_normal: "subtext0",
            dark_bright: "subtext1",
            light_normal: "surface2",
            light_bright: "surface1",
        },
    },
];

/// Substitute for a referenced swatch missing from the variant. Visibly
/// wrong but structurally valid; incomplete variants still get a result.
const FALLBACK_HEX: &str = "#000000";

/// Derive all 8 ANSI slots from a variant's swatches.
///
/// `slots` is passed explicitly so alternate tables stay testable; the
/// canonical one is [`ANSI_SLOTS`]. Slot order index follows table order.
pub fn derive_ansi(
    slots: &[AnsiSlot],
    colors: &HashMap<String, PaletteColor>,
    dark: bool,
) -> HashMap<String, AnsiColor> {
    slots
        .iter()
        .enumerate()
        .map(|(order, slot)| (slot.name.to_string(), derive_slot(slot, order, colors, dark)))
        .collect()
}

/// Derive one slot: pick sources, apply the bright rule, fill both halves.
pub fn derive_slot(
    slot: &AnsiSlot,
    order: usize,
    colors: &HashMap<String, PaletteColor>,
    dark: bool,
) -> AnsiColor {
    let display_name = capitalize(slot.name);

    let (normal, bright) = match slot.source {
        SlotSource::Chromatic(source) => {
            let normal = source_color(colors, source);
            (normal.clone(), brighten(normal, dark))
        }
        SlotSource::Themed {
            dark_normal,
            dark_bright,
            light_normal,
            light_bright,
        } => {
            let (normal_id, bright_id) = if dark {
                (dark_normal, dark_bright)
            } else {
                (light_normal, light_bright)
            };
            (
                source_color(colors, normal_id),
                source_color(colors, bright_id),
            )
        }
    };

    AnsiColor {
        name: display_name.clone(),
        order,
        normal: to_variant(&normal, display_name.clone(), slot.normal_code),
        bright: to_variant(&bright, format!("Bright {display_name}"), slot.bright_code),
    }
}

/// The chromatic bright rule, applied to a clone of the normal color.
///
/// Order matters: lightness, then chroma, then the 2° hue nudge. Dark themes
/// trade a little lightness for extra chroma; light themes just lighten.
fn brighten(mut color: ColorValue, dark: bool) -> ColorValue {
    let lch = color.lch_mut();
    if dark {
        lch.l *= 0.94;
        lch.c += 8.0;
    } else {
        lch.l *= 1.09;
        lch.c += 0.0;
    }
    lch.h += 2.0;
    color
}

/// Look up a swatch by id, falling back to black when absent.
fn source_color(colors: &HashMap<String, PaletteColor>, id: &str) -> ColorValue {
    let hex = colors.get(id).map_or(FALLBACK_HEX, |c| c.hex.as_str());
    // Swatch hex strings were validated when the variant was built.
    ColorValue::parse(hex).unwrap_or_else(|_| ColorValue::Hex("000000".to_string()))
}

fn to_variant(color: &ColorValue, name: String, code: u8) -> AnsiVariant {
    let hex = color.to_hex();
    let hsl = colorspace::classic_hsl(&hex).unwrap_or(Hsl {
        h: 0.0,
        s: 0.0,
        l: 0.0,
    });
    AnsiVariant {
        name,
        hex,
        rgb: color.to_rgb(),
        hsl,
        code,
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
