//! Data model for the generated palette.
//!
//! Everything here is plain owned data, created fresh on each generation run.
//! `PaletteResult` owns its variants, variants own their colors; nothing is
//! shared across variants.

use std::collections::HashMap;

use serde::Serialize;

/// 8-bit RGB components, derived from the gamut-clamped sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Classic HSL: hue in degrees [0, 360), saturation and lightness in [0, 1].
/// Display only; perceptual edits go through LCH instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// One fully derived base swatch.
#[derive(Debug, Clone, Serialize)]
pub struct PaletteColor {
    pub name: String,
    pub order: usize,
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub accent: bool,
}

/// One half (normal or bright) of an ANSI slot.
#[derive(Debug, Clone, Serialize)]
pub struct AnsiVariant {
    pub name: String,
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub code: u8,
}

/// A complete ANSI slot: normal + bright pair.
#[derive(Debug, Clone, Serialize)]
pub struct AnsiColor {
    pub name: String,
    pub order: usize,
    pub normal: AnsiVariant,
    pub bright: AnsiVariant,
}

/// One generated theme variant.
#[derive(Debug, Clone)]
pub struct Variant {
    pub name: String,
    pub emoji: String,
    pub order: usize,
    pub dark: bool,
    pub colors: HashMap<String, PaletteColor>,
    pub ansi_colors: HashMap<String, AnsiColor>,
}

/// The full generation result: a format version plus all variants by id.
#[derive(Debug, Clone)]
pub struct PaletteResult {
    pub version: String,
    pub variants: HashMap<String, Variant>,
}

/// An input color before any derivation.
#[derive(Debug, Clone)]
pub struct RawColor {
    pub id: String,
    pub name: String,
    pub hex: String,
    pub accent: bool,
}

/// An input variant: a dark/light flag plus its raw colors in declaration
/// order.
#[derive(Debug, Clone)]
pub struct RawVariant {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub dark: bool,
    pub colors: Vec<RawColor>,
}
