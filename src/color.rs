//! Core color value used throughout the pipeline.
//!
//! A [`ColorValue`] holds a color in exactly one representation at a time:
//! the validated hex string it was parsed from, or an LCH triple once a
//! perceptual edit has been requested. The hex→LCH promotion runs the full
//! forward pipeline at most once per value; most swatches are only ever read
//! back as hex and never pay for it.

use std::fmt;

use crate::colorspace;
use crate::error::Error;
use crate::types::Rgb;

/// A CIE LCH triple: lightness roughly [0, 100], chroma non-negative,
/// hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

/// A color in either hex or LCH representation.
///
/// The two states never coexist, so a clone taken before or after the LCH
/// promotion always describes the same color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// 6 lowercase hex digits, no `#`.
    Hex(String),
    Lch(Lch),
}

impl ColorValue {
    /// Parse a hex color string like `#ff8800` or `ff8800`.
    ///
    /// Anything other than exactly 6 hex digits (after the optional `#`) is
    /// rejected, never coerced.
    pub fn parse(hex: &str) -> Result<Self, Error> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        colorspace::hex_to_bytes(hex)?;
        Ok(Self::Hex(hex.to_ascii_lowercase()))
    }

    /// Serialize to lowercase hex `#rrggbb`.
    ///
    /// In the LCH state this runs the full inverse pipeline, clamps to the
    /// sRGB gamut, and rounds half-away-from-zero per channel.
    pub fn to_hex(&self) -> String {
        match self {
            Self::Hex(hex) => format!("#{hex}"),
            Self::Lch(_) => {
                let [r, g, b] = self.to_srgb_gamut();
                format!(
                    "#{:02x}{:02x}{:02x}",
                    (r * 255.0).round() as u8,
                    (g * 255.0).round() as u8,
                    (b * 255.0).round() as u8
                )
            }
        }
    }

    /// The gamut-clamped sRGB triple in [0, 1]³, regardless of state.
    pub fn to_srgb_gamut(&self) -> [f64; 3] {
        let rgb = match self {
            // Validated at parse time.
            Self::Hex(hex) => colorspace::hex_to_srgb(hex).unwrap_or([0.0, 0.0, 0.0]),
            Self::Lch(lch) => lch_to_srgb(*lch),
        };
        colorspace::gamut_clamp(rgb)
    }

    /// 8-bit RGB of the clamped gamut triple.
    pub fn to_rgb(&self) -> Rgb {
        let [r, g, b] = self.to_srgb_gamut();
        Rgb {
            r: (r * 255.0).round() as u8,
            g: (g * 255.0).round() as u8,
            b: (b * 255.0).round() as u8,
        }
    }

    /// Read the LCH triple without changing state.
    pub fn lch(&self) -> Lch {
        match self {
            Self::Hex(hex) => srgb_to_lch(hex),
            Self::Lch(lch) => *lch,
        }
    }

    /// Mutable access to the LCH triple, promoting from hex on first use.
    ///
    /// The forward pipeline runs at most once per value; afterwards edits go
    /// straight to the cached scalars and show up in later [`Self::to_hex`]
    /// and [`Self::to_srgb_gamut`] calls.
    pub fn lch_mut(&mut self) -> &mut Lch {
        if let Self::Hex(hex) = self {
            let lch = srgb_to_lch(hex);
            *self = Self::Lch(lch);
        }
        match self {
            Self::Lch(lch) => lch,
            Self::Hex(_) => unreachable!("promoted to LCH above"),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Full forward pipeline: hex → linear RGB → XYZ → Lab → LCH.
fn srgb_to_lch(hex: &str) -> Lch {
    let [r, g, b] = colorspace::hex_to_srgb(hex).unwrap_or([0.0, 0.0, 0.0]);
    let (x, y, z) = colorspace::linear_rgb_to_xyz(
        colorspace::srgb_to_linear(r),
        colorspace::srgb_to_linear(g),
        colorspace::srgb_to_linear(b),
    );
    let (l, a, lab_b) = colorspace::xyz_to_lab(x, y, z);
    let (l, c, h) = colorspace::lab_to_lch(l, a, lab_b);
    Lch { l, c, h }
}

/// Full inverse pipeline: LCH → Lab → XYZ → linear RGB → sRGB (unclamped).
fn lch_to_srgb(lch: Lch) -> [f64; 3] {
    let (l, a, b) = colorspace::lch_to_lab(lch.l, lch.c, lch.h);
    let (x, y, z) = colorspace::lab_to_xyz(l, a, b);
    let (r, g, b) = colorspace::xyz_to_linear_rgb(x, y, z);
    [
        colorspace::linear_to_srgb(r),
        colorspace::linear_to_srgb(g),
        colorspace::linear_to_srgb(b),
    ]
}
