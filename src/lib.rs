//! Derive complete terminal color palettes from a handful of hex values.
//!
//! Given a few designer-chosen swatches per theme variant, this crate
//! produces the full palette: every swatch in hex/RGB/HSL form plus the 16
//! ANSI terminal colors, with bright variants derived perceptually in CIE
//! LCH space rather than hand-picked.

pub mod ansi;
pub mod builder;
pub mod builtin;
pub mod cli;
pub mod color;
pub mod colorspace;
pub mod config;
pub mod error;
pub mod json;
pub mod types;

pub use color::{ColorValue, Lch};
pub use error::Error;
pub use types::{AnsiColor, AnsiVariant, Hsl, PaletteColor, PaletteResult, Rgb, Variant};
