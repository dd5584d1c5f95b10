//! Analytic color space conversions for the palette pipeline.
//!
//! Implements the full chain sRGB ↔ linear RGB ↔ CIE XYZ ↔ CIE Lab ↔ LCH
//! with fixed D50-adapted matrices and a fixed reference white, plus the
//! classic max/min HSL formula used for display fields. All arithmetic is
//! `f64` and deterministic; these transforms deliberately avoid any platform
//! color management so output is byte-identical across machines.

use crate::error::Error;
use crate::types::Hsl;

/// CIE reference white (D50-adapted), matching the conversion matrices below.
const XN: f64 = 0.9642956;
const YN: f64 = 1.0;
const ZN: f64 = 0.8251046;

const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// Parse exactly 6 hex digits into an sRGB triple in [0, 1].
///
/// The input must not carry a leading `#`; callers strip it first.
pub fn hex_to_srgb(hex: &str) -> Result<[f64; 3], Error> {
    let bytes = hex_to_bytes(hex)?;
    Ok([
        f64::from(bytes[0]) / 255.0,
        f64::from(bytes[1]) / 255.0,
        f64::from(bytes[2]) / 255.0,
    ])
}

/// Parse exactly 6 hex digits into three bytes.
pub fn hex_to_bytes(hex: &str) -> Result<[u8; 3], Error> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidHex(hex.to_string()));
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| Error::InvalidHex(hex.to_string()))?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| Error::InvalidHex(hex.to_string()))?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| Error::InvalidHex(hex.to_string()))?;
    Ok([r, g, b])
}

/// Remove the gamma curve from one sRGB channel.
pub fn srgb_to_linear(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Apply the gamma curve to one linear RGB channel.
pub fn linear_to_srgb(v: f64) -> f64 {
    if v <= 0.0031308 {
        12.92 * v
    } else {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    }
}

/// Linear RGB to CIE XYZ (D50-adapted sRGB matrix).
pub fn linear_rgb_to_xyz(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let x = 0.4360747 * r + 0.3850649 * g + 0.1430804 * b;
    let y = 0.2225045 * r + 0.7168786 * g + 0.0606169 * b;
    let z = 0.0139322 * r + 0.0971045 * g + 0.7141733 * b;
    (x, y, z)
}

/// CIE XYZ to linear RGB (inverse of [`linear_rgb_to_xyz`]).
pub fn xyz_to_linear_rgb(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let r = 3.1338561 * x - 1.6168667 * y - 0.4906146 * z;
    let g = -0.9787684 * x + 1.9161415 * y + 0.0334540 * z;
    let b = 0.0719453 * x - 0.2289914 * y + 1.4052427 * z;
    (r, g, b)
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// CIE XYZ to CIE Lab against the fixed reference white.
pub fn xyz_to_lab(x: f64, y: f64, z: f64) -> (f64, f64, f64) {
    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let b = 200.0 * (fy - fz);
    (l, a, b)
}

/// CIE Lab to CIE XYZ. Uses the `L > 8` switch for Y and the cube test for
/// X and Z so values near black stay finite.
pub fn lab_to_xyz(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;

    let x = if fx * fx * fx > EPSILON {
        fx * fx * fx
    } else {
        (116.0 * fx - 16.0) / KAPPA
    };

    let y = if l > 8.0 {
        ((l + 16.0) / 116.0).powi(3)
    } else {
        l / KAPPA
    };

    let z = if fz * fz * fz > EPSILON {
        fz * fz * fz
    } else {
        (116.0 * fz - 16.0) / KAPPA
    };

    (x * XN, y * YN, z * ZN)
}

/// Lab to polar LCH. Hue is in degrees, normalized into [0, 360).
pub fn lab_to_lch(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let c = (a * a + b * b).sqrt();
    let mut h = b.atan2(a).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    (l, c, h)
}

/// Polar LCH back to Lab. Hue is interpreted in degrees.
pub fn lch_to_lab(l: f64, c: f64, h: f64) -> (f64, f64, f64) {
    let h_rad = h.to_radians();
    (l, c * h_rad.cos(), c * h_rad.sin())
}

/// Clamp each channel to [0, 1]. The only gamut mapping used: out-of-gamut
/// colors are clipped, which may shift hue/chroma for extreme inputs.
pub fn gamut_clamp(rgb: [f64; 3]) -> [f64; 3] {
    [
        rgb[0].clamp(0.0, 1.0),
        rgb[1].clamp(0.0, 1.0),
        rgb[2].clamp(0.0, 1.0),
    ]
}

/// Classic max/min HSL of a hex color.
///
/// Independent of the Lab pipeline on purpose: this is the simple display
/// model most tooling expects, not a perceptual one.
pub fn classic_hsl(hex: &str) -> Result<Hsl, Error> {
    let bytes = hex_to_bytes(hex.strip_prefix('#').unwrap_or(hex))?;
    let r = bound01(f64::from(bytes[0]), 255.0);
    let g = bound01(f64::from(bytes[1]), 255.0);
    let b = bound01(f64::from(bytes[2]), 255.0);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Ok(Hsl { h: 0.0, s: 0.0, l });
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let mut h = if max == r {
        let mut h = (g - b) / d;
        if g < b {
            h += 6.0;
        }
        h
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    h /= 6.0;

    Ok(Hsl { h: h * 360.0, s, l })
}

/// Normalize a channel into [0, 1], snapping values within 1e-6 of the
/// maximum to exactly 1.0 so 255 never lands at 0 after the modulo.
fn bound01(value: f64, max: f64) -> f64 {
    let n = value.clamp(0.0, max);
    if (n - max).abs() < 1e-6 {
        return 1.0;
    }
    (n % max) / max
}
