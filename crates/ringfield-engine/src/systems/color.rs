//! Random color generation for field meshes.

use crate::components::mesh::Color;
use crate::core::rng::Rng;

/// Largest packed 24-bit color value.
const MAX_HEX: f32 = 16_777_215.0;

/// Convert HSL to RGB. `hue` is in degrees (any value, wrapped into 0..360),
/// `saturation` and `lightness` are percentages 0..=100.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Color {
    let h = hue.rem_euclid(360.0) / 360.0;
    let s = (saturation / 100.0).clamp(0.0, 1.0);
    let l = (lightness / 100.0).clamp(0.0, 1.0);

    if s == 0.0 {
        return Color::new(l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Color::new(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Any 24-bit color.
pub fn color_random(rng: &mut Rng) -> Color {
    Color::from_hex((rng.next_f32() * MAX_HEX).floor() as u32)
}

/// Fully saturated, mid-lightness color with a random hue.
pub fn color_object(rng: &mut Rng) -> Color {
    hsl_to_rgb(rng.math_range(0.0, 360.0), 100.0, 50.0)
}

/// Random hue between `hue_init` and `hue_final` degrees at the given
/// saturation and lightness percentages.
///
/// Out-of-range inputs fall back instead of clamping: `hue_init` → 0,
/// `hue_final` → 360, `sat` → 100, `light` → 50. In-range values are rounded.
pub fn color_object_hue(rng: &mut Rng, hue_init: f32, hue_final: f32, sat: f32, light: f32) -> Color {
    let hue_init = if !(0.0..=360.0).contains(&hue_init) { 0.0 } else { hue_init.round() };
    let hue_final = if !(0.0..=360.0).contains(&hue_final) { 360.0 } else { hue_final.round() };
    let sat = if !(0.0..=100.0).contains(&sat) { 100.0 } else { sat.round() };
    let light = if !(0.0..=100.0).contains(&light) { 50.0 } else { light.round() };

    hsl_to_rgb(rng.math_range(hue_init, hue_final), sat, light)
}
