//! Physical unit scaling
//!
//! Bleed margins are already in page units and never pass through here.
//! Everything specified in inches, and every mark dimension, does.

use crate::constants::{DEFAULT_UNIT_SCALE, POINTS_PER_INCH};

/// Convert a physical length in inches to page units
#[inline]
pub fn to_page_units(inches: f32, scale: f32) -> f32 {
    inches * POINTS_PER_INCH * scale
}

/// Scale a mark dimension given in points at unit scale 1
#[inline]
pub fn scale_points(points: f32, scale: f32) -> f32 {
    points * scale
}

/// Unit scale for a page declaring the given `/UserUnit`.
///
/// One page unit is `user_unit / 72` inch, so physical sizes shrink by the
/// same factor to stay constant on paper. Missing or invalid values fall
/// back to the default scale.
pub fn unit_scale_for_user_unit(user_unit: Option<f32>) -> f32 {
    match user_unit {
        Some(u) if u.is_finite() && u > 0.0 => 1.0 / u,
        _ => DEFAULT_UNIT_SCALE,
    }
}
