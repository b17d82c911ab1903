//! Shared constants for print finishing
//!
//! This module centralizes magic numbers used by the layout planners and
//! the mark renderer. Physical sizes are in points at a unit scale of 1 and
//! get multiplied by the page's unit scale before use.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Unit scale used when a page declares none
pub const DEFAULT_UNIT_SCALE: f32 = 1.0;

// =============================================================================
// Crop Marks
// =============================================================================

/// Length of each crop mark segment (points), before clamping to the bleed
pub const CROP_MARK_LENGTH: f32 = 12.0;

/// Line width for crop marks (points)
pub const CROP_MARK_WIDTH: f32 = 0.25;

// =============================================================================
// Grommet Marks
// =============================================================================

/// Full arm length of a grommet cross (points)
pub const GROMMET_MARK_SIZE: f32 = 18.0;

/// Width of the white under-stroke of a grommet cross (points)
pub const GROMMET_OUTLINE_WIDTH: f32 = 2.0;

/// Width of the black over-stroke of a grommet cross (points)
pub const GROMMET_LINE_WIDTH: f32 = 0.75;

/// Default inset of the grommet line from the trim edge (inches)
pub const DEFAULT_GROMMET_OFFSET_IN: f32 = 0.5;

/// Upper bound on grommet positions along one axis
pub const MAX_GROMMETS_PER_EDGE: usize = 10_000;

/// Slack allowed past the far offset when stepping at a fixed interval.
///
/// Without it, a span that is an exact multiple of the spacing can lose its
/// last mark to accumulated rounding (points, f32).
pub const FIXED_STEP_EPSILON: f32 = 1e-3;

// =============================================================================
// Source Pages
// =============================================================================

/// Resource name of the source page Form XObject on each output page
pub const PAGE_XOBJECT_NAME: &str = "Pg";
