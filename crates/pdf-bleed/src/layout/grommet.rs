//! Grommet placement along the trim perimeter
//!
//! Positions are 1-D offsets from the content box origin. X positions only
//! ever produce marks on the top and bottom rows and Y positions only on the
//! left and right columns, so no mark can land in the interior.

use crate::constants::{FIXED_STEP_EPSILON, MAX_GROMMETS_PER_EDGE};
use crate::types::GrommetSpacingPolicy;

use super::{Edge, GrommetMark, GrommetPositions, PageGeometry, Point};

/// Positions along both axes of a `distance_x` by `distance_y` area.
///
/// Empty when `spacing <= 0`; an axis is empty on its own when
/// `2 * offset >= distance` along it, or when the spacing would put more
/// than `MAX_GROMMETS_PER_EDGE` marks on it.
pub fn plan_grommets(
    distance_x: f32,
    distance_y: f32,
    spacing: f32,
    offset: f32,
    policy: GrommetSpacingPolicy,
) -> GrommetPositions {
    GrommetPositions {
        x: axis_positions(distance_x, spacing, offset, policy),
        y: axis_positions(distance_y, spacing, offset, policy),
    }
}

/// Positions along a single axis
pub fn axis_positions(
    distance: f32,
    spacing: f32,
    offset: f32,
    policy: GrommetSpacingPolicy,
) -> Vec<f32> {
    if spacing <= 0.0 {
        return Vec::new();
    }
    let usable = distance - 2.0 * offset;
    if usable <= 0.0 {
        log::debug!(
            "Grommet offset {} leaves no usable span on a {} axis",
            offset,
            distance
        );
        return Vec::new();
    }

    let intervals = match policy {
        GrommetSpacingPolicy::Distribute => (usable / spacing).ceil().max(1.0),
        GrommetSpacingPolicy::FixedStep => ((usable + FIXED_STEP_EPSILON) / spacing).floor(),
    };
    if intervals >= MAX_GROMMETS_PER_EDGE as f32 {
        log::warn!(
            "Grommet spacing {} is too small for a {} axis, skipping grommets along it",
            spacing,
            distance
        );
        return Vec::new();
    }

    match policy {
        GrommetSpacingPolicy::Distribute => distribute(usable, intervals as usize, offset),
        GrommetSpacingPolicy::FixedStep => fixed_step(distance, spacing, offset),
    }
}

fn distribute(usable: f32, intervals: usize, offset: f32) -> Vec<f32> {
    let actual = usable / intervals as f32;
    (0..=intervals)
        .map(|i| offset + i as f32 * actual)
        .collect()
}

fn fixed_step(distance: f32, spacing: f32, offset: f32) -> Vec<f32> {
    let limit = distance - offset + FIXED_STEP_EPSILON;
    // Multiply, never accumulate
    (0..MAX_GROMMETS_PER_EDGE)
        .map(|i| offset + i as f32 * spacing)
        .take_while(|&pos| pos <= limit)
        .collect()
}

/// Turn axis positions into cross marks on the content perimeter.
///
/// Each X position yields a mark on the bottom row and one on the top row,
/// each Y position one on the left column and one on the right, all `offset`
/// inside the trim line.
pub fn grommet_marks(
    geometry: &PageGeometry,
    positions: &GrommetPositions,
    offset: f32,
) -> Vec<GrommetMark> {
    let content = geometry.content_on_canvas();
    let mut marks = Vec::with_capacity(2 * (positions.x.len() + positions.y.len()));

    for &x in &positions.x {
        let cx = content.x + x;
        marks.push(GrommetMark {
            edge: Edge::Top,
            center: Point::new(cx, content.top() - offset),
        });
        marks.push(GrommetMark {
            edge: Edge::Bottom,
            center: Point::new(cx, content.y + offset),
        });
    }

    for &y in &positions.y {
        let cy = content.y + y;
        marks.push(GrommetMark {
            edge: Edge::Left,
            center: Point::new(content.x + offset, cy),
        });
        marks.push(GrommetMark {
            edge: Edge::Right,
            center: Point::new(content.right() - offset, cy),
        });
    }

    marks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribute_single_interval() {
        // Spacing larger than the span still yields both endpoints
        let positions = axis_positions(100.0, 500.0, 10.0, GrommetSpacingPolicy::Distribute);
        assert_eq!(positions, vec![10.0, 90.0]);
    }

    #[test]
    fn test_fixed_step_exact_multiple_keeps_last_mark() {
        // 0.1 steps accumulate rounding; the far offset must still be hit
        let positions = axis_positions(1.2, 0.1, 0.1, GrommetSpacingPolicy::FixedStep);
        assert_eq!(positions.len(), 11);
        assert!((positions[10] - 1.1).abs() < 1e-4);
    }
}
