//! Corner crop marks
//!
//! Two segments per content box corner, one running into each adjoining
//! bleed strip. Marks start at the trim corner and are clamped to the
//! bleed so they never leave the canvas.

use crate::constants::CROP_MARK_LENGTH;

use super::units::scale_points;
use super::{CropMarkSegment, Edge, PageGeometry, Point};

/// Plan up to eight crop mark segments for a page.
///
/// A segment is emitted only if the edge it runs into has bleed; its length
/// is `min(CROP_MARK_LENGTH * scale, margin)`.
pub fn plan_crop_marks(geometry: &PageGeometry, scale: f32) -> Vec<CropMarkSegment> {
    let content = geometry.content_on_canvas();
    let margins = &geometry.margins;
    let mark_length = scale_points(CROP_MARK_LENGTH, scale);

    let (left, right) = (content.x, content.right());
    let (bottom, top) = (content.y, content.top());

    // (corner, side edge, end edge)
    let corners = [
        (Point::new(left, top), Edge::Left, Edge::Top),
        (Point::new(right, top), Edge::Right, Edge::Top),
        (Point::new(left, bottom), Edge::Left, Edge::Bottom),
        (Point::new(right, bottom), Edge::Right, Edge::Bottom),
    ];

    let mut segments = Vec::with_capacity(8);
    for (corner, side_edge, end_edge) in corners {
        for edge in [side_edge, end_edge] {
            let margin = margins.get(edge);
            if margin <= 0.0 {
                continue;
            }
            let length = mark_length.min(margin);
            let end = match edge {
                Edge::Left => Point::new(corner.x - length, corner.y),
                Edge::Right => Point::new(corner.x + length, corner.y),
                Edge::Top => Point::new(corner.x, corner.y + length),
                Edge::Bottom => Point::new(corner.x, corner.y - length),
            };
            segments.push(CropMarkSegment {
                edge,
                start: corner,
                end,
            });
        }
    }

    segments
}
