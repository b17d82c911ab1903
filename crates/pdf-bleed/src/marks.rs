//! Finishing marks and mirrored bleed rendering
//!
//! Turns a [`PagePlan`] into drawing calls on a [`Canvas`]. Every group of
//! calls runs inside its own graphics state scope so clip paths, transforms
//! and stroke settings never leak from one step into the next.

use crate::constants::{
    CROP_MARK_WIDTH, GROMMET_LINE_WIDTH, GROMMET_MARK_SIZE, GROMMET_OUTLINE_WIDTH,
};
use crate::layout::{CropMarkSegment, GrommetMark, MirrorRegion, PagePlan, scale_points};
use crate::render::{Canvas, StrokeColor};

/// Draw a complete finished page: content, mirrored bleed, then marks.
pub fn draw_page<C: Canvas>(canvas: &mut C, plan: &PagePlan, object_name: &str) {
    let mut page = canvas.scope();

    let content = plan.geometry.content_on_canvas();
    page.draw_object_at(object_name, content.x, content.y);

    draw_mirrors(&mut *page, &plan.mirrors, object_name);
    draw_crop_marks(&mut *page, &plan.crop_marks, plan.unit_scale);
    draw_grommet_marks(&mut *page, &plan.grommets, plan.unit_scale);
}

/// Draw the page object once per mirrored strip, clipped to that strip
pub fn draw_mirrors<C: Canvas>(canvas: &mut C, regions: &[MirrorRegion], object_name: &str) {
    for region in regions {
        let mut strip = canvas.scope();
        strip.set_clip_rect(&region.clip);
        strip.apply_affine(&region.reflection);
        strip.draw_object_at(object_name, region.placement.x, region.placement.y);
    }
}

/// Stroke crop mark segments in black
pub fn draw_crop_marks<C: Canvas>(canvas: &mut C, segments: &[CropMarkSegment], scale: f32) {
    if segments.is_empty() {
        return;
    }

    let mut marks = canvas.scope();
    marks.set_stroke_color(StrokeColor::Black);
    marks.set_line_width(scale_points(CROP_MARK_WIDTH, scale));
    for segment in segments {
        marks.move_to(segment.start.x, segment.start.y);
        marks.line_to(segment.end.x, segment.end.y);
        marks.stroke();
    }
}

/// Stroke grommet crosses: a wide white pass under a thin black one, so the
/// mark reads on both light and dark artwork.
pub fn draw_grommet_marks<C: Canvas>(canvas: &mut C, marks: &[GrommetMark], scale: f32) {
    if marks.is_empty() {
        return;
    }

    let half = scale_points(GROMMET_MARK_SIZE, scale) / 2.0;
    let passes = [
        (StrokeColor::White, GROMMET_OUTLINE_WIDTH),
        (StrokeColor::Black, GROMMET_LINE_WIDTH),
    ];

    let mut grommets = canvas.scope();
    for (color, width) in passes {
        grommets.set_stroke_color(color);
        grommets.set_line_width(scale_points(width, scale));
        for mark in marks {
            let c = mark.center;
            grommets.move_to(c.x - half, c.y);
            grommets.line_to(c.x + half, c.y);
            grommets.move_to(c.x, c.y - half);
            grommets.line_to(c.x, c.y + half);
        }
        grommets.stroke();
    }
}
