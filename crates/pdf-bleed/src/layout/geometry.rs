//! Content box and canvas resolution
//!
//! Fixes the coordinate frame for a page. Runs before every other planner.

use crate::types::BleedMargins;

use super::{CanvasFrame, ContentBox, PageGeometry, Rect};

/// Pick the first candidate with a positive width.
///
/// Candidates are ordered most to least specific (trim, crop, media by
/// default). Missing boxes are `None`.
pub fn select_content_box(candidates: &[Option<Rect>]) -> Option<ContentBox> {
    candidates
        .iter()
        .flatten()
        .find(|rect| rect.width > 0.0)
        .copied()
}

/// Resolve the content box and the extended canvas for one page.
///
/// Returns `None` when no candidate box is usable; the caller treats that
/// as a fatal input error for the page.
pub fn resolve_geometry(candidates: &[Option<Rect>], margins: BleedMargins) -> Option<PageGeometry> {
    let content_box = select_content_box(candidates)?;
    let margins = margins.normalized();

    // A degenerate (non-positive) height is kept; the planners skip
    // whatever it disables.
    let canvas = CanvasFrame {
        width: content_box.width + margins.left + margins.right,
        height: content_box.height.max(0.0) + margins.top + margins.bottom,
    };

    Some(PageGeometry {
        content_box,
        margins,
        canvas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_wins_over_crop_and_media() {
        let trim = Rect::new(9.0, 9.0, 594.0, 774.0);
        let media = Rect::new(0.0, 0.0, 612.0, 792.0);
        let picked = select_content_box(&[Some(trim), None, Some(media)]).unwrap();
        assert_eq!(picked, trim);
    }

    #[test]
    fn test_zero_width_box_is_skipped() {
        let empty_trim = Rect::new(0.0, 0.0, 0.0, 792.0);
        let crop = Rect::new(0.0, 0.0, 600.0, 780.0);
        let picked = select_content_box(&[Some(empty_trim), Some(crop), None]).unwrap();
        assert_eq!(picked, crop);
    }

    #[test]
    fn test_negative_bleed_is_clamped_per_edge() {
        let media = Rect::new(0.0, 0.0, 100.0, 200.0);
        let geometry =
            resolve_geometry(&[Some(media)], BleedMargins::new(-5.0, 10.0, 0.0, 4.0)).unwrap();

        assert_eq!(geometry.margins, BleedMargins::new(0.0, 10.0, 0.0, 4.0));
        assert_eq!(geometry.canvas.width, 110.0);
        assert_eq!(geometry.canvas.height, 204.0);
    }
}
