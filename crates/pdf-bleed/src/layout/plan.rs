//! Per-page planning
//!
//! Runs the geometry resolver, then each enabled planner against the frame
//! it fixed. The planners are independent of each other.

use crate::options::FinishingOptions;

use super::units::to_page_units;
use super::{
    PagePlan, Rect, grommet_marks, plan_crop_marks, plan_grommets, plan_mirrors, resolve_geometry,
};

/// Plan everything drawn on one finished page.
///
/// `candidates` are the page's boxes in `options.box_precedence` order.
/// Returns `None` when none of them is usable.
pub fn plan_page(
    candidates: &[Option<Rect>],
    options: &FinishingOptions,
    unit_scale: f32,
) -> Option<PagePlan> {
    let geometry = resolve_geometry(candidates, options.margins)?;

    let mirrors = if options.mirror_bleed {
        plan_mirrors(&geometry)
    } else {
        Vec::new()
    };

    let crop_marks = if options.crop_marks {
        plan_crop_marks(&geometry, unit_scale)
    } else {
        Vec::new()
    };

    let content = geometry.content_box;
    let grommets = match &options.grommets {
        Some(_) if content.width <= 0.0 || content.height <= 0.0 => {
            log::debug!("Degenerate content box, skipping grommets");
            Vec::new()
        }
        Some(grommet) => {
            let spacing = to_page_units(grommet.spacing_in, unit_scale);
            let offset = to_page_units(grommet.offset_in, unit_scale);
            let positions =
                plan_grommets(content.width, content.height, spacing, offset, grommet.policy);
            grommet_marks(&geometry, &positions, offset)
        }
        None => Vec::new(),
    };

    Some(PagePlan {
        geometry,
        unit_scale,
        mirrors,
        crop_marks,
        grommets,
    })
}
