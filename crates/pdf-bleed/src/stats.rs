use crate::finish::{plan_source_page, source_page_ids};
use crate::options::FinishingOptions;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for finishing a document, without rendering it
pub fn calculate_statistics(
    document: &Document,
    options: &FinishingOptions,
) -> Result<FinishingStatistics> {
    options.validate()?;

    let page_ids = source_page_ids(document)?;
    let mut stats = FinishingStatistics {
        pages: page_ids.len(),
        ..Default::default()
    };

    for (index, &page_id) in page_ids.iter().enumerate() {
        let plan = plan_source_page(document, page_id, index + 1, options)?.plan;
        let canvas = plan.geometry.canvas;
        stats.canvas_sizes.push((canvas.width, canvas.height));
        stats.mirrored_edges += plan.mirrors.len();
        stats.crop_mark_segments += plan.crop_marks.len();
        stats.grommet_marks += plan.grommets.len();
    }

    Ok(stats)
}
