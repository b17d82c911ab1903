//! Print finishing - bleed, crop marks and grommets for each page
//!
//! This module orchestrates the finishing process:
//! 1. Resolve each page's content box and extended canvas
//! 2. Plan mirrored bleed strips, crop marks and grommet marks
//! 3. Render every page to the output PDF
//!
//! Pages are processed strictly in order, one at a time. Nothing but the
//! output document is carried from one page to the next.

mod io;

pub use io::{load_pdf, save_pdf};

use crate::layout::{PagePlan, plan_page, unit_scale_for_user_unit};
use crate::options::FinishingOptions;
use crate::render::{page_box_candidates, read_user_unit, render_finished_page};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// Main finishing function
pub async fn finish(document: &Document, options: &FinishingOptions) -> Result<Document> {
    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || finish_document(&document, &options)).await?
}

/// Blocking counterpart of [`finish`]
pub fn finish_document(source: &Document, options: &FinishingOptions) -> Result<Document> {
    options.validate()?;

    let page_ids = source_page_ids(source)?;
    log::info!(
        "Finishing {} page(s) with bleed {:?}",
        page_ids.len(),
        options.margins
    );

    let mut output = Document::with_version("1.7");
    let pages_tree_id = output.new_object_id();
    let mut page_refs = Vec::with_capacity(page_ids.len());
    let mut cache: HashMap<ObjectId, ObjectId> = HashMap::new();

    for (index, &page_id) in page_ids.iter().enumerate() {
        let page = plan_source_page(source, page_id, index + 1, options)?;
        let output_page_id = render_finished_page(
            &mut output,
            source,
            page_id,
            &page.plan,
            page.user_unit,
            pages_tree_id,
            &mut cache,
        )?;
        page_refs.push(Object::Reference(output_page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    output
        .objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = output.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));

    output.trailer.set("Root", catalog_id);

    Ok(output)
}

/// A planned source page, plus the unit metadata its output page inherits
pub(crate) struct SourcePage {
    pub plan: PagePlan,
    pub user_unit: Option<f32>,
}

/// Source page IDs in page order
pub(crate) fn source_page_ids(source: &Document) -> Result<Vec<ObjectId>> {
    let page_ids: Vec<ObjectId> = source.get_pages().values().copied().collect();
    if page_ids.is_empty() {
        return Err(FinishError::NoPages);
    }
    Ok(page_ids)
}

/// Resolve and plan one source page. `page_number` is 1-based.
pub(crate) fn plan_source_page(
    source: &Document,
    page_id: ObjectId,
    page_number: usize,
    options: &FinishingOptions,
) -> Result<SourcePage> {
    let candidates = page_box_candidates(source, page_id, &options.box_precedence);
    let user_unit = read_user_unit(source, page_id);
    let unit_scale = unit_scale_for_user_unit(user_unit);

    let plan = plan_page(&candidates, options, unit_scale).ok_or(FinishError::NoUsableBox {
        page: page_number,
    })?;

    let canvas = plan.geometry.canvas;
    log::debug!(
        "Page {}: content {:?}, canvas {}x{}, {} mirror(s), {} crop segment(s), {} grommet(s)",
        page_number,
        plan.geometry.content_box,
        canvas.width,
        canvas.height,
        plan.mirrors.len(),
        plan.crop_marks.len(),
        plan.grommets.len()
    );

    Ok(SourcePage { plan, user_unit })
}
