//! Output page rendering for finishing

use crate::constants::PAGE_XOBJECT_NAME;
use crate::layout::{PagePlan, Rect};
use crate::marks::draw_page;
use crate::types::Result;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

use super::canvas::ContentStream;
use super::xobject::create_page_xobject;

/// Render one finished output page.
///
/// The page is sized to the plan's canvas, carries the trim line as its
/// `TrimBox` and the full canvas as its `BleedBox`, and copies the source
/// page's `/UserUnit` when one was declared.
///
/// # Arguments
/// * `output` - The output document
/// * `source` - The source document containing the page
/// * `source_page_id` - Object ID of the source page
/// * `plan` - Layout planned for this page
/// * `user_unit` - The source page's declared `/UserUnit`, if any
/// * `parent_pages_id` - The parent Pages object ID
/// * `cache` - Deep copy cache shared across the document
pub fn render_finished_page(
    output: &mut Document,
    source: &Document,
    source_page_id: ObjectId,
    plan: &PagePlan,
    user_unit: Option<f32>,
    parent_pages_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let canvas = plan.geometry.canvas;
    let full = Rect::new(0.0, 0.0, canvas.width, canvas.height);

    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set("MediaBox", rect_to_array(&full));
    page_dict.set("BleedBox", rect_to_array(&full));
    page_dict.set("TrimBox", rect_to_array(&plan.geometry.content_on_canvas()));
    if let Some(unit) = user_unit {
        page_dict.set("UserUnit", Object::Real(unit));
    }

    let xobject_id = create_page_xobject(
        output,
        source,
        source_page_id,
        &plan.geometry.content_box,
        cache,
    )?;
    let mut xobjects = Dictionary::new();
    xobjects.set(PAGE_XOBJECT_NAME, Object::Reference(xobject_id));

    let mut content = ContentStream::new();
    draw_page(&mut content, plan, PAGE_XOBJECT_NAME);
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

fn rect_to_array(rect: &Rect) -> Object {
    Object::Array(vec![
        Object::Real(rect.x),
        Object::Real(rect.y),
        Object::Real(rect.right()),
        Object::Real(rect.top()),
    ])
}
