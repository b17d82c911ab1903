//! Page box and unit metadata
//!
//! Reads the boundary boxes and `/UserUnit` of source pages, following
//! page tree inheritance where the PDF format allows it.

use crate::layout::Rect;
use crate::types::BoxKind;
use lopdf::{Document, Object, ObjectId};

/// Page tree depth beyond which a `/Parent` chain is treated as cyclic
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// Read one boundary box of a page.
///
/// Returns `None` when the box is absent or malformed.
pub fn read_page_box(doc: &Document, page_id: ObjectId, kind: BoxKind) -> Option<Rect> {
    let obj = if kind.inheritable() {
        inherited_attribute(doc, page_id, kind.key())?
    } else {
        doc.get_dictionary(page_id)
            .ok()?
            .get(kind.key())
            .ok()
            .map(|obj| resolve(doc, obj))?
    };

    let rect = obj.as_array().ok().and_then(|arr| rect_from_array(arr));
    if rect.is_none() {
        log::warn!(
            "Ignoring malformed {} on page object {:?}",
            String::from_utf8_lossy(kind.key()),
            page_id
        );
    }
    rect
}

/// Read the candidate boxes of a page in the given precedence order
pub fn page_box_candidates(
    doc: &Document,
    page_id: ObjectId,
    precedence: &[BoxKind],
) -> Vec<Option<Rect>> {
    precedence
        .iter()
        .map(|&kind| read_page_box(doc, page_id, kind))
        .collect()
}

/// Declared `/UserUnit` of a page, if any
pub fn read_user_unit(doc: &Document, page_id: ObjectId) -> Option<f32> {
    let obj = doc.get_dictionary(page_id).ok()?.get(b"UserUnit").ok()?;
    let value = extract_number(resolve(doc, obj));
    match value {
        Some(u) if u.is_finite() && u > 0.0 => Some(u),
        _ => {
            log::warn!("Ignoring invalid UserUnit on page object {:?}", page_id);
            None
        }
    }
}

/// Look up a page attribute, walking up the `/Parent` chain
pub(crate) fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Option<&'a Object> {
    let mut node = doc.get_dictionary(page_id).ok()?;
    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(obj) = node.get(key) {
            return Some(resolve(doc, obj));
        }
        let parent = node.get(b"Parent").ok()?.as_reference().ok()?;
        node = doc.get_dictionary(parent).ok()?;
    }
    None
}

/// Follow a single indirect reference
fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Parse `[x0 y0 x1 y1]` in any corner order
fn rect_from_array(arr: &[Object]) -> Option<Rect> {
    if arr.len() != 4 {
        return None;
    }
    let x0 = extract_number(&arr[0])?;
    let y0 = extract_number(&arr[1])?;
    let x1 = extract_number(&arr[2])?;
    let y1 = extract_number(&arr[3])?;
    Some(Rect::from_corners(x0, y0, x1, y1))
}

/// Extract numeric value from a PDF object
pub(crate) fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
