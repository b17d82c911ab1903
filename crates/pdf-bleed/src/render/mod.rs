//! PDF rendering modules for finishing
//!
//! This module handles all PDF-specific operations:
//! - Reading page boxes and unit metadata
//! - Creating XObjects from source pages
//! - Building finished output pages
//! - Emitting drawing operators through the `Canvas` trait

mod boxes;
mod canvas;
mod page;
mod xobject;

pub use boxes::{page_box_candidates, read_page_box, read_user_unit};
pub use canvas::{Canvas, ContentStream, StateScope, StrokeColor};
pub use page::render_finished_page;
pub use xobject::{copy_object_deep, create_page_xobject};
