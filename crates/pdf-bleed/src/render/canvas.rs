//! Drawing surface for finished pages
//!
//! The planners never touch PDF operators; everything they produce is
//! drawn through the [`Canvas`] trait. [`ContentStream`] is the PDF
//! implementation, building content stream operators as text.

use std::fmt::Write;
use std::ops::{Deref, DerefMut};

use crate::layout::{Affine, Rect};

/// Stroke colors used by finishing marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeColor {
    Black,
    White,
}

/// Drawing primitives needed to render a finished page
pub trait Canvas {
    /// Push the graphics state
    fn save_state(&mut self);
    /// Pop the graphics state
    fn restore_state(&mut self);
    /// Intersect the clip path with a rectangle
    fn set_clip_rect(&mut self, rect: &Rect);
    fn set_stroke_color(&mut self, color: StrokeColor);
    fn set_line_width(&mut self, width: f32);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self);
    /// Concatenate a transform onto the current matrix
    fn apply_affine(&mut self, m: &Affine);
    /// Paint a named XObject with its origin at `(x, y)`.
    ///
    /// The translation does not outlive the call.
    fn draw_object_at(&mut self, name: &str, x: f32, y: f32);

    /// Save the graphics state until the returned guard is dropped.
    ///
    /// The restore runs on every exit path, including `?` returns and
    /// unwinding, so state never leaks between drawing steps.
    fn scope(&mut self) -> StateScope<'_, Self>
    where
        Self: Sized,
    {
        self.save_state();
        StateScope { canvas: self }
    }
}

/// Guard returned by [`Canvas::scope`]
pub struct StateScope<'a, C: Canvas> {
    canvas: &'a mut C,
}

impl<C: Canvas> Deref for StateScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas> DerefMut for StateScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas> Drop for StateScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore_state();
    }
}

/// PDF content stream builder
#[derive(Debug, Default, Clone)]
pub struct ContentStream {
    ops: String,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.ops
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.ops.into_bytes()
    }

    // Writing into a String cannot fail
    fn op(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.ops.write_fmt(args);
        self.ops.push('\n');
    }
}

impl Canvas for ContentStream {
    fn save_state(&mut self) {
        self.ops.push_str("q\n");
    }

    fn restore_state(&mut self) {
        self.ops.push_str("Q\n");
    }

    fn set_clip_rect(&mut self, rect: &Rect) {
        self.op(format_args!(
            "{} {} {} {} re W n",
            rect.x, rect.y, rect.width, rect.height
        ));
    }

    fn set_stroke_color(&mut self, color: StrokeColor) {
        match color {
            StrokeColor::Black => self.ops.push_str("0 G\n"),
            StrokeColor::White => self.ops.push_str("1 G\n"),
        }
    }

    fn set_line_width(&mut self, width: f32) {
        self.op(format_args!("{} w", width));
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.op(format_args!("{} {} m", x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.op(format_args!("{} {} l", x, y));
    }

    fn stroke(&mut self) {
        self.ops.push_str("S\n");
    }

    fn apply_affine(&mut self, m: &Affine) {
        self.op(format_args!(
            "{} {} {} {} {} {} cm",
            m.a, m.b, m.c, m.d, m.e, m.f
        ));
    }

    fn draw_object_at(&mut self, name: &str, x: f32, y: f32) {
        self.op(format_args!("q 1 0 0 1 {} {} cm /{} Do Q", x, y, name));
    }
}
