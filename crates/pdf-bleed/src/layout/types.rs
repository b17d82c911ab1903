//! Layout data types for print finishing
//!
//! These are plain values computed fresh for every page and handed to the
//! renderer. All coordinates are in output canvas space: origin at the
//! bottom-left of the extended page, y growing upward.

use crate::types::BleedMargins;

/// One side of the content box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// All edges, in planning order
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Left and right edges are mirrored horizontally
    pub fn is_vertical(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }
}

/// A point in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from two opposite corners in any order
    pub fn from_corners(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0.min(x1),
            y: y0.min(y1),
            width: (x1 - x0).abs(),
            height: (y1 - y0).abs(),
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// True when the open interiors of the two rectangles intersect
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.top()
            && other.y < self.top()
    }
}

/// Authoritative content area of a source page, in source page coordinates
pub type ContentBox = Rect;

/// Size of the output page: the content box grown by the bleed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    pub width: f32,
    pub height: f32,
}

/// Resolved coordinate frame for one page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Content box in source page coordinates
    pub content_box: ContentBox,
    /// Bleed with non-positive edges clamped to zero
    pub margins: BleedMargins,
    /// Extended output page size
    pub canvas: CanvasFrame,
}

impl PageGeometry {
    /// Where the content box sits on the output canvas
    pub fn content_on_canvas(&self) -> Rect {
        Rect::new(
            self.margins.left,
            self.margins.bottom,
            self.content_box.width,
            self.content_box.height,
        )
    }
}

/// 2-D affine transform `[a b c d e f]`, in the PDF `cm` operand order.
///
/// Maps `(x, y)` to `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn translate(tx: f32, ty: f32) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    /// Horizontal flip (`x -> -x`) followed by a shift of `tx`
    pub fn flip_horizontal(tx: f32) -> Self {
        Self {
            a: -1.0,
            e: tx,
            ..Self::IDENTITY
        }
    }

    /// Vertical flip (`y -> -y`) followed by a shift of `ty`
    pub fn flip_vertical(ty: f32) -> Self {
        Self {
            d: -1.0,
            f: ty,
            ..Self::IDENTITY
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Transform that applies `inner` first, then `self`
    pub fn after(&self, inner: &Affine) -> Affine {
        Affine {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }
}

/// Instructions for drawing one mirrored bleed strip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirrorRegion {
    /// Which edge this strip extends
    pub edge: Edge,
    /// Drawing is clipped to this strip
    pub clip: Rect,
    /// Reflection (with re-anchoring translation) applied before drawing
    pub reflection: Affine,
    /// Where the content box origin is drawn once `reflection` is in effect
    pub placement: Point,
}

impl MirrorRegion {
    /// Full canvas-to-canvas map for this strip.
    ///
    /// Takes a point of the unmirrored content (already placed on the
    /// canvas at `content_origin`) to where its mirrored copy lands.
    pub fn canvas_transform(&self, content_origin: Point) -> Affine {
        let to_local = Affine::translate(
            self.placement.x - content_origin.x,
            self.placement.y - content_origin.y,
        );
        self.reflection.after(&to_local)
    }
}

/// An axis-aligned crop mark line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropMarkSegment {
    /// Edge whose bleed this segment extends into
    pub edge: Edge,
    /// The content box corner
    pub start: Point,
    /// End point, away from the content
    pub end: Point,
}

impl CropMarkSegment {
    pub fn length(&self) -> f32 {
        (self.end.x - self.start.x).abs() + (self.end.y - self.start.y).abs()
    }
}

/// Realized grommet cross position in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrommetMark {
    /// Edge the mark sits along
    pub edge: Edge,
    pub center: Point,
}

/// Grommet offsets along each axis, measured from the content box origin
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GrommetPositions {
    /// Positions along the width, used for the top and bottom rows
    pub x: Vec<f32>,
    /// Positions along the height, used for the left and right columns
    pub y: Vec<f32>,
}

/// Everything needed to render one finished page
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    pub geometry: PageGeometry,
    /// Multiplier applied to physical (inch-based) sizes
    pub unit_scale: f32,
    pub mirrors: Vec<MirrorRegion>,
    pub crop_marks: Vec<CropMarkSegment>,
    pub grommets: Vec<GrommetMark>,
}
