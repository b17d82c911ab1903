use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinishError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to finish")]
    NoPages,
    #[error("Page {page} has no trim, crop or media box with a positive width")]
    NoUsableBox { page: usize },
}

pub type Result<T> = std::result::Result<T, FinishError>;

/// Page boundary boxes a content box can be resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoxKind {
    /// Intended finished size after trimming
    Trim,
    /// Visible region when displayed
    Crop,
    /// Full physical page
    Media,
}

impl BoxKind {
    /// Default precedence, most to least specific
    pub const PRECEDENCE: [BoxKind; 3] = [BoxKind::Trim, BoxKind::Crop, BoxKind::Media];

    /// Name of the page dictionary key holding this box
    pub fn key(self) -> &'static [u8] {
        match self {
            BoxKind::Trim => b"TrimBox",
            BoxKind::Crop => b"CropBox",
            BoxKind::Media => b"MediaBox",
        }
    }

    /// Whether the box is inherited from ancestor page tree nodes
    pub fn inheritable(self) -> bool {
        matches!(self, BoxKind::Crop | BoxKind::Media)
    }
}

/// How grommet positions are spread along an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GrommetSpacingPolicy {
    /// Shrink the interval so that N equal gaps exactly fill the usable span.
    /// Marks always land on both offsets.
    #[default]
    Distribute,
    /// Step by exactly the requested spacing, stopping at or before the far offset.
    /// The far offset only gets a mark when the span divides evenly.
    FixedStep,
}

/// Bleed added on each side of the content box, in page units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BleedMargins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl BleedMargins {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same bleed on all four sides
    pub fn uniform(bleed: f32) -> Self {
        Self::new(bleed, bleed, bleed, bleed)
    }

    /// Clamp every non-positive margin to zero.
    ///
    /// Each edge is checked on its own, so a single disabled edge never
    /// affects the other three.
    pub fn normalized(self) -> Self {
        let clamp = |v: f32| if v > 0.0 { v } else { 0.0 };
        Self {
            left: clamp(self.left),
            right: clamp(self.right),
            top: clamp(self.top),
            bottom: clamp(self.bottom),
        }
    }

    /// Margin on the given edge
    pub fn get(&self, edge: crate::layout::Edge) -> f32 {
        use crate::layout::Edge;
        match edge {
            Edge::Left => self.left,
            Edge::Right => self.right,
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
        }
    }

    /// Whether mirroring and marks are enabled on the given edge
    pub fn is_active(&self, edge: crate::layout::Edge) -> bool {
        self.get(edge) > 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite()
    }
}

/// Summary of what finishing a document produces
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FinishingStatistics {
    /// Number of pages processed
    pub pages: usize,
    /// Output canvas size (width, height) in page units, per page
    pub canvas_sizes: Vec<(f32, f32)>,
    /// Total mirrored bleed strips across all pages
    pub mirrored_edges: usize,
    /// Total crop mark segments across all pages
    pub crop_mark_segments: usize,
    /// Total grommet marks across all pages
    pub grommet_marks: usize,
}
