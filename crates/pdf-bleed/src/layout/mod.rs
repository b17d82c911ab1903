//! Layout calculation modules for print finishing
//!
//! This module handles all the geometric calculations, independent of any
//! PDF drawing:
//! - Content box and canvas resolution
//! - Mirrored bleed strips (clip, reflection, placement)
//! - Corner crop marks
//! - Grommet positions along the perimeter
//! - Physical unit scaling

mod crop;
mod geometry;
mod grommet;
mod mirror;
mod plan;
mod types;
mod units;

pub use crop::*;
pub use geometry::*;
pub use grommet::*;
pub use mirror::*;
pub use plan::*;
pub use types::*;
pub use units::*;
