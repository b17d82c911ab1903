pub mod constants;
pub mod finish;
pub mod layout;
pub mod marks;
pub mod render;
mod options;
mod stats;
mod types;

pub use finish::{finish, finish_document, load_pdf, save_pdf};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
