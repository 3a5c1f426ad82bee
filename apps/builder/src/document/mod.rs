// Document model operations: migration, typed edits, tag lists, samples.

pub mod completeness;
pub mod edit;
pub mod normalize;
pub mod sample;
pub mod tags;

pub use completeness::{check_completeness, CompletenessCheck};
pub use edit::{apply_edit, DocumentEdit, EditError};
pub use normalize::normalize;
