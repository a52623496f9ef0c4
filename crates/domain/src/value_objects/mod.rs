//! Value objects - Immutable objects defined by their attributes

mod draft_entry;
mod selection_set;
mod session;

pub use draft_entry::{DraftEntry, DraftField, ParseDraftFieldError};
pub use selection_set::SelectionSet;
pub use session::{Session, UserRole};
