pub mod allowlist;
pub mod completeness;
pub mod diff;
pub mod entity;
pub mod extract;
pub mod gateway;
pub mod session;

pub use diff::{changed_payload, compute_diff, DiffOptions};
pub use entity::{CompanyEdit, CustomerEdit, EditableEntity};
pub use extract::extract_editable;
pub use session::{EditSession, SaveOutcome};

#[cfg(test)]
pub mod test_utils;
