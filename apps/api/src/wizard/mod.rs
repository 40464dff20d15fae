// Resume wizard: typed answers, the fixed step table, and the controller that
// sequences them. Only `handlers` touches HTTP; everything else is synchronous.

pub mod controller;
pub mod fields;
pub mod handlers;
pub mod steps;
pub mod summary;
pub mod validation;
pub mod view;

use thiserror::Error;

pub use controller::WizardController;
pub use view::CurrentView;

/// Caller contract violations. The step table is static, so these only occur
/// when a renderer sends a bad field name or index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    #[error("Field '{field}' is not a {expected} field")]
    InvalidFieldAccess {
        field: String,
        expected: &'static str,
    },

    #[error("Index {index} is out of range for '{field}' ({len} entries)")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },
}
