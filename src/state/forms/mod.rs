//! Form domain layer
//!
//! Declarative field lists, validation rules, the form engine that owns a
//! form's state, and the page wrapper that adds keyboard focus.

mod engine;
mod field;
mod page;
mod rules;

pub use engine::{FieldProps, FormEngine, SubmitOutcome, TracingObserver};
pub use field::{Address, Coordinates, FieldConfig, FieldKind, FieldValue, FormValues};
pub use page::{FormMode, FormPage};
pub use rules::{Pattern, ValidationRule};
