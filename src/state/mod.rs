//! Application state module

pub mod entities;
pub mod forms;
pub mod list;
pub mod navigation;

pub use entities::EntityKind;
