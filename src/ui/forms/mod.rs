//! Form rendering module
//!
//! - `field_renderer`: one widget per field kind
//! - `form_page`: the create/edit page laid out from the engine's fields

mod field_renderer;
mod form_page;

pub use form_page::draw_form_page;
