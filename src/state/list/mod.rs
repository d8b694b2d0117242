//! List pipeline: search normalization, comparator, filter/sort/paginate
//! and the debounced search box state.

mod compare;
mod debounce;
mod normalize;
mod pipeline;

pub use compare::SortValue;
pub use debounce::DEFAULT_DEBOUNCE;
pub use pipeline::{
    Column, ListConfig, ListState, Listable, SortConfig, SortDirection, StatusFilter,
    DEFAULT_ITEMS_PER_PAGE,
};
