//! Entity persistence: the store trait and the in-memory implementation

mod memory;
mod seed;
mod traits;

pub use memory::InMemoryStore;
pub use traits::EntityStore;

#[cfg(test)]
pub use traits::MockEntityStore;
