//! Trait abstraction for entity persistence to enable mocking in tests

use crate::state::entities::{Entity, EntityKind};
use crate::state::forms::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// Where list, detail and form pages read and write records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// All records of one kind, in storage order
    async fn list(&mut self, kind: EntityKind) -> Result<Vec<Entity>>;

    /// One record by id
    async fn fetch(&mut self, kind: EntityKind, id: &str) -> Result<Entity>;

    /// Create a record from submitted form values, returning its new id
    async fn create(&mut self, kind: EntityKind, values: &FormValues) -> Result<String>;

    /// Replace the form-backed fields of an existing record
    async fn update(&mut self, kind: EntityKind, id: &str, values: &FormValues) -> Result<()>;
}
