//! In-memory entity store seeded with sample farm data

use super::seed;
use super::traits::EntityStore;
use crate::error::StoreError;
use crate::state::entities::{Entity, EntityKind};
use crate::state::forms::FormValues;
use crate::state::list::Listable;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use uuid::Uuid;

/// Records kept per kind for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: HashMap<EntityKind, Vec<Entity>>,
}

impl InMemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with sample farm data
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for entity in seed::animals()
            .into_iter()
            .chain(seed::properties())
            .chain(seed::locations())
            .chain(seed::employees())
            .chain(seed::partners())
        {
            store.insert(entity);
        }
        tracing::debug!(animals = store.count(EntityKind::Animals), "seeded in-memory store");
        store
    }

    /// Add a record under its own kind
    pub fn insert(&mut self, entity: Entity) {
        self.records.entry(entity.kind()).or_default().push(entity);
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.records.get(&kind).map_or(0, Vec::len)
    }

    fn position(&self, kind: EntityKind, id: &str) -> Option<usize> {
        self.records
            .get(&kind)
            .and_then(|records| records.iter().position(|e| e.id() == id))
    }
}

#[async_trait]
impl EntityStore for InMemoryStore {
    async fn list(&mut self, kind: EntityKind) -> Result<Vec<Entity>> {
        Ok(self.records.get(&kind).cloned().unwrap_or_default())
    }

    async fn fetch(&mut self, kind: EntityKind, id: &str) -> Result<Entity> {
        let index = self.position(kind, id).ok_or_else(|| StoreError::NotFound {
            kind,
            id: id.to_string(),
        })?;
        Ok(self.records[&kind][index].clone())
    }

    async fn create(&mut self, kind: EntityKind, values: &FormValues) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let entity = Entity::from_values(kind, id.clone(), values)?;
        self.insert(entity);
        tracing::info!(%kind, %id, "created record");
        Ok(id)
    }

    async fn update(&mut self, kind: EntityKind, id: &str, values: &FormValues) -> Result<()> {
        let index = self.position(kind, id).ok_or_else(|| StoreError::NotFound {
            kind,
            id: id.to_string(),
        })?;
        let records = self.records.entry(kind).or_default();
        let updated =
            Entity::from_values(kind, id.to_string(), values)?.carry_over(&records[index]);
        records[index] = updated;
        tracing::info!(%kind, %id, "updated record");
        Ok(())
    }
}
