//! Configuration handling for the admin

use crate::state::entities::{list_config, EntityKind};
use crate::state::list::{SortConfig, SortDirection, DEFAULT_DEBOUNCE, DEFAULT_ITEMS_PER_PAGE};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Saved sort column for one list page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortPreference {
    pub key: String,
    /// "asc", "desc" or "none"
    pub direction: String,
}

/// User configuration for the admin
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdminConfig {
    /// Rows per list page
    pub items_per_page: Option<usize>,
    /// Delay before typed search text is applied
    pub search_debounce_ms: Option<u64>,
    /// Go back to page 1 when search, status or sort changes
    pub reset_page_on_filter: Option<bool>,
    /// Initial sort per list page
    #[serde(default)]
    pub default_sort: HashMap<EntityKind, SortPreference>,
}

impl AdminConfig {
    /// Get the config file path
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("io", "farm-admin", "farm-admin-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: AdminConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to file, creating its directory
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
    }

    pub fn search_debounce(&self) -> Duration {
        self.search_debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_DEBOUNCE)
    }

    pub fn reset_page_on_filter(&self) -> bool {
        self.reset_page_on_filter.unwrap_or(true)
    }

    /// Saved sort for `kind` when its key names a column, else the page default
    pub fn default_sort(&self, kind: EntityKind) -> SortConfig {
        let list = list_config(kind);
        self.default_sort
            .get(&kind)
            .and_then(|pref| {
                let column = list.columns.iter().find(|c| c.key == pref.key)?;
                let direction = SortDirection::parse(&pref.direction)?;
                Some(SortConfig::new(column.key, direction))
            })
            .unwrap_or(list.default_sort)
    }
}
