//! Tracked system list.

use std::sync::Arc;

use tokio::sync::RwLock;

/// Ordered, deduplicated list of tracked system names shared across the server.
///
/// Cloning the list is cheap and every clone refers to the same systems.
#[derive(Debug, Clone, Default)]
pub struct SystemList {
    systems: Arc<RwLock<Vec<String>>>,
}

impl SystemList {
    /// Creates a list from initial system names, dropping blanks and duplicates.
    pub fn new(systems: impl IntoIterator<Item = String>) -> Self {
        let mut names: Vec<String> = Vec::new();

        for system in systems {
            let system = system.trim();
            if !system.is_empty() && !names.iter().any(|existing| existing == system) {
                names.push(system.to_string());
            }
        }

        Self {
            systems: Arc::new(RwLock::new(names)),
        }
    }

    /// Adds a system to the end of the list.
    ///
    /// # Returns
    /// - `true` - The system was added
    /// - `false` - The name is blank or the system is already tracked
    pub async fn add(&self, system: &str) -> bool {
        let system = system.trim();
        if system.is_empty() {
            return false;
        }

        let mut systems = self.systems.write().await;
        if systems.iter().any(|existing| existing == system) {
            return false;
        }

        systems.push(system.to_string());
        true
    }

    /// Removes a system from the list.
    ///
    /// # Returns
    /// - `true` - The system was removed
    /// - `false` - The system was not tracked
    pub async fn remove(&self, system: &str) -> bool {
        let system = system.trim();
        let mut systems = self.systems.write().await;
        let before = systems.len();

        systems.retain(|existing| existing != system);

        systems.len() != before
    }

    /// Whether the system is tracked.
    pub async fn contains(&self, system: &str) -> bool {
        let system = system.trim();

        self.systems
            .read()
            .await
            .iter()
            .any(|existing| existing == system)
    }

    /// Tracked system names in the order they were added.
    pub async fn names(&self) -> Vec<String> {
        self.systems.read().await.clone()
    }
}
