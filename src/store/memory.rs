use super::InventoryStore;
use crate::error::Result;
use crate::model::Inventory;

/// In-memory store for tests: the same contract as the file store, without
/// touching the filesystem. The "active" and "default" datasets are plain
/// fields so tests can inspect what a save produced.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    active: Inventory,
    defaults: Inventory,
    pub saves: usize,
}

impl InMemoryStore {
    pub fn new(active: Inventory) -> Self {
        Self {
            defaults: active.clone(),
            active,
            saves: 0,
        }
    }

    pub fn with_defaults(mut self, defaults: Inventory) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn active(&self) -> &Inventory {
        &self.active
    }
}

impl InventoryStore for InMemoryStore {
    fn load(&self) -> Result<Inventory> {
        Ok(self.active.clone())
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        self.active = inventory.clone();
        self.saves += 1;
        Ok(())
    }

    fn load_defaults(&self) -> Result<Inventory> {
        Ok(self.defaults.clone())
    }
}
