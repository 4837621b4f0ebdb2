//! # Storage Layer
//!
//! The [`InventoryStore`] trait owns the mapping between the in-memory
//! [`Inventory`](crate::model::Inventory) and its persistent CSV form, and is
//! the only code allowed to open the store files.
//!
//! ## Implementations
//!
//! - [`fs::CsvStore`]: production file-based storage
//!   - Active store: `products.csv` under the configured db directory
//!   - Default store: `products_default.csv`, read-only baseline for reset
//! - [`memory::InMemoryStore`]: in-memory storage for testing, no persistence
//!
//! ## Storage format
//!
//! ```text
//! db/
//! ├── products.csv          # active store, overwritten in full after edits
//! └── products_default.csv  # pristine baseline, copied back by reset
//! ```
//!
//! Both files carry the header row `id,name,aisle,department,price` and one
//! row per product in collection order. A save always rewrites the whole
//! file; there is no append or merge mode.

use crate::error::Result;
use crate::model::Inventory;

pub mod fs;
pub mod memory;

/// Abstract interface for inventory persistence.
pub trait InventoryStore {
    /// Read the active store into memory, preserving row order.
    fn load(&self) -> Result<Inventory>;

    /// Overwrite the active store in full with the given collection.
    fn save(&mut self, inventory: &Inventory) -> Result<()>;

    /// Read the read-only baseline dataset.
    fn load_defaults(&self) -> Result<Inventory>;

    /// Copy the baseline over the active store, discarding prior edits.
    /// All-or-nothing; the only supported undo mechanism.
    fn reset(&mut self) -> Result<()> {
        let defaults = self.load_defaults()?;
        self.save(&defaults)
    }
}
