use super::InventoryStore;
use crate::error::{InventoryError, Result};
use crate::model::{Inventory, Product};
use std::fs;
use std::path::{Path, PathBuf};

/// Column order of the store files. Writes always emit this header; loads
/// refuse files that do not carry it.
const HEADER: [&str; 5] = ["id", "name", "aisle", "department", "price"];

const ACTIVE_FILENAME: &str = "products.csv";
const DEFAULT_FILENAME: &str = "products_default.csv";

/// File-based store: two CSV files under an explicitly configured directory.
pub struct CsvStore {
    db_dir: PathBuf,
    active: String,
    default: String,
}

impl CsvStore {
    pub fn new(db_dir: PathBuf) -> Self {
        Self {
            db_dir,
            active: ACTIVE_FILENAME.to_string(),
            default: DEFAULT_FILENAME.to_string(),
        }
    }

    pub fn with_files(mut self, active: &str, default: &str) -> Self {
        self.active = active.to_string();
        self.default = default.to_string();
        self
    }

    pub fn active_path(&self) -> PathBuf {
        self.db_dir.join(&self.active)
    }

    pub fn default_path(&self) -> PathBuf {
        self.db_dir.join(&self.default)
    }

    fn read_file(&self, path: &Path) -> Result<Inventory> {
        if !path.exists() {
            return Err(InventoryError::StoreMissing(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?;
        let expected = csv::StringRecord::from(HEADER.to_vec());
        if *headers != expected {
            return Err(InventoryError::Store(format!(
                "Unexpected header in {}: expected {:?}, found {:?}",
                path.display(),
                HEADER.join(","),
                headers.iter().collect::<Vec<_>>().join(","),
            )));
        }

        let mut products = Vec::new();
        for row in reader.deserialize::<Product>() {
            products.push(row?);
        }
        Ok(Inventory::new(products))
    }

    fn write_file(&self, path: &Path, inventory: &Inventory) -> Result<()> {
        // Serialize to a buffer first so a failure to open the destination
        // surfaces as a single WriteFailure rather than a torn file.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.write_record(HEADER)?;
        for product in inventory.iter() {
            writer.serialize(product)?;
        }
        let buf = writer
            .into_inner()
            .map_err(|e| InventoryError::Store(e.to_string()))?;

        fs::write(path, buf).map_err(|source| InventoryError::WriteFailure {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl InventoryStore for CsvStore {
    fn load(&self) -> Result<Inventory> {
        self.read_file(&self.active_path())
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        self.write_file(&self.active_path(), inventory)
    }

    fn load_defaults(&self) -> Result<Inventory> {
        self.read_file(&self.default_path())
    }
}
