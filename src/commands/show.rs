use crate::commands::CmdResult;
use crate::error::{InventoryError, Result};
use crate::model::Inventory;

/// Displays every product matching the given id. The session re-prompts
/// before calling this, so a miss here means the caller skipped validation.
pub fn run(inventory: &Inventory, id: &str) -> Result<CmdResult> {
    let matches: Vec<_> = inventory.find_all(id).into_iter().cloned().collect();
    if matches.is_empty() {
        return Err(InventoryError::ProductNotFound(id.to_string()));
    }
    Ok(CmdResult::default().with_affected_products(matches))
}
