use crate::commands::{CmdMessage, CmdResult};
use crate::error::{InventoryError, Result};
use crate::model::Inventory;

/// Removes the first product with the given id, keeping the relative order
/// of everything else.
pub fn run(inventory: &mut Inventory, id: &str) -> Result<CmdResult> {
    let removed = inventory
        .remove(id)
        .ok_or_else(|| InventoryError::ProductNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "DELETED PRODUCT #{} FROM INVENTORY!",
        removed.id
    )));
    result.affected_products.push(removed);
    Ok(result)
}
