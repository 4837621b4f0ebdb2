use crate::commands::{CmdMessage, CmdResult};
use crate::model::Inventory;

pub fn run(inventory: &Inventory) -> CmdResult {
    let mut result = CmdResult::default().with_listed_products(inventory.products().to_vec());
    result.add_message(CmdMessage::info(format!(
        "LISTING {} PRODUCTS",
        inventory.len()
    )));
    result
}
