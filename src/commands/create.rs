use crate::commands::{CmdMessage, CmdResult, ProductFields};
use crate::error::Result;
use crate::model::{Inventory, Product};
use crate::price;

/// Appends a new product with the next free numeric id. The id is one past
/// the highest existing id, so uniqueness holds without a dedup pass.
pub fn run(inventory: &mut Inventory, fields: ProductFields) -> Result<CmdResult> {
    let price = price::validate(&fields.price)?;
    let product = Product {
        id: inventory.next_id(),
        name: fields.name,
        aisle: fields.aisle,
        department: fields.department,
        price,
    };
    inventory.push(product.clone());

    let mut result = CmdResult::default().with_affected_products(vec![product.clone()]);
    result.add_message(CmdMessage::success(format!(
        "CREATED PRODUCT #{}: {}",
        product.id, product.name
    )));
    Ok(result)
}
