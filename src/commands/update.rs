use crate::commands::{CmdMessage, CmdResult, ProductFields};
use crate::error::{InventoryError, Result};
use crate::model::Inventory;
use crate::price;

/// Overwrites all four mutable fields of the first product with the given
/// id. There is no partial update; the id itself never changes.
pub fn run(inventory: &mut Inventory, id: &str, fields: ProductFields) -> Result<CmdResult> {
    let price = price::validate(&fields.price)?;
    let product = inventory
        .find_mut(id)
        .ok_or_else(|| InventoryError::ProductNotFound(id.to_string()))?;

    product.name = fields.name;
    product.aisle = fields.aisle;
    product.department = fields.department;
    product.price = price;
    let updated = product.clone();

    let mut result = CmdResult::default().with_affected_products(vec![updated.clone()]);
    result.add_message(CmdMessage::success(format!(
        "ITEM #{} NOW UPDATED IN INVENTORY!",
        updated.id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            aisle: "A".into(),
            department: "misc".into(),
            price: "1.00".into(),
        }
    }

    #[test]
    fn overwrites_every_field_in_place() {
        let mut inventory: Inventory = [product("1", "Cookies"), product("2", "Salt")]
            .into_iter()
            .collect();
        let fields = ProductFields::new("Sea Salt", "B3", "pantry", "5.25");
        run(&mut inventory, "2", fields).unwrap();

        let updated = inventory.find("2").unwrap();
        assert_eq!(updated.name, "Sea Salt");
        assert_eq!(updated.aisle, "B3");
        assert_eq!(updated.department, "pantry");
        assert_eq!(updated.price, "5.25");
        // position and id are untouched
        assert_eq!(inventory.iter().nth(1).unwrap().id, "2");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut inventory: Inventory = [product("1", "Cookies")].into_iter().collect();
        let fields = ProductFields::new("x", "x", "x", "1.00");
        assert!(matches!(
            run(&mut inventory, "9", fields),
            Err(InventoryError::ProductNotFound(_))
        ));
    }

    #[test]
    fn bad_price_leaves_the_product_untouched() {
        let mut inventory: Inventory = [product("1", "Cookies")].into_iter().collect();
        let fields = ProductFields::new("New Name", "B1", "snacks", "3.5");
        assert!(run(&mut inventory, "1", fields).is_err());
        assert_eq!(inventory.find("1").unwrap().name, "Cookies");
    }
}
