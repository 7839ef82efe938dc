//! Default catalog used when nothing has been persisted yet.

use grocer_core::{Price, ProductId};

use crate::product::Product;

/// Stock a fresh shop starts with.
pub fn default_catalog() -> Vec<Product> {
    let seed: [(u64, &str, u64, f64, f64); 5] = [
        (1, "Apples", 50, 0.30, 0.50),
        (2, "Bananas", 40, 0.20, 0.35),
        (3, "Bread", 20, 1.20, 2.00),
        (4, "Eggs (dozen)", 15, 2.10, 3.20),
        (5, "Milk", 30, 0.90, 1.40),
    ];

    seed.into_iter()
        .map(|(id, name, quantity, purchasing, selling)| {
            Product::new(
                ProductId::new(id),
                name,
                quantity,
                Price::from_stored(purchasing),
                Price::from_stored(selling),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::InventoryLedger;

    #[test]
    fn default_catalog_is_a_valid_seed() {
        let ledger = InventoryLedger::with_catalog(default_catalog()).unwrap();
        assert_eq!(ledger.snapshot().product_count(), 5);
        assert!(ledger.snapshot().transactions().is_empty());
        assert_eq!(ledger.snapshot().next_product_id(), Ok(ProductId::new(6)));
    }
}
