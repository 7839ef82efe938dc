use serde::{Deserialize, Serialize};

use grocer_core::{Entity, Price, ProductId};

/// A product in the catalog.
///
/// Serialized with the field names used by the persisted catalog
/// (`purchasingPrice`, `sellingPrice`). Only the quantity ever changes after
/// creation, and only through the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: u64,
    purchasing_price: Price,
    selling_price: Price,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        quantity: u64,
        purchasing_price: Price,
        selling_price: Price,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            purchasing_price,
            selling_price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn purchasing_price(&self) -> Price {
        self.purchasing_price
    }

    pub fn selling_price(&self) -> Price {
        self.selling_price
    }

    /// Units on hand can be sold (the "Sell" action is only offered then).
    pub fn is_in_stock(&self) -> bool {
        self.quantity > 0
    }

    /// Value of the units on hand at purchasing price.
    pub fn stock_value(&self) -> f64 {
        self.purchasing_price.times(self.quantity)
    }

    /// Margin earned per unit sold at current prices.
    pub fn unit_margin(&self) -> f64 {
        self.selling_price.amount() - self.purchasing_price.amount()
    }

    pub(crate) fn set_quantity(&mut self, quantity: u64) {
        self.quantity = quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
