use serde::{Deserialize, Serialize};

use grocer_core::{ProductId, Quantity};

/// What a logged transaction did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    AddProduct,
    SellProduct,
    RestockProduct,
}

impl TransactionKind {
    /// Past-tense label shown in the transaction history.
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::AddProduct => "Added",
            TransactionKind::SellProduct => "Sold",
            TransactionKind::RestockProduct => "Restocked",
        }
    }

    /// Stock coming in at purchasing price (adds and restocks).
    pub fn is_purchase(self) -> bool {
        matches!(
            self,
            TransactionKind::AddProduct | TransactionKind::RestockProduct
        )
    }

    pub fn is_sale(self) -> bool {
        self == TransactionKind::SellProduct
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// One entry of the append-only transaction log (immutable).
///
/// `product_id` names a product that existed when the entry was written; it
/// is not guaranteed to still be in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub product_id: ProductId,
    pub quantity: Quantity,
}

impl Transaction {
    pub fn new(kind: TransactionKind, product_id: ProductId, quantity: Quantity) -> Self {
        Self {
            kind,
            product_id,
            quantity,
        }
    }
}
