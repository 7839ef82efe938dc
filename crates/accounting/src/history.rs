use serde::Serialize;

use grocer_core::ProductId;
use grocer_inventory::{LedgerSnapshot, Product, Transaction, TransactionKind};

/// Value of a single log entry: selling price for sales, purchasing price for
/// adds and restocks, 0 when the product is no longer in the catalog.
pub fn transaction_value(snapshot: &LedgerSnapshot, tx: &Transaction) -> f64 {
    snapshot
        .product(tx.product_id)
        .map(|product| value_against(product, tx))
        .unwrap_or(0.0)
}

fn value_against(product: &Product, tx: &Transaction) -> f64 {
    let unit = match tx.kind {
        TransactionKind::SellProduct => product.selling_price(),
        TransactionKind::AddProduct | TransactionKind::RestockProduct => {
            product.purchasing_price()
        }
    };
    unit.times(tx.quantity.get())
}

/// One line of the transaction history view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub label: &'static str,
    pub product_id: ProductId,
    pub quantity: u64,
    pub value: f64,
}

/// The log in insertion order, labelled and valued for display.
pub fn transaction_history(snapshot: &LedgerSnapshot) -> Vec<HistoryRow> {
    snapshot
        .joined()
        .map(|(tx, product)| HistoryRow {
            label: tx.kind.label(),
            product_id: tx.product_id,
            quantity: tx.quantity.get(),
            value: product.map(|p| value_against(p, tx)).unwrap_or(0.0),
        })
        .collect()
}
