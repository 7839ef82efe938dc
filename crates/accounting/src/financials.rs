use serde::{Deserialize, Serialize};

use grocer_inventory::{LedgerSnapshot, Product, Transaction, TransactionKind};

/// Σ `quantity × purchasing price` over the catalog.
pub fn total_inventory_value(snapshot: &LedgerSnapshot) -> f64 {
    snapshot.products().map(Product::stock_value).sum()
}

/// Σ `selling price × quantity` over sales.
pub fn total_revenue(snapshot: &LedgerSnapshot) -> f64 {
    sum_matching(snapshot, TransactionKind::is_sale, |product, tx| {
        product.selling_price().times(tx.quantity.get())
    })
}

/// Σ `(selling price − purchasing price) × quantity` over sales.
pub fn total_profit(snapshot: &LedgerSnapshot) -> f64 {
    sum_matching(snapshot, TransactionKind::is_sale, |product, tx| {
        product.unit_margin() * tx.quantity.get() as f64
    })
}

/// Σ `purchasing price × quantity` over adds and restocks.
pub fn total_cost(snapshot: &LedgerSnapshot) -> f64 {
    sum_matching(snapshot, TransactionKind::is_purchase, |product, tx| {
        product.purchasing_price().times(tx.quantity.get())
    })
}

/// Fold the log entries selected by `kind`, skipping entries whose product is
/// no longer in the catalog (they contribute 0).
fn sum_matching(
    snapshot: &LedgerSnapshot,
    kind: impl Fn(TransactionKind) -> bool,
    value: impl Fn(&Product, &Transaction) -> f64,
) -> f64 {
    snapshot
        .joined()
        .filter(|(tx, _)| kind(tx.kind))
        .filter_map(|(tx, product)| product.map(|p| value(p, tx)))
        .sum()
}

/// The four headline figures of the financial overview.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_inventory_value: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_cost: f64,
}

impl FinancialSummary {
    pub fn of(snapshot: &LedgerSnapshot) -> Self {
        Self {
            total_inventory_value: total_inventory_value(snapshot),
            total_revenue: total_revenue(snapshot),
            total_profit: total_profit(snapshot),
            total_cost: total_cost(snapshot),
        }
    }
}

impl core::fmt::Display for FinancialSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Total Inventory Value: {}", format_amount(self.total_inventory_value))?;
        writeln!(f, "Total Revenue: {}", format_amount(self.total_revenue))?;
        writeln!(f, "Total Profit: {}", format_amount(self.total_profit))?;
        write!(f, "Total cost: {}", format_amount(self.total_cost))
    }
}

/// Euro amount with two decimals, e.g. `€10.00`.
pub fn format_amount(amount: f64) -> String {
    format!("€{amount:.2}")
}
