//! Financial figures derived from a ledger snapshot.
//!
//! Everything here is a pure function of a [`LedgerSnapshot`]: no state, no
//! IO. Log entries are priced with the product's **current** catalog prices.
//!
//! [`LedgerSnapshot`]: grocer_inventory::LedgerSnapshot

pub mod financials;
pub mod history;

pub use financials::{
    FinancialSummary, format_amount, total_cost, total_inventory_value, total_profit,
    total_revenue,
};
pub use history::{HistoryRow, transaction_history, transaction_value};
