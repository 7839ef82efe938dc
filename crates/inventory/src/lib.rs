//! Inventory domain module.
//!
//! The product catalog and its append-only transaction log, mutated through
//! validated commands. Pure domain logic: no IO, no storage, no logging.

pub mod form;
pub mod ledger;
pub mod product;
pub mod seed;
pub mod snapshot;
pub mod transaction;

pub use form::{AddProductForm, parse_quantity};
pub use ledger::{
    AddProduct, InventoryLedger, LedgerCommand, LedgerEvent, ProductAdded, ProductRestocked,
    ProductSold, RestockProduct, SellProduct,
};
pub use product::Product;
pub use seed::default_catalog;
pub use snapshot::LedgerSnapshot;
pub use transaction::{Transaction, TransactionKind};
