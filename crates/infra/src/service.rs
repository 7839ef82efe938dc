//! Command execution pipeline for the single-user ledger.
//!
//! ```text
//! command
//!   ↓
//! 1. validate + apply on a working copy of the ledger
//!   ↓
//! 2. save the working copy (both keys, full replace)
//!   ↓
//! 3. swap the working copy in as the current ledger
//! ```
//!
//! A rejected command or a failed save leaves the current ledger untouched,
//! so memory and store never disagree about what was accepted.

use thiserror::Error;

use grocer_accounting::{FinancialSummary, HistoryRow, transaction_history};
use grocer_core::{DomainError, ProductId};
use grocer_inventory::{
    AddProduct, InventoryLedger, LedgerCommand, LedgerSnapshot, RestockProduct, SellProduct,
    Transaction,
};

use crate::config::StoreConfig;
use crate::repository::LedgerRepository;
use crate::store::{FileStore, KeyValueStore, StoreError};

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The command was rejected; nothing changed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The command was valid but the snapshot could not be persisted; nothing
    /// changed.
    #[error("failed to persist ledger: {0}")]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            ServiceError::Domain(err) => Some(err),
            ServiceError::Store(_) => None,
        }
    }
}

/// The one ledger instance every consumer shares, plus its persistence.
#[derive(Debug)]
pub struct InventoryService<S> {
    repository: LedgerRepository<S>,
    ledger: InventoryLedger,
}

impl InventoryService<FileStore> {
    /// Open the file store named by `config` and load the ledger from it.
    pub fn open_file(config: &StoreConfig) -> Result<Self, StoreError> {
        let store = config.open_store()?;
        tracing::info!(data_dir = ?config.data_dir(), "opening inventory store");
        Ok(Self::open(LedgerRepository::new(store)))
    }
}

impl<S: KeyValueStore> InventoryService<S> {
    /// Load the persisted snapshot (or defaults) once.
    pub fn open(repository: LedgerRepository<S>) -> Self {
        let ledger = repository.load();
        Self { repository, ledger }
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    pub fn snapshot(&self) -> &LedgerSnapshot {
        self.ledger.snapshot()
    }

    pub fn repository(&self) -> &LedgerRepository<S> {
        &self.repository
    }

    /// Validate, apply and persist one command.
    pub fn dispatch(&mut self, command: LedgerCommand) -> Result<Transaction, ServiceError> {
        let mut next = self.ledger.clone();
        let tx = next.record(command).inspect_err(|err| {
            tracing::debug!(error = %err, "command rejected");
        })?;

        self.repository.save(next.snapshot())?;
        self.ledger = next;

        tracing::info!(
            kind = %tx.kind,
            product_id = %tx.product_id,
            quantity = %tx.quantity,
            "transaction recorded"
        );
        Ok(tx)
    }

    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        quantity: i64,
        purchasing_price: f64,
        selling_price: f64,
    ) -> Result<Transaction, ServiceError> {
        self.dispatch(LedgerCommand::AddProduct(AddProduct {
            name: name.into(),
            quantity,
            purchasing_price,
            selling_price,
        }))
    }

    pub fn sell_product(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<Transaction, ServiceError> {
        self.dispatch(LedgerCommand::SellProduct(SellProduct {
            product_id,
            quantity,
        }))
    }

    pub fn restock_product(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<Transaction, ServiceError> {
        self.dispatch(LedgerCommand::RestockProduct(RestockProduct {
            product_id,
            quantity,
        }))
    }

    /// Persist the current snapshot as-is (e.g. to write the seed catalog on
    /// first run).
    pub fn save(&self) -> Result<(), StoreError> {
        self.repository.save(self.ledger.snapshot())
    }

    /// Re-read the persisted snapshot, discarding the in-memory copy.
    pub fn reload(&mut self) {
        self.ledger = self.repository.load();
    }

    pub fn summary(&self) -> FinancialSummary {
        FinancialSummary::of(self.ledger.snapshot())
    }

    pub fn history(&self) -> Vec<HistoryRow> {
        transaction_history(self.ledger.snapshot())
    }
}
