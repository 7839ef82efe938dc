//! Loading and saving the ledger snapshot through a [`KeyValueStore`].
//!
//! Catalog and log live under separate keys and are read independently: a
//! missing or unreadable catalog falls back to the seed catalog, a missing or
//! unreadable log falls back to an empty log. Neither case is an error for the
//! caller; both are logged.

use serde::Serialize;
use serde::de::DeserializeOwned;

use grocer_core::DomainResult;
use grocer_inventory::{InventoryLedger, LedgerSnapshot, Product, Transaction, default_catalog};

use crate::config::{INVENTORY_KEY, TRANSACTIONS_KEY};
use crate::store::{KeyValueStore, StoreError};

#[derive(Debug)]
pub struct LedgerRepository<S> {
    store: S,
    seed: LedgerSnapshot,
}

impl<S: KeyValueStore> LedgerRepository<S> {
    /// Repository seeded with [`default_catalog`].
    pub fn new(store: S) -> Self {
        let seed = LedgerSnapshot::from_parts(default_catalog(), Vec::new()).unwrap_or_default();
        Self { store, seed }
    }

    /// Repository seeded with a caller-supplied catalog (ids must be unique).
    pub fn with_seed(store: S, seed: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let seed = LedgerSnapshot::from_parts(seed, Vec::new())?;
        Ok(Self { store, seed })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted snapshot, falling back per key.
    pub fn load(&self) -> InventoryLedger {
        let log: Vec<Transaction> = self.read(TRANSACTIONS_KEY).unwrap_or_default();

        let snapshot = match self.read::<Vec<Product>>(INVENTORY_KEY) {
            Some(products) => match LedgerSnapshot::from_parts(products, log.clone()) {
                Ok(snapshot) => snapshot,
                Err(err) => {
                    tracing::warn!(key = INVENTORY_KEY, error = %err, "stored catalog is invalid; using seed catalog");
                    self.seed.clone().with_transactions(log)
                }
            },
            None => self.seed.clone().with_transactions(log),
        };

        tracing::debug!(
            products = snapshot.product_count(),
            transactions = snapshot.transaction_count(),
            "ledger loaded"
        );
        InventoryLedger::from_snapshot(snapshot)
    }

    /// Replace both stored documents with `snapshot`.
    pub fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), StoreError> {
        let products: Vec<&Product> = snapshot.products().collect();
        self.write(INVENTORY_KEY, &products)?;
        self.write(TRANSACTIONS_KEY, snapshot.transactions())?;

        tracing::debug!(
            products = snapshot.product_count(),
            transactions = snapshot.transaction_count(),
            "ledger saved"
        );
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    tracing::warn!(key, error = %err, "stored value is corrupt; using default");
                    None
                }
            },
            Ok(None) => {
                tracing::debug!(key, "nothing stored; using default");
                None
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "failed to read store; using default");
                None
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &json)
    }
}
