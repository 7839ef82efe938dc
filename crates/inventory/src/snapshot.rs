use std::collections::BTreeMap;

use grocer_core::{DomainError, DomainResult, Entity, ProductId, ValidationError};

use crate::product::Product;
use crate::transaction::Transaction;

/// The catalog and the transaction log at one point in time.
///
/// This is the unit of persistence and the only input the financial
/// aggregations read. The catalog is keyed (and iterated) by product id; the
/// log keeps insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LedgerSnapshot {
    catalog: BTreeMap<ProductId, Product>,
    transactions: Vec<Transaction>,
}

impl LedgerSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from stored or seeded parts.
    ///
    /// Products are checked (positive id, non-empty name, prices finite and
    /// not negative) and ids must be unique. Log entries are accepted as-is,
    /// including entries whose product is not in the catalog.
    pub fn from_parts(
        products: impl IntoIterator<Item = Product>,
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> DomainResult<Self> {
        let mut catalog = BTreeMap::new();
        for product in products {
            check_product(&product)?;
            let id = *product.id();
            if catalog.insert(id, product).is_some() {
                return Err(DomainError::DuplicateId(id));
            }
        }

        Ok(Self {
            catalog,
            transactions: transactions.into_iter().collect(),
        })
    }

    /// Same catalog, with `transactions` as the log.
    pub fn with_transactions(mut self, transactions: impl IntoIterator<Item = Transaction>) -> Self {
        self.transactions = transactions.into_iter().collect();
        self
    }

    /// Products in id order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.catalog.values()
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(&id)
    }

    /// The log in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Id the next added product will receive.
    pub fn next_product_id(&self) -> DomainResult<ProductId> {
        ProductId::after_max(self.catalog.keys().copied()).ok_or(DomainError::IdsExhausted)
    }

    /// Pair every log entry with its product, if that product is still in the
    /// catalog.
    pub fn joined(&self) -> impl Iterator<Item = (&Transaction, Option<&Product>)> {
        self.transactions
            .iter()
            .map(|tx| (tx, self.catalog.get(&tx.product_id)))
    }

    pub(crate) fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.catalog.get_mut(&id)
    }

    pub(crate) fn insert_product(&mut self, product: Product) {
        self.catalog.insert(*product.id(), product);
    }

    pub(crate) fn append(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }
}

fn check_product(product: &Product) -> DomainResult<()> {
    if product.id_typed().get() == 0 {
        return Err(DomainError::invalid_id("ProductId: must be positive"));
    }
    if product.name().trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    product.purchasing_price().check_stored("purchasingPrice")?;
    product.selling_price().check_stored("sellingPrice")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionKind;
    use grocer_core::{Price, Quantity};

    fn product(id: u64, name: &str) -> Product {
        Product::new(
            ProductId::new(id),
            name,
            3,
            Price::from_stored(1.0),
            Price::from_stored(2.0),
        )
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = LedgerSnapshot::from_parts([product(4, "Tea"), product(4, "Coffee")], Vec::new())
            .unwrap_err();
        assert_eq!(err, DomainError::DuplicateId(ProductId::new(4)));
    }

    #[test]
    fn products_iterate_in_id_order() {
        let snap =
            LedgerSnapshot::from_parts([product(9, "Rice"), product(2, "Oats")], Vec::new()).unwrap();
        let ids: Vec<u64> = snap.products().map(|p| p.id_typed().get()).collect();
        assert_eq!(ids, vec![2, 9]);
        assert_eq!(snap.next_product_id(), Ok(ProductId::new(10)));
    }

    #[test]
    fn largest_id_leaves_nothing_to_assign() {
        let snap = LedgerSnapshot::from_parts([product(u64::MAX, "Salt")], Vec::new()).unwrap();
        assert_eq!(snap.next_product_id(), Err(DomainError::IdsExhausted));
    }

    #[test]
    fn rejects_blank_names_and_negative_prices() {
        assert!(matches!(
            LedgerSnapshot::from_parts([product(1, "  ")], Vec::new()),
            Err(DomainError::Validation(ValidationError::EmptyName))
        ));

        let bad = Product::new(
            ProductId::new(1),
            "Salt",
            1,
            Price::from_stored(-1.0),
            Price::from_stored(1.0),
        );
        assert!(matches!(
            LedgerSnapshot::from_parts([bad], Vec::new()),
            Err(DomainError::Validation(ValidationError::NegativePrice { .. }))
        ));
    }

    #[test]
    fn join_tolerates_missing_products() {
        let orphan = Transaction::new(
            TransactionKind::SellProduct,
            ProductId::new(42),
            Quantity::new(1).unwrap(),
        );
        let snap = LedgerSnapshot::from_parts([product(1, "Tea")], [orphan.clone()]).unwrap();
        let joined: Vec<_> = snap.joined().collect();
        assert_eq!(joined, vec![(&orphan, None)]);
    }
}
