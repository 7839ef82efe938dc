use grocer_core::{
    Aggregate, AggregateRoot, DomainError, DomainResult, Event, Price, ProductId, Quantity,
    ValidationError,
};

use crate::product::Product;
use crate::snapshot::LedgerSnapshot;
use crate::transaction::{Transaction, TransactionKind};

/// Aggregate root: the inventory ledger (catalog + transaction log).
///
/// There is exactly one ledger per store, so its identity is `()`. Every
/// accepted command applies one event, which updates the catalog and appends
/// one log entry together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InventoryLedger {
    snapshot: LedgerSnapshot,
}

impl InventoryLedger {
    /// Ledger with an empty catalog and an empty log.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Ledger seeded with `catalog` and an empty log.
    pub fn with_catalog(catalog: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        Ok(Self::from_snapshot(LedgerSnapshot::from_parts(catalog, Vec::new())?))
    }

    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &LedgerSnapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> LedgerSnapshot {
        self.snapshot
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.snapshot.product(id)
    }

    /// Add a new product under a freshly generated id.
    pub fn add_product(
        &mut self,
        name: impl Into<String>,
        quantity: i64,
        purchasing_price: f64,
        selling_price: f64,
    ) -> DomainResult<Transaction> {
        self.record(LedgerCommand::AddProduct(AddProduct {
            name: name.into(),
            quantity,
            purchasing_price,
            selling_price,
        }))
    }

    /// Sell `quantity` units of an existing product.
    pub fn sell_product(&mut self, product_id: ProductId, quantity: i64) -> DomainResult<Transaction> {
        self.record(LedgerCommand::SellProduct(SellProduct {
            product_id,
            quantity,
        }))
    }

    /// Put `quantity` more units of an existing product on the shelf.
    pub fn restock_product(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> DomainResult<Transaction> {
        self.record(LedgerCommand::RestockProduct(RestockProduct {
            product_id,
            quantity,
        }))
    }

    /// Validate and apply one command, returning the log entry it appended.
    pub fn record(&mut self, command: LedgerCommand) -> DomainResult<Transaction> {
        let event = self.decide(&command)?;
        self.apply(&event);
        Ok(event.transaction())
    }
}

impl AggregateRoot for InventoryLedger {
    type Id = ();

    fn id(&self) -> &Self::Id {
        &()
    }

    /// One log entry per applied event, so the log length is the version.
    fn version(&self) -> u64 {
        self.snapshot.transaction_count() as u64
    }
}

/// Command: AddProduct (raw, unvalidated input).
#[derive(Debug, Clone, PartialEq)]
pub struct AddProduct {
    pub name: String,
    pub quantity: i64,
    pub purchasing_price: f64,
    pub selling_price: f64,
}

/// Command: SellProduct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellProduct {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Command: RestockProduct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestockProduct {
    pub product_id: ProductId,
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerCommand {
    AddProduct(AddProduct),
    SellProduct(SellProduct),
    RestockProduct(RestockProduct),
}

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAdded {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: Quantity,
    pub purchasing_price: Price,
    pub selling_price: Price,
}

/// Event: ProductSold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSold {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

/// Event: ProductRestocked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRestocked {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LedgerEvent {
    ProductAdded(ProductAdded),
    ProductSold(ProductSold),
    ProductRestocked(ProductRestocked),
}

impl LedgerEvent {
    /// The log entry this event appends.
    pub fn transaction(&self) -> Transaction {
        match self {
            LedgerEvent::ProductAdded(e) => {
                Transaction::new(TransactionKind::AddProduct, e.product_id, e.quantity)
            }
            LedgerEvent::ProductSold(e) => {
                Transaction::new(TransactionKind::SellProduct, e.product_id, e.quantity)
            }
            LedgerEvent::ProductRestocked(e) => {
                Transaction::new(TransactionKind::RestockProduct, e.product_id, e.quantity)
            }
        }
    }
}

impl Event for LedgerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            LedgerEvent::ProductAdded(_) => "inventory.product.added",
            LedgerEvent::ProductSold(_) => "inventory.product.sold",
            LedgerEvent::ProductRestocked(_) => "inventory.product.restocked",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for InventoryLedger {
    type Command = LedgerCommand;
    type Event = LedgerEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            LedgerEvent::ProductAdded(e) => {
                self.snapshot.insert_product(Product::new(
                    e.product_id,
                    e.name.clone(),
                    e.quantity.get(),
                    e.purchasing_price,
                    e.selling_price,
                ));
            }
            LedgerEvent::ProductSold(e) => {
                if let Some(product) = self.snapshot.product_mut(e.product_id) {
                    let left = product.quantity().saturating_sub(e.quantity.get());
                    product.set_quantity(left);
                }
            }
            LedgerEvent::ProductRestocked(e) => {
                if let Some(product) = self.snapshot.product_mut(e.product_id) {
                    let total = product.quantity().saturating_add(e.quantity.get());
                    product.set_quantity(total);
                }
            }
        }

        self.snapshot.append(event.transaction());
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        Ok(vec![self.decide(command)?])
    }
}

impl InventoryLedger {
    /// Every accepted command yields exactly one event.
    fn decide(&self, command: &LedgerCommand) -> DomainResult<LedgerEvent> {
        match command {
            LedgerCommand::AddProduct(cmd) => self.handle_add(cmd),
            LedgerCommand::SellProduct(cmd) => self.handle_sell(cmd),
            LedgerCommand::RestockProduct(cmd) => self.handle_restock(cmd),
        }
    }

    fn existing(&self, id: ProductId) -> DomainResult<&Product> {
        self.snapshot.product(id).ok_or(DomainError::NotFound(id))
    }

    fn handle_add(&self, cmd: &AddProduct) -> DomainResult<LedgerEvent> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        let quantity = Quantity::new(cmd.quantity)?;
        let purchasing_price = Price::positive("purchasingPrice", cmd.purchasing_price)?;
        let selling_price = Price::positive("sellingPrice", cmd.selling_price)?;

        let id = self.snapshot.next_product_id()?;

        Ok(LedgerEvent::ProductAdded(ProductAdded {
            product_id: id,
            name: name.to_string(),
            quantity,
            purchasing_price,
            selling_price,
        }))
    }

    fn handle_sell(&self, cmd: &SellProduct) -> DomainResult<LedgerEvent> {
        let product = self.existing(cmd.product_id)?;
        let quantity = Quantity::new(cmd.quantity)?;

        if quantity.get() > product.quantity() {
            return Err(DomainError::insufficient_stock(
                cmd.product_id,
                quantity.get(),
                product.quantity(),
            ));
        }

        Ok(LedgerEvent::ProductSold(ProductSold {
            product_id: cmd.product_id,
            quantity,
        }))
    }

    fn handle_restock(&self, cmd: &RestockProduct) -> DomainResult<LedgerEvent> {
        let product = self.existing(cmd.product_id)?;
        let quantity = Quantity::new(cmd.quantity)?;

        if product.quantity().checked_add(quantity.get()).is_none() {
            return Err(ValidationError::QuantityOverflow.into());
        }

        Ok(LedgerEvent::ProductRestocked(ProductRestocked {
            product_id: cmd.product_id,
            quantity,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn milk_ledger() -> InventoryLedger {
        let mut ledger = InventoryLedger::empty();
        ledger.add_product("Milk", 10, 1.00, 1.50).unwrap();
        ledger
    }

    fn milk_id() -> ProductId {
        ProductId::new(1)
    }

    #[test]
    fn add_to_empty_catalog_assigns_id_one() {
        let ledger = milk_ledger();
        let milk = ledger.product(milk_id()).unwrap();

        assert_eq!(ledger.snapshot().product_count(), 1);
        assert_eq!(milk.name(), "Milk");
        assert_eq!(milk.quantity(), 10);
        assert_eq!(milk.purchasing_price().amount(), 1.00);
        assert_eq!(milk.selling_price().amount(), 1.50);
        assert_eq!(
            ledger.snapshot().transactions(),
            &[Transaction::new(
                TransactionKind::AddProduct,
                milk_id(),
                Quantity::new(10).unwrap()
            )]
        );
    }

    #[test]
    fn add_uses_max_id_plus_one() {
        let seed = [
            Product::new(ProductId::new(3), "Rice", 1, Price::from_stored(1.0), Price::from_stored(2.0)),
            Product::new(ProductId::new(7), "Oats", 1, Price::from_stored(1.0), Price::from_stored(2.0)),
        ];
        let mut ledger = InventoryLedger::with_catalog(seed).unwrap();
        let tx = ledger.add_product("Tea", 2, 0.5, 0.9).unwrap();
        assert_eq!(tx.product_id, ProductId::new(8));
    }

    #[test]
    fn add_after_largest_possible_id_is_rejected_without_side_effects() {
        let seed = [Product::new(
            ProductId::new(u64::MAX),
            "Salt",
            1,
            Price::from_stored(0.3),
            Price::from_stored(0.6),
        )];
        let mut ledger = InventoryLedger::with_catalog(seed).unwrap();
        let before = ledger.clone();

        assert_eq!(
            ledger.add_product("Milk", 1, 1.0, 1.5),
            Err(DomainError::IdsExhausted)
        );
        assert_eq!(ledger, before);
        assert!(ledger.product(ProductId::new(0)).is_none());
    }

    #[test]
    fn add_rejects_invalid_input_without_side_effects() {
        let mut ledger = milk_ledger();
        let before = ledger.clone();

        let cases = [
            ("", 1, 1.0, 1.0, ValidationError::EmptyName),
            ("   ", 1, 1.0, 1.0, ValidationError::EmptyName),
            ("Eggs", 0, 1.0, 1.0, ValidationError::ZeroQuantity),
            ("Eggs", -2, 1.0, 1.0, ValidationError::NegativeQuantity(-2)),
            (
                "Eggs",
                1,
                0.0,
                1.0,
                ValidationError::NonPositivePrice { field: "purchasingPrice" },
            ),
            (
                "Eggs",
                1,
                1.0,
                -3.0,
                ValidationError::NonPositivePrice { field: "sellingPrice" },
            ),
        ];

        for (name, qty, pp, sp, expected) in cases {
            let err = ledger.add_product(name, qty, pp, sp).unwrap_err();
            assert_eq!(err, DomainError::Validation(expected));
            assert_eq!(ledger, before);
        }
    }

    #[test]
    fn sell_decrements_and_logs() {
        let mut ledger = milk_ledger();
        let tx = ledger.sell_product(milk_id(), 4).unwrap();

        assert_eq!(tx.kind, TransactionKind::SellProduct);
        assert_eq!(ledger.product(milk_id()).unwrap().quantity(), 6);
        assert_eq!(ledger.snapshot().transaction_count(), 2);
        assert_eq!(ledger.version(), 2);
    }

    #[test]
    fn sell_entire_stock_is_allowed() {
        let mut ledger = milk_ledger();
        ledger.sell_product(milk_id(), 10).unwrap();
        assert!(!ledger.product(milk_id()).unwrap().is_in_stock());
    }

    #[test]
    fn sell_more_than_available_is_rejected() {
        let mut ledger = milk_ledger();
        ledger.restock_product(milk_id(), 1).unwrap();
        let before = ledger.clone();

        let err = ledger.sell_product(milk_id(), 999).unwrap_err();
        assert_eq!(err, DomainError::insufficient_stock(milk_id(), 999, 11));
        assert_eq!(ledger, before);
    }

    #[test]
    fn unknown_product_is_not_found_before_quantity_is_checked() {
        let mut ledger = milk_ledger();
        let missing = ProductId::new(99);

        assert_eq!(ledger.sell_product(missing, 0), Err(DomainError::NotFound(missing)));
        assert_eq!(ledger.restock_product(missing, 5), Err(DomainError::NotFound(missing)));
        assert_eq!(ledger.snapshot().transaction_count(), 1);
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected_for_sell_and_restock() {
        let mut ledger = milk_ledger();
        let before = ledger.clone();

        for qty in [0, -1] {
            let sell = ledger.sell_product(milk_id(), qty).unwrap_err();
            let restock = ledger.restock_product(milk_id(), qty).unwrap_err();
            assert!(sell.is_validation());
            assert!(restock.is_validation());
        }
        assert_eq!(ledger, before);
    }

    #[test]
    fn restock_overflow_is_rejected() {
        let seed = [Product::new(
            milk_id(),
            "Milk",
            u64::MAX - 1,
            Price::from_stored(1.0),
            Price::from_stored(1.5),
        )];
        let mut ledger = InventoryLedger::with_catalog(seed).unwrap();
        assert_eq!(
            ledger.restock_product(milk_id(), 2),
            Err(DomainError::Validation(ValidationError::QuantityOverflow))
        );
    }

    #[test]
    fn handle_does_not_mutate_and_execute_applies() {
        let mut ledger = milk_ledger();
        let cmd = LedgerCommand::RestockProduct(RestockProduct {
            product_id: milk_id(),
            quantity: 5,
        });

        let events = ledger.handle(&cmd).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "inventory.product.restocked");
        assert_eq!(ledger.product(milk_id()).unwrap().quantity(), 10);

        ledger.execute(&cmd).unwrap();
        assert_eq!(ledger.product(milk_id()).unwrap().quantity(), 15);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(i64),
        Sell(u64, i64),
        Restock(u64, i64),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (-3i64..50).prop_map(Op::Add),
            (1u64..6, -3i64..40).prop_map(|(id, q)| Op::Sell(id, q)),
            (1u64..6, -3i64..40).prop_map(|(id, q)| Op::Restock(id, q)),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Accepted commands move stock by exactly their quantity and append
        /// one entry; rejected commands change nothing.
        #[test]
        fn commands_keep_catalog_and_log_consistent(ops in prop::collection::vec(op(), 1..40)) {
            let mut ledger = InventoryLedger::empty();

            for op in ops {
                let before = ledger.clone();
                let result = match op {
                    Op::Add(q) => ledger.add_product("Item", q, 1.0, 2.0),
                    Op::Sell(id, q) => ledger.sell_product(ProductId::new(id), q),
                    Op::Restock(id, q) => ledger.restock_product(ProductId::new(id), q),
                };

                match result {
                    Ok(tx) => {
                        prop_assert_eq!(
                            ledger.snapshot().transaction_count(),
                            before.snapshot().transaction_count() + 1
                        );
                        let after_qty = ledger.product(tx.product_id).unwrap().quantity();
                        let q = tx.quantity.get();
                        match tx.kind {
                            TransactionKind::AddProduct => {
                                prop_assert_eq!(Ok(tx.product_id), before.snapshot().next_product_id());
                                prop_assert_eq!(
                                    ledger.snapshot().product_count(),
                                    before.snapshot().product_count() + 1
                                );
                                prop_assert_eq!(after_qty, q);
                            }
                            TransactionKind::SellProduct => {
                                let before_qty = before.product(tx.product_id).unwrap().quantity();
                                prop_assert_eq!(after_qty, before_qty - q);
                            }
                            TransactionKind::RestockProduct => {
                                let before_qty = before.product(tx.product_id).unwrap().quantity();
                                prop_assert_eq!(after_qty, before_qty + q);
                            }
                        }
                    }
                    Err(_) => {
                        prop_assert_eq!(&ledger, &before);
                    }
                }
            }
        }
    }
}
