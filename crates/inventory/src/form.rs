//! Raw text input from the add/sell/restock dialogs.
//!
//! Only presence and number syntax are checked here. Zero, negative and
//! non-positive values go through to the ledger, which owns those rules.

use grocer_core::{ProductId, ValidationError};

use crate::ledger::{AddProduct, RestockProduct, SellProduct};

/// Fields of the "Add Product" dialog, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddProductForm {
    pub name: String,
    pub quantity: String,
    pub purchasing_price: String,
    pub selling_price: String,
}

impl AddProductForm {
    /// Every field is mandatory; numbers must parse.
    pub fn parse(&self) -> Result<AddProduct, ValidationError> {
        let name = required("name", &self.name)?;
        let quantity = parse_quantity(&self.quantity)?;
        let purchasing_price = parse_price("purchasingPrice", &self.purchasing_price)?;
        let selling_price = parse_price("sellingPrice", &self.selling_price)?;

        Ok(AddProduct {
            name: name.to_string(),
            quantity,
            purchasing_price,
            selling_price,
        })
    }
}

/// Parse the quantity field of any dialog as a whole number.
pub fn parse_quantity(raw: &str) -> Result<i64, ValidationError> {
    let raw = required("quantity", raw)?;
    raw.parse::<i64>()
        .map_err(|_| ValidationError::not_a_number("quantity", raw))
}

impl SellProduct {
    pub fn from_input(product_id: ProductId, quantity: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            product_id,
            quantity: parse_quantity(quantity)?,
        })
    }
}

impl RestockProduct {
    pub fn from_input(product_id: ProductId, quantity: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            product_id,
            quantity: parse_quantity(quantity)?,
        })
    }
}

fn required<'a>(field: &'static str, raw: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed)
}

fn parse_price(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let raw = required(field, raw)?;
    raw.parse::<f64>()
        .map_err(|_| ValidationError::not_a_number(field, raw))
}
