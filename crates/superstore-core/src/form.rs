//! # Product Form
//!
//! The six-field product form and its validation pipeline.
//!
//! ## Validation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    ProductForm::read()                                  │
//! │                                                                         │
//! │  name ──────► non-empty?          ──► Required("name")                  │
//! │  price ─────► parses as integer?  ──► InvalidInteger("price")           │
//! │  quantity ──► parses as integer?  ──► InvalidInteger("quantity")        │
//! │  mfg date ──► parses as date?     ──► InvalidDate("mfgdate")            │
//! │  exp date ──► parses as date?     ──► InvalidDate("expdate")            │
//! │  packing ───► free text, empty ok                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductDraft (all six fields concrete)                                 │
//! │                                                                         │
//! │  Fail fast: first failure wins, nothing later is inspected, and no     │
//! │  store access happens on failure.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A blank numeric or date field yields that field's parse error, not a
//! separate "required" error: an empty string simply fails to parse, the
//! same way it did in the legacy application.
//!
//! Deliberately absent checks:
//! - no sign check on price or quantity
//! - no ordering check between expiry and manufacturing dates

use crate::dates::parse_date;
use crate::error::{ValidationError, ValidationResult};
use crate::input::FieldInput;
use crate::types::{Product, ProductDraft};

/// The six product inputs, with placeholder semantics per field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub product_name: FieldInput,
    pub price: FieldInput,
    pub mfg_date: FieldInput,
    pub expiry_date: FieldInput,
    pub quantity: FieldInput,
    pub packing: FieldInput,
}

impl ProductForm {
    /// Creates a form with every field in placeholder state.
    ///
    /// Placeholder strings match the legacy screen's instructional text.
    pub fn new() -> Self {
        ProductForm {
            product_name: FieldInput::new("Enter Product Name"),
            price: FieldInput::new("Enter Price"),
            mfg_date: FieldInput::new("Enter Mfg Date"),
            expiry_date: FieldInput::new("Enter Expiry Date"),
            quantity: FieldInput::new("Enter Quantity"),
            packing: FieldInput::new("Enter Packing"),
        }
    }

    /// Runs the validation pipeline and produces a draft ready for the store.
    ///
    /// Field order and failure tags are part of the application's contract;
    /// see the module docs. No side effects on failure.
    pub fn read(&self) -> ValidationResult<ProductDraft> {
        let product_name = self
            .product_name
            .value()
            .ok_or_else(|| ValidationError::required("name"))?
            .to_string();

        let price = parse_integer(&self.price, "price")?;
        let quantity = parse_integer(&self.quantity, "quantity")?;
        let mfg_date = parse_date(self.mfg_date.value().unwrap_or(""))
            .ok_or_else(|| ValidationError::invalid_date("mfgdate"))?;
        let expiry_date = parse_date(self.expiry_date.value().unwrap_or(""))
            .ok_or_else(|| ValidationError::invalid_date("expdate"))?;

        let packing = self.packing.value().unwrap_or("").to_string();

        Ok(ProductDraft {
            product_name,
            price,
            mfg_date,
            expiry_date,
            quantity,
            packing,
        })
    }

    /// Copies a selected row's cells into the inputs.
    ///
    /// Every non-NULL cell switches its input into data state; a NULL cell
    /// resets that one input back to its placeholder.
    pub fn fill_from(&mut self, product: &Product) {
        self.product_name.set(product.product_name.clone());
        self.price.fill(product.price);
        self.mfg_date.fill(product.mfg_date);
        self.expiry_date.fill(product.expiry_date);
        self.quantity.fill(product.quantity);
        self.packing.fill(product.packing.clone());
    }

    /// Returns every input to placeholder state.
    pub fn reset(&mut self) {
        self.product_name.reset();
        self.price.reset();
        self.mfg_date.reset();
        self.expiry_date.reset();
        self.quantity.reset();
        self.packing.reset();
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        ProductForm::new()
    }
}

/// Parses a field as i64, mapping blank or unparsable text to the field's
/// integer error. No sign check: the store accepts what the parser accepts.
fn parse_integer(field: &FieldInput, name: &str) -> ValidationResult<i64> {
    field
        .value()
        .unwrap_or("")
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_integer(name))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filled_form() -> ProductForm {
        let mut form = ProductForm::new();
        form.product_name.set("Milk");
        form.price.set("50");
        form.quantity.set("10");
        form.mfg_date.set("2024-01-01");
        form.expiry_date.set("2024-06-01");
        form.packing.set("1L");
        form
    }

    #[test]
    fn test_valid_form_produces_draft() {
        let draft = filled_form().read().unwrap();
        assert_eq!(
            draft,
            ProductDraft {
                product_name: "Milk".to_string(),
                price: 50,
                mfg_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                expiry_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                quantity: 10,
                packing: "1L".to_string(),
            }
        );
    }

    #[test]
    fn test_untouched_form_fails_on_name_first() {
        let form = ProductForm::new();
        assert_eq!(form.read().unwrap_err(), ValidationError::required("name"));
    }

    #[test]
    fn test_blank_price_is_an_integer_error() {
        let mut form = filled_form();
        form.price.reset();
        assert_eq!(
            form.read().unwrap_err(),
            ValidationError::invalid_integer("price")
        );
    }

    #[test]
    fn test_unparsable_quantity() {
        let mut form = filled_form();
        form.quantity.set("lots");
        assert_eq!(
            form.read().unwrap_err(),
            ValidationError::invalid_integer("quantity")
        );
    }

    #[test]
    fn test_bad_dates_report_their_field() {
        let mut form = filled_form();
        form.mfg_date.set("soon");
        assert_eq!(
            form.read().unwrap_err(),
            ValidationError::invalid_date("mfgdate")
        );

        let mut form = filled_form();
        form.expiry_date.set("later");
        assert_eq!(
            form.read().unwrap_err(),
            ValidationError::invalid_date("expdate")
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // Both price and quantity are bad; the earlier field is reported
        let mut form = filled_form();
        form.price.set("abc");
        form.quantity.set("xyz");
        assert_eq!(
            form.read().unwrap_err(),
            ValidationError::invalid_integer("price")
        );
    }

    #[test]
    fn test_empty_packing_is_allowed() {
        let mut form = filled_form();
        form.packing.reset();
        assert_eq!(form.read().unwrap().packing, "");
    }

    #[test]
    fn test_negative_price_is_accepted() {
        // Preserved source behavior: no sign check on price
        let mut form = filled_form();
        form.price.set("-5");
        assert_eq!(form.read().unwrap().price, -5);
    }

    #[test]
    fn test_expiry_before_mfg_is_accepted() {
        // No ordering check between the two dates
        let mut form = filled_form();
        form.mfg_date.set("2024-06-01");
        form.expiry_date.set("2024-01-01");
        assert!(form.read().is_ok());
    }

    #[test]
    fn test_fill_from_switches_inputs_out_of_placeholder() {
        let mut form = ProductForm::new();
        form.fill_from(&Product {
            pid: 7,
            product_name: "Milk".to_string(),
            price: Some(50),
            mfg_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            expiry_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            quantity: Some(10),
            packing: None,
        });

        assert_eq!(form.product_name.value(), Some("Milk"));
        assert_eq!(form.price.value(), Some("50"));
        assert_eq!(form.quantity.value(), Some("10"));
        // NULL cell resets that one input to its placeholder
        assert!(form.packing.is_placeholder());
    }

    #[test]
    fn test_reset_restores_all_placeholders() {
        let mut form = filled_form();
        form.reset();
        assert!(form.product_name.is_placeholder());
        assert!(form.price.is_placeholder());
        assert!(form.mfg_date.is_placeholder());
        assert!(form.expiry_date.is_placeholder());
        assert!(form.quantity.is_placeholder());
        assert!(form.packing.is_placeholder());
    }
}
