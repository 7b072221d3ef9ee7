//! # Cart
//!
//! The shopping cart state holder.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action               Operation               Cart Change            │
//! │  ─────────               ─────────               ───────────            │
//! │                                                                         │
//! │  "Add to Cart" ─────────► add(product) ─────────► push line (qty 1)    │
//! │                                                 or line.qty += 1       │
//! │                                                                         │
//! │  Stepper +/- ───────────► update(id, qty) ──────► line.qty =           │
//! │                                                   clamp(qty, 1, stock) │
//! │                                                                         │
//! │  "Remove" ──────────────► remove(id) ───────────► lines.remove(i)      │
//! │                                                                         │
//! │  Header badge ──────────► total_items() ────────► (read only)          │
//! │  Panel footer ──────────► total_price() ────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line satisfies `1 <= quantity <= product.stock`
//!
//! Both hold after every call, whether it succeeds or fails. The cart does
//! not trust the UI to disable buttons at the bounds.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLine, Product, ProductId};

/// The shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Lines in insertion order
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
        }
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product not in cart: new line with quantity 1
    /// - Product already in cart: quantity + 1
    ///
    /// ## Errors
    /// - `OutOfStock` if the product has no stock
    /// - `InsufficientStock` if the line is already at stock; the cart is
    ///   left unchanged
    ///
    /// ## Returns
    /// The line's quantity after the add.
    pub fn add(&mut self, product: &Product) -> CoreResult<i64> {
        if product.is_out_of_stock() {
            return Err(CoreError::OutOfStock {
                product_id: product.id,
                name: product.name.clone(),
            });
        }

        if let Some(line) = self.line_mut(product.id) {
            let requested = line.quantity + 1;
            let available = line.product.stock;
            if !line.product.can_hold(requested) {
                return Err(CoreError::InsufficientStock {
                    name: line.product.name.clone(),
                    available,
                    requested,
                });
            }
            line.quantity = requested;
            return Ok(requested);
        }

        self.lines.push(CartLine::new(product));
        Ok(1)
    }

    /// Sets a line's quantity, clamped to `[1, stock]`.
    ///
    /// ## Behavior
    /// ```text
    /// stock = 15
    ///   update(id, 0)   → stored 1    (never removes; use `remove`)
    ///   update(id, 7)   → stored 7
    ///   update(id, 40)  → stored 15
    /// ```
    ///
    /// ## Returns
    /// The stored quantity.
    pub fn update(&mut self, product_id: ProductId, quantity: i64) -> CoreResult<i64> {
        let line = self
            .line_mut(product_id)
            .ok_or(CoreError::NotInCart(product_id))?;

        // stock >= 1 for any line that exists, so the range is never empty
        let stored = quantity.clamp(1, line.product.stock.max(1));
        line.quantity = stored;
        Ok(stored)
    }

    /// Removes a product's line entirely.
    ///
    /// ## Returns
    /// The removed line.
    pub fn remove(&mut self, product_id: ProductId) -> CoreResult<CartLine> {
        let index = self
            .lines
            .iter()
            .position(|l| l.product_id() == product_id)
            .ok_or(CoreError::NotInCart(product_id))?;
        Ok(self.lines.remove(index))
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `product_id`, if any.
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id() == product_id)
    }

    fn line_mut(&mut self, product_id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id() == product_id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities (the header badge count).
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price × quantity.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Cart::new()
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: u32,
    #[ts(type = "number")]
    pub total_items: i64,
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.len() as u32,
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_products;

    fn product(id: ProductId, price: i64, stock: i64) -> Product {
        Product {
            id,
            name: format!("Phone {}", id),
            brand: "Brand".to_string(),
            model: format!("M-{}", id),
            price,
            stock,
            description: String::new(),
            image: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn test_add_new_product_creates_line_with_quantity_one() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 5);

        assert_eq!(cart.add(&p).unwrap(), 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.line(1).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_existing_product_increments() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 5);

        cart.add(&p).unwrap();
        assert_eq!(cart.add(&p).unwrap(), 2);
        assert_eq!(cart.len(), 1); // Still one line
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_add_out_of_stock_rejected() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 0);

        assert!(matches!(cart.add(&p), Err(CoreError::OutOfStock { .. })));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_beyond_stock_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 2);

        cart.add(&p).unwrap();
        cart.add(&p).unwrap();
        let err = cart.add(&p).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 2,
                requested: 3,
                ..
            }
        ));
        assert_eq!(cart.line(1).unwrap().quantity, 2);
    }

    #[test]
    fn test_update_sets_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 10);
        cart.add(&p).unwrap();

        assert_eq!(cart.update(1, 7).unwrap(), 7);
        assert_eq!(cart.line(1).unwrap().quantity, 7);
    }

    #[test]
    fn test_update_clamps_to_stock_bounds() {
        let mut cart = Cart::new();
        let p = product(1, 1000, 15);
        cart.add(&p).unwrap();

        assert_eq!(cart.update(1, 0).unwrap(), 1);
        assert_eq!(cart.update(1, -4).unwrap(), 1);
        assert_eq!(cart.update(1, 40).unwrap(), 15);
        assert_eq!(cart.line(1).unwrap().quantity, 15);
        assert_eq!(cart.len(), 1, "update never removes a line");
    }

    #[test]
    fn test_update_unknown_product() {
        let mut cart = Cart::new();
        assert!(matches!(cart.update(9, 2), Err(CoreError::NotInCart(9))));
    }

    #[test]
    fn test_remove_eliminates_line_and_totals() {
        let mut cart = Cart::new();
        let a = product(1, 1000, 5);
        let b = product(2, 250, 5);
        cart.add(&a).unwrap();
        cart.add(&b).unwrap();
        cart.update(2, 4).unwrap();

        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.product.id, 1);
        assert!(cart.line(1).is_none());
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.total_price().units(), 1000);

        assert!(matches!(cart.remove(1), Err(CoreError::NotInCart(1))));
    }

    #[test]
    fn test_total_price_is_sum_of_line_totals() {
        let mut forward = Cart::new();
        let mut backward = Cart::new();
        let products = sample_products();

        for p in &products {
            forward.add(p).unwrap();
        }
        for p in products.iter().rev() {
            backward.add(p).unwrap();
        }
        forward.update(2, 3).unwrap();
        backward.update(2, 3).unwrap();

        let expected: i64 = products
            .iter()
            .map(|p| p.price * if p.id == 2 { 3 } else { 1 })
            .sum();
        assert_eq!(forward.total_price().units(), expected);
        assert_eq!(forward.total_price(), backward.total_price());
        assert_eq!(forward.total_items(), 7);
    }

    #[test]
    fn test_total_price_saturates() {
        let mut cart = Cart::new();
        let p = product(1, 5_000_000_000_000_000_000, 3);
        cart.add(&p).unwrap();
        assert_eq!(cart.update(1, 3).unwrap(), 3);

        assert_eq!(cart.total_price().units(), i64::MAX);
        assert_eq!(CartTotals::from(&cart).total_price.units(), i64::MAX);
    }

    #[test]
    fn test_clear_and_totals_summary() {
        let mut cart = Cart::new();
        let p = product(1, 2500, 3);
        cart.add(&p).unwrap();
        cart.add(&p).unwrap();

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 1);
        assert_eq!(totals.total_items, 2);
        assert_eq!(totals.total_price.units(), 5000);

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_line_keeps_snapshot_of_product() {
        let mut cart = Cart::new();
        let mut p = product(1, 1000, 3);
        cart.add(&p).unwrap();

        p.price = 9999;
        cart.add(&p).unwrap();
        assert_eq!(cart.line(1).unwrap().product.price, 1000);
    }
}
