//! Product service.
//!
//! Business logic for creating, editing, deleting, and totalling products,
//! always scoped to the active session's user. Raw form values are coerced
//! into typed values here, before anything reaches the store.

use sqlx::PgPool;
use serde::Serialize;
use thiserror::Error;

use shelfline_core::{DiscountPercent, Money, MoneyError, ProductId, UserId};

use crate::db::{ProductRepository, RepositoryError};
use crate::models::product::Product;

/// Errors from product operations.
#[derive(Debug, Error)]
pub enum ProductServiceError {
    /// The submitted cost failed to coerce into a non-negative amount.
    #[error("invalid cost: {0}")]
    InvalidCost(#[from] MoneyError),

    /// The submitted name is empty.
    #[error("product name must not be empty")]
    EmptyName,

    /// No product with this id is owned by the active user. Deliberately
    /// indistinguishable from "exists but owned by someone else".
    #[error("product not found")]
    NotFound,

    /// The store failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Count and cost totals for a user's products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Number of products owned.
    pub count: usize,
    /// Decimal sum of all costs.
    pub total: Money,
    /// `total * (1 - discount / 100)`, rounded to two decimal places.
    pub discounted_total: Money,
}

impl Totals {
    /// Compute totals over a product list. Pure; the discount applies to the
    /// sum, never per product.
    #[must_use]
    pub fn compute(products: &[Product], discount: DiscountPercent) -> Self {
        let total: Money = products.iter().map(|p| p.cost).sum();
        Self {
            count: products.len(),
            total,
            discounted_total: discount.apply(total),
        }
    }
}

/// Service for product operations scoped to a single user.
pub struct ProductService<'a> {
    products: ProductRepository<'a>,
}

impl<'a> ProductService<'a> {
    /// Create a new product service.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            products: ProductRepository::new(pool),
        }
    }

    /// List the user's products in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ProductServiceError::Repository` if the store fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<Product>, ProductServiceError> {
        Ok(self.products.list_for_owner(user_id).await?)
    }

    /// Coerce the raw cost and insert a product for the user.
    ///
    /// # Errors
    ///
    /// Returns `ProductServiceError::EmptyName` or `InvalidCost` before the
    /// store is touched, `Repository` if the insert fails.
    pub async fn add_product(
        &self,
        user_id: UserId,
        name: &str,
        cost_raw: &str,
    ) -> Result<Product, ProductServiceError> {
        let name = parse_name(name)?;
        let cost = Money::parse(cost_raw)?;

        Ok(self.products.create(user_id, name, cost).await?)
    }

    /// Update a product the user owns.
    ///
    /// # Errors
    ///
    /// Returns `ProductServiceError::NotFound` when the product is missing or
    /// owned by someone else, `EmptyName`/`InvalidCost` on coercion failure,
    /// `Repository` if the store fails.
    pub async fn edit_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
        name: &str,
        cost_raw: &str,
    ) -> Result<Product, ProductServiceError> {
        let name = parse_name(name)?;
        let cost = Money::parse(cost_raw)?;

        let Some(existing) = self.products.get(product_id, user_id).await? else {
            return Err(ProductServiceError::NotFound);
        };

        let rows = self
            .products
            .update(product_id, user_id, name, cost)
            .await?;
        if rows == 0 {
            return Err(ProductServiceError::NotFound);
        }

        Ok(Product {
            name: name.to_owned(),
            cost,
            ..existing
        })
    }

    /// Delete a product the user owns. Absence of a matching row is success,
    /// so a second delete of the same id is a no-op, never an error.
    ///
    /// # Errors
    ///
    /// Returns `ProductServiceError::Repository` if the store fails.
    pub async fn delete_product(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), ProductServiceError> {
        let rows = self.products.delete(product_id, user_id).await?;
        if rows == 0 {
            tracing::debug!(%product_id, %user_id, "delete matched no rows");
        }
        Ok(())
    }
}

fn parse_name(name: &str) -> Result<&str, ProductServiceError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ProductServiceError::EmptyName);
    }
    Ok(name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn product(id: i32, cost: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("product-{id}"),
            cost: Money::parse(cost).unwrap(),
            owner_id: UserId::new(1),
            created_at: Utc::now(),
        }
    }

    fn money(raw: &str) -> Money {
        Money::parse(raw).unwrap()
    }

    #[test]
    fn totals_of_empty_set_are_zero_for_any_discount() {
        for raw in ["0", "10", "100", "250"] {
            let discount = DiscountPercent::parse(raw).unwrap();
            let totals = Totals::compute(&[], discount);
            assert_eq!(totals.count, 0);
            assert_eq!(totals.total, Money::ZERO);
            assert_eq!(totals.discounted_total, Money::ZERO);
        }
    }

    #[test]
    fn totals_match_dashboard_scenario() {
        // one product at 19.99, 10% off
        let products = vec![product(1, "19.99")];
        let totals = Totals::compute(&products, DiscountPercent::parse("10").unwrap());
        assert_eq!(totals.count, 1);
        assert_eq!(totals.total, money("19.99"));
        assert_eq!(totals.discounted_total, money("17.99"));
    }

    #[test]
    fn totals_are_linear_in_added_products() {
        let discount = DiscountPercent::parse("25").unwrap();
        let mut products = vec![product(1, "10.00"), product(2, "2.50")];
        let before = Totals::compute(&products, discount);

        products.push(product(3, "4.00"));
        let after = Totals::compute(&products, discount);

        assert_eq!(after.count, before.count + 1);
        assert_eq!(after.total, before.total + money("4.00"));
        assert_eq!(
            after.discounted_total,
            // 4.00 * 0.75 adds exactly 3.00 under decimal arithmetic
            before.discounted_total + money("3.00")
        );
    }

    #[test]
    fn totals_without_discount_equal_plain_sum() {
        let products = vec![product(1, "0.10"), product(2, "0.20")];
        let totals = Totals::compute(&products, DiscountPercent::ZERO);
        assert_eq!(totals.total, money("0.30"));
        assert_eq!(totals.discounted_total, totals.total);
    }

    #[test]
    fn parse_name_trims_and_rejects_empty() {
        assert_eq!(parse_name(" Widget ").unwrap(), "Widget");
        assert!(matches!(
            parse_name("   "),
            Err(ProductServiceError::EmptyName)
        ));
    }
}
