//! Filter predicates for product listings

use serde::{Deserialize, Serialize};

use super::entity::Product;

/// Composable predicate set for filtering products.
///
/// All supplied predicates are ANDed; absent predicates are skipped. The
/// in-stock predicate is applied unless the caller explicitly disables it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive category equality
    pub category: Option<String>,
    /// Keep products with `price >= min_price`
    pub min_price: Option<f64>,
    /// Keep products with `price <= max_price`
    pub max_price: Option<f64>,
    /// Keep only products currently in stock
    pub in_stock: bool,
    /// Case-insensitive tag membership
    pub tag: Option<String>,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category: None,
            min_price: None,
            max_price: None,
            in_stock: true,
            tag: None,
        }
    }
}

impl ProductQuery {
    /// A query matching every product, including out-of-stock ones
    pub fn all() -> Self {
        Self {
            in_stock: false,
            ..Self::default()
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if product.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }

        if self.in_stock && !(product.in_stock && product.stock_quantity > 0) {
            return false;
        }

        if let Some(tag) = &self.tag {
            if !product.has_tag(tag) {
                return false;
            }
        }

        true
    }
}
