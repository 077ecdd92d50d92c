// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

/// Quantities strictly below this threshold count as low stock.
pub const LOW_STOCK_THRESHOLD: i64 = 20;
/// Quantities strictly below this threshold (and at least the low threshold)
/// count as medium stock.
pub const MEDIUM_STOCK_THRESHOLD: i64 = 50;

/// Display classification derived purely from a product's quantity on hand.
///
/// This is the single definition of the stock thresholds; both API response
/// shaping and any display layer derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    MediumStock,
    InStock,
}

#[must_use]
pub fn stock_status(quantity: i64) -> StockStatus {
    if quantity == 0 {
        StockStatus::OutOfStock
    } else if quantity < LOW_STOCK_THRESHOLD {
        StockStatus::LowStock
    } else if quantity < MEDIUM_STOCK_THRESHOLD {
        StockStatus::MediumStock
    } else {
        StockStatus::InStock
    }
}

impl StockStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::OutOfStock => "Out of Stock",
            Self::LowStock => "Low Stock",
            Self::MediumStock => "Medium Stock",
            Self::InStock => "In Stock",
        }
    }

    /// Styling class; out-of-stock collapses into the low band.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::OutOfStock | Self::LowStock => "stock-low",
            Self::MediumStock => "stock-medium",
            Self::InStock => "stock-high",
        }
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_follows_fixed_thresholds() {
        let expected = [
            (0, StockStatus::OutOfStock, "Out of Stock"),
            (1, StockStatus::LowStock, "Low Stock"),
            (19, StockStatus::LowStock, "Low Stock"),
            (20, StockStatus::MediumStock, "Medium Stock"),
            (49, StockStatus::MediumStock, "Medium Stock"),
            (50, StockStatus::InStock, "In Stock"),
            (200, StockStatus::InStock, "In Stock"),
        ];
        for (quantity, status, label) in expected {
            assert_eq!(stock_status(quantity), status, "quantity {quantity}");
            assert_eq!(stock_status(quantity).label(), label, "quantity {quantity}");
        }
    }

    #[test]
    fn css_class_collapses_out_of_stock_into_low() {
        assert_eq!(stock_status(0).css_class(), "stock-low");
        assert_eq!(stock_status(5).css_class(), "stock-low");
        assert_eq!(stock_status(20).css_class(), "stock-medium");
        assert_eq!(stock_status(50).css_class(), "stock-high");
    }
}
