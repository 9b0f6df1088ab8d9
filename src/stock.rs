//! Stock Computation
//!
//! Pure functions deriving available stock and board status from raw stock
//! levels. Nothing here is cached; callers recompute on every read.

use crate::models::{Product, StockLevel};

pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 10;

/// Minimum scale of the stock progress bar
const METER_MIN_CAP: u64 = 20;

/// Categorical status shown on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductStatus {
    Active,
    LowStock,
    OutOfStock,
    Disabled,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::LowStock => "Low stock",
            ProductStatus::OutOfStock => "Out of stock",
            ProductStatus::Disabled => "Disabled",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProductStatus::Active => "status status-active",
            ProductStatus::LowStock => "status status-low",
            ProductStatus::OutOfStock => "status status-out",
            ProductStatus::Disabled => "status status-disabled",
        }
    }
}

pub fn compute_total_on_hand(levels: Option<&[StockLevel]>) -> i64 {
    levels.unwrap_or_default().iter().map(|l| l.stock_on_hand).sum()
}

pub fn compute_total_allocated(levels: Option<&[StockLevel]>) -> i64 {
    levels.unwrap_or_default().iter().map(|l| l.stock_allocated).sum()
}

/// On hand minus allocated, never below zero
pub fn compute_available_stock(levels: Option<&[StockLevel]>) -> u64 {
    let available = compute_total_on_hand(levels) - compute_total_allocated(levels);
    u64::try_from(available).unwrap_or(0)
}

/// Classify a product. `enabled` is checked first so disabled products never
/// show stock urgency.
pub fn compute_status(product: &Product, low_stock_threshold: u64) -> ProductStatus {
    if !product.enabled {
        return ProductStatus::Disabled;
    }
    match compute_available_stock(product.board_stock_levels()) {
        0 => ProductStatus::OutOfStock,
        n if n <= low_stock_threshold => ProductStatus::LowStock,
        _ => ProductStatus::Active,
    }
}

/// Stock badge tone, independent of the enabled flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockTone {
    Out,
    Low,
    Ok,
}

impl StockTone {
    pub fn label(&self) -> &'static str {
        match self {
            StockTone::Out => "Out",
            StockTone::Low => "Low stock",
            StockTone::Ok => "In stock",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            StockTone::Out => "stock-badge tone-out",
            StockTone::Low => "stock-badge tone-low",
            StockTone::Ok => "stock-badge tone-ok",
        }
    }

    pub fn bar_class(&self) -> &'static str {
        match self {
            StockTone::Out => "stock-bar-fill tone-out",
            StockTone::Low => "stock-bar-fill tone-low",
            StockTone::Ok => "stock-bar-fill tone-ok",
        }
    }
}

pub fn stock_tone(available: u64, low_threshold: u64) -> StockTone {
    if available == 0 {
        StockTone::Out
    } else if available <= low_threshold {
        StockTone::Low
    } else {
        StockTone::Ok
    }
}

/// Progress bar geometry for the stock figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockMeter {
    /// Value at which the bar is full
    pub cap: u64,
    pub percent: u8,
}

impl StockMeter {
    pub fn new(available: u64) -> Self {
        let cap = available.max(METER_MIN_CAP);
        let percent = ((available as f64 / cap as f64) * 100.0).round().min(100.0) as u8;
        Self { cap, percent }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductVariant;

    fn level(on_hand: i64, allocated: i64) -> StockLevel {
        StockLevel {
            id: format!("s{}-{}", on_hand, allocated),
            stock_on_hand: on_hand,
            stock_allocated: allocated,
        }
    }

    fn make_product(enabled: bool, variants: Vec<Vec<StockLevel>>) -> Product {
        Product {
            id: "1".to_string(),
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
            featured_asset: None,
            name: "Widget".to_string(),
            slug: "widget".to_string(),
            enabled,
            description: String::new(),
            variants: variants
                .into_iter()
                .enumerate()
                .map(|(i, stock_levels)| ProductVariant { id: format!("v{}", i), stock_levels })
                .collect(),
        }
    }

    #[test]
    fn test_totals_over_multiple_levels() {
        let levels = [level(10, 2), level(5, 1)];
        assert_eq!(compute_total_on_hand(Some(&levels[..])), 15);
        assert_eq!(compute_total_allocated(Some(&levels[..])), 3);
        assert_eq!(compute_available_stock(Some(&levels[..])), 12);
    }

    #[test]
    fn test_empty_and_absent_levels_are_zero() {
        assert_eq!(compute_available_stock(Some(&[][..])), 0);
        assert_eq!(compute_available_stock(None), 0);
        assert_eq!(compute_total_on_hand(None), 0);
        assert_eq!(compute_total_allocated(None), 0);
    }

    #[test]
    fn test_over_allocation_clamps_to_zero() {
        assert_eq!(compute_available_stock(Some(&[level(5, 8)][..])), 0);
        assert_eq!(compute_available_stock(Some(&[level(0, 3), level(1, 0)][..])), 0);
    }

    #[test]
    fn test_available_never_negative() {
        for on_hand in -3..6 {
            for allocated in -3..6 {
                let levels = [level(on_hand, allocated)];
                let available = compute_available_stock(Some(&levels[..]));
                assert_eq!(available as i64, (on_hand - allocated).max(0));
            }
        }
    }

    #[test]
    fn test_disabled_wins_over_stock() {
        for stock in [vec![], vec![level(0, 0)], vec![level(5, 0)], vec![level(500, 0)]] {
            let product = make_product(false, vec![stock]);
            assert_eq!(compute_status(&product, DEFAULT_LOW_STOCK_THRESHOLD), ProductStatus::Disabled);
        }
    }

    #[test]
    fn test_threshold_boundary_is_low_stock() {
        // 15 on hand, 5 allocated -> 10 available
        let product = make_product(true, vec![vec![level(15, 5)]]);
        assert_eq!(compute_status(&product, 10), ProductStatus::LowStock);

        let product = make_product(true, vec![vec![level(11, 0)]]);
        assert_eq!(compute_status(&product, 10), ProductStatus::Active);
    }

    #[test]
    fn test_out_of_stock_and_active() {
        let over_allocated = make_product(true, vec![vec![level(5, 8)]]);
        assert_eq!(compute_status(&over_allocated, 10), ProductStatus::OutOfStock);

        let no_variants = make_product(true, vec![]);
        assert_eq!(compute_status(&no_variants, 10), ProductStatus::OutOfStock);

        let plenty = make_product(true, vec![vec![level(40, 3)]]);
        assert_eq!(compute_status(&plenty, 10), ProductStatus::Active);
    }

    #[test]
    fn test_only_first_variant_counts() {
        let product = make_product(true, vec![vec![level(0, 0)], vec![level(100, 0)]]);
        assert_eq!(compute_status(&product, 10), ProductStatus::OutOfStock);
    }

    #[test]
    fn test_custom_threshold() {
        let product = make_product(true, vec![vec![level(12, 0)]]);
        assert_eq!(compute_status(&product, 5), ProductStatus::Active);
        assert_eq!(compute_status(&product, 12), ProductStatus::LowStock);
    }

    #[test]
    fn test_stock_tone() {
        assert_eq!(stock_tone(0, 10), StockTone::Out);
        assert_eq!(stock_tone(10, 10), StockTone::Low);
        assert_eq!(stock_tone(11, 10), StockTone::Ok);
        assert_eq!(StockTone::Low.label(), "Low stock");
    }

    #[test]
    fn test_stock_meter() {
        assert_eq!(StockMeter::new(0), StockMeter { cap: 20, percent: 0 });
        assert_eq!(StockMeter::new(5), StockMeter { cap: 20, percent: 25 });
        assert_eq!(StockMeter::new(20), StockMeter { cap: 20, percent: 100 });
        assert_eq!(StockMeter::new(75), StockMeter { cap: 75, percent: 100 });
    }
}
