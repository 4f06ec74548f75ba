use crate::config::VOLUME_SCALE;
use crate::types::{DerivedItem, MenuItem};

/// Attaches a monthly profit figure to every item.
///
/// `total_profit = (price - food_cost) * (sales_volume * volume_scale)`.
/// Negative results (cost above price) are kept as-is.
pub struct ProfitScorer {
    pub volume_scale: f64,
}

impl Default for ProfitScorer {
    fn default() -> Self {
        Self {
            volume_scale: VOLUME_SCALE,
        }
    }
}

impl ProfitScorer {
    pub fn new(volume_scale: f64) -> Self {
        Self { volume_scale }
    }

    /// Assumed monthly units sold for an item.
    pub fn monthly_units(&self, item: &MenuItem) -> f64 {
        item.sales_volume * self.volume_scale
    }

    pub fn total_profit(&self, item: &MenuItem) -> f64 {
        (item.price - item.food_cost) * self.monthly_units(item)
    }

    /// Same length and order as the input; the input is left untouched.
    pub fn score(&self, items: &[MenuItem]) -> Vec<DerivedItem> {
        items
            .iter()
            .map(|item| DerivedItem {
                item: item.clone(),
                total_profit: self.total_profit(item),
            })
            .collect()
    }
}
