use std::collections::HashMap;

use crate::config::VOLUME_SCALE;
use crate::types::{CategoryStats, DerivedItem};

/// Group name used when an item has no menu section.
pub const DEFAULT_GROUP: &str = "Other";

#[derive(Default)]
struct Totals {
    sales: f64,
    margin: f64,
    revenue: f64,
    count: usize,
}

/// Per-section aggregates, groups emitted in first-seen order.
pub struct CategoryRollup {
    pub volume_scale: f64,
}

impl Default for CategoryRollup {
    fn default() -> Self {
        Self {
            volume_scale: VOLUME_SCALE,
        }
    }
}

impl CategoryRollup {
    pub fn group_name(derived: &DerivedItem) -> &str {
        let group = derived.item.category_group.as_str();
        if group.is_empty() {
            DEFAULT_GROUP
        } else {
            group
        }
    }

    pub fn build(&self, items: &[DerivedItem]) -> Vec<CategoryStats> {
        let mut order: Vec<(&str, Totals)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for derived in items {
            let name = Self::group_name(derived);
            let slot = *index.entry(name).or_insert_with(|| {
                order.push((name, Totals::default()));
                order.len() - 1
            });
            let units = derived.item.sales_volume * self.volume_scale;
            let totals = &mut order[slot].1;
            totals.sales += units;
            totals.margin += derived.item.margin_percent;
            totals.revenue += derived.item.price * units;
            totals.count += 1;
        }

        order
            .into_iter()
            .map(|(name, totals)| CategoryStats {
                name: name.to_string(),
                vol: totals.sales,
                avg_margin: if totals.count > 0 {
                    totals.margin / totals.count as f64
                } else {
                    0.0
                },
                rev: totals.revenue,
                count: totals.count,
            })
            .collect()
    }
}
