use crate::config::{BEST_PERFORMERS, TOP_CONTRIBUTORS, WORST_PERFORMERS};
use crate::selector::Selector;
use crate::types::DerivedItem;

/// Selects the K items with the highest monthly profit.
pub struct TopKSelector {
    pub k: usize,
}

impl TopKSelector {
    /// Headline "best performers" list.
    pub fn best_performers() -> Self {
        Self { k: BEST_PERFORMERS }
    }

    /// Ranked profit-contribution chart.
    pub fn top_contributors() -> Self {
        Self { k: TOP_CONTRIBUTORS }
    }
}

impl Default for TopKSelector {
    fn default() -> Self {
        Self::best_performers()
    }
}

impl Selector<DerivedItem> for TopKSelector {
    fn score(&self, candidate: &DerivedItem) -> f64 {
        candidate.total_profit
    }

    fn size(&self) -> Option<usize> {
        Some(self.k)
    }
}

/// Selects the K items with the lowest monthly profit, lowest first.
pub struct BottomKSelector {
    pub k: usize,
}

impl Default for BottomKSelector {
    fn default() -> Self {
        Self {
            k: WORST_PERFORMERS,
        }
    }
}

impl Selector<DerivedItem> for BottomKSelector {
    fn score(&self, candidate: &DerivedItem) -> f64 {
        candidate.total_profit
    }

    fn ascending(&self) -> bool {
        true
    }

    fn size(&self) -> Option<usize> {
        Some(self.k)
    }
}
