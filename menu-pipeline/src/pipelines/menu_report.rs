use serde::Serialize;

use crate::components::category_rollup::CategoryRollup;
use crate::components::price_histogram::PriceHistogram;
use crate::components::profit_scorer::ProfitScorer;
use crate::components::quadrant_grouper::QuadrantGrouper;
use crate::components::revenue_waterfall::RevenueWaterfall;
use crate::components::top_k_selector::{BottomKSelector, TopKSelector};
use crate::config::DerivationConfig;
use crate::selector::Selector;
use crate::types::{
    AnalysisResult, CategoryStats, DerivedItem, MenuItem, PriceBucket, QuadrantGroups,
    Recommendation, WaterfallStep,
};

/// Every derived view of one menu, independently owned.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuReport {
    pub items: Vec<DerivedItem>,
    pub best_performers: Vec<DerivedItem>,
    pub worst_performers: Vec<DerivedItem>,
    pub top_contributors: Vec<DerivedItem>,
    pub price_distribution: Vec<PriceBucket>,
    pub category_performance: Vec<CategoryStats>,
    pub waterfall: Vec<WaterfallStep>,
    pub quadrants: QuadrantGroups,
}

impl MenuReport {
    /// Sum of monthly profit across all items.
    pub fn total_monthly_profit(&self) -> f64 {
        self.items.iter().map(|d| d.total_profit).sum()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Target minus baseline: the combined annual effect of all
    /// recommendations.
    pub fn net_annual_benefit(&self) -> f64 {
        match (self.waterfall.first(), self.waterfall.last()) {
            (Some(baseline), Some(target)) => target.end - baseline.end,
            _ => 0.0,
        }
    }
}

/// The menu report pipeline.
///
/// Pipeline flow:
/// 1. ProfitScorer attaches monthly profit to every item
/// 2. TopKSelector picks best performers
/// 3. BottomKSelector picks worst performers
/// 4. TopKSelector picks the top profit contributors
/// 5. PriceHistogram bins prices
/// 6. CategoryRollup aggregates menu sections
/// 7. RevenueWaterfall accumulates recommendation impact
/// 8. QuadrantGrouper buckets items by category
///
/// Steps 2-8 only read the output of step 1; none depends on another.
pub struct MenuReportPipeline {
    scorer: ProfitScorer,
    best: TopKSelector,
    worst: BottomKSelector,
    contributors: TopKSelector,
    histogram: PriceHistogram,
    rollup: CategoryRollup,
    waterfall: RevenueWaterfall,
    quadrants: QuadrantGrouper,
}

impl Default for MenuReportPipeline {
    fn default() -> Self {
        Self::with_config(&DerivationConfig::default())
    }
}

impl MenuReportPipeline {
    pub fn with_config(config: &DerivationConfig) -> Self {
        Self {
            scorer: ProfitScorer::new(config.volume_scale),
            best: TopKSelector {
                k: config.best_performers,
            },
            worst: BottomKSelector {
                k: config.worst_performers,
            },
            contributors: TopKSelector {
                k: config.top_contributors,
            },
            histogram: PriceHistogram,
            rollup: CategoryRollup {
                volume_scale: config.volume_scale,
            },
            waterfall: RevenueWaterfall::new(config.waterfall_baseline),
            quadrants: QuadrantGrouper::default(),
        }
    }

    /// Derive every view from an item list and a recommendation list.
    /// Neither input is modified.
    pub fn execute(&self, items: &[MenuItem], recommendations: &[Recommendation]) -> MenuReport {
        let scored = self.scorer.score(items);
        log::debug!("ProfitScorer scored {} items", scored.len());

        let best_performers = self.select(&self.best, &scored);
        let worst_performers = self.select(&self.worst, &scored);
        let top_contributors = self.select(&self.contributors, &scored);

        let price_distribution = self.histogram.build(&scored);
        let category_performance = self.rollup.build(&scored);
        log::debug!("CategoryRollup produced {} groups", category_performance.len());

        let waterfall = self.waterfall.build(recommendations);
        let quadrants = self.quadrants.group(&scored);

        MenuReport {
            items: scored,
            best_performers,
            worst_performers,
            top_contributors,
            price_distribution,
            category_performance,
            waterfall,
            quadrants,
        }
    }

    /// Run the pipeline over a full analysis document.
    pub fn execute_analysis(&self, analysis: &AnalysisResult) -> MenuReport {
        self.execute(&analysis.matrix_items, &analysis.recommendations)
    }

    fn select(
        &self,
        selector: &dyn Selector<DerivedItem>,
        scored: &[DerivedItem],
    ) -> Vec<DerivedItem> {
        let selected = selector.select(scored);
        log::debug!(
            "{} selected {} of {} items",
            selector.name(),
            selected.len(),
            scored.len()
        );
        selected
    }
}
