use crate::config::WATERFALL_BASELINE;
use crate::types::{Recommendation, WaterfallKind, WaterfallStep};

/// Label used for recommendations that arrive without an item name.
pub const UNNAMED_ITEM: &str = "Unnamed Item";

/// Running-total waterfall from a baseline through every recommendation
/// to a target. Order-sensitive: each step starts where the previous ended.
pub struct RevenueWaterfall {
    pub baseline: f64,
}

impl Default for RevenueWaterfall {
    fn default() -> Self {
        Self {
            baseline: WATERFALL_BASELINE,
        }
    }
}

impl RevenueWaterfall {
    pub fn new(baseline: f64) -> Self {
        Self { baseline }
    }

    /// Always `recommendations.len() + 2` steps: Baseline first, Target last.
    pub fn build(&self, recommendations: &[Recommendation]) -> Vec<WaterfallStep> {
        let mut steps = Vec::with_capacity(recommendations.len() + 2);
        steps.push(WaterfallStep {
            name: "Baseline".to_string(),
            start: 0.0,
            end: self.baseline,
            value: self.baseline,
            display: self.baseline,
            kind: WaterfallKind::Baseline,
        });

        let mut running = self.baseline;
        for rec in recommendations {
            let value = rec.net_benefit_annual();
            let start = running;
            running += value;
            let name = if rec.item_name.is_empty() {
                UNNAMED_ITEM.to_string()
            } else {
                rec.item_name.clone()
            };
            steps.push(WaterfallStep {
                name,
                start,
                end: running,
                value,
                display: value,
                kind: WaterfallKind::Step,
            });
        }

        steps.push(WaterfallStep {
            name: "Target".to_string(),
            start: 0.0,
            end: running,
            value: running,
            display: running,
            kind: WaterfallKind::Target,
        });
        steps
    }
}
