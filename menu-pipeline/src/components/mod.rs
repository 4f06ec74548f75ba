pub mod category_rollup;
pub mod known_category_filter;
pub mod price_histogram;
pub mod profit_scorer;
pub mod quadrant_grouper;
pub mod revenue_waterfall;
pub mod top_k_selector;
