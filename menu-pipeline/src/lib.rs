//! Menu engineering analytics.
//!
//! Takes the per-item records of a menu analysis (from a model response,
//! a CSV export, or the built-in demo) and derives the views a menu
//! dashboard shows: monthly profit per item, best and worst performers,
//! top profit contributors, a price histogram, per-section rollups, a
//! revenue waterfall over recommendations, and the four-quadrant
//! menu-engineering grouping.
//!
//! Every derivation is a pure function of its input. Malformed numeric
//! fields are coerced to zero when records are deserialized, so the
//! derivations themselves cannot fail.

pub mod analysis_loader;
pub mod coerce;
pub mod components;
pub mod config;
pub mod demo;
pub mod error;
pub mod filter;
pub mod menu_loader;
pub mod pipelines;
pub mod selector;
pub mod types;
pub mod util;

pub use config::DerivationConfig;
pub use error::{MenuError, MenuResult};
pub use pipelines::menu_report::{MenuReport, MenuReportPipeline};
pub use types::{AnalysisResult, DerivedItem, MenuCategory, MenuItem, Recommendation};
