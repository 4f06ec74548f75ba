use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coerce::{falsy_as_empty, lenient_f64, lenient_option, lenient_string, lenient_vec};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Menu-engineering quadrant assigned upstream by the analysis model.
///
/// Matching is exact and case-sensitive. Anything else is kept verbatim
/// as `Unknown` so it can be reported, never guessed into a quadrant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MenuCategory {
    /// High popularity, high profitability.
    Star,
    /// High popularity, low profitability.
    Plowhorse,
    /// Low popularity, high profitability.
    Puzzle,
    /// Low popularity, low profitability.
    Dog,
    Unknown(String),
}

impl MenuCategory {
    pub fn as_str(&self) -> &str {
        match self {
            MenuCategory::Star => "STAR",
            MenuCategory::Plowhorse => "PLOWHORSE",
            MenuCategory::Puzzle => "PUZZLE",
            MenuCategory::Dog => "DOG",
            MenuCategory::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, MenuCategory::Unknown(_))
    }
}

impl Default for MenuCategory {
    fn default() -> Self {
        MenuCategory::Unknown(String::new())
    }
}

impl From<&str> for MenuCategory {
    fn from(raw: &str) -> Self {
        match raw {
            "STAR" => MenuCategory::Star,
            "PLOWHORSE" => MenuCategory::Plowhorse,
            "PUZZLE" => MenuCategory::Puzzle,
            "DOG" => MenuCategory::Dog,
            other => MenuCategory::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuCategory::Star => write!(f, "Star"),
            MenuCategory::Plowhorse => write!(f, "Plowhorse"),
            MenuCategory::Puzzle => write!(f, "Puzzle"),
            MenuCategory::Dog => write!(f, "Dog"),
            MenuCategory::Unknown(raw) if raw.is_empty() => write!(f, "Unclassified"),
            MenuCategory::Unknown(raw) => write!(f, "Unknown ({})", raw),
        }
    }
}

impl Serialize for MenuCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MenuCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = lenient_string(deserializer)?;
        Ok(MenuCategory::from(raw.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Input records
// ---------------------------------------------------------------------------

/// One menu item as returned by the analysis model.
///
/// Numeric fields are coerced at the deserialization boundary, so every
/// value seen by the derivations is finite.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default)]
    pub category: MenuCategory,
    /// Menu section, e.g. "Appetizers". Empty means ungrouped.
    #[serde(default, deserialize_with = "falsy_as_empty")]
    pub category_group: String,
    /// Normalized 0-100 popularity score, not a unit count.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub sales_volume: f64,
    /// Normalized 0-100 profitability score, used for matrix positioning.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub profit_margin: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub food_cost: f64,
    /// Reported margin, 0-100. Not required to agree with price and cost.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub margin_percent: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub quick_recommendation: String,
}

/// Projected money movement for one recommendation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialImpact {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub monthly_current: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub monthly_projected: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub annual_current: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub annual_projected: f64,
    /// Signed annual delta.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub net_benefit_annual: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_name: String,
    #[serde(default)]
    pub category: MenuCategory,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub current_price: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub estimated_margin: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub current_issue: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub actions: Vec<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub reasoning_steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub financial_impact: Option<FinancialImpact>,
}

impl Recommendation {
    /// Signed annual benefit, `0.0` when the impact block is missing.
    pub fn net_benefit_annual(&self) -> f64 {
        self.financial_impact
            .as_ref()
            .map(|f| f.net_benefit_annual)
            .unwrap_or(0.0)
    }
}

/// A rewritten menu description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionOpt {
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub before: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub after: String,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub psychological_triggers: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reasoning: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub impact_percent: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOpportunity {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub issue: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub adjustment: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub reasoning: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub revenue_potential: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    /// Percent of theoretical profit potential, 0-100.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub efficiency_score: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub total_opportunity: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub recommendation_count: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub time_to_implement: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalImpact {
    #[serde(default, deserialize_with = "lenient_f64")]
    pub annual_increase: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub percent_improvement: f64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub roi_timeline: String,
    /// "Easy", "Moderate" or "Complex" as reported; not validated.
    #[serde(default, deserialize_with = "lenient_string")]
    pub difficulty: String,
}

/// The full analysis document. Every section is optional on the wire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "lenient_option")]
    pub executive_summary: Option<ExecutiveSummary>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub matrix_items: Vec<MenuItem>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub recommendations: Vec<Recommendation>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub descriptions: Vec<DescriptionOpt>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub pricing_strategy: Vec<PricingOpportunity>,
    #[serde(default, deserialize_with = "lenient_option")]
    pub final_impact: Option<FinalImpact>,
}

// ---------------------------------------------------------------------------
// Derived records
// ---------------------------------------------------------------------------

/// A menu item with its monthly profit contribution attached.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedItem {
    #[serde(flatten)]
    pub item: MenuItem,
    pub total_profit: f64,
}

/// One bar of the price-point histogram.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PriceBucket {
    pub range: String,
    pub count: usize,
}

/// Aggregates for one menu section.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    pub name: String,
    /// Summed scaled volume.
    pub vol: f64,
    pub avg_margin: f64,
    /// Summed price x scaled volume.
    pub rev: f64,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WaterfallKind {
    Baseline,
    Step,
    Target,
}

/// One bar of the cumulative revenue waterfall.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WaterfallStep {
    pub name: String,
    pub start: f64,
    pub end: f64,
    pub value: f64,
    pub display: f64,
    pub kind: WaterfallKind,
}

/// Items bucketed by their assigned quadrant, input order preserved.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct QuadrantGroups {
    pub stars: Vec<DerivedItem>,
    pub puzzles: Vec<DerivedItem>,
    pub plowhorses: Vec<DerivedItem>,
    pub dogs: Vec<DerivedItem>,
    /// Items whose category is not one of the four quadrants.
    pub dropped: Vec<DerivedItem>,
}

impl QuadrantGroups {
    /// Items that landed in one of the four quadrants.
    pub fn grouped_len(&self) -> usize {
        self.stars.len() + self.puzzles.len() + self.plowhorses.len() + self.dogs.len()
    }

    pub fn bucket(&self, category: &MenuCategory) -> &[DerivedItem] {
        match category {
            MenuCategory::Star => &self.stars,
            MenuCategory::Puzzle => &self.puzzles,
            MenuCategory::Plowhorse => &self.plowhorses,
            MenuCategory::Dog => &self.dogs,
            MenuCategory::Unknown(_) => &self.dropped,
        }
    }
}
