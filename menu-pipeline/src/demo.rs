//! Built-in demo analysis: a twelve-item casual dining menu with two
//! priced recommendations. Used by `menu-report --demo` and in tests.

use crate::types::{
    AnalysisResult, DescriptionOpt, ExecutiveSummary, FinalImpact, FinancialImpact, MenuCategory,
    MenuItem, PricingOpportunity, Recommendation,
};

#[allow(clippy::too_many_arguments)]
fn item(
    name: &str,
    category: MenuCategory,
    category_group: &str,
    sales_volume: f64,
    profit_margin: f64,
    price: f64,
    food_cost: f64,
    margin_percent: f64,
    quick_recommendation: &str,
) -> MenuItem {
    MenuItem {
        name: name.to_string(),
        category,
        category_group: category_group.to_string(),
        sales_volume,
        profit_margin,
        price,
        food_cost,
        margin_percent,
        quick_recommendation: quick_recommendation.to_string(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[rustfmt::skip]
pub fn demo_menu_items() -> Vec<MenuItem> {
    use MenuCategory::*;
    vec![
        item("Wagyu Signature Burger", Star, "Entrees", 95.0, 65.0, 24.50, 8.50, 65.0, "Maintain high quality standards."),
        item("Classic Caesar Salad", Puzzle, "Salads", 28.0, 82.0, 14.00, 2.50, 82.0, "Increase menu visibility."),
        item("Penne Alla Vodka", Plowhorse, "Entrees", 88.0, 35.0, 16.00, 10.40, 35.0, "Adjust price or reduce cost."),
        item("Hand-Cut Truffle Fries", Star, "Appetizers", 92.0, 88.0, 12.00, 1.40, 88.0, "Feature as a must-try side."),
        item("Wild Caught Salmon", Puzzle, "Entrees", 32.0, 60.0, 28.00, 11.20, 60.0, "Promote via table talkers."),
        item("Jumbo Buffalo Wings", Plowhorse, "Appetizers", 90.0, 40.0, 15.00, 9.00, 40.0, "Bundle with high-margin drinks."),
        item("Beer Battered Onion Rings", Dog, "Appetizers", 12.0, 22.0, 9.00, 7.00, 22.0, "Remove or replace with high-margin alternative."),
        item("Prime Filet Mignon", Star, "Entrees", 70.0, 55.0, 48.00, 21.60, 55.0, "Maintain as flagship item."),
        item("Garlic Knot Basket", Star, "Appetizers", 98.0, 90.0, 6.00, 0.60, 90.0, "Default table recommendation."),
        item("House Red Wine", Star, "Beverages", 85.0, 75.0, 12.00, 3.00, 75.0, "Suggest with every entree."),
        item("Calamari Fritti", Plowhorse, "Appetizers", 78.0, 30.0, 14.00, 9.80, 30.0, "Evaluate portion sizing."),
        item("Molten Lava Cake", Puzzle, "Desserts", 25.0, 70.0, 10.00, 3.00, 70.0, "Upsell during entree service."),
    ]
}

#[rustfmt::skip]
pub fn demo_recommendations() -> Vec<Recommendation> {
    vec![
        Recommendation {
            item_name: "Classic Caesar Salad".to_string(),
            category: MenuCategory::Puzzle,
            current_price: 14.00,
            estimated_margin: 82.0,
            current_issue: "Strong profit margin of 82% but only 12 orders weekly despite prime menu placement.".to_string(),
            actions: strings(&[
                "Reduce price to $12.50",
                "Add 'Chef's Choice' badge",
                "Rewrite description for sensory appeal",
            ]),
            reasoning_steps: strings(&[
                "Current price of $14.00 is 18% above market average for Caesar salads in this segment.",
                "Menu description lacks sensory language required for higher conversion.",
                "High-margin puzzles respond to volume-driving price adjustments.",
                "Comparable premium salads are priced at $11.50-$12.75.",
                "A small price cut plus better positioning projects a 42% volume increase.",
            ]),
            financial_impact: Some(FinancialImpact {
                monthly_current: 504.0,
                monthly_projected: 715.0,
                annual_current: 6048.0,
                annual_projected: 8580.0,
                net_benefit_annual: 2532.0,
            }),
        },
        Recommendation {
            item_name: "Penne Alla Vodka".to_string(),
            category: MenuCategory::Plowhorse,
            current_price: 16.00,
            estimated_margin: 35.0,
            current_issue: "High sales volume (88/mo) but margin is insufficient for primary revenue contribution.".to_string(),
            actions: strings(&[
                "Increase price to $17.95 using charm pricing",
                "Reduce sauce portion by 1.5oz",
                "Introduce premium protein add-ons",
            ]),
            reasoning_steps: strings(&[
                "Dairy costs have risen 15%, eroding the pasta category's net margin.",
                "High item loyalty suggests low price sensitivity.",
                "$17.95 keeps the item under the sub-$20 threshold.",
                "Trimming cream portions reduces COGS by $0.45 per plate.",
                "Margin improves by $2.40 per unit with minimal volume loss.",
            ]),
            financial_impact: Some(FinancialImpact {
                monthly_current: 1408.0,
                monthly_projected: 1980.0,
                annual_current: 16896.0,
                annual_projected: 23760.0,
                net_benefit_annual: 6864.0,
            }),
        },
    ]
}

/// The complete demo analysis document.
#[rustfmt::skip]
pub fn demo_analysis() -> AnalysisResult {
    AnalysisResult {
        executive_summary: Some(ExecutiveSummary {
            efficiency_score: 78.0,
            total_opportunity: 145_000.0,
            recommendation_count: 5.0,
            time_to_implement: "2-3 Weeks".to_string(),
        }),
        matrix_items: demo_menu_items(),
        recommendations: demo_recommendations(),
        descriptions: vec![DescriptionOpt {
            item_name: "Wagyu Signature Burger".to_string(),
            before: "8oz beef patty with cheese, lettuce, tomato, and onion on a brioche bun.".to_string(),
            after: "28-day dry-aged Wagyu beef with aged Vermont cheddar, heirloom tomatoes and balsamic-glazed onions on a toasted artisan brioche bun.".to_string(),
            psychological_triggers: strings(&["Origin Story", "Sensory Adjectives", "Social Proof", "Authenticity"]),
            reasoning: "Replaces functional language with specific origin details that justify the premium price point.".to_string(),
            impact_percent: 22.0,
        }],
        pricing_strategy: vec![
            PricingOpportunity {
                title: "Charm Pricing Migration".to_string(),
                issue: "Most items use flat whole-dollar prices.".to_string(),
                adjustment: "Re-price flat-tier items to end in .95 or .99.".to_string(),
                reasoning: "The left-digit effect lowers perceived cost while keeping nearly all revenue.".to_string(),
                revenue_potential: 5200.0,
            },
            PricingOpportunity {
                title: "Decoy Strategy Implementation".to_string(),
                issue: "No premium anchor item in the seafood category.".to_string(),
                adjustment: "Introduce a Premium Seafood Platter at $75.00.".to_string(),
                reasoning: "Makes the $28.00 salmon read as a mid-tier value choice.".to_string(),
                revenue_potential: 8500.0,
            },
        ],
        final_impact: Some(FinalImpact {
            annual_increase: 145_000.0,
            percent_improvement: 28.0,
            roi_timeline: "30 Days".to_string(),
            difficulty: "Easy".to_string(),
        }),
    }
}
