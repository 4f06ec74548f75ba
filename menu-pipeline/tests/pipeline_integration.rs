use menu_pipeline::analysis_loader::parse_analysis;
use menu_pipeline::components::price_histogram::PriceHistogram;
use menu_pipeline::components::profit_scorer::ProfitScorer;
use menu_pipeline::components::top_k_selector::{BottomKSelector, TopKSelector};
use menu_pipeline::demo::demo_analysis;
use menu_pipeline::menu_loader::load_menu_items;
use menu_pipeline::pipelines::menu_report::MenuReportPipeline;
use menu_pipeline::selector::Selector;
use menu_pipeline::types::*;

// ---------------------------------------------------------------------------
// Test data fixtures
// ---------------------------------------------------------------------------

/// The two-item scenario used throughout the menu documentation.
const TWO_ITEM_ANALYSIS: &str = r#"{
    "matrixItems": [
        {"name": "A", "price": 10, "foodCost": 4, "salesVolume": 5,
         "category": "STAR", "categoryGroup": "Entrees", "marginPercent": 60},
        {"name": "B", "price": 25, "foodCost": 20, "salesVolume": 2,
         "category": "DOG", "categoryGroup": "Entrees", "marginPercent": 20}
    ]
}"#;

fn names(items: &[DerivedItem]) -> Vec<&str> {
    items.iter().map(|d| d.item.name.as_str()).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// ---------------------------------------------------------------------------
// End-to-end
// ---------------------------------------------------------------------------

#[test]
fn two_item_scenario() {
    let analysis = parse_analysis(TWO_ITEM_ANALYSIS).unwrap();
    let report = MenuReportPipeline::default().execute_analysis(&analysis);

    assert!(close(report.items[0].total_profit, 300.0));
    assert!(close(report.items[1].total_profit, 100.0));
    assert_eq!(names(&report.best_performers), vec!["A", "B"]);
    assert_eq!(names(&report.worst_performers), vec!["B", "A"]);

    assert_eq!(report.category_performance.len(), 1);
    let entrees = &report.category_performance[0];
    assert_eq!(entrees.name, "Entrees");
    assert!(close(entrees.vol, 70.0));
    assert!(close(entrees.avg_margin, 40.0));
    assert!(close(entrees.rev, 1000.0));
    assert_eq!(entrees.count, 2);

    assert_eq!(names(&report.quadrants.stars), vec!["A"]);
    assert_eq!(names(&report.quadrants.dogs), vec!["B"]);
}

#[test]
fn demo_report_numbers() {
    let report = MenuReportPipeline::default().execute_analysis(&demo_analysis());

    assert_eq!(report.item_count(), 12);
    assert!(close(report.total_monthly_profit(), 80_564.0));

    assert_eq!(
        names(&report.best_performers),
        vec![
            "Prime Filet Mignon",
            "Wagyu Signature Burger",
            "Hand-Cut Truffle Fries",
            "House Red Wine"
        ]
    );
    assert_eq!(
        names(&report.worst_performers),
        vec![
            "Beer Battered Onion Rings",
            "Molten Lava Cake",
            "Classic Caesar Salad",
            "Calamari Fritti",
            "Penne Alla Vodka"
        ]
    );
    assert_eq!(report.top_contributors.len(), 10);

    let counts: Vec<usize> = report.price_distribution.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![2, 7, 2, 0, 1, 0]);

    let groups: Vec<&str> = report
        .category_performance
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(groups, vec!["Entrees", "Salads", "Appetizers", "Beverages", "Desserts"]);
    assert!(close(report.category_performance[0].avg_margin, 53.75));
    assert!(close(report.category_performance[0].vol, 2850.0));

    assert_eq!(report.waterfall.len(), 4);
    assert!(close(report.waterfall[3].end, 509_396.0));
    assert!(close(report.net_annual_benefit(), 9_396.0));

    assert_eq!(report.quadrants.stars.len(), 5);
    assert_eq!(report.quadrants.puzzles.len(), 3);
    assert_eq!(report.quadrants.plowhorses.len(), 3);
    assert_eq!(report.quadrants.dogs.len(), 1);
    assert!(report.quadrants.dropped.is_empty());
}

// ---------------------------------------------------------------------------
// Properties over messy input
// ---------------------------------------------------------------------------

const MESSY_ANALYSIS: &str = r#"{
    "matrixItems": [
        {"name": "Soup", "price": "7.5", "foodCost": null, "salesVolume": 40,
         "category": "PUZZLE", "categoryGroup": "Starters", "marginPercent": "80"},
        {"name": "Steak", "price": 42, "foodCost": 18, "salesVolume": "lots",
         "category": "STAR", "marginPercent": 57},
        {"name": "Special", "price": 20, "foodCost": 25, "salesVolume": 10,
         "category": "UNKNOWN", "categoryGroup": "Starters"},
        {"name": "Soup", "price": 10, "foodCost": 2, "salesVolume": 40,
         "category": "PUZZLE", "categoryGroup": null, "marginPercent": 80},
        {"category": "DOG"},
        {"name": "Tasting Menu", "price": 95, "foodCost": 40, "salesVolume": 3,
         "category": "PLOWHORSE", "categoryGroup": "Chef", "marginPercent": 58}
    ],
    "recommendations": [
        {"itemName": "Special", "financialImpact": {"netBenefitAnnual": -2500}},
        {"financialImpact": {"netBenefitAnnual": "1000"}},
        {"itemName": "Steak"}
    ]
}"#;

#[test]
fn every_profit_is_finite_and_matches_formula() {
    let analysis = parse_analysis(MESSY_ANALYSIS).unwrap();
    let report = MenuReportPipeline::default().execute_analysis(&analysis);

    assert_eq!(report.items.len(), analysis.matrix_items.len());
    for (derived, raw) in report.items.iter().zip(&analysis.matrix_items) {
        let expected = (raw.price - raw.food_cost) * (raw.sales_volume * 10.0);
        assert!(derived.total_profit.is_finite());
        assert!(close(derived.total_profit, expected));
        assert_eq!(&derived.item, raw);
    }
    assert!(close(report.items[0].total_profit, 3000.0));
    assert_eq!(report.items[1].total_profit, 0.0);
    assert!(close(report.items[2].total_profit, -500.0));
}

#[test]
fn ranking_lengths_and_order() {
    let analysis = parse_analysis(MESSY_ANALYSIS).unwrap();
    let report = MenuReportPipeline::default().execute_analysis(&analysis);
    let n = report.items.len();

    assert_eq!(report.best_performers.len(), n.min(4));
    assert_eq!(report.worst_performers.len(), n.min(5));
    assert!(report
        .best_performers
        .windows(2)
        .all(|w| w[0].total_profit >= w[1].total_profit));
    assert!(report
        .worst_performers
        .windows(2)
        .all(|w| w[0].total_profit <= w[1].total_profit));

    // Steak (index 1) and the unnamed dog (index 4) both earn 0; the
    // earlier one must rank first in both directions.
    let zero_names: Vec<&str> = report
        .worst_performers
        .iter()
        .filter(|d| d.total_profit == 0.0)
        .map(|d| d.item.name.as_str())
        .collect();
    assert_eq!(zero_names, vec!["Steak", ""]);
}

#[test]
fn histogram_and_rollup_account_for_every_item() {
    let analysis = parse_analysis(MESSY_ANALYSIS).unwrap();
    let report = MenuReportPipeline::default().execute_analysis(&analysis);

    let binned: usize = report.price_distribution.iter().map(|b| b.count).sum();
    assert_eq!(binned, report.items.len());
    assert_eq!(report.price_distribution.len(), 6);

    let grouped: usize = report.category_performance.iter().map(|c| c.count).sum();
    assert_eq!(grouped, report.items.len());
    let names: Vec<&str> = report
        .category_performance
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Starters", "Other", "Chef"]);
    assert!(report.category_performance.iter().all(|c| c.count > 0));
    // Chef has one member: its average is that item's margin.
    assert!(close(report.category_performance[2].avg_margin, 58.0));
}

#[test]
fn waterfall_over_messy_recommendations() {
    let analysis = parse_analysis(MESSY_ANALYSIS).unwrap();
    let report = MenuReportPipeline::default().execute_analysis(&analysis);
    let steps = &report.waterfall;

    assert_eq!(steps[0].name, "Baseline");
    assert_eq!((steps[0].start, steps[0].end, steps[0].value), (0.0, 500_000.0, 500_000.0));
    assert_eq!(steps[1].name, "Special");
    assert_eq!(steps[1].end, 497_500.0);
    assert_eq!(steps[2].name, "Unnamed Item");
    assert_eq!(steps[2].end, 498_500.0);
    assert_eq!(steps[3].name, "Steak");
    assert_eq!(steps[3].value, 0.0);
    let target = steps.last().unwrap();
    assert_eq!(target.kind, WaterfallKind::Target);
    assert_eq!(target.end, 500_000.0 - 2_500.0 + 1_000.0);
}

#[test]
fn quadrants_partition_known_categories() {
    let analysis = parse_analysis(MESSY_ANALYSIS).unwrap();
    let report = MenuReportPipeline::default().execute_analysis(&analysis);
    let q = &report.quadrants;

    assert_eq!(names(&q.puzzles), vec!["Soup", "Soup"]);
    assert_eq!(names(&q.stars), vec!["Steak"]);
    assert_eq!(names(&q.plowhorses), vec!["Tasting Menu"]);
    assert_eq!(q.dogs.len(), 1);
    assert_eq!(names(&q.dropped), vec!["Special"]);
    assert_eq!(q.grouped_len() + q.dropped.len(), report.items.len());
}

// ---------------------------------------------------------------------------
// Components used standalone
// ---------------------------------------------------------------------------

#[test]
fn components_compose_without_the_pipeline() {
    let csv_data = "\
name,category,category_group,price,food_cost,sales_volume,margin_percent,profit_margin
Knots,STAR,Appetizers,6,0.6,98,90,90
Rings,DOG,Appetizers,9,7,12,22,22
Filet,STAR,Entrees,48,21.6,70,55,55
";
    let items = load_menu_items(csv_data.as_bytes()).unwrap();
    let scored = ProfitScorer::default().score(&items);

    let best = TopKSelector::best_performers().select(&scored);
    assert_eq!(names(&best), vec!["Filet", "Knots", "Rings"]);
    let worst = BottomKSelector::default().select(&scored);
    assert_eq!(names(&worst), vec!["Rings", "Knots", "Filet"]);

    let buckets = PriceHistogram.build(&scored);
    assert_eq!(buckets[0].count, 2);
    assert_eq!(buckets[4].count, 1);
}

#[test]
fn report_serializes_with_camel_case_fields() {
    let analysis = parse_analysis(TWO_ITEM_ANALYSIS).unwrap();
    let report = MenuReportPipeline::default().execute_analysis(&analysis);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["bestPerformers"][0]["name"], "A");
    assert_eq!(json["bestPerformers"][0]["totalProfit"], 300.0);
    assert_eq!(json["categoryPerformance"][0]["avgMargin"], 40.0);
    assert_eq!(json["priceDistribution"][0]["range"], "$0-10");
    assert_eq!(json["waterfall"][0]["kind"], "Baseline");
    assert_eq!(json["quadrants"]["stars"][0]["category"], "STAR");
}
