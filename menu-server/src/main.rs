use std::env;
use std::process;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use menu_pipeline::analysis_loader::load_analysis_file;
use menu_pipeline::config::DerivationConfig;
use menu_pipeline::demo::demo_analysis;
use menu_pipeline::menu_loader::load_menu_items_file;
use menu_pipeline::pipelines::menu_report::{MenuReport, MenuReportPipeline};
use menu_pipeline::types::{
    AnalysisResult, DerivedItem, ExecutiveSummary, FinalImpact, WaterfallKind,
};

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportJson<'a> {
    generated_at: String,
    source: String,
    pipeline_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    executive_summary: Option<&'a ExecutiveSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    final_impact: Option<&'a FinalImpact>,
    report: &'a MenuReport,
    summary: SummaryJson,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryJson {
    items_analyzed: usize,
    total_monthly_profit: f64,
    recommendations: usize,
    net_annual_benefit: f64,
    unclassified_items: usize,
}

fn build_json<'a>(
    report: &'a MenuReport,
    analysis: &'a AnalysisResult,
    source: &str,
    pipeline_ms: u128,
) -> ReportJson<'a> {
    ReportJson {
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        pipeline_ms,
        executive_summary: analysis.executive_summary.as_ref(),
        final_impact: analysis.final_impact.as_ref(),
        report,
        summary: SummaryJson {
            items_analyzed: report.item_count(),
            total_monthly_profit: report.total_monthly_profit(),
            recommendations: report.waterfall.len().saturating_sub(2),
            net_annual_benefit: report.net_annual_benefit(),
            unclassified_items: report.quadrants.dropped.len(),
        },
    }
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

/// Format a number with comma thousands separators.
fn format_dollars(amount: f64) -> String {
    let whole = amount.abs().round() as u64;
    let sign = if amount < 0.0 && whole > 0 { "-" } else { "" };

    if whole < 1_000 {
        return format!("{}{}", sign, whole);
    }

    let s = whole.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    format!("{}{}", sign, result.chars().rev().collect::<String>())
}

fn print_ranked(title: &str, items: &[DerivedItem]) {
    println!("  {}", title);
    if items.is_empty() {
        println!("       (none)");
    }
    for (i, d) in items.iter().enumerate() {
        println!(
            "    {:>2}. {:32} {:12} {:>10}/mo",
            i + 1,
            d.item.name,
            format!("{}", d.item.category),
            format!("${}", format_dollars(d.total_profit)),
        );
    }
    println!();
}

fn print_human(
    report: &MenuReport,
    analysis: &AnalysisResult,
    source: &str,
    load_ms: u128,
    pipeline_ms: u128,
) {
    println!();
    println!("  \u{2554}{}\u{2557}", "\u{2550}".repeat(64));
    println!("  \u{2551}            MENU ENGINEERING REPORT \u{2014} Profit Digest             \u{2551}");
    println!("  \u{255a}{}\u{255d}", "\u{2550}".repeat(64));
    println!();

    println!(
        "  {} items analyzed  \u{00b7}  ${} monthly profit  \u{00b7}  source: {}",
        report.item_count(),
        format_dollars(report.total_monthly_profit()),
        source
    );
    if let Some(summary) = &analysis.executive_summary {
        println!(
            "  Efficiency {:.0}%  \u{00b7}  ${} annual opportunity  \u{00b7}  {} to implement",
            summary.efficiency_score,
            format_dollars(summary.total_opportunity),
            if summary.time_to_implement.is_empty() {
                "unknown time"
            } else {
                summary.time_to_implement.as_str()
            }
        );
    }
    println!();
    println!("  {:\u{2500}<64}", "");

    print_ranked("Best performers", &report.best_performers);
    print_ranked("Worst performers", &report.worst_performers);

    println!("  Price distribution");
    for bucket in &report.price_distribution {
        println!(
            "    {:>7}  {:>3}  {}",
            bucket.range,
            bucket.count,
            "\u{2588}".repeat(bucket.count)
        );
    }
    println!();

    println!("  Category performance");
    println!(
        "    {:20} {:>6} {:>10} {:>8} {:>12}",
        "section", "items", "volume", "margin", "revenue"
    );
    for group in &report.category_performance {
        println!(
            "    {:20} {:>6} {:>10} {:>7.1}% {:>12}",
            group.name,
            group.count,
            format_dollars(group.vol),
            group.avg_margin,
            format!("${}", format_dollars(group.rev)),
        );
    }
    println!();

    println!("  Revenue waterfall");
    for step in &report.waterfall {
        let marker = match step.kind {
            WaterfallKind::Baseline | WaterfallKind::Target => "\u{25a0}",
            WaterfallKind::Step if step.value < 0.0 => "\u{2193}",
            WaterfallKind::Step => "\u{2191}",
        };
        println!(
            "    {} {:32} {:>12} \u{2192} {:>12}",
            marker,
            step.name,
            format!("${}", format_dollars(step.start)),
            format!("${}", format_dollars(step.end)),
        );
    }
    println!(
        "    Net annual benefit: ${}",
        format_dollars(report.net_annual_benefit())
    );
    println!();

    let q = &report.quadrants;
    println!("  Menu engineering matrix");
    println!(
        "    Stars {}  \u{00b7}  Plowhorses {}  \u{00b7}  Puzzles {}  \u{00b7}  Dogs {}",
        q.stars.len(),
        q.plowhorses.len(),
        q.puzzles.len(),
        q.dogs.len()
    );
    if !q.dropped.is_empty() {
        println!(
            "    {} item(s) with unrecognized category left out of the matrix",
            q.dropped.len()
        );
    }
    println!("  {:\u{2500}<64}", "");

    println!();
    println!(
        "  \u{23f1}  Input loaded in {}ms \u{00b7} Pipeline ran in {}ms \u{00b7} Total {}ms",
        load_ms,
        pipeline_ms,
        load_ms + pipeline_ms
    );
    println!();
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn usage() -> ! {
    eprintln!("Usage: menu-report [<analysis.json>] [--demo] [--csv items.csv] [--config menu.toml] [--json]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --demo     Use the built-in demo analysis");
    eprintln!("  --csv      Read menu items from a CSV export (recommendations still come");
    eprintln!("             from <analysis.json> when given)");
    eprintln!("  --config   TOML file overriding volume scale, baseline and list sizes");
    eprintln!("  --json     Output as JSON instead of formatted text");
    eprintln!();
    eprintln!("Example:");
    eprintln!("  menu-report --demo");
    eprintln!("  menu-report analysis.json --json");
    eprintln!("  menu-report --csv menu.csv --config menu.toml");
    process::exit(1);
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage();
    }

    let mut analysis_path: Option<String> = None;
    let mut csv_path: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut use_demo = false;
    let mut json_output = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--csv" | "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: {} requires a file path", args[i]);
                    process::exit(1);
                }
                let value = Some(args[i + 1].clone());
                if args[i] == "--csv" {
                    csv_path = value;
                } else {
                    config_path = value;
                }
                i += 2;
            }
            "--demo" => {
                use_demo = true;
                i += 1;
            }
            "--json" => {
                json_output = true;
                i += 1;
            }
            "-h" | "--help" => usage(),
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
            other => {
                if analysis_path.is_some() {
                    eprintln!("Error: only one analysis file may be given");
                    process::exit(1);
                }
                analysis_path = Some(other.to_string());
                i += 1;
            }
        }
    }

    if use_demo && (analysis_path.is_some() || csv_path.is_some()) {
        eprintln!("Error: --demo cannot be combined with input files");
        process::exit(1);
    }
    if !use_demo && analysis_path.is_none() && csv_path.is_none() {
        usage();
    }

    let config = match &config_path {
        Some(path) => DerivationConfig::load_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }),
        None => DerivationConfig::default(),
    };

    // Load input
    let load_start = Instant::now();
    let mut analysis = if use_demo {
        demo_analysis()
    } else if let Some(path) = &analysis_path {
        load_analysis_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading analysis: {}", e);
            process::exit(1);
        })
    } else {
        AnalysisResult::default()
    };
    if let Some(path) = &csv_path {
        analysis.matrix_items = load_menu_items_file(path).unwrap_or_else(|e| {
            eprintln!("Error loading CSV: {}", e);
            process::exit(1);
        });
    }
    let load_ms = load_start.elapsed().as_millis();

    let source = match (use_demo, &analysis_path, &csv_path) {
        (true, _, _) => "demo".to_string(),
        (_, Some(json), Some(csv)) => format!("{} + {}", csv, json),
        (_, None, Some(csv)) => csv.clone(),
        (_, Some(json), None) => json.clone(),
        (_, None, None) => String::new(),
    };

    if analysis.matrix_items.is_empty() {
        eprintln!("Error: no menu items were identified in {}", source);
        process::exit(1);
    }
    log::info!(
        "analyzing {} items and {} recommendations from {}",
        analysis.matrix_items.len(),
        analysis.recommendations.len(),
        source
    );

    // Build and run pipeline
    let pipeline_start = Instant::now();
    let pipeline = MenuReportPipeline::with_config(&config);
    let report = pipeline.execute_analysis(&analysis);
    let pipeline_ms = pipeline_start.elapsed().as_millis();

    if json_output {
        let json = build_json(&report, &analysis, &source, pipeline_ms);
        match serde_json::to_string_pretty(&json) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                process::exit(1);
            }
        }
    } else {
        print_human(&report, &analysis, &source, load_ms, pipeline_ms);
    }
}
