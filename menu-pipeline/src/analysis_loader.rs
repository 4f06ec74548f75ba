//! JSON analysis document loader.
//!
//! Accepts the document exactly as the analysis model returns it. Missing
//! sections default to empty; only syntactically broken JSON is an error.

use std::io::Read;
use std::path::Path;

use crate::error::{MenuError, MenuResult};
use crate::types::AnalysisResult;

/// Parse an analysis document from a reader.
pub fn load_analysis<R: Read>(reader: R) -> MenuResult<AnalysisResult> {
    let analysis: AnalysisResult = serde_json::from_reader(reader)?;
    log::debug!(
        "loaded analysis: {} items, {} recommendations, {} descriptions, {} pricing ideas",
        analysis.matrix_items.len(),
        analysis.recommendations.len(),
        analysis.descriptions.len(),
        analysis.pricing_strategy.len()
    );
    Ok(analysis)
}

/// Parse an analysis document from a string. Surrounding whitespace is
/// ignored and an empty body reads as an empty analysis.
pub fn parse_analysis(text: &str) -> MenuResult<AnalysisResult> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(AnalysisResult::default());
    }
    load_analysis(trimmed.as_bytes())
}

/// Load an analysis document from a file path.
pub fn load_analysis_file<P: AsRef<Path>>(path: P) -> MenuResult<AnalysisResult> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_analysis(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipelines::menu_report::MenuReportPipeline;
    use crate::types::MenuCategory;
    use std::io::Write;

    #[test]
    fn missing_sections_default_to_empty() {
        let analysis = parse_analysis(r#"{"matrixItems": null}"#).unwrap();
        assert!(analysis.matrix_items.is_empty());
        assert!(analysis.recommendations.is_empty());
        assert!(analysis.descriptions.is_empty());
        assert!(analysis.pricing_strategy.is_empty());
        assert!(analysis.executive_summary.is_none());
        assert!(analysis.final_impact.is_none());
    }

    #[test]
    fn empty_body_is_empty_analysis() {
        assert_eq!(parse_analysis("  \n").unwrap(), AnalysisResult::default());
    }

    #[test]
    fn broken_json_is_an_error() {
        let err = parse_analysis("{\"matrixItems\": [").unwrap_err();
        assert!(matches!(err, MenuError::Json(_)));
    }

    #[test]
    fn full_document_parses() {
        let json = r#"{
            "executiveSummary": {"efficiencyScore": 78, "totalOpportunity": 145000,
                                 "recommendationCount": 1, "timeToImplement": "2-3 Weeks"},
            "matrixItems": [
                {"name": "Garlic Knots", "category": "STAR", "categoryGroup": "Appetizers",
                 "salesVolume": 98, "profitMargin": 90, "price": "6.00", "foodCost": 0.6,
                 "marginPercent": 90, "quickRecommendation": "Default table recommendation."}
            ],
            "recommendations": [
                {"itemName": "Garlic Knots", "financialImpact": {"netBenefitAnnual": 1200}}
            ],
            "finalImpact": {"annualIncrease": 145000, "percentImprovement": 28,
                            "roiTimeline": "30 Days", "difficulty": "Easy"}
        }"#;
        let analysis = parse_analysis(json).unwrap();
        assert_eq!(analysis.matrix_items.len(), 1);
        let item = &analysis.matrix_items[0];
        assert_eq!(item.category, MenuCategory::Star);
        assert!((item.price - 6.0).abs() < 1e-9);
        assert_eq!(analysis.recommendations[0].net_benefit_annual(), 1200.0);
        assert_eq!(analysis.executive_summary.unwrap().efficiency_score, 78.0);
        assert_eq!(analysis.final_impact.unwrap().difficulty, "Easy");
    }

    #[test]
    fn wrong_shaped_sections_coerce_instead_of_failing() {
        let json = r#"{
            "executiveSummary": "none",
            "finalImpact": 12,
            "matrixItems": [{"name": "Soup", "price": 6}, "not an item"],
            "recommendations": [
                {"itemName": "Soup", "financialImpact": "n/a", "actions": "Raise price"},
                {"itemName": "Salad", "financialImpact": {"netBenefitAnnual": "1500"}}
            ],
            "descriptions": {"itemName": "Soup"}
        }"#;
        let analysis = parse_analysis(json).unwrap();
        assert!(analysis.executive_summary.is_none());
        assert!(analysis.final_impact.is_none());
        assert_eq!(analysis.matrix_items.len(), 1);
        assert!(analysis.descriptions.is_empty());

        let soup = &analysis.recommendations[0];
        assert!(soup.financial_impact.is_none());
        assert!(soup.actions.is_empty());
        assert_eq!(soup.net_benefit_annual(), 0.0);

        let report = MenuReportPipeline::default().execute_analysis(&analysis);
        assert_eq!(report.waterfall.len(), 4);
        assert_eq!(report.waterfall[1].name, "Soup");
        assert_eq!(report.waterfall[1].value, 0.0);
        assert_eq!(report.waterfall[2].value, 1500.0);
        assert_eq!(report.net_annual_benefit(), 1500.0);
    }

    #[test]
    fn falsy_category_group_rolls_up_as_other() {
        let json = r#"{"matrixItems": [
            {"name": "Soup", "categoryGroup": 0},
            {"name": "Bread", "categoryGroup": false}
        ]}"#;
        let analysis = parse_analysis(json).unwrap();
        let report = MenuReportPipeline::default().execute_analysis(&analysis);
        assert_eq!(report.category_performance.len(), 1);
        assert_eq!(report.category_performance[0].name, "Other");
        assert_eq!(report.category_performance[0].count, 2);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"matrixItems": [{{"name": "Soup"}}]}}"#).unwrap();
        let analysis = load_analysis_file(file.path()).unwrap();
        assert_eq!(analysis.matrix_items[0].name, "Soup");
    }
}
