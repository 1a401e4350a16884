use anyhow::Result;
use chrono::NaiveDate;
use std::collections::BTreeMap;

use maturity_core::domain::benchmark::{BenchmarkQuantiles, PeerComparator, Quantiles};
use maturity_core::domain::roadmap::{
    ActionLibrary, ActionTemplate, DependencyTable, Phase, PlannerConfig, RoadmapPlanner,
};

#[test]
fn test_acme_roadmap_gantt() -> Result<()> {
    let scores: BTreeMap<String, f64> = [("data".to_string(), 50.0), ("process".to_string(), 60.0)]
        .into_iter()
        .collect();
    let benchmark = BenchmarkQuantiles {
        industry: "insurance".into(),
        organization_size: "enterprise".into(),
        benchmark_period: None,
        sample_size: 120,
        overall: Quantiles::new(30.0, 45.0, 60.0, 80.0),
        dimensions: BTreeMap::new(),
        confidence_tier: None,
    };
    let gaps = PeerComparator::default().analyze_gap_vs_best_in_class(&scores, Some(&benchmark));

    let mut templates = BTreeMap::new();
    templates.insert(
        "data".to_string(),
        vec![
            ActionTemplate::new("Data quality baseline", "", 3.0, 7.5, Phase::QuickWins, &[]),
            ActionTemplate::new("Data catalogue", "", 8.0, 8.0, Phase::Foundation, &[]),
        ],
    );
    templates.insert(
        "process".to_string(),
        vec![ActionTemplate::new("Process inventory", "", 4.0, 6.5, Phase::QuickWins, &[])],
    );

    let config = PlannerConfig {
        horizon_months: 6,
        ..PlannerConfig::default()
    };
    let planner = RoadmapPlanner::new(config, ActionLibrary::new(templates)?, DependencyTable::default());
    let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap_or_default();

    let chart = planner.plan(&gaps, start)?.to_mermaid("acme roadmap");

    insta::assert_snapshot!("acme_roadmap_gantt", chart);
    Ok(())
}
