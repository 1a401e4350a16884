use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use std::collections::BTreeMap;

use maturity_core::domain::benchmark::{
    BenchmarkQuantiles, GapSeverity, PeerComparator, Quantiles, interpolate_percentile,
};
use maturity_core::domain::roadmap::{DependencyKind, RoadmapPlanner, WEEKS_PER_MONTH};
use maturity_core::domain::scoring::{
    DimensionWeightSet, MaturityLevel, ResponseRecord, ScoringEngine,
};

const DIMENSIONS: [&str; 5] = ["data", "process", "people", "technology", "governance"];

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
}

fn segment(overall: Quantiles, dimensions: &[(&str, Quantiles)]) -> BenchmarkQuantiles {
    BenchmarkQuantiles {
        industry: "financial_services".into(),
        organization_size: "enterprise".into(),
        benchmark_period: Some("2026-H1".into()),
        sample_size: 150,
        overall,
        dimensions: dimensions
            .iter()
            .map(|(d, q)| (d.to_string(), *q))
            .collect(),
        confidence_tier: None,
    }
}

fn likert_responses(answers: &[(&str, u8)]) -> Vec<ResponseRecord> {
    answers
        .iter()
        .map(|(d, a)| ResponseRecord::from_likert(*d, *a, 1.0).unwrap())
        .collect()
}

// ── Scenario ─────────────────────────────────────────────────────────

#[test]
fn test_scenario_midpoint_organisation() -> Result<()> {
    // Two Likert-3 answers per dimension, all at the midpoint.
    let answers: Vec<(&str, u8)> = DIMENSIONS.iter().flat_map(|d| [(*d, 3), (*d, 3)]).collect();
    let responses = likert_responses(&answers);

    let weights = DimensionWeightSet::default();
    let scores = ScoringEngine::default().compute_scores(&responses, &weights);

    assert_eq!(scores.overall_score, 50.0);
    assert_eq!(scores.maturity_level, MaturityLevel::Defined);
    assert_eq!(scores.maturity_level.as_u8(), 3);

    // Only data trails its best-in-class peers.
    let benchmark = segment(
        Quantiles::new(20.0, 30.0, 40.0, 45.0),
        &[("data", Quantiles::new(30.0, 45.0, 60.0, 80.0))],
    );
    let comparator = PeerComparator::default();
    let peer_group = comparator.select_peer_group("financial_services", "enterprise", &[benchmark]);
    let gaps = comparator
        .analyze_gap_vs_best_in_class(&scores.dimension_scores, peer_group.benchmark.as_ref());

    let data_gap = gaps.iter().find(|g| g.dimension == "data").unwrap();
    assert_eq!(data_gap.gap_size, 30.0);
    assert!(data_gap.severity >= GapSeverity::High);
    assert_eq!(gaps[0].dimension, "data");

    let planner = RoadmapPlanner::default();
    assert_eq!(planner.config().horizon_months, 12);
    assert_eq!(planner.config().parallel_streams, 2);

    let planned = planner.plan(&gaps, start_date())?;
    let exported_at = Utc.with_ymd_and_hms(2026, 1, 5, 8, 0, 0).unwrap();
    let document = planner.export_roadmap_document(&planned, BTreeMap::new(), exported_at);

    assert!(document.summary.total_actions > 0);
    assert!(document.summary.dimension_summary["data"].action_count >= 1);
    let last = document.milestones.last().unwrap();
    assert!(f64::from(last.week) <= 12.0 * WEEKS_PER_MONTH + 8.0);
    Ok(())
}

#[test]
fn test_scenario_grid_extremes() {
    let weights = DimensionWeightSet::default();
    let engine = ScoringEngine::default();

    let lows: Vec<(&str, u8)> = DIMENSIONS.iter().map(|d| (*d, 1)).collect();
    let low = engine.compute_scores(&likert_responses(&lows), &weights);
    assert_eq!(low.overall_score, 0.0);
    assert_eq!(low.maturity_level, MaturityLevel::Initial);

    let highs: Vec<(&str, u8)> = DIMENSIONS.iter().map(|d| (*d, 5)).collect();
    let high = engine.compute_scores(&likert_responses(&highs), &weights);
    assert_eq!(high.overall_score, 100.0);
    assert_eq!(high.maturity_level, MaturityLevel::Optimizing);
}

#[test]
fn test_scenario_no_benchmark_is_neutral() -> Result<()> {
    let answers: Vec<(&str, u8)> = DIMENSIONS.iter().map(|d| (*d, 4)).collect();
    let scores = ScoringEngine::default()
        .compute_scores(&likert_responses(&answers), &DimensionWeightSet::default());

    let comparator = PeerComparator::default();
    let peer_group = comparator.select_peer_group("retail", "smb", &[]);
    let rankings =
        comparator.compute_percentile_rankings(&scores.dimension_scores, peer_group.benchmark.as_ref());
    let gaps = comparator
        .analyze_gap_vs_best_in_class(&scores.dimension_scores, peer_group.benchmark.as_ref());

    assert!(rankings.dimensions.values().all(|r| r.percentile == 50.0));
    assert_eq!(rankings.overall_percentile, 50.0);
    assert!(gaps.is_empty());

    let planned = RoadmapPlanner::default().plan(&gaps, start_date())?;
    assert!(planned.is_empty());
    assert!(planned.timeline.entries.is_empty());
    Ok(())
}

// ── Properties ───────────────────────────────────────────────────────

fn quantiles_strategy() -> impl Strategy<Value = Quantiles> {
    prop::collection::vec(0.0f64..=100.0, 4).prop_map(|mut v| {
        v.sort_by(f64::total_cmp);
        Quantiles::new(v[0], v[1], v[2], v[3])
    })
}

proptest! {
    #[test]
    fn prop_raising_an_answer_raises_the_dimension(
        answers in prop::collection::vec(1u8..=5, 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let i = pick.index(answers.len());
        prop_assume!(answers[i] < 5);

        let weights = DimensionWeightSet::default();
        let engine = ScoringEngine::default();
        let before: Vec<(&str, u8)> = answers.iter().map(|a| ("data", *a)).collect();
        let mut after = before.clone();
        after[i].1 += 1;

        let s0 = engine.compute_scores(&likert_responses(&before), &weights).dimension_score("data");
        let s1 = engine.compute_scores(&likert_responses(&after), &weights).dimension_score("data");
        prop_assert!(s1 > s0);
    }

    #[test]
    fn prop_scores_are_bounded(
        raw in prop::collection::vec((0usize..5, 0.0f64..=100.0, 0.0f64..=10.0), 0..40),
    ) {
        let responses: Vec<ResponseRecord> = raw
            .iter()
            .map(|(d, score, weight)| ResponseRecord::new(DIMENSIONS[*d], *score, *weight).unwrap())
            .collect();
        let result = ScoringEngine::default().compute_scores(&responses, &DimensionWeightSet::default());

        prop_assert!((0.0..=100.0).contains(&result.overall_score));
        for score in result.dimension_scores.values() {
            prop_assert!((0.0..=100.0).contains(score));
        }
    }

    #[test]
    fn prop_percentile_is_bounded_and_monotone(
        q in quantiles_strategy(),
        a in 0.0f64..=100.0,
        b in 0.0f64..=100.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let p_lo = interpolate_percentile(lo, &q);
        let p_hi = interpolate_percentile(hi, &q);
        prop_assert!((0.0..=100.0).contains(&p_lo));
        prop_assert!((0.0..=100.0).contains(&p_hi));
        prop_assert!(p_lo <= p_hi + 1e-9);
    }

    #[test]
    fn prop_gaps_are_non_negative_and_sorted(
        scores in prop::collection::vec(0.0f64..=100.0, 5),
        q in quantiles_strategy(),
    ) {
        let scores: BTreeMap<String, f64> = DIMENSIONS
            .iter()
            .zip(scores)
            .map(|(d, s)| (d.to_string(), s))
            .collect();
        let gaps = PeerComparator::default()
            .analyze_gap_vs_best_in_class(&scores, Some(&segment(q, &[])));

        prop_assert_eq!(gaps.len(), 5);
        prop_assert!(gaps.iter().all(|g| g.gap_size >= 0.0));
        prop_assert!(gaps.windows(2).all(|w| w[0].gap_size >= w[1].gap_size));
    }

    #[test]
    fn prop_cross_dimension_edges_hold_or_warn(
        scores in prop::collection::vec(0.0f64..=100.0, 5),
        streams in 1usize..4,
    ) {
        let scores: BTreeMap<String, f64> = DIMENSIONS
            .iter()
            .zip(scores)
            .map(|(d, s)| (d.to_string(), s))
            .collect();
        let benchmark = segment(Quantiles::new(40.0, 55.0, 70.0, 85.0), &[]);
        let gaps = PeerComparator::default().analyze_gap_vs_best_in_class(&scores, Some(&benchmark));

        let mut planner = RoadmapPlanner::default();
        let mut config = planner.config().clone();
        config.parallel_streams = streams;
        planner = RoadmapPlanner::new(config, planner.library().clone(), planner.dependency_table().clone());

        let planned = planner.plan(&gaps, start_date()).unwrap();
        let warnings = planned.dependency_warnings();

        for edge in planned.dependencies.edges_of_kind(DependencyKind::CrossDimension) {
            let from = planned.timeline.entry(&edge.from_action_id).unwrap();
            let to = planned.timeline.entry(&edge.to_action_id).unwrap();
            let warned = warnings.iter().any(|w| {
                w.from_action_id.as_deref() == Some(edge.from_action_id.as_str())
                    && w.to_action_id.as_deref() == Some(edge.to_action_id.as_str())
            });
            prop_assert!(from.end_week <= to.start_week + 1e-9 || warned);
        }
    }
}
