// maturity-core/src/application/assessment.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{info, instrument, warn};

use crate::error::MaturityError;

// Domain
use crate::domain::benchmark::{
    GapEntry, PeerComparator, PeerGroupSelection, PercentileRankings, PriorityEntry,
};
use crate::domain::ports::{ActionLibrarySource, BenchmarkSource, ResponseSource};
use crate::domain::project::ProjectConfig;
use crate::domain::roadmap::{GanttExport, PlannedRoadmap, RoadmapDocument, RoadmapPlanner};
use crate::domain::scoring::{ScoreResult, ScoringEngine};

/// Where an assessment reads its inputs from.
pub struct AssessmentSources<'a> {
    pub responses: &'a dyn ResponseSource,
    pub benchmarks: &'a dyn BenchmarkSource,
    pub library: &'a dyn ActionLibrarySource,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub scores: ScoreResult,
    pub peer_group: PeerGroupSelection,
    pub rankings: PercentileRankings,
    pub gaps: Vec<GapEntry>,
    pub priorities: Vec<PriorityEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    #[serde(flatten)]
    pub comparison: ComparisonReport,
    pub roadmap: PlannedRoadmap,
    pub document: RoadmapDocument,
    pub gantt: GanttExport,
}

/// Scoring only. Fails on an invalid weight set before touching responses.
#[instrument(skip_all, fields(project = %config.name))]
pub fn run_scoring(
    config: &ProjectConfig,
    responses: &dyn ResponseSource,
) -> Result<ScoreResult, MaturityError> {
    let weights = config.weight_set()?;
    let records = responses.load_responses()?;
    if records.is_empty() {
        warn!("No responses recorded, every dimension scores 0");
    }

    let engine = ScoringEngine::new(config.scoring);
    Ok(engine.compute_scores(&records, &weights))
}

/// Scoring followed by the four peer-comparison steps.
#[instrument(skip_all, fields(project = %config.name))]
pub fn run_comparison(
    config: &ProjectConfig,
    responses: &dyn ResponseSource,
    benchmarks: &dyn BenchmarkSource,
) -> Result<ComparisonReport, MaturityError> {
    let scores = run_scoring(config, responses)?;
    let available = benchmarks.load_benchmarks()?;

    let comparator = PeerComparator::new(config.comparator.clone(), config.scoring);
    let org = &config.organization;
    let peer_group = comparator.select_peer_group(&org.industry, &org.size, &available);
    let benchmark = peer_group.benchmark.as_ref();

    let rankings = comparator.compute_percentile_rankings(&scores.dimension_scores, benchmark);
    let gaps = comparator.analyze_gap_vs_best_in_class(&scores.dimension_scores, benchmark);
    let priorities = comparator.score_improvement_priorities(&gaps, &scores.dimension_scores);

    Ok(ComparisonReport {
        scores,
        peer_group,
        rankings,
        gaps,
        priorities,
    })
}

/// Full pipeline: score, compare, plan and export. `today` is the kick-off
/// date unless the planner config pins one.
#[instrument(skip_all, fields(project = %config.name))]
pub fn run_assessment(
    config: &ProjectConfig,
    sources: &AssessmentSources<'_>,
    today: NaiveDate,
    exported_at: DateTime<Utc>,
) -> Result<AssessmentReport, MaturityError> {
    let start_time = Instant::now();

    let comparison = run_comparison(config, sources.responses, sources.benchmarks)?;

    let library = sources.library.load_library()?;
    let planner = RoadmapPlanner::new(config.planner.clone(), library, config.dependency_table())
        .with_palette(config.gantt.clone());
    let start_date = config.planner.start_date.unwrap_or(today);
    let roadmap = planner.plan(&comparison.gaps, start_date)?;

    let document =
        planner.export_roadmap_document(&roadmap, document_metadata(config, &comparison), exported_at);
    let gantt = planner.export_gantt_data(&roadmap);

    info!(
        overall_score = comparison.scores.overall_score,
        match_quality = %comparison.peer_group.match_quality,
        actions = roadmap.actions.len(),
        duration_ms = start_time.elapsed().as_millis() as u64,
        "Assessment complete"
    );

    Ok(AssessmentReport {
        comparison,
        roadmap,
        document,
        gantt,
    })
}

fn document_metadata(
    config: &ProjectConfig,
    comparison: &ComparisonReport,
) -> BTreeMap<String, serde_json::Value> {
    let mut metadata = BTreeMap::new();
    metadata.insert("project".to_string(), config.name.clone().into());
    metadata.insert("project_version".to_string(), config.version.clone().into());
    metadata.insert("industry".to_string(), config.organization.industry.clone().into());
    metadata.insert("organization_size".to_string(), config.organization.size.clone().into());
    metadata.insert(
        "match_quality".to_string(),
        comparison.peer_group.match_quality.as_str().into(),
    );
    metadata.insert("overall_score".to_string(), comparison.scores.overall_score.into());
    metadata.insert(
        "maturity_level".to_string(),
        comparison.scores.maturity_level.as_u8().into(),
    );
    metadata
}
