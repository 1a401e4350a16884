// maturity-core/src/domain/roadmap/library.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::error::DomainError;
use crate::domain::roadmap::action::{ActionTemplate, Phase};

/// Candidate initiatives per dimension, in library order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLibrary {
    templates: BTreeMap<String, Vec<ActionTemplate>>,
}

impl Default for ActionLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ActionLibrary {
    pub fn new(templates: BTreeMap<String, Vec<ActionTemplate>>) -> Result<Self, DomainError> {
        let library = Self { templates };
        library.check()?;
        Ok(library)
    }

    /// Templates for `dimension`. A dimension the library does not know is a
    /// configuration mismatch, not sparse data.
    pub fn templates_for(&self, dimension: &str) -> Result<&[ActionTemplate], DomainError> {
        self.templates
            .get(dimension)
            .map(Vec::as_slice)
            .ok_or_else(|| DomainError::UnknownDimension(dimension.to_string()))
    }

    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }

    pub fn template_count(&self) -> usize {
        self.templates.values().map(Vec::len).sum()
    }

    pub fn check(&self) -> Result<(), DomainError> {
        self.templates
            .values()
            .flatten()
            .try_for_each(ActionTemplate::check)
    }

    /// Five templates for each of the five default dimensions.
    pub fn builtin() -> Self {
        use Phase::*;

        let mut templates = BTreeMap::new();
        templates.insert(
            "data".to_string(),
            vec![
                ActionTemplate::new(
                    "Data Quality Baseline Assessment",
                    "Audit the core data assets and record a quality baseline: completeness, \
                     consistency, accuracy and timeliness per data domain.",
                    3.0,
                    7.5,
                    QuickWins,
                    &["data", "quality", "assessment"],
                ),
                ActionTemplate::new(
                    "Enterprise Data Catalogue Deployment",
                    "Roll out a searchable data catalogue with a business glossary, ownership \
                     metadata, lineage and sensitivity classification for AI-relevant assets.",
                    8.0,
                    8.0,
                    Foundation,
                    &["data", "governance", "catalogue"],
                ),
                ActionTemplate::new(
                    "Automated Data Pipeline Validation",
                    "Add automated quality checks to every pipeline feeding models, with \
                     per-pipeline SLAs and alerts on degradation.",
                    10.0,
                    8.5,
                    Foundation,
                    &["data", "quality", "pipelines"],
                ),
                ActionTemplate::new(
                    "Feature Store Implementation",
                    "Stand up a shared feature store so teams reuse and version features \
                     with point-in-time correct lookups.",
                    16.0,
                    9.0,
                    Scale,
                    &["data", "ml", "feature-store"],
                ),
                ActionTemplate::new(
                    "Real-Time Data Streaming Architecture",
                    "Extend the data platform with streaming ingestion to support real-time \
                     inference and live model monitoring.",
                    20.0,
                    8.5,
                    Optimize,
                    &["data", "streaming", "real-time"],
                ),
            ],
        );
        templates.insert(
            "process".to_string(),
            vec![
                ActionTemplate::new(
                    "Model Development Standard Operating Procedures",
                    "Publish procedures for data preparation, experiment design, code review \
                     and hand-off to production.",
                    3.0,
                    7.0,
                    QuickWins,
                    &["process", "standards", "governance"],
                ),
                ActionTemplate::new(
                    "MLOps Pipeline Standardisation",
                    "CI/CD for models: automated tests, deployment gates, canary releases \
                     and one-click rollback.",
                    10.0,
                    9.0,
                    Foundation,
                    &["process", "mlops", "automation"],
                ),
                ActionTemplate::new(
                    "Model Monitoring and Drift Detection",
                    "Monitor production models for data and concept drift and performance \
                     decay, with human-approved retraining triggers.",
                    8.0,
                    8.5,
                    Foundation,
                    &["process", "monitoring", "mlops"],
                ),
                ActionTemplate::new(
                    "AI Experiment Tracking Platform",
                    "Track every training run with logged hyperparameters, comparable \
                     metrics and reproducibility checks.",
                    6.0,
                    8.0,
                    Foundation,
                    &["process", "experiments", "mlops"],
                ),
                ActionTemplate::new(
                    "Continuous Model Improvement Loop",
                    "Collect human feedback, select data through active learning and run \
                     scheduled retraining with measured quality gains.",
                    18.0,
                    9.5,
                    Optimize,
                    &["process", "improvement", "feedback"],
                ),
            ],
        );
        templates.insert(
            "people".to_string(),
            vec![
                ActionTemplate::new(
                    "AI Literacy Workshop Series",
                    "A structured literacy programme for business stakeholders covering \
                     fundamentals, use-case discovery and responsible use.",
                    4.0,
                    7.5,
                    QuickWins,
                    &["people", "training", "literacy"],
                ),
                ActionTemplate::new(
                    "AI Champion Network",
                    "Train one or two champions per business unit to bridge technical and \
                     business teams and measure ROI.",
                    6.0,
                    7.5,
                    QuickWins,
                    &["people", "champions", "culture"],
                ),
                ActionTemplate::new(
                    "Data Science Hiring Plan",
                    "Define the target team structure, competency profiles and a hiring \
                     funnel for ML engineers, data scientists and AI product managers.",
                    8.0,
                    8.5,
                    Foundation,
                    &["people", "hiring", "talent"],
                ),
                ActionTemplate::new(
                    "AI Skills Upskilling Programme",
                    "Learning pathways with internal certification for Python, ML \
                     fundamentals and MLOps.",
                    12.0,
                    8.0,
                    Scale,
                    &["people", "upskilling", "training"],
                ),
                ActionTemplate::new(
                    "AI Centre of Excellence",
                    "A dedicated centre of excellence with its own operating model, funding \
                     and governance for enterprise-wide adoption.",
                    20.0,
                    9.5,
                    Optimize,
                    &["people", "coe", "strategy"],
                ),
            ],
        );
        templates.insert(
            "technology".to_string(),
            vec![
                ActionTemplate::new(
                    "AI Tool Inventory and Consolidation Plan",
                    "Inventory the AI/ML tools in use, find redundancies and integration \
                     gaps and draw the target tool architecture.",
                    3.0,
                    6.5,
                    QuickWins,
                    &["technology", "inventory", "consolidation"],
                ),
                ActionTemplate::new(
                    "Unified ML Platform Deployment",
                    "One ML platform with experiment tracking, a model registry and serving \
                     infrastructure, replacing point solutions.",
                    14.0,
                    9.0,
                    Foundation,
                    &["technology", "platform", "mlops"],
                ),
                ActionTemplate::new(
                    "Vector Database and RAG Infrastructure",
                    "Vector storage and indexing pipelines for retrieval-augmented \
                     generation over enterprise knowledge, with latency SLAs.",
                    10.0,
                    8.5,
                    Foundation,
                    &["technology", "rag", "llm"],
                ),
                ActionTemplate::new(
                    "GPU Infrastructure Optimisation",
                    "Scheduling, quotas and cost allocation tags to raise GPU utilisation \
                     and cut compute spend.",
                    8.0,
                    8.0,
                    Scale,
                    &["technology", "gpu", "cost-optimisation"],
                ),
                ActionTemplate::new(
                    "Edge AI Deployment Capability",
                    "Ship quantised models to edge devices for low-latency inference \
                     without a cloud round trip.",
                    22.0,
                    8.0,
                    Optimize,
                    &["technology", "edge", "inference"],
                ),
            ],
        );
        templates.insert(
            "governance".to_string(),
            vec![
                ActionTemplate::new(
                    "AI Use Case Risk Classification Policy",
                    "Classify every AI use case by data sensitivity, decision impact and \
                     regulatory exposure, then train all teams on the policy.",
                    4.0,
                    8.0,
                    QuickWins,
                    &["governance", "risk", "policy"],
                ),
                ActionTemplate::new(
                    "AI Ethics and Responsible AI Framework",
                    "Publish an ethics policy on fairness, transparency, accountability and \
                     human oversight, mapped to regulatory risk categories.",
                    6.0,
                    8.5,
                    QuickWins,
                    &["governance", "ethics", "responsible-ai"],
                ),
                ActionTemplate::new(
                    "AI Model Risk Register",
                    "A risk register for production models with owners, periodic impact \
                     assessments and mitigation tracking.",
                    8.0,
                    8.5,
                    Foundation,
                    &["governance", "risk", "compliance"],
                ),
                ActionTemplate::new(
                    "AI Audit Trail and Explainability Programme",
                    "Decision audit logging and explainability reports for high-risk \
                     decisions in regulated use cases.",
                    12.0,
                    8.5,
                    Scale,
                    &["governance", "explainability", "audit"],
                ),
                ActionTemplate::new(
                    "Continuous Compliance Monitoring System",
                    "Automated monitoring of regulatory obligations with alerts on policy \
                     drift and remediation triggers.",
                    16.0,
                    9.0,
                    Optimize,
                    &["governance", "compliance", "automation"],
                ),
            ],
        );

        Self { templates }
    }
}
