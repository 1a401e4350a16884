// maturity-core/src/domain/benchmark/mod.rs
//
// Peer comparison: peer-group selection, percentile ranking, gap analysis
// against best-in-class and improvement prioritisation.

pub mod comparator;
pub mod gap;
pub mod peer_group;
pub mod percentile;
pub mod priority;
pub mod quantiles;

pub use comparator::{ComparatorConfig, PeerComparator};
pub use gap::{BestInClassPercentile, GapEntry, GapSeverity, SeverityThresholds};
pub use peer_group::{MatchQuality, PeerGroupSelection};
pub use percentile::{Classification, DimensionRanking, PercentileRankings, interpolate_percentile};
pub use priority::{DifficultyTable, PriorityEntry};
pub use quantiles::{BenchmarkQuantiles, ConfidenceTier, Quantiles};
