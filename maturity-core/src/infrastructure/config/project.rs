// maturity-core/src/infrastructure/config/project.rs

use serde::{Deserialize, de::DeserializeOwned};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::benchmark::BenchmarkQuantiles;
use crate::domain::project::ProjectConfig;
use crate::domain::roadmap::{ActionLibrary, ActionTemplate, DependencyTable};
use crate::infrastructure::error::InfrastructureError;

const MAIN_CONFIG_CANDIDATES: [&str; 2] = ["maturity_project.yaml", "maturity.yaml"];

const ENV_TARGET_PATH: &str = "MATURITY_TARGET_PATH";
const ENV_HORIZON_MONTHS: &str = "MATURITY_HORIZON_MONTHS";
const ENV_PARALLEL_STREAMS: &str = "MATURITY_PARALLEL_STREAMS";

// --- LOADER ---

/// Loads the project manifest, hydrates satellite files, applies `MATURITY_*`
/// environment overrides and validates the result.
#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, InfrastructureError> {
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project manifest");

    let mut config: ProjectConfig = load_fragment(&config_path)?;

    // Satellites are fail-secure: a corrupt file stops the load.
    if let Some(config_folder) = config.config_paths.first() {
        let config_dir = project_dir.join(config_folder);
        if config_dir.exists() {
            load_satellite_configs(&mut config, &config_dir)?;
        }
    }

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    check_project_config(&config)?;

    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    for filename in MAIN_CONFIG_CANDIDATES {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, MAIN_CONFIG_CANDIDATES
    )))
}

/// Reads one YAML file into `T`, keeping the path in the error.
pub fn load_fragment<T: DeserializeOwned>(path: &Path) -> Result<T, InfrastructureError> {
    let content = fs::read_to_string(path).map_err(|source| InfrastructureError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| InfrastructureError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

fn load_satellite_configs(
    config: &mut ProjectConfig,
    config_dir: &Path,
) -> Result<(), InfrastructureError> {
    // A. Benchmark segments
    let bench_path = config_dir.join("benchmarks.yml");
    if bench_path.exists() {
        #[derive(Deserialize)]
        struct BenchmarksWrapper {
            benchmarks: Vec<BenchmarkQuantiles>,
        }

        let wrapper: BenchmarksWrapper = load_fragment(&bench_path)?;
        info!(segments = wrapper.benchmarks.len(), "  📊 Benchmark segments loaded");
        config.benchmarks.extend(wrapper.benchmarks);
    }

    // B. Action library (replaces the built-in catalogue)
    let library_path = config_dir.join("action_library.yml");
    if library_path.exists() {
        #[derive(Deserialize)]
        struct LibraryWrapper {
            actions: BTreeMap<String, Vec<ActionTemplate>>,
        }

        let wrapper: LibraryWrapper = load_fragment(&library_path)?;
        let library = ActionLibrary::new(wrapper.actions)?;
        info!(templates = library.template_count(), "  🧰 Action library loaded");
        config.action_library = Some(library);
    }

    // C. Cross-dimension prerequisites
    let deps_path = config_dir.join("dependencies.yml");
    if deps_path.exists() {
        #[derive(Deserialize)]
        struct DependenciesWrapper {
            prerequisites: BTreeMap<String, Vec<String>>,
        }

        let wrapper: DependenciesWrapper = load_fragment(&deps_path)?;
        config.dependencies = Some(DependencyTable::new(wrapper.prerequisites)?);
        info!("  🔗 Dimension prerequisites loaded");
    }

    Ok(())
}

/// Environment layering, e.g. `MATURITY_HORIZON_MONTHS=6 maturity plan`.
/// `lookup` abstracts `std::env::var` so the rules stay testable.
pub fn apply_env_overrides<F>(config: &mut ProjectConfig, lookup: F) -> Result<(), InfrastructureError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_TARGET_PATH) {
        info!(old = ?config.target_path, new = ?val, "Overriding target path via ENV");
        config.target_path = val;
    }
    if let Some(val) = lookup(ENV_HORIZON_MONTHS) {
        let months = parse_env::<u32>(ENV_HORIZON_MONTHS, &val)?;
        info!(old = config.planner.horizon_months, new = months, "Overriding horizon via ENV");
        config.planner.horizon_months = months;
    }
    if let Some(val) = lookup(ENV_PARALLEL_STREAMS) {
        let streams = parse_env::<usize>(ENV_PARALLEL_STREAMS, &val)?;
        info!(old = config.planner.parallel_streams, new = streams, "Overriding parallel streams via ENV");
        config.planner.parallel_streams = streams;
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, InfrastructureError> {
    value.trim().parse().map_err(|_| {
        InfrastructureError::ConfigError(format!("{} has an invalid value '{}'", key, value))
    })
}

/// Range validation plus the cross-field rules serde cannot express.
fn check_project_config(config: &ProjectConfig) -> Result<(), InfrastructureError> {
    config.validate()?;
    config.weight_set()?;
    for benchmark in &config.benchmarks {
        benchmark.check()?;
    }
    if let Some(library) = &config.action_library {
        library.check()?;
    }
    if let Some(table) = &config.dependencies {
        table.check()?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use anyhow::Result;
    use tempfile::tempdir;

    const MANIFEST: &str = r#"
name: acme
version: "1.0"
organization:
  industry: financial_services
  size: enterprise
config-paths: ["config"]
"#;

    #[test]
    fn test_missing_manifest() -> Result<()> {
        let dir = tempdir()?;
        let err = load_project_config(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::ConfigNotFound(_)));
        Ok(())
    }

    #[test]
    fn test_loads_manifest_and_satellites() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("maturity.yaml"), MANIFEST)?;
        fs::create_dir(dir.path().join("config"))?;
        fs::write(
            dir.path().join("config/benchmarks.yml"),
            r#"
benchmarks:
  - industry: financial_services
    organization_size: enterprise
    sample_size: 42
    overall: { p25: 35, p50: 50, p75: 65, p90: 78 }
    dimensions:
      data: { p25: 30, p50: 45, p75: 60, p90: 80 }
"#,
        )?;
        fs::write(
            dir.path().join("config/dependencies.yml"),
            "prerequisites:\n  process: [data]\n",
        )?;

        let config = load_project_config(dir.path())?;

        assert_eq!(config.name, "acme");
        assert_eq!(config.organization.industry, "financial_services");
        assert_eq!(config.benchmarks.len(), 1);
        assert_eq!(config.benchmarks[0].quantiles_for("data").p90, 80.0);
        assert_eq!(config.dependency_table().prerequisites_of("process"), ["data".to_string()]);
        assert!(config.dependency_table().prerequisites_of("governance").is_empty());
        Ok(())
    }

    #[test]
    fn test_corrupt_satellite_fails_the_load() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("maturity.yaml"), MANIFEST)?;
        fs::create_dir(dir.path().join("config"))?;
        fs::write(dir.path().join("config/benchmarks.yml"), "benchmarks: [ {")?;

        let err = load_project_config(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::ParseError { .. }));
        Ok(())
    }

    #[test]
    fn test_unordered_benchmark_quantiles_are_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("maturity.yaml"), MANIFEST)?;
        fs::create_dir(dir.path().join("config"))?;
        fs::write(
            dir.path().join("config/benchmarks.yml"),
            r#"
benchmarks:
  - industry: retail
    organization_size: smb
    sample_size: 12
    overall: { p25: 60, p50: 50, p75: 70, p90: 80 }
"#,
        )?;

        let err = load_project_config(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            InfrastructureError::Validation(_)
                | InfrastructureError::InvalidConfig(DomainError::InvalidBenchmark(_))
        ));
        Ok(())
    }

    #[test]
    fn test_library_satellite_replaces_builtin() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("maturity.yaml"), MANIFEST)?;
        fs::create_dir(dir.path().join("config"))?;
        fs::write(
            dir.path().join("config/action_library.yml"),
            r#"
actions:
  data:
    - title: Build a data catalogue
      description: Inventory critical datasets.
      effort_weeks: 4
      impact_score: 7
      phase: quick_wins
"#,
        )?;

        let library = load_project_config(dir.path())?.library();
        assert_eq!(library.template_count(), 1);
        assert!(library.templates_for("process").is_err());
        Ok(())
    }

    #[test]
    fn test_cyclic_prerequisites_are_rejected() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("maturity.yaml"), MANIFEST)?;
        fs::create_dir(dir.path().join("config"))?;
        fs::write(
            dir.path().join("config/dependencies.yml"),
            "prerequisites:\n  data: [process]\n  process: [data]\n",
        )?;

        let err = load_project_config(dir.path()).unwrap_err();
        assert!(matches!(
            err,
            InfrastructureError::InvalidConfig(DomainError::CircularDependency(_))
        ));
        Ok(())
    }

    #[test]
    fn test_out_of_range_planner_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let manifest = format!("{}planner:\n  horizon-months: 0\n", MANIFEST);
        fs::write(dir.path().join("maturity.yaml"), manifest)?;

        let err = load_project_config(dir.path()).unwrap_err();
        assert!(matches!(err, InfrastructureError::Validation(_)));
        Ok(())
    }

    #[test]
    fn test_env_overrides() -> Result<()> {
        let mut config: ProjectConfig = serde_yaml::from_str(MANIFEST)?;
        apply_env_overrides(&mut config, |key| match key {
            "MATURITY_TARGET_PATH" => Some("/tmp/out".to_string()),
            "MATURITY_HORIZON_MONTHS" => Some("6".to_string()),
            _ => None,
        })?;

        assert_eq!(config.target_path, "/tmp/out");
        assert_eq!(config.planner.horizon_months, 6);
        assert_eq!(config.planner.parallel_streams, 2);
        Ok(())
    }

    #[test]
    fn test_env_override_rejects_garbage() -> Result<()> {
        let mut config: ProjectConfig = serde_yaml::from_str(MANIFEST)?;
        let res = apply_env_overrides(&mut config, |key| {
            (key == "MATURITY_PARALLEL_STREAMS").then(|| "two".to_string())
        });
        assert!(matches!(res, Err(InfrastructureError::ConfigError(_))));
        Ok(())
    }
}
