//! Runner configuration read from the environment.

use crate::errors::ConfigError;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "algotrace=info";

/// Algorithm selected for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dfs,
    Bfs,
    Prim,
    Kruskal,
    CriticalPath,
    Bst,
    Hash,
    Search,
    All,
}

impl Algorithm {
    /// Every concrete algorithm, in run order.
    pub const EACH: [Algorithm; 8] = [
        Algorithm::Dfs,
        Algorithm::Bfs,
        Algorithm::Prim,
        Algorithm::Kruskal,
        Algorithm::CriticalPath,
        Algorithm::Bst,
        Algorithm::Hash,
        Algorithm::Search,
    ];

    /// Algorithms this selection expands to.
    pub fn expand(self) -> Vec<Algorithm> {
        match self {
            Algorithm::All => Self::EACH.to_vec(),
            single => vec![single],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
            Algorithm::Prim => "prim",
            Algorithm::Kruskal => "kruskal",
            Algorithm::CriticalPath => "critical-path",
            Algorithm::Bst => "bst",
            Algorithm::Hash => "hash",
            Algorithm::Search => "search",
            Algorithm::All => "all",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dfs" => Ok(Algorithm::Dfs),
            "bfs" => Ok(Algorithm::Bfs),
            "prim" => Ok(Algorithm::Prim),
            "kruskal" => Ok(Algorithm::Kruskal),
            "critical-path" | "critical_path" | "criticalpath" => Ok(Algorithm::CriticalPath),
            "bst" => Ok(Algorithm::Bst),
            "hash" => Ok(Algorithm::Hash),
            "search" | "static-search" => Ok(Algorithm::Search),
            "all" => Ok(Algorithm::All),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// How the runner prints traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON document per trace
    Json,
    /// Human-readable summary
    Pretty,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            _ => Err(ConfigError::invalid("ALGOTRACE_FORMAT", s)),
        }
    }
}

/// Runner settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub algorithm: Algorithm,
    pub format: OutputFormat,
    /// Awaited once per node visited by the observed tree search
    pub step_delay: Duration,
    /// Key for the tree, hash and table lookups; each demo has its own default
    pub search_key: Option<i64>,
    pub log_json: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::All,
            format: OutputFormat::Pretty,
            step_delay: Duration::ZERO,
            search_key: None,
            log_json: false,
        }
    }
}

impl RunnerConfig {
    /// Read configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ALGOTRACE_ALGORITHM`: algorithm to run (default: all)
    /// - `ALGOTRACE_FORMAT`: "json" or "pretty" (default: pretty)
    /// - `ALGOTRACE_STEP_DELAY_MS`: delay per visited tree node (default: 0)
    /// - `ALGOTRACE_SEARCH_KEY`: key to look up (default: per demo)
    /// - `ALGOTRACE_LOG_JSON`: structured JSON logs (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("ALGOTRACE_ALGORITHM") {
            config.algorithm = value.parse()?;
        }
        if let Some(value) = lookup("ALGOTRACE_FORMAT") {
            config.format = value.parse()?;
        }
        if let Some(value) = lookup("ALGOTRACE_STEP_DELAY_MS") {
            let millis = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::invalid("ALGOTRACE_STEP_DELAY_MS", &value))?;
            config.step_delay = Duration::from_millis(millis);
        }
        if let Some(value) = lookup("ALGOTRACE_SEARCH_KEY") {
            let key = value
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::invalid("ALGOTRACE_SEARCH_KEY", &value))?;
            config.search_key = Some(key);
        }
        if let Some(value) = lookup("ALGOTRACE_LOG_JSON") {
            config.log_json = parse_flag("ALGOTRACE_LOG_JSON", &value)?;
        }

        Ok(config)
    }
}

fn parse_flag(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::invalid(var, value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<RunnerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunnerConfig::from_lookup(|var| vars.get(var).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]).unwrap(), RunnerConfig::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let config = config_from(&[
            ("ALGOTRACE_ALGORITHM", "Critical-Path"),
            ("ALGOTRACE_FORMAT", "json"),
            ("ALGOTRACE_STEP_DELAY_MS", "250"),
            ("ALGOTRACE_SEARCH_KEY", "-4"),
            ("ALGOTRACE_LOG_JSON", "true"),
        ])
        .unwrap();

        assert_eq!(config.algorithm, Algorithm::CriticalPath);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.step_delay, Duration::from_millis(250));
        assert_eq!(config.search_key, Some(-4));
        assert!(config.log_json);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("ALGOTRACE_ALGORITHM", "dijkstra")]),
            Err(ConfigError::UnknownAlgorithm("dijkstra".to_string()))
        );
        assert_eq!(
            config_from(&[("ALGOTRACE_STEP_DELAY_MS", "soon")]),
            Err(ConfigError::invalid("ALGOTRACE_STEP_DELAY_MS", "soon"))
        );
        assert!(config_from(&[("ALGOTRACE_FORMAT", "xml")]).is_err());
        assert!(config_from(&[("ALGOTRACE_LOG_JSON", "maybe")]).is_err());
    }

    #[test]
    fn test_all_expands_in_run_order() {
        assert_eq!(Algorithm::All.expand().len(), 8);
        assert_eq!(Algorithm::All.expand().last(), Some(&Algorithm::Search));
        assert_eq!(Algorithm::Prim.expand(), vec![Algorithm::Prim]);
        for algorithm in Algorithm::EACH {
            assert_eq!(algorithm.as_str().parse::<Algorithm>().unwrap(), algorithm);
        }
    }
}
