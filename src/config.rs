use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RecommendError, Result};

/// Config files looked up in the working directory, first hit wins
const CONFIG_PATHS: [&str; 2] = ["soup-recommender.toml", ".soup-recommender.toml"];

/// Environment prefix, e.g. `SOUP_REC__RANKING__TOP_N=50`
const ENV_PREFIX: &str = "SOUP_REC";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub recommend: RecommendConfig,
    pub ranking: RankingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// delimited-text file with the merged dataset
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// neighbors returned per title
    pub neighbors: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    pub top_n: usize,
    /// vote-count percentile used as the popularity threshold `m`
    pub percentile: f64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("final.csv") }
    }
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self { neighbors: 10 }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { top_n: 20, percentile: 0.9 }
    }
}

impl Config {
    /// Load configuration.
    /// An explicit path must exist; otherwise the default file names are tried.
    /// Environment variables are layered on top of either.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        match explicit {
            Some(path) => {
                builder = builder.add_source(::config::File::from(path));
            }
            None => {
                if let Some(path) = CONFIG_PATHS.iter().find(|p| Path::new(p).exists()) {
                    builder = builder.add_source(::config::File::with_name(path));
                }
            }
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let parsed: Config = builder.build()?.try_deserialize()?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<()> {
        let q = self.ranking.percentile;
        if !(0.0..=1.0).contains(&q) {
            return Err(RecommendError::InvalidPercentile(q));
        }
        Ok(())
    }
}
