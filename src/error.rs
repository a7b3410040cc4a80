use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecommendError>;

#[derive(Error, Debug)]
pub enum RecommendError {
    /// no item carried a soup, nothing to vectorize
    #[error("Corpus is empty: no item has a soup")]
    EmptyCorpus,

    /// every token in the corpus was a stop word
    #[error("Corpus produced an empty vocabulary")]
    NoVocabulary,

    #[error("Title not found: {0}")]
    TitleNotFound(String),

    /// mean and percentile are undefined
    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Percentile out of range [0, 1]: {0}")]
    InvalidPercentile(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<::config::ConfigError> for RecommendError {
    fn from(err: ::config::ConfigError) -> Self {
        RecommendError::Config(err.to_string())
    }
}
