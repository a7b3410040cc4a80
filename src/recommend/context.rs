use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::config::Config;
use crate::dataset::{Dataset, DisplayRecord};
use crate::error::{RecommendError, Result};
use crate::ranking::DemographicRanker;
use crate::recommend::{ContentModel, DEFAULT_NEIGHBORS};
use crate::vectorizer::{token::EnglishTokenizer, CountVectorizer};

/// Why a generation carries no content model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelUnavailable {
    /// no item has a soup
    EmptyCorpus,
    /// every soup tokenized to nothing
    NoVocabulary,
}

impl From<ModelUnavailable> for RecommendError {
    fn from(reason: ModelUnavailable) -> Self {
        match reason {
            ModelUnavailable::EmptyCorpus => RecommendError::EmptyCorpus,
            ModelUnavailable::NoVocabulary => RecommendError::NoVocabulary,
        }
    }
}

/// One consistent generation of loaded data.
/// The dataset is always present. The model is the one built from it, or the
/// reason none could be built; the ranking only needs the dataset.
#[derive(Debug)]
pub struct Snapshot {
    pub dataset: Dataset,
    model: std::result::Result<ContentModel, ModelUnavailable>,
}

impl Snapshot {
    /// Content model of this generation
    ///
    /// # Errors
    /// * `EmptyCorpus` / `NoVocabulary` - the model could not be built from `dataset`
    #[inline]
    pub fn model(&self) -> Result<&ContentModel> {
        self.model.as_ref().map_err(|&reason| reason.into())
    }
}

/// Recommender Context
/// Owns the loaded dataset and its content model, and answers both the
/// neighbor query and the demographic ranking from them.
///
/// Readers take a cheap `Arc` clone of the current [`Snapshot`] and run
/// without holding any lock. [`rebuild`](Self::rebuild) builds the next
/// snapshot completely before swapping it in, so in-flight queries finish on
/// the old generation and never observe a half-built one.
///
/// A dataset the content model cannot be built from (no soups, or only stop
/// words) is still loaded: `popular` ranks it and `recommend` reports the
/// build error.
pub struct RecommenderContext {
    current: RwLock<Arc<Snapshot>>,
    vectorizer: CountVectorizer<EnglishTokenizer>,
    ranker: DemographicRanker,
    neighbors: usize,
}

impl RecommenderContext {
    /// Build with default query sizes (10 neighbors, top 20)
    pub fn new(dataset: Dataset) -> Result<Self> {
        Self::with_settings(dataset, DEFAULT_NEIGHBORS, DemographicRanker::default())
    }

    pub fn from_config(dataset: Dataset, config: &Config) -> Result<Self> {
        let ranker = DemographicRanker::new(config.ranking.top_n, config.ranking.percentile)?;
        Self::with_settings(dataset, config.recommend.neighbors, ranker)
    }

    pub fn with_settings(dataset: Dataset, neighbors: usize, ranker: DemographicRanker) -> Result<Self> {
        let vectorizer = CountVectorizer::<EnglishTokenizer>::default();
        let snapshot = Self::build_snapshot(dataset, &vectorizer)?;
        Ok(Self {
            current: RwLock::new(Arc::new(snapshot)),
            vectorizer,
            ranker,
            neighbors,
        })
    }

    fn build_snapshot(dataset: Dataset, vectorizer: &CountVectorizer<EnglishTokenizer>) -> Result<Snapshot> {
        let model = match ContentModel::build_with(&dataset, vectorizer) {
            Ok(model) => {
                info!(
                    items = dataset.len(),
                    corpus = model.corpus().len(),
                    vocabulary = model.vocabulary().len(),
                    "snapshot built"
                );
                Ok(model)
            }
            Err(RecommendError::EmptyCorpus) => Err(ModelUnavailable::EmptyCorpus),
            Err(RecommendError::NoVocabulary) => Err(ModelUnavailable::NoVocabulary),
            Err(e) => return Err(e),
        };
        if let Err(reason) = &model {
            warn!(items = dataset.len(), ?reason, "snapshot built without content model");
        }
        Ok(Snapshot { dataset, model })
    }

    /// The current generation
    #[inline]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// Neighbor query against the current generation
    pub fn recommend(&self, title: &str) -> Result<Vec<DisplayRecord>> {
        self.snapshot().model()?.recommend_n(title, self.neighbors)
    }

    /// Demographic ranking of the current dataset
    pub fn popular(&self) -> Result<Vec<DisplayRecord>> {
        self.ranker.rank(self.snapshot().dataset.items())
    }

    /// Replace the current generation with one built from `dataset`.
    /// The dataset is always swapped in; when no content model can be built
    /// from it, `recommend` returns that error until the next rebuild.
    pub fn rebuild(&self, dataset: Dataset) -> Result<()> {
        let next = Arc::new(Self::build_snapshot(dataset, &self.vectorizer)?);
        *self.current.write() = next;
        info!("snapshot swapped");
        Ok(())
    }
}
