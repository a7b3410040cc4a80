/// This crate is a movie recommendation engine with two independent pipelines:
/// content-based similarity over term-frequency vectors, and a demographic
/// "best of" ranking by popularity-adjusted rating.
pub mod config;
pub mod dataset;
pub mod error;
pub mod ranking;
pub mod recommend;
pub mod similarity;
pub mod utils;
pub mod vectorizer;

/// Recommender Context
/// The top-level entry point of this crate. It owns the loaded dataset and the
/// content model built from it, and serves both pipelines.
///
/// Internally, it holds:
/// - The unfiltered dataset (for the demographic ranking)
/// - The content model: soup corpus, vocabulary, similarity matrix, title index,
///   or the reason it could not be built (no soups, only stop words)
/// - The query sizes (neighbors per title, ranking length, vote percentile)
///
/// # Thread Safety
/// Queries run on an `Arc` snapshot and never block each other.
/// `rebuild` swaps dataset and model together, atomically. The dataset is
/// swapped even when no model can be built from it.
pub use recommend::context::{ModelUnavailable, RecommenderContext, Snapshot};

/// Content Model
/// Corpus, vocabulary, dense cosine similarity matrix and title index, all in
/// one row space. Answers the neighbor query:
/// the 10 items most similar to a title, the title itself excluded,
/// ties in corpus order.
pub use recommend::ContentModel;

/// Demographic Ranker
/// Ranks items whose vote count reaches the 90th percentile by the weighted
/// rating (v/(v+m))·R + (m/(m+v))·C and returns the top 20.
pub use ranking::{weighted_rating, DemographicRanker, RankingThresholds};

/// Dataset structures
/// - `Dataset`: the ordered, unfiltered item collection, loadable from CSV
/// - `Item`: one row of it
/// - `DisplayRecord`: the output row
///   `(title, poster_link, release_date, runtime, vote_average, overview)`
pub use dataset::{Dataset, DisplayRecord, Item};

/// Count Vectorizer and its parts
/// - `CountVectorizer`: soup texts -> (vocabulary, term-frequency matrix)
/// - `Tokenizer`: the pluggable text -> tokens capability
/// - `EnglishTokenizer`: lowercase word tokens minus English stop words
/// - `TermFrequency`: term counts of one document
/// - `Vocabulary`: term -> column id, lexically ordered
pub use vectorizer::{
    term::TermFrequency,
    token::{EnglishTokenizer, Tokenizer},
    vocab::Vocabulary,
    CountVectorizer, TermFrequencyMatrix,
};

/// Similarity Matrix
/// All-pairs cosine similarity as one contiguous row-major buffer.
pub use similarity::SimilarityMatrix;

/// Search Hits
/// Scored rows sorted by descending score, stable on ties.
pub use recommend::hits::Hits;

pub use config::Config;
pub use error::{RecommendError, Result};
