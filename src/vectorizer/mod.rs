pub mod term;
pub mod token;
pub mod vocab;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::dataset::Item;
use crate::error::{RecommendError, Result};
use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::{
    term::TermFrequency,
    token::{EnglishTokenizer, Tokenizer},
    vocab::Vocabulary,
};

/// n x |vocabulary| sparse count matrix.
/// Row i holds the term counts of corpus item i.
#[derive(Debug, Clone, PartialEq)]
pub struct TermFrequencyMatrix {
    rows: Vec<ZeroSpVec<u32>>,
    n_cols: usize,
}

impl TermFrequencyMatrix {
    /// # Panics
    /// if a row's dimension differs from `n_cols`
    pub fn from_rows(rows: Vec<ZeroSpVec<u32>>, n_cols: usize) -> Self {
        assert!(
            rows.iter().all(|r| r.len() == n_cols),
            "every row must have dimension {n_cols}"
        );
        Self { rows, n_cols }
    }

    #[inline]
    pub fn row(&self, i: usize) -> &ZeroSpVec<u32> {
        &self.rows[i]
    }

    #[inline]
    pub fn rows(&self) -> &[ZeroSpVec<u32>] {
        &self.rows
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// stored non-zero entries across all rows
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(|r| r.nnz()).sum()
    }
}

/// Count Vectorizer
/// Tokenizes each item's soup with the injected [`Tokenizer`], builds the
/// corpus vocabulary and the term-frequency matrix in one pass.
///
/// `CountVectorizer<T>` is generic over the tokenizer so other languages or
/// stop-word lists plug in without touching the similarity engine.
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer<T = EnglishTokenizer>
where
    T: Tokenizer,
{
    tokenizer: T,
}

impl<T> CountVectorizer<T>
where
    T: Tokenizer,
{
    pub fn new(tokenizer: T) -> Self {
        Self { tokenizer }
    }

    /// Vectorize the soups of a corpus.
    /// An item without a soup contributes an all-zero row; filter the corpus
    /// first (see [`crate::Dataset::corpus`]) to keep such rows out.
    ///
    /// # Errors
    /// * `EmptyCorpus` - `corpus` is empty
    /// * `NoVocabulary` - every token was discarded
    pub fn build(&self, corpus: &[Item]) -> Result<(Vocabulary, TermFrequencyMatrix)> {
        let texts: Vec<&str> = corpus.iter().map(|i| i.soup.as_deref().unwrap_or("")).collect();
        self.build_from_texts(&texts)
    }

    /// Same as [`build`](Self::build) over raw texts
    pub fn build_from_texts<S>(&self, texts: &[S]) -> Result<(Vocabulary, TermFrequencyMatrix)>
    where
        S: AsRef<str> + Sync,
    {
        if texts.is_empty() {
            return Err(RecommendError::EmptyCorpus);
        }

        let freqs: Vec<TermFrequency> = texts
            .par_iter()
            .map(|text| self.tokenizer.tokenize(text.as_ref()).into_iter().collect())
            .collect();

        let vocab = Vocabulary::from_terms(freqs.iter().flat_map(|f| f.term_set_ref_str()));
        if vocab.is_empty() {
            return Err(RecommendError::NoVocabulary);
        }

        let n_cols = vocab.len();
        let rows: Vec<ZeroSpVec<u32>> = freqs
            .par_iter()
            .map(|freq| {
                ZeroSpVec::from_pairs(
                    n_cols,
                    freq.iter()
                        .filter_map(|(term, count)| vocab.get(term).map(|id| (id as u32, count))),
                )
            })
            .collect();

        let matrix = TermFrequencyMatrix::from_rows(rows, n_cols);
        let empty_rows = matrix.rows().iter().filter(|r| r.is_zero_vector()).count();
        if empty_rows > 0 {
            debug!(empty_rows, "documents without any vocabulary term");
        }
        info!(
            documents = matrix.n_rows(),
            vocabulary = n_cols,
            nnz = matrix.nnz(),
            "term-frequency matrix built"
        );
        Ok((vocab, matrix))
    }
}
