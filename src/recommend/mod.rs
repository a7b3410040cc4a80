pub mod context;
pub mod hits;
pub mod index;

use tracing::debug;

use crate::dataset::{Dataset, DisplayRecord, Item};
use crate::error::{RecommendError, Result};
use crate::recommend::{hits::Hits, index::TitleIndex};
use crate::similarity::SimilarityMatrix;
use crate::vectorizer::{
    token::{EnglishTokenizer, Tokenizer},
    vocab::Vocabulary,
    CountVectorizer,
};

/// Neighbors returned by [`ContentModel::recommend`]
pub const DEFAULT_NEIGHBORS: usize = 10;

/// Content Model
/// Everything the neighbor query reads: the soup-bearing corpus, its
/// vocabulary, the all-pairs similarity matrix and the title index, all in
/// the same row space.
///
/// Built once per dataset and immutable afterwards. Share it behind an `Arc`
/// and query from any number of threads.
#[derive(Debug, Clone)]
pub struct ContentModel {
    corpus: Vec<Item>,
    vocabulary: Vocabulary,
    similarity: SimilarityMatrix,
    titles: TitleIndex,
}

impl ContentModel {
    /// Build with the default English tokenizer
    pub fn build(dataset: &Dataset) -> Result<Self> {
        Self::build_with(dataset, &CountVectorizer::<EnglishTokenizer>::default())
    }

    pub fn build_with<T>(dataset: &Dataset, vectorizer: &CountVectorizer<T>) -> Result<Self>
    where
        T: Tokenizer,
    {
        Self::from_corpus(dataset.corpus(), vectorizer)
    }

    /// Build from an already filtered corpus. Row i of every structure is `corpus[i]`.
    ///
    /// # Errors
    /// * `EmptyCorpus` - `corpus` is empty
    /// * `NoVocabulary` - no token survived tokenization
    pub fn from_corpus<T>(corpus: Vec<Item>, vectorizer: &CountVectorizer<T>) -> Result<Self>
    where
        T: Tokenizer,
    {
        let (vocabulary, tf) = vectorizer.build(&corpus)?;
        let similarity = SimilarityMatrix::compute(&tf);
        let titles = TitleIndex::build(&corpus);
        Ok(Self {
            corpus,
            vocabulary,
            similarity,
            titles,
        })
    }

    /// Top `k` neighbors of `title` as (row, similarity).
    ///
    /// Candidates are every other corpus row, sorted by descending similarity;
    /// ties keep corpus order. The query row itself is never returned, even
    /// when another row also scores 1.
    ///
    /// # Errors
    /// * `TitleNotFound` - `title` is not in the corpus
    pub fn neighbors(&self, title: &str, k: usize) -> Result<Hits> {
        let idx = self
            .titles
            .get(title)
            .ok_or_else(|| RecommendError::TitleNotFound(title.to_string()))?;

        let mut hits = Hits::new(
            self.similarity
                .row(idx)
                .iter()
                .copied()
                .enumerate()
                .filter(|&(j, _)| j != idx)
                .collect(),
        );
        hits.sort_by_score().truncate(k);
        debug!(title, row = idx, hits = hits.len(), "neighbor query");
        Ok(hits)
    }

    /// The [`DEFAULT_NEIGHBORS`] items most similar to `title`, most similar first
    pub fn recommend(&self, title: &str) -> Result<Vec<DisplayRecord>> {
        self.recommend_n(title, DEFAULT_NEIGHBORS)
    }

    /// Like [`recommend`](Self::recommend) with an explicit count.
    /// Fewer records come back when the corpus is smaller.
    pub fn recommend_n(&self, title: &str, k: usize) -> Result<Vec<DisplayRecord>> {
        let hits = self.neighbors(title, k)?;
        Ok(hits.indices().map(|i| DisplayRecord::from(&self.corpus[i])).collect())
    }

    #[inline]
    pub fn corpus(&self) -> &[Item] {
        &self.corpus
    }

    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[inline]
    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    #[inline]
    pub fn titles(&self) -> &TitleIndex {
        &self.titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixture::item;
    use proptest::prelude::*;

    fn model(items: Vec<Item>) -> ContentModel {
        ContentModel::build(&Dataset::from_items(items)).unwrap()
    }

    fn titles(records: &[DisplayRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn identical_bag_ranks_above_unrelated() {
        let m = model(vec![
            item("A", Some("space adventure robot"), 1, 1.0),
            item("B", Some("space robot adventure"), 1, 1.0),
            item("C", Some("romantic comedy wedding"), 1, 1.0),
        ]);
        let recs = m.recommend("A").unwrap();
        assert_eq!(titles(&recs), vec!["B", "C"]);

        let hits = m.neighbors("A", 10).unwrap();
        assert!(hits.list[0].1 > hits.list[1].1);
    }

    #[test]
    fn query_item_is_excluded_even_behind_a_perfect_match() {
        // B has the same bag as C and precedes it in corpus order
        let m = model(vec![
            item("A", Some("alien"), 1, 1.0),
            item("B", Some("heist crew"), 1, 1.0),
            item("C", Some("crew heist"), 1, 1.0),
        ]);
        let recs = m.recommend("C").unwrap();
        assert_eq!(titles(&recs), vec!["B", "A"]);
        assert!(recs.iter().all(|r| r.title != "C"));
    }

    #[test]
    fn ties_keep_corpus_order() {
        let m = model(vec![
            item("Q", Some("robot"), 1, 1.0),
            item("X", Some("opera"), 1, 1.0),
            item("Y", Some("ballet"), 1, 1.0),
            item("Z", Some("robot opera"), 1, 1.0),
            item("W", Some("jazz"), 1, 1.0),
        ]);
        assert_eq!(titles(&m.recommend("Q").unwrap()), vec!["Z", "X", "Y", "W"]);
    }

    #[test]
    fn caps_at_ten_neighbors() {
        let items = (0..15)
            .map(|i| item(&format!("M{i}"), Some(format!("shared word{i}").as_str()), 1, 1.0))
            .collect();
        let m = model(items);
        let recs = m.recommend("M3").unwrap();
        assert_eq!(recs.len(), DEFAULT_NEIGHBORS);
        assert_eq!(recs[0].title, "M0");
        assert!(recs.iter().all(|r| r.title != "M3"));
    }

    #[test]
    fn small_corpus_returns_fewer() {
        let m = model(vec![item("Solo", Some("robot"), 1, 1.0), item("Duo", Some("robot"), 1, 1.0)]);
        assert_eq!(m.recommend("Solo").unwrap().len(), 1);
    }

    #[test]
    fn unknown_title_is_an_error() {
        let m = model(vec![item("A", Some("robot"), 1, 1.0)]);
        let err = m.recommend("unknown-title").unwrap_err();
        assert!(matches!(err, RecommendError::TitleNotFound(t) if t == "unknown-title"));
    }

    #[test]
    fn items_without_soup_are_not_queryable() {
        let m = model(vec![
            item("A", Some("robot"), 1, 1.0),
            item("NoSoup", None, 1, 1.0),
            item("B", Some("robot"), 1, 1.0),
        ]);
        assert_eq!(m.corpus().len(), 2);
        assert!(matches!(m.recommend("NoSoup"), Err(RecommendError::TitleNotFound(_))));
        assert_eq!(titles(&m.recommend("A").unwrap()), vec!["B"]);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let m = model(vec![
            item("A", Some("robot space"), 1, 1.0),
            item("B", Some("robot"), 1, 1.0),
            item("C", Some("space"), 1, 1.0),
            item("D", Some("opera"), 1, 1.0),
        ]);
        assert_eq!(m.recommend("A").unwrap(), m.recommend("A").unwrap());
    }

    #[test]
    fn records_carry_display_fields() {
        let m = model(vec![
            item("A", Some("robot"), 1, 1.0),
            item("B", Some("robot"), 7, 6.5),
        ]);
        let rec = &m.recommend("A").unwrap()[0];
        assert_eq!(rec, &DisplayRecord::from(&item("B", Some("robot"), 7, 6.5)));
    }

    proptest! {
        #[test]
        fn neighbors_never_include_the_query_and_repeat(
            docs in prop::collection::vec(
                prop::collection::vec(prop::sample::select(vec!["alien", "robot", "space", "heist", "opera", "the"]), 0..6),
                1..25,
            )
        ) {
            let mut items: Vec<Item> = docs
                .iter()
                .enumerate()
                .map(|(i, d)| item(&format!("T{i}"), Some(d.join(" ").as_str()), 1, 1.0))
                .collect();
            // guarantee a vocabulary
            items.push(item("Anchor", Some("anchor"), 1, 1.0));
            let m = model(items);
            let n = m.corpus().len();

            for row in m.corpus() {
                let recs = m.recommend_n(&row.title, DEFAULT_NEIGHBORS).unwrap();
                prop_assert!(recs.iter().all(|r| r.title != row.title));
                prop_assert!(recs.len() <= DEFAULT_NEIGHBORS);
                prop_assert_eq!(recs.len(), DEFAULT_NEIGHBORS.min(n - 1));
                prop_assert_eq!(&recs, &m.recommend_n(&row.title, DEFAULT_NEIGHBORS).unwrap());
            }
        }
    }
}
