pub mod stats;

use tracing::info;

use crate::dataset::{DisplayRecord, Item};
use crate::error::{RecommendError, Result};
use crate::recommend::hits::Hits;

/// Items returned by [`DemographicRanker::rank`] by default
pub const DEFAULT_TOP_N: usize = 20;
/// Vote-count percentile used as the popularity threshold
pub const DEFAULT_PERCENTILE: f64 = 0.9;

/// Dataset-wide constants of the weighted rating
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingThresholds {
    /// `C`: mean vote average over the whole dataset
    pub mean_vote: f64,
    /// `m`: vote count at the configured percentile
    pub min_votes: f64,
}

impl RankingThresholds {
    /// # Errors
    /// * `EmptyDataset` - mean and percentile are undefined
    pub fn compute(dataset: &[Item], q: f64) -> Result<Self> {
        let averages: Vec<f64> = dataset.iter().map(|i| i.vote_average).collect();
        let counts: Vec<f64> = dataset.iter().map(|i| i.vote_count as f64).collect();
        let mean_vote = stats::mean(&averages).ok_or(RecommendError::EmptyDataset)?;
        let min_votes = stats::percentile(&counts, q).ok_or(RecommendError::EmptyDataset)?;
        Ok(Self { mean_vote, min_votes })
    }

    #[inline]
    pub fn score(&self, item: &Item) -> f64 {
        weighted_rating(item.vote_count as f64, item.vote_average, self.min_votes, self.mean_vote)
    }
}

/// Bayesian average: (v/(v+m))·R + (m/(m+v))·C
///
/// Few votes pull the score toward the global mean `c`, many votes leave
/// it close to the item's own average `r`. With no votes and `m == 0`
/// the weights are undefined and the global mean is returned.
#[inline]
pub fn weighted_rating(v: f64, r: f64, m: f64, c: f64) -> f64 {
    let total = v + m;
    if total == 0.0 {
        return c;
    }
    (v / total) * r + (m / total) * c
}

/// Demographic Ranker
/// Global "best of" list by popularity-adjusted rating.
///
/// Only items with `vote_count >= m` take part. The ranking reads the
/// unfiltered dataset and is independent of the similarity pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemographicRanker {
    top_n: usize,
    percentile: f64,
}

impl Default for DemographicRanker {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            percentile: DEFAULT_PERCENTILE,
        }
    }
}

impl DemographicRanker {
    /// # Errors
    /// * `InvalidPercentile` - `percentile` outside [0, 1]
    pub fn new(top_n: usize, percentile: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&percentile) {
            return Err(RecommendError::InvalidPercentile(percentile));
        }
        Ok(Self { top_n, percentile })
    }

    #[inline]
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    #[inline]
    pub fn percentile(&self) -> f64 {
        self.percentile
    }

    /// Every item of the ranking set as (dataset row, score), best first.
    /// Equal scores keep dataset order.
    pub fn scored(&self, dataset: &[Item]) -> Result<(RankingThresholds, Hits)> {
        let thresholds = RankingThresholds::compute(dataset, self.percentile)?;
        let mut hits = Hits::new(
            dataset
                .iter()
                .enumerate()
                .filter(|(_, item)| item.vote_count as f64 >= thresholds.min_votes)
                .map(|(row, item)| (row, thresholds.score(item)))
                .collect(),
        );
        hits.sort_by_score();
        info!(
            mean_vote = thresholds.mean_vote,
            min_votes = thresholds.min_votes,
            qualified = hits.len(),
            "ranking set scored"
        );
        Ok((thresholds, hits))
    }

    /// The top `top_n` items as display records.
    /// Fewer come back when the ranking set is smaller.
    ///
    /// # Errors
    /// * `EmptyDataset` - `dataset` is empty
    pub fn rank(&self, dataset: &[Item]) -> Result<Vec<DisplayRecord>> {
        let (_, mut hits) = self.scored(dataset)?;
        hits.truncate(self.top_n);
        Ok(hits.indices().map(|i| DisplayRecord::from(&dataset[i])).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::fixture::item;

    fn titles(records: &[DisplayRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    fn lopsided() -> Vec<Item> {
        vec![
            item("Few1", None, 10, 9.0),
            item("Few2", None, 10, 9.0),
            item("Few3", None, 10, 9.0),
            item("Many", None, 1000, 5.0),
        ]
    }

    #[test]
    fn heavy_voting_dominates_light_voting_shrinks() {
        let dataset = lopsided();
        let t = RankingThresholds::compute(&dataset, 0.9).unwrap();
        assert_eq!(t.mean_vote, 8.0);
        assert!((t.min_votes - 703.0).abs() < 1e-9);

        let many = t.score(&dataset[3]);
        assert!((many - 5.0).abs() < (many - t.mean_vote).abs());

        let few = t.score(&dataset[0]);
        assert!((few - t.mean_vote).abs() < (few - 9.0).abs());
    }

    #[test]
    fn only_items_at_threshold_qualify() {
        let recs = DemographicRanker::default().rank(&lopsided()).unwrap();
        assert_eq!(titles(&recs), vec!["Many"]);
    }

    #[test]
    fn ranks_by_score_and_ignores_soup() {
        let dataset = vec![
            item("Low", Some("x"), 100, 6.0),
            item("High", None, 100, 8.0),
            item("Mid", Some("y"), 100, 7.0),
        ];
        let recs = DemographicRanker::new(20, 0.0).unwrap().rank(&dataset).unwrap();
        assert_eq!(titles(&recs), vec!["High", "Mid", "Low"]);
    }

    #[test]
    fn equal_scores_keep_input_order_and_cap_at_top_n() {
        let dataset: Vec<Item> = (0..30).map(|i| item(&format!("T{i}"), None, 50, 7.0)).collect();
        let recs = DemographicRanker::default().rank(&dataset).unwrap();
        assert_eq!(recs.len(), DEFAULT_TOP_N);
        let expected: Vec<String> = (0..20).map(|i| format!("T{i}")).collect();
        assert_eq!(titles(&recs), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let err = DemographicRanker::default().rank(&[]).unwrap_err();
        assert!(matches!(err, RecommendError::EmptyDataset));
    }

    #[test]
    fn zero_votes_everywhere_falls_back_to_mean() {
        let dataset = vec![item("A", None, 0, 4.0), item("B", None, 0, 6.0)];
        let (t, hits) = DemographicRanker::default().scored(&dataset).unwrap();
        assert_eq!(t.min_votes, 0.0);
        assert!(hits.list.iter().all(|&(_, s)| s == 5.0));
    }

    #[test]
    fn weighted_rating_formula() {
        assert_eq!(weighted_rating(100.0, 8.0, 100.0, 6.0), 7.0);
        assert_eq!(weighted_rating(0.0, 8.0, 0.0, 6.0), 6.0);
    }

    #[test]
    fn percentile_out_of_range_is_rejected() {
        assert!(matches!(
            DemographicRanker::new(20, -0.1),
            Err(RecommendError::InvalidPercentile(_))
        ));
    }
}
