use indexmap::IndexMap;

/// TermFrequency
/// Counts term occurrences within one document (one item's soup).
/// Terms keep first-seen order.
///
/// # Examples
/// ```
/// use soup_recommender::TermFrequency;
///
/// let mut freq = TermFrequency::new();
/// freq.add_terms(&["space", "robot", "space"]);
/// assert_eq!(freq.term_count("space"), 2);
/// assert_eq!(freq.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    term_count: IndexMap<Box<str>, u32>,
    total_term_count: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        Self {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add one occurrence of a term
    ///
    /// # Arguments
    /// * `term` - term to count
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        match self.term_count.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.term_count.insert(term.into(), 1);
            }
        }
        self.total_term_count += 1;
        self
    }

    /// Add several terms
    ///
    /// # Arguments
    /// * `terms` - slice of terms
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrences of `term`, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total of all counts
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Iterate `(term, count)` in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(t, &c)| (t.as_ref(), c))
    }

    /// Distinct terms in first-seen order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|t| t.as_ref()).collect()
    }
}

impl<T: AsRef<str>> FromIterator<T> for TermFrequency {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut freq = Self::new();
        for term in iter {
            freq.add_term(term.as_ref());
        }
        freq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_totals() {
        let freq: TermFrequency = ["b", "a", "b", "c", "b"].into_iter().collect();
        assert_eq!(freq.term_count("b"), 3);
        assert_eq!(freq.term_count("zz"), 0);
        assert_eq!(freq.term_sum(), 5);
        assert_eq!(freq.term_num(), 3);
        assert_eq!(freq.term_set_ref_str(), vec!["b", "a", "c"]);
    }

    #[test]
    fn empty_frequency() {
        let freq = TermFrequency::new();
        assert!(freq.is_empty());
        assert_eq!(freq.iter().count(), 0);
    }
}
