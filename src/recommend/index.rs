use indexmap::IndexMap;
use tracing::warn;

use crate::dataset::Item;

/// Title -> corpus row.
///
/// Duplicate titles resolve last-wins: the later row replaces the earlier
/// one, and the shadowed rows are kept in `duplicates`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TitleIndex {
    rows: IndexMap<Box<str>, usize>,
    /// (title, shadowed row)
    duplicates: Vec<(Box<str>, usize)>,
}

impl TitleIndex {
    pub fn build(corpus: &[Item]) -> Self {
        let mut rows: IndexMap<Box<str>, usize> = IndexMap::with_capacity(corpus.len());
        let mut duplicates = Vec::new();
        for (row, item) in corpus.iter().enumerate() {
            if let Some(prev) = rows.insert(item.title.as_str().into(), row) {
                duplicates.push((item.title.as_str().into(), prev));
            }
        }
        if !duplicates.is_empty() {
            warn!(
                shadowed = duplicates.len(),
                "duplicate titles in corpus, lookups resolve to the last occurrence"
            );
        }
        Self { rows, duplicates }
    }

    #[inline]
    pub fn get(&self, title: &str) -> Option<usize> {
        self.rows.get(title).copied()
    }

    /// distinct titles
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// rows no longer reachable by title
    pub fn duplicates(&self) -> impl Iterator<Item = (&str, usize)> {
        self.duplicates.iter().map(|(t, r)| (t.as_ref(), *r))
    }
}
