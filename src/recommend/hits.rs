use std::fmt::Debug;

/// Scored candidates: (corpus row, score)
pub struct Hits {
    pub list: Vec<(usize, f64)>,
}

impl Hits {
    pub fn new(vec: Vec<(usize, f64)>) -> Self {
        Hits { list: vec }
    }

    /// Sort by descending score.
    /// The sort is stable, equal scores keep their corpus order.
    pub fn sort_by_score(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|(_, s)| !s.is_nan());
        self.list.sort_by(|a, b| b.1.total_cmp(&a.1));
        self
    }

    pub fn truncate(&mut self, len: usize) -> &mut Self {
        self.list.truncate(len);
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.list.iter().map(|(i, _)| *i)
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for (row, score) in &self.list {
                writeln!(f, "    {}: {:.6}", row, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_is_descending_and_stable() {
        let mut hits = Hits::new(vec![(0, 0.5), (1, 0.9), (2, 0.5), (3, f64::NAN), (4, 0.9)]);
        hits.sort_by_score();
        assert_eq!(hits.indices().collect::<Vec<_>>(), vec![1, 4, 0, 2]);
    }

    #[test]
    fn truncate_keeps_head() {
        let mut hits = Hits::new(vec![(0, 0.1), (1, 0.3), (2, 0.2)]);
        hits.sort_by_score().truncate(2);
        assert_eq!(hits.indices().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(format!("{:?}", hits), "[(1, 0.3), (2, 0.2)]");
    }
}
