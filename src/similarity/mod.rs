pub mod compare;

use rayon::prelude::*;
use tracing::info;

use crate::similarity::compare::cosine_with_norms;
use crate::vectorizer::TermFrequencyMatrix;

/// Dense symmetric n x n cosine similarity matrix.
///
/// Stored as one contiguous row-major buffer. Once built it is never
/// mutated, so it can be shared across readers freely.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Bytes needed for an n x n matrix. The caller budgets this.
    #[inline]
    pub const fn byte_size(n: usize) -> usize {
        n * n * core::mem::size_of::<f64>()
    }

    /// All-pairs cosine similarity over the rows of `matrix`.
    ///
    /// Norms are computed once per row; each cell costs one sparse dot product.
    /// The diagonal is exactly 1 for non-zero rows and 0 for zero rows.
    /// Rows are filled in parallel, one task per row, so the result does not
    /// depend on thread count.
    pub fn compute(matrix: &TermFrequencyMatrix) -> Self {
        let n = matrix.n_rows();
        info!(
            n,
            bytes = Self::byte_size(n),
            "computing similarity matrix"
        );
        if n == 0 {
            return Self { n, data: Vec::new() };
        }

        let rows = matrix.rows();
        let norms: Vec<f64> = rows.par_iter().map(|r| r.norm::<f64>()).collect();

        let mut data = vec![0.0_f64; n * n];
        data.par_chunks_mut(n).enumerate().for_each(|(i, out)| {
            for (j, cell) in out.iter_mut().enumerate() {
                *cell = if i == j {
                    if norms[i] == 0.0 { 0.0 } else { 1.0 }
                } else {
                    cosine_with_norms(&rows[i], norms[i], &rows[j], norms[j])
                };
            }
        });

        Self { n, data }
    }

    /// number of rows (and columns)
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// similarities of row `i` against every row, in corpus order
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
