pub mod math;

use std::fmt::Debug;

use num::Num;

use crate::utils::sort::radix_sort_u32_soa;

/// ZeroSpVec is a sparse vector treating zero as the implicit element.
/// It holds `inds` (column indices) and `vals` (the values at those columns).
///
/// Indices are guaranteed to be strictly ascending, which the merge-join
/// kernels in `math` rely on.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num + Copy,
{
    inds: Vec<u32>,
    vals: Vec<N>,
    /// logical dimension
    len: usize,
}

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Build from `(index, value)` pairs in any order.
    /// Zero values are dropped and duplicate indices are summed.
    ///
    /// # Panics
    /// if an index is outside `len`
    pub fn from_pairs<I>(len: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, N)>,
    {
        let (mut inds, mut vals): (Vec<u32>, Vec<N>) = pairs
            .into_iter()
            .filter(|(_, v)| !v.is_zero())
            .unzip();
        assert!(
            inds.iter().all(|&i| (i as usize) < len),
            "index out of range for ZeroSpVec of len {len}"
        );
        radix_sort_u32_soa(&mut inds, &mut vals);

        // collapse duplicates, sort is stable so the sum order follows input order
        let mut out_inds: Vec<u32> = Vec::with_capacity(inds.len());
        let mut out_vals: Vec<N> = Vec::with_capacity(vals.len());
        for (i, v) in inds.into_iter().zip(vals) {
            match (out_inds.last(), out_vals.last_mut()) {
                (Some(&last), Some(acc)) if last == i => *acc = *acc + v,
                _ => {
                    out_inds.push(i);
                    out_vals.push(v);
                }
            }
        }
        out_inds.shrink_to_fit();
        out_vals.shrink_to_fit();
        Self {
            inds: out_inds,
            vals: out_vals,
            len,
        }
    }

    /// logical dimension
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// number of non-zero entries
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn is_zero_vector(&self) -> bool {
        self.inds.is_empty()
    }

    /// value at `index`, zero when absent
    #[inline]
    pub fn get(&self, index: usize) -> N {
        match self.inds.binary_search(&(index as u32)) {
            Ok(pos) => self.vals[pos],
            Err(_) => N::zero(),
        }
    }

    /// iterate non-zero entries in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, N)> + '_ {
        self.inds.iter().map(|&i| i as usize).zip(self.vals.iter().copied())
    }

    #[inline]
    pub fn as_slices(&self) -> (&[u32], &[N]) {
        (&self.inds, &self.vals)
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Copy + Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZeroSpVec")
            .field("len", &self.len)
            .field("nnz", &self.nnz())
            .field("entries", &self.raw_iter().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_sorts_and_sums_duplicates() {
        let v = ZeroSpVec::<u32>::from_pairs(10, vec![(7, 1), (2, 3), (7, 2), (0, 0)]);
        assert_eq!(v.as_slices(), (&[2u32, 7][..], &[3u32, 3][..]));
        assert_eq!(v.len(), 10);
        assert_eq!(v.nnz(), 2);
        assert_eq!(v.get(7), 3);
        assert_eq!(v.get(3), 0);
    }

    #[test]
    fn empty_pairs_give_zero_vector() {
        let v = ZeroSpVec::<u32>::from_pairs(4, Vec::new());
        assert!(v.is_zero_vector());
        assert!(!v.is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        let _ = ZeroSpVec::<u32>::from_pairs(2, vec![(2, 1)]);
    }
}
