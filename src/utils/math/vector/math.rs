use std::{cmp::Ordering, ops::AddAssign};

use num::{Float, Num};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Dot product by merge-join over the two index lists.
    /// Summation follows ascending index order, so `a.dot(b)` and `b.dot(a)`
    /// are bit-identical.
    ///
    /// # Arguments
    /// * `other` - vector of the same dimension
    #[inline]
    pub fn dot<R>(&self, other: &Self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = R::zero();
        let (self_inds, self_vals) = self.as_slices();
        let (other_inds, other_vals) = other.as_slices();
        if self_inds.is_empty() || other_inds.is_empty() {
            return result;
        }

        let mut i = 0;
        let mut j = 0;
        while i < self_inds.len() && j < other_inds.len() {
            match self_inds[i].cmp(&other_inds[j]) {
                Ordering::Equal => {
                    result += self_vals[i].into() * other_vals[j].into();
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq<R>(&self) -> R
    where
        R: Num + AddAssign + Copy,
        N: Into<R>,
    {
        let mut result = R::zero();
        for (_, v) in self.raw_iter() {
            let v: R = v.into();
            result += v * v;
        }
        result
    }

    /// L2 norm
    #[inline]
    pub fn norm<R>(&self) -> R
    where
        R: Float + AddAssign,
        N: Into<R>,
    {
        self.norm_sq::<R>().sqrt()
    }
}
