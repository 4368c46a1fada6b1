//! The sequence of values being sorted during one round of visualization.
//!
//! An [`ArrayModel`] never grows or shrinks once built. The only mutations it offers are
//! [`swap`](ArrayModel::swap) and [`set`](ArrayModel::set), both bounds checked, which is all
//! the four sorters need.
//!
//! # Example
//!
//! ```
//! use sortviz_orst::ArrayModel;
//!
//! let array = ArrayModel::generate(30).unwrap();
//! assert_eq!(array.len(), 30);
//! assert!(array.iter().all(|v| (1..=100).contains(v)));
//! ```

use std::ops::RangeInclusive;

use rand::Rng;

use crate::{Error, Result};

/// Range of the values produced by [`ArrayModel::generate`].
pub const VALUE_RANGE: RangeInclusive<u32> = 1..=100;

/// A fixed-length, mutable sequence of values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayModel<T> {
    values: Vec<T>,
}

impl ArrayModel<u32> {
    /// Generates `size` independent, uniformly random values in [`VALUE_RANGE`].
    ///
    /// Fails with [`Error::InvalidSize`] when `size` is zero.
    pub fn generate(size: usize) -> Result<Self> {
        Self::generate_with(size, VALUE_RANGE, &mut rand::thread_rng())
    }

    /// Like [`generate`](Self::generate) but draws from the given range and random number
    /// generator. Pass a seeded [`rand::rngs::StdRng`] to reproduce an array.
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use sortviz_orst::ArrayModel;
    ///
    /// let a = ArrayModel::generate_with(10, 1..=100, &mut StdRng::seed_from_u64(7)).unwrap();
    /// let b = ArrayModel::generate_with(10, 1..=100, &mut StdRng::seed_from_u64(7)).unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn generate_with<R>(size: usize, range: RangeInclusive<u32>, rng: &mut R) -> Result<Self>
    where
        R: Rng,
    {
        if size < 1 {
            return Err(Error::InvalidSize(size));
        }

        let values = (0..size).map(|_| rng.gen_range(range.clone())).collect();
        Ok(Self { values })
    }
}

impl<T> ArrayModel<T> {
    /// Wraps caller-provided values. Fails with [`Error::InvalidSize`] when `values` is empty.
    pub fn from_vec(values: Vec<T>) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidSize(0));
        }
        Ok(Self { values })
    }

    /// Exchanges the elements at `i` and `j`. Swapping an index with itself is allowed and
    /// leaves the array unchanged.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check(i)?;
        self.check(j)?;
        self.values.swap(i, j);
        Ok(())
    }

    /// Overwrites the element at `i`.
    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        self.check(i)?;
        self.values[i] = value;
        Ok(())
    }

    pub fn get(&self, i: usize) -> Result<&T> {
        self.values.get(i).ok_or(Error::IndexOutOfRange {
            index: i,
            len: self.values.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`: an array model holds at least one element.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.values.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
        }
    }
}

impl<T: Ord> ArrayModel<T> {
    /// Returns true if the values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl<'a, T> IntoIterator for &'a ArrayModel<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> AsRef<[T]> for ArrayModel<T> {
    fn as_ref(&self) -> &[T] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn generate_respects_size_and_range() {
        for size in [1, 10, 100] {
            let array = ArrayModel::generate(size).unwrap();
            assert_eq!(array.len(), size);
            assert!(array.iter().all(|v| VALUE_RANGE.contains(v)));
        }
    }

    #[test]
    fn generate_rejects_zero() {
        assert_eq!(ArrayModel::generate(0), Err(Error::InvalidSize(0)));
        assert_eq!(
            ArrayModel::<u32>::from_vec(Vec::new()),
            Err(Error::InvalidSize(0))
        );
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = ArrayModel::generate_with(50, 1..=100, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = ArrayModel::generate_with(50, 1..=100, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn custom_range() {
        let array = ArrayModel::generate_with(200, 3..=3, &mut StdRng::seed_from_u64(1)).unwrap();
        assert!(array.iter().all(|&v| v == 3));
    }

    #[test]
    fn swap_and_set() {
        let mut array = ArrayModel::from_vec(vec![1, 2, 3]).unwrap();
        array.swap(0, 2).unwrap();
        assert_eq!(array.as_slice(), &[3, 2, 1]);

        array.swap(1, 1).unwrap();
        assert_eq!(array.as_slice(), &[3, 2, 1]);

        array.set(1, 9).unwrap();
        assert_eq!(array.into_vec(), vec![3, 9, 1]);
    }

    #[test]
    fn out_of_range() {
        let mut array = ArrayModel::from_vec(vec![1, 2, 3]).unwrap();
        assert_eq!(
            array.swap(0, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            array.set(7, 0),
            Err(Error::IndexOutOfRange { index: 7, len: 3 })
        );
        assert_eq!(array.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));

        // failed mutations leave the values alone
        assert_eq!(array.as_slice(), &[1, 2, 3]);
    }
}
