//! Overflow-checked products over iterators, the multiplicative counterpart to `checked_sum`.

use num_traits::{CheckedMul, One};

/// Iterator extension multiplying all items, returning `None` on overflow.
pub trait CheckedProduct<T> {
    fn checked_product(self) -> Option<T>;
}

impl<T, I> CheckedProduct<T> for I
where
    T: CheckedMul + One,
    I: Iterator<Item = T>,
{
    fn checked_product(mut self) -> Option<T> {
        self.try_fold(T::one(), |acc, value| acc.checked_mul(&value))
    }
}
