use alloc::boxed::Box;
use alloc::vec::Vec;
use core::{error, fmt};

use crate::Reflect;

// -----------------------------------------------------------------------------
// Array

/// A fixed-size array of one or more dimensions.
///
/// Indices passed to [`get`](Array::get) are absolute: each one lies in
/// `lower_bound(d) .. lower_bound(d) + length(d)`.
pub trait Array: Reflect {
    /// The number of dimensions.
    fn rank(&self) -> usize;

    /// The number of elements along dimension `dim`.
    fn length(&self, dim: usize) -> usize;

    /// The first valid index along dimension `dim`.
    fn lower_bound(&self, dim: usize) -> isize {
        let _ = dim;
        0
    }

    /// Reads the element at `indices`, one index per dimension.
    fn get(&self, indices: &[isize]) -> Option<&dyn Reflect>;

    /// The number of elements over all dimensions.
    fn total_len(&self) -> usize {
        (0..self.rank()).map(|dim| self.length(dim)).product()
    }

    /// Whether any dimension has length zero.
    fn is_empty(&self) -> bool {
        (0..self.rank()).any(|dim| self.length(dim) == 0)
    }
}

// -----------------------------------------------------------------------------
// ShapeError

/// Returned by [`MultiArray::new`] when the data does not fill the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    pub expected: usize,
    pub received: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "array shape holds {} elements, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for ShapeError {}

// -----------------------------------------------------------------------------
// MultiArray

/// A rectangular array of rank `R` with per-dimension lower bounds.
///
/// Elements are stored in row-major order: the last dimension varies
/// fastest.
///
/// ```
/// use csx_reflect::ops::{Array, MultiArray};
///
/// let grid = MultiArray::new([2, 3], vec![1, 2, 3, 4, 5, 6]).unwrap();
/// assert_eq!(grid.rank(), 2);
/// assert_eq!(grid.at([1, 0]), Some(&4));
///
/// let shifted = MultiArray::new([2], vec!['a', 'b'])
///     .unwrap()
///     .with_lower_bounds([5]);
/// assert_eq!(shifted.at([6]), Some(&'b'));
/// assert_eq!(shifted.at([0]), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MultiArray<T, const R: usize> {
    lengths: [usize; R],
    lower_bounds: [isize; R],
    data: Box<[T]>,
}

impl<T, const R: usize> MultiArray<T, R> {
    pub fn new(lengths: [usize; R], data: Vec<T>) -> Result<Self, ShapeError> {
        let expected = lengths.iter().product();
        if data.len() != expected {
            return Err(ShapeError {
                expected,
                received: data.len(),
            });
        }
        Ok(Self {
            lengths,
            lower_bounds: [0; R],
            data: data.into_boxed_slice(),
        })
    }

    /// Builds an array by calling `f` with every zero-based index tuple.
    pub fn from_fn(lengths: [usize; R], mut f: impl FnMut([usize; R]) -> T) -> Self {
        let total: usize = lengths.iter().product();
        let mut data = Vec::with_capacity(total);
        let mut index = [0usize; R];
        for _ in 0..total {
            data.push(f(index));
            for dim in (0..R).rev() {
                index[dim] += 1;
                if index[dim] < lengths[dim] {
                    break;
                }
                index[dim] = 0;
            }
        }
        Self {
            lengths,
            lower_bounds: [0; R],
            data: data.into_boxed_slice(),
        }
    }

    #[inline]
    pub fn with_lower_bounds(mut self, lower_bounds: [isize; R]) -> Self {
        self.lower_bounds = lower_bounds;
        self
    }

    #[inline]
    pub const fn lengths(&self) -> &[usize; R] {
        &self.lengths
    }

    #[inline]
    pub const fn lower_bounds(&self) -> &[isize; R] {
        &self.lower_bounds
    }

    /// The elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The element at absolute indices, honoring the lower bounds.
    pub fn at(&self, indices: [isize; R]) -> Option<&T> {
        self.offset(&indices).and_then(|offset| self.data.get(offset))
    }

    fn offset(&self, indices: &[isize]) -> Option<usize> {
        if indices.len() != R {
            return None;
        }
        let mut offset = 0usize;
        for dim in 0..R {
            let relative = indices[dim].checked_sub(self.lower_bounds[dim])?;
            let relative = usize::try_from(relative).ok()?;
            if relative >= self.lengths[dim] {
                return None;
            }
            offset = offset * self.lengths[dim] + relative;
        }
        Some(offset)
    }
}

impl<T: Reflect, const R: usize> Array for MultiArray<T, R>
where
    Self: Reflect,
{
    #[inline]
    fn rank(&self) -> usize {
        R
    }

    #[inline]
    fn length(&self, dim: usize) -> usize {
        self.lengths.as_slice().get(dim).copied().unwrap_or(0)
    }

    #[inline]
    fn lower_bound(&self, dim: usize) -> isize {
        self.lower_bounds.as_slice().get(dim).copied().unwrap_or(0)
    }

    fn get(&self, indices: &[isize]) -> Option<&dyn Reflect> {
        let offset = self.offset(indices)?;
        self.data.get(offset).map(|item| item as &dyn Reflect)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::{MultiArray, ShapeError};

    #[test]
    fn rejects_mismatched_shape() {
        let err = MultiArray::new([2, 2], vec![1u8, 2, 3]).unwrap_err();
        assert_eq!(
            err,
            ShapeError {
                expected: 4,
                received: 3
            }
        );
    }

    #[test]
    fn from_fn_is_row_major() {
        let array = MultiArray::from_fn([2, 3], |[i, j]| (i * 10 + j) as u32);
        assert_eq!(array.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(array.at([1, 2]), Some(&12));
    }

    #[test]
    fn lower_bounds_shift_indices() {
        let array = MultiArray::from_fn([2, 2], |[i, j]| (i, j)).with_lower_bounds([-1, 3]);
        assert_eq!(array.at([-1, 3]), Some(&(0, 0)));
        assert_eq!(array.at([0, 4]), Some(&(1, 1)));
        assert_eq!(array.at([1, 3]), None);
        assert_eq!(array.at([0, 2]), None);
    }
}
