//! Fixed-capacity inline buffer storage.
//!
//! [`InlineBuffer`] is the single capacity-parameterized container behind
//! every size class. Storage is a plain `[T; N]` embedded in the value
//! itself, so a buffer lives wherever its owner lives — usually the
//! caller's stack frame — and is discarded on ordinary scope exit. There
//! is no heap allocation anywhere in this module.

use crate::error::BufferError;

/// A fixed-capacity buffer of `N` elements stored inline.
///
/// Every slot is `T::default()` at construction; stale data is never
/// observable. Element access is bounds-checked against the capacity.
///
/// This is a value type: copying a buffer copies all `N` slots, and two
/// copies never share backing storage.
///
/// # Example
///
/// ```rust
/// use inlinebuf::InlineBuffer;
///
/// let mut buf = InlineBuffer::<u32, 8>::new();
/// buf.set(3, 99)?;
/// assert_eq!(buf.get(3)?, &99);
/// assert_eq!(buf.as_slice().len(), 8);
/// # Ok::<(), inlinebuf::BufferError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InlineBuffer<T, const N: usize> {
    slots: [T; N],
}

impl<T: Default, const N: usize> InlineBuffer<T, N> {
    /// Create a buffer with all `N` slots set to `T::default()`.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Default, const N: usize> Default for InlineBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> InlineBuffer<T, N> {
    /// Number of element slots, fixed at compile time.
    pub const CAPACITY: usize = N;

    /// Number of element slots.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Borrow the element at `index`.
    ///
    /// Fails with [`BufferError::IndexOutOfRange`] when `index >= N`.
    pub fn get(&self, index: usize) -> Result<&T, BufferError> {
        self.check_index(index)?;
        Ok(&self.slots[index])
    }

    /// Mutably borrow the element at `index`, for in-place mutation
    /// without a copy round-trip.
    ///
    /// Fails with [`BufferError::IndexOutOfRange`] when `index >= N`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, BufferError> {
        self.check_index(index)?;
        Ok(&mut self.slots[index])
    }

    /// Overwrite the element at `index`.
    ///
    /// Fails with [`BufferError::IndexOutOfRange`] when `index >= N`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        self.check_index(index)?;
        self.slots[index] = value;
        Ok(())
    }

    /// View the whole buffer as a read-only slice of length `N`.
    ///
    /// The slice aliases the buffer directly; its lifetime is tied to the
    /// borrow of the buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// View the whole buffer as a mutable slice of length `N`.
    ///
    /// The slice aliases the buffer directly; its lifetime is tied to the
    /// borrow of the buffer.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    fn check_index(&self, index: usize) -> Result<(), BufferError> {
        if index >= N {
            return Err(BufferError::IndexOutOfRange {
                index,
                capacity: N,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_all_default() {
        let buf = InlineBuffer::<i32, 16>::new();
        assert!(buf.as_slice().iter().all(|&v| v == 0));
        assert_eq!(buf.capacity(), 16);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut buf = InlineBuffer::<i32, 4>::new();
        buf.set(0, 123).unwrap();
        assert_eq!(buf.get(0).unwrap(), &123);
        buf.set(3, 456).unwrap();
        assert_eq!(buf.get(3).unwrap(), &456);
    }

    #[test]
    fn get_mut_mutates_in_place() {
        let mut buf = InlineBuffer::<String, 2>::new();
        buf.get_mut(1).unwrap().push_str("hello");
        assert_eq!(buf.get(1).unwrap(), "hello");
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut buf = InlineBuffer::<i32, 8>::new();
        let expected = Err(BufferError::IndexOutOfRange {
            index: 8,
            capacity: 8,
        });
        assert_eq!(buf.get(8).err(), expected.err());
        assert_eq!(buf.get_mut(8).err(), expected.err());
        assert_eq!(buf.set(8, 1), expected);
        // Failed writes leave the buffer untouched.
        assert!(buf.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn slice_views_alias_the_storage() {
        let mut buf = InlineBuffer::<i32, 4>::new();
        buf.as_mut_slice()[0] = 7;
        assert_eq!(buf.get(0).unwrap(), &7);
        buf.set(3, 9).unwrap();
        assert_eq!(buf.as_slice()[3], 9);
        assert_eq!(buf.as_slice().len(), 4);
    }

    #[test]
    fn copies_do_not_share_backing() {
        let mut original = InlineBuffer::<i32, 4>::new();
        original.set(0, 1).unwrap();
        let mut copy = original;
        copy.set(0, 2).unwrap();
        assert_eq!(original.get(0).unwrap(), &1);
        assert_eq!(copy.get(0).unwrap(), &2);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn checked_access_agrees_with_the_slice_view(
                index in 0usize..64,
                value in any::<i64>(),
            ) {
                let mut buf = InlineBuffer::<i64, 64>::new();
                buf.set(index, value).unwrap();
                prop_assert_eq!(buf.as_slice()[index], value);
                prop_assert_eq!(buf.get(index).unwrap(), &value);
            }

            #[test]
            fn every_out_of_range_index_is_rejected(index in 64usize..10_000) {
                let buf = InlineBuffer::<i64, 64>::new();
                prop_assert_eq!(
                    buf.get(index),
                    Err(BufferError::IndexOutOfRange { index, capacity: 64 })
                );
            }
        }
    }
}
