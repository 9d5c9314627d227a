//! Size-class classification for scratch requests.
//!
//! A requested length is mapped to the smallest class whose capacity can
//! hold it. Classification is O(1): for lengths above one it is the bit
//! length of `len - 1`, so each distinct bit length lands on exactly one
//! power-of-two class. The two smallest requests are special-cased —
//! length zero needs no storage at all, and length one needs a single
//! slot rather than a whole container.

use crate::error::BufferError;

/// Maximum number of elements a scratch request may ask for.
///
/// This is a fixed design constant, not a configuration knob: it bounds
/// the stack footprint of the largest size class.
pub const MAX_SCRATCH_LEN: usize = 8192;

/// The size class backing a scratch request.
///
/// One of 15 discrete outcomes: no storage, a single slot, or one of the
/// 13 power-of-two inline capacities from 2 to [`MAX_SCRATCH_LEN`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum SizeClass {
    /// Length zero — no storage is materialized.
    Empty,
    /// Length one — a single slot, no container.
    Single,
    /// Capacity 2.
    Cap2,
    /// Capacity 4.
    Cap4,
    /// Capacity 8.
    Cap8,
    /// Capacity 16.
    Cap16,
    /// Capacity 32.
    Cap32,
    /// Capacity 64.
    Cap64,
    /// Capacity 128.
    Cap128,
    /// Capacity 256.
    Cap256,
    /// Capacity 512.
    Cap512,
    /// Capacity 1024.
    Cap1024,
    /// Capacity 2048.
    Cap2048,
    /// Capacity 4096.
    Cap4096,
    /// Capacity 8192.
    Cap8192,
}

impl SizeClass {
    /// Classify a requested length into the minimal adequate size class.
    ///
    /// Pure and allocation-free. Fails with
    /// [`BufferError::LenOutOfRange`] when `len` exceeds
    /// [`MAX_SCRATCH_LEN`]; nothing is materialized on failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inlinebuf::SizeClass;
    ///
    /// assert_eq!(SizeClass::for_len(5).unwrap(), SizeClass::Cap8);
    /// assert_eq!(SizeClass::for_len(8).unwrap(), SizeClass::Cap8);
    /// assert_eq!(SizeClass::for_len(9).unwrap(), SizeClass::Cap16);
    /// ```
    pub fn for_len(len: usize) -> Result<Self, BufferError> {
        if len > MAX_SCRATCH_LEN {
            return Err(BufferError::len_out_of_range(len));
        }
        Ok(match len {
            0 => Self::Empty,
            1 => Self::Single,
            _ => {
                // Bit length of len - 1: the smallest k with len <= 1 << k.
                let k = usize::BITS - (len - 1).leading_zeros();
                match k {
                    1 => Self::Cap2,
                    2 => Self::Cap4,
                    3 => Self::Cap8,
                    4 => Self::Cap16,
                    5 => Self::Cap32,
                    6 => Self::Cap64,
                    7 => Self::Cap128,
                    8 => Self::Cap256,
                    9 => Self::Cap512,
                    10 => Self::Cap1024,
                    11 => Self::Cap2048,
                    12 => Self::Cap4096,
                    13 => Self::Cap8192,
                    _ => unreachable!("len {len} already checked against MAX_SCRATCH_LEN"),
                }
            }
        })
    }

    /// Number of elements this class can hold.
    pub fn capacity(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single => 1,
            Self::Cap2 => 2,
            Self::Cap4 => 4,
            Self::Cap8 => 8,
            Self::Cap16 => 16,
            Self::Cap32 => 32,
            Self::Cap64 => 64,
            Self::Cap128 => 128,
            Self::Cap256 => 256,
            Self::Cap512 => 512,
            Self::Cap1024 => 1024,
            Self::Cap2048 => 2048,
            Self::Cap4096 => 4096,
            Self::Cap8192 => 8192,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_selects_the_empty_class() {
        assert_eq!(SizeClass::for_len(0).unwrap(), SizeClass::Empty);
        assert_eq!(SizeClass::Empty.capacity(), 0);
    }

    #[test]
    fn one_selects_the_single_class() {
        assert_eq!(SizeClass::for_len(1).unwrap(), SizeClass::Single);
        assert_eq!(SizeClass::Single.capacity(), 1);
    }

    #[test]
    fn powers_of_two_classify_exactly() {
        for k in 1..=13u32 {
            let cap = 1usize << k;
            // The boundary length maps to its own class; one past it
            // spills into the next class up.
            assert_eq!(SizeClass::for_len(cap).unwrap().capacity(), cap);
            assert_eq!(SizeClass::for_len(cap / 2 + 1).unwrap().capacity(), cap);
        }
    }

    #[test]
    fn over_max_is_rejected() {
        assert_eq!(
            SizeClass::for_len(MAX_SCRATCH_LEN + 1),
            Err(BufferError::LenOutOfRange {
                len: 8193,
                max: 8192
            })
        );
        assert!(SizeClass::for_len(usize::MAX).is_err());
    }

    #[test]
    fn classification_is_minimal_for_every_len() {
        for len in 2..=MAX_SCRATCH_LEN {
            let cap = SizeClass::for_len(len).unwrap().capacity();
            assert!(cap >= len, "class for {len} too small: {cap}");
            assert!(cap / 2 < len, "class for {len} not minimal: {cap}");
        }
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn capacity_is_adequate_and_minimal(len in 0usize..=MAX_SCRATCH_LEN) {
                let cap = SizeClass::for_len(len).unwrap().capacity();
                prop_assert!(cap >= len);
                if len > 1 {
                    prop_assert!(cap / 2 < len);
                    prop_assert!(cap.is_power_of_two());
                }
            }

            #[test]
            fn oversized_requests_never_classify(
                len in (MAX_SCRATCH_LEN + 1)..usize::MAX / 2,
            ) {
                prop_assert_eq!(
                    SizeClass::for_len(len),
                    Err(BufferError::LenOutOfRange { len, max: MAX_SCRATCH_LEN })
                );
            }
        }
    }
}
