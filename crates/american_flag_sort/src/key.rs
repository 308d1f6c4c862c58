//! Decimal digit extraction for primitive integer keys.

use crate::RADIX;

/// A primitive integer that can be bucketed by decimal digit.
///
/// Signed keys are accepted at the type level and rejected at runtime when
/// negative; see [`crate::SortError::InvalidInput`].
pub trait DecimalKey: Copy + Ord {
    /// `Some(value)` when the key is below zero.
    fn negative_value(self) -> Option<i64>;

    /// The key as an unsigned magnitude. Only meaningful for non-negative keys.
    fn radix_key(self) -> u64;
}

macro_rules! impl_unsigned_key {
    ($($t:ty),*) => {
        $(
            impl DecimalKey for $t {
                #[inline]
                fn negative_value(self) -> Option<i64> {
                    None
                }

                #[inline]
                fn radix_key(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

macro_rules! impl_signed_key {
    ($($t:ty),*) => {
        $(
            impl DecimalKey for $t {
                #[inline]
                fn negative_value(self) -> Option<i64> {
                    (self < 0).then_some(self as i64)
                }

                #[inline]
                fn radix_key(self) -> u64 {
                    debug_assert!(self >= 0);
                    self as u64
                }
            }
        )*
    };
}

impl_unsigned_key!(u8, u16, u32, u64, usize);
impl_signed_key!(i8, i16, i32, i64, isize);

/// Number of decimal digits of `v`; zero has one digit.
#[inline]
pub fn digit_count(v: u64) -> u32 {
    v.checked_ilog10().map_or(1, |log| log + 1)
}

/// Largest [`digit_count`] over `data`, or `0` when `data` is empty.
pub fn max_digit_count<K: DecimalKey>(data: &[K]) -> u32 {
    data.iter()
        .map(|&k| digit_count(k.radix_key()))
        .max()
        .unwrap_or(0)
}

/// Divisor isolating the most significant of `digits` decimal digits.
#[inline]
pub fn leading_divisor(digits: u32) -> u64 {
    (RADIX as u64).pow(digits.saturating_sub(1))
}

#[inline]
pub fn digit(v: u64, divisor: u64) -> usize {
    ((v / divisor) % RADIX as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_count_known_cases() {
        let cases = [
            (0_u64, 1_u32),
            (1, 1),
            (9, 1),
            (10, 2),
            (99, 2),
            (100, 3),
            (802, 3),
            (999_999_999, 9),
            (1_000_000_000, 10),
            (u64::MAX, 20),
        ];

        for (v, expected) in cases {
            assert_eq!(digit_count(v), expected, "v={v}");
        }
    }

    #[test]
    fn max_digit_count_over_slices() {
        assert_eq!(max_digit_count::<u32>(&[]), 0);
        assert_eq!(max_digit_count(&[0_u32]), 1);
        assert_eq!(max_digit_count(&[100_u32, 10, 1]), 3);
        assert_eq!(max_digit_count(&[170_i64, 45, 802, 2]), 3);
    }

    #[test]
    fn leading_divisor_isolates_top_digit() {
        assert_eq!(leading_divisor(0), 1);
        assert_eq!(leading_divisor(1), 1);
        assert_eq!(leading_divisor(3), 100);
        assert_eq!(leading_divisor(20), 10_000_000_000_000_000_000);
        assert_eq!(digit(u64::MAX, leading_divisor(20)), 1);
    }

    #[test]
    fn digit_extraction() {
        assert_eq!(digit(802, 100), 8);
        assert_eq!(digit(802, 10), 0);
        assert_eq!(digit(802, 1), 2);
        assert_eq!(digit(45, 100), 0);
    }

    #[test]
    fn negative_detection() {
        assert_eq!((-3_i32).negative_value(), Some(-3));
        assert_eq!(0_i32.negative_value(), None);
        assert_eq!(i64::MIN.negative_value(), Some(i64::MIN));
        assert_eq!(u64::MAX.negative_value(), None);
        assert_eq!(i8::MAX.radix_key(), 127);
    }
}
