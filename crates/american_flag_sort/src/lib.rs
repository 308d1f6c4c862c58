//! In-place American flag sort over decimal digits.
//!
//! Keys are bucketed by their most significant decimal digit first, each
//! bucket is permuted into place by following displacement cycles, and every
//! bucket with more than one element is then sorted on the next digit down.
//! The sort is not stable.

mod algorithms;
mod error;
mod key;

use tracing::debug;

use algorithms::work_stack::Frame;

pub use error::SortError;
pub use key::{DecimalKey, digit_count, max_digit_count};

/// Number of buckets per partition step.
pub const RADIX: usize = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Traversal {
    Recursive,
    WorkStack,
}

pub const ALL_TRAVERSALS: [Traversal; 2] = [Traversal::Recursive, Traversal::WorkStack];

pub fn all_traversals() -> &'static [Traversal] {
    &ALL_TRAVERSALS
}

pub fn traversal_name(traversal: Traversal) -> &'static str {
    match traversal {
        Traversal::Recursive => "recursive",
        Traversal::WorkStack => "work_stack",
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub work_stack_reserve: usize,
}

// A 20-digit key can leave at most nine sibling frames pending per level.
pub const TUNED_PARAMS: TunedParams = TunedParams {
    work_stack_reserve: 20 * (RADIX - 1) + 1,
};

/// Reusable scratch state for repeated sorts.
#[derive(Clone, Debug)]
pub struct SortContext {
    pub(crate) stack: Vec<Frame>,
}

impl Default for SortContext {
    fn default() -> Self {
        Self {
            stack: Vec::with_capacity(TUNED_PARAMS.work_stack_reserve),
        }
    }
}

/// Sorts `data` ascending in place and hands the same slice back.
///
/// Fails with [`SortError::InvalidInput`] if any element is negative; the
/// slice is left untouched in that case.
///
/// ```
/// let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
/// american_flag_sort::sort(&mut data).unwrap();
/// assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn sort<K: DecimalKey>(data: &mut [K]) -> Result<&mut [K], SortError> {
    sort_with_ctx(Traversal::Recursive, data, &mut SortContext::default())
}

pub fn sort_u64(data: &mut [u64]) -> &mut [u64] {
    sort_validated(Traversal::Recursive, data, &mut SortContext::default());
    data
}

pub fn sort_with_ctx<'a, K: DecimalKey>(
    traversal: Traversal,
    data: &'a mut [K],
    ctx: &mut SortContext,
) -> Result<&'a mut [K], SortError> {
    if let Some((index, value)) = first_negative(data) {
        debug!(index, value, "rejecting negative key");
        return Err(SortError::InvalidInput { index, value });
    }
    sort_validated(traversal, data, ctx);
    Ok(data)
}

fn first_negative<K: DecimalKey>(data: &[K]) -> Option<(usize, i64)> {
    data.iter()
        .enumerate()
        .find_map(|(i, &k)| k.negative_value().map(|v| (i, v)))
}

fn sort_validated<K: DecimalKey>(traversal: Traversal, data: &mut [K], ctx: &mut SortContext) {
    if data.len() < 2 {
        return;
    }
    if algorithms::common::is_sorted_non_decreasing(data) {
        return;
    }

    let digits = max_digit_count(data);
    debug!(
        len = data.len(),
        digits,
        traversal = traversal_name(traversal),
        "american flag sort"
    );

    let divisor = key::leading_divisor(digits);
    match traversal {
        Traversal::Recursive => algorithms::recursive::sort(data, divisor),
        Traversal::WorkStack => algorithms::work_stack::sort(data, divisor, ctx),
    }
}
