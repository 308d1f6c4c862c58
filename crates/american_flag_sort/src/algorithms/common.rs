use tracing::trace;

use crate::RADIX;
use crate::key::{DecimalKey, digit};

/// Boundaries of the buckets produced by one partition step:
/// bucket `d` spans `bounds[d]..bounds[d + 1]`.
pub type BucketBounds = [usize; RADIX + 1];

#[inline]
pub fn is_sorted_non_decreasing<K: DecimalKey>(data: &[K]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Permutes `data` in place so that its elements are grouped by their digit at
/// `divisor`, in ascending digit order. Elements within a bucket are left in
/// no particular order.
pub fn partition_by_digit<K: DecimalKey>(data: &mut [K], divisor: u64) -> BucketBounds {
    let mut count = [0usize; RADIX];
    for &x in data.iter() {
        count[digit(x.radix_key(), divisor)] += 1;
    }

    let mut bounds = [0usize; RADIX + 1];
    let mut sum = 0usize;
    for (d, &c) in count.iter().enumerate() {
        bounds[d] = sum;
        sum += c;
    }
    bounds[RADIX] = sum;

    trace!(
        len = data.len(),
        divisor,
        buckets = count.iter().filter(|&&c| c > 0).count(),
        "partition step"
    );

    let mut offset = [0usize; RADIX];
    offset.copy_from_slice(&bounds[..RADIX]);

    for bucket in 0..RADIX {
        while count[bucket] > 0 {
            let origin = offset[bucket];
            let mut value = data[origin];
            loop {
                let d = digit(value.radix_key(), divisor);
                let to = offset[d];
                offset[d] += 1;
                count[d] -= 1;
                std::mem::swap(&mut value, &mut data[to]);
                if to == origin {
                    break;
                }
            }
        }
    }

    debug_assert_eq!(&offset[..], &bounds[1..]);
    bounds
}
