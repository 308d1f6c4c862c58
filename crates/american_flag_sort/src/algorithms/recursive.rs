use crate::key::DecimalKey;

use super::common;

/// Sorts `data` by recursing into every bucket that still holds more than one
/// element, one decimal digit lower each level.
pub fn sort<K: DecimalKey>(data: &mut [K], divisor: u64) {
    american_flag_sort_msd(data, divisor);
}

fn american_flag_sort_msd<K: DecimalKey>(data: &mut [K], divisor: u64) {
    let bounds = common::partition_by_digit(data, divisor);
    if divisor <= 1 {
        return;
    }

    let next = divisor / 10;
    for w in bounds.windows(2) {
        let (start, end) = (w[0], w[1]);
        if end - start > 1 {
            american_flag_sort_msd(&mut data[start..end], next);
        }
    }
}
