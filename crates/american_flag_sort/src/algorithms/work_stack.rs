use crate::SortContext;
use crate::key::DecimalKey;

use super::common;

/// A pending sub-range `start..end` still to be bucketed at `divisor`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame {
    pub start: usize,
    pub end: usize,
    pub divisor: u64,
}

/// Same ordering as the recursive traversal, driven by an explicit LIFO of
/// frames kept in `ctx` so call-stack depth stays constant.
pub fn sort<K: DecimalKey>(data: &mut [K], divisor: u64, ctx: &mut SortContext) {
    let stack = &mut ctx.stack;
    stack.clear();
    stack.push(Frame {
        start: 0,
        end: data.len(),
        divisor,
    });

    while let Some(Frame {
        start,
        end,
        divisor,
    }) = stack.pop()
    {
        let bounds = common::partition_by_digit(&mut data[start..end], divisor);
        if divisor <= 1 {
            continue;
        }

        let next = divisor / 10;
        // Reverse push keeps buckets popping in ascending digit order.
        for w in bounds.windows(2).rev() {
            if w[1] - w[0] > 1 {
                stack.push(Frame {
                    start: start + w[0],
                    end: start + w[1],
                    divisor: next,
                });
            }
        }
    }
}
