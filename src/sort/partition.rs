//! Partitioning around a fixed front pivot (C5).
//!
//! Both variants seat the pivot at `begin` before partitioning and leave it
//! at its final sorted position on return, mirroring the algorithm's
//! standard pivot-at-front formulation: the pivot never needs its own
//! register/slot during the scan, only the `scratch` element does, which
//! keeps the scan loops branch-light.

use super::primitives::{copy, swap};

/// Partitions `[begin, end)` around the element at `begin`, biased to
/// detect an already-partitioned range in one pass (`already_partitioned`).
///
/// Used on the right side of an imbalanced split and as pdqsort's default
/// partition. Returns the final index of the pivot and whether the range
/// was found to already be partitioned around it (no swap was needed).
pub(crate) unsafe fn partition_right<F>(
    begin: *mut u8,
    end: *mut u8,
    element_size: usize,
    scratch: *mut u8,
    compare: &mut F,
) -> (*mut u8, bool)
where
    F: FnMut(*const u8, *const u8) -> i32,
{
    copy(scratch, begin, element_size);

    let mut first = begin;
    let mut last = end;

    loop {
        first = first.add(element_size);
        if !(compare(first, scratch) < 0) {
            break;
        }
    }

    if first.sub(element_size) == begin {
        while first < last {
            last = last.sub(element_size);
            if compare(last, scratch) < 0 {
                break;
            }
        }
    } else {
        loop {
            last = last.sub(element_size);
            if compare(last, scratch) < 0 {
                break;
            }
        }
    }

    let already_partitioned = first >= last;

    while first < last {
        swap(first, last, element_size);
        loop {
            first = first.add(element_size);
            if !(compare(first, scratch) < 0) {
                break;
            }
        }
        loop {
            last = last.sub(element_size);
            if compare(last, scratch) < 0 {
                break;
            }
        }
    }

    let pivot_pos = first.sub(element_size);
    copy(begin, pivot_pos, element_size);
    copy(pivot_pos, scratch, element_size);

    (pivot_pos, already_partitioned)
}

/// Partitions `[begin, end)` around the element at `begin`, biased toward
/// the left side of the range.
///
/// Used when a partition turns out lopsided to the left (the pivot lands
/// very close to `end`): re-partitioning with the mirrored scan avoids the
/// quadratic blowup the plain `partition_right` scan would hit on ranges
/// with many elements equal to the pivot.
pub(crate) unsafe fn partition_left<F>(begin: *mut u8, end: *mut u8, element_size: usize, scratch: *mut u8, compare: &mut F) -> *mut u8
where
    F: FnMut(*const u8, *const u8) -> i32,
{
    copy(scratch, begin, element_size);

    let mut first = begin;
    let mut last = end;

    loop {
        last = last.sub(element_size);
        if !(compare(scratch, last) < 0) {
            break;
        }
    }

    if last.add(element_size) == end {
        while first < last {
            first = first.add(element_size);
            if compare(first, scratch) < 0 {
                break;
            }
        }
    } else {
        last = last.add(element_size);
        while first < last {
            first = first.add(element_size);
            if compare(first, scratch) < 0 {
                break;
            }
        }
    }

    while first < last {
        swap(first, last, element_size);
        loop {
            last = last.sub(element_size);
            if !(compare(scratch, last) < 0) {
                break;
            }
        }
        while first < last {
            first = first.add(element_size);
            if compare(first, scratch) < 0 {
                break;
            }
        }
    }

    let pivot_pos = last;
    copy(begin, pivot_pos, element_size);
    copy(pivot_pos, scratch, element_size);

    pivot_pos
}
