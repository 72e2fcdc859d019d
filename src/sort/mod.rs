//! The pdqsort driver (C7) and the resource/allocation layer that backs it
//! (C8).
//!
//! The driver is an explicit LIFO stack machine rather than native
//! recursion: a frame carries exactly the state a recursive call would
//! have kept on its stack frame (`begin`, `end`, the remaining
//! bad-partition budget, and whether this range is the leftmost one in the
//! whole sort), and the loop below pops, processes, and pushes frames
//! until none remain.

mod heapsort;
mod insertion;
mod partition;
mod primitives;

use crate::config::Config;
use assert2::debug_assert;
use dyn_stack::{DynStack, GlobalMemBuffer, SizeOverflow, StackReq};

/// Extra frame-stack headroom above the `2*log2(count)` bound derived in
/// the design notes, to absorb the ninther/pivot-shuffle bookkeeping
/// without ever needing to grow the `Vec` mid-sort.
const FRAME_STACK_SLACK: usize = 16;

#[derive(Clone, Copy)]
struct Frame {
    begin: *mut u8,
    end: *mut u8,
    bad_allowed: u32,
    is_leftmost: bool,
}

/// Computes the allocation request for the one scratch element a call to
/// [`pdqsort_by`] or [`pdqsort_by_with_config`] needs for its lifetime.
///
/// Exposed so callers who want to avoid the global allocator can size and
/// own their own buffer; ordinary callers never need to call this
/// directly, as [`pdqsort_by`] computes and satisfies it internally.
pub fn pdqsort_req(element_size: usize) -> Result<StackReq, SizeOverflow> {
    StackReq::try_new::<u8>(element_size)
}

/// Sorts `[base, base + count * element_size)` in place using the default
/// thresholds (see [`crate::DefaultConfig`]).
///
/// # Safety
/// `base` must be valid for reads and writes of `count * element_size`
/// bytes, and `compare` must implement a strict weak ordering consistent
/// across calls; violating either is undefined behavior.
pub unsafe fn pdqsort_by<F>(base: *mut u8, count: usize, element_size: usize, compare: F)
where
    F: FnMut(*const u8, *const u8) -> i32,
{
    pdqsort_by_with_config::<crate::DefaultConfig, F>(base, count, element_size, compare)
}

/// Sorts `[base, base + count * element_size)` in place using the
/// thresholds defined by `C`, allocating its own scratch buffer.
///
/// # Safety
/// Same contract as [`pdqsort_by`].
pub unsafe fn pdqsort_by_with_config<C, F>(base: *mut u8, count: usize, element_size: usize, compare: F)
where
    C: Config,
    F: FnMut(*const u8, *const u8) -> i32,
{
    debug_assert!(element_size > 0);
    if count < 2 || element_size == 0 {
        return;
    }

    let req = pdqsort_req(element_size).expect("pdqsort: scratch element size overflows allocator limits");
    let mut mem = GlobalMemBuffer::new(req);
    let stack = DynStack::new(&mut mem);
    pdqsort_in::<C, F>(base, count, element_size, stack, compare);
}

/// Sorts `[base, base + count * element_size)` in place using the
/// thresholds defined by `C`, borrowing its scratch element out of a
/// caller-supplied `stack` rather than allocating one.
///
/// Intended for hosts that sort many similarly-sized ranges and want to
/// reuse one backing buffer across calls instead of paying for a fresh
/// allocation each time; size `stack`'s buffer with [`pdqsort_req`].
///
/// # Safety
/// Same contract as [`pdqsort_by`].
pub unsafe fn pdqsort_in<C, F>(base: *mut u8, count: usize, element_size: usize, mut stack: DynStack<'_>, mut compare: F)
where
    C: Config,
    F: FnMut(*const u8, *const u8) -> i32,
{
    debug_assert!(element_size > 0);
    if count < 2 || element_size == 0 {
        return;
    }

    let (scratch_uninit, _) = stack.make_aligned_uninit::<u8>(element_size, 1);
    let scratch = scratch_uninit.as_mut_ptr() as *mut u8;

    drive::<C, F>(base, count, element_size, scratch, &mut compare);
}

/// Sorts `[base, base + count * element_size)` in place using only the
/// heapsort fallback (C6), gated behind the `heapsort` feature to mirror
/// the source's export switch.
///
/// # Safety
/// Same contract as [`pdqsort_by`].
#[cfg(feature = "heapsort")]
pub unsafe fn heapsort_by<F>(base: *mut u8, count: usize, element_size: usize, mut compare: F)
where
    F: FnMut(*const u8, *const u8) -> i32,
{
    if count < 2 || element_size == 0 {
        return;
    }
    heapsort::heapsort(base, count, element_size, &mut compare);
}

unsafe fn drive<C, F>(base: *mut u8, count: usize, element_size: usize, scratch: *mut u8, compare: &mut F)
where
    C: Config,
    F: FnMut(*const u8, *const u8) -> i32,
{
    let capacity = 2 * primitives::log2_floor(count) as usize + FRAME_STACK_SLACK;
    let mut frames: Vec<Frame> = Vec::with_capacity(capacity);
    frames.push(Frame {
        begin: base,
        end: base.add(count * element_size),
        bad_allowed: primitives::log2_floor(count),
        is_leftmost: true,
    });

    while let Some(Frame { mut begin, end, mut bad_allowed, is_leftmost }) = frames.pop() {
        'frame: loop {
            let len = (end.offset_from(begin) as usize) / element_size;

            // (a) small-range shortcut
            if len < C::T_INS {
                if is_leftmost {
                    insertion::guarded(begin, len, element_size, scratch, &mut *compare);
                } else {
                    insertion::unguarded(begin, len, element_size, scratch, &mut *compare);
                }
                break 'frame;
            }

            // (b) pivot selection: seats the chosen pivot at `begin`.
            let mid = begin.add((len / 2) * element_size);
            if len > C::T_NIN {
                primitives::sort3(begin, mid, end.sub(element_size), element_size, &mut *compare);
                primitives::sort3(
                    begin.add(element_size),
                    mid.sub(element_size),
                    end.sub(2 * element_size),
                    element_size,
                    &mut *compare,
                );
                primitives::sort3(
                    begin.add(2 * element_size),
                    mid.add(element_size),
                    end.sub(3 * element_size),
                    element_size,
                    &mut *compare,
                );
                primitives::sort3(mid.sub(element_size), mid, mid.add(element_size), element_size, &mut *compare);
                primitives::swap(begin, mid, element_size);
            } else {
                primitives::sort3(mid, begin, end.sub(element_size), element_size, &mut *compare);
            }

            // (c) equal-to-predecessor shortcut
            if !is_leftmost && !(compare(begin.sub(element_size), begin) < 0) {
                let pivot_pos = partition::partition_left(begin, end, element_size, scratch, &mut *compare);
                begin = pivot_pos.add(element_size);
                continue 'frame;
            }

            // (d) partition-right
            let (pivot_pos, already_partitioned) = partition::partition_right(begin, end, element_size, scratch, &mut *compare);
            let l_size = (pivot_pos.offset_from(begin) as usize) / element_size;
            let r_size = len - l_size - 1;

            // (e) imbalance handling
            let highly_unbalanced = l_size < len / 8 || r_size < len / 8;
            if highly_unbalanced {
                bad_allowed -= 1;
                if bad_allowed == 0 {
                    heapsort::heapsort(begin, len, element_size, &mut *compare);
                    break 'frame;
                }
                if l_size >= C::T_INS {
                    pivot_shuffle(begin, pivot_pos, l_size, element_size, C::T_NIN);
                }
                if r_size >= C::T_INS {
                    pivot_shuffle(pivot_pos.add(element_size), end, r_size, element_size, C::T_NIN);
                }
            } else if already_partitioned {
                let left_sorted = insertion::partial::<C, F>(begin, l_size, element_size, scratch, &mut *compare);
                if left_sorted {
                    let right_sorted = insertion::partial::<C, F>(pivot_pos.add(element_size), r_size, element_size, scratch, &mut *compare);
                    if right_sorted {
                        break 'frame;
                    }
                }
            }

            // (f) recursion: push right first so the left sub-range pops first.
            frames.push(Frame {
                begin: pivot_pos.add(element_size),
                end,
                bad_allowed,
                is_leftmost: false,
            });
            frames.push(Frame { begin, end: pivot_pos, bad_allowed, is_leftmost });
            break 'frame;
        }
    }
}

/// Fixed index perturbations applied to one side of a highly unbalanced
/// partition, to break the input patterns that would otherwise keep
/// reproducing the same imbalance (§4.7e). `back` is one-past the last
/// element on this side (`pivot_pos` for the left side, `end` for the
/// right side).
unsafe fn pivot_shuffle(begin: *mut u8, back: *mut u8, size: usize, element_size: usize, t_nin: usize) {
    let q = (size / 4) * element_size;
    primitives::swap(begin, begin.add(q), element_size);
    primitives::swap(back.sub(element_size), back.sub(q), element_size);
    if size > t_nin {
        primitives::swap(begin.add(element_size), begin.add(q).add(element_size), element_size);
        primitives::swap(begin.add(2 * element_size), begin.add(q).add(2 * element_size), element_size);
        primitives::swap(back.sub(2 * element_size), back.sub(q).sub(element_size), element_size);
        primitives::swap(back.sub(3 * element_size), back.sub(q).sub(2 * element_size), element_size);
    }
}
