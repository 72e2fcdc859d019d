//! Raw `qsort`-style entry points: an `extern "C"` comparator over
//! `void*` element pointers, adapting trivially onto the generic `FnMut`
//! core the rest of the crate is built on.

use std::os::raw::{c_int, c_void};

/// A three-way comparator matching the C standard library's `qsort`
/// comparator signature.
pub type CompareFn = unsafe extern "C" fn(*const c_void, *const c_void) -> c_int;

/// Sorts `count` elements of `element_size` bytes starting at `base`
/// using `compare`, matching `qsort`'s signature.
///
/// # Safety
/// `base` must be valid for reads and writes of `count * element_size`
/// bytes; `compare` must be callable for the lifetime of the call and
/// implement a strict weak ordering consistent across calls.
pub unsafe fn pdqsort(base: *mut c_void, count: usize, element_size: usize, compare: CompareFn) {
    crate::sort::pdqsort_by(base as *mut u8, count, element_size, |a, b| {
        compare(a as *const c_void, b as *const c_void)
    });
}

/// Heapsort counterpart of [`pdqsort`], gated behind the `heapsort`
/// feature to mirror the source's export switch.
///
/// # Safety
/// Same contract as [`pdqsort`].
#[cfg(feature = "heapsort")]
pub unsafe fn heapsort(base: *mut c_void, count: usize, element_size: usize, compare: CompareFn) {
    crate::sort::heapsort_by(base as *mut u8, count, element_size, |a, b| {
        compare(a as *const c_void, b as *const c_void)
    });
}
