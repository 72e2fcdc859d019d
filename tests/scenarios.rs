//! Concrete end-to-end scenarios (SPEC_FULL.md §8, E1-E6).
//!
//! All scenarios use the ascending `i32` byte-interpretation comparator
//! named in §8.

use pdqsort::pdqsort_by;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::cell::Cell;

unsafe fn compare_i32(a: *const u8, b: *const u8) -> i32 {
    let a = *(a as *const i32);
    let b = *(b as *const i32);
    a.cmp(&b) as i32
}

fn sort_i32(v: &mut [i32]) {
    unsafe {
        pdqsort_by(v.as_mut_ptr() as *mut u8, v.len(), 4, compare_i32);
    }
}

#[test]
fn e1_empty_input() {
    let mut v: Vec<i32> = vec![];
    sort_i32(&mut v);
    assert_eq!(v, Vec::<i32>::new());
}

#[test]
fn e2_small_unsorted_input() {
    let mut v = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
    sort_i32(&mut v);
    assert_eq!(v, vec![1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
}

#[test]
fn e3_already_sorted_input_uses_few_comparisons() {
    let mut v: Vec<i32> = (0..100).collect();
    let expected = v.clone();

    let count = Cell::new(0usize);
    let mut compare = |a: *const u8, b: *const u8| {
        count.set(count.get() + 1);
        unsafe { compare_i32(a, b) }
    };
    unsafe {
        pdqsort_by(v.as_mut_ptr() as *mut u8, v.len(), 4, &mut compare);
    }
    assert_eq!(v, expected);
    assert!(count.get() <= 2 * 99, "expected at most {} comparisons, got {}", 2 * 99, count.get());
}

#[test]
fn e4_reverse_sorted_length_100() {
    let mut v: Vec<i32> = (0..100).rev().collect();
    sort_i32(&mut v);
    let expected: Vec<i32> = (0..100).collect();
    assert_eq!(v, expected);
}

#[test]
fn e5_all_equal_length_1000() {
    let mut v = vec![7i32; 1000];
    let expected = v.clone();
    sort_i32(&mut v);
    assert_eq!(v, expected);
}

#[test]
fn e6_random_permutation_of_10000() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut v: Vec<i32> = (0..10_000).collect();
    v.shuffle(&mut rng);

    let count = Cell::new(0usize);
    let mut compare = |a: *const u8, b: *const u8| {
        count.set(count.get() + 1);
        unsafe { compare_i32(a, b) }
    };
    unsafe {
        pdqsort_by(v.as_mut_ptr() as *mut u8, v.len(), 4, &mut compare);
    }
    let expected: Vec<i32> = (0..10_000).collect();
    assert_eq!(v, expected);

    let n = 10_000f64;
    let bound = (25.0 * n * n.log2()) as usize;
    assert!(count.get() <= bound, "comparator count {} exceeded bound {bound}", count.get());
}
