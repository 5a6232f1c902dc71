//! Tests for heap allocation behavior.
//!
//! These tests install a counting global allocator and verify that record
//! arrays never box individual elements:
//! - Building an array of N records performs at most one allocation
//! - Delta-add performs at most one allocation
//! - Summation and indexed access perform none
//!
//! Counts are tracked per thread so the test harness and concurrently
//! running tests do not interfere.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use recarray::prelude::*;

// ============================================================================
// Counting Allocator
// ============================================================================

struct CountingAllocator;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn record_allocation() {
    let _ = ALLOCATIONS.try_with(|count| count.set(count.get() + 1));
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        record_allocation();
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        record_allocation();
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        record_allocation();
        unsafe { System.realloc(ptr, layout, new_size) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAllocator = CountingAllocator;

/// Run `f` and return its result together with the allocations it made.
fn count_allocations<R>(f: impl FnOnce() -> R) -> (R, usize) {
    let before = ALLOCATIONS.with(Cell::get);
    let result = f();
    let after = ALLOCATIONS.with(Cell::get);
    (result, after - before)
}

// ============================================================================
// Allocation Tests
// ============================================================================

/// Test that build allocates one buffer regardless of length.
#[test]
fn test_build_single_allocation() {
    for n in [1usize, 10, 1_000, 100_000] {
        let xs: Vec<i64> = (0..n as i64).collect();
        let ys: Vec<i64> = (0..n as i64).rev().collect();

        let (points, allocations) = count_allocations(|| FixedRecordArray::build(&xs, &ys));
        assert_eq!(allocations, 1, "n = {n}");
        assert_eq!(points.unwrap().len(), n);
    }
}

/// Test that an empty build does not allocate.
#[test]
fn test_build_empty_no_allocation() {
    let (points, allocations) = count_allocations(|| FixedRecordArray::<f64>::build(&[], &[]));

    assert_eq!(allocations, 0);
    assert!(points.unwrap().is_empty());
}

/// Test that a floating build also allocates once.
#[test]
fn test_build_float_single_allocation() {
    let xs: Vec<f64> = (0..50_000).map(|i| i as f64 * 0.5).collect();
    let ys = xs.clone();

    let (_, allocations) = count_allocations(|| FixedRecordArray::build(&xs, &ys));
    assert_eq!(allocations, 1);
}

/// Test that delta-add allocates exactly one new buffer.
#[test]
fn test_map_add_scalar_single_allocation() {
    let xs: Vec<f32> = (0..10_000).map(|i| i as f32).collect();
    let points = FixedRecordArray::build(&xs, &xs).unwrap();

    let (shifted, allocations) =
        count_allocations(|| points.map_add_scalar(Record::new(1.0, -1.0)));
    assert_eq!(allocations, 1);
    assert_eq!(shifted.len(), points.len());
}

/// Test that sum, get and replace do not allocate.
#[test]
fn test_read_operations_do_not_allocate() {
    let xs: Vec<i32> = (0..10_000).collect();
    let mut points = FixedRecordArray::build(&xs, &xs).unwrap();

    let (_, allocations) = count_allocations(|| {
        let total = points.sum();
        let first = points.get(0).unwrap();
        let _ = points.replace(1, first);
        total
    });
    assert_eq!(allocations, 0);
}
