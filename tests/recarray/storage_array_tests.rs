//! Tests for the contiguous record array.
//!
//! These tests verify `FixedRecordArray` for:
//! - Construction from columns and shape errors
//! - Indexed access and index errors
//! - Index-order summation and the empty-array identity
//! - Functional delta-add and slot replacement
//!
//! ## Test Organization
//!
//! 1. **Construction** - build, from_records, FromIterator
//! 2. **Access** - len, get, iteration, columns
//! 3. **Summation** - sum on integer and floating kinds
//! 4. **Updates** - map_add_scalar, replace
//! 5. **Display** - summary and table output

use std::mem::size_of;

use approx::assert_relative_eq;
use recarray::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn sample_i64() -> FixedRecordArray<i64> {
    FixedRecordArray::build(&[1, 2, 3], &[4, 5, 6]).unwrap()
}

// ============================================================================
// Construction Tests
// ============================================================================

/// Test the canonical three-record integer example.
#[test]
fn test_build_canonical_example() {
    let points = sample_i64();

    assert_eq!(points.len(), 3);
    assert_eq!(points.get(1).unwrap(), Record::new(2, 5));
    assert_eq!(points.sum(), Record::new(6, 15));
}

/// Test that every element equals the record made from the same column index.
#[test]
fn test_build_elementwise() {
    let xs = [0.5f64, -1.25, 3.0, 1e300];
    let ys = [2.0f64, 0.0, -0.0, f64::INFINITY];
    let points = FixedRecordArray::build(&xs, &ys).unwrap();

    assert_eq!(points.len(), xs.len());
    for i in 0..xs.len() {
        assert_eq!(points.get(i).unwrap(), Record::new(xs[i], ys[i]));
    }
}

/// Test that mismatched column lengths produce a shape error.
#[test]
fn test_build_shape_mismatch() {
    let res = FixedRecordArray::build(&[1i32, 2, 3], &[4, 5]);

    assert_eq!(res, Err(RecordError::Shape { x_len: 3, y_len: 2 }));
}

/// Test that an empty column is a mismatch when the other is not.
#[test]
fn test_build_shape_mismatch_empty_side() {
    let res = FixedRecordArray::<f32>::build(&[], &[1.0]);

    assert!(matches!(res, Err(RecordError::Shape { x_len: 0, y_len: 1 })));
}

/// Test building from empty columns.
#[test]
fn test_build_empty() {
    let points = FixedRecordArray::<i64>::build(&[], &[]).unwrap();

    assert_eq!(points.len(), 0);
    assert!(points.is_empty());
    assert!(points.as_slice().is_empty());
}

/// Test construction from records and via `collect`.
#[test]
fn test_from_records_and_collect() {
    let records = vec![Record::new(1i64, 4), Record::new(2, 5), Record::new(3, 6)];
    let from_vec = FixedRecordArray::from_records(records.clone());
    let collected: FixedRecordArray<i64> = records.into_iter().collect();

    assert_eq!(from_vec, sample_i64());
    assert_eq!(collected, sample_i64());
}

// ============================================================================
// Access Tests
// ============================================================================

/// Test out-of-range access at and beyond the length.
#[test]
fn test_get_out_of_range() {
    let points = sample_i64();

    assert_eq!(points.get(3), Err(RecordError::Index { index: 3, len: 3 }));
    assert_eq!(
        points.get(usize::MAX),
        Err(RecordError::Index {
            index: usize::MAX,
            len: 3
        })
    );
}

/// Test that any index on an empty array is out of range.
#[test]
fn test_get_on_empty() {
    let points = FixedRecordArray::<f64>::build(&[], &[]).unwrap();

    assert!(matches!(points.get(0), Err(RecordError::Index { .. })));
}

/// Test iteration order and column round trip.
#[test]
fn test_iter_and_columns() {
    let points = sample_i64();

    let xs: Vec<i64> = points.iter().map(|r| r.x()).collect();
    assert_eq!(xs, vec![1, 2, 3]);

    let (xs, ys) = points.to_columns();
    assert_eq!(xs, vec![1, 2, 3]);
    assert_eq!(ys, vec![4, 5, 6]);

    let owned: Vec<Record<i64>> = points.into_iter().collect();
    assert_eq!(owned[2], Record::new(3, 6));
}

/// Test that storage is inline: the slice stride is exactly one record.
#[test]
fn test_storage_is_contiguous() {
    let points = FixedRecordArray::build(&[1.0f64, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
    let slice = points.as_slice();

    let base = slice.as_ptr() as usize;
    for (i, record) in slice.iter().enumerate() {
        let addr = record as *const Record<f64> as usize;
        assert_eq!(addr - base, i * size_of::<Record<f64>>());
    }
    assert_eq!(size_of::<Record<f64>>(), 2 * size_of::<f64>());
}

// ============================================================================
// Summation Tests
// ============================================================================

/// Test that summing an empty array yields the zero record.
#[test]
fn test_sum_empty_is_zero() {
    let ints = FixedRecordArray::<i32>::build(&[], &[]).unwrap();
    let floats = FixedRecordArray::<f64>::build(&[], &[]).unwrap();

    assert_eq!(ints.sum(), Record::zero());
    assert_eq!(floats.sum(), Record::zero());
}

/// Test summation over a floating kind.
#[test]
fn test_sum_float() {
    let points = FixedRecordArray::build(&[0.5f64, 1.5, 2.0], &[0.25, 0.25, 0.5]).unwrap();
    let total = points.sum();

    assert_relative_eq!(total.x(), 4.0);
    assert_relative_eq!(total.y(), 1.0);
}

/// Test that the index-order sum matches a hand-written left fold exactly.
#[test]
fn test_sum_matches_reference_fold() {
    let xs: Vec<f64> = (0..1000).map(|i| (i as f64).sin() * 1e3).collect();
    let ys: Vec<f64> = (0..1000).map(|i| 1.0 / (i as f64 + 1.0)).collect();
    let points = FixedRecordArray::build(&xs, &ys).unwrap();

    let mut rx = 0.0f64;
    let mut ry = 0.0f64;
    for i in 0..xs.len() {
        rx += xs[i];
        ry += ys[i];
    }

    let total = points.sum();
    assert_eq!(total.x().to_bits(), rx.to_bits());
    assert_eq!(total.y().to_bits(), ry.to_bits());
}

/// Test that repeated sums are bit-identical.
#[test]
fn test_sum_float_deterministic() {
    let xs: Vec<f64> = (0..5000).map(|i| 0.1 * i as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.sqrt()).collect();
    let points = FixedRecordArray::build(&xs, &ys).unwrap();

    let first = points.sum();
    for _ in 0..5 {
        assert!(points.sum().bit_eq(&first));
    }
}

/// Test that integer sums wrap instead of panicking.
#[test]
fn test_sum_integer_wraps() {
    let points = FixedRecordArray::build(&[i64::MAX, 1], &[i64::MIN, -1]).unwrap();

    assert_eq!(points.sum(), Record::new(i64::MIN, i64::MAX));
}

/// Test that NaN propagates through a floating sum.
#[test]
fn test_sum_nan_propagates() {
    let points = FixedRecordArray::build(&[1.0f32, f32::NAN], &[1.0, 2.0]).unwrap();
    let total = points.sum();

    assert!(total.x().is_nan());
    assert_eq!(total.y(), 3.0);
}

// ============================================================================
// Update Tests
// ============================================================================

/// Test that delta-add produces a new array and leaves the source untouched.
#[test]
fn test_map_add_scalar() {
    let points = sample_i64();
    let shifted = points.map_add_scalar(Record::new(10, -4));

    assert_eq!(shifted.len(), 3);
    assert_eq!(shifted.get(0).unwrap(), Record::new(11, 0));
    assert_eq!(shifted.get(2).unwrap(), Record::new(13, 2));
    assert_eq!(points, sample_i64());
    assert_ne!(shifted.as_slice().as_ptr(), points.as_slice().as_ptr());
}

/// Test delta-add on an empty array.
#[test]
fn test_map_add_scalar_empty() {
    let points = FixedRecordArray::<f64>::build(&[], &[]).unwrap();

    assert!(points.map_add_scalar(Record::new(1.0, 1.0)).is_empty());
}

/// Test that delta-add with zero is the identity.
#[test]
fn test_map_add_scalar_zero() {
    let points = FixedRecordArray::build(&[1.5f64, -2.5], &[0.0, 7.0]).unwrap();

    assert_eq!(points.map_add_scalar(Record::zero()), points);
}

/// Test slot replacement.
#[test]
fn test_replace_slot() {
    let mut points = sample_i64();
    let old = points.replace(1, Record::new(20, 50)).unwrap();

    assert_eq!(old, Record::new(2, 5));
    assert_eq!(points.get(1).unwrap(), Record::new(20, 50));
    assert_eq!(points.len(), 3);
    assert_eq!(points.sum(), Record::new(24, 60));
}

/// Test slot replacement out of range.
#[test]
fn test_replace_out_of_range() {
    let mut points = sample_i64();
    let res = points.replace(5, Record::zero());

    assert_eq!(res, Err(RecordError::Index { index: 5, len: 3 }));
    assert_eq!(points, sample_i64());
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary and table output.
#[test]
fn test_display_summary() {
    let text = sample_i64().to_string();

    assert!(text.contains("Kind:    i64"));
    assert!(text.contains("Records: 3"));
    assert!(text.contains("Sum:     (6, 15)"));
    assert!(!text.contains("..."));
}

/// Test that long arrays are elided in the middle.
#[test]
fn test_display_elides_long_arrays() {
    let xs: Vec<i32> = (0..50).collect();
    let text = FixedRecordArray::build(&xs, &xs).unwrap().to_string();

    assert!(text.contains("..."));
    assert!(text.contains("      49"));
}
