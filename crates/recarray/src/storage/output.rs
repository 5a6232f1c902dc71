//! Human-readable output for record arrays.
//!
//! ## Purpose
//!
//! This module implements `Display` for `FixedRecordArray`, printing a short
//! summary followed by an indexed table of records.
//!
//! ## Design notes
//!
//! * Arrays longer than 20 records show the first and last 10 rows with an
//!   ellipsis in between.
//! * The sum shown in the summary is the forward (index-order) sum.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::kind::Kind;
use crate::storage::array::FixedRecordArray;

impl<K: Kind> Display for FixedRecordArray<K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Kind:    {}", K::NAME)?;
        writeln!(f, "  Records: {}", self.len())?;
        writeln!(f, "  Sum:     {}", self.sum())?;
        writeln!(f)?;

        writeln!(f, "Records:")?;
        writeln!(f, "{:>8} {:>16} {:>16}", "Index", "X", "Y")?;
        writeln!(f, "{:-<width$}", "", width = 42)?;

        let n = self.len();
        let records = self.as_slice();
        let mut prev_idx = 0;
        let rows = (0..n).filter(|&i| n <= 20 || i < 10 || i >= n - 10);
        for (row, idx) in rows.enumerate() {
            if row > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            let record = records[idx];
            writeln!(f, "{:>8} {:>16} {:>16}", idx, record.x(), record.y())?;
        }

        Ok(())
    }
}
