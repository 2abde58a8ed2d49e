//! In-place exchange sort over a record store
//!
//! The sort compares every position with every later position and swaps the
//! two records whenever the earlier one's field is greater. It is O(n²) and
//! NOT stable: records with equal fields may end up in a different relative
//! order than they were appended in.

use crate::core::record_store::RecordStore;

/// Result of a sort request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// The store was reordered (possibly into the same order)
    Sorted,
    /// The store holds fewer than two records
    NothingToSort,
}

/// Sort `store` ascending by a text field, compared byte-wise
///
/// # Arguments
///
/// * `store` - The store to reorder in place
/// * `field` - Extracts the text field to compare
pub fn exchange_sort_by<R, F>(store: &mut RecordStore<R>, field: F) -> SortOutcome
where
    F: Fn(&R) -> &str,
{
    if store.len() < 2 {
        return SortOutcome::NothingToSort;
    }

    let records = store.as_mut_slice();
    for i in 0..records.len() - 1 {
        for j in i + 1..records.len() {
            if field(&records[i]).as_bytes() > field(&records[j]).as_bytes() {
                records.swap(i, j);
            }
        }
    }

    SortOutcome::Sorted
}
