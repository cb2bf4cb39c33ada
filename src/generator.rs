//! Generator-style sequences.
//!
//! Each value is computed only when the consumer pulls it, and the state
//! between pulls lives in the closure captured by `iter::from_fn`.

use std::iter;

/// Lazily yields `1..=maximum`. Consumed once, unlike
/// [`crate::counter::BoundedCounter`].
pub fn count_up_to(maximum: u64) -> impl Iterator<Item = u64> {
    let mut count = Some(1u64);
    iter::from_fn(move || {
        let value = count.filter(|&c| c <= maximum)?;
        log::trace!("count_up_to yielding {value}");
        count = value.checked_add(1);
        Some(value)
    })
}

/// Yields `start, start + 1, ..., end - 1`.
pub fn span(start: i64, end: i64) -> impl Iterator<Item = i64> {
    let mut next = start;
    iter::from_fn(move || {
        if next >= end {
            return None;
        }
        let value = next;
        next += 1;
        Some(value)
    })
}
