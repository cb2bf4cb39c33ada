//! Map, filter, reduce, comprehension and zip idioms over plain collections.

use std::collections::BTreeMap;
use std::hash::Hash;

use itertools::EitherOrBoth;
use itertools::Itertools;

use crate::error::{Error, Result};
use crate::mapping::OrderedMap;

//==============================================================================
// Map / filter / reduce
//==============================================================================

pub fn scale(values: &[i64], factor: i64) -> Result<Vec<i64>> {
    values
        .iter()
        .map(|value| value.checked_mul(factor).ok_or(Error::Overflow))
        .collect()
}

pub fn below(values: &[i64], limit: i64) -> Vec<i64> {
    values.iter().copied().filter(|&value| value < limit).collect()
}

/// Keeps values under `limit`, keyed by value with its decimal rendering.
pub fn label_below(values: &[i64], limit: i64) -> BTreeMap<i64, String> {
    values
        .iter()
        .filter(|&&value| value < limit)
        .map(|&value| (value, value.to_string()))
        .collect()
}

pub fn multiples_of(values: &[i64], divisor: i64) -> Result<Vec<i64>> {
    if divisor == 0 {
        return Err(Error::DivisionByZero);
    }
    let divisor = divisor.unsigned_abs();
    Ok(values
        .iter()
        .copied()
        .filter(|value| value.unsigned_abs() % divisor == 0)
        .collect())
}

/// Sum by reduction. `Ok(None)` for an empty slice.
pub fn total(values: &[i64]) -> Result<Option<i64>> {
    values
        .iter()
        .map(|&value| Ok(value))
        .reduce(|acc, value| acc?.checked_add(value?).ok_or(Error::Overflow))
        .transpose()
}

//==============================================================================
// Zipping
//==============================================================================

/// Pairs items positionally, stopping at the shorter input.
pub fn pair_up<A, B>(
    left: impl IntoIterator<Item = A>,
    right: impl IntoIterator<Item = B>,
) -> Vec<(A, B)> {
    left.into_iter().zip(right).collect()
}

pub fn unzip_pairs<A, B>(pairs: impl IntoIterator<Item = (A, B)>) -> (Vec<A>, Vec<B>) {
    pairs.into_iter().unzip()
}

/// Pairs items positionally, padding the shorter input with `fill`.
pub fn zip_longest<T: Clone>(
    left: impl IntoIterator<Item = T>,
    right: impl IntoIterator<Item = T>,
    fill: T,
) -> Vec<(T, T)> {
    left.into_iter()
        .zip_longest(right)
        .map(|pair| match pair {
            EitherOrBoth::Both(l, r) => (l, r),
            EitherOrBoth::Left(l) => (l, fill.clone()),
            EitherOrBoth::Right(r) => (fill.clone(), r),
        })
        .collect()
}

/// Zips the keys of two maps in their iteration order.
pub fn zip_keys<'a, K, V, W>(
    left: &'a OrderedMap<K, V>,
    right: &'a OrderedMap<K, W>,
) -> Vec<(&'a K, &'a K)>
where
    K: Eq + Hash,
{
    pair_up(left.keys(), right.keys())
}
