//! Descriptive statistics over columns of values.
use indexmap::IndexMap;
use itertools::Itertools;
use std::hash::Hash;

/// Count how often each distinct value occurs.
///
/// The result is sorted by descending count. Values with equal counts appear in the order in which
/// they were first encountered.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts: IndexMap<T, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    // NB: sort is stable, so ties keep insertion order
    counts
        .into_iter()
        .sorted_by(|(_, a), (_, b)| b.cmp(a))
        .collect()
}

/// The most frequently occurring value, or `None` if there are no values.
///
/// Ties are broken in favour of the value which was encountered first.
pub fn mode<T, I>(values: I) -> Option<T>
where
    T: Eq + Hash,
    I: IntoIterator<Item = T>,
{
    value_counts(values)
        .into_iter()
        .next()
        .map(|(value, _)| value)
}

/// The sum and arithmetic mean of some values, or `None` if there are no values
#[allow(clippy::cast_precision_loss)]
pub fn sum_and_mean<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    (count > 0).then(|| (sum, sum / count as f64))
}
