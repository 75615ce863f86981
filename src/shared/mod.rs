pub(crate) mod fuzzy;
pub mod length;
pub mod money;

pub use length::*;
pub use money::*;

use rayon::prelude::*;
use std::cmp::Ordering;

const MIN_SEARCH_SCORE: f64 = 0.5;

/// Anything that can be found by name through [`search`].
pub trait Identifiable {
    fn normalized_name(&self) -> &str;
}

/// Generic fuzzy search function built for multithreaded searching.
/// Results are ranked best first, ties keep haystack order.
pub fn search<'a, T>(needle: &str, haystack: &'a [T]) -> Vec<&'a T>
where
    T: Send + Sync + Identifiable,
{
    let normalized_needle = normalize(needle);
    let mut results: Vec<(&T, f64)> = haystack
        .par_iter()
        .filter_map(|hay| {
            let score = fuzzy::score(&normalized_needle, hay.normalized_name());
            if score >= MIN_SEARCH_SCORE {
                Some((hay, score))
            } else {
                None
            }
        })
        .collect();

    results.par_sort_by(|(_, a): &(_, f64), (_, b): &(_, f64)| {
        b.partial_cmp(a).unwrap_or(Ordering::Equal)
    });
    results.into_iter().map(|(entity, _)| entity).collect()
}

/// Lowercased, whitespace collapsed form used for matching.
pub fn normalize(value: &str) -> String {
    value
        .split_whitespace()
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}
