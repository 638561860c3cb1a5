//! Approximate-match ranking for unknown names
//!
//! Shared by the resolver (unknown type names) and the binder (unknown
//! path segments). Candidates are ranked by ascending Levenshtein
//! distance to the input; ties break to the shorter name, then lexical
//! order.

use itertools::Itertools;

/// Levenshtein edit distance, two-row dynamic programming.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = usize::from(ca != cb);
            current[j + 1] = (previous[j] + substitution)
                .min(previous[j + 1] + 1)
                .min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

/// Rank `candidates` by closeness to `input`, returning at most `limit`.
///
/// Matching is case-insensitive. Duplicate candidates (an alias shadowing
/// its canonical name, for instance) are collapsed to their best-ranked
/// occurrence.
#[must_use]
pub fn rank_candidates<'a>(
    input: &str,
    candidates: impl IntoIterator<Item = &'a str>,
    limit: usize,
) -> Vec<String> {
    let needle = input.to_ascii_lowercase();
    candidates
        .into_iter()
        .map(|candidate| {
            (
                levenshtein(&needle, &candidate.to_ascii_lowercase()),
                candidate,
            )
        })
        .sorted_by(|(da, a), (db, b)| {
            da.cmp(db)
                .then_with(|| a.len().cmp(&b.len()))
                .then_with(|| a.cmp(b))
        })
        .unique_by(|(_, candidate)| *candidate)
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
