//! Approximate name matching against a reference vocabulary.
//!
//! Two independent rankings are offered for an unrecognized identifier:
//! [`rank`] orders vocabulary entries by edit distance, [`partial_match`]
//! orders entries that contain (or are contained in) the input. Both are
//! case-insensitive and ignore names shorter than [`MIN_NAME_LEN`].

use serde::Serialize;

/// Names shorter than this never produce candidates.
pub const MIN_NAME_LEN: usize = 3;

/// Maximum number of candidates returned by either ranking.
pub const MAX_CANDIDATES: usize = 5;

/// Default edit-distance cutoff for [`rank`].
pub const DEFAULT_MAX_DISTANCE: usize = 2;

/// A vocabulary entry close to the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// The vocabulary name, in its canonical spelling.
    pub name: String,
    /// Edit distance to the input (case-folded).
    pub distance: usize,
}

/// Levenshtein distance with unit insertion, deletion and substitution costs.
///
/// Compares characters, not bytes.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut dp = vec![vec![0; b.len() + 1]; a.len() + 1];

    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, val) in dp[0].iter_mut().enumerate() {
        *val = j;
    }

    for (i, a_char) in a.iter().enumerate() {
        for (j, b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            dp[i + 1][j + 1] = (dp[i][j + 1] + 1)
                .min(dp[i + 1][j] + 1)
                .min(dp[i][j] + cost);
        }
    }
    dp[a.len()][b.len()]
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Ranks vocabulary entries by edit distance to `input`.
///
/// Keeps entries with `0 < distance <= max_distance` when both the input and
/// the entry have at least [`MIN_NAME_LEN`] characters. Closest first; equal
/// distances keep vocabulary order. At most [`MAX_CANDIDATES`] are returned.
#[must_use]
pub fn rank<S: AsRef<str>>(input: &str, vocabulary: &[S], max_distance: usize) -> Vec<Candidate> {
    if char_len(input) < MIN_NAME_LEN {
        return Vec::new();
    }
    let needle = input.to_lowercase();

    let mut candidates: Vec<Candidate> = vocabulary
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|entry| char_len(entry) >= MIN_NAME_LEN)
        .filter_map(|entry| {
            let distance = levenshtein(&needle, &entry.to_lowercase());
            (distance > 0 && distance <= max_distance).then(|| Candidate {
                name: entry.to_string(),
                distance,
            })
        })
        .collect();

    candidates.sort_by_key(|c| c.distance);
    candidates.truncate(MAX_CANDIDATES);
    candidates
}

/// Ranks vocabulary entries that share a substring with `input`.
///
/// An entry qualifies when it contains the input or the input contains it
/// (case-insensitive). Entries containing the input rank first; within each
/// group shorter entries come first, then vocabulary order. At most
/// [`MAX_CANDIDATES`] are returned.
#[must_use]
pub fn partial_match<S: AsRef<str>>(input: &str, vocabulary: &[S]) -> Vec<String> {
    if char_len(input) < MIN_NAME_LEN {
        return Vec::new();
    }
    let needle = input.to_lowercase();

    let mut hits: Vec<(bool, usize, &str)> = vocabulary
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|entry| char_len(entry) >= MIN_NAME_LEN)
        .filter_map(|entry| {
            let folded = entry.to_lowercase();
            if folded.contains(&needle) {
                Some((false, char_len(entry), entry))
            } else if needle.contains(&folded) {
                Some((true, char_len(entry), entry))
            } else {
                None
            }
        })
        .collect();

    hits.sort_by_key(|&(looser, len, _)| (looser, len));
    hits.into_iter()
        .take(MAX_CANDIDATES)
        .map(|(_, _, entry)| entry.to_string())
        .collect()
}
