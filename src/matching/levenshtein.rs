//! Levenshtein distance calculation for fuzzy keyword matching.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one word into another.
/// Characters are compared as `char`s, so accented letters count as single
/// units and "payé"/"payer" differ by one substitution.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    // Use only two rows for space optimization
    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for i in 1..=len1 {
        curr_row[0] = i;

        for j in 1..=len2 {
            let cost = if s1_chars[i - 1] == s2_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = min(
                min(
                    prev_row[j] + 1,     // deletion
                    curr_row[j - 1] + 1, // insertion
                ),
                prev_row[j - 1] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Calculate the normalized Levenshtein distance as a ratio in [0.0, 1.0].
/// 0.0 means identical strings, 1.0 means completely different. The distance
/// is divided by the character length of the longer string; two empty strings
/// are identical.
pub fn normalized_distance(s1: &str, s2: &str) -> f64 {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();
    let max_len = len1.max(len2);

    if max_len == 0 {
        return 0.0;
    }

    levenshtein_distance(s1, s2) as f64 / max_len as f64
}
