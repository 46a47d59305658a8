//! Prefix-growing index combinations.
//!
//! Group `i` holds every combination whose smallest index is `i`, built by
//! extending each combination generated so far with each newer index. Entries
//! are space-joined index strings (`"0 2 3"`).

/// Generation stops once more than this many entries exist across all groups.
pub const MAX_COMBINATIONS: usize = 1_000_000;

pub type CombinationFamily = Vec<Vec<String>>;

/// Generate the combination family for `n` indices.
///
/// The result is truncated (but still well-formed) once the total entry count
/// exceeds [`MAX_COMBINATIONS`].
pub fn generate(n: usize) -> CombinationFamily {
    generate_capped(n, MAX_COMBINATIONS)
}

pub fn generate_capped(n: usize, cap: usize) -> CombinationFamily {
    let mut groups: CombinationFamily = Vec::with_capacity(n);
    let mut total = 0usize;

    for i in 0..n {
        groups.push(vec![i.to_string()]);
        total += 1;
        if total > cap {
            return groups;
        }

        let suffix = format!(" {i}");
        for group in groups.iter_mut().take(i) {
            let existing = group.len();
            for k in 0..existing {
                let extended = format!("{}{suffix}", group[k]);
                group.push(extended);
                total += 1;
                if total > cap {
                    return groups;
                }
            }
        }
    }

    groups
}

/// Parse a combination entry back into indices.
///
/// Tokens that are not indices are skipped.
pub fn parse_indices(entry: &str) -> Vec<usize> {
    entry
        .split_whitespace()
        .filter_map(|tok| tok.parse().ok())
        .collect()
}

pub fn total_len(family: &CombinationFamily) -> usize {
    family.iter().map(Vec::len).sum()
}
