//! Assembling candidate basic graph patterns out of accepted triples.

use crate::combination;
use crate::connectivity;
use crate::hypothesis::BasicGraphPattern;
use crate::triple::Triple;

/// Enumerate up to `max_groups` candidate patterns over `triples`.
///
/// The patterns are the first `max_groups` entries of
/// [`combination::generate`] read group by group: every combination starting
/// at index 0 first, then those starting at 1, and so on.
pub fn candidate_patterns(triples: &[Triple], max_groups: usize) -> Vec<BasicGraphPattern> {
    if max_groups == 0 || triples.is_empty() {
        return Vec::new();
    }

    combination::generate(triples.len())
        .iter()
        .flatten()
        .take(max_groups)
        .map(|entry| {
            BasicGraphPattern::new(
                combination::parse_indices(entry)
                    .into_iter()
                    .filter_map(|i| triples.get(i).cloned()),
            )
        })
        .collect()
}

/// Greedily grow a pattern of at most `size` triples, favouring triples that
/// share a subject with what has been selected so far.
pub fn assemble_connected_pattern(triples: &[Triple], size: usize) -> BasicGraphPattern {
    let mut remaining: Vec<&Triple> = triples.iter().collect();
    let mut selected: Vec<Triple> = Vec::new();

    while selected.len() < size && !remaining.is_empty() {
        let mut pick = 0usize;
        for i in 1..remaining.len() {
            let chosen = connectivity::choose(&selected, remaining[i], remaining[pick]);
            if std::ptr::eq(chosen, remaining[i]) {
                pick = i;
            }
        }
        let triple = remaining.remove(pick);
        if !selected.contains(triple) {
            selected.push(triple.clone());
        }
    }

    BasicGraphPattern::new(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triples() -> Vec<Triple> {
        vec![
            Triple::new("A", "p", "B"),
            Triple::new("X", "q", "Y"),
            Triple::new("A", "r", "C"),
            Triple::new("B", "s", "D"),
        ]
    }

    #[test]
    fn candidate_patterns_follow_combination_order() {
        let ts = triples();
        let patterns = candidate_patterns(&ts[..3], 100);
        assert_eq!(patterns.len(), 7);
        assert_eq!(patterns[0], BasicGraphPattern::new([ts[0].clone()]));
        assert_eq!(
            patterns[1],
            BasicGraphPattern::new([ts[0].clone(), ts[1].clone()])
        );
        assert_eq!(patterns[6], BasicGraphPattern::new([ts[2].clone()]));
    }

    #[test]
    fn candidate_patterns_respect_max_groups() {
        let ts = triples();
        assert_eq!(candidate_patterns(&ts, 5).len(), 5);
        assert!(candidate_patterns(&ts, 0).is_empty());
        assert!(candidate_patterns(&[], 10).is_empty());
    }

    #[test]
    fn truncated_candidates_are_a_prefix_of_the_full_order() {
        let ts = triples();
        let first_five: Vec<BasicGraphPattern> = combination::generate(ts.len())
            .iter()
            .flatten()
            .take(5)
            .map(|entry| {
                BasicGraphPattern::new(
                    combination::parse_indices(entry)
                        .into_iter()
                        .map(|i| ts[i].clone()),
                )
            })
            .collect();

        let patterns = candidate_patterns(&ts, 5);
        assert_eq!(patterns, first_five);
        assert_eq!(
            patterns[3],
            BasicGraphPattern::new([ts[0].clone(), ts[1].clone(), ts[2].clone()])
        );
        assert_eq!(patterns[4], BasicGraphPattern::new([ts[0].clone(), ts[3].clone()]));
    }

    #[test]
    fn assembly_prefers_shared_subjects() {
        let ts = triples();
        let bgp = assemble_connected_pattern(&ts, 2);
        assert_eq!(
            bgp,
            BasicGraphPattern::new([ts[0].clone(), ts[2].clone()])
        );
    }

    #[test]
    fn assembly_falls_back_to_input_order_when_disconnected() {
        let ts = triples();
        let bgp = assemble_connected_pattern(&ts, 3);
        assert_eq!(bgp.len(), 3);
        assert!(bgp.triples.contains(&ts[1]));
        assert!(!bgp.triples.contains(&ts[3]));
    }
}
