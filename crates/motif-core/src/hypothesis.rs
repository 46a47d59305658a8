//! Hypotheses: basic graph patterns, scored search states and the best-first
//! frontier over them.
//!
//! Scores are computed elsewhere; this module only fixes how scored states are
//! ordered. States compare by `information`, then by `coverage`, using
//! IEEE total ordering so NaN scores still sort deterministically.

use crate::triple::Triple;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap, HashSet};

/// A set of triples treated as one candidate query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicGraphPattern {
    pub triples: HashSet<Triple>,
    pub information_gain: f64,
}

impl BasicGraphPattern {
    pub fn new<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
    {
        Self {
            triples: triples.into_iter().collect(),
            information_gain: 0.0,
        }
    }

    pub fn with_information_gain(mut self, gain: f64) -> Self {
        self.information_gain = gain;
        self
    }

    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Distinct canonical subjects in the pattern.
    pub fn subjects(&self) -> HashSet<String> {
        self.triples.iter().map(Triple::canonical_subject).collect()
    }
}

/// One labeled example binding (`?x -> value`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledBinding {
    pub is_positive: bool,
    pub var_to_value: BTreeMap<String, String>,
}

impl LabeledBinding {
    pub fn positive(var_to_value: BTreeMap<String, String>) -> Self {
        Self {
            is_positive: true,
            var_to_value,
        }
    }

    pub fn negative(var_to_value: BTreeMap<String, String>) -> Self {
        Self {
            is_positive: false,
            var_to_value,
        }
    }
}

/// One node of a best-first hypothesis search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchState {
    pub information: f64,
    pub coverage: f64,
    pub pattern: BasicGraphPattern,
    pub labeled_bindings: Vec<LabeledBinding>,
}

impl SearchState {
    pub fn new(
        information: f64,
        coverage: f64,
        pattern: BasicGraphPattern,
        labeled_bindings: Vec<LabeledBinding>,
    ) -> Self {
        Self {
            information,
            coverage,
            pattern,
            labeled_bindings,
        }
    }

    /// A re-scored copy; states already queued are never mutated.
    pub fn rescored(&self, information: f64, coverage: f64) -> Self {
        Self {
            information,
            coverage,
            ..self.clone()
        }
    }

    pub fn positives(&self) -> impl Iterator<Item = &LabeledBinding> {
        self.labeled_bindings.iter().filter(|b| b.is_positive)
    }

    pub fn negatives(&self) -> impl Iterator<Item = &LabeledBinding> {
        self.labeled_bindings.iter().filter(|b| !b.is_positive)
    }
}

// Equality follows the ordering key only.
impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchState {}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        self.information
            .total_cmp(&other.information)
            .then_with(|| self.coverage.total_cmp(&other.coverage))
    }
}

/// Which end of the `information` scale is explored first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPolicy {
    #[default]
    MaximizeInformation,
    MinimizeInformation,
}

/// Key wrapper so ties on `information` always prefer higher coverage.
#[derive(Debug)]
struct MinInformation(SearchState);

impl PartialEq for MinInformation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MinInformation {}

impl PartialOrd for MinInformation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MinInformation {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .information
            .total_cmp(&self.0.information)
            .then_with(|| self.0.coverage.total_cmp(&other.0.coverage))
    }
}

#[derive(Debug)]
enum Heap {
    Max(BinaryHeap<SearchState>),
    Min(BinaryHeap<MinInformation>),
}

/// Priority-ordered frontier of search states.
#[derive(Debug)]
pub struct HypothesisFrontier {
    heap: Heap,
}

impl HypothesisFrontier {
    pub fn new(policy: SearchPolicy) -> Self {
        let heap = match policy {
            SearchPolicy::MaximizeInformation => Heap::Max(BinaryHeap::new()),
            SearchPolicy::MinimizeInformation => Heap::Min(BinaryHeap::new()),
        };
        Self { heap }
    }

    pub fn policy(&self) -> SearchPolicy {
        match self.heap {
            Heap::Max(_) => SearchPolicy::MaximizeInformation,
            Heap::Min(_) => SearchPolicy::MinimizeInformation,
        }
    }

    pub fn push(&mut self, state: SearchState) {
        match &mut self.heap {
            Heap::Max(h) => h.push(state),
            Heap::Min(h) => h.push(MinInformation(state)),
        }
    }

    pub fn pop(&mut self) -> Option<SearchState> {
        match &mut self.heap {
            Heap::Max(h) => h.pop(),
            Heap::Min(h) => h.pop().map(|s| s.0),
        }
    }

    pub fn peek(&self) -> Option<&SearchState> {
        match &self.heap {
            Heap::Max(h) => h.peek(),
            Heap::Min(h) => h.peek().map(|s| &s.0),
        }
    }

    pub fn len(&self) -> usize {
        match &self.heap {
            Heap::Max(h) => h.len(),
            Heap::Min(h) => h.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Extend<SearchState> for HypothesisFrontier {
    fn extend<I: IntoIterator<Item = SearchState>>(&mut self, iter: I) {
        for state in iter {
            self.push(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(information: f64, coverage: f64) -> SearchState {
        SearchState::new(information, coverage, BasicGraphPattern::default(), Vec::new())
    }

    fn drain(frontier: &mut HypothesisFrontier) -> Vec<(f64, f64)> {
        std::iter::from_fn(|| frontier.pop())
            .map(|s| (s.information, s.coverage))
            .collect()
    }

    #[test]
    fn states_order_by_information_then_coverage() {
        assert!(state(0.2, 0.0) > state(0.1, 0.9));
        assert!(state(0.2, 0.5) > state(0.2, 0.4));
        assert_eq!(state(0.2, 0.5), state(0.2, 0.5));
    }

    #[test]
    fn maximizing_frontier_pops_highest_information_first() {
        let mut frontier = HypothesisFrontier::new(SearchPolicy::MaximizeInformation);
        frontier.extend([state(0.1, 0.5), state(0.7, 0.1), state(0.7, 0.9), state(0.3, 0.3)]);
        assert_eq!(frontier.peek().map(|s| s.coverage), Some(0.9));
        assert_eq!(
            drain(&mut frontier),
            vec![(0.7, 0.9), (0.7, 0.1), (0.3, 0.3), (0.1, 0.5)]
        );
    }

    #[test]
    fn minimizing_frontier_still_prefers_higher_coverage_on_ties() {
        let mut frontier = HypothesisFrontier::new(SearchPolicy::MinimizeInformation);
        frontier.extend([state(0.1, 0.2), state(0.7, 0.1), state(0.1, 0.8), state(-0.5, 0.0)]);
        assert_eq!(frontier.len(), 4);
        assert_eq!(
            drain(&mut frontier),
            vec![(-0.5, 0.0), (0.1, 0.8), (0.1, 0.2), (0.7, 0.1)]
        );
        assert!(frontier.is_empty());
    }

    #[test]
    fn rescoring_produces_a_new_state() {
        let original = state(0.1, 0.1);
        let rescored = original.rescored(0.4, 0.6);
        assert_eq!(original.information, 0.1);
        assert_eq!(rescored.information, 0.4);
        assert_eq!(rescored.coverage, 0.6);
    }

    #[test]
    fn bindings_split_by_label() {
        let binding = |v: &str| BTreeMap::from([("x".to_string(), v.to_string())]);
        let s = SearchState::new(
            0.0,
            0.0,
            BasicGraphPattern::default(),
            vec![
                LabeledBinding::positive(binding("a")),
                LabeledBinding::negative(binding("b")),
                LabeledBinding::positive(binding("c")),
            ],
        );
        assert_eq!(s.positives().count(), 2);
        assert_eq!(s.negatives().count(), 1);
    }

    #[test]
    fn pattern_collapses_canonically_equal_triples() {
        let mut bgp = BasicGraphPattern::new([Triple::new("<a>", "p", "b")]);
        assert!(!bgp.insert(Triple::new("a", "p", "'b'")));
        assert!(bgp.insert(Triple::new("c", "p", "b")));
        assert_eq!(bgp.len(), 2);
        assert_eq!(bgp.subjects().len(), 2);
    }
}
