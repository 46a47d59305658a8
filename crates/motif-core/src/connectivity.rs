//! Subject-sharing heuristic for growing connected graph patterns.

use crate::triple::Triple;

/// Pick between `incumbent` and `candidate` given the already-selected patterns.
///
/// Rules, in order:
/// 1. keep `incumbent` if it shares a subject with a selected pattern;
/// 2. otherwise take `candidate` if it shares a subject with a selected pattern;
/// 3. otherwise keep `incumbent`.
pub fn choose<'a, I>(selected: I, candidate: &'a Triple, incumbent: &'a Triple) -> &'a Triple
where
    I: IntoIterator<Item = &'a Triple>,
    I::IntoIter: Clone,
{
    let selected = selected.into_iter();
    if selected.clone().any(|t| t.shares_subject_with(incumbent)) {
        return incumbent;
    }
    if selected.into_iter().any(|t| t.shares_subject_with(candidate)) {
        return candidate;
    }
    incumbent
}

/// Whether `triple` joins `selected` through a shared subject.
pub fn is_connected<'a, I>(selected: I, triple: &Triple) -> bool
where
    I: IntoIterator<Item = &'a Triple>,
{
    selected.into_iter().any(|t| t.shares_subject_with(triple))
}
