// Step snapshots recorded while an algorithm runs

use std::ops::Range;

/// Search-only annotations carried by a [`Step`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub current_index: Option<usize>,
    pub found: bool,
    pub found_index: Option<usize>,
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub mid: Option<usize>,
    pub complete: bool,
}

/// Display role of a single index, already resolved by precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Sorted,
    Swapping,
    Comparing,
    Pivot,
    Found,
    Mid,
    Excluded,
    Default,
}

/// Snapshot of algorithm state after one action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    pub array: Vec<i64>,
    pub description: String,
    pub code: String,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    pub sorted: Vec<usize>,
    pub pivot: Option<usize>,
    /// Inclusive sub-range being divided, merged or partitioned
    pub active_range: Option<(usize, usize)>,
    /// Per-digit counts for radix counting steps
    pub buckets: Option<Vec<usize>>,
    /// Radix output buffer; `None` slots are not yet filled
    pub staging: Option<Vec<Option<i64>>>,
    pub search: Option<SearchState>,
}

impl Step {
    pub fn new(array: &[i64], description: impl Into<String>, code: impl Into<String>) -> Self {
        Step {
            array: array.to_vec(),
            description: description.into(),
            code: code.into(),
            ..Step::default()
        }
    }

    pub fn comparing(mut self, indices: &[usize]) -> Self {
        self.comparing = indices.to_vec();
        self
    }

    pub fn swapping(mut self, indices: &[usize]) -> Self {
        self.swapping = indices.to_vec();
        self
    }

    pub fn sorted(mut self, range: Range<usize>) -> Self {
        self.sorted = range.collect();
        self
    }

    pub fn pivot(mut self, index: usize) -> Self {
        self.pivot = Some(index);
        self
    }

    pub fn range(mut self, low: usize, high: usize) -> Self {
        self.active_range = Some((low, high));
        self
    }

    pub fn buckets(mut self, counts: &[usize]) -> Self {
        self.buckets = Some(counts.to_vec());
        self
    }

    pub fn staging(mut self, buffer: &[Option<i64>]) -> Self {
        self.staging = Some(buffer.to_vec());
        self
    }

    pub fn search(mut self, state: SearchState) -> Self {
        self.search = Some(state);
        self
    }

    /// Whether this step is the terminal step of a search trace
    pub fn is_search_complete(&self) -> bool {
        self.search.as_ref().is_some_and(|s| s.complete)
    }

    /// Resolve the display role of `index`.
    ///
    /// Sorting roles win over search roles, and within each group the order is
    /// fixed: sorted, swapping, comparing, pivot, then found, mid, excluded.
    pub fn role_of(&self, index: usize) -> Role {
        if self.sorted.contains(&index) {
            return Role::Sorted;
        }
        if self.swapping.contains(&index) {
            return Role::Swapping;
        }
        if self.comparing.contains(&index) {
            return Role::Comparing;
        }
        if self.pivot == Some(index) {
            return Role::Pivot;
        }

        if let Some(search) = &self.search {
            if search.found && search.found_index == Some(index) {
                return Role::Found;
            }
            if search.mid == Some(index) {
                return Role::Mid;
            }
            if let (Some(left), Some(right)) = (search.left, search.right) {
                if index < left || index > right {
                    return Role::Excluded;
                }
            }
        }

        Role::Default
    }

    /// Estimate the memory usage of this step in bytes
    pub fn estimated_size(&self) -> usize {
        let numbers = self.array.len() * std::mem::size_of::<i64>();
        let roles = (self.comparing.len() + self.swapping.len() + self.sorted.len())
            * std::mem::size_of::<usize>();
        let staging = self
            .staging
            .as_ref()
            .map_or(0, |s| s.len() * std::mem::size_of::<Option<i64>>());
        let buckets = self
            .buckets
            .as_ref()
            .map_or(0, |b| b.len() * std::mem::size_of::<usize>());

        std::mem::size_of::<Step>()
            + numbers
            + roles
            + staging
            + buckets
            + self.description.len()
            + self.code.len()
    }
}

/// Ordered trace produced by one generator run
///
/// Steps are only appended while the generator runs; callers receive the
/// finished sequence and can only read from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepSequence {
    steps: Vec<Step>,
}

impl StepSequence {
    pub fn new() -> Self {
        StepSequence { steps: Vec::new() }
    }

    /// Add a step to the end of the trace
    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Rough memory footprint of every stored snapshot
    pub fn estimated_size(&self) -> usize {
        self.steps.iter().map(Step::estimated_size).sum()
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_wins_over_every_other_role() {
        let step = Step::new(&[3, 1, 2], "", "")
            .sorted(0..3)
            .swapping(&[0, 1])
            .comparing(&[1, 2])
            .pivot(2);

        assert_eq!(step.role_of(0), Role::Sorted);
        assert_eq!(step.role_of(1), Role::Sorted);
        assert_eq!(step.role_of(2), Role::Sorted);
    }

    #[test]
    fn swapping_beats_comparing_beats_pivot() {
        let step = Step::new(&[3, 1, 2, 4], "", "")
            .swapping(&[0])
            .comparing(&[0, 1])
            .pivot(1);

        assert_eq!(step.role_of(0), Role::Swapping);
        assert_eq!(step.role_of(1), Role::Comparing);
        assert_eq!(step.role_of(3), Role::Default);

        let pivot_only = Step::new(&[3, 1, 2, 4], "", "").pivot(3);
        assert_eq!(pivot_only.role_of(3), Role::Pivot);
    }

    #[test]
    fn search_roles_resolve_bounds() {
        let step = Step::new(&[1, 2, 3, 4, 5], "", "").search(SearchState {
            left: Some(1),
            right: Some(3),
            mid: Some(2),
            ..SearchState::default()
        });

        assert_eq!(step.role_of(0), Role::Excluded);
        assert_eq!(step.role_of(1), Role::Default);
        assert_eq!(step.role_of(2), Role::Mid);
        assert_eq!(step.role_of(4), Role::Excluded);
    }
}
