//! List algebra over dependency lists.
//!
//! Pure functions: inputs are untouched, outputs are new lists, input order
//! is always preserved. Identity is the canonical target string, so invalid
//! sentinels (empty target) deduplicate against each other like any other
//! target.

use std::collections::HashSet;

use super::DependencyTarget;

impl DependencyTarget {
    /// Keep only the valid entries, in their original order.
    pub fn filter_invalid(dependencies: &[DependencyTarget]) -> Vec<DependencyTarget> {
        dependencies
            .iter()
            .filter(|dependency| dependency.is_valid())
            .cloned()
            .collect()
    }

    /// Append to `existing` each element of `additional` whose target has not
    /// been seen yet, counting targets from `existing` and from earlier
    /// elements of `additional`. First seen wins; nothing from `existing` is
    /// dropped or reordered.
    pub fn merge_unique(
        existing: &[DependencyTarget],
        additional: &[DependencyTarget],
    ) -> Vec<DependencyTarget> {
        let mut seen: HashSet<String> = existing
            .iter()
            .map(DependencyTarget::target)
            .collect();

        let mut merged = existing.to_vec();

        for dependency in additional {
            if seen.insert(dependency.target()) {
                merged.push(dependency.clone());
            }
        }

        merged
    }

    /// The elements of `left`, in order, whose target does not appear in
    /// `right`.
    pub fn diff(
        left: &[DependencyTarget],
        right: &[DependencyTarget],
    ) -> Vec<DependencyTarget> {
        if right.is_empty() {
            return left.to_vec();
        }

        if left.is_empty() {
            return Vec::new();
        }

        let right_targets: HashSet<String> = right
            .iter()
            .map(DependencyTarget::target)
            .collect();

        left.iter()
            .filter(|dependency| !right_targets.contains(&dependency.target()))
            .cloned()
            .collect()
    }
}
