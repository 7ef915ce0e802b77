//! Build page hierarchies from accepted decompositions
//!
//! A page becomes a constellation, each grid on it a supergroup, and each pattern
//! description applied to that grid a group of the accepted patterns. Container
//! weights are the mean weight of their members.

use crate::hierarchy::container::{Constellation, Group, SuperGroup};
use crate::spatial::Pattern;

fn mean_probability(weights: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = weights.fold((0.0, 0usize), |(sum, count), weight| {
        (sum + weight, count + 1)
    });
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Group the patterns accepted for one description
pub fn group_of(patterns: Vec<Pattern>) -> Group {
    let probability = mean_probability(patterns.iter().map(Pattern::probability));
    Group::new(patterns, probability)
}

/// Collect the groups found in one grid
pub fn super_group_of(groups: Vec<Group>) -> SuperGroup {
    let probability = mean_probability(groups.iter().map(Group::probability));
    SuperGroup::new(groups, probability)
}

/// Collect the supergroups of every grid on a page
pub fn constellation_of(super_groups: Vec<SuperGroup>) -> Constellation {
    let probability = mean_probability(super_groups.iter().map(SuperGroup::probability));
    Constellation::new(super_groups, probability)
}

/// Assemble a page from per-grid, per-description accepted patterns
///
/// The outer vector is indexed by grid, the middle one by description.
pub fn assemble_page(decompositions: Vec<Vec<Vec<Pattern>>>) -> Constellation {
    constellation_of(
        decompositions
            .into_iter()
            .map(|per_grid| super_group_of(per_grid.into_iter().map(group_of).collect()))
            .collect(),
    )
}
