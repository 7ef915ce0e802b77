//! Connected-component segregation of a pattern under a neighbor rule

use bitvec::prelude::*;
use tracing::debug;

use crate::spatial::{Cell, Pattern};
use crate::transform::neighbors::{NeighborRule, eight_neighbors};

/// Splits a pattern into maximal connected sub-patterns
///
/// Connectivity is coordinate-only: two member cells are connected if the rule
/// proposes one from the other, whatever their colors. Run it on a
/// single-color pattern for same-color components.
#[derive(Debug)]
pub struct ConnectedComponentSegregator {
    rule: NeighborRule,
}

impl Default for ConnectedComponentSegregator {
    fn default() -> Self {
        Self::new(eight_neighbors())
    }
}

impl ConnectedComponentSegregator {
    /// Create a segregator using `rule` for adjacency
    pub const fn new(rule: NeighborRule) -> Self {
        Self { rule }
    }

    /// Adjacency rule in use
    pub const fn rule(&self) -> &NeighborRule {
        &self.rule
    }

    /// Split `pattern` into connected components
    ///
    /// Components are returned in row-major order of their first cell, share the
    /// input's shape and inherit its probability. Their union is exactly the
    /// input and no two components share a coordinate. An empty input yields no
    /// components.
    pub fn segregate(&self, pattern: &Pattern) -> Vec<Pattern> {
        let shape = pattern.shape();
        let mut unexplored = bitvec![0; shape.area()];
        for (coord, _) in pattern.iter() {
            if let Some(index) = shape.index_of(coord) {
                unexplored.set(index, true);
            }
        }

        let mut components = Vec::new();
        let mut frontier = Vec::new();
        while let Some(seed) = unexplored.first_one() {
            unexplored.set(seed, false);
            frontier.push(seed);
            let mut component = Pattern::empty(shape).with_probability(pattern.probability());

            while let Some(index) = frontier.pop() {
                let coord = shape.coord_at(index);
                let Some(color) = pattern.get(coord) else {
                    continue;
                };
                component.claim(coord, color);

                for neighbor in self.rule.apply(&Cell::new(coord, color)).coords() {
                    if let Some(next) = shape.index_of(neighbor) {
                        if unexplored.get(next).as_deref() == Some(&true) {
                            unexplored.set(next, false);
                            frontier.push(next);
                        }
                    }
                }
            }
            components.push(component);
        }

        debug!(
            cells = pattern.len(),
            components = components.len(),
            rule = self.rule.description(),
            "segregated pattern"
        );
        components
    }

    /// Segregate every pattern and concatenate the components in input order
    pub fn segregate_all<'a>(&self, patterns: impl IntoIterator<Item = &'a Pattern>) -> Vec<Pattern> {
        patterns
            .into_iter()
            .flat_map(|pattern| self.segregate(pattern))
            .collect()
    }
}
