//! Tests for connected-component segregation

#[cfg(test)]
mod tests {
    use gridsplit::segregation::ConnectedComponentSegregator;
    use gridsplit::spatial::{Coord, Grid, Pattern, Shape};
    use gridsplit::transform::{bounded, cross_neighbors};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn pattern(rows: &[&[Option<u8>]]) -> Pattern {
        Pattern::from_rows(rows).unwrap()
    }

    fn union_and_disjoint(shape: Shape, parts: &[Pattern]) -> (Option<Pattern>, bool) {
        let mut seen = BTreeSet::new();
        let disjoint = parts
            .iter()
            .flat_map(Pattern::iter)
            .all(|(coord, _)| seen.insert(coord));
        (Pattern::union(shape, parts).ok(), disjoint)
    }

    // Tests diagonal contact connects under the default rule
    // Verified by using the cross rule as the default
    #[test]
    fn test_diagonal_cells_connect_by_default() {
        let input = pattern(&[&[Some(1), None], &[None, Some(1)]]);
        let parts = ConnectedComponentSegregator::default().segregate(&input);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts.first().map(Pattern::len), Some(2));
    }

    // Tests the cross rule separates diagonal-only contact
    // Verified by ignoring the configured rule
    #[test]
    fn test_cross_rule_splits_diagonals() {
        let input = pattern(&[&[Some(1), None], &[None, Some(1)]]);
        let parts = ConnectedComponentSegregator::new(cross_neighbors()).segregate(&input);
        assert_eq!(parts.len(), 2);
    }

    // Tests connectivity ignores colors
    // Verified by only absorbing neighbors of the same color
    #[test]
    fn test_connectivity_is_coordinate_only() {
        let input = pattern(&[&[Some(1), Some(2)], &[None, Some(3)]]);
        let parts = ConnectedComponentSegregator::default().segregate(&input);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts.first().map(|part| part.colors().len()), Some(3));
    }

    // Tests components come out in row-major order of their first cell with input shape and weight
    // Verified by seeding from the last unexplored cell
    #[test]
    fn test_components_deterministic_order() {
        let input = pattern(&[
            &[None, None, Some(5)],
            &[None, None, None],
            &[Some(7), None, None],
        ])
        .with_probability(0.3);
        let parts = ConnectedComponentSegregator::default().segregate(&input);

        assert_eq!(parts.len(), 2);
        assert_eq!(parts.first().map(|p| p.get(Coord::new(0, 2))), Some(Some(5)));
        assert_eq!(parts.get(1).map(|p| p.get(Coord::new(2, 0))), Some(Some(7)));
        assert!(parts.iter().all(|p| p.shape() == Shape::new(3, 3)));
        assert!(parts.iter().all(|p| (p.probability() - 0.3).abs() < f64::EPSILON));
    }

    // Tests an empty pattern yields no components
    // Verified by emitting one empty component
    #[test]
    fn test_empty_input() {
        let parts = ConnectedComponentSegregator::default().segregate(&Pattern::empty(Shape::new(2, 2)));
        assert!(parts.is_empty());
    }

    // Tests bounded rules give the same result as unbounded ones
    // Verified by absorbing out-of-bounds proposals
    #[test]
    fn test_bounded_rule_equivalent() {
        let grid = Grid::from_rows(&[[1, 0, 1], [0, 1, 0], [1, 1, 0]]).unwrap();
        let full = grid.full_pattern();
        let plain = ConnectedComponentSegregator::new(cross_neighbors()).segregate(&full);
        let clipped =
            ConnectedComponentSegregator::new(bounded(cross_neighbors(), grid.shape()))
                .segregate(&full);
        assert_eq!(plain, clipped);
    }

    // Tests segregate_all concatenates in input order
    // Verified by sorting the combined output
    #[test]
    fn test_segregate_all() {
        let first = pattern(&[&[None, Some(2)]]);
        let second = pattern(&[&[Some(1), None]]);
        let parts = ConnectedComponentSegregator::default().segregate_all([&first, &second]);
        assert_eq!(parts, vec![first, second]);
    }

    fn sparse_pattern() -> impl Strategy<Value = Pattern> {
        (1usize..7, 1usize..7).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(prop::option::of(0u8..10), rows * cols).prop_map(move |slots| {
                let cells = slots.into_iter().enumerate().filter_map(|(index, slot)| {
                    slot.map(|color| (Coord::new(index / cols, index % cols), color))
                });
                Pattern::from_cells(Shape::new(rows, cols), cells)
                    .unwrap_or_else(|_| Pattern::empty(Shape::new(rows, cols)))
            })
        })
    }

    proptest! {
        // Tests segregation partitions the input for both rules
        // Verified by skipping the unexplored check so cells repeat across components
        #[test]
        fn test_segregation_partitions_input(input in sparse_pattern()) {
            for segregator in [
                ConnectedComponentSegregator::default(),
                ConnectedComponentSegregator::new(cross_neighbors()),
            ] {
                let parts = segregator.segregate(&input);
                let (union, disjoint) = union_and_disjoint(input.shape(), &parts);
                prop_assert!(disjoint);
                prop_assert_eq!(union.map(|union| union.footprint()), Some(input.footprint()));
                prop_assert!(parts.iter().all(|part| !part.is_empty()));
            }
        }
    }
}
