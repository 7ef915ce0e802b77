//! Tests for neighbor rules

#[cfg(test)]
mod tests {
    use gridsplit::spatial::{Cell, Coord, Shape};
    use gridsplit::transform::neighbors::offset_rule;
    use gridsplit::transform::{TransformKind, bounded, cross_neighbors, eight_neighbors};

    // Tests the 8-neighbor rule proposes all surrounding cells with the source color
    // Verified by omitting the diagonal offsets
    #[test]
    fn test_eight_neighbors_interior() {
        let rule = eight_neighbors();
        let neighborhood = rule.apply(&Cell::new(Coord::new(1, 1), 4));

        assert_eq!(neighborhood.len(), 8);
        assert!(neighborhood.cells().iter().all(|cell| cell.color() == 4));
        assert!(neighborhood.coords().any(|coord| coord == Coord::new(0, 0)));
        assert!(neighborhood.coords().any(|coord| coord == Coord::new(2, 2)));
        assert!(!neighborhood.coords().any(|coord| coord == Coord::new(1, 1)));
        assert_eq!(rule.kind(), TransformKind::Expansion);
    }

    // Tests negative coordinates are dropped at the origin
    // Verified by wrapping negative offsets
    #[test]
    fn test_origin_drops_negative() {
        assert_eq!(eight_neighbors().apply(&Cell::new(Coord::new(0, 0), 1)).len(), 3);
        assert_eq!(cross_neighbors().apply(&Cell::new(Coord::new(0, 0), 1)).len(), 2);
    }

    // Tests the cross rule has no diagonals
    // Verified by using the 8-neighbor offsets
    #[test]
    fn test_cross_neighbors() {
        let neighborhood = cross_neighbors().apply(&Cell::new(Coord::new(2, 2), 1));
        assert_eq!(neighborhood.len(), 4);
        assert!(
            neighborhood
                .coords()
                .all(|coord| coord.row == 2 || coord.col == 2)
        );
    }

    // Tests bounded rules drop proposals outside the shape
    // Verified by returning the inner rule's proposals unchanged
    #[test]
    fn test_bounded() {
        let rule = bounded(eight_neighbors(), Shape::new(2, 2));
        let neighborhood = rule.apply(&Cell::new(Coord::new(1, 1), 1));
        assert_eq!(neighborhood.len(), 3);
        assert!(rule.description().contains("2x2"));
    }

    // Tests custom offset shapes
    // Verified by ignoring the offsets argument
    #[test]
    fn test_custom_offsets() {
        let knight = offset_rule("knight moves", vec![(2, 1), (1, 2)]);
        let neighborhood = knight.apply(&Cell::new(Coord::new(0, 0), 1));
        let coords: Vec<Coord> = neighborhood.coords().collect();
        assert_eq!(coords, vec![Coord::new(2, 1), Coord::new(1, 2)]);
    }
}
