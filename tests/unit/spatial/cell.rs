//! Tests for coordinates, shapes, and cells

#[cfg(test)]
mod tests {
    use gridsplit::GridsplitError;
    use gridsplit::spatial::{Cell, Coord, Shape};

    // Tests negative offsets are rejected instead of wrapping
    // Verified by using wrapping_add_signed in Coord::offset
    #[test]
    fn test_offset_rejects_negative_coordinates() {
        let origin = Coord::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 2), Some(Coord::new(1, 2)));
        assert_eq!(Coord::new(3, 3).offset(-1, -2), Some(Coord::new(2, 1)));
    }

    // Tests row-major indexing round-trips through coord_at
    // Verified by swapping rows and cols in index_of
    #[test]
    fn test_shape_index_round_trip() {
        let shape = Shape::new(3, 4);
        assert_eq!(shape.area(), 12);
        for coord in shape.coords() {
            let index = shape.index_of(coord);
            assert!(index.is_some());
            assert_eq!(index.map(|i| shape.coord_at(i)), Some(coord));
        }
        assert_eq!(shape.index_of(Coord::new(1, 2)), Some(6));
        assert_eq!(shape.index_of(Coord::new(3, 0)), None);
        assert_eq!(shape.index_of(Coord::new(0, 4)), None);
    }

    // Tests coords are produced in row-major order
    // Verified by iterating columns first
    #[test]
    fn test_shape_coords_row_major() {
        let coords: Vec<Coord> = Shape::new(2, 2).coords().collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 1)
            ]
        );
    }

    // Tests with_probability returns an adjusted copy and keeps the original intact
    // Verified by resetting color in with_probability
    #[test]
    fn test_cell_with_probability_is_copy() {
        let cell = Cell::new(Coord::new(1, 2), 7);
        let weighted = cell.with_probability(0.25);

        assert!((cell.probability() - 0.0).abs() < f64::EPSILON);
        assert!((weighted.probability() - 0.25).abs() < f64::EPSILON);
        assert_eq!(weighted.color(), 7);
        assert_eq!((weighted.x(), weighted.y()), (1, 2));
    }

    // Tests cell promotion produces a single-cell pattern with the cell's probability
    // Verified by dropping the probability in to_pattern
    #[test]
    fn test_cell_to_pattern() {
        let cell = Cell::new(Coord::new(1, 1), 4).with_probability(0.5);
        let pattern = cell.to_pattern(Shape::new(2, 3)).unwrap();

        assert_eq!(pattern.shape(), Shape::new(2, 3));
        assert_eq!(pattern.len(), 1);
        assert_eq!(pattern.get(Coord::new(1, 1)), Some(4));
        assert!((pattern.probability() - 0.5).abs() < f64::EPSILON);
    }

    // Tests promoting a cell outside the shape fails
    // Verified by removing the bounds check in to_pattern
    #[test]
    fn test_cell_to_pattern_out_of_bounds() {
        let cell = Cell::new(Coord::new(2, 0), 1);
        let result = cell.to_pattern(Shape::new(2, 2));
        assert!(matches!(
            result,
            Err(GridsplitError::CoordinateOutOfBounds { coord, .. }) if coord == Coord::new(2, 0)
        ));
    }

    // Tests display formats used in reports
    // Verified by printing col before row
    #[test]
    fn test_display_formats() {
        assert_eq!(Coord::new(2, 3).to_string(), "(2, 3)");
        assert_eq!(Shape::new(4, 5).to_string(), "4x5");
        assert_eq!(
            Cell::new(Coord::new(0, 1), 2).to_string(),
            "Cell(x=0, y=1, color=2, probability=0)"
        );
    }
}
