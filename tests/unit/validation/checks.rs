//! Tests for the individual validation checks

#[cfg(test)]
mod tests {
    use gridsplit::spatial::{Coord, Grid, Pattern, Shape};
    use gridsplit::validation::checks::{check_dimensions, check_fidelity, check_occupancy};
    use gridsplit::validation::{CellMismatch, FidelityCategory, FidelityFinding};

    fn grid() -> Grid {
        Grid::from_rows(&[[1, 1, 0], [1, 1, 0], [0, 0, 2]]).unwrap()
    }

    fn pattern(shape: Shape, cells: &[((usize, usize), u8)]) -> Pattern {
        Pattern::from_cells(
            shape,
            cells
                .iter()
                .map(|&((row, col), color)| (Coord::new(row, col), color)),
        )
        .unwrap()
    }

    fn category(finding: Option<&FidelityFinding>) -> Option<FidelityCategory> {
        match finding {
            Some(FidelityFinding::Checked { category, .. }) => Some(*category),
            _ => None,
        }
    }

    // Tests every pattern gets a dimension finding, passing or not
    // Verified by reporting only mismatches
    #[test]
    fn test_dimensions_report_all() {
        let grid = grid();
        let patterns = vec![Pattern::empty(Shape::new(3, 3)), Pattern::empty(Shape::new(2, 3))];
        let findings = check_dimensions(&grid, &patterns);

        assert_eq!(findings.len(), 2);
        assert!(findings.first().is_some_and(|f| f.passes()));
        assert!(findings.get(1).is_some_and(|f| !f.passes() && f.actual.rows == 2));
    }

    // Tests exact matches and skipped mis-shaped patterns
    // Verified by comparing mis-shaped patterns cell by cell
    #[test]
    fn test_fidelity_exact_and_skipped() {
        let grid = grid();
        let exact = pattern(Shape::new(3, 3), &[((2, 2), 2)]);
        let small = pattern(Shape::new(2, 2), &[((0, 0), 5)]);
        let findings = check_fidelity(&grid, &[exact, small]);

        assert_eq!(category(findings.first()), Some(FidelityCategory::Exact));
        assert_eq!(findings.get(1), Some(&FidelityFinding::Skipped { index: 1 }));
        assert!(!findings.iter().any(FidelityFinding::fails));
    }

    // Tests a color absent from the grid is spurious and the mismatch names both colors
    // Verified by classifying before checking the grid palette
    #[test]
    fn test_fidelity_spurious() {
        let grid = grid();
        let wrong = pattern(Shape::new(3, 3), &[((2, 2), 3)]);
        let findings = check_fidelity(&grid, &[wrong]);

        assert_eq!(category(findings.first()), Some(FidelityCategory::Spurious));
        assert!(matches!(
            findings.first(),
            Some(FidelityFinding::Checked { mismatches, .. }) if mismatches == &vec![CellMismatch {
                coord: Coord::new(2, 2),
                expected: 2,
                actual: 3,
            }]
        ));
    }

    // Tests a translated copy is reported as shifted with the smallest offset
    // Verified by accepting the zero offset
    #[test]
    fn test_fidelity_shifted() {
        let grid = grid();
        // The block of 1s placed one step down and right fits when moved back
        let moved = pattern(
            Shape::new(3, 3),
            &[((1, 1), 1), ((1, 2), 1), ((2, 1), 1), ((2, 2), 1)],
        );
        let findings = check_fidelity(&grid, &[moved]);
        assert_eq!(
            category(findings.first()),
            Some(FidelityCategory::Shifted {
                d_row: -1,
                d_col: -1
            })
        );
    }

    // Tests a single wrong digit stays a digit change when its color occurs elsewhere
    // Verified by searching translations before counting mismatches
    #[test]
    fn test_fidelity_lone_wrong_digit_not_shifted() {
        let grid = Grid::from_rows(&[[1, 2]]).unwrap();
        let wrong = pattern(grid.shape(), &[((0, 0), 2)]);
        let findings = check_fidelity(&grid, &[wrong]);
        assert_eq!(category(findings.first()), Some(FidelityCategory::DigitChanged));

        let grid = Grid::from_rows(&[[1, 1, 2, 2]]).unwrap();
        let one_off = pattern(grid.shape(), &[((0, 0), 1), ((0, 1), 2)]);
        let findings = check_fidelity(&grid, &[one_off]);
        assert_eq!(category(findings.first()), Some(FidelityCategory::DigitChanged));
    }

    // Tests digit changes versus wrong shapes
    // Verified by always classifying as wrong shape
    #[test]
    fn test_fidelity_digit_changed_and_wrong_shape() {
        let grid = Grid::from_rows(&[[1, 1, 1, 1], [0, 0, 0, 0]]).unwrap();
        let shape = grid.shape();
        let one_digit = pattern(shape, &[((0, 0), 1), ((0, 1), 1), ((0, 2), 0), ((0, 3), 1)]);
        let garbled = pattern(shape, &[((0, 0), 0), ((0, 1), 0), ((0, 2), 0), ((1, 3), 1)]);
        let findings = check_fidelity(&grid, &[one_digit, garbled]);
        assert_eq!(category(findings.first()), Some(FidelityCategory::DigitChanged));
        assert_eq!(category(findings.get(1)), Some(FidelityCategory::WrongShape));
    }

    // Tests overlaps list every claimant and gaps list unclaimed coordinates
    // Verified by recording only the first two claimants
    #[test]
    fn test_occupancy() {
        let grid = Grid::from_rows(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let shape = grid.shape();
        let patterns = vec![
            grid.full_pattern(),
            pattern(shape, &[((2, 3), 0)]),
            pattern(shape, &[((2, 3), 0)]),
            pattern(Shape::new(1, 1), &[((0, 0), 0)]),
        ];

        let (overlaps, uncovered) = check_occupancy(&grid, &patterns);
        assert_eq!(overlaps.len(), 1);
        assert!(overlaps.first().is_some_and(|overlap| {
            overlap.coord == Coord::new(2, 3) && overlap.claimants == vec![0, 1, 2]
        }));
        assert!(uncovered.is_empty());

        let (_, uncovered) = check_occupancy(&grid, patterns.get(1..2).unwrap());
        assert_eq!(uncovered.len(), 11);
        assert!(!uncovered.contains(&Coord::new(2, 3)));
    }
}
