//! Tests for the pattern validator and its aggregated result

#[cfg(test)]
mod tests {
    use gridsplit::segregation::{ConnectedComponentSegregator, decompose};
    use gridsplit::spatial::{Coord, Grid, Pattern, Shape};
    use gridsplit::validation::{FailureKind, FidelityFinding, PatternValidator};

    fn grid() -> Grid {
        Grid::from_rows(&[[1, 1, 0], [1, 1, 0], [0, 0, 2]]).unwrap()
    }

    fn pattern(rows: &[&[Option<u8>]]) -> Pattern {
        Pattern::from_rows(rows).unwrap()
    }

    // Tests a valid decomposition passes with no reports, and re-validation agrees
    // Verified by reporting passing checks as failures
    #[test]
    fn test_valid_decomposition_passes_repeatedly() {
        let grid = grid();
        let parts = decompose(&grid, &ConnectedComponentSegregator::default());
        let validator = PatternValidator::new(&grid);

        let first = validator.validate(&parts);
        assert!(first.is_pass());
        assert!(first.reports.is_empty());
        assert_eq!(first.violation_count(), 0);
        assert_eq!(validator.validate(&parts), first);
    }

    // Tests the fidelity mismatch at (2, 2) names expected 2 and actual 3
    // Verified by swapping expected and actual in the mismatch
    #[test]
    fn test_wrong_color_reported() {
        let grid = grid();
        let ones = pattern(&[
            &[Some(1), Some(1), None],
            &[Some(1), Some(1), None],
            &[None, None, None],
        ]);
        let three = pattern(&[&[None, None, None], &[None, None, None], &[None, None, Some(3)]]);
        let validation = PatternValidator::new(&grid).validate(&[ones, three]);

        assert!(!validation.is_pass());
        assert!(validation.failed_kinds().contains(&FailureKind::FidelityMismatch));
        let mismatch = validation.findings.fidelity.iter().find_map(|finding| match finding {
            FidelityFinding::Checked { mismatches, .. } => mismatches.first().copied(),
            FidelityFinding::Skipped { .. } => None,
        });
        assert!(mismatch.is_some_and(|m| m.coord == Coord::new(2, 2)
            && m.expected == 2
            && m.actual == 3));

        let report = validation
            .reports
            .iter()
            .find(|report| report.kind == FailureKind::FidelityMismatch);
        assert!(report.is_some_and(|r| r.text.contains("Cell (2, 2): expected 2, found 3")));
    }

    // Tests a candidate with one row removed fails the dimension check with both row counts
    // Verified by comparing only column counts
    #[test]
    fn test_missing_row_dimension_mismatch() {
        let grid = grid();
        let short = pattern(&[&[Some(1), Some(1), Some(0)], &[Some(1), Some(1), Some(0)]]);
        let validation = PatternValidator::new(&grid).validate(&[short]);

        assert_eq!(validation.failed_kinds().first(), Some(&FailureKind::DimensionMismatch));
        let finding = validation.findings.dimensions.first();
        assert!(finding.is_some_and(|f| f.expected.rows == 3 && f.actual.rows == 2));
        let text = validation.reports.first().map(|report| report.text.clone());
        assert!(text.is_some_and(|text| text.contains("2 rows instead of 3")));
    }

    // Tests two patterns claiming (2, 3) are flagged with both indices
    // Verified by only flagging coordinates claimed by exactly two patterns with equal colors
    #[test]
    fn test_overlap_flagged_with_indices() {
        let grid = Grid::from_rows(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 5]]).unwrap();
        let shape = grid.shape();
        let rest = grid.full_pattern().with_label("background");
        let single = Pattern::from_cells(shape, [(Coord::new(2, 3), 5)]).unwrap();
        let extra =
            Pattern::from_cells(shape, [(Coord::new(2, 3), 5), (Coord::new(0, 0), 0)]).unwrap();
        let validation = PatternValidator::new(&grid).validate(&[rest, single, extra]);

        assert_eq!(validation.failed_kinds(), vec![FailureKind::OverlapViolation]);
        let at = validation
            .findings
            .overlaps
            .iter()
            .find(|overlap| overlap.coord == Coord::new(2, 3));
        assert_eq!(at.map(|overlap| overlap.claimants.clone()), Some(vec![0, 1, 2]));
        assert!(validation.reports.first().is_some_and(|report| {
            report.text.contains("Cell (2, 3) is covered by multiple patterns: [0, 1, 2]")
                && report.text.contains("Pattern 0 (background)")
        }));
    }

    // Tests uncovered cells are reported and counted as violations
    // Verified by skipping uncovered coordinates in the occupancy scan
    #[test]
    fn test_coverage_gap() {
        let grid = grid();
        let partial = Pattern::from_cells(grid.shape(), [(Coord::new(0, 0), 1)]).unwrap();
        let validation = PatternValidator::new(&grid).validate(&[partial]);

        assert_eq!(validation.failed_kinds(), vec![FailureKind::CoverageGap]);
        assert_eq!(validation.findings.uncovered.len(), 8);
        assert_eq!(validation.violation_count(), 8);
    }

    // Tests an empty candidate list leaves every cell uncovered
    // Verified by passing empty candidates
    #[test]
    fn test_empty_candidate() {
        let grid = grid();
        let validator = PatternValidator::new(&grid);
        let validation = validator.validate(&[]);
        assert_eq!(validator.grid().shape(), Shape::new(3, 3));
        assert_eq!(validation.findings.uncovered.len(), grid.cell_count());
        assert_eq!(validation.failed_kinds(), vec![FailureKind::CoverageGap]);
    }
}
