//! Tests for chromatic segregation and the default decomposition

#[cfg(test)]
mod tests {
    use gridsplit::segregation::{
        ConnectedComponentSegregator, chromatic_segregation, decompose, decompose_foreground,
    };
    use gridsplit::spatial::{Coord, Grid};
    use gridsplit::validation::PatternValidator;

    fn sample() -> Grid {
        Grid::from_rows(&[[1, 1, 0], [1, 1, 0], [0, 0, 2]]).unwrap()
    }

    // Tests one pattern per present color in ascending order
    // Verified by emitting all ten palette colors
    #[test]
    fn test_one_pattern_per_present_color() {
        let grid = sample();
        let layers = chromatic_segregation(&grid, None);

        assert_eq!(layers.len(), 3);
        let colors: Vec<Vec<u8>> = layers
            .iter()
            .map(|layer| layer.colors().into_iter().collect())
            .collect();
        assert_eq!(colors, vec![vec![0], vec![1], vec![2]]);
        assert_eq!(layers.iter().map(|layer| layer.len()).sum::<usize>(), 9);
    }

    // Tests a single requested color, including an absent one
    // Verified by ignoring the color argument
    #[test]
    fn test_single_color() {
        let grid = sample();
        let ones = chromatic_segregation(&grid, Some(1));
        assert_eq!(ones.len(), 1);
        assert_eq!(ones.first().map(|p| p.len()), Some(4));

        let absent = chromatic_segregation(&grid, Some(9));
        assert_eq!(absent.len(), 1);
        assert!(absent.first().is_some_and(|p| p.is_empty()));
    }

    // Tests the worked example: the 1s and the 2 end up in separate patterns and validate
    // Verified by segregating the full grid without the color split
    #[test]
    fn test_decompose_separates_touching_colors() {
        let grid = sample();
        let parts = decompose(&grid, &ConnectedComponentSegregator::default());

        assert_eq!(parts.len(), 3);
        let ones = parts.iter().find(|p| p.get(Coord::new(0, 0)) == Some(1));
        let two = parts.iter().find(|p| p.get(Coord::new(2, 2)) == Some(2));
        assert_eq!(ones.map(|p| p.len()), Some(4));
        assert_eq!(two.map(|p| p.len()), Some(1));

        let validation = PatternValidator::new(&grid).validate(&parts);
        assert!(validation.is_pass());
    }

    // Tests coordinate-only connectivity merges touching colors without the split
    // Verified by comparing colors during segregation
    #[test]
    fn test_full_grid_segregation_merges_colors() {
        let grid = sample();
        let parts = ConnectedComponentSegregator::default().segregate(&grid.full_pattern());
        assert_eq!(parts.len(), 1);
    }

    // Tests the background color never seeds a region: the four 1s and the lone 2 remain
    // Verified by keeping the background layer in the decomposition
    #[test]
    fn test_foreground_excludes_background() {
        let grid = sample();
        let parts = decompose_foreground(&grid, &ConnectedComponentSegregator::default(), 0);

        assert_eq!(parts.len(), 2);
        let sizes: Vec<usize> = parts.iter().map(|p| p.len()).collect();
        assert_eq!(sizes, vec![4, 1]);
        assert!(parts.iter().all(|p| !p.colors().contains(&0)));

        // Background cells are left unclaimed, so the full-coverage check fails
        let validation = PatternValidator::new(&grid).validate(&parts);
        assert!(!validation.is_pass());
    }

    // Tests an absent background color leaves the full decomposition unchanged
    // Verified by dropping the first color layer unconditionally
    #[test]
    fn test_foreground_with_absent_background() {
        let grid = sample();
        let segregator = ConnectedComponentSegregator::default();
        assert_eq!(
            decompose_foreground(&grid, &segregator, 9),
            decompose(&grid, &segregator)
        );
    }
}
