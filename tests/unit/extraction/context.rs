//! Tests for per-page working state and the output canvas workflow

#[cfg(test)]
mod tests {
    use gridsplit::extraction::{PageContext, PatternDescription};
    use gridsplit::spatial::{Coord, Grid, Shape};

    fn page() -> PageContext {
        let input = Grid::from_rows(&[[1, 0], [0, 1]]).unwrap();
        let output = Grid::from_rows(&[[2, 0], [0, 2]]).unwrap();
        let mut only_first = PatternDescription::named("diagonal");
        only_first.grids = vec![0];
        PageContext::new(
            7,
            vec![input, output],
            vec![only_first, PatternDescription::named("background")],
        )
    }

    // Tests descriptions restricted to grid indices only apply to those grids
    // Verified by applying every description to every grid
    #[test]
    fn test_descriptions_for_grid() {
        let context = page();
        assert_eq!(context.page(), 7);
        assert_eq!(context.grids().len(), 2);
        assert_eq!(context.descriptions().len(), 2);

        let first: Vec<&str> = context.descriptions_for(0).map(|d| d.name.as_str()).collect();
        let second: Vec<&str> = context.descriptions_for(1).map(|d| d.name.as_str()).collect();
        assert_eq!(first, vec!["diagonal", "background"]);
        assert_eq!(second, vec!["background"]);
    }

    // Tests painting, resetting, and submitting against an expected grid
    // Verified by ignoring the selected color when painting
    #[test]
    fn test_canvas_workflow() {
        let mut context = page();
        let expected = context.grids().get(1).cloned().unwrap();

        assert!(context.canvas().is_none());
        assert!(context.paint(Coord::new(0, 0)).is_err());
        assert!(context.submit(&expected).is_err());

        context.open_canvas(Shape::new(2, 2));
        assert!(context.select_color(2).is_ok());
        assert_eq!(context.selected_color(), 2);
        assert!(context.paint(Coord::new(0, 0)).is_ok());
        assert!(context.submit(&expected).is_ok_and(|solved| !solved));
        assert!(context.paint(Coord::new(1, 1)).is_ok());
        assert!(context.submit(&expected).is_ok_and(|solved| solved));

        assert!(context.reset_canvas().is_ok());
        assert!(context.submit(&expected).is_ok_and(|solved| !solved));
        assert!(context.paint(Coord::new(2, 0)).is_err());
    }

    // Tests copying a grid onto the canvas and rejecting unknown indices or colors
    // Verified by copying without bounds checking the index
    #[test]
    fn test_copy_grid_and_palette() {
        let mut context = page();
        let input = context.grids().first().cloned().unwrap();

        assert!(context.copy_grid(0).is_ok());
        assert!(context.submit(&input).is_ok_and(|solved| solved));
        assert!(context.copy_grid(5).is_err());
        assert!(context.select_color(10).is_err());
        assert_eq!(context.selected_color(), 0);
    }
}
