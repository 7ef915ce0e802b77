//! Color-based splitting of grids and the default two-stage decomposition

use crate::segregation::components::ConnectedComponentSegregator;
use crate::spatial::{Color, Grid, Pattern};

/// Split a grid into one pattern per color
///
/// With `color` set only that color is extracted, which yields an empty pattern
/// if the grid does not contain it. Otherwise one pattern is returned per color
/// present in the grid, in ascending color order. Every pattern carries the
/// grid's probability.
pub fn chromatic_segregation(grid: &Grid, color: Option<Color>) -> Vec<Pattern> {
    let colors: Vec<Color> = color.map_or_else(|| grid.colors().into_iter().collect(), |c| vec![c]);

    colors
        .into_iter()
        .map(|wanted| {
            Pattern::from_grid_cells(
                grid.shape(),
                grid.cells()
                    .filter(|cell| cell.color() == wanted)
                    .map(|cell| (cell.coord(), cell.color())),
            )
            .with_probability(grid.probability())
        })
        .collect()
}

/// Decompose a grid into same-color connected regions
///
/// Colors are separated first, then each color layer is split by `segregator`.
/// The result is ordered by color, then by the row-major position of each
/// region's first cell, and always passes validation against `grid`.
pub fn decompose(grid: &Grid, segregator: &ConnectedComponentSegregator) -> Vec<Pattern> {
    segregator.segregate_all(&chromatic_segregation(grid, None))
}

/// Decompose only the foreground of a grid
///
/// Cells of the `background` color never seed a region and are left out of the
/// result, so the patterns cover every other cell but do not pass the
/// completeness check on their own.
pub fn decompose_foreground(
    grid: &Grid,
    segregator: &ConnectedComponentSegregator,
    background: Color,
) -> Vec<Pattern> {
    let layers: Vec<Pattern> = chromatic_segregation(grid, None)
        .into_iter()
        .filter(|layer| !layer.colors().contains(&background))
        .collect();
    segregator.segregate_all(&layers)
}
