//! Per-page working state
//!
//! Everything a page needs travels in one value that is created when the page is
//! opened and dropped when it is done. Nothing is shared between pages.

use crate::extraction::description::PatternDescription;
use crate::io::configuration::PALETTE;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Color, Coord, Grid, OutputCanvas, Shape};
use crate::spatial::canvas::DEFAULT_FILL;

/// Grids, descriptions, and editing state for one puzzle page
#[derive(Debug, Clone)]
pub struct PageContext {
    page: usize,
    grids: Vec<Grid>,
    descriptions: Vec<PatternDescription>,
    canvas: Option<OutputCanvas>,
    selected_color: Color,
}

impl PageContext {
    /// Open a page
    pub const fn new(page: usize, grids: Vec<Grid>, descriptions: Vec<PatternDescription>) -> Self {
        Self {
            page,
            grids,
            descriptions,
            canvas: None,
            selected_color: DEFAULT_FILL,
        }
    }

    /// Page number
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Grids on the page, in file order
    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    /// Pattern descriptions for the page
    pub fn descriptions(&self) -> &[PatternDescription] {
        &self.descriptions
    }

    /// Descriptions that apply to the grid at `index`
    pub fn descriptions_for(&self, index: usize) -> impl Iterator<Item = &PatternDescription> {
        self.descriptions
            .iter()
            .filter(move |description| description.applies_to(index))
    }

    /// Output canvas, if one has been opened
    pub const fn canvas(&self) -> Option<&OutputCanvas> {
        self.canvas.as_ref()
    }

    /// Color used by [`PageContext::paint`]
    pub const fn selected_color(&self) -> Color {
        self.selected_color
    }

    /// Choose the painting color
    ///
    /// # Errors
    ///
    /// Returns an error if the color is outside the palette
    pub fn select_color(&mut self, color: Color) -> Result<()> {
        if usize::from(color) >= PALETTE.len() {
            return Err(invalid_parameter(
                "color",
                &color,
                &format!("palette has {} colors", PALETTE.len()),
            ));
        }
        self.selected_color = color;
        Ok(())
    }

    /// Open a blank canvas of `shape`
    pub fn open_canvas(&mut self, shape: Shape) -> &mut OutputCanvas {
        self.canvas.insert(OutputCanvas::new(shape, DEFAULT_FILL))
    }

    /// Replace the canvas with a copy of the grid at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if there is no grid at `index`
    pub fn copy_grid(&mut self, index: usize) -> Result<&mut OutputCanvas> {
        let grid = self.grids.get(index).ok_or_else(|| {
            invalid_parameter("index", &index, &format!("page has {} grids", self.grids.len()))
        })?;
        Ok(self.canvas.insert(OutputCanvas::copy_of(grid)))
    }

    /// Paint one canvas cell with the selected color
    ///
    /// # Errors
    ///
    /// Returns an error if no canvas is open or the coordinate is outside it
    pub fn paint(&mut self, coord: Coord) -> Result<()> {
        let color = self.selected_color;
        self.canvas_mut()?.paint(coord, color)
    }

    /// Clear the canvas to the fill color
    ///
    /// # Errors
    ///
    /// Returns an error if no canvas is open
    pub fn reset_canvas(&mut self) -> Result<()> {
        self.canvas_mut()?.reset();
        Ok(())
    }

    /// Compare the canvas with an expected solution
    ///
    /// # Errors
    ///
    /// Returns an error if no canvas is open
    pub fn submit(&self, expected: &Grid) -> Result<bool> {
        self.canvas
            .as_ref()
            .map(|canvas| canvas.matches(expected))
            .ok_or_else(|| invalid_parameter("canvas", &"none", &"no canvas is open"))
    }

    fn canvas_mut(&mut self) -> Result<&mut OutputCanvas> {
        self.canvas
            .as_mut()
            .ok_or_else(|| invalid_parameter("canvas", &"none", &"no canvas is open"))
    }
}
