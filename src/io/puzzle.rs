//! Loading of puzzle pages and pattern descriptions from JSON
//!
//! Pages follow the usual ARC layout: `train` and `test` lists of examples, each
//! holding an `input` matrix and, except for hidden tests, an `output` matrix.
//! Page files are found by their zero-padded number prefix, e.g. `003_abc.json`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::extraction::{PageContext, PatternDescription};
use crate::io::configuration::{OUTPUT_SUFFIX, PAGE_PREFIX_WIDTH, PUZZLE_EXTENSION};
use crate::io::error::{GridsplitError, Result, file_system};
use crate::spatial::{Color, Grid};

/// One input/output pair of a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleExample {
    /// Input matrix
    pub input: Vec<Vec<Color>>,
    /// Expected output matrix, absent for hidden tests
    #[serde(default)]
    pub output: Option<Vec<Vec<Color>>>,
}

/// A puzzle page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// Demonstration pairs
    #[serde(default)]
    pub train: Vec<PuzzleExample>,
    /// Pairs to solve
    #[serde(default)]
    pub test: Vec<PuzzleExample>,
}

impl Puzzle {
    /// Parse a puzzle from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid puzzle
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a puzzle file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| file_system(path, "read puzzle", e))?;
        serde_json::from_str(&text).map_err(|source| GridsplitError::PuzzleParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Every matrix on the page as a grid
    ///
    /// Order is train pairs then test pairs, each input followed by its output
    /// when present.
    ///
    /// # Errors
    ///
    /// Returns a structural error if any matrix is empty or ragged
    pub fn grids(&self) -> Result<Vec<Grid>> {
        self.train
            .iter()
            .chain(&self.test)
            .flat_map(|example| std::iter::once(&example.input).chain(&example.output))
            .map(|rows| Grid::from_rows(rows))
            .collect()
    }
}

/// Find the puzzle file for `page` in `folder`
///
/// The first file in name order whose name starts with the zero-padded page
/// number followed by `_` is selected.
///
/// # Errors
///
/// Returns an error if the folder cannot be read or no file matches
pub fn page_path(folder: &Path, page: usize) -> Result<PathBuf> {
    let width = PAGE_PREFIX_WIDTH;
    let prefix = format!("{page:0width$}_");
    let mut matches = Vec::new();
    for entry in std::fs::read_dir(folder).map_err(|e| file_system(folder, "read directory", e))? {
        let path = entry
            .map_err(|e| file_system(folder, "read directory entry", e))?
            .path();
        let name_matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(&prefix));
        if name_matches
            && path.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION)
            && !is_report_file(&path)
        {
            matches.push(path);
        }
    }
    matches.sort();
    matches
        .into_iter()
        .next()
        .ok_or_else(|| GridsplitError::PageNotFound {
            folder: folder.to_path_buf(),
            page,
        })
}

/// Check if a path names a run report written next to a puzzle
pub fn is_report_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}

/// Open a page from a puzzle file
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or holds a malformed matrix
pub fn load_page(
    path: &Path,
    page: usize,
    descriptions: Vec<PatternDescription>,
) -> Result<PageContext> {
    let grids = Puzzle::load(path)?.grids()?;
    Ok(PageContext::new(page, grids, descriptions))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptionFile {
    List(Vec<PatternDescription>),
    Wrapped {
        #[serde(alias = "patterns")]
        list_of_patterns: Vec<PatternDescription>,
    },
}

/// Read pattern descriptions from a JSON file
///
/// Accepts either a bare list or an object with a `list_of_patterns` field.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed
pub fn load_descriptions(path: &Path) -> Result<Vec<PatternDescription>> {
    let text =
        std::fs::read_to_string(path).map_err(|e| file_system(path, "read descriptions", e))?;
    let file: DescriptionFile =
        serde_json::from_str(&text).map_err(|source| GridsplitError::PuzzleParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(match file {
        DescriptionFile::List(list) | DescriptionFile::Wrapped {
            list_of_patterns: list,
        } => list,
    })
}
