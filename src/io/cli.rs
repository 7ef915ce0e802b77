//! Command-line interface for batch decomposition of puzzle pages

use crate::extraction::{
    ExtractionConfig, PageOutcome, PatternDescription, SegregationOracle, extract_page,
};
use crate::io::configuration::{
    DEFAULT_DESCRIPTION_NAME, DEFAULT_MAX_ATTEMPTS, OUTPUT_SUFFIX, PUZZLE_EXTENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::export::PageReport;
use crate::io::image::{render_decomposition, save_png};
use crate::io::progress::ProgressManager;
use crate::io::puzzle::{is_report_file, load_descriptions, load_page, page_path};
use crate::segregation::ConnectedComponentSegregator;
use crate::spatial::Color;
use crate::transform::neighbors::{NeighborRule, cross_neighbors, eight_neighbors};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::info;

/// Adjacency used when splitting color layers into regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Connectivity {
    /// Cells touching at an edge or a corner
    #[default]
    Eight,
    /// Cells touching at an edge
    Cross,
}

impl Connectivity {
    /// Neighbor rule for this connectivity
    pub fn rule(self) -> NeighborRule {
        match self {
            Self::Eight => eight_neighbors(),
            Self::Cross => cross_neighbors(),
        }
    }
}

#[derive(Parser)]
#[command(name = "gridsplit")]
#[command(
    author,
    version,
    about = "Decompose puzzle grids into validated, non-overlapping patterns"
)]
/// Command-line arguments for the decomposition tool
pub struct Cli {
    /// Puzzle JSON file or directory of numbered puzzle pages
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Only process this page number when TARGET is a directory
    #[arg(short = 'P', long)]
    pub page: Option<usize>,

    /// JSON file with pattern descriptions to extract from every page
    #[arg(short, long)]
    pub descriptions: Option<PathBuf>,

    /// Maximum oracle calls per decomposition
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Adjacency used to split color layers into regions
    #[arg(short, long, value_enum, default_value_t = Connectivity::Eight)]
    pub connectivity: Connectivity,

    /// Color left as one unsplit background pattern instead of being split into regions
    #[arg(short, long, value_name = "COLOR")]
    pub background: Option<Color>,

    /// Export a PNG of every decomposition
    #[arg(short, long)]
    pub png: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Process pages even if a report already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Retry loop configuration from the arguments
    pub const fn extraction_config(&self) -> ExtractionConfig {
        ExtractionConfig {
            max_attempts: self.attempts,
        }
    }
}

/// Orchestrates batch processing of puzzle pages with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process pages according to CLI arguments
    ///
    /// Non-converged pages are reported and exported like converged ones; they
    /// do not stop the batch.
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid or a page cannot be loaded
    /// or exported
    pub fn process(&mut self) -> Result<Vec<PageOutcome>> {
        self.cli.extraction_config().validate()?;
        let descriptions = self.descriptions()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("nothing to process");
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut outcomes = Vec::with_capacity(files.len());
        for (index, file) in files.iter().enumerate() {
            outcomes.push(self.process_file(file, index, &descriptions)?);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(outcomes)
    }

    fn descriptions(&self) -> Result<Vec<PatternDescription>> {
        match &self.cli.descriptions {
            Some(path) => load_descriptions(path),
            None => Ok(vec![PatternDescription::named(DEFAULT_DESCRIPTION_NAME)]),
        }
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if target.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION) {
                Ok(self
                    .should_process_file(target)
                    .then(|| target.clone())
                    .into_iter()
                    .collect())
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &"target file must be a puzzle JSON file",
                ))
            }
        } else if target.is_dir() {
            if let Some(page) = self.cli.page {
                let path = page_path(target, page)?;
                return Ok(self
                    .should_process_file(&path)
                    .then_some(path)
                    .into_iter()
                    .collect());
            }

            let mut files = Vec::new();
            for entry in std::fs::read_dir(target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION)
                    && page_number(&path).is_some()
                    && !is_report_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"target must be a puzzle JSON file or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let report_path = Self::get_report_path(input_path);
        if report_path.exists() {
            info!(page = %input_path.display(), "skipping, report exists");
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        input_path: &Path,
        index: usize,
        descriptions: &[PatternDescription],
    ) -> Result<PageOutcome> {
        let page = page_number(input_path).or(self.cli.page).unwrap_or(index + 1);
        let context = load_page(input_path, page, descriptions.to_vec())?;

        let runs: usize = (0..context.grids().len())
            .map(|grid_index| context.descriptions_for(grid_index).count())
            .sum();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_page(index, input_path, runs);
        }

        let mut oracle =
            SegregationOracle::new(ConnectedComponentSegregator::new(self.cli.connectivity.rule()))
                .with_background(self.cli.background);
        let mut progress = self.progress_manager.as_mut();
        let outcome = extract_page(
            &context,
            &mut oracle,
            self.cli.extraction_config(),
            |_| {
                if let Some(pm) = progress.as_deref_mut() {
                    pm.advance(index);
                }
            },
        )?;

        PageReport::from_outcome(&outcome).save(&Self::get_report_path(input_path))?;

        if self.cli.png {
            for decomposition in &outcome.decompositions {
                let Some(grid) = context.grids().get(decomposition.grid_index) else {
                    continue;
                };
                let patterns = decomposition.outcome.patterns().unwrap_or_default();
                let png_path = Self::get_png_path(
                    input_path,
                    decomposition.grid_index,
                    &decomposition.description,
                );
                save_png(&render_decomposition(grid, patterns), &png_path)?;
            }
        }

        info!(
            page,
            converged = outcome.is_converged(),
            decompositions = outcome.decompositions.len(),
            "page processed"
        );
        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_page(index, outcome.is_converged());
        }

        Ok(outcome)
    }

    fn get_report_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let report_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            PUZZLE_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(report_name)
        } else {
            PathBuf::from(report_name)
        }
    }

    fn get_png_path(input_path: &Path, grid_index: usize, description: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let slug: String = description
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let png_name = format!(
            "{}{OUTPUT_SUFFIX}_grid{grid_index}_{slug}.png",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(png_name)
        } else {
            PathBuf::from(png_name)
        }
    }
}

/// Page number encoded in a puzzle file name prefix such as `003_`
pub fn page_number(path: &Path) -> Option<usize> {
    let name = path.file_name()?.to_str()?;
    let (digits, _) = name.split_once('_')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
