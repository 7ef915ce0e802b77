//! Page-level extraction: every description on every grid it applies to

use tracing::{info, warn};

use crate::extraction::context::PageContext;
use crate::extraction::controller::{ExtractionConfig, ExtractionRetryController, Outcome};
use crate::extraction::oracle::Oracle;
use crate::hierarchy::Constellation;
use crate::hierarchy::assembly::assemble_page;
use crate::io::error::Result;

/// Result of running one description against one grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridDecomposition {
    /// Index of the grid on the page
    pub grid_index: usize,
    /// Name of the description that was extracted
    pub description: String,
    /// How the retry loop ended
    pub outcome: Outcome,
}

/// Result of extracting a whole page
#[derive(Debug, Clone, PartialEq)]
pub struct PageOutcome {
    /// Page number
    pub page: usize,
    /// One entry per (grid, applicable description) pair, grid-major
    pub decompositions: Vec<GridDecomposition>,
    /// Page hierarchy, present only if every decomposition converged
    pub hierarchy: Option<Constellation>,
}

impl PageOutcome {
    /// Check if every decomposition on the page converged
    pub fn is_converged(&self) -> bool {
        self.decompositions
            .iter()
            .all(|decomposition| decomposition.outcome.is_converged())
    }

    /// Decompositions that did not converge
    pub fn failures(&self) -> impl Iterator<Item = &GridDecomposition> {
        self.decompositions
            .iter()
            .filter(|decomposition| !decomposition.outcome.is_converged())
    }
}

/// Extract every applicable description from every grid on a page
///
/// Each (grid, description) pair gets its own retry controller and attempt
/// budget. Non-convergence of one pair does not stop the others; it only
/// prevents the page hierarchy from being built. `on_decomposition` is called
/// after each pair finishes.
///
/// # Errors
///
/// Returns an error if the configuration is invalid
pub fn extract_page<O: Oracle + ?Sized>(
    context: &PageContext,
    oracle: &mut O,
    config: ExtractionConfig,
    mut on_decomposition: impl FnMut(&GridDecomposition),
) -> Result<PageOutcome> {
    config.validate()?;
    let mut decompositions = Vec::new();

    for (grid_index, grid) in context.grids().iter().enumerate() {
        for description in context.descriptions_for(grid_index) {
            let outcome =
                ExtractionRetryController::new(grid, description, oracle, config)?.run();
            let decomposition = GridDecomposition {
                grid_index,
                description: description.name.clone(),
                outcome,
            };
            on_decomposition(&decomposition);
            decompositions.push(decomposition);
        }
    }

    let hierarchy = build_hierarchy(context, &decompositions);
    match &hierarchy {
        Some(constellation) => info!(
            page = context.page(),
            grids = constellation.len(),
            decompositions = decompositions.len(),
            "page decomposed"
        ),
        None => warn!(
            page = context.page(),
            failed = decompositions
                .iter()
                .filter(|decomposition| !decomposition.outcome.is_converged())
                .count(),
            "page has non-converged decompositions, surfacing best-known results"
        ),
    }

    Ok(PageOutcome {
        page: context.page(),
        decompositions,
        hierarchy,
    })
}

fn build_hierarchy(
    context: &PageContext,
    decompositions: &[GridDecomposition],
) -> Option<Constellation> {
    let mut per_grid = vec![Vec::new(); context.grids().len()];
    for decomposition in decompositions {
        let Outcome::Converged { patterns, .. } = &decomposition.outcome else {
            return None;
        };
        per_grid
            .get_mut(decomposition.grid_index)?
            .push(patterns.clone());
    }
    Some(assemble_page(per_grid))
}
