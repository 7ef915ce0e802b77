//! Extraction constants and runtime configuration defaults

// Retry loop
/// Default maximum number of oracle calls per decomposition
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Name of the description used when a page comes without descriptions
pub const DEFAULT_DESCRIPTION_NAME: &str = "region";

// Puzzle pages
/// Width of the zero-padded page number prefix in puzzle file names
pub const PAGE_PREFIX_WIDTH: usize = 3;

/// Extension of puzzle page files
pub const PUZZLE_EXTENSION: &str = "json";

// Rendering
/// RGB value of each palette color, indexed by cell color
pub const PALETTE: [[u8; 3]; 10] = [
    [0, 0, 0],
    [255, 0, 0],
    [0, 255, 0],
    [0, 0, 255],
    [255, 255, 0],
    [255, 0, 255],
    [0, 255, 255],
    [128, 0, 128],
    [255, 165, 0],
    [0, 128, 128],
];

/// RGB value for colors outside the palette
pub const UNKNOWN_COLOR_RGB: [u8; 3] = [128, 128, 128];

/// RGB value for coordinates a pattern does not claim
pub const UNCLAIMED_RGB: [u8; 3] = [255, 255, 255];

/// Side length of one grid cell in exported images, in pixels
pub const PNG_CELL_SCALE: u32 = 16;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output file names
pub const OUTPUT_SUFFIX: &str = "_result";
