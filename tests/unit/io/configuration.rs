//! Tests for extraction configuration constants

#[cfg(test)]
mod tests {
    use gridsplit::io::configuration::{
        DEFAULT_DESCRIPTION_NAME, DEFAULT_MAX_ATTEMPTS, MAX_INDIVIDUAL_PROGRESS_BARS,
        OUTPUT_SUFFIX, PAGE_PREFIX_WIDTH, PALETTE, PNG_CELL_SCALE, PUZZLE_EXTENSION,
        UNCLAIMED_RGB, UNKNOWN_COLOR_RGB,
    };
    use std::collections::HashSet;

    // Tests the default attempt budget
    // Verified by changing the budget
    #[test]
    fn test_default_max_attempts() {
        assert_eq!(DEFAULT_MAX_ATTEMPTS, 5);
    }

    // Tests page file naming constants
    // Verified by changing prefix width
    #[test]
    fn test_page_naming() {
        assert_eq!(PAGE_PREFIX_WIDTH, 3);
        assert_eq!(PUZZLE_EXTENSION, "json");
        assert_eq!(OUTPUT_SUFFIX, "_result");
        assert_eq!(DEFAULT_DESCRIPTION_NAME, "region");
    }

    // Tests palette colors are distinct and differ from the placeholder colors
    // Verified by duplicating a palette entry
    #[test]
    fn test_palette_distinct() {
        let colors: HashSet<[u8; 3]> = PALETTE.iter().copied().collect();
        assert_eq!(colors.len(), PALETTE.len());
        assert!(!colors.contains(&UNKNOWN_COLOR_RGB));
        assert!(!colors.contains(&UNCLAIMED_RGB));
        assert_eq!(PALETTE.first(), Some(&[0, 0, 0]));
    }

    // Tests rendering and progress settings
    // Verified by changing the cell scale
    #[test]
    fn test_display_settings() {
        assert_eq!(PNG_CELL_SCALE, 16);
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
