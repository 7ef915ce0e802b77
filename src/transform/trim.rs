//! Pattern transformations that keep the level but change the extent

use crate::spatial::{Pattern, Shape};
use crate::transform::typed::Transform;

/// Crop patterns to `shape`, dropping members outside it
///
/// Used when a pattern extracted from one grid is placed into an arena of
/// different dimensions.
pub fn trim_to_bounds(shape: Shape) -> Transform<Pattern, Pattern> {
    Transform::new(
        format!("Trims the pattern to a {shape} arena"),
        move |pattern: &Pattern| pattern.cropped(shape),
    )
}
