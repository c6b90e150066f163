use super::WorldRect;
use crate::error::FramekitError;
use crate::frame::Frame;

/// Largest canvas side, in pixels, any export will allocate
pub const MAX_CANVAS_DIMENSION: u32 = 32768;

/// Bounding box of every frame placed around a shared anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalBounds {
    /// World x of the box's left edge
    pub min_x: i64,
    /// World y of the box's top edge
    pub min_y: i64,
    pub width: u64,
    pub height: u64,
    /// Anchor (world origin) position relative to the box's top-left corner
    pub anchor_x: i64,
    pub anchor_y: i64,
}

impl GlobalBounds {
    fn from_rect(rect: WorldRect) -> Self {
        Self {
            min_x: rect.left,
            min_y: rect.top,
            width: rect.width(),
            height: rect.height(),
            anchor_x: -rect.left,
            anchor_y: -rect.top,
        }
    }
}

/// Compute the bounding box covering every frame with a valid raster.
///
/// Returns `None` when no frame has a valid raster.
pub fn calculate_global_bounds(frames: &[Frame]) -> Option<GlobalBounds> {
    frames
        .iter()
        .filter_map(WorldRect::of_frame)
        .reduce(WorldRect::union)
        .map(GlobalBounds::from_rect)
}

/// Round up to the nearest even number
pub fn even_up(n: u64) -> u64 {
    n + n % 2
}

/// Canvas size for the given extent, padded to even dimensions.
///
/// Fails when either padded side exceeds [`MAX_CANVAS_DIMENSION`].
pub fn even_canvas(width: u64, height: u64) -> Result<(u32, u32), FramekitError> {
    let too_large = || FramekitError::CanvasTooLarge {
        width,
        height,
        max: MAX_CANVAS_DIMENSION,
    };

    let w = u32::try_from(even_up(width)).map_err(|_e| too_large())?;
    let h = u32::try_from(even_up(height)).map_err(|_e| too_large())?;
    if w > MAX_CANVAS_DIMENSION || h > MAX_CANVAS_DIMENSION {
        return Err(too_large());
    }

    Ok((w, h))
}
