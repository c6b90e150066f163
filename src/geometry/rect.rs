use crate::frame::Frame;

/// An axis-aligned rectangle in world space, where the anchor of every
/// frame sits at the origin.
///
/// Coordinates are `i64` so any `i32` shift combined with any `u32` raster
/// size stays representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl WorldRect {
    pub fn new(left: i64, top: i64, right: i64, bottom: i64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// World-space rectangle covered by a frame's raster.
    ///
    /// The raster's top-left corner lies at `(-shift_left, -shift_up)`.
    /// Returns `None` for frames without a valid raster.
    pub fn of_frame(frame: &Frame) -> Option<Self> {
        let raster = frame.raster()?;
        let left = -i64::from(frame.shift_left);
        let top = -i64::from(frame.shift_up);
        Some(Self::new(
            left,
            top,
            left + i64::from(raster.width()),
            top + i64::from(raster.height()),
        ))
    }

    /// Smallest rectangle covering both
    pub fn union(self, other: WorldRect) -> WorldRect {
        WorldRect {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    pub fn width(&self) -> u64 {
        (self.right - self.left).unsigned_abs()
    }

    pub fn height(&self) -> u64 {
        (self.bottom - self.top).unsigned_abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_of_frame() {
        let frame = Frame::new("a", RgbaImage::new(10, 6), 3, 4);
        let rect = WorldRect::of_frame(&frame).unwrap();

        assert_eq!(rect, WorldRect::new(-3, -4, 7, 2));
        assert_eq!(rect.width(), 10);
        assert_eq!(rect.height(), 6);
    }

    #[test]
    fn test_of_frame_negative_shift() {
        // Anchor outside the image, up and to the left of it
        let frame = Frame::new("a", RgbaImage::new(2, 2), -5, -1);
        let rect = WorldRect::of_frame(&frame).unwrap();
        assert_eq!(rect, WorldRect::new(5, 1, 7, 3));
    }

    #[test]
    fn test_of_frame_extreme_shift() {
        let frame = Frame::new("a", RgbaImage::new(2, 2), i32::MIN, i32::MAX);
        let rect = WorldRect::of_frame(&frame).unwrap();

        assert_eq!(rect.left, 2_147_483_648);
        assert_eq!(rect.top, -2_147_483_647);
        assert_eq!(rect.width(), 2);
    }

    #[test]
    fn test_of_frame_without_raster() {
        assert!(WorldRect::of_frame(&Frame::missing("a", 0, 0)).is_none());
    }

    #[test]
    fn test_union() {
        let a = WorldRect::new(-5, -5, 5, 5);
        let b = WorldRect::new(0, 0, 11, 9);

        let u = a.union(b);
        assert_eq!(u, WorldRect::new(-5, -5, 11, 9));
        assert_eq!(u, b.union(a));
    }

    #[test]
    fn test_union_far_apart() {
        let a = WorldRect::new(-2_000_000_000, 0, -1_999_999_998, 2);
        let b = WorldRect::new(2_000_000_000, 0, 2_000_000_002, 2);

        assert_eq!(a.union(b).width(), 4_000_000_002);
    }
}
