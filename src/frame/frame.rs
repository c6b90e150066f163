use image::RgbaImage;

/// One decoded sprite image plus its placement and timing metadata
#[derive(Debug, Clone)]
pub struct Frame {
    /// Unique identifier, also the output file stem (`<id>.png`)
    pub id: String,
    /// Decoded raster, `None` when the source image could not be decoded
    pub image: Option<RgbaImage>,
    /// Horizontal offset from the image's top-left corner to the anchor
    pub shift_left: i32,
    /// Vertical offset from the image's top-left corner to the anchor
    pub shift_up: i32,
    /// Display time in milliseconds
    pub delay: i32,
}

impl Frame {
    pub fn new(id: impl Into<String>, image: RgbaImage, shift_left: i32, shift_up: i32) -> Self {
        Self {
            id: id.into(),
            image: Some(image),
            shift_left,
            shift_up,
            delay: 0,
        }
    }

    /// A frame whose raster is unavailable
    pub fn missing(id: impl Into<String>, shift_left: i32, shift_up: i32) -> Self {
        Self {
            id: id.into(),
            image: None,
            shift_left,
            shift_up,
            delay: 0,
        }
    }

    pub fn with_delay(mut self, delay: i32) -> Self {
        self.delay = delay;
        self
    }

    /// The raster, if present and non-empty.
    ///
    /// Frames without a valid raster are skipped by bounds computation and
    /// by every exporter.
    pub fn raster(&self) -> Option<&RgbaImage> {
        self.image
            .as_ref()
            .filter(|img| img.width() > 0 && img.height() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_present() {
        let frame = Frame::new("a", RgbaImage::new(4, 3), 0, 0);
        assert_eq!(frame.raster().map(|r| r.dimensions()), Some((4, 3)));
    }

    #[test]
    fn test_raster_missing() {
        let frame = Frame::missing("a", 5, 5);
        assert!(frame.raster().is_none());
    }

    #[test]
    fn test_zero_sized_raster_is_invalid() {
        let frame = Frame::new("a", RgbaImage::new(0, 8), 0, 0);
        assert!(frame.raster().is_none());
    }
}
