use thiserror::Error;

/// Errors produced by the drawing core and the gallery
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DoilyError {
    /// A caller supplied a value outside the accepted range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// The rasterizer could not allocate a surface of the given size
    #[error("failed to allocate a {width}x{height} raster")]
    RasterAllocation { width: u32, height: u32 },

    /// The gallery already holds its maximum number of images
    #[error("gallery is full ({capacity} images)")]
    GalleryFull { capacity: usize },
}

impl DoilyError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for fallible drawing operations
pub type DoilyResult<T> = Result<T, DoilyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DoilyError::invalid("sector_count", "must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid parameter `sector_count`: must be at least 1"
        );

        let err = DoilyError::GalleryFull { capacity: 12 };
        assert_eq!(err.to_string(), "gallery is full (12 images)");
    }
}
