use serde::{Deserialize, Serialize};

/// Pixel dimensions of the image a prediction was made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDims {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ImageDims {
    /// Create dimensions from a decoded image.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Dimensions for an image that was never opened locally.
    ///
    /// Hosted-mode classifications reference the image by URL and fetch it
    /// server-side, so the client reports 0x0.
    pub fn unknown() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    /// Whether real dimensions were recorded.
    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
