use thiserror::Error;

/// Errors raised while composing a spawn image.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Nothing to draw.
    #[error("No cards provided for image generation")]
    NoCards,

    /// The canvas could not be allocated for the requested dimensions.
    #[error("Cannot allocate a {width}x{height} canvas")]
    Canvas {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// PNG encoding of the finished canvas failed.
    #[error("Failed to encode spawn image: {0}")]
    Encode(String),
}
