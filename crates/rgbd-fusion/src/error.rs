/// An error type for the fusion module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FusionError {
    /// Error when the coordinate map does not cover every depth pixel.
    #[error("Coordinate map length ({0}) does not match the depth pixel count ({1})")]
    MapLengthMismatch(usize, usize),

    /// Error when two frames that must share a size do not.
    #[error("Frame sizes do not match ({0}x{1} vs {2}x{3})")]
    InvalidFrameSize(usize, usize, usize, usize),

    /// Error when creating or accessing a frame.
    #[error(transparent)]
    FrameError(#[from] rgbd_frame::FrameError),
}
