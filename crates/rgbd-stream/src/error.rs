/// An error type for the stream module.
///
/// Missing sub-frames are not errors; they follow the skip path in
/// [`crate::pipeline::FusionPipeline::process`]. This type covers genuine
/// contract violations between the driver-supplied buffers and their
/// declared geometry.
#[derive(thiserror::Error, Debug)]
pub enum StreamError {
    /// Error during depth-to-color fusion.
    #[error("Failed to fuse the frame bundle. {0}")]
    FusionError(#[from] rgbd_fusion::FusionError),

    /// Error when creating or accessing a frame.
    #[error("Failed to create frame. {0}")]
    FrameError(#[from] rgbd_frame::FrameError),
}
