/// An error type for the frame module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FrameError {
    /// Error when the buffer length does not match the declared frame size.
    #[error("Data length ({0}) does not match the frame size ({1})")]
    InvalidLength(usize, usize),

    /// Error when a pixel index is out of bounds.
    #[error("Pixel index ({0}) is out of bounds ({1})")]
    IndexOutOfBounds(usize, usize),
}
