use crate::error::FrameError;

/// Frame size in pixels
///
/// A struct to represent the size of a frame in pixels.
///
/// # Examples
///
/// ```
/// use rgbd_frame::FrameSize;
///
/// let frame_size = FrameSize {
///   width: 512,
///   height: 424,
/// };
///
/// assert_eq!(frame_size.width, 512);
/// assert_eq!(frame_size.height, 424);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSize {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
}

impl FrameSize {
    /// Number of pixels in the frame.
    pub fn num_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for FrameSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "FrameSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for FrameSize {
    fn from(size: [usize; 2]) -> Self {
        FrameSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents a single sensor frame with pixel data.
///
/// The frame is a flat row-major buffer with shape (H, W, C), where C is the
/// number of interleaved channels. Each frame is an immutable snapshot of one
/// capture cycle; the stream layer rebuilds frames on every arrival.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame<T, const C: usize> {
    size: FrameSize,
    data: Vec<T>,
}

/// A BGRA color frame as delivered by the sensor driver (4 bytes per pixel).
pub type ColorFrame = Frame<u8, 4>;

/// A depth frame of 16-bit distance-from-sensor samples.
pub type DepthFrame = Frame<u16, 1>;

/// A BGR composite frame resampled onto the depth frame's pixel grid.
pub type CompositeFrame = Frame<u8, 3>;

impl<T, const C: usize> Frame<T, C> {
    /// Create a new frame from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the frame in pixels.
    /// * `data` - The pixel data, of length `width * height * C`.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the frame size, an
    /// error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgbd_frame::{Frame, FrameSize};
    ///
    /// let frame = Frame::<u8, 3>::new(
    ///     FrameSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// ).unwrap();
    ///
    /// assert_eq!(frame.size().width, 10);
    /// assert_eq!(frame.size().height, 20);
    /// assert_eq!(frame.num_channels(), 3);
    /// ```
    pub fn new(size: FrameSize, data: Vec<T>) -> Result<Self, FrameError> {
        if data.len() != size.width * size.height * C {
            return Err(FrameError::InvalidLength(
                data.len(),
                size.width * size.height * C,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new frame with the given size, filled with a default value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rgbd_frame::{Frame, FrameSize};
    ///
    /// let frame = Frame::<u8, 3>::from_size_val(
    ///     FrameSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     0u8,
    /// ).unwrap();
    ///
    /// assert_eq!(frame.as_slice().len(), 10 * 20 * 3);
    /// ```
    pub fn from_size_val(size: FrameSize, val: T) -> Result<Self, FrameError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * C];
        Frame::new(size, data)
    }

    /// The size of the frame in pixels.
    #[inline]
    pub fn size(&self) -> FrameSize {
        self.size
    }

    /// Width of the frame in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Height of the frame in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Number of interleaved channels per pixel.
    #[inline]
    pub fn num_channels(&self) -> usize {
        C
    }

    /// Number of pixels in the frame.
    #[inline]
    pub fn num_pixels(&self) -> usize {
        self.size.num_pixels()
    }

    /// Row stride in elements (`width * C`).
    #[inline]
    pub fn stride(&self) -> usize {
        self.size.width * C
    }

    /// The pixel data as a flat slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The pixel data as a flat mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the frame and return the underlying buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get the channel values of the pixel at the given linear index.
    ///
    /// # Errors
    ///
    /// If the index is out of bounds, an error is returned.
    pub fn pixel(&self, index: usize) -> Result<&[T], FrameError> {
        if index >= self.num_pixels() {
            return Err(FrameError::IndexOutOfBounds(index, self.num_pixels()));
        }
        Ok(&self.data[index * C..(index + 1) * C])
    }
}
