use crate::error::FusionError;
use crate::parallel;
use rgbd_frame::{DepthFrame, Frame};

/// Upper end of the sensor's reliable depth range, in millimeters.
const MAX_RELIABLE_DEPTH: u32 = 8000;

/// Map a depth frame to a grayscale BGR image for display.
///
/// Each 16-bit depth sample is scaled linearly over the reliable range
/// (0..8000 mm) to a byte intensity, saturating beyond it, and the intensity
/// is replicated to the B, G and R channels.
///
/// # Errors
///
/// * The output frame must have the same size as the depth frame.
pub fn depth_to_grayscale(depth: &DepthFrame, dst: &mut Frame<u8, 3>) -> Result<(), FusionError> {
    if depth.size() != dst.size() {
        return Err(FusionError::InvalidFrameSize(
            depth.width(),
            depth.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_rows(depth, dst, |depth_pixel, dst_pixel| {
        let intensity = (depth_pixel[0] as u32 * 256 / MAX_RELIABLE_DEPTH).min(255) as u8;
        dst_pixel.fill(intensity);
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgbd_frame::FrameSize;

    #[test]
    fn grayscale_scales_and_saturates() -> Result<(), FusionError> {
        let depth = DepthFrame::new(
            FrameSize {
                width: 4,
                height: 1,
            },
            vec![0, 4000, 8000, u16::MAX],
        )?;
        let mut dst = Frame::<u8, 3>::from_size_val(depth.size(), 0u8)?;

        depth_to_grayscale(&depth, &mut dst)?;

        assert_eq!(dst.as_slice()[0..3], [0, 0, 0]);
        assert_eq!(dst.as_slice()[3..6], [128, 128, 128]);
        assert_eq!(dst.as_slice()[6..9], [255, 255, 255]);
        assert_eq!(dst.as_slice()[9..12], [255, 255, 255]);
        Ok(())
    }

    #[test]
    fn grayscale_size_mismatch() -> Result<(), FusionError> {
        let depth = DepthFrame::from_size_val(
            FrameSize {
                width: 2,
                height: 2,
            },
            0u16,
        )?;
        let mut dst = Frame::<u8, 3>::from_size_val(
            FrameSize {
                width: 3,
                height: 2,
            },
            0u8,
        )?;

        let res = depth_to_grayscale(&depth, &mut dst);
        assert_eq!(res.unwrap_err(), FusionError::InvalidFrameSize(2, 2, 3, 2));
        Ok(())
    }
}
