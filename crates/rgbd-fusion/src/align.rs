use crate::coordinates::CoordinateMap;
use crate::error::FusionError;
use crate::parallel;
use rgbd_frame::{ColorFrame, CompositeFrame, DepthFrame};

/// Resample a color frame onto the depth frame's pixel grid.
///
/// For every depth-pixel linear index the coordinate map is queried for the
/// matching position in color-image space. The position is truncated toward
/// zero to pick the nearest color sample, whose B, G and R bytes are copied
/// into the output (alpha is dropped). Depth pixels whose mapped position
/// falls outside the color frame, or whose position is a non-finite sentinel,
/// keep their zero default.
///
/// # Arguments
///
/// * `color` - The BGRA input frame with shape (H_c, W_c, 4).
/// * `dst` - The BGR output frame, sized to the depth grid, zero-initialized
///   by the caller for unmapped pixels to read as black.
/// * `map` - The device-supplied depth-to-color coordinate mapping.
///
/// # Errors
///
/// * The map must cover exactly one coordinate per output pixel.
pub fn align_depth_to_color<M>(
    color: &ColorFrame,
    dst: &mut CompositeFrame,
    map: &M,
) -> Result<(), FusionError>
where
    M: CoordinateMap + Sync,
{
    if map.len() != dst.num_pixels() {
        return Err(FusionError::MapLengthMismatch(map.len(), dst.num_pixels()));
    }

    let color_width = color.width();
    let color_height = color.height();
    let color_data = color.as_slice();

    parallel::par_iter_rows_indexed(dst, |i, dst_pixel| {
        let point = map.map(i);

        // the device mapper reports unmappable pixels as -inf
        if !point.x.is_finite() || !point.y.is_finite() {
            return;
        }

        let color_x = point.x as i64;
        let color_y = point.y as i64;
        if color_x < 0
            || color_x >= color_width as i64
            || color_y < 0
            || color_y >= color_height as i64
        {
            return;
        }

        let color_index = (color_y as usize * color_width + color_x as usize) * 4;
        dst_pixel.copy_from_slice(&color_data[color_index..color_index + 3]);
    });

    Ok(())
}

/// Compose a new color image sized to the depth frame's resolution.
///
/// Convenience wrapper over [`align_depth_to_color`] that allocates a
/// zero-initialized output on the depth grid. The depth samples themselves
/// are not read; the device mapper already folded them into the coordinate
/// table. The depth frame dictates the output dimensions and the expected
/// map length.
///
/// # Examples
///
/// ```
/// use rgbd_frame::{ColorFrame, DepthFrame, FrameSize};
/// use rgbd_fusion::{compose, CoordinateTable};
///
/// let depth = DepthFrame::from_size_val(FrameSize { width: 2, height: 1 }, 0u16).unwrap();
/// let color = ColorFrame::new(
///     FrameSize { width: 2, height: 1 },
///     vec![10, 20, 30, 255, 40, 50, 60, 255],
/// ).unwrap();
/// let map: CoordinateTable = vec![(0.0, 0.0), (5.0, 0.0)].into_iter().collect();
///
/// let composite = compose(&depth, &color, &map).unwrap();
/// assert_eq!(composite.as_slice(), &[10, 20, 30, 0, 0, 0]);
/// ```
pub fn compose<M>(
    depth: &DepthFrame,
    color: &ColorFrame,
    map: &M,
) -> Result<CompositeFrame, FusionError>
where
    M: CoordinateMap + Sync,
{
    let mut dst = CompositeFrame::from_size_val(depth.size(), 0u8)?;
    align_depth_to_color(color, &mut dst, map)?;
    Ok(dst)
}
