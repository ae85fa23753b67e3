use rayon::prelude::*;

use rgbd_frame::Frame;

/// Apply a function to each output pixel in parallel, by rows.
///
/// The function receives the pixel's linear index and a mutable view of its
/// channel values. Rows are distributed over the global Rayon thread pool;
/// pixels within a row are visited sequentially, which is cache-friendlier
/// than element-level parallelism for small channel counts.
pub fn par_iter_rows_indexed<T, const C: usize>(
    dst: &mut Frame<T, C>,
    f: impl Fn(usize, &mut [T]) + Send + Sync,
) where
    T: Send + Sync,
{
    let cols = dst.width();
    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .enumerate()
        .for_each(|(row, dst_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(col, dst_pixel)| {
                    f(row * cols + col, dst_pixel);
                });
        });
}

/// Apply a function to each (source, destination) pixel pair in parallel.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Frame<T1, C1>,
    dst: &mut Frame<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.width();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}
