use std::sync::mpsc::Receiver;

use rgbd_frame::DepthFrame;
use rgbd_fusion::{compose, CoordinateTable};

use crate::bundle::FrameBundle;
use crate::error::StreamError;
use crate::fps_counter::FpsCounter;
use crate::sink::DisplaySink;

/// The driver-side oracle turning a depth frame into a coordinate table.
///
/// On real hardware this wraps the vendor calibration call that maps every
/// depth pixel of the given frame into color-image space. It is consumed as
/// an opaque collaborator and never reimplemented here.
pub trait DepthToColorMapper {
    /// Map every pixel of the depth frame into color-image space.
    fn map_depth_frame(&self, depth: &DepthFrame) -> CoordinateTable;
}

impl<F> DepthToColorMapper for F
where
    F: Fn(&DepthFrame) -> CoordinateTable,
{
    fn map_depth_frame(&self, depth: &DepthFrame) -> CoordinateTable {
        self(depth)
    }
}

/// Why a capture cycle was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The color stream delivered no frame this cycle.
    MissingColor,
    /// The depth stream delivered no frame this cycle.
    MissingDepth,
    /// Neither stream delivered a frame this cycle.
    MissingBoth,
}

/// The result of processing one capture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The bundle was composed and presented to the sink.
    Presented,
    /// The bundle was dropped wholesale; the sink was not called.
    Skipped(SkipReason),
}

/// Drives composition for a stream of frame bundles.
///
/// Holds the device mapper and the display sink across cycles. Per-cycle
/// data never outlives [`FusionPipeline::process`]: each call consumes its
/// bundle, and the composite is dropped once the sink returns.
///
/// Missing sub-frames are skipped with a warning, one policy for every
/// missing-input case; only geometry contract violations surface as errors.
pub struct FusionPipeline<M, S> {
    mapper: M,
    sink: S,
    fps_counter: FpsCounter,
}

impl<M, S> FusionPipeline<M, S>
where
    M: DepthToColorMapper,
    S: DisplaySink,
{
    /// Create a new pipeline around a device mapper and a display sink.
    pub fn new(mapper: M, sink: S) -> Self {
        Self {
            mapper,
            sink,
            fps_counter: FpsCounter::new(),
        }
    }

    /// The smoothed rate of presented frames.
    pub fn fps(&self) -> f32 {
        self.fps_counter.fps()
    }

    /// Process one capture cycle.
    ///
    /// Composes the bundle onto the depth grid and presents it, or skips the
    /// whole cycle if either sub-frame is missing. No partial composite is
    /// ever produced.
    ///
    /// # Errors
    ///
    /// Only geometry violations error out: a coordinate table or color
    /// buffer inconsistent with its declared size.
    pub fn process(&mut self, bundle: FrameBundle) -> Result<Outcome, StreamError> {
        let (color, depth) = match (bundle.color, bundle.depth) {
            (Some(color), Some(depth)) => (color, depth),
            (None, Some(_)) => {
                log::warn!("skipping capture cycle: color frame missing");
                return Ok(Outcome::Skipped(SkipReason::MissingColor));
            }
            (Some(_), None) => {
                log::warn!("skipping capture cycle: depth frame missing");
                return Ok(Outcome::Skipped(SkipReason::MissingDepth));
            }
            (None, None) => {
                log::warn!("skipping capture cycle: no frames delivered");
                return Ok(Outcome::Skipped(SkipReason::MissingBoth));
            }
        };

        let map = self.mapper.map_depth_frame(&depth);
        let composite = compose(&depth, &color, &map)?;

        self.fps_counter.update();
        log::debug!(
            "presented composite {} at {:.1} fps",
            composite.size(),
            self.fps_counter.fps()
        );

        self.sink.present(&composite);
        Ok(Outcome::Presented)
    }

    /// Tear the pipeline down and recover the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Drain a channel of frame bundles until the sender side disconnects.
///
/// This is the polling rendition of the driver's frame-arrived callback:
/// the capture side pushes one [`FrameBundle`] per cycle into the channel
/// and the pipeline consumes them in arrival order on this thread.
///
/// # Errors
///
/// Stops at the first geometry violation; skipped cycles do not stop the
/// drain.
pub fn drain<M, S>(
    receiver: Receiver<FrameBundle>,
    pipeline: &mut FusionPipeline<M, S>,
) -> Result<(), StreamError>
where
    M: DepthToColorMapper,
    S: DisplaySink,
{
    for bundle in receiver {
        pipeline.process(bundle)?;
    }
    log::info!("frame source disconnected, stopping");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgbd_frame::{ColorFrame, CompositeFrame, DepthFrame, FrameSize};
    use rgbd_fusion::{ColorPoint, CoordinateTable};

    const SIZE: FrameSize = FrameSize {
        width: 2,
        height: 1,
    };

    fn fixed_mapper(depth: &DepthFrame) -> CoordinateTable {
        CoordinateTable::new(vec![ColorPoint::new(0.0, 0.0); depth.num_pixels()])
    }

    fn color_frame() -> ColorFrame {
        ColorFrame::new(SIZE, vec![10, 20, 30, 255, 40, 50, 60, 255]).unwrap()
    }

    fn depth_frame() -> DepthFrame {
        DepthFrame::from_size_val(SIZE, 1000u16).unwrap()
    }

    #[test]
    fn process_complete_bundle_presents() -> Result<(), StreamError> {
        let mut presented: Vec<Vec<u8>> = vec![];
        let sink = |frame: &CompositeFrame| presented.push(frame.as_slice().to_vec());
        let mut pipeline = FusionPipeline::new(fixed_mapper, sink);

        let outcome = pipeline.process(FrameBundle::new(color_frame(), depth_frame()))?;

        assert_eq!(outcome, Outcome::Presented);
        drop(pipeline);
        assert_eq!(presented, vec![vec![10, 20, 30, 10, 20, 30]]);
        Ok(())
    }

    #[test]
    fn process_skips_every_missing_input_case() -> Result<(), StreamError> {
        let mut calls = 0usize;
        let sink = |_: &CompositeFrame| calls += 1;
        let mut pipeline = FusionPipeline::new(fixed_mapper, sink);

        let missing_depth = FrameBundle {
            color: Some(color_frame()),
            depth: None,
        };
        let missing_color = FrameBundle {
            color: None,
            depth: Some(depth_frame()),
        };
        let missing_both = FrameBundle::default();

        assert_eq!(
            pipeline.process(missing_depth)?,
            Outcome::Skipped(SkipReason::MissingDepth)
        );
        assert_eq!(
            pipeline.process(missing_color)?,
            Outcome::Skipped(SkipReason::MissingColor)
        );
        assert_eq!(
            pipeline.process(missing_both)?,
            Outcome::Skipped(SkipReason::MissingBoth)
        );

        drop(pipeline);
        assert_eq!(calls, 0);
        Ok(())
    }

    #[test]
    fn process_propagates_geometry_violation() {
        // one table entry for a two-pixel depth frame
        let bad_mapper = |_: &DepthFrame| CoordinateTable::new(vec![ColorPoint::new(0.0, 0.0)]);
        let mut pipeline = FusionPipeline::new(bad_mapper, crate::sink::NullSink);

        let res = pipeline.process(FrameBundle::new(color_frame(), depth_frame()));
        assert!(matches!(res, Err(StreamError::FusionError(_))));
    }

    #[test]
    fn drain_consumes_until_disconnect() -> Result<(), StreamError> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut presented = 0usize;
        let sink = |_: &CompositeFrame| presented += 1;
        let mut pipeline = FusionPipeline::new(fixed_mapper, sink);

        tx.send(FrameBundle::new(color_frame(), depth_frame()))
            .unwrap();
        tx.send(FrameBundle::default()).unwrap();
        tx.send(FrameBundle::new(color_frame(), depth_frame()))
            .unwrap();
        drop(tx);

        drain(rx, &mut pipeline)?;
        drop(pipeline);
        assert_eq!(presented, 2);
        Ok(())
    }
}
