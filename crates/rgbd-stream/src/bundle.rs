use rgbd_frame::{ColorFrame, DepthFrame};

/// What one capture cycle delivered.
///
/// The sensor driver announces each cycle with whatever sub-frames it managed
/// to capture; either stream can miss a cycle independently. The pipeline
/// consumes a bundle wholesale or skips it wholesale.
#[derive(Debug, Default)]
pub struct FrameBundle {
    /// The color frame for this cycle, if the color stream delivered one.
    pub color: Option<ColorFrame>,
    /// The depth frame for this cycle, if the depth stream delivered one.
    pub depth: Option<DepthFrame>,
}

impl FrameBundle {
    /// Create a bundle with both sub-frames present.
    pub fn new(color: ColorFrame, depth: DepthFrame) -> Self {
        Self {
            color: Some(color),
            depth: Some(depth),
        }
    }

    /// Whether both sub-frames arrived this cycle.
    pub fn is_complete(&self) -> bool {
        self.color.is_some() && self.depth.is_some()
    }
}
