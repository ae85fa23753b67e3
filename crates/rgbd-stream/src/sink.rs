use rgbd_frame::CompositeFrame;

/// A destination for composed frames.
///
/// Implementors own the presentation side: a windowing surface, an encoder,
/// a test buffer. The pipeline hands over one frame per completed cycle; the
/// sink must update its display target atomically on its own thread if it
/// has one. When a cycle is skipped the sink is not called, so the previous
/// image stays on screen.
pub trait DisplaySink {
    /// Present one composed frame.
    fn present(&mut self, frame: &CompositeFrame);
}

/// A sink that discards every frame.
#[derive(Debug, Default)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn present(&mut self, _frame: &CompositeFrame) {}
}

impl<F> DisplaySink for F
where
    F: FnMut(&CompositeFrame),
{
    fn present(&mut self, frame: &CompositeFrame) {
        self(frame)
    }
}
