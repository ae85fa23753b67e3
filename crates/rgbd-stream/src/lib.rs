#![deny(missing_docs)]
//! Frame pairing and fusion pipeline for RGB-D camera streams

/// per-cycle frame bundle module.
pub mod bundle;

/// Error types for the stream module.
pub mod error;

/// frames per second counter module.
pub mod fps_counter;

/// fusion pipeline module.
pub mod pipeline;

/// display sink module.
pub mod sink;

pub use crate::bundle::FrameBundle;
pub use crate::error::StreamError;
pub use crate::fps_counter::FpsCounter;
pub use crate::pipeline::{drain, DepthToColorMapper, FusionPipeline, Outcome, SkipReason};
pub use crate::sink::{DisplaySink, NullSink};
