#![deny(missing_docs)]
//! Frame containers for RGB-D camera streams

/// Error types for the frame module.
pub mod error;

/// Flat, channel-interleaved frame containers.
pub mod frame;

pub use crate::error::FrameError;
pub use crate::frame::{ColorFrame, CompositeFrame, DepthFrame, Frame, FrameSize};
