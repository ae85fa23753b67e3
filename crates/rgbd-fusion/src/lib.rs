#![deny(missing_docs)]
//! Depth-to-color frame alignment for RGB-D cameras

/// depth-to-color alignment module.
pub mod align;

/// device-supplied coordinate mapping module.
pub mod coordinates;

/// Error types for the fusion module.
pub mod error;

/// module containing parallelization utilities.
pub mod parallel;

/// depth visualization module.
pub mod visualize;

pub use crate::align::{align_depth_to_color, compose};
pub use crate::coordinates::{ColorPoint, CoordinateMap, CoordinateTable};
pub use crate::error::FusionError;
