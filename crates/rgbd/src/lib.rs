#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use rgbd_frame as frame;

#[doc(inline)]
pub use rgbd_fusion as fusion;

#[doc(inline)]
pub use rgbd_stream as stream;
