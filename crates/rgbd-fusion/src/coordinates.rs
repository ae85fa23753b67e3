use crate::error::FusionError;

/// A position in color-image space, as produced by the sensor's calibration.
///
/// Coordinates are floating point because the mapping between the depth and
/// color grids is sub-pixel accurate; consumers truncate toward zero to pick
/// the nearest sample. Pixels the sensor cannot map are reported as
/// [`ColorPoint::UNMAPPED`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorPoint {
    /// Horizontal position in color-image space.
    pub x: f32,
    /// Vertical position in color-image space.
    pub y: f32,
}

impl ColorPoint {
    /// The sentinel emitted by the device mapper for unmappable depth pixels.
    pub const UNMAPPED: ColorPoint = ColorPoint {
        x: f32::NEG_INFINITY,
        y: f32::NEG_INFINITY,
    };

    /// Create a new color-space point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for ColorPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A per-depth-pixel mapping into color-image space.
///
/// The mapping is supplied by the sensor driver (derived from the device
/// calibration) and is treated as an opaque oracle: one query per depth-pixel
/// linear index, answered with a color-space position or a sentinel.
pub trait CoordinateMap {
    /// The color-space position of the given depth-pixel linear index.
    fn map(&self, depth_index: usize) -> ColorPoint;

    /// Number of depth pixels the mapping covers.
    fn len(&self) -> usize;

    /// Whether the mapping covers no pixels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A coordinate mapping materialized as a lookup table.
///
/// This is the form the driver hands over per frame: one pre-computed
/// color-space point per depth pixel.
///
/// # Examples
///
/// ```
/// use rgbd_fusion::{ColorPoint, CoordinateMap, CoordinateTable};
///
/// let table = CoordinateTable::new(vec![
///     ColorPoint::new(0.0, 0.0),
///     ColorPoint::UNMAPPED,
/// ]);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.map(0), ColorPoint::new(0.0, 0.0));
/// ```
#[derive(Clone, Debug)]
pub struct CoordinateTable {
    points: Vec<ColorPoint>,
}

impl CoordinateTable {
    /// Create a table from per-depth-pixel color-space points.
    pub fn new(points: Vec<ColorPoint>) -> Self {
        Self { points }
    }

    /// Create a table, checking it covers exactly `expected_len` depth pixels.
    ///
    /// # Errors
    ///
    /// If the table length does not match, an error is returned.
    pub fn with_len(points: Vec<ColorPoint>, expected_len: usize) -> Result<Self, FusionError> {
        if points.len() != expected_len {
            return Err(FusionError::MapLengthMismatch(points.len(), expected_len));
        }
        Ok(Self { points })
    }

    /// The underlying points as a slice.
    pub fn as_slice(&self) -> &[ColorPoint] {
        &self.points
    }
}

impl CoordinateMap for CoordinateTable {
    #[inline]
    fn map(&self, depth_index: usize) -> ColorPoint {
        self.points[depth_index]
    }

    #[inline]
    fn len(&self) -> usize {
        self.points.len()
    }
}

impl FromIterator<(f32, f32)> for CoordinateTable {
    fn from_iter<I: IntoIterator<Item = (f32, f32)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(ColorPoint::from).collect())
    }
}
