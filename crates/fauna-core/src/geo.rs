//! Coordinate points in the driver's map space.
//!
//! The dimensionality is a const parameter so that mixing 2-D and 3-D
//! positions is a compile error rather than a runtime surprise.  The map
//! itself (its extent, wrapping, terrain) belongs to the driver; this module
//! only knows how far apart two points are.

use std::fmt;

/// A point in `D`-dimensional euclidean space, stored as `f64` coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point<const D: usize>(pub [f64; D]);

/// Planar position, the common case.
pub type Point2 = Point<2>;

/// Volumetric position (aquatic or aerial maps).
pub type Point3 = Point<3>;

impl<const D: usize> Point<D> {
    #[inline]
    pub fn new(coords: [f64; D]) -> Self {
        Self(coords)
    }

    /// All coordinates zero.
    #[inline]
    pub fn origin() -> Self {
        Self([0.0; D])
    }

    #[inline]
    pub fn coords(&self) -> &[f64; D] {
        &self.0
    }

    /// Straight-line distance.  O(D).
    pub fn distance(&self, other: &Point<D>) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (b - a) * (b - a))
            .sum::<f64>()
            .sqrt()
    }

    /// `true` if every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl Point<2> {
    #[inline]
    pub fn xy(x: f64, y: f64) -> Self {
        Self([x, y])
    }
}

impl Point<3> {
    #[inline]
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }
}

impl<const D: usize> Default for Point<D> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<const D: usize> From<[f64; D]> for Point<D> {
    fn from(coords: [f64; D]) -> Self {
        Self(coords)
    }
}

impl<const D: usize> fmt::Display for Point<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{c:.3}")?;
        }
        f.write_str(")")
    }
}

// serde only implements arrays up to a fixed length, so points go over the
// wire as plain sequences and are length-checked on the way back in.
#[cfg(feature = "serde")]
impl<const D: usize> serde::Serialize for Point<D> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, const D: usize> serde::Deserialize<'de> for Point<D> {
    fn deserialize<De: serde::Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        let coords = <Vec<f64> as serde::Deserialize>::deserialize(deserializer)?;
        let len = coords.len();
        <[f64; D]>::try_from(coords)
            .map(Point)
            .map_err(|_| serde::de::Error::invalid_length(len, &"a point with matching dimension"))
    }
}
