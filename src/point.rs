use crate::math::Point2d;
use cgmath::MetricSpace;
use std::hash::{Hash, Hasher};

/// Unique ID of a [Point], derived from its rounded coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(u64);

impl PointId {
    /// Derives the ID of the point at the given integer coordinates.
    pub fn from_coords(x: i32, y: i32) -> Self {
        Self(((x as u32 as u64) << 32) | (y as u32 as u64))
    }
}

/// A node of the road network.
///
/// Coordinates are rounded to the nearest integer when the point is created,
/// so two points built from nearby coordinates refer to the same node.
/// Points are compared and hashed by their [PointId].
#[derive(Clone, Copy, Debug)]
pub struct Point {
    x: f64,
    y: f64,
    id: PointId,
}

impl Point {
    /// Creates a point at the nearest integer coordinates to `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        let x = x.round();
        let y = y.round();
        Self {
            x,
            y,
            id: PointId::from_coords(x as i32, y as i32),
        }
    }

    /// Gets the point's ID.
    pub fn id(&self) -> PointId {
        self.id
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// The point's world coordinates.
    pub fn coords(&self) -> Point2d {
        Point2d::new(self.x, self.y)
    }

    /// The Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        self.coords().distance(other.coords())
    }
}

impl From<Point2d> for Point {
    fn from(pos: Point2d) -> Self {
        Self::new(pos.x, pos.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
