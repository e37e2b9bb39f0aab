use super::{Point2d, Vector2d};
use crate::util::Interval;
use cgmath::prelude::*;

/// The result of projecting a point onto a line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentProjection {
    /// The distance between the point and its projection.
    pub dist: f64,
    /// The projected point, which always lies on the segment.
    pub pos: Point2d,
}

/// The intersection of two infinite lines, each given by two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineIntersection {
    /// The intersection point, rounded to integer coordinates.
    /// `None` if the lines are parallel or coincident.
    pub pos: Option<Point2d>,
    /// Whether the intersection lies on the first segment, within tolerance.
    pub on_a: bool,
    /// Whether the intersection lies on the second segment, within tolerance.
    pub on_b: bool,
}

impl LineIntersection {
    /// The intersection point, if it lies on both segments.
    pub fn crossing(&self) -> Option<Point2d> {
        self.pos.filter(|_| self.on_a && self.on_b)
    }
}

/// Projects a point orthogonally onto the segment from `from` to `to`.
///
/// The projection is clamped to the segment, so the distance returned is the
/// distance to the nearest point of the segment rather than of the infinite line.
/// A degenerate segment is treated as the single point `from`.
pub fn project_onto_segment(point: Point2d, from: Point2d, to: Point2d) -> SegmentProjection {
    let dir = to - from;
    let len2 = dir.magnitude2();
    if len2 == 0.0 {
        return SegmentProjection {
            dist: point.distance(from),
            pos: from,
        };
    }

    let t = ((point - from).dot(dir) / len2).clamp(0.0, 1.0);
    let pos = from + t * dir;
    SegmentProjection {
        dist: point.distance(pos),
        pos,
    }
}

/// Intersects the lines through segments `a` and `b`.
///
/// The parameter of the intersection along each segment must fall within `[0, 1]`,
/// widened on both ends by `tolerance` world units, for the corresponding flag to be set.
///
/// # Parameters
/// * `a` - The end points of the first segment
/// * `b` - The end points of the second segment
/// * `tolerance` - The distance past either end point still considered on a segment
pub fn intersect_lines(a: [Point2d; 2], b: [Point2d; 2], tolerance: f64) -> LineIntersection {
    let da = a[1] - a[0];
    let db = b[1] - b[0];

    let denominator = cross(da, db);
    if denominator == 0.0 {
        return LineIntersection {
            pos: None,
            on_a: false,
            on_b: false,
        };
    }

    let offset = b[0] - a[0];
    let ta = cross(offset, db) / denominator;
    let tb = cross(offset, da) / denominator;

    let pos = a[0] + ta * da;
    let pos = Point2d::new(pos.x.round(), pos.y.round());

    let on_segment = |t: f64, len: f64| Interval::new(0.0, 1.0).expand(tolerance / len).contains(t);

    LineIntersection {
        pos: Some(pos),
        on_a: on_segment(ta, da.magnitude()),
        on_b: on_segment(tb, db.magnitude()),
    }
}

/// The z-component of the cross product of two vectors.
#[inline(always)]
pub fn cross(a: Vector2d, b: Vector2d) -> f64 {
    a.x * b.y - a.y * b.x
}
