use crate::math::{intersect_lines, project_onto_segment, LineIntersection, SegmentProjection};
use crate::{Point, PointId};

/// Unique ID of a [Segment].
///
/// Holds the IDs of the two end points in ascending order,
/// so a road from A to B has the same ID as a road from B to A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SegmentId(PointId, PointId);

impl SegmentId {
    /// Derives the ID of a segment between two points.
    pub fn between(a: PointId, b: PointId) -> Self {
        Self(a.min(b), a.max(b))
    }
}

/// A straight road between two points.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    from: Point,
    to: Point,
    id: SegmentId,
}

impl Segment {
    /// Creates a new segment.
    pub fn new(from: Point, to: Point) -> Self {
        Self {
            from,
            to,
            id: SegmentId::between(from.id(), to.id()),
        }
    }

    /// Gets the segment's ID.
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// The start point of the segment.
    pub fn from(&self) -> Point {
        self.from
    }

    /// The end point of the segment.
    pub fn to(&self) -> Point {
        self.to
    }

    /// Both end points, `from` first.
    pub fn ends(&self) -> [Point; 2] {
        [self.from, self.to]
    }

    /// The length of the segment.
    pub fn length(&self) -> f64 {
        self.from.distance(&self.to)
    }

    /// Whether both end points are the same node.
    pub fn is_degenerate(&self) -> bool {
        self.from.id() == self.to.id()
    }

    /// Whether the segment has an end point at the given node.
    pub fn touches(&self, id: PointId) -> bool {
        self.from.id() == id || self.to.id() == id
    }

    /// Whether the two segments share an end point.
    pub fn joins(&self, other: &Segment) -> bool {
        other.touches(self.from.id()) || other.touches(self.to.id())
    }

    /// Replaces the end point of the segment with `point`
    /// and returns the segment from `point` to the old end point.
    pub(crate) fn split_at(&mut self, point: Point) -> Segment {
        let tail = Segment::new(point, self.to);
        self.to = point;
        self.rehash();
        tail
    }

    /// Recomputes the ID from the current end points.
    pub(crate) fn rehash(&mut self) {
        self.id = SegmentId::between(self.from.id(), self.to.id());
    }

    /// Projects a point onto the segment.
    pub fn project(&self, point: &Point) -> SegmentProjection {
        project_onto_segment(point.coords(), self.from.coords(), self.to.coords())
    }

    /// Intersects the lines through this segment and `other`.
    ///
    /// Intersections within `radius` of either end of a segment count as lying on it.
    pub fn intersect(&self, other: &Segment, radius: f64) -> LineIntersection {
        intersect_lines(
            [self.from.coords(), self.to.coords()],
            [other.from.coords(), other.to.coords()],
            radius,
        )
    }
}
