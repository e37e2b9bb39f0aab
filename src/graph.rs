pub use self::connectivity::{Connectivity, RoadsAtPoint};
use crate::{Point, Segment};
use itertools::Itertools;
use log::{debug, warn};
use smallvec::SmallVec;

mod connectivity;

/// The distances used to merge user input into the existing network.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapSettings {
    /// Input within this distance of an existing end point on both axes
    /// is moved onto that end point.
    pub intersection_snap: f64,
    /// Input within this distance of an existing road is moved onto the road.
    /// Should be smaller than `intersection_snap`.
    pub road_snap: f64,
    /// The radius of an intersection marker. Crossings this close to the end of
    /// a road are still treated as crossing the road.
    pub intersection_radius: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            intersection_snap: 30.0,
            road_snap: 20.0,
            intersection_radius: 10.0,
        }
    }
}

/// The outcome of a [RoadGraph::plan_new_road] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoadPlan {
    /// A new road was started at the given point.
    Started(Point),
    /// The pending road was merged into the network.
    Built,
    /// The pending road already existed and was discarded.
    Duplicate,
}

/// A planar network of straight roads.
///
/// Inserting a road splits it and every existing road it crosses. Each crossing
/// is snapped like a drawn point, so the split may land on a nearby end point
/// instead. The pieces then bend towards that point and are not checked
/// against the other roads again, so they can cross a road without a split.
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    /// The roads, in a stable order.
    segments: Vec<Segment>,
    /// Every distinct road end point.
    intersections: Vec<Point>,
    /// The connected components of the network.
    connectivity: Connectivity,
    /// The first point of a road that is being drawn.
    road_start: Option<Point>,
    /// The snapping distances.
    snap: SnapSettings,
}

impl RoadGraph {
    /// Creates an empty road network.
    pub fn new() -> Self {
        Default::default()
    }

    /// Creates an empty road network with the given snapping distances.
    pub fn with_snap_settings(snap: SnapSettings) -> Self {
        let mut graph = Self::new();
        graph.set_snap_settings(snap);
        graph
    }

    /// The roads in the network.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Every distinct road end point.
    pub fn intersections(&self) -> &[Point] {
        &self.intersections
    }

    /// The connected components of the network.
    pub fn connectivity(&self) -> &Connectivity {
        &self.connectivity
    }

    /// The first point of the road being drawn, if there is one.
    pub fn road_start(&self) -> Option<Point> {
        self.road_start
    }

    pub fn snap_settings(&self) -> SnapSettings {
        self.snap
    }

    /// Changes the snapping distances. Takes effect on the next input.
    pub fn set_snap_settings(&mut self, snap: SnapSettings) {
        if snap.road_snap >= snap.intersection_snap {
            warn!(
                "Road snap distance ({}) is not smaller than intersection snap distance ({})",
                snap.road_snap, snap.intersection_snap
            );
        }
        self.snap = snap;
    }

    /// Feeds one end point of a road being drawn.
    ///
    /// The first call starts a road, the second completes it and merges it into
    /// the network unless an identical road already exists. Either way the
    /// pending road is cleared afterwards.
    pub fn plan_new_road(&mut self, x: f64, y: f64) -> RoadPlan {
        let point = self.auto_connect(x, y);
        match self.road_start.take() {
            None => {
                self.road_start = Some(point);
                RoadPlan::Started(point)
            }
            Some(start) => {
                let road = Segment::new(start, point);
                if self.segments.iter().any(|s| s.id() == road.id()) {
                    RoadPlan::Duplicate
                } else {
                    self.insert_road(road);
                    RoadPlan::Built
                }
            }
        }
    }

    /// The road that would be built if the pending road were completed at `(x, y)`.
    pub fn hover_preview(&self, x: f64, y: f64) -> Option<Segment> {
        self.road_start
            .map(|start| Segment::new(start, self.auto_connect(x, y)))
    }

    /// Moves the input coordinates onto the existing network if they are close to it.
    ///
    /// Existing end points take priority over points along a road.
    pub fn auto_connect(&self, x: f64, y: f64) -> Point {
        let snap = self.snap.intersection_snap;
        let near_end = self
            .segments
            .iter()
            .flat_map(|s| s.ends())
            .find(|p| (x - p.x()).abs() <= snap && (y - p.y()).abs() <= snap);
        if let Some(end) = near_end {
            return end;
        }

        let point = Point::new(x, y);
        self.segments
            .iter()
            .map(|s| s.project(&point))
            .find(|proj| proj.dist <= self.snap.road_snap)
            .map(|proj| Point::from(proj.pos))
            .unwrap_or(point)
    }

    /// Merges a road into the network.
    ///
    /// Every existing road crossed by `road` is split at the crossing,
    /// and `road` itself is split at every crossing.
    pub fn insert_road(&mut self, mut road: Segment) {
        let radius = self.snap.intersection_radius;
        let mut splits = SmallVec::<[Point; 4]>::new();

        for idx in 0..self.segments.len() {
            let crossing = self.segments[idx].intersect(&road, radius).crossing();
            if let Some(pos) = crossing {
                let point = self.auto_connect(pos.x, pos.y);
                let tail = self.segments[idx].split_at(point);
                self.segments.push(tail);
                splits.push(point);
            }
        }

        // Cut pieces off the far end first, so `road` keeps its start point throughout
        let start = road.from();
        splits.sort_by(|a, b| b.distance(&start).total_cmp(&a.distance(&start)));

        let mut parts = Vec::with_capacity(splits.len() + 1);
        for split in splits {
            parts.push(road.split_at(split));
        }
        parts.push(road);
        self.segments.extend(parts);

        self.rebuild();
    }

    /// Finds every road with an end point at `point`.
    pub fn find_roads_with_point(&self, point: &Point) -> RoadsAtPoint<'_> {
        RoadsAtPoint::find(&self.segments, point)
    }

    /// Finds every other point in the same connected component as `point`.
    pub fn find_points_in_group(&self, point: &Point) -> Vec<Point> {
        self.connectivity.points_in_group(point)
    }

    /// Restores the network invariants after the roads have changed.
    fn rebuild(&mut self) {
        for segment in &mut self.segments {
            segment.rehash();
        }

        let segments = std::mem::take(&mut self.segments);
        self.segments = segments
            .into_iter()
            .unique_by(|s| s.id())
            .filter(|s| !s.is_degenerate())
            .collect();

        self.intersections = self
            .segments
            .iter()
            .flat_map(|s| s.ends())
            .unique_by(|p| p.id())
            .collect();

        self.connectivity = Connectivity::build(&self.segments);

        debug!(
            "Road network has {} roads, {} intersections, {} groups",
            self.segments.len(),
            self.intersections.len(),
            self.connectivity.groups().len()
        );
    }
}
