use crate::{Point, PointId, Segment};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// The connected components ("groups") of a road network.
#[derive(Clone, Debug, Default)]
pub struct Connectivity {
    /// The distinct points of each group.
    groups: Vec<Vec<Point>>,
    /// The index of the group each point belongs to.
    group_of: FxHashMap<PointId, usize>,
}

/// The roads meeting at a point.
#[derive(Clone, Debug, Default)]
pub struct RoadsAtPoint<'a> {
    /// The roads with an end point at the point.
    pub roads: SmallVec<[&'a Segment; 4]>,
    /// The matching end point of each road.
    pub same: SmallVec<[Point; 4]>,
    /// The opposite end point of each road.
    pub options: SmallVec<[Point; 4]>,
}

impl Connectivity {
    /// Groups the segments into connected components.
    ///
    /// Starting from an ungrouped segment, every segment sharing an end point with
    /// a member of the group is absorbed until the group stops growing.
    pub fn build(segments: &[Segment]) -> Self {
        let mut pool = segments.iter().collect::<Vec<_>>();
        let mut groups = vec![];
        let mut group_of = FxHashMap::default();

        while let Some(seed) = pool.pop() {
            let mut members = vec![seed];
            let mut idx = 0;
            while idx < members.len() {
                let road = members[idx];
                let (joined, rest): (Vec<_>, Vec<_>) =
                    pool.into_iter().partition(|s| s.joins(road));
                pool = rest;
                members.extend(joined);
                idx += 1;
            }

            let points = members
                .iter()
                .flat_map(|s| s.ends())
                .unique_by(|p| p.id())
                .collect::<Vec<_>>();
            for point in &points {
                group_of.insert(point.id(), groups.len());
            }
            groups.push(points);
        }

        Self { groups, group_of }
    }

    /// The points of each group.
    pub fn groups(&self) -> &[Vec<Point>] {
        &self.groups
    }

    /// The index of the group containing the point.
    pub fn group_of(&self, id: PointId) -> Option<usize> {
        self.group_of.get(&id).copied()
    }

    /// Every point in the same group as `point`, except `point` itself.
    pub fn points_in_group(&self, point: &Point) -> Vec<Point> {
        self.group_of(point.id())
            .map(|idx| {
                self.groups[idx]
                    .iter()
                    .filter(|p| p.id() != point.id())
                    .copied()
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    }
}

impl<'a> RoadsAtPoint<'a> {
    /// Scans the segments for roads ending at `point`.
    pub(crate) fn find(segments: &'a [Segment], point: &Point) -> Self {
        let mut out = Self::default();
        for road in segments {
            if road.from() == *point {
                out.roads.push(road);
                out.same.push(road.from());
                out.options.push(road.to());
            }
            if road.to() == *point {
                out.roads.push(road);
                out.same.push(road.to());
                out.options.push(road.from());
            }
        }
        out
    }
}
