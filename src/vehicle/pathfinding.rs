use crate::{Point, RoadGraph};
use pathfinding::directed::astar::astar;
use smallvec::SmallVec;

/// Path costs are integers, in this many units per world unit.
const COST_SCALE: f64 = 1000.0;

/// Finds the shortest path between two points of the road network.
///
/// Returns the points along the path from `from` to `to`, both included,
/// or `None` if `to` cannot be reached from `from`.
pub fn find_path(graph: &RoadGraph, from: &Point, to: &Point) -> Option<Vec<Point>> {
    astar(
        from,
        |point| successors(point, graph),
        |point| heuristic(point, to),
        |point| point == to,
    )
    .map(|(path, _)| path)
}

/// The total length of a path.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

fn successors(point: &Point, graph: &RoadGraph) -> SmallVec<[(Point, u64); 4]> {
    graph
        .find_roads_with_point(point)
        .options
        .into_iter()
        .map(|next| (next, edge_cost(point, &next)))
        .collect()
}

/// Rounded up, so no path costs less than its length.
fn edge_cost(a: &Point, b: &Point) -> u64 {
    (COST_SCALE * a.distance(b)).ceil() as u64
}

/// Rounded down, so the estimate never exceeds the cost of any path.
fn heuristic(point: &Point, goal: &Point) -> u64 {
    (COST_SCALE * point.distance(goal)).floor() as u64
}
