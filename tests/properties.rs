//! Property tests: random drawings always leave a well-formed network.

use proptest::prelude::*;
use road_sim::{find_path, path_length, Point, RoadGraph, Segment};
use std::collections::HashSet;

fn gesture() -> impl Strategy<Value = ((i16, i16), (i16, i16))> {
    let coord = -400i16..400;
    ((coord.clone(), coord.clone()), (coord.clone(), coord))
}

fn build(gestures: &[((i16, i16), (i16, i16))]) -> RoadGraph {
    let mut graph = RoadGraph::new();
    for ((x1, y1), (x2, y2)) in gestures {
        graph.plan_new_road(*x1 as f64, *y1 as f64);
        graph.plan_new_road(*x2 as f64, *y2 as f64);
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn no_duplicate_or_empty_roads(gestures in prop::collection::vec(gesture(), 1..12)) {
        let graph = build(&gestures);

        let ids = graph.segments().iter().map(|s| s.id()).collect::<HashSet<_>>();
        prop_assert_eq!(ids.len(), graph.segments().len());
        prop_assert!(graph.segments().iter().all(|s| !s.is_degenerate()));
        prop_assert!(graph.road_start().is_none());
    }

    #[test]
    fn groups_match_roads(gestures in prop::collection::vec(gesture(), 1..12)) {
        let graph = build(&gestures);
        let conn = graph.connectivity();

        let grouped = conn.groups().iter().map(|g| g.len()).sum::<usize>();
        prop_assert_eq!(grouped, graph.intersections().len());

        for road in graph.segments() {
            let group = conn.group_of(road.from().id());
            prop_assert!(group.is_some());
            prop_assert_eq!(group, conn.group_of(road.to().id()));
        }
    }

    #[test]
    fn paths_exist_within_groups(gestures in prop::collection::vec(gesture(), 1..8)) {
        let graph = build(&gestures);
        for group in graph.connectivity().groups() {
            let from = group[0];
            for to in group {
                let path = find_path(&graph, &from, to);
                prop_assert!(path.is_some());
                let path = path.unwrap_or_default();
                prop_assert!(path_length(&path) + 1e-9 >= from.distance(to));
            }
        }
    }

    #[test]
    fn point_ids_depend_only_on_rounded_coords(x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6) {
        let a = Point::new(x, y);
        let b = Point::new(x.round(), y.round());
        prop_assert_eq!(a.id(), b.id());
        prop_assert_eq!(
            Segment::new(a, Point::new(0.0, 0.0)).id(),
            Segment::new(Point::new(0.0, 0.0), b).id()
        );
    }
}
