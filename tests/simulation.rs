//! Tests that involve vehicles driving on a drawn network.

use road_sim::{Point, RoadPlan, Simulation, VehicleAttributes, VehicleState};

fn draw(sim: &mut Simulation, from: (f64, f64), to: (f64, f64)) -> RoadPlan {
    sim.plan_new_road(from.0, from.1);
    sim.plan_new_road(to.0, to.1)
}

/// A square block with one road through the middle.
fn block(sim: &mut Simulation) {
    draw(sim, (0.0, 0.0), (200.0, 0.0));
    draw(sim, (200.0, 0.0), (200.0, 200.0));
    draw(sim, (200.0, 200.0), (0.0, 200.0));
    draw(sim, (0.0, 200.0), (0.0, 0.0));
    draw(sim, (100.0, -50.0), (100.0, 250.0));
}

/// Test that completing a road spawns a vehicle at the first road.
#[test]
fn drawing_spawns_vehicles() {
    let mut sim = Simulation::with_seed(1);
    assert!(matches!(sim.plan_new_road(0.0, 0.0), RoadPlan::Started(_)));
    assert_eq!(sim.vehicle_count(), 0);

    assert_eq!(sim.plan_new_road(100.0, 0.0), RoadPlan::Built);
    assert_eq!(sim.vehicle_count(), 1);

    let vehicle = sim.iter_vehicles().next().unwrap();
    let first = sim.graph().segments()[0];
    assert_eq!(vehicle.last_node(), first.from());
    assert_eq!(vehicle.position(), first.from().coords());
    assert_eq!(vehicle.route().copied().collect::<Vec<_>>(), [first.to()]);
    assert!(vehicle.style().iter().all(|c| (125..=250).contains(c)));
}

/// Test that vehicles cannot be added before any road exists.
#[test]
fn no_vehicles_without_roads() {
    let mut sim = Simulation::with_seed(1);
    assert!(sim.add_vehicle().is_none());
    sim.set_vehicle_count(10);
    assert_eq!(sim.vehicle_count(), 0);
}

/// Test that lowering the vehicle count removes the newest vehicles.
#[test]
fn vehicle_count_is_truncated_from_the_end() {
    let mut sim = Simulation::with_seed(2);
    sim.set_spawn_on_draw(false);
    draw(&mut sim, (0.0, 0.0), (100.0, 0.0));

    sim.set_vehicle_count(5);
    let ids = sim.iter_vehicles().map(|v| v.id()).collect::<Vec<_>>();
    assert_eq!(ids.len(), 5);

    sim.set_vehicle_count(2);
    assert_eq!(sim.vehicle_count(), 2);
    assert!(sim.get_vehicle(ids[0]).is_some());
    assert!(sim.get_vehicle(ids[1]).is_some());
    assert!(sim.get_vehicle(ids[4]).is_none());

    sim.remove_vehicle(ids[0]);
    assert_eq!(sim.vehicle_count(), 1);
}

/// Test that vehicles keep visiting intersections in their own group.
#[test]
fn vehicles_roam_their_group() {
    let mut sim = Simulation::with_seed(3);
    sim.set_spawn_on_draw(false);
    block(&mut sim);
    draw(&mut sim, (600.0, 600.0), (800.0, 600.0));
    sim.set_vehicle_attributes(VehicleAttributes {
        top_speed: 6.0,
        acceleration: 0.5,
    });
    sim.set_vehicle_count(10);

    let start = sim.graph().segments()[0].from();
    let group = sim.graph().connectivity().group_of(start.id());
    for _ in 0..3_000 {
        sim.step();
        for vehicle in sim.iter_vehicles() {
            assert!(vehicle.speed() <= 6.0);
            assert_eq!(sim.graph().connectivity().group_of(vehicle.last_node().id()), group);
        }
    }
    assert_eq!(sim.frame(), 3_000);

    let moved = sim
        .iter_vehicles()
        .filter(|v| v.last_node() != start)
        .count();
    assert!(moved > 0);
}

/// Test that changing the attributes affects existing vehicles.
#[test]
fn attribute_changes_apply_to_all_vehicles() {
    let mut sim = Simulation::with_seed(4);
    block(&mut sim);
    assert_eq!(sim.vehicle_count(), 5);

    sim.set_top_speed(2.5);
    sim.set_acceleration(0.125);
    for vehicle in sim.iter_vehicles() {
        assert_eq!(vehicle.top_speed(), 2.5);
        assert_eq!(vehicle.acceleration(), 0.125);
    }

    for _ in 0..500 {
        sim.step();
    }
    assert!(sim.iter_vehicles().all(|v| v.speed() <= 2.5));
}

/// Test that the preview follows the pending road and new vehicles start cruising.
#[test]
fn hover_preview_and_spawned_state() {
    let mut sim = Simulation::with_seed(6);
    assert!(sim.hover_preview(10.0, 10.0).is_none());
    sim.plan_new_road(0.0, 0.0);
    let preview = sim.hover_preview(50.0, 0.0).unwrap();
    assert_eq!(preview.from(), Point::new(0.0, 0.0));
    assert_eq!(preview.to(), Point::new(50.0, 0.0));

    sim.plan_new_road(50.0, 0.0);
    let id = sim.iter_vehicles().next().unwrap().id();
    assert_eq!(sim.get_vehicle(id).unwrap().state(), VehicleState::Cruising);
}
