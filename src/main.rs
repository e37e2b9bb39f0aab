use std::time::Instant;

use road_sim::Simulation;

/// The spacing between the roads of the benchmark grid.
const BLOCK: f64 = 120.0;

fn main() {
    let mut sim = Simulation::with_seed(42);
    sim.set_spawn_on_draw(false);

    println!("Drawing roads...");
    let start = Instant::now();
    for i in 0..8 {
        let offset = i as f64 * BLOCK;
        sim.plan_new_road(0.0, offset);
        sim.plan_new_road(7.0 * BLOCK, offset);
        sim.plan_new_road(offset, 0.0);
        sim.plan_new_road(offset, 7.0 * BLOCK);
    }
    // A diagonal through every block
    sim.plan_new_road(0.0, 0.0);
    sim.plan_new_road(7.0 * BLOCK, 7.0 * BLOCK);
    println!(
        "Built {} roads, {} intersections in {:?}",
        sim.graph().segments().len(),
        sim.graph().intersections().len(),
        start.elapsed()
    );

    sim.set_vehicle_count(500);

    println!("Simulating...");
    let num_frames = 1000;
    for _ in 0..5 {
        let start = Instant::now();
        for _ in 0..num_frames {
            sim.step();
        }
        let frame = start.elapsed() / num_frames;
        let moving = sim.iter_vehicles().filter(|v| !v.has_stopped()).count();
        println!(
            "Avg. frame: {:?} ({} vehicles, {} moving)",
            frame,
            sim.vehicle_count(),
            moving
        );
    }
}
