use crate::graph::{RoadGraph, RoadPlan, SnapSettings};
use crate::vehicle::{Vehicle, VehicleAttributes};
use crate::{Segment, VehicleId, VehicleSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A road network being drawn, and the vehicles driving on it.
///
/// Each tick, a driver typically queries [Simulation::hover_preview],
/// calls [Simulation::step] and then renders the roads and vehicles.
pub struct Simulation {
    /// The road network.
    graph: RoadGraph,
    /// The vehicles being simulated.
    vehicles: VehicleSet,
    /// The vehicles in the order they were added.
    spawn_order: Vec<VehicleId>,
    /// The attributes applied to every vehicle.
    attributes: VehicleAttributes,
    /// Whether to add a vehicle every time a road is completed.
    spawn_on_draw: bool,
    /// The current frame of simulation.
    frame: usize,
    /// Source of vehicle destinations and styles.
    rng: StdRng,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// Creates a new simulation.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a new simulation whose random choices are determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            graph: RoadGraph::new(),
            vehicles: VehicleSet::default(),
            spawn_order: vec![],
            attributes: VehicleAttributes::default(),
            spawn_on_draw: true,
            frame: 0,
            rng,
        }
    }

    /// Gets the road network.
    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    /// Gets the road network for direct editing.
    pub fn graph_mut(&mut self) -> &mut RoadGraph {
        &mut self.graph
    }

    /// Feeds one end point of a road being drawn. [Read more](RoadGraph::plan_new_road)
    ///
    /// Completing a road also adds a vehicle if spawning on draw is enabled.
    pub fn plan_new_road(&mut self, x: f64, y: f64) -> RoadPlan {
        let plan = self.graph.plan_new_road(x, y);
        if self.spawn_on_draw && !matches!(plan, RoadPlan::Started(_)) {
            self.add_vehicle();
        }
        plan
    }

    /// The road that would be built if the pending road were completed at `(x, y)`.
    pub fn hover_preview(&self, x: f64, y: f64) -> Option<Segment> {
        self.graph.hover_preview(x, y)
    }

    /// Changes the snapping distances used when drawing roads.
    pub fn set_snap_settings(&mut self, snap: SnapSettings) {
        self.graph.set_snap_settings(snap);
    }

    /// Sets whether completing a road adds a vehicle.
    pub fn set_spawn_on_draw(&mut self, spawn: bool) {
        self.spawn_on_draw = spawn;
    }

    /// Adds a vehicle at the start of the first road, heading to its end.
    /// Returns `None` if there are no roads yet.
    pub fn add_vehicle(&mut self) -> Option<VehicleId> {
        let road = *self.graph.segments().first()?;
        let style: [u8; 3] = [(); 3].map(|_| self.rng.gen_range(125..=250));
        let attributes = self.attributes;
        let vehicle_id = self.vehicles.insert_with_key(|id| {
            let mut vehicle = Vehicle::new(id, &attributes, road.from(), style);
            vehicle.set_route([road.to()]);
            vehicle
        });
        self.spawn_order.push(vehicle_id);
        Some(vehicle_id)
    }

    /// Removes a vehicle from the simulation.
    pub fn remove_vehicle(&mut self, id: VehicleId) {
        if self.vehicles.remove(id).is_some() {
            self.spawn_order.retain(|v| *v != id);
        }
    }

    /// Adds or removes vehicles until there are `count` of them.
    /// The most recently added vehicles are removed first.
    ///
    /// Vehicles can only be added once a road exists.
    pub fn set_vehicle_count(&mut self, count: usize) {
        while self.vehicles.len() < count {
            if self.add_vehicle().is_none() {
                break;
            }
        }
        while self.vehicles.len() > count {
            match self.spawn_order.pop() {
                Some(id) => {
                    self.vehicles.remove(id);
                }
                None => break,
            }
        }
    }

    /// The number of vehicles in the simulation.
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// The attributes applied to every vehicle.
    pub fn vehicle_attributes(&self) -> VehicleAttributes {
        self.attributes
    }

    /// Sets the attributes of every current and future vehicle.
    pub fn set_vehicle_attributes(&mut self, attributes: VehicleAttributes) {
        self.attributes = attributes;
        for vehicle in self.vehicles.values_mut() {
            vehicle.set_attributes(&attributes);
        }
    }

    /// Sets the top speed of every current and future vehicle.
    pub fn set_top_speed(&mut self, top_speed: f64) {
        self.set_vehicle_attributes(VehicleAttributes {
            top_speed,
            ..self.attributes
        });
    }

    /// Sets the acceleration of every current and future vehicle.
    pub fn set_acceleration(&mut self, acceleration: f64) {
        self.set_vehicle_attributes(VehicleAttributes {
            acceleration,
            ..self.attributes
        });
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) {
        for vehicle in self.vehicles.values_mut() {
            vehicle.step(&self.graph, &mut self.rng);
        }
        self.frame += 1;
    }

    /// Gets the current simulation frame index.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Returns an iterator over all the vehicles in the simulation.
    pub fn iter_vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    /// Gets a reference to the vehicle with the given ID.
    pub fn get_vehicle(&self, vehicle_id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(vehicle_id)
    }
}
