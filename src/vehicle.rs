use self::kinematics::{KinematicModel, ModelParams};
pub use self::pathfinding::{find_path, path_length};
use crate::math::{Point2d, Vector2d};
use crate::{Point, RoadGraph, VehicleId};
use cgmath::prelude::*;
use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

mod kinematics;
mod pathfinding;

/// A vehicle within this distance of its next waypoint has arrived at it.
const ARRIVAL_DISTANCE: f64 = 0.3;

/// A simulated vehicle.
///
/// Vehicles roam their connected component of the road network: on reaching the
/// end of a route, a vehicle picks a random reachable point and drives the
/// shortest path to it.
#[derive(Clone, Debug)]
pub struct Vehicle {
    /// The vehicle's ID
    id: VehicleId,
    /// The motion model
    kin: KinematicModel,
    /// The world coordinates of the vehicle.
    pos: Point2d,
    /// The speed in world units per tick.
    speed: f64,
    /// The bearing of the last move, in radians.
    heading: f64,
    /// The last waypoint the vehicle arrived at.
    last_node: Point,
    /// The waypoints still to be visited, nearest first.
    route: VecDeque<Point>,
    /// The RGB colour the vehicle is drawn with.
    style: [u8; 3],
}

/// The attributes of a simulated vehicle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VehicleAttributes {
    /// The top speed in world units per tick.
    pub top_speed: f64,
    /// The change in speed per tick when accelerating or braking.
    pub acceleration: f64,
}

impl Default for VehicleAttributes {
    fn default() -> Self {
        Self {
            top_speed: 7.0,
            acceleration: 0.03,
        }
    }
}

/// What a vehicle will do on its next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleState {
    /// Driving towards the next waypoint on its route.
    Cruising,
    /// Choosing a new destination.
    Selecting,
}

impl Vehicle {
    /// Creates a new vehicle, stopped at `start`.
    pub(crate) fn new(id: VehicleId, attributes: &VehicleAttributes, start: Point, style: [u8; 3]) -> Self {
        Self {
            id,
            kin: KinematicModel::new(&Self::model_params(attributes)),
            pos: start.coords(),
            speed: 0.0,
            heading: 0.0,
            last_node: start,
            route: VecDeque::new(),
            style,
        }
    }

    /// Gets the vehicle's ID.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// The world coordinates of the vehicle.
    pub fn position(&self) -> Point2d {
        self.pos
    }

    /// The vehicle's speed in world units per tick.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The bearing of the vehicle's last move, in radians.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    /// The last waypoint the vehicle arrived at.
    pub fn last_node(&self) -> Point {
        self.last_node
    }

    /// The waypoints still to be visited, nearest first.
    pub fn route(&self) -> impl Iterator<Item = &Point> + '_ {
        self.route.iter()
    }

    /// The RGB colour of the vehicle.
    pub fn style(&self) -> [u8; 3] {
        self.style
    }

    /// The vehicle's top speed.
    pub fn top_speed(&self) -> f64 {
        self.kin.top_speed()
    }

    pub fn acceleration(&self) -> f64 {
        self.kin.acceleration()
    }

    /// What the vehicle will do on its next tick.
    pub fn state(&self) -> VehicleState {
        if self.route.is_empty() {
            VehicleState::Selecting
        } else {
            VehicleState::Cruising
        }
    }

    /// Whether the vehicle is stopped.
    pub fn has_stopped(&self) -> bool {
        self.speed == 0.0
    }

    /// Updates the top speed and acceleration.
    pub(crate) fn set_attributes(&mut self, attributes: &VehicleAttributes) {
        self.kin.set_params(&Self::model_params(attributes));
    }

    /// Replaces the vehicle's route.
    pub(crate) fn set_route(&mut self, route: impl IntoIterator<Item = Point>) {
        self.route = route.into_iter().collect();
    }

    /// Advances the vehicle by one tick.
    pub(crate) fn step<R: Rng + ?Sized>(&mut self, graph: &RoadGraph, rng: &mut R) {
        match self.state() {
            VehicleState::Selecting => self.choose_route(graph, rng),
            VehicleState::Cruising => self.drive(),
        }
    }

    /// Picks a random destination in the vehicle's connected component
    /// and routes to it. The vehicle stays put if there is nowhere to go.
    fn choose_route<R: Rng + ?Sized>(&mut self, graph: &RoadGraph, rng: &mut R) {
        let options = graph.find_points_in_group(&self.last_node);
        let dest = match options.choose(rng) {
            Some(dest) => *dest,
            None => return,
        };

        match find_path(graph, &self.last_node, &dest) {
            Some(path) => {
                debug!(
                    "Vehicle {:?} routing to ({}, {}) via {} waypoints",
                    self.id,
                    dest.x(),
                    dest.y(),
                    path.len()
                );
                self.set_route(path);
            }
            None => warn!(
                "Vehicle {:?} found no path to ({}, {}), retrying next tick",
                self.id,
                dest.x(),
                dest.y()
            ),
        }
    }

    /// Moves the vehicle towards its next waypoint.
    fn drive(&mut self) {
        let target = match self.route.front() {
            Some(target) => *target,
            None => return,
        };

        let delta = target.coords() - self.pos;
        let remaining = delta.magnitude();
        self.speed = self.kin.next_speed(self.speed, remaining);

        if remaining < ARRIVAL_DISTANCE || self.speed >= remaining {
            // Never move past the waypoint
            self.pos = target.coords();
            self.speed = 0.0;
            self.last_node = target;
            self.route.pop_front();
        } else {
            self.heading = delta.y.atan2(delta.x);
            let dir = Vector2d::new(self.heading.cos(), self.heading.sin());
            self.pos = self.pos + self.speed * dir;
        }
    }

    fn model_params(attributes: &VehicleAttributes) -> ModelParams {
        ModelParams {
            top_speed: attributes.top_speed,
            acceleration: attributes.acceleration,
        }
    }
}
