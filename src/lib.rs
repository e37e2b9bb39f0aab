pub use cgmath;
pub use graph::{Connectivity, RoadGraph, RoadPlan, RoadsAtPoint, SnapSettings};
pub use point::{Point, PointId};
pub use segment::{Segment, SegmentId};
pub use simulation::Simulation;
use slotmap::{new_key_type, SlotMap};
pub use slotmap::{Key, KeyData};
pub use util::Interval;
pub use vehicle::{find_path, path_length, Vehicle, VehicleAttributes, VehicleState};

mod graph;
pub mod math;
mod point;
mod segment;
mod simulation;
mod util;
mod vehicle;

new_key_type! {
    /// Unique ID of a [Vehicle].
    pub struct VehicleId;
}

type VehicleSet = SlotMap<VehicleId, Vehicle>;
