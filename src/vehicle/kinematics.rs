/// The longitudinal motion model of a vehicle.
///
/// Speeds are in world units per tick, and accelerations in world units per tick squared.
#[derive(Clone, Debug)]
pub struct KinematicModel {
    top_speed: f64,
    acceleration: f64,
}

/// The parameters of the kinematic model.
pub struct ModelParams {
    /// The vehicle's top speed.
    pub top_speed: f64,
    /// The change in speed per tick when accelerating or braking.
    pub acceleration: f64,
}

impl KinematicModel {
    /// Creates a new kinematic model.
    pub fn new(params: &ModelParams) -> Self {
        Self {
            top_speed: params.top_speed,
            acceleration: params.acceleration,
        }
    }

    /// Replaces the model parameters.
    pub fn set_params(&mut self, params: &ModelParams) {
        self.top_speed = params.top_speed;
        self.acceleration = params.acceleration;
    }

    pub fn top_speed(&self) -> f64 {
        self.top_speed
    }

    pub fn acceleration(&self) -> f64 {
        self.acceleration
    }

    /// The distance needed to stop from `speed` at constant deceleration.
    pub fn braking_distance(&self, speed: f64) -> f64 {
        if self.acceleration > 0.0 {
            speed * speed / (2.0 * self.acceleration)
        } else {
            0.0
        }
    }

    /// Computes the speed for the next tick, in which the vehicle travels that speed.
    ///
    /// Accelerates only if the vehicle can still brake to a stop after this tick's
    /// travel at the faster speed, and brakes otherwise. A vehicle short of its stop
    /// keeps creeping forward at no more than one acceleration step, so the stop is
    /// always reached at a speed of at most `acceleration`.
    /// The result is clamped to `[0, top_speed]`.
    ///
    /// # Arguments
    /// * `speed` - The current speed.
    /// * `remaining` - The distance left to the next stop.
    pub fn next_speed(&self, speed: f64, remaining: f64) -> f64 {
        let top_speed = f64::max(self.top_speed, 0.0);
        let faster = (speed + self.acceleration).min(top_speed);
        let speed = if remaining - faster > self.braking_distance(faster) {
            faster
        } else {
            (speed - self.acceleration).max(remaining.min(self.acceleration))
        };
        speed.clamp(0.0, top_speed)
    }
}
