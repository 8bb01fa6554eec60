// src/simulation/uav.rs

use std::f64::consts::FRAC_PI_2;
use std::fs;
use std::path::Path;

use crate::constants::{ORBIT_CAPTURE_TOLERANCE, SIM_LOG_HEADER};
use crate::data_input::discovery::uav_log_path;
use crate::errors::{io_error, Result};
use crate::types::{Position, UavId};

/// Wraps an angle in degrees into [0, 360).
pub fn wrap_degrees(angle_deg: f64) -> f64 {
    angle_deg.rem_euclid(360.0)
}

/// Signed shortest rotation from `from_deg` to `to_deg`, in [-180, 180].
pub fn shortest_turn(from_deg: f64, to_deg: f64) -> f64 {
    let mut delta = to_deg - from_deg;
    if delta > 180.0 {
        delta -= 360.0;
    }
    if delta < -180.0 {
        delta += 360.0;
    }
    delta
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightMode {
    /// Steering toward the orbit circle around the target.
    Flying,
    /// Circling the target at the turn radius.
    Awaiting,
}

/// One recorded state: (time, x, y, azimuth_deg).
pub type HistoryEntry = (f64, f64, f64, f64);

#[derive(Debug, Clone)]
pub struct Uav {
    id: UavId,
    x: f64,
    y: f64,
    z: f64,
    speed: f64,
    azimuth_deg: f64,
    turn_radius: f64,
    target: Position,
    mode: FlightMode,
    loop_pos: f64, // orbit phase angle (rad)
    history: Vec<HistoryEntry>,
}

impl Uav {
    /// Creates a UAV whose initial target is its own start position.
    pub fn new(
        id: UavId,
        start: (f64, f64, f64),
        speed: f64,
        azimuth_deg: f64,
        turn_radius: f64,
    ) -> Self {
        let (x, y, z) = start;
        Uav {
            id,
            x,
            y,
            z,
            speed,
            azimuth_deg,
            turn_radius,
            target: (x, y),
            mode: FlightMode::Flying,
            loop_pos: 0.0,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> UavId {
        self.id
    }

    pub fn position(&self) -> Position {
        (self.x, self.y)
    }

    pub fn altitude(&self) -> f64 {
        self.z
    }

    pub fn azimuth_deg(&self) -> f64 {
        self.azimuth_deg
    }

    pub fn target(&self) -> Position {
        self.target
    }

    pub fn mode(&self) -> FlightMode {
        self.mode
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn set_target(&mut self, x: f64, y: f64) {
        self.target = (x, y);
        self.mode = FlightMode::Flying;
    }

    fn distance_to_target(&self) -> f64 {
        (self.target.0 - self.x).hypot(self.target.1 - self.y)
    }

    /// Maximum heading change per step in degrees, set by speed and turn radius.
    pub fn max_turn_deg(&self, dt: f64) -> f64 {
        (self.speed / self.turn_radius).to_degrees() * dt
    }

    /// Heading that enters the orbit circle around the target on a tangent.
    fn entry_azimuth_deg(&self) -> f64 {
        let dx = self.target.0 - self.x;
        let dy = self.target.1 - self.y;
        let distance = dx.hypot(dy);
        let bearing = dy.atan2(dx);
        let azimuth_rad = if distance > self.turn_radius {
            let intersection = (self.turn_radius / distance).acos();
            bearing + (FRAC_PI_2 - intersection)
        } else {
            bearing + FRAC_PI_2
        };
        wrap_degrees(azimuth_rad.to_degrees())
    }

    /// Advances the UAV by one time step and records the resulting state at `current_time`.
    pub fn update(&mut self, dt: f64, current_time: f64) {
        match self.mode {
            FlightMode::Flying => self.fly(dt),
            FlightMode::Awaiting => self.orbit(dt),
        }
        // Every step is logged, including the one that snaps onto the orbit.
        self.history
            .push((current_time, self.x, self.y, self.azimuth_deg));
    }

    fn fly(&mut self, dt: f64) {
        let desired = self.entry_azimuth_deg();
        let delta = shortest_turn(self.azimuth_deg, desired);
        let max_turn = self.max_turn_deg(dt);
        if delta.abs() <= max_turn {
            self.azimuth_deg = desired;
        } else {
            self.azimuth_deg += max_turn.copysign(delta);
        }
        self.azimuth_deg = wrap_degrees(self.azimuth_deg);

        let heading = self.azimuth_deg.to_radians();
        self.x += self.speed * dt * heading.cos();
        self.y += self.speed * dt * heading.sin();

        if self.distance_to_target() <= self.turn_radius + ORBIT_CAPTURE_TOLERANCE {
            self.loop_pos = (self.y - self.target.1).atan2(self.x - self.target.0);
            self.place_on_orbit();
            self.mode = FlightMode::Awaiting;
        }
    }

    fn orbit(&mut self, dt: f64) {
        self.loop_pos -= self.speed / self.turn_radius * dt;
        self.place_on_orbit();
    }

    fn place_on_orbit(&mut self) {
        self.x = self.target.0 + self.turn_radius * self.loop_pos.cos();
        self.y = self.target.1 + self.turn_radius * self.loop_pos.sin();
        self.azimuth_deg = wrap_degrees((self.loop_pos - FRAC_PI_2).to_degrees());
    }

    /// Renders the history in the `UAV<id>.txt` log format.
    pub fn history_text(&self) -> String {
        let mut text = String::with_capacity(32 * (self.history.len() + 1));
        text.push_str(SIM_LOG_HEADER);
        text.push('\n');
        for (t, x, y, az) in &self.history {
            text.push_str(&format!("{t:.2} {x:.2} {y:.2} {az:.2}\n"));
        }
        text
    }

    /// Writes the history to `<folder>/UAV<id>.txt`.
    pub fn save_history(&self, folder: &Path) -> Result<()> {
        let path = uav_log_path(folder, self.id);
        fs::write(&path, self.history_text()).map_err(|e| io_error(&path, e))
    }
}


// src/simulation/uav.rs
