// src/simulation/engine.rs

use log::{debug, info};
use std::path::Path;

use crate::data_input::sim_cmds::SimCmds;
use crate::data_input::sim_params::SimParams;
use crate::errors::{FlightVizError, Result};
use crate::simulation::uav::Uav;
use crate::types::UavId;

/// Fixed-step simulation of `n_uav` UAVs driven by a time-ordered command schedule.
pub struct Simulation {
    params: SimParams,
    cmds: SimCmds,
    time: f64,
    next_cmd: usize,
    uavs: Vec<Uav>,
}

impl Simulation {
    pub fn new(params: SimParams, cmds: SimCmds) -> Self {
        let uavs = (0..params.n_uav)
            .map(|index| {
                Uav::new(
                    index as UavId,
                    (params.x0, params.y0, params.z0),
                    params.v0,
                    params.az0,
                    params.turn_radius,
                )
            })
            .collect();
        Simulation {
            params,
            cmds,
            time: 0.0,
            next_cmd: 0,
            uavs,
        }
    }

    pub fn uavs(&self) -> &[Uav] {
        &self.uavs
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Steps until the time limit. Commands due at or before the current time are
    /// applied before the UAVs move.
    pub fn run(&mut self) -> Result<()> {
        self.params.validate()?;
        let mut steps = 0usize;
        while self.time <= self.params.time_lim {
            self.apply_due_commands()?;
            for uav in &mut self.uavs {
                uav.update(self.params.dt, self.time);
            }
            self.time += self.params.dt;
            steps += 1;
        }
        info!(
            "Simulated {} UAVs for {steps} steps ({} of {} commands applied)",
            self.uavs.len(),
            self.next_cmd,
            self.cmds.len()
        );
        Ok(())
    }

    fn apply_due_commands(&mut self) -> Result<()> {
        while let Some(cmd) = self.cmds.commands.get(self.next_cmd) {
            if cmd.time > self.time {
                break;
            }
            let count = self.uavs.len();
            let uav = usize::try_from(cmd.uav_id)
                .ok()
                .and_then(|index| self.uavs.get_mut(index))
                .ok_or(FlightVizError::UnknownUav { id: cmd.uav_id, count })?;
            debug!(
                "t={:.2}: UAV {} -> ({}, {})",
                self.time, cmd.uav_id, cmd.target_x, cmd.target_y
            );
            uav.set_target(cmd.target_x, cmd.target_y);
            self.next_cmd += 1;
        }
        Ok(())
    }

    /// Writes one `UAV<id>.txt` log per UAV into `folder`.
    pub fn save_outputs(&self, folder: &Path) -> Result<()> {
        for uav in &self.uavs {
            uav.save_history(folder)?;
        }
        info!("Wrote {} UAV logs to '{}'", self.uavs.len(), folder.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_input::sim_cmds::SimCommand;

    fn params(n_uav: usize) -> SimParams {
        SimParams {
            dt: 0.5,
            n_uav,
            turn_radius: 10.0,
            x0: 0.0,
            y0: 0.0,
            z0: 100.0,
            v0: 10.0,
            az0: 0.0,
            time_lim: 5.0,
        }
    }

    fn command(time: f64, uav_id: UavId, target_x: f64, target_y: f64) -> SimCommand {
        SimCommand { time, uav_id, target_x, target_y }
    }

    #[test]
    fn creates_requested_uavs_at_start() {
        let sim = Simulation::new(params(3), SimCmds::default());
        assert_eq!(sim.uavs().len(), 3);
        let ids: Vec<UavId> = sim.uavs().iter().map(|u| u.id()).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(sim.uavs().iter().all(|u| u.position() == (0.0, 0.0)));
        assert!(sim.uavs().iter().all(|u| u.altitude() == 100.0));
    }

    #[test]
    fn time_limit_is_inclusive() {
        let mut sim = Simulation::new(params(1), SimCmds::default());
        sim.run().unwrap();
        // t = 0.0, 0.5, ..., 5.0
        assert_eq!(sim.uavs()[0].history().len(), 11);
        assert_eq!(sim.uavs()[0].history().last().map(|h| h.0), Some(5.0));
    }

    #[test]
    fn due_commands_set_targets() {
        let cmds = SimCmds {
            commands: vec![command(0.0, 1, 50.0, 60.0), command(2.0, 0, -40.0, 0.0)],
        };
        let mut sim = Simulation::new(params(2), cmds);
        sim.run().unwrap();
        assert_eq!(sim.uavs()[0].target(), (-40.0, 0.0));
        assert_eq!(sim.uavs()[1].target(), (50.0, 60.0));
    }

    #[test]
    fn commands_after_time_limit_are_not_applied() {
        let cmds = SimCmds {
            commands: vec![command(100.0, 0, 50.0, 50.0)],
        };
        let mut sim = Simulation::new(params(1), cmds);
        sim.run().unwrap();
        assert_eq!(sim.uavs()[0].target(), (0.0, 0.0));
    }

    #[test]
    fn unknown_uav_is_an_error() {
        let cmds = SimCmds {
            commands: vec![command(0.0, 7, 1.0, 1.0)],
        };
        let mut sim = Simulation::new(params(2), cmds);
        match sim.run().unwrap_err() {
            FlightVizError::UnknownUav { id, count } => {
                assert_eq!(id, 7);
                assert_eq!(count, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_uav_id_is_unknown() {
        let cmds = SimCmds {
            commands: vec![command(0.0, -1, 1.0, 1.0)],
        };
        let mut sim = Simulation::new(params(2), cmds);
        assert!(matches!(
            sim.run().unwrap_err(),
            FlightVizError::UnknownUav { id: -1, count: 2 }
        ));
    }
}

// src/simulation/engine.rs
