// src/main.rs

use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{error, LevelFilter};
use std::error::Error;
use std::path::{Path, PathBuf};

use uav_flight_viz::constants::DEFAULT_PLOT_FILE;
use uav_flight_viz::crate_version;
use uav_flight_viz::data_input::sim_cmds::SimCmds;
use uav_flight_viz::data_input::sim_params::SimParams;
use uav_flight_viz::plot_functions::plot_flight_paths::{default_commands_path, plot_flight_paths};
use uav_flight_viz::simulation::engine::Simulation;

#[derive(Parser, Debug)]
#[command(name = "uav-flight-viz")]
#[command(about = "Simulate target-seeking UAVs and plot their recorded flight paths")]
#[command(version = crate_version())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot every UAV<id>.txt log in a directory together with the final targets
    Plot {
        /// Directory holding the UAV<id>.txt logs
        #[arg(short, long, default_value = ".")]
        data_dir: PathBuf,

        /// Command file with the final targets [default: <data-dir>/src/SimCmds.txt]
        #[arg(short, long)]
        commands: Option<PathBuf>,

        /// Output image; a .svg extension renders SVG, anything else PNG
        /// [default: <data-dir>/UAV_FlightPaths.png]
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run the flight simulation and write one UAV<id>.txt log per UAV
    Simulate {
        /// Simulation parameter file (key = value)
        params: PathBuf,

        /// Command file (time uav_id target_x target_y)
        commands: PathBuf,

        /// Folder for the UAV logs
        #[arg(default_value = ".")]
        output_folder: PathBuf,
    },
}

fn run_simulation(
    params: &Path,
    commands: &Path,
    output_folder: &Path,
) -> Result<(), Box<dyn Error>> {
    let params = SimParams::parse(params)?;
    let cmds = SimCmds::parse(commands)?;
    let mut sim = Simulation::new(params, cmds);
    sim.run()?;
    sim.save_outputs(output_folder)?;
    Ok(())
}

fn main() {
    // Logging setup, RUST_LOG overrides the default level
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Plot {
            data_dir,
            commands,
            output,
        } => {
            let commands = commands.unwrap_or_else(|| default_commands_path(&data_dir));
            let output = output.unwrap_or_else(|| data_dir.join(DEFAULT_PLOT_FILE));
            if let Err(e) = plot_flight_paths(&data_dir, &commands, &output) {
                error!("Plotting failed: {e}");
                std::process::exit(1);
            }
        }
        Command::Simulate {
            params,
            commands,
            output_folder,
        } => match run_simulation(&params, &commands, &output_folder) {
            Ok(()) => println!("Simulation completed successfully."),
            Err(e) => {
                eprintln!("Error during simulation: {e}");
                std::process::exit(1);
            }
        },
    }
}

// src/main.rs
