// tests/flight_paths_test.rs

use std::fs;
use std::path::Path;

use uav_flight_viz::data_input::discovery::discover_uav_ids;
use uav_flight_viz::plot_framework::categorical_color;
use uav_flight_viz::plot_functions::plot_flight_paths::{
    build_flight_paths_config, default_commands_path,
};

fn write_log(dir: &Path, name: &str, samples: usize, x_offset: f64) {
    let mut content = String::from("time x y azimuth\n");
    for i in 0..samples {
        content.push_str(&format!("{:.2} {:.2} {:.2} {:.2}\n", i as f64 * 0.1, x_offset + i as f64, i as f64, 45.0));
    }
    fs::write(dir.join(name), content).unwrap();
}

fn write_commands(dir: &Path, content: &str) {
    let path = default_commands_path(dir);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovery_sorts_ids_and_skips_foreign_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["UAV10.txt", "UAV2.txt", "UAV7.txt", "UAVx.txt", "notes.txt", "UAV3.csv"] {
            write_log(dir.path(), name, 2, 0.0);
        }
        fs::create_dir(dir.path().join("UAV99.txt")).unwrap();

        let ids = discover_uav_ids(dir.path()).unwrap();
        assert_eq!(ids, vec![2, 7, 10]);
    }

    #[test]
    fn negative_ids_are_discovered_and_plotted_first() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "UAV3.txt", 4, 0.0);
        write_log(dir.path(), "UAV-1.txt", 4, 10.0);
        write_commands(dir.path(), "0 -1 10 20\n0 3 5 5\n");

        assert_eq!(discover_uav_ids(dir.path()).unwrap(), vec![-1, 3]);

        let config =
            build_flight_paths_config(dir.path(), &default_commands_path(dir.path())).unwrap();
        assert_eq!(config.tracks[0].label, "UAV -1");
        assert_eq!(config.tracks[0].target, Some((10.0, 20.0)));
        assert_eq!(config.tracks[1].uav_id, 3);
    }

    #[test]
    fn config_follows_ascending_id_order() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "UAV5.txt", 30, 50.0);
        write_log(dir.path(), "UAV0.txt", 10, 0.0);
        write_log(dir.path(), "UAV12.txt", 45, -50.0);
        write_commands(dir.path(), "1 0 10 10\n2 12 -20 30\n");

        let config =
            build_flight_paths_config(dir.path(), &default_commands_path(dir.path())).unwrap();

        let ids: Vec<i64> = config.tracks.iter().map(|t| t.uav_id).collect();
        assert_eq!(ids, vec![0, 5, 12]);
        let labels: Vec<&str> = config.tracks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["UAV 0", "UAV 5", "UAV 12"]);

        for (index, track) in config.tracks.iter().enumerate() {
            let want = categorical_color(index, 3);
            assert_eq!((track.color.0, track.color.1, track.color.2), (want.0, want.1, want.2));
        }

        // ceil(L / 20) arrows per track
        let arrows: Vec<usize> = config.tracks.iter().map(|t| t.arrows.len()).collect();
        assert_eq!(arrows, vec![1, 2, 3]);

        assert_eq!(config.x_range, -100.0..180.0);
        assert_eq!(config.y_range, -100.0..180.0);
        assert_eq!(config.title, "UAV Flight Paths");
    }

    #[test]
    fn missing_target_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "UAV1.txt", 5, 0.0);
        write_log(dir.path(), "UAV2.txt", 5, 0.0);
        write_commands(dir.path(), "0 2 10.0 20.0\n3 2 15.0 25.0\n");

        let config =
            build_flight_paths_config(dir.path(), &default_commands_path(dir.path())).unwrap();

        assert_eq!(config.tracks.len(), 2);
        assert_eq!(config.tracks[0].target, None);
        assert_eq!(config.tracks[1].target, Some((15.0, 25.0)));
    }

    #[test]
    fn blank_command_file_gives_no_targets() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "UAV0.txt", 3, 0.0);
        write_commands(dir.path(), "\n\n   \n");

        let config =
            build_flight_paths_config(dir.path(), &default_commands_path(dir.path())).unwrap();
        assert!(config.tracks.iter().all(|t| t.target.is_none()));
    }

    #[test]
    fn header_only_log_is_left_out() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "UAV0.txt", 0, 0.0);
        write_log(dir.path(), "UAV1.txt", 4, 0.0);
        write_commands(dir.path(), "0 0 1 1\n");

        let config =
            build_flight_paths_config(dir.path(), &default_commands_path(dir.path())).unwrap();
        assert_eq!(config.tracks.len(), 1);
        assert_eq!(config.tracks[0].uav_id, 1);
        // UAV 1 keeps the second of two color slots
        let want = categorical_color(1, 2);
        let got = config.tracks[0].color;
        assert_eq!((got.0, got.1, got.2), (want.0, want.1, want.2));
    }

    #[test]
    fn malformed_log_aborts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("UAV0.txt"), "time x y azimuth\n0 1 2\n").unwrap();
        write_commands(dir.path(), "");

        let err = build_flight_paths_config(dir.path(), &default_commands_path(dir.path()))
            .err()
            .unwrap();
        assert!(err.to_string().contains(":2: expected 4 fields, found 3"));
    }

    #[test]
    fn missing_command_file_aborts() {
        let dir = tempfile::tempdir().unwrap();
        write_log(dir.path(), "UAV0.txt", 3, 0.0);

        let result = build_flight_paths_config(dir.path(), &default_commands_path(dir.path()));
        assert!(result.is_err());
    }
}

// tests/flight_paths_test.rs
