use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn hallway(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hallway"));
    cmd.current_dir(dir)
        .env_remove("HALLWAY_CONFIG")
        .env_remove("HALLWAY_LOG")
        .args(args);
    cmd
}

fn run_hallway(dir: &Path, args: &[&str]) -> Output {
    hallway(dir, args)
        .output()
        .expect("failed to execute hallway")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn ok_stdout(dir: &Path, args: &[&str]) -> String {
    let output = run_hallway(dir, args);
    assert!(
        output.status.success(),
        "hallway {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    stdout_of(&output)
}

#[test]
fn route_prints_numbered_directions() {
    let tmp = TempDir::new().unwrap();
    let out = ok_stdout(tmp.path(), &["route", "4N5", "Library"]);
    assert!(out.starts_with("Navigation from Room 4N5 to Library (Floor 5):\n\n1. Walk to "));
    assert!(out.contains("2. Take the stairs UP 1 floor to floor 5"));
    assert!(out.contains("4. Enter the Library from the center of the west hallway."));
    let time = Regex::new(r"(?m)^Estimated walking time: \d+\.\d minutes$").unwrap();
    assert!(time.is_match(&out), "{out}");
}

#[test]
fn route_same_room_is_arrival() {
    let tmp = TempDir::new().unwrap();
    let out = ok_stdout(tmp.path(), &["route", "2E12", "2e12"]);
    assert_eq!(
        out.trim_end(),
        "You are already at your destination!\n\nEstimated walking time: 0.0 minutes"
    );
}

#[test]
fn unknown_room_prints_error_line_and_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run_hallway(tmp.path(), &["route", "4N5", "Zzz9"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output).trim_end(),
        "Error: Destination room 'Zzz9' not found."
    );

    let output = run_hallway(tmp.path(), &["path", "nowhere", "4N5"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output).trim_end(),
        "Error: Starting room 'nowhere' not found."
    );
}

#[test]
fn route_json_carries_steps_and_total() {
    let tmp = TempDir::new().unwrap();
    let out = ok_stdout(tmp.path(), &["route", " library ", "7Cafeteria", "--format", "json"]);
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(json["from"], "5Library");
    assert_eq!(json["to"], "7Cafeteria");

    let steps = json["steps"].as_array().expect("steps array");
    let kinds: Vec<&str> = steps.iter().filter_map(|s| s["step"].as_str()).collect();
    assert_eq!(kinds, ["walk", "stairs", "walk", "entry"]);
    assert_eq!(steps[1]["direction"], "UP");
    assert_eq!(steps[1]["floors"], 2);

    let sum: f64 = steps.iter().filter_map(|s| s["minutes"].as_f64()).sum();
    let total = json["total_minutes"].as_f64().expect("total");
    assert!((total - sum).abs() < 1e-9);
}

#[test]
fn rooms_lists_a_single_floor() {
    let tmp = TempDir::new().unwrap();
    let out = ok_stdout(tmp.path(), &["rooms", "--floor", "7"]);
    assert_eq!(out.trim_end(), "Floor 7 (1 rooms, 4 staircases): 7Cafeteria");

    let out = ok_stdout(tmp.path(), &["rooms"]);
    assert_eq!(out.lines().count(), 9);
    assert!(out.lines().next().unwrap().starts_with("Floor 0 (34 rooms, 6 staircases): "));
}

#[test]
fn rooms_json_and_floor_bounds() {
    let tmp = TempDir::new().unwrap();
    let out = ok_stdout(tmp.path(), &["rooms", "--floor", "0", "--format", "json"]);
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let rooms = json.as_array().unwrap();
    assert_eq!(rooms.len(), 34);
    assert!(rooms.iter().any(|r| r["id"] == "0Pool"));

    let output = run_hallway(tmp.path(), &["rooms", "--floor", "9"]);
    assert!(!output.status.success());
}

#[test]
fn path_lists_graph_nodes() {
    let tmp = TempDir::new().unwrap();
    let out = ok_stdout(tmp.path(), &["path", "0Pool", "8Gym"]);
    assert!(out.starts_with("DIRECTIONS:\n"));
    assert!(out.contains("(by stairs)"));
    assert!(out.trim_end().lines().last().unwrap().starts_with("Estimated travel time: "));
}

#[test]
fn interactive_reads_until_quit() {
    let tmp = TempDir::new().unwrap();
    let mut child = hallway(tmp.path(), &["interactive"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn hallway");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"4N5\nLibrary\nquit\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let out = stdout_of(&output);
    assert!(out.contains("Navigation from Room 4N5 to Library (Floor 5):"));
    assert!(out.contains("Thanks for using Hallway!"));
}

#[test]
fn config_flag_and_local_file_change_costs() {
    let tmp = TempDir::new().unwrap();
    let baseline = ok_stdout(tmp.path(), &["route", "2W9", "6W9"]);
    assert!(baseline.trim_end().ends_with("Estimated walking time: 2.0 minutes"));

    let custom = tmp.path().join("slow-stairs.toml");
    fs::write(&custom, "stair_minutes_per_floor = 1.5\n").unwrap();
    let out = ok_stdout(
        tmp.path(),
        &["route", "2W9", "6W9", "--config", custom.to_str().unwrap()],
    );
    assert!(out.trim_end().ends_with("Estimated walking time: 6.0 minutes"));

    fs::write(tmp.path().join("hallway.toml"), "stair_minutes_per_floor = 1.0\n").unwrap();
    let out = ok_stdout(tmp.path(), &["route", "2W9", "6W9"]);
    assert!(out.trim_end().ends_with("Estimated walking time: 4.0 minutes"));
}

#[test]
fn bad_config_is_reported_on_stderr() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("hallway.toml"), "walking_speed_feet_per_minute = 0.0\n").unwrap();
    let output = run_hallway(tmp.path(), &["route", "4N5", "4N6"]);
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
    assert!(!output.stderr.is_empty());
}
