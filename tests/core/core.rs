use hallway::core::config::{self, PlannerConfig};
use hallway::core::error::{HallwayError, Role};
use hallway::core::ids::{RoomId, RoomKey};
use hallway::core::layout::StairKind;
use hallway::core::planner::Step;
use hallway::core::render;
use hallway::core::router::Router;
use std::fs;
use tempfile::tempdir;

fn router() -> Router {
    Router::new(&PlannerConfig::default()).expect("router builds")
}

fn id(raw: &str) -> RoomId {
    RoomKey::decode(raw).expect("well-formed id").encode()
}

#[test]
fn every_room_routes_to_itself_for_free() {
    let router = router();
    for room in router.layout().rooms() {
        let route = router.plan(&room.id, &room.id).expect("plan");
        assert!(route.is_arrived(), "{}", room.id);
        assert_eq!(route.total_minutes, 0.0);
        let text = render::render_route(&route, router.layout()).to_string();
        assert!(text.starts_with("You are already at your destination!"));
        assert!(text.ends_with("Estimated walking time: 0.0 minutes"));
    }
}

#[test]
fn building_room_and_staircase_counts() {
    let router = router();
    let layout = router.layout();
    assert_eq!(layout.rooms_on(2).count(), 74);
    assert_eq!(layout.rooms_on(6).count(), 74);
    let cafeteria_floor: Vec<&str> = layout.rooms_on(7).map(|r| r.id.as_str()).collect();
    assert_eq!(cafeteria_floor, ["7Cafeteria"]);
    for floor in 0..=8u8 {
        let expected = if floor == 7 { 4 } else { 6 };
        assert_eq!(layout.staircases_on(floor).count(), expected, "floor {floor}");
    }
}

#[test]
fn same_floor_cost_is_symmetric() {
    let router = router();
    let layout = router.layout();
    for floor in [0u8, 1, 3, 5, 8] {
        let rooms: Vec<_> = layout.rooms_on(floor).step_by(7).collect();
        for a in &rooms {
            for b in &rooms {
                let there = router.plan(&a.id, &b.id).unwrap().total_minutes;
                let back = router.plan(&b.id, &a.id).unwrap().total_minutes;
                assert_eq!(there, back, "{} <-> {}", a.id, b.id);
            }
        }
    }
}

#[test]
fn cross_floor_cost_is_minimum_over_shared_staircases() {
    let router = router();
    let layout = router.layout();
    let costs = router.costs();
    let picks = ["0W5", "0Pool", "1Gym", "1E3", "2C4", "3LockerRoom", "4S9", "5Library", "6E20", "7Cafeteria", "8Gym", "8N9"];
    for a in picks {
        for b in picks {
            let (from, to) = (layout.room(&id(a)).unwrap(), layout.room(&id(b)).unwrap());
            if from.floor == to.floor {
                continue;
            }
            let route = router.plan(&from.id, &to.id).unwrap();
            let best = layout
                .staircases()
                .iter()
                .filter(|s| s.connects(from.floor, to.floor))
                .map(|s| {
                    costs.walk_minutes(&from.position, &s.coordinate)
                        + costs.walk_minutes(&s.coordinate, &to.position)
                })
                .fold(f64::INFINITY, f64::min);
            let expected = best + f64::from(from.floor.abs_diff(to.floor)) * 0.5;
            assert!(
                (route.total_minutes - expected).abs() < 1e-9,
                "{a} -> {b}: {} vs {}",
                route.total_minutes,
                expected
            );
        }
    }
}

#[test]
fn floor_seven_routes_only_use_corner_stairs() {
    let router = router();
    let layout = router.layout();
    for room in layout.rooms().iter().filter(|r| r.floor != 7) {
        for (from, to) in [(&room.id, &id("7Cafeteria")), (&id("7Cafeteria"), &room.id)] {
            let route = router.plan(from, to).unwrap();
            let stair = route.staircase().expect("cross-floor route uses stairs");
            assert_eq!(stair.kind(), StairKind::Corner, "{from} -> {to}");
        }
    }
}

#[test]
fn middle_stairs_still_used_elsewhere() {
    let router = router();
    // 2W9 and 6W9 both sit on the west middle staircase.
    let route = router.route("2W9", "6W9").unwrap();
    assert_eq!(route.staircase().map(|s| s.kind()), Some(StairKind::Middle));
    assert_eq!(route.total_minutes, 2.0);
}

#[test]
fn resolver_is_case_and_whitespace_insensitive() {
    let router = router();
    let ids: Vec<RoomId> = [" library ", "Library", "LIBRARY"]
        .iter()
        .map(|raw| router.resolve(raw).unwrap())
        .collect();
    assert!(ids.iter().all(|i| i.as_str() == "5Library"));
}

#[test]
fn unknown_identifier_names_exact_string() {
    let router = router();
    match router.resolve("Zzz9") {
        Err(HallwayError::RoomNotFound(raw)) => assert_eq!(raw, "Zzz9"),
        other => panic!("expected RoomNotFound, got {other:?}"),
    }
    match router.route("4N5", "Zzz9") {
        Err(HallwayError::UnresolvedRoom { role, input }) => {
            assert_eq!(role, Role::Destination);
            assert_eq!(input, "Zzz9");
        }
        other => panic!("expected UnresolvedRoom, got {other:?}"),
    }
}

#[test]
fn scenario_fourth_floor_to_library() {
    let router = router();
    let route = router.route("4N5", "Library").unwrap();
    assert_eq!(route.steps.len(), 4);
    assert!(matches!(route.steps[0], Step::Walk { .. }));
    assert!(matches!(route.steps[1], Step::Stairs { .. }));
    assert!(matches!(route.steps[2], Step::Walk { .. }));
    assert!(matches!(route.steps[3], Step::Entry { .. }));
    let sum: f64 = route.steps.iter().map(Step::minutes).sum();
    assert!((route.total_minutes - sum).abs() < 1e-12);

    let text = router.directions("4N5", "Library").unwrap().to_string();
    assert!(text.contains("4. Enter the Library from the center of the west hallway."));
    let expected = format!("Estimated walking time: {:.1} minutes", sum);
    assert!(text.ends_with(&expected), "{text}");
}

#[test]
fn scenario_same_room() {
    let router = router();
    assert_eq!(
        router.describe("2E12", "2E12").unwrap(),
        "You are already at your destination!\n\nEstimated walking time: 0.0 minutes"
    );
}

#[test]
fn graph_and_planner_agree_for_every_floor_pair() {
    let router = router();
    let layout = router.layout();
    let reps: Vec<RoomId> = (0..=8u8)
        .filter_map(|f| layout.rooms_on(f).last().map(|r| r.id.clone()))
        .chain(["0N1", "2C1", "4E24", "6S5", "8W12"].iter().map(|raw| id(raw)))
        .collect();
    for a in &reps {
        for b in &reps {
            let planned = router.plan(a, b).unwrap().total_minutes;
            let searched = router.graph().shortest_path(a, b).unwrap().total_minutes;
            assert!((planned - searched).abs() < 1e-9, "{a} -> {b}");
        }
    }
}

#[test]
fn router_is_shared_between_threads() {
    let router = router();
    let expected = router.route("0Pool", "8Gym").unwrap().total_minutes;
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| router.route("0Pool", "8Gym").unwrap().total_minutes))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn config_file_changes_stair_time() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("hallway.toml");
    fs::write(&path, "stair_minutes_per_floor = 1.0\n").unwrap();

    let loaded = config::load_config(Some(path.as_path()), tmp.path()).expect("load config");
    assert_eq!(loaded.stair_minutes_per_floor, 1.0);

    let router = Router::new(&loaded).unwrap();
    let route = router.route("2W9", "6W9").unwrap();
    assert_eq!(route.total_minutes, 4.0);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("nope.toml");
    let err = config::load_config(Some(missing.as_path()), tmp.path()).unwrap_err();
    assert!(matches!(err, HallwayError::ConfigError(_)));
}

#[test]
fn working_directory_config_is_picked_up() {
    let tmp = tempdir().expect("tempdir");
    fs::write(tmp.path().join(config::CONFIG_FILE_NAME), "feet_per_unit = 35.0\n").unwrap();
    if std::env::var(config::CONFIG_ENV).is_ok() {
        return;
    }
    let loaded = config::load_config(None, tmp.path()).unwrap();
    assert_eq!(loaded.feet_per_unit, 35.0);
}
